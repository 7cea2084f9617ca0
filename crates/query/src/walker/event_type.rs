use crate::{
    ast::EventType,
    error::{QueryError, Result},
    walker::{Apply, Block, WalkContext, block::KEY_EVENT_TYPE},
};

impl Apply for EventType {
    fn apply(&self, _ctx: &mut WalkContext, block: &mut Block) -> Result<()> {
        if block.is_contains_mode() {
            return Err(QueryError::MutuallyExclusiveSelection);
        }
        block.insert(KEY_EVENT_TYPE, self.code.as_str());
        Ok(())
    }
}
