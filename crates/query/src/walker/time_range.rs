use crate::{
    ast::TimeRange,
    error::Result,
    time::format_time,
    walker::{
        Apply, Block, WalkContext,
        block::{KEY_END_TIME, KEY_START_TIME},
    },
};

impl Apply for TimeRange {
    /// Overwrites any range written earlier into the same block.
    fn apply(&self, _ctx: &mut WalkContext, block: &mut Block) -> Result<()> {
        block.insert(KEY_START_TIME, format_time(&self.start));
        block.insert(KEY_END_TIME, format_time(&self.end));
        Ok(())
    }
}
