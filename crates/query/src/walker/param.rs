use crate::{
    ast::ParamAttr,
    error::Result,
    walker::{Apply, Block, WalkContext},
};

impl Apply for ParamAttr {
    fn apply(&self, ctx: &mut WalkContext, block: &mut Block) -> Result<()> {
        let id = ctx.next_param();
        block.insert(format!("param{id}"), self.name.as_str());
        block.insert(format!("op{id}"), self.op.as_str());
        block.insert(format!("value{id}"), self.value.clone());
        Ok(())
    }
}
