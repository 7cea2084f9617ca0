use crate::{
    ast::SpatialRegion,
    error::Result,
    walker::{Apply, Block, WalkContext, block::KEY_COORD_SYS},
};

impl Apply for SpatialRegion {
    fn apply(&self, _ctx: &mut WalkContext, block: &mut Block) -> Result<()> {
        block.insert("x1", self.x1);
        block.insert("y1", self.y1);
        block.insert("x2", self.x2);
        block.insert("y2", self.y2);
        block.insert(KEY_COORD_SYS, self.coord_sys.as_str());
        Ok(())
    }
}
