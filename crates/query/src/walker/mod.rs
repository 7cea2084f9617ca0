//! Turns a query tree into parameter blocks.
//!
//! Two kinds of handling exist. *Creating* produces fresh blocks: a
//! disjunction creates blocks for each branch and concatenates them, every
//! other node gets one new block. *Applying* writes a node into a block that
//! already exists: a conjunction applies each child to the same block, leaves
//! write their keys through [`Apply`]. A disjunction cannot be applied, so an
//! `Or` under an `And` is rejected.

use tracing::{debug, warn};

use crate::{
    ast::Attr,
    error::{QueryError, Result},
};

pub mod block;
pub mod contains;
pub mod event_type;
pub mod param;
pub mod spatial;
pub mod time_range;

pub use block::Block;

/// A leaf's contribution to a block.
pub trait Apply {
    fn apply(&self, ctx: &mut WalkContext, block: &mut Block) -> Result<()>;
}

/// Numbering state for one `Walker::create` call.
///
/// Comparisons and contains checks write numbered keys; the counters keep
/// sibling nodes from reusing an index. A new context is made per call, so
/// independent queries never share numbering.
#[derive(Debug, Default)]
pub struct WalkContext {
    next_param: usize,
    next_event_type: usize,
}

impl WalkContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index for the next `paramN`/`opN`/`valueN` triple.
    pub fn next_param(&mut self) -> usize {
        let id = self.next_param;
        self.next_param += 1;
        id
    }

    /// Reserves `count` consecutive `event_typeN` indices, returning the first.
    pub fn reserve_event_types(&mut self, count: usize) -> usize {
        let first = self.next_event_type;
        self.next_event_type += count;
        first
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Walker;

impl Walker {
    pub fn new() -> Self {
        Self
    }

    /// Serializes `attr` into one block per disjunctive branch.
    ///
    /// Fails without returning partial output if any branch cannot be built.
    pub fn create(&self, attr: &Attr) -> Result<Vec<Block>> {
        let mut ctx = WalkContext::new();
        let blocks = self.create_with(attr, &mut ctx).inspect_err(|err| {
            warn!(root = attr.kind(), "Rejected query tree: {err}");
        })?;

        debug!(root = attr.kind(), blocks = blocks.len(), "Serialized query tree");
        Ok(blocks)
    }

    pub fn create_with(&self, attr: &Attr, ctx: &mut WalkContext) -> Result<Vec<Block>> {
        match attr {
            Attr::Or(children) => {
                let mut blocks = Vec::with_capacity(children.len());
                for child in children {
                    blocks.extend(self.create_with(child, ctx)?);
                }
                Ok(blocks)
            }
            _ => {
                let mut block = Block::new();
                self.apply(attr, ctx, &mut block)?;
                Ok(vec![block])
            }
        }
    }

    /// Writes `attr` into an existing block.
    pub fn apply(&self, attr: &Attr, ctx: &mut WalkContext, block: &mut Block) -> Result<()> {
        match attr {
            Attr::And(children) => children
                .iter()
                .try_for_each(|child| self.apply(child, ctx, block)),
            Attr::Or(children) => Err(QueryError::UnsupportedCombination(format!(
                "or with {} branches",
                children.len()
            ))),
            Attr::Param(p) => p.apply(ctx, block),
            Attr::Time(t) => t.apply(ctx, block),
            Attr::Spatial(s) => s.apply(ctx, block),
            Attr::EventType(e) => e.apply(ctx, block),
            Attr::Contains(c) => c.apply(ctx, block),
        }
    }
}
