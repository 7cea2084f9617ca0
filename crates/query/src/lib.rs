//! Typed queries against the Heliophysics Event Knowledgebase.
//!
//! Predicates from [`ast`] (usually built through the field tables in
//! [`catalog`]) are combined with `&` and `|`, then [`Walker::create`] turns
//! the tree into one parameter [`Block`] per request.

pub mod ast;
pub mod catalog;
pub mod error;
pub mod macros;
pub mod time;
pub mod value;
pub mod walker;

pub use ast::{Attr, CompareOp, Contains, EventType, ParamAttr, SpatialRegion, TimeRange};
pub use error::{QueryError, Result};
pub use value::Value;
pub use walker::{Block, Walker};

/// Serializes `attr` with a fresh walker.
pub fn serialize(attr: &Attr) -> Result<Vec<Block>> {
    Walker::new().create(attr)
}
