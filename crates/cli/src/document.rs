//! Query documents: a JSON encoding of the predicate tree.
//!
//! ```json
//! {"and": [
//!     {"time": {"start": "2011-08-09 07:23", "end": "2011-08-09 12:40"}},
//!     {"event_type": "ar"},
//!     {"param": {"name": "AR_NumSpots", "op": "<", "value": 5}}
//! ]}
//! ```

use hek_query::Attr;
use std::path::Path;
use tracing::info;

use crate::error::CliError;

pub fn load(path: impl AsRef<Path>) -> Result<Attr, CliError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let attr = parse(&source)?;
    info!("Loaded query document {} (root: {})", path.display(), attr.kind());
    Ok(attr)
}

pub fn parse(source: &str) -> Result<Attr, CliError> {
    Ok(serde_json::from_str(source)?)
}
