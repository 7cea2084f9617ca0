use serde::{Deserialize, Serialize};

/// Asks for events whose type is one of `types`, sent as numbered
/// `event_typeN` keys. Order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contains {
    pub types: Vec<String>,
}

impl Contains {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }
}
