use serde::Serialize;
use std::collections::BTreeMap;

use crate::value::Value;

pub const KEY_TYPE: &str = "type";
pub const CONTAINS_MODE: &str = "contains";
pub const KEY_EVENT_TYPE: &str = "event_type";
pub const KEY_START_TIME: &str = "event_starttime";
pub const KEY_END_TIME: &str = "event_endtime";
pub const KEY_COORD_SYS: &str = "event_coordsys";

/// One flat set of request parameters. Each block becomes one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Block {
    params: BTreeMap<String, Value>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether a contains check has switched this block to `type=contains`.
    pub fn is_contains_mode(&self) -> bool {
        self.get(KEY_TYPE).and_then(Value::as_str) == Some(CONTAINS_MODE)
    }

    /// Flattens the block into textual pairs ready for URL encoding.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Block {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut block = Block::new();
        for (k, v) in iter {
            block.insert(k, v);
        }
        block
    }
}
