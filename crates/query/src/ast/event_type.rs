use serde::{Deserialize, Serialize};

use crate::ast::Attr;

/// Selects one or more event types by their two-letter codes.
///
/// Several codes are kept comma-joined in a single selector, which is the
/// form the catalog expects in `event_type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType {
    pub code: String,
}

impl EventType {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Merges with another selector into one covering both codes.
    ///
    /// Returns `None` when `other` is not an event type selector, in which
    /// case the caller falls back to a generic disjunction.
    pub fn try_merge(&self, other: &Attr) -> Option<EventType> {
        match other {
            Attr::EventType(other) => Some(EventType::new(format!("{},{}", self.code, other.code))),
            _ => None,
        }
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.code.split(',')
    }
}

impl From<EventType> for Attr {
    fn from(ev: EventType) -> Self {
        Attr::EventType(ev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CompareOp, ParamAttr};

    #[test]
    fn test_try_merge_joins_codes() {
        let ar = EventType::new("ar");
        let merged = ar.try_merge(&EventType::new("fl").into()).unwrap();
        assert_eq!(merged.code, "ar,fl");
        assert_eq!(merged.codes().collect::<Vec<_>>(), vec!["ar", "fl"]);
    }

    #[test]
    fn test_try_merge_ignores_other_kinds() {
        let ar = EventType::new("ar");
        let param = Attr::Param(ParamAttr::new("AR_NumSpots", CompareOp::Lt, 5));
        assert!(ar.try_merge(&param).is_none());
    }
}
