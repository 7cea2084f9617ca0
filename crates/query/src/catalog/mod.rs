//! Named catalog fields and event types.
//!
//! Fields don't compare themselves with values; they build comparison
//! predicates through explicit methods:
//!
//! ```ignore
//! use hek_query::catalog::{Comparable, ar};
//! let query = ar::event() & ar::NUM_SPOTS.less_than(5);
//! ```

use crate::{
    ast::{Attr, CompareOp, ParamAttr},
    event_types,
    value::Value,
};

pub mod fields;

pub use fields::*;

/// Builder methods shared by every catalog field.
pub trait Comparable {
    /// Parameter name as the remote catalog spells it.
    fn name(&self) -> &str;

    fn compare(&self, op: CompareOp, value: impl Into<Value>) -> Attr {
        ParamAttr::new(self.name(), op, value).into()
    }

    fn less_than(&self, value: impl Into<Value>) -> Attr {
        self.compare(CompareOp::Lt, value)
    }

    fn less_or_equal(&self, value: impl Into<Value>) -> Attr {
        self.compare(CompareOp::Le, value)
    }

    fn greater_than(&self, value: impl Into<Value>) -> Attr {
        self.compare(CompareOp::Gt, value)
    }

    fn greater_or_equal(&self, value: impl Into<Value>) -> Attr {
        self.compare(CompareOp::Ge, value)
    }

    fn equals(&self, value: impl Into<Value>) -> Attr {
        self.compare(CompareOp::Eq, value)
    }

    fn not_equals(&self, value: impl Into<Value>) -> Attr {
        self.compare(CompareOp::Ne, value)
    }
}

/// A textual field; also supports `like` patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringField {
    name: &'static str,
}

impl StringField {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub fn like(&self, pattern: impl Into<String>) -> Attr {
        self.compare(CompareOp::Like, pattern.into())
    }
}

impl Comparable for StringField {
    fn name(&self) -> &str {
        self.name
    }
}

/// A numeric field. Supports the relational comparisons only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberField {
    name: &'static str,
}

impl NumberField {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Comparable for NumberField {
    fn name(&self) -> &str {
        self.name
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    /// Set when the category is also an event type.
    pub event_code: Option<&'static str>,
    pub fields: &'static [StringField],
}

impl Category {
    pub fn event(&self) -> Option<Attr> {
        self.event_code.map(|code| crate::ast::EventType::new(code).into())
    }
}

event_types! {
    /// Coronal holes.
    ch,
    /// Coronal waves.
    cw,
    fe,
    fa,
    /// Loops.
    lp,
    os,
    /// Coronal jets.
    cj,
    pg,
    ot,
    nr,
    sp,
    cr,
    er,
}

/// Event type codes known to the catalog.
pub const EVENT_CODES: &[&str] = &[
    "ar", "ce", "cd", "ch", "cw", "fi", "fe", "fa", "fl", "lp", "os", "ss", "ef", "cj", "pg", "ot",
    "nr", "sg", "sp", "cr", "cc", "er", "to",
];

/// Finds a category by its label, ignoring case.
pub fn category(name: &str) -> Option<&'static Category> {
    CATEGORIES
        .iter()
        .find(|cat| cat.name.eq_ignore_ascii_case(name))
}

/// Finds a field by its catalog parameter name, e.g. `AR_NumSpots`.
pub fn lookup(name: &str) -> Option<StringField> {
    CATEGORIES
        .iter()
        .flat_map(|cat| cat.fields.iter())
        .find(|field| field.name == name)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::EventType;

    #[test]
    fn test_builders_produce_comparisons() {
        assert_eq!(
            ar::NUM_SPOTS.less_than(5),
            Attr::Param(ParamAttr::new("AR_NumSpots", CompareOp::Lt, 5))
        );
        assert_eq!(
            fl::GOES_CLS.like("X%"),
            Attr::Param(ParamAttr::new("FL_GOESCls", CompareOp::Like, "X%"))
        );
        assert_eq!(
            frm::NAME.not_equals("SPoCA"),
            Attr::Param(ParamAttr::new("FRM_Name", CompareOp::Ne, "SPoCA"))
        );
    }

    #[test]
    fn test_number_field() {
        let field = NumberField::new("Custom_Count");
        assert_eq!(
            field.greater_or_equal(3),
            Attr::Param(ParamAttr::new("Custom_Count", CompareOp::Ge, 3))
        );
    }

    #[test]
    fn test_event_categories() {
        assert_eq!(ar::EVENT_CODE, "ar");
        assert_eq!(ar::event(), Attr::EventType(EventType::new("ar")));
        assert_eq!(ch(), Attr::EventType(EventType::new("ch")));
        assert_eq!(wave::CATEGORY.event_code, None);
        assert!(wave::CATEGORY.event().is_none());
    }

    #[test]
    fn test_every_event_category_is_a_known_code() {
        for cat in CATEGORIES {
            if let Some(code) = cat.event_code {
                assert!(EVENT_CODES.contains(&code), "unknown code {code}");
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("AR_NumSpots"), Some(ar::NUM_SPOTS));
        assert_eq!(lookup("BoundBox_C1LL"), Some(bound_box::C1_LL));
        assert_eq!(lookup("NoSuchField"), None);
    }

    #[test]
    fn test_category_lookup_ignores_case() {
        assert_eq!(category("obs").map(|c| c.name), Some("OBS"));
        assert_eq!(category("Fl").map(|c| c.fields.len()), Some(11));
        assert!(category("xx").is_none());
    }
}
