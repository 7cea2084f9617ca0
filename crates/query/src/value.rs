use serde::{Deserialize, Serialize};
use std::{fmt, hash::Hash};

/// A literal carried by a field comparison or written into a parameter block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Boolean(bool),
    String(String),
}

// Floats compare by bit pattern so equality agrees with `Hash`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        use Value::*;
        std::mem::discriminant(self).hash(state);
        match self {
            Int(v) => v.hash(state),
            Float(v) => v.to_bits().hash(state),
            Boolean(v) => v.hash(state),
            String(v) => v.hash(state),
        }
    }
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_is_plain_text() {
        assert_eq!(Value::from(5).to_string(), "5");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("B-class").to_string(), "B-class");
        assert_eq!(Value::from(true).to_string(), "true");
    }

    #[test]
    fn test_serializes_untagged() {
        let json = serde_json::to_string(&vec![Value::from(5), Value::from("x")]).unwrap();
        assert_eq!(json, r#"[5,"x"]"#);

        let back: Vec<Value> = serde_json::from_str("[1, 1.5, false, \"ar\"]").unwrap();
        assert_eq!(
            back,
            vec![
                Value::Int(1),
                Value::Float(1.5),
                Value::Boolean(false),
                Value::String("ar".into()),
            ]
        );
    }

    #[test]
    fn test_equal_values_deduplicate() {
        let values: HashSet<Value> = [
            Value::from(5),
            Value::Int(5),
            Value::from(0.0),
            Value::from(-0.0),
            Value::from(f64::NAN),
            Value::from(f64::NAN),
            Value::from("ar"),
            Value::from("ar".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(values.len(), 5);
        assert_ne!(Value::from(0.0), Value::from(-0.0));
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }
}
