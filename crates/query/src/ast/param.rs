use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{error::QueryError, value::Value};

/// Comparison operators understood by the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "like")]
    Like,
}

impl CompareOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Like => "like",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompareOp {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "<" => Ok(CompareOp::Lt),
            "<=" => Ok(CompareOp::Le),
            ">" => Ok(CompareOp::Gt),
            ">=" => Ok(CompareOp::Ge),
            "=" => Ok(CompareOp::Eq),
            "!=" => Ok(CompareOp::Ne),
            "like" => Ok(CompareOp::Like),
            other => Err(QueryError::Config(format!("Unknown operator: {other}"))),
        }
    }
}

/// A single `name <op> value` constraint on a catalog field.
///
/// Equality is the plain attribute tuple. The type is intentionally neither
/// `Eq`, `Hash` nor `PartialOrd`: ordering belongs to the values being
/// compared on the server, not to the predicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamAttr {
    pub name: String,
    pub op: CompareOp,
    pub value: Value,
}

impl ParamAttr {
    pub fn new(name: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            op,
            value: value.into(),
        }
    }

    /// Two comparisons collide when they constrain the same field with the same operator.
    pub fn collides(&self, other: &ParamAttr) -> bool {
        self.name == other.name && self.op == other.op
    }
}
