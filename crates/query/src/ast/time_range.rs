use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{error::Result, time};

/// Restricts a query to events between `start` and `end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(with = "time::flexible")]
    pub start: NaiveDateTime,
    #[serde(with = "time::flexible")]
    pub end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Builds a range from two strings in any form `time::parse_time` accepts.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(time::parse_time(start)?, time::parse_time(end)?))
    }
}
