//! Timestamp parsing and the fixed textual layout used on the wire.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{QueryError, Result};

/// Layout of `event_starttime` / `event_endtime`. No fractional seconds, no zone suffix.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Parses a timestamp from any of the accepted textual forms.
///
/// RFC 3339 input is converted to UTC; date-only input resolves to midnight.
pub fn parse_time(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| QueryError::TimeParse {
            input: raw.to_string(),
        })
}

pub fn format_time(ts: &NaiveDateTime) -> String {
    ts.format(WIRE_FORMAT).to_string()
}

/// Serde adapter: writes the wire layout, reads anything `parse_time` accepts.
pub mod flexible {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_time(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw).map_err(D::Error::custom)
    }
}
