//! ISO-8601 timestamps as sent by the trip API.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// A point in time parsed from an ISO-8601 string.
///
/// Accepted forms:
/// - RFC 3339 with offset: `2024-03-01T10:15:00Z`, `2024-03-01T10:15:00.5+05:30`
/// - Naive date-time: `2024-03-01T10:15:00`, `2024-03-01 10:15:00` (read as UTC)
/// - Date only: `2024-03-01` (midnight UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

/// Raw value that could not be read as a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid ISO-8601 timestamp '{0}'")]
pub struct InvalidTimestamp(pub String);

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

impl Timestamp {
    /// Parse any of the accepted ISO-8601 forms.
    pub fn parse(raw: &str) -> Result<Self, InvalidTimestamp> {
        let trimmed = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(Utc.from_utc_datetime(&naive)));
            }
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(Utc.from_utc_datetime(&naive)))
            .ok_or_else(|| InvalidTimestamp(raw.to_string()))
    }

    /// The instant in UTC.
    pub fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }

    /// Convert into the given zone for display.
    pub fn in_zone<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        self.0.with_timezone(tz)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}
