//! # Zone-Labelled Date Formats
//!
//! The invoicing endpoints use two date formats that carry a time-zone
//! abbreviation instead of an offset: `2014-02-27 PST` and
//! `2014-02-27 14:33:05 PST`. Everything else on the wire is RFC 3339 and
//! maps to `chrono::DateTime<Utc>` directly.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Error parsing a zone-labelled date or datetime
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid zone-labelled date: {0}")]
pub struct ParseDateError(String);

/// Calendar date with a time-zone label, e.g. `2014-02-27 PST`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedDate {
    pub date: NaiveDate,
    /// Zone abbreviation as the service expects it, e.g. `PST` or `GMT`
    pub zone: String,
}

impl ZonedDate {
    pub fn new(date: NaiveDate, zone: impl Into<String>) -> Self {
        Self {
            date,
            zone: zone.into(),
        }
    }
}

impl fmt::Display for ZonedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format(DATE_FORMAT), self.zone)
    }
}

impl FromStr for ZonedDate {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date, zone) = s
            .rsplit_once(' ')
            .ok_or_else(|| ParseDateError(format!("missing zone label in {s:?}")))?;
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|e| ParseDateError(format!("{s:?}: {e}")))?;
        Ok(Self::new(date, zone))
    }
}

impl Serialize for ZonedDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_checked(self.date.year(), self, serializer)
    }
}

impl<'de> Deserialize<'de> for ZonedDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Date and time of day with a time-zone label, e.g. `2014-02-27 14:33:05 PST`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedDatetime {
    pub datetime: NaiveDateTime,
    /// Zone abbreviation as the service expects it, e.g. `PST` or `GMT`
    pub zone: String,
}

impl ZonedDatetime {
    pub fn new(datetime: NaiveDateTime, zone: impl Into<String>) -> Self {
        Self {
            datetime,
            zone: zone.into(),
        }
    }
}

impl fmt::Display for ZonedDatetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.datetime.format(DATETIME_FORMAT), self.zone)
    }
}

impl FromStr for ZonedDatetime {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (datetime, zone) = s
            .rsplit_once(' ')
            .ok_or_else(|| ParseDateError(format!("missing zone label in {s:?}")))?;
        let datetime = NaiveDateTime::parse_from_str(datetime, DATETIME_FORMAT)
            .map_err(|e| ParseDateError(format!("{s:?}: {e}")))?;
        Ok(Self::new(datetime, zone))
    }
}

impl Serialize for ZonedDatetime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_checked(self.datetime.year(), self, serializer)
    }
}

impl<'de> Deserialize<'de> for ZonedDatetime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// The wire format has exactly four year digits
fn serialize_checked<S: Serializer>(
    year: i32,
    value: &impl fmt::Display,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if !(0..=9999).contains(&year) {
        return Err(serde::ser::Error::custom("year outside of range [0,9999]"));
    }
    serializer.collect_str(value)
}
