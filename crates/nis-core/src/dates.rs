//! Date handling for upcoming items.
//!
//! The Launch Library 2 API reports instants in UTC (`2020-09-24T15:00:00Z`)
//! and vehicle maiden flights as calendar dates (`2015-04-29`). Both are
//! converted to the local time zone on the way in. A missing date becomes
//! [`EventDate::Unknown`], which orders before every known date so merging
//! and sorting stay total.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::NormalizeError;

/// Wire format for event and launch timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Wire format for calendar dates (vehicle maiden flight).
pub const CALENDAR_FORMAT: &str = "%Y-%m-%d";

/// Human-readable local time. `Local` carries no zone name, so the zone is
/// shown as its UTC offset (`+02:00`), not an abbreviation.
pub const DISPLAY_FORMAT: &str = "%a %B %d, %Y %I:%M %p UTC%:z";

/// Textual date layout accepted by [`parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYY-MM-DDTHH:MM:SSZ`, always UTC.
    Timestamp,
    /// `YYYY-MM-DD`, read as midnight UTC.
    Calendar,
}

impl DateFormat {
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Timestamp => TIMESTAMP_FORMAT,
            Self::Calendar => CALENDAR_FORMAT,
        }
    }

    fn parse_naive(self, raw: &str) -> chrono::ParseResult<NaiveDateTime> {
        match self {
            Self::Timestamp => NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT),
            Self::Calendar => NaiveDate::parse_from_str(raw, CALENDAR_FORMAT)
                .map(|date| date.and_time(chrono::NaiveTime::MIN)),
        }
    }
}

/// A point in time that may be unknown.
///
/// Variant order matters: the derived `Ord` puts `Unknown` before any
/// `Known` instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventDate {
    Unknown,
    Known(DateTime<Local>),
}

impl EventDate {
    /// Build a known date from a UTC instant, shifted to local time.
    #[must_use]
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self::Known(instant.with_timezone(&Local))
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    #[must_use]
    pub const fn known(&self) -> Option<DateTime<Local>> {
        match self {
            Self::Known(instant) => Some(*instant),
            Self::Unknown => None,
        }
    }

    /// UTC rendering in the given layout, `None` when unknown.
    #[must_use]
    pub fn to_utc_string(&self, format: DateFormat) -> Option<String> {
        self.known()
            .map(|instant| instant.with_timezone(&Utc).format(format.pattern()).to_string())
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(instant) => write!(f, "{}", instant.format(DISPLAY_FORMAT)),
            Self::Unknown => f.write_str("Date Unavailable"),
        }
    }
}

/// Parse an optional UTC date string.
///
/// `None` yields [`EventDate::Unknown`]. A string that does not match
/// `format` is an error.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidTimestamp`] when `raw` is present but
/// unparseable.
pub fn parse(
    field: &'static str,
    raw: Option<&str>,
    format: DateFormat,
) -> Result<EventDate, NormalizeError> {
    let Some(raw) = raw else {
        return Ok(EventDate::Unknown);
    };
    format
        .parse_naive(raw)
        .map(|naive| EventDate::from_utc(naive.and_utc()))
        .map_err(|source| NormalizeError::InvalidTimestamp {
            field,
            value: raw.to_string(),
            source,
        })
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_utc_string(DateFormat::Timestamp).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        parse("date", raw.as_deref(), DateFormat::Timestamp).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter writing an [`EventDate`] as `YYYY-MM-DD` (or null).
pub mod calendar {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{DateFormat, EventDate, parse};

    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(date: &EventDate, serializer: S) -> Result<S::Ok, S::Error> {
        date.to_utc_string(DateFormat::Calendar).serialize(serializer)
    }

    /// # Errors
    ///
    /// Fails when the string is not a `YYYY-MM-DD` date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EventDate, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        parse("maiden_flight_date", raw.as_deref(), DateFormat::Calendar)
            .map_err(serde::de::Error::custom)
    }
}
