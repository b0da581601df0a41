//! Launch Library 2 payload normalization.
//!
//! Each function takes one raw result object exactly as the API returned it
//! and builds a record. Every read goes through [`crate::extract`], so a
//! missing or `null` branch only ever produces an absent field. The one hard
//! failure is a timestamp that is present but malformed.

use serde_json::Value;

use crate::dates::{self, DateFormat, EventDate};
use crate::entities::{Event, Launch, Vehicle};
use crate::errors::NormalizeError;
use crate::extract::{extract, extract_f64, extract_str, extract_string, extract_u32};

/// Path to the vehicle configuration URL inside a launch result.
pub const VEHICLE_URL_PATH: &[&str] = &["rocket", "configuration", "url"];

/// Build an [`Event`] from one `event/upcoming` result.
///
/// # Errors
///
/// Returns [`NormalizeError`] if `date` is present but not a
/// `YYYY-MM-DDTHH:MM:SSZ` string.
pub fn event_from_raw(raw: &Value) -> Result<Event, NormalizeError> {
    Ok(Event {
        name: extract_string(raw, &["name"]),
        location: extract_string(raw, &["location"]),
        date: date_at(raw, &["date"], "date", DateFormat::Timestamp)?,
        description: extract_string(raw, &["description"]),
        category: extract_string(raw, &["type", "name"]),
    })
}

/// Build a [`Launch`] from one `launch` result, attaching `vehicle` as given.
///
/// # Errors
///
/// Returns [`NormalizeError`] if `net` is present but malformed.
pub fn launch_from_raw(raw: &Value, vehicle: Option<Vehicle>) -> Result<Launch, NormalizeError> {
    Ok(Launch {
        name: extract_string(raw, &["name"]),
        location: build_location(
            extract_str(raw, &["pad", "name"]),
            extract_str(raw, &["pad", "location", "name"]),
        ),
        date: date_at(raw, &["net"], "net", DateFormat::Timestamp)?,
        description: extract_string(raw, &["mission", "description"]),
        category: extract_string(raw, &["mission", "type"]),
        vehicle,
    })
}

/// URL of the launcher configuration for a launch result, if any.
#[must_use]
pub fn vehicle_url(raw: &Value) -> Option<&str> {
    extract_str(raw, VEHICLE_URL_PATH)
}

/// Build a [`Vehicle`] from a `config/launcher/{id}` payload.
///
/// # Errors
///
/// Returns [`NormalizeError`] if `maiden_flight` is present but not a
/// `YYYY-MM-DD` string.
pub fn vehicle_from_raw(raw: &Value) -> Result<Vehicle, NormalizeError> {
    Ok(Vehicle {
        name: extract_string(raw, &["full_name"]),
        leo_payload_capacity: extract_f64(raw, &["leo_capacity"]),
        gto_payload_capacity: extract_f64(raw, &["gto_capacity"]),
        liftoff_thrust: extract_f64(raw, &["to_thrust"]),
        liftoff_mass: extract_f64(raw, &["launch_mass"]),
        max_stages: extract_u32(raw, &["max_stage"]),
        height: extract_f64(raw, &["length"]),
        successful_launch_count: extract_u32(raw, &["successful_launches"]),
        consecutive_successful_launch_count: extract_u32(
            raw,
            &["consecutive_successful_launches"],
        ),
        failed_launch_count: extract_u32(raw, &["failed_launches"]),
        maiden_flight_date: date_at(
            raw,
            &["maiden_flight"],
            "maiden_flight",
            DateFormat::Calendar,
        )?,
    })
}

/// Join pad and pad location into a single display location.
#[must_use]
pub fn build_location(pad: Option<&str>, location: Option<&str>) -> Option<String> {
    match (pad, location) {
        (Some(pad), Some(location)) => Some(format!("{pad}, {location}")),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}

fn date_at(
    raw: &Value,
    path: &[&str],
    field: &'static str,
    format: DateFormat,
) -> Result<EventDate, NormalizeError> {
    match extract(raw, path) {
        None => Ok(EventDate::Unknown),
        Some(Value::String(text)) => dates::parse(field, Some(text), format),
        Some(other) => Err(NormalizeError::UnexpectedType {
            field,
            found: other.to_string(),
        }),
    }
}
