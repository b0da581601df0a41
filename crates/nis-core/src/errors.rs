//! Normalization error types.
//!
//! Missing fields are never errors; they normalize to `None` or
//! [`EventDate::Unknown`](crate::EventDate::Unknown). Only a value that is
//! present but unusable ends up here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A timestamp string was present but did not match the expected format.
    #[error("invalid timestamp in '{field}': {value:?} ({source})")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        source: chrono::ParseError,
    },

    /// A timestamp field held a non-string JSON value.
    #[error("expected a timestamp string in '{field}', found {found}")]
    UnexpectedType { field: &'static str, found: String },
}
