//! API client error types.

use nis_core::NormalizeError;
use thiserror::Error;

/// Errors that can occur while fetching upcoming items.
///
/// Every variant is fatal for the request that produced it; nothing is
/// retried and no partial result is returned.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (DNS, connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response body was not the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// A result could not be normalized into a record.
    #[error("invalid record: {0}")]
    Normalize(#[from] NormalizeError),

    /// A concurrent vehicle lookup did not complete.
    #[error("vehicle lookup task failed: {0}")]
    Task(String),
}
