//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the audit trail server.
///
/// A `log_action` call that reaches the server but is not accepted is not an
/// error; it returns `Ok(false)`.
#[derive(Debug, Error)]
pub enum TrailError {
    /// Transport failure: connect, timeout, body read, or client build.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Response body is not a JSON array of audit trail entries.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Server returned a non-success status on a read.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body, as text.
        message: String,
    },

    /// Server returned 429 Too Many Requests on a read.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// A free-text path value is empty, `.` or `..` once trimmed, so it
    /// cannot address an endpoint. Nothing is sent.
    #[error("invalid path segment: {value:?}")]
    InvalidSegment {
        /// The value as passed by the caller.
        value: String,
    },

    /// A required connection setting is empty.
    #[error("audit trail client is not configured: missing '{field}'")]
    NotConfigured { field: &'static str },

    #[error(transparent)]
    Config(#[from] trail_config::ConfigError),

    /// The blocking client could not start its runtime.
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
