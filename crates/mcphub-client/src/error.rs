//! Internal error types for admin API calls.
//!
//! These errors are internal to `mcphub-client` and are mapped to
//! [`mcphub_core::ApiError`] at the port boundary.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised while talking to the admin backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with a non-2xx status.
    #[error("Admin API request failed with status {status}: {detail}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// `detail` from the response body
        detail: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
