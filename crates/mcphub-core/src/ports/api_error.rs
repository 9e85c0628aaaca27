//! Admin API port errors.
//!
//! Adapters map their transport errors into [`ApiError`] at the port
//! boundary so the console never sees reqwest or URL types.

use thiserror::Error;

/// Failure reason used when the backend gives none.
pub const UNKNOWN_ERROR_DETAIL: &str = "Unknown error";

/// Result type alias for admin API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by [`AdminApiPort`](super::AdminApiPort) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout).
    #[error("Network error: {message}")]
    Transport {
        /// Transport failure description.
        message: String,
    },

    /// The backend answered with a non-2xx status.
    #[error("Request rejected ({status}): {detail}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Backend-provided reason.
        detail: String,
    },

    /// The backend answered 2xx with a body that could not be decoded.
    #[error("Invalid response from admin API: {message}")]
    InvalidResponse {
        /// Decoding failure description.
        message: String,
    },

    /// The client is misconfigured (e.g. unparseable base URL).
    #[error("Admin client configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl ApiError {
    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a rejection error.
    pub fn rejected(status: u16, detail: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            detail: detail.into(),
        }
    }

    /// Reason suitable for a user notification.
    ///
    /// Rejections quote the backend's `detail`; everything else uses the
    /// failure description.
    pub fn detail(&self) -> &str {
        match self {
            Self::Rejected { detail, .. } => detail,
            Self::Transport { message }
            | Self::InvalidResponse { message }
            | Self::Configuration { message } => message,
        }
    }

    /// Whether the backend itself refused the request.
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
