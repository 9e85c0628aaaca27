//! CLI-specific error types and mappings.
//!
//! Maps admin API and form failures to exit codes and user-facing messages.

use mcphub_console::{ConsoleError, FormError};
use mcphub_core::ApiError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The backend refused the request.
    #[error("{0}")]
    Rejected(String),

    /// The backend could not be reached or answered garbage.
    #[error("Admin API unavailable: {0}")]
    Unavailable(String),

    /// Argument or form validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error (bad admin URL, unusable client settings).
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (stdin closed, terminal unavailable).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Rejected(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74, // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected { detail, .. } => Self::Rejected(detail),
            ApiError::Transport { .. } | ApiError::InvalidResponse { .. } => {
                Self::Unavailable(err.detail().to_string())
            }
            ApiError::Configuration { message } => Self::Config(message),
        }
    }
}

impl From<FormError> for CliError {
    fn from(err: FormError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<ConsoleError> for CliError {
    fn from(err: ConsoleError) -> Self {
        match err {
            ConsoleError::Form(e) => e.into(),
            ConsoleError::Api(e) => e.into(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_keeps_backend_reason() {
        let err = CliError::from(ApiError::rejected(400, "Server 'alpha' already exists"));
        assert_eq!(err.to_string(), "Server 'alpha' already exists");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_transport_is_unavailable() {
        let err = CliError::from(ApiError::transport("connection refused"));
        assert_eq!(err.exit_code(), 69);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_form_error_is_usage_error() {
        let err = CliError::from(ConsoleError::from(FormError::MissingDiscriminator {
            field: "type",
        }));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Invalid arguments: field 'type' is required");
    }

    #[test]
    fn test_io_error() {
        let err = CliError::from(std::io::Error::other("stdin closed"));
        assert_eq!(err.exit_code(), 74);
    }
}
