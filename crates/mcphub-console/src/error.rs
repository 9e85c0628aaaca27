//! Console error types.

use mcphub_core::ApiError;
use thiserror::Error;

/// Result type alias for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// A form whose discriminator selects no known shape.
///
/// This is the only validation done locally; everything else is left to
/// the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field '{field}' is required")]
    MissingDiscriminator { field: &'static str },

    #[error("unsupported {field} '{value}'")]
    UnknownDiscriminator { field: &'static str, value: String },
}

/// Errors surfaced by console operations.
///
/// The view has already been notified by the time one of these is
/// returned; callers use it for exit codes and logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("Invalid form: {0}")]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ConsoleError {
    /// Reason suitable for a user notification.
    pub fn detail(&self) -> String {
        match self {
            Self::Form(e) => e.to_string(),
            Self::Api(e) => e.detail().to_string(),
        }
    }
}
