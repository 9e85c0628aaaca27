//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the console expects from the outside world.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP client types in any signature
//! - No markup or terminal details in the view port beyond rendered strings
//! - Errors are user-presentable (`ApiError::detail`)

pub mod admin_api;
pub mod api_error;
pub mod view;

pub use admin_api::AdminApiPort;
pub use api_error::{ApiError, ApiResult, UNKNOWN_ERROR_DETAIL};
pub use view::{AlwaysConfirm, ConsoleView, NoopView, Prompter};
