//! Admin console core for mcphub.
//!
//! Keeps the rendered MCP server and command lists in step with the admin
//! backend, maps the flat add-forms into typed creation payloads, and
//! toggles servers optimistically. Rendering goes out as
//! [`ConsoleEvent`](mcphub_core::ConsoleEvent)s to whatever
//! [`ConsoleView`](mcphub_core::ConsoleView) hosts the console.
//!
//! # Structure
//!
//! - `controller` - [`ConsoleController`], the entry point for user intents
//! - `sync` - List reloads with last-response-wins semantics
//! - `forms` - Form-to-payload mapping
//! - `render` - Escaped markup for lists and the auth selector
//! - `toggle` - Optimistic toggle with reload-based rollback
//! - `periodic` - Background refresh ticker

#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod forms;
pub mod periodic;
pub mod render;
pub mod sync;
pub mod toggle;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use config::ConsoleConfig;
pub use controller::{ConsoleController, ConsoleState};
pub use error::{ConsoleError, ConsoleResult, FormError};
pub use forms::{FormData, map_command_form, map_server_form};
pub use periodic::PeriodicRefresh;
pub use sync::{Collection, CommandCollection, ResourceSynchronizer, ServerCollection};
pub use toggle::{ToggleController, ToggleOutcome};
pub use view::RecordingView;

#[cfg(test)]
use tokio_test as _;
