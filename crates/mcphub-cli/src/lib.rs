//! Terminal front-end for the mcphub admin console.
//!
//! The binary is a thin host: it builds the admin client, wires a
//! [`TerminalView`](presentation::TerminalView) and a stdin prompter into the
//! console controller, and dispatches subcommands to handlers.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{AuthCommand, Commands, CommandsCommand, RenderTarget, ServersCommand};
pub use error::CliError;
pub use parser::Cli;
