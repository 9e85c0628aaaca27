//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Mutations go through a [`ConsoleController`](mcphub_console::ConsoleController)
//!   so the terminal gets the same notices and reloads as the browser
//! - Read-only listings call the admin API directly and print a table
//!
//! Failures are returned as [`CliError`](crate::CliError) so `main` can pick
//! the exit code.

pub mod auth;
pub mod commands;
pub mod reload_config;
pub mod render;
pub mod servers;
pub mod watch;
