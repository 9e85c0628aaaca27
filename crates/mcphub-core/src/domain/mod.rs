//! Core domain types.
//!
//! These types mirror the admin backend's configuration model, independent
//! of transport and rendering concerns.
//!
//! # Structure
//!
//! - `server` - MCP server types (`ServerConfig`, `NewServer`, `ConnectionConfig`)
//! - `command` - Command types (`CommandConfig`, `NewCommand`, `CommandKind`)
//! - `auth` - Read-only auth config references

mod auth;
mod command;
mod server;

use serde::{Deserialize, Deserializer};

pub use auth::{AuthConfigRef, AuthRef};
pub use command::{
    CommandConfig, CommandKind, CommandSource, DEFAULT_HTTP_METHOD, DEFAULT_INTERPRETER,
    DEFAULT_PARAMETER_TYPE, HttpCommand, NewCommand, ParameterSpec, RequestBody, ScriptCommand,
};
pub use server::{
    ConnectionConfig, ConnectionStatus, DEFAULT_SERVER_TIMEOUT_SECS, DEFAULT_STDIO_COMMAND,
    NewServer, ServerConfig,
};

/// Deserialize a field that the backend may send as `null`, falling back to
/// the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) const fn default_true() -> bool {
    true
}

/// Like [`null_as_default`] for flags whose default is `true`.
pub(crate) fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}
