//! Core domain types and port definitions for the mcphub admin console.
//!
//! This crate is adapter-neutral: it knows the shape of the two remote
//! collections (MCP servers and commands), the HTTP contract used to reach
//! them, and the ports the console talks through. It contains no HTTP
//! client and no rendering logic.

#![deny(unused_crate_dependencies)]

pub mod contracts;
pub mod domain;
pub mod events;
pub mod ports;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    AuthConfigRef, AuthRef, CommandConfig, CommandKind, CommandSource, ConnectionConfig,
    ConnectionStatus, HttpCommand, NewCommand, NewServer, ParameterSpec, RequestBody,
    ScriptCommand, ServerConfig,
};
pub use events::{ConsoleEvent, ListRegion, Modal, Tab};
pub use ports::{
    AdminApiPort, AlwaysConfirm, ApiError, ApiResult, ConsoleView, NoopView, Prompter,
    UNKNOWN_ERROR_DETAIL,
};
pub use utils::{escape_html, parse_key_value_text};
