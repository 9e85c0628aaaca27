//! Transport contract for the admin backend.
//!
//! Route constants and response envelopes shared by the HTTP client and
//! test fakes. Keep these free of client-specific types.

pub mod admin;

pub use admin::{
    AUTH_CONFIGS_PATH, AuthConfigListResponse, COMMANDS_PATH, CONFIG_RELOAD_PATH,
    CommandListResponse, ErrorBody, MessageBody, SERVERS_PATH, ServerListResponse,
};
