//! Admin API routes and response envelopes.

use serde::{Deserialize, Serialize};

use crate::domain::{AuthConfigRef, CommandConfig, ServerConfig};
use crate::ports::UNKNOWN_ERROR_DETAIL;

/// Command collection. `/{name}` addresses one command.
pub const COMMANDS_PATH: &str = "/api/commands";

/// MCP server collection. `/{name}`, `/{name}/toggle`, `/{name}/test` and
/// `/{name}/reconnect` address one server.
pub const SERVERS_PATH: &str = "/api/mcp-servers";

/// Auth config references (read-only from the console).
pub const AUTH_CONFIGS_PATH: &str = "/api/auth-configs";

/// Ask the backend to reload its configuration file.
pub const CONFIG_RELOAD_PATH: &str = "/api/config/reload";

/// `GET /api/mcp-servers` response. A missing key reads as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerListResponse {
    /// Listed servers.
    #[serde(default)]
    pub servers: Vec<ServerConfig>,
}

/// `GET /api/commands` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandListResponse {
    /// Listed commands.
    #[serde(default)]
    pub commands: Vec<CommandConfig>,
}

/// `GET /api/auth-configs` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfigListResponse {
    /// Listed auth config references.
    #[serde(default)]
    pub auth_configs: Vec<AuthConfigRef>,
}

/// Body of a non-2xx response.
///
/// `detail` is usually a string; validation failures may carry a
/// structured value instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure reason.
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Failure reason as text, `Unknown error` when absent.
    pub fn detail_text(&self) -> String {
        match &self.detail {
            Some(serde_json::Value::String(text)) if !text.is_empty() => text.clone(),
            None | Some(serde_json::Value::Null | serde_json::Value::String(_)) => {
                UNKNOWN_ERROR_DETAIL.to_string()
            }
            Some(other) => other.to_string(),
        }
    }
}

/// Body of an informational 2xx response (`{"message": "..."}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageBody {
    /// Backend message.
    #[serde(default)]
    pub message: Option<String>,
}
