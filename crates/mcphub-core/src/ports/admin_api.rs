//! Admin API port.
//!
//! The console reaches the backend only through this trait. The production
//! implementation lives in `mcphub-client`; tests use scripted fakes.

use async_trait::async_trait;

use super::ApiResult;
use crate::domain::{AuthConfigRef, CommandConfig, NewCommand, NewServer, ServerConfig};

/// Operations the admin backend exposes to the console.
///
/// Names passed to per-resource operations are raw; implementations are
/// responsible for percent-encoding them into path segments.
#[async_trait]
pub trait AdminApiPort: Send + Sync {
    /// `GET /api/mcp-servers`.
    async fn list_servers(&self) -> ApiResult<Vec<ServerConfig>>;

    /// `POST /api/mcp-servers`.
    async fn create_server(&self, server: &NewServer) -> ApiResult<()>;

    /// `PATCH /api/mcp-servers/{name}/toggle`. The backend flips `enabled`.
    async fn toggle_server(&self, name: &str) -> ApiResult<()>;

    /// `DELETE /api/mcp-servers/{name}`.
    async fn delete_server(&self, name: &str) -> ApiResult<()>;

    /// `POST /api/mcp-servers/{name}/test`. Returns the backend message.
    async fn test_server(&self, name: &str) -> ApiResult<String>;

    /// `POST /api/mcp-servers/{name}/reconnect`. Returns the backend message.
    async fn reconnect_server(&self, name: &str) -> ApiResult<String>;

    /// `GET /api/commands`.
    async fn list_commands(&self) -> ApiResult<Vec<CommandConfig>>;

    /// `POST /api/commands`.
    async fn create_command(&self, command: &NewCommand) -> ApiResult<()>;

    /// `DELETE /api/commands/{name}`.
    async fn delete_command(&self, name: &str) -> ApiResult<()>;

    /// `GET /api/auth-configs`.
    async fn list_auth_configs(&self) -> ApiResult<Vec<AuthConfigRef>>;

    /// `POST /api/config/reload`. Returns the backend message.
    async fn reload_config(&self) -> ApiResult<String>;
}
