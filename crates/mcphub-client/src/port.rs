//! `AdminApiPort` implementation for `AdminClient`.
//!
//! This is the boundary where client-internal errors become
//! [`ApiError`]s the console can present.

use async_trait::async_trait;
use mcphub_core::{
    AdminApiPort, ApiError, ApiResult, AuthConfigRef, CommandConfig, NewCommand, NewServer,
    ServerConfig,
};

use crate::client::AdminClient;
use crate::error::ClientError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Map internal `ClientError` to the port-level `ApiError`.
pub(crate) fn map_error(error: ClientError) -> ApiError {
    match error {
        ClientError::Rejected { status, detail } => ApiError::rejected(status, detail),
        ClientError::Network(e) if e.is_builder() => ApiError::Configuration {
            message: e.to_string(),
        },
        ClientError::Network(e) => ApiError::transport(e.to_string()),
        ClientError::InvalidUrl(e) => ApiError::Configuration {
            message: format!("invalid admin URL: {e}"),
        },
        ClientError::JsonParse(e) => ApiError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> AdminApiPort for AdminClient<B> {
    async fn list_servers(&self) -> ApiResult<Vec<ServerConfig>> {
        self.fetch_servers().await.map_err(map_error)
    }

    async fn create_server(&self, server: &NewServer) -> ApiResult<()> {
        tracing::info!(name = %server.name, kind = server.connection.kind(), "Creating MCP server");
        self.post_server(server).await.map_err(map_error)
    }

    async fn toggle_server(&self, name: &str) -> ApiResult<()> {
        tracing::info!(%name, "Toggling MCP server");
        self.patch_server_toggle(name).await.map_err(map_error)
    }

    async fn delete_server(&self, name: &str) -> ApiResult<()> {
        tracing::info!(%name, "Deleting MCP server");
        self.remove_server(name).await.map_err(map_error)
    }

    async fn test_server(&self, name: &str) -> ApiResult<String> {
        self.post_server_action(name, "test").await.map_err(map_error)
    }

    async fn reconnect_server(&self, name: &str) -> ApiResult<String> {
        tracing::info!(%name, "Reconnecting MCP server");
        self.post_server_action(name, "reconnect")
            .await
            .map_err(map_error)
    }

    async fn list_commands(&self) -> ApiResult<Vec<CommandConfig>> {
        self.fetch_commands().await.map_err(map_error)
    }

    async fn create_command(&self, command: &NewCommand) -> ApiResult<()> {
        tracing::info!(name = %command.name, kind = command.kind.kind(), "Creating command");
        self.post_command(command).await.map_err(map_error)
    }

    async fn delete_command(&self, name: &str) -> ApiResult<()> {
        tracing::info!(%name, "Deleting command");
        self.remove_command(name).await.map_err(map_error)
    }

    async fn list_auth_configs(&self) -> ApiResult<Vec<AuthConfigRef>> {
        self.fetch_auth_configs().await.map_err(map_error)
    }

    async fn reload_config(&self) -> ApiResult<String> {
        tracing::info!("Requesting config reload");
        self.post_config_reload().await.map_err(map_error)
    }
}
