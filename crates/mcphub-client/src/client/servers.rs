//! MCP server endpoints.

use mcphub_core::contracts::{SERVERS_PATH, ServerListResponse};
use mcphub_core::{NewServer, ServerConfig};
use reqwest::Method;

use super::AdminClient;
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::url::{action_path, resource_path};

impl<B: HttpBackend> AdminClient<B> {
    pub(crate) async fn fetch_servers(&self) -> ClientResult<Vec<ServerConfig>> {
        let response: ServerListResponse = self.get(SERVERS_PATH).await?;
        tracing::debug!(count = response.servers.len(), "Fetched MCP servers");
        Ok(response.servers)
    }

    pub(crate) async fn post_server(&self, server: &NewServer) -> ClientResult<()> {
        let body = serde_json::to_value(server)?;
        self.send(Method::POST, SERVERS_PATH, Some(&body)).await?;
        Ok(())
    }

    pub(crate) async fn patch_server_toggle(&self, name: &str) -> ClientResult<()> {
        self.send(Method::PATCH, &action_path(SERVERS_PATH, name, "toggle"), None)
            .await?;
        Ok(())
    }

    pub(crate) async fn remove_server(&self, name: &str) -> ClientResult<()> {
        self.send(Method::DELETE, &resource_path(SERVERS_PATH, name), None)
            .await?;
        Ok(())
    }

    pub(crate) async fn post_server_action(&self, name: &str, action: &str) -> ClientResult<String> {
        self.send_for_message(Method::POST, &action_path(SERVERS_PATH, name, action))
            .await
    }
}
