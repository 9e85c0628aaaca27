//! Command, auth config and config reload endpoints.

use mcphub_core::contracts::{
    AUTH_CONFIGS_PATH, AuthConfigListResponse, COMMANDS_PATH, CONFIG_RELOAD_PATH,
    CommandListResponse,
};
use mcphub_core::{AuthConfigRef, CommandConfig, NewCommand};
use reqwest::Method;

use super::AdminClient;
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::url::resource_path;

impl<B: HttpBackend> AdminClient<B> {
    pub(crate) async fn fetch_commands(&self) -> ClientResult<Vec<CommandConfig>> {
        let response: CommandListResponse = self.get(COMMANDS_PATH).await?;
        tracing::debug!(count = response.commands.len(), "Fetched commands");
        Ok(response.commands)
    }

    pub(crate) async fn post_command(&self, command: &NewCommand) -> ClientResult<()> {
        let body = serde_json::to_value(command)?;
        self.send(Method::POST, COMMANDS_PATH, Some(&body)).await?;
        Ok(())
    }

    pub(crate) async fn remove_command(&self, name: &str) -> ClientResult<()> {
        self.send(Method::DELETE, &resource_path(COMMANDS_PATH, name), None)
            .await?;
        Ok(())
    }

    pub(crate) async fn fetch_auth_configs(&self) -> ClientResult<Vec<AuthConfigRef>> {
        let response: AuthConfigListResponse = self.get(AUTH_CONFIGS_PATH).await?;
        Ok(response.auth_configs)
    }

    pub(crate) async fn post_config_reload(&self) -> ClientResult<String> {
        self.send_for_message(Method::POST, CONFIG_RELOAD_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use mcphub_core::{CommandKind, CommandSource, ScriptCommand};
    use serde_json::json;
    use url::Url;

    fn client(backend: FakeBackend) -> AdminClient<FakeBackend> {
        AdminClient::with_backend(Url::parse("http://127.0.0.1:18888").unwrap(), backend)
    }

    #[tokio::test]
    async fn test_fetch_commands_decodes_sources() {
        let backend = FakeBackend::new().with_response(
            Method::GET,
            "/api/commands",
            CannedResponse::ok(json!({"commands": [
                {"name": "local", "type": "script", "script": {"path": "/a.py"}, "source": "local"},
                {"name": "remote", "type": "http", "http": null, "source": "mcp", "service": "tapd"}
            ]})),
        );

        let commands = client(backend).fetch_commands().await.unwrap();
        assert_eq!(commands[0].source, CommandSource::Local);
        assert_eq!(commands[1].source, CommandSource::Mcp);
    }

    #[tokio::test]
    async fn test_post_command_nests_payload_under_type() {
        let backend = FakeBackend::new().with_response(
            Method::POST,
            "/api/commands",
            CannedResponse::ok(json!({"message": "ok"})),
        );
        let requests = backend.requests();
        let command = NewCommand {
            name: "cleanup".to_string(),
            description: String::new(),
            kind: CommandKind::Script {
                script: ScriptCommand {
                    interpreter: "bash".to_string(),
                    path: "/opt/cleanup.sh".to_string(),
                },
            },
            enabled: true,
            parameters: vec![],
        };

        client(backend).post_command(&command).await.unwrap();

        let seen = requests.lock().unwrap();
        let body = seen[0].body.as_ref().unwrap();
        assert_eq!(body["type"], "script");
        assert_eq!(body["script"]["path"], "/opt/cleanup.sh");
    }

    #[tokio::test]
    async fn test_delete_rejection_carries_detail() {
        let backend = FakeBackend::new().with_response(
            Method::DELETE,
            "/api/commands/ghost",
            CannedResponse::status(404, json!({"detail": "Command not found"})),
        );

        let err = client(backend).remove_command("ghost").await.unwrap_err();
        match err {
            ClientError::Rejected { status, detail } => {
                assert_eq!(status, 404);
                assert_eq!(detail, "Command not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_auth_configs() {
        let backend = FakeBackend::new().with_response(
            Method::GET,
            "/api/auth-configs",
            CannedResponse::ok(json!({"auth_configs": [{"name": "gh", "type": "bearer_token"}]})),
        );

        let auth = client(backend).fetch_auth_configs().await.unwrap();
        assert_eq!(auth[0].display_label(), "gh (bearer_token)");
    }

    #[tokio::test]
    async fn test_config_reload_without_message() {
        let backend = FakeBackend::new().with_response(
            Method::POST,
            "/api/config/reload",
            CannedResponse::ok(serde_json::Value::Null),
        );

        let message = client(backend).post_config_reload().await.unwrap();
        assert!(message.is_empty());
    }
}
