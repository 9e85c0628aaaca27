//! Test doubles for the admin API.
//!
//! Available to unit tests and, through the `test-utils` feature, to
//! integration tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use mcphub_core::{
    AdminApiPort, ApiError, ApiResult, AuthConfigRef, CommandConfig, CommandKind, CommandSource,
    ConnectionConfig, ConnectionStatus, HttpCommand, NewCommand, NewServer, ServerConfig,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A stdio server fixture.
pub fn server(name: &str, enabled: bool) -> ServerConfig {
    ServerConfig {
        name: name.to_string(),
        description: String::new(),
        enabled,
        connection: ConnectionConfig::stdio("uvx", vec![name.to_string()]),
        prefix: None,
        timeout: 30,
        retry_on_failure: true,
        auto_reconnect: true,
        connection_status: ConnectionStatus::Connected,
        connection_error: None,
    }
}

/// An HTTP command fixture.
pub fn command(name: &str, source: CommandSource) -> CommandConfig {
    CommandConfig {
        name: name.to_string(),
        description: String::new(),
        kind: CommandKind::Http {
            http: HttpCommand {
                url: format!("https://api.example.com/{name}"),
                ..HttpCommand::default()
            },
        },
        enabled: true,
        source,
        service: (source == CommandSource::Mcp).then(|| "fixture".to_string()),
        parameters: vec![],
    }
}

/// In-memory admin backend with scripted failures and latency.
///
/// List operations snapshot the collection when called and return that
/// snapshot after the scripted delay, so a slow reload can deliver data
/// older than a faster one that started later.
#[derive(Default)]
pub struct FakeAdminApi {
    servers: Mutex<Vec<ServerConfig>>,
    commands: Mutex<Vec<CommandConfig>>,
    auth_configs: Mutex<Vec<AuthConfigRef>>,
    failures: Mutex<HashMap<String, ApiError>>,
    latencies: Mutex<HashMap<String, VecDeque<Duration>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeAdminApi {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_servers(self, servers: Vec<ServerConfig>) -> Self {
        self.set_servers(servers);
        self
    }

    #[must_use]
    pub fn with_commands(self, commands: Vec<CommandConfig>) -> Self {
        *lock(&self.commands) = commands;
        self
    }

    #[must_use]
    pub fn with_auth_configs(self, auth_configs: Vec<AuthConfigRef>) -> Self {
        *lock(&self.auth_configs) = auth_configs;
        self
    }

    pub fn set_servers(&self, servers: Vec<ServerConfig>) {
        *lock(&self.servers) = servers;
    }

    /// Make every call to `operation` fail with `error`.
    pub fn fail(&self, operation: &str, error: ApiError) {
        lock(&self.failures).insert(operation.to_string(), error);
    }

    /// Delay successive calls to `operation`; calls beyond the script are
    /// immediate.
    pub fn script_latency(&self, operation: &str, delays: impl IntoIterator<Item = Duration>) {
        lock(&self.latencies)
            .entry(operation.to_string())
            .or_default()
            .extend(delays);
    }

    /// Number of calls made to `operation`.
    pub fn call_count(&self, operation: &str) -> usize {
        lock(&self.calls).iter().filter(|c| *c == operation).count()
    }

    /// Every call made, in order.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    pub fn servers(&self) -> Vec<ServerConfig> {
        lock(&self.servers).clone()
    }

    pub fn commands(&self) -> Vec<CommandConfig> {
        lock(&self.commands).clone()
    }

    /// Record the call and return its scripted failure, if any.
    fn enter(&self, operation: &str) -> ApiResult<()> {
        lock(&self.calls).push(operation.to_string());
        lock(&self.failures)
            .get(operation)
            .cloned()
            .map_or(Ok(()), Err)
    }

    async fn settle(&self, operation: &str) {
        let delay = lock(&self.latencies)
            .get_mut(operation)
            .and_then(VecDeque::pop_front);
        if let Some(delay) = delay.filter(|d| !d.is_zero()) {
            tokio::time::sleep(delay).await;
        }
    }

    fn not_found(kind: &str) -> ApiError {
        ApiError::rejected(404, format!("{kind} not found"))
    }
}

#[async_trait]
impl AdminApiPort for FakeAdminApi {
    async fn list_servers(&self) -> ApiResult<Vec<ServerConfig>> {
        let result = self.enter("list_servers").map(|()| self.servers());
        self.settle("list_servers").await;
        result
    }

    async fn create_server(&self, server: &NewServer) -> ApiResult<()> {
        self.enter("create_server")?;
        self.settle("create_server").await;
        let mut servers = lock(&self.servers);
        if servers.iter().any(|s| s.name == server.name) {
            return Err(ApiError::rejected(400, format!("Server '{}' already exists", server.name)));
        }
        servers.push(ServerConfig {
            name: server.name.clone(),
            description: server.description.clone(),
            enabled: server.enabled,
            connection: server.connection.clone(),
            prefix: server.prefix.clone(),
            timeout: server.timeout,
            retry_on_failure: server.retry_on_failure,
            auto_reconnect: server.auto_reconnect,
            connection_status: ConnectionStatus::Unknown,
            connection_error: None,
        });
        Ok(())
    }

    async fn toggle_server(&self, name: &str) -> ApiResult<()> {
        self.enter("toggle_server")?;
        self.settle("toggle_server").await;
        let mut servers = lock(&self.servers);
        let server = servers
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| Self::not_found("Server"))?;
        server.enabled = !server.enabled;
        Ok(())
    }

    async fn delete_server(&self, name: &str) -> ApiResult<()> {
        self.enter("delete_server")?;
        self.settle("delete_server").await;
        let mut servers = lock(&self.servers);
        let before = servers.len();
        servers.retain(|s| s.name != name);
        if servers.len() == before {
            return Err(Self::not_found("Server"));
        }
        Ok(())
    }

    async fn test_server(&self, name: &str) -> ApiResult<String> {
        self.enter("test_server")?;
        Ok(format!("Server '{name}' responded"))
    }

    async fn reconnect_server(&self, name: &str) -> ApiResult<String> {
        self.enter("reconnect_server")?;
        Ok(format!("Server '{name}' reconnected"))
    }

    async fn list_commands(&self) -> ApiResult<Vec<CommandConfig>> {
        let result = self.enter("list_commands").map(|()| self.commands());
        self.settle("list_commands").await;
        result
    }

    async fn create_command(&self, command: &NewCommand) -> ApiResult<()> {
        self.enter("create_command")?;
        self.settle("create_command").await;
        lock(&self.commands).push(CommandConfig {
            name: command.name.clone(),
            description: command.description.clone(),
            kind: command.kind.clone(),
            enabled: command.enabled,
            source: CommandSource::Local,
            service: None,
            parameters: command.parameters.clone(),
        });
        Ok(())
    }

    async fn delete_command(&self, name: &str) -> ApiResult<()> {
        self.enter("delete_command")?;
        self.settle("delete_command").await;
        let mut commands = lock(&self.commands);
        let before = commands.len();
        commands.retain(|c| c.name != name);
        if commands.len() == before {
            return Err(Self::not_found("Command"));
        }
        Ok(())
    }

    async fn list_auth_configs(&self) -> ApiResult<Vec<AuthConfigRef>> {
        self.enter("list_auth_configs")?;
        Ok(lock(&self.auth_configs).clone())
    }

    async fn reload_config(&self) -> ApiResult<String> {
        self.enter("reload_config")?;
        Ok("Configuration reloaded".to_string())
    }
}
