//! CLI bootstrap - the composition root.
//!
//! This is the only place where the admin client is instantiated. Handlers
//! receive a [`CliContext`] and reach the backend through the
//! [`AdminApiPort`] it carries.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use mcphub_client::{AdminClientConfig, DefaultAdminClient};
use mcphub_console::{ConsoleConfig, ConsoleController};
use mcphub_core::{AdminApiPort, ConsoleView, Prompter};
use tracing::debug;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Admin API origin.
    pub admin_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Period of the background list refresh.
    pub refresh_interval: Duration,
}

impl CliConfig {
    /// Build the config from parsed global arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            admin_url: cli.admin_url.clone(),
            timeout: Duration::from_secs(cli.request_timeout),
            refresh_interval: ConsoleConfig::default().refresh_interval(),
        }
    }

    /// Override the refresh period (used by `watch --interval`).
    #[must_use]
    pub const fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    api: Arc<dyn AdminApiPort>,
    config: CliConfig,
}

impl CliContext {
    /// Assemble a context around an existing API port.
    pub fn new(api: Arc<dyn AdminApiPort>, config: CliConfig) -> Self {
        Self { api, config }
    }

    /// Access the admin API.
    pub fn api(&self) -> &Arc<dyn AdminApiPort> {
        &self.api
    }

    pub const fn config(&self) -> &CliConfig {
        &self.config
    }

    /// Build a console controller rendering into `view`.
    pub fn console(
        &self,
        view: Arc<dyn ConsoleView>,
        prompter: Arc<dyn Prompter>,
    ) -> ConsoleController {
        let console_config =
            ConsoleConfig::new().with_refresh_interval(self.config.refresh_interval);
        ConsoleController::new(Arc::clone(&self.api), view, prompter, console_config)
    }
}

/// Bootstrap the CLI application.
///
/// # Errors
///
/// Fails when the admin client cannot be built from `config`, for example
/// when the admin URL does not parse.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let client_config = AdminClientConfig::new()
        .with_base_url(config.admin_url.clone())
        .with_timeout(config.timeout);
    let client = DefaultAdminClient::new(&client_config)
        .with_context(|| format!("Failed to create admin client for {}", config.admin_url))?;

    debug!(admin_url = %config.admin_url, "Admin client ready");
    Ok(CliContext::new(Arc::new(client), config))
}
