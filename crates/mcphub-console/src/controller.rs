//! Console controller.
//!
//! Owns the console state (active tab, open modals), both list
//! synchronizers, the toggle controller and the periodic servers refresh.
//! All user intents enter through here.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mcphub_core::{AdminApiPort, ConsoleEvent, ConsoleView, Modal, Prompter, Tab};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, ConsoleResult};
use crate::forms::{FormData, map_command_form, map_server_form};
use crate::periodic::PeriodicRefresh;
use crate::render::render_auth_options;
use crate::sync::{CommandCollection, ResourceSynchronizer, ServerCollection};
use crate::toggle::{ToggleController, ToggleOutcome};

/// UI state owned by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleState {
    pub active_tab: Tab,
    pub open_modals: HashSet<Modal>,
}

impl ConsoleState {
    pub fn is_open(&self, modal: Modal) -> bool {
        self.open_modals.contains(&modal)
    }
}

/// Drives the console: tabs, modals, form submission, deletes and toggles.
pub struct ConsoleController {
    api: Arc<dyn AdminApiPort>,
    view: Arc<dyn ConsoleView>,
    prompter: Arc<dyn Prompter>,
    config: ConsoleConfig,
    servers: Arc<ResourceSynchronizer<ServerCollection>>,
    commands: Arc<ResourceSynchronizer<CommandCollection>>,
    toggles: ToggleController,
    state: Mutex<ConsoleState>,
    refresh_armed: AtomicBool,
    refresh_task: Mutex<Option<JoinHandle<()>>>,
    cancel_token: CancellationToken,
}

impl ConsoleController {
    pub fn new(
        api: Arc<dyn AdminApiPort>,
        view: Arc<dyn ConsoleView>,
        prompter: Arc<dyn Prompter>,
        config: ConsoleConfig,
    ) -> Self {
        let servers = Arc::new(ResourceSynchronizer::new(
            ServerCollection,
            Arc::clone(&api),
            Arc::clone(&view),
        ));
        let commands = Arc::new(ResourceSynchronizer::new(
            CommandCollection,
            Arc::clone(&api),
            Arc::clone(&view),
        ));
        let toggles = ToggleController::new(
            Arc::clone(&api),
            Arc::clone(&view),
            Arc::clone(&servers),
            config.toggle_settle_delay(),
        );

        Self {
            api,
            view,
            prompter,
            config,
            servers,
            commands,
            toggles,
            state: Mutex::new(ConsoleState::default()),
            refresh_armed: AtomicBool::new(false),
            refresh_task: Mutex::new(None),
            cancel_token: CancellationToken::new(),
        }
    }

    /// Snapshot of the current UI state.
    pub fn state(&self) -> ConsoleState {
        self.lock_state().clone()
    }

    pub fn servers(&self) -> &ResourceSynchronizer<ServerCollection> {
        &self.servers
    }

    pub fn commands(&self) -> &ResourceSynchronizer<CommandCollection> {
        &self.commands
    }

    /// Whether the periodic servers refresh has been started.
    pub fn is_refresh_armed(&self) -> bool {
        self.refresh_armed.load(Ordering::SeqCst)
    }

    fn lock_state(&self) -> MutexGuard<'_, ConsoleState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Show the servers tab, load it, and arm the periodic refresh.
    ///
    /// The refresh is armed at most once per controller; calling `start`
    /// again only reloads.
    pub async fn start(&self) {
        self.activate(Tab::Servers);
        let _ = self.servers.reload().await;
        self.arm_refresh();
    }

    fn arm_refresh(&self) {
        if self.refresh_armed.swap(true, Ordering::SeqCst) {
            debug!("Periodic refresh already armed");
            return;
        }

        let servers = Arc::clone(&self.servers);
        let handle = PeriodicRefresh::new(self.config.refresh_interval(), self.cancel_token.clone())
            .spawn(move || {
                let servers = Arc::clone(&servers);
                async move {
                    let _ = servers.reload().await;
                }
            });

        *self
            .refresh_task
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(handle);
    }

    /// Stop the periodic refresh. In-flight reloads run to completion.
    pub async fn shutdown(&self) {
        self.cancel_token.cancel();
        let handle = self
            .refresh_task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!(error = %e, "Periodic refresh task ended abnormally");
            }
        }
    }

    // ========================================================================
    // Tabs and modals
    // ========================================================================

    fn activate(&self, tab: Tab) {
        self.lock_state().active_tab = tab;
        self.view.emit(ConsoleEvent::TabActivated { tab });
    }

    /// Activate `tab` and reload its collection.
    pub async fn show_tab(&self, tab: Tab) {
        self.activate(tab);
        let _ = match tab {
            Tab::Servers => self.servers.reload().await,
            Tab::Commands => self.commands.reload().await,
        };
    }

    /// Open a modal. Opening the add-command modal also loads the auth
    /// config choices.
    pub async fn open_modal(&self, modal: Modal) {
        self.lock_state().open_modals.insert(modal);
        self.view.emit(ConsoleEvent::ModalOpened { modal });

        if modal == Modal::AddCommand {
            self.load_auth_options().await;
        }
    }

    async fn load_auth_options(&self) {
        let auth_configs = match self.api.list_auth_configs().await {
            Ok(auth_configs) => auth_configs,
            Err(e) => {
                warn!(error = %e, "Failed to load auth configs");
                Vec::new()
            }
        };
        self.view.emit(ConsoleEvent::auth_options_rendered(render_auth_options(
            &auth_configs,
        )));
    }

    /// Close a modal and clear its form.
    pub fn close_modal(&self, modal: Modal) {
        self.lock_state().open_modals.remove(&modal);
        self.view.emit(ConsoleEvent::ModalClosed { modal });
        self.view.emit(ConsoleEvent::FormReset { modal });
    }

    /// Close every open modal without clearing forms (click outside).
    pub fn dismiss_modals(&self) {
        let open: Vec<Modal> = {
            let mut state = self.lock_state();
            let open = Modal::ALL
                .into_iter()
                .filter(|m| state.open_modals.contains(m))
                .collect();
            state.open_modals.clear();
            open
        };
        for modal in open {
            self.view.emit(ConsoleEvent::ModalClosed { modal });
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    fn notify(&self, message: impl Into<String>) {
        self.view.emit(ConsoleEvent::notice(message));
    }

    fn add_failed(&self, error: ConsoleError) -> ConsoleError {
        warn!(error = %error, "Add failed");
        self.notify(format!("Add failed: {}", error.detail()));
        error
    }

    /// Map and submit the add-server form.
    pub async fn submit_server_form(&self, form: &FormData) -> ConsoleResult<()> {
        let server = map_server_form(form).map_err(|e| self.add_failed(e.into()))?;
        self.api
            .create_server(&server)
            .await
            .map_err(|e| self.add_failed(e.into()))?;

        info!(server_name = %server.name, "MCP server added");
        self.notify("MCP server added");
        self.close_modal(Modal::AddServer);
        let _ = self.servers.reload().await;
        Ok(())
    }

    /// Map and submit the add-command form.
    pub async fn submit_command_form(&self, form: &FormData) -> ConsoleResult<()> {
        let command = map_command_form(form).map_err(|e| self.add_failed(e.into()))?;
        self.api
            .create_command(&command)
            .await
            .map_err(|e| self.add_failed(e.into()))?;

        info!(command_name = %command.name, "Command added");
        self.notify("Command added");
        self.close_modal(Modal::AddCommand);
        let _ = self.commands.reload().await;
        Ok(())
    }

    /// Delete a server after confirmation.
    ///
    /// Returns `Ok(false)` when the user declined; no request is sent.
    pub async fn delete_server(&self, name: &str) -> ConsoleResult<bool> {
        if !self.prompter.confirm(&format!("Delete MCP server \"{name}\"?")) {
            return Ok(false);
        }

        if let Err(e) = self.api.delete_server(name).await {
            warn!(server_name = %name, error = %e, "Delete failed");
            self.notify(format!("Delete failed: {}", e.detail()));
            return Err(e.into());
        }

        info!(server_name = %name, "MCP server deleted");
        self.notify("MCP server deleted");
        let _ = self.servers.reload().await;
        Ok(true)
    }

    /// Delete a command after confirmation.
    pub async fn delete_command(&self, name: &str) -> ConsoleResult<bool> {
        if !self.prompter.confirm(&format!("Delete command \"{name}\"?")) {
            return Ok(false);
        }

        if let Err(e) = self.api.delete_command(name).await {
            warn!(command_name = %name, error = %e, "Delete failed");
            self.notify(format!("Delete failed: {}", e.detail()));
            return Err(e.into());
        }

        info!(command_name = %name, "Command deleted");
        self.notify("Command deleted");
        let _ = self.commands.reload().await;
        Ok(true)
    }

    /// Optimistically set a server's enabled state.
    pub async fn toggle_server(&self, name: &str, enabled: bool) -> ToggleOutcome {
        self.toggles.toggle(name, enabled).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeAdminApi, command, server};
    use crate::view::RecordingView;
    use mcphub_core::{AlwaysConfirm, ApiError, AuthConfigRef, CommandSource, ListRegion};

    struct Harness {
        api: Arc<FakeAdminApi>,
        view: Arc<RecordingView>,
        controller: ConsoleController,
    }

    fn harness(api: FakeAdminApi, confirm: bool) -> Harness {
        let api = Arc::new(api);
        let view = Arc::new(RecordingView::new());
        let controller = ConsoleController::new(
            api.clone(),
            view.clone(),
            Arc::new(AlwaysConfirm(confirm)),
            ConsoleConfig::default(),
        );
        Harness {
            api,
            view,
            controller,
        }
    }

    fn server_form(name: &str) -> FormData {
        FormData::new()
            .with("name", name)
            .with("connection_type", "sse")
            .with("enabled", "on")
            .with("sse_url", "http://host/sse")
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_activates_servers_tab() {
        let h = harness(FakeAdminApi::new().with_servers(vec![server("alpha", true)]), true);

        h.controller.start().await;

        assert_eq!(h.controller.state().active_tab, Tab::Servers);
        assert_eq!(h.view.events()[0], ConsoleEvent::TabActivated { tab: Tab::Servers });
        assert!(h.controller.is_refresh_armed());
        assert!(
            h.view
                .last_markup(ListRegion::Servers)
                .unwrap()
                .contains("alpha")
        );
        h.controller.shutdown().await;
    }

    #[tokio::test]
    async fn test_show_tab_reloads_that_collection() {
        let h = harness(
            FakeAdminApi::new().with_commands(vec![command("local-cmd", CommandSource::Local)]),
            true,
        );

        h.controller.show_tab(Tab::Commands).await;

        assert_eq!(h.controller.state().active_tab, Tab::Commands);
        assert_eq!(h.api.calls(), vec!["list_commands"]);
        assert!(!h.controller.is_refresh_armed());
    }

    #[tokio::test]
    async fn test_submit_server_form_success() {
        let h = harness(FakeAdminApi::new(), true);
        h.controller.open_modal(Modal::AddServer).await;

        h.controller.submit_server_form(&server_form("remote")).await.unwrap();

        assert_eq!(h.view.notices(), vec!["MCP server added"]);
        assert!(!h.controller.state().is_open(Modal::AddServer));
        assert!(h.view.events().contains(&ConsoleEvent::FormReset {
            modal: Modal::AddServer
        }));
        assert_eq!(h.api.servers()[0].name, "remote");
        assert!(
            h.view
                .last_markup(ListRegion::Servers)
                .unwrap()
                .contains("remote")
        );
    }

    #[tokio::test]
    async fn test_submit_server_form_rejected_keeps_modal_open() {
        let h = harness(FakeAdminApi::new().with_servers(vec![server("remote", true)]), true);
        h.controller.open_modal(Modal::AddServer).await;

        let err = h
            .controller
            .submit_server_form(&server_form("remote"))
            .await
            .unwrap_err();

        assert!(matches!(err, ConsoleError::Api(_)));
        assert_eq!(
            h.view.notices(),
            vec!["Add failed: Server 'remote' already exists"]
        );
        assert!(h.controller.state().is_open(Modal::AddServer));
        assert_eq!(h.api.call_count("list_servers"), 0);
    }

    #[tokio::test]
    async fn test_submit_form_error_sends_nothing() {
        let h = harness(FakeAdminApi::new(), true);
        let form = FormData::new().with("name", "x").with("type", "grpc");

        let err = h.controller.submit_command_form(&form).await.unwrap_err();

        assert!(matches!(err, ConsoleError::Form(_)));
        assert!(h.api.calls().is_empty());
        assert_eq!(h.view.notices(), vec!["Add failed: unsupported type 'grpc'"]);
    }

    #[tokio::test]
    async fn test_submit_command_form_success() {
        let h = harness(FakeAdminApi::new(), true);
        let form = FormData::new()
            .with("name", "cleanup")
            .with("type", "script")
            .with("script_path", "/opt/cleanup.sh");

        h.controller.submit_command_form(&form).await.unwrap();

        assert_eq!(h.view.notices(), vec!["Command added"]);
        assert_eq!(h.api.calls(), vec!["create_command", "list_commands"]);
    }

    #[tokio::test]
    async fn test_delete_declined_sends_no_request() {
        let h = harness(FakeAdminApi::new().with_servers(vec![server("alpha", true)]), false);

        let deleted = h.controller.delete_server("alpha").await.unwrap();

        assert!(!deleted);
        assert!(h.api.calls().is_empty());
        assert!(h.view.events().is_empty());
    }

    #[tokio::test]
    async fn test_delete_server_success_reloads() {
        let h = harness(FakeAdminApi::new().with_servers(vec![server("alpha", true)]), true);

        assert!(h.controller.delete_server("alpha").await.unwrap());

        assert_eq!(h.view.notices(), vec!["MCP server deleted"]);
        assert_eq!(h.api.calls(), vec!["delete_server", "list_servers"]);
        assert!(
            h.view
                .last_markup(ListRegion::Servers)
                .unwrap()
                .contains("No MCP servers configured")
        );
    }

    #[tokio::test]
    async fn test_delete_failure_does_not_reload() {
        let h = harness(FakeAdminApi::new(), true);
        h.api
            .fail("delete_command", ApiError::rejected(403, "Cannot delete MCP tool"));

        let err = h.controller.delete_command("remote").await.unwrap_err();

        assert_eq!(err, ConsoleError::Api(ApiError::rejected(403, "Cannot delete MCP tool")));
        assert_eq!(h.view.notices(), vec!["Delete failed: Cannot delete MCP tool"]);
        assert_eq!(h.api.call_count("list_commands"), 0);
    }

    #[tokio::test]
    async fn test_open_add_command_loads_auth_options() {
        let h = harness(
            FakeAdminApi::new().with_auth_configs(vec![AuthConfigRef {
                name: "github".to_string(),
                kind: "bearer_token".to_string(),
            }]),
            true,
        );

        h.controller.open_modal(Modal::AddCommand).await;

        assert!(h.controller.state().is_open(Modal::AddCommand));
        assert!(h.view.events().contains(&ConsoleEvent::auth_options_rendered(
            r#"<option value="">None</option><option value="github">github (bearer_token)</option>"#
        )));
    }

    #[tokio::test]
    async fn test_auth_load_failure_leaves_none_option() {
        let h = harness(FakeAdminApi::new(), true);
        h.api.fail("list_auth_configs", ApiError::transport("timeout"));

        h.controller.open_modal(Modal::AddCommand).await;

        assert!(h.view.notices().is_empty());
        assert!(h.view.events().contains(&ConsoleEvent::auth_options_rendered(
            r#"<option value="">None</option>"#
        )));
    }

    #[tokio::test]
    async fn test_dismiss_closes_all_without_reset() {
        let h = harness(FakeAdminApi::new(), true);
        h.controller.open_modal(Modal::AddServer).await;
        h.controller.open_modal(Modal::AddCommand).await;
        h.view.clear();

        h.controller.dismiss_modals();

        assert!(h.controller.state().open_modals.is_empty());
        assert_eq!(
            h.view.events(),
            vec![
                ConsoleEvent::ModalClosed {
                    modal: Modal::AddServer
                },
                ConsoleEvent::ModalClosed {
                    modal: Modal::AddCommand
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_opening_server_modal_does_not_touch_backend() {
        let h = harness(FakeAdminApi::new(), true);
        h.controller.open_modal(Modal::AddServer).await;
        assert!(h.api.calls().is_empty());
    }
}
