//! Optimistic enable/disable of MCP servers.

use std::sync::Arc;
use std::time::Duration;

use mcphub_core::{AdminApiPort, ConsoleEvent, ConsoleView};
use tracing::{info, warn};

use crate::sync::{ResourceSynchronizer, ServerCollection};

/// Result of an optimistic toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The backend accepted the toggle; the list was reloaded after the
    /// settle delay.
    Confirmed,
    /// The backend refused or was unreachable; the list was reloaded at
    /// once so the switch shows the backend's value.
    RolledBack,
}

/// Flips a server's switch before the backend confirms, then reconciles.
///
/// There is no local revert on failure. The immediate full reload is what
/// restores the switch, so it ends up at whatever the backend holds.
pub struct ToggleController {
    api: Arc<dyn AdminApiPort>,
    view: Arc<dyn ConsoleView>,
    servers: Arc<ResourceSynchronizer<ServerCollection>>,
    settle_delay: Duration,
}

impl ToggleController {
    pub fn new(
        api: Arc<dyn AdminApiPort>,
        view: Arc<dyn ConsoleView>,
        servers: Arc<ResourceSynchronizer<ServerCollection>>,
        settle_delay: Duration,
    ) -> Self {
        Self {
            api,
            view,
            servers,
            settle_delay,
        }
    }

    pub async fn toggle(&self, name: &str, enabled: bool) -> ToggleOutcome {
        self.view.emit(ConsoleEvent::toggle_flipped(name, enabled));

        match self.api.toggle_server(name).await {
            Ok(()) => {
                info!(server_name = %name, enabled, "Server toggled");
                tokio::time::sleep(self.settle_delay).await;
                // Reload failures render inline in the list.
                let _ = self.servers.reload().await;
                ToggleOutcome::Confirmed
            }
            Err(e) => {
                warn!(server_name = %name, error = %e, "Server toggle failed");
                self.view
                    .emit(ConsoleEvent::notice(format!("Operation failed: {}", e.detail())));
                let _ = self.servers.reload().await;
                ToggleOutcome::RolledBack
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeAdminApi, server};
    use crate::view::RecordingView;
    use mcphub_core::{ApiError, ListRegion};
    use tokio::time::Instant;

    fn controller(
        api: &Arc<FakeAdminApi>,
        view: &Arc<RecordingView>,
    ) -> ToggleController {
        let servers = Arc::new(ResourceSynchronizer::new(
            ServerCollection,
            api.clone(),
            view.clone(),
        ));
        ToggleController::new(api.clone(), view.clone(), servers, Duration::from_millis(500))
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirmed_toggle_reloads_after_settle_delay() {
        let api = Arc::new(FakeAdminApi::new().with_servers(vec![server("alpha", true)]));
        let view = Arc::new(RecordingView::new());
        let started = Instant::now();

        let outcome = controller(&api, &view).toggle("alpha", false).await;

        assert_eq!(outcome, ToggleOutcome::Confirmed);
        assert!(started.elapsed() >= Duration::from_millis(500));
        assert_eq!(
            view.events()[0],
            ConsoleEvent::toggle_flipped("alpha", false)
        );
        assert!(view.notices().is_empty());
        let markup = view.last_markup(ListRegion::Servers).unwrap();
        assert!(!markup.contains(" checked"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_toggle_restores_backend_value() {
        let api = Arc::new(FakeAdminApi::new().with_servers(vec![server("alpha", true)]));
        api.fail("toggle_server", ApiError::rejected(500, "boom"));
        let view = Arc::new(RecordingView::new());
        let started = Instant::now();

        let outcome = controller(&api, &view).toggle("alpha", false).await;

        assert_eq!(outcome, ToggleOutcome::RolledBack);
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(view.notices(), vec!["Operation failed: boom"]);
        assert_eq!(api.call_count("list_servers"), 1);
        let markup = view.last_markup(ListRegion::Servers).unwrap();
        assert!(markup.contains(" checked"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rollback_shows_backend_value_not_previous_local_value() {
        // Backend already holds `false` even though the switch was showing `true`.
        let api = Arc::new(FakeAdminApi::new().with_servers(vec![server("alpha", false)]));
        api.fail("toggle_server", ApiError::transport("connection refused"));
        let view = Arc::new(RecordingView::new());

        let outcome = controller(&api, &view).toggle("alpha", false).await;

        assert_eq!(outcome, ToggleOutcome::RolledBack);
        let markup = view.last_markup(ListRegion::Servers).unwrap();
        assert!(!markup.contains(" checked"));
    }
}
