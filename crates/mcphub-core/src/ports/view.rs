//! View ports for the console.
//!
//! The console never touches a concrete UI. It emits [`ConsoleEvent`]s to a
//! [`ConsoleView`] and asks a [`Prompter`] for confirmations. A browser
//! bridge, a terminal, or a test recorder can sit behind either.

use crate::events::ConsoleEvent;

/// Receives rendering and notification events from the console.
///
/// # Implementations
///
/// - `NoopView` - For contexts that ignore rendering
/// - `RecordingView` (mcphub-console) - Records every event for inspection
/// - `TerminalView` (mcphub-cli) - Prints markup and notices
pub trait ConsoleView: Send + Sync {
    /// Apply an event to the view.
    ///
    /// Must not block; rendering is expected to be a cheap replace.
    fn emit(&self, event: ConsoleEvent);
}

/// A view that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopView;

impl NoopView {
    /// Create a new no-op view.
    pub const fn new() -> Self {
        Self
    }
}

impl ConsoleView for NoopView {
    fn emit(&self, _event: ConsoleEvent) {}
}

/// Blocking yes/no confirmation, asked before destructive actions.
pub trait Prompter: Send + Sync {
    /// Return `true` to proceed.
    fn confirm(&self, prompt: &str) -> bool;
}

/// A prompter that always gives the same answer (`--force`, tests).
#[derive(Debug, Clone, Copy)]
pub struct AlwaysConfirm(pub bool);

impl Prompter for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_noop_view_accepts_events() {
        let view: Arc<dyn ConsoleView> = Arc::new(NoopView::new());
        view.emit(ConsoleEvent::notice("ignored"));
    }

    #[test]
    fn test_always_confirm() {
        assert!(AlwaysConfirm(true).confirm("Delete?"));
        assert!(!AlwaysConfirm(false).confirm("Delete?"));
    }
}
