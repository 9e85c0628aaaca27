//! In-process view implementations.

use std::sync::Mutex;

use mcphub_core::{ConsoleEvent, ConsoleView, ListRegion};

/// A view that records every event it receives.
///
/// Used by tests to assert on rendering order, and by one-shot hosts (such
/// as `mcphub render`) that only need the final markup of a region.
#[derive(Debug, Default)]
pub struct RecordingView {
    events: Mutex<Vec<ConsoleEvent>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events so far.
    pub fn events(&self) -> Vec<ConsoleEvent> {
        self.lock().clone()
    }

    /// Every markup rendered into `region`, oldest first.
    pub fn markups(&self, region: ListRegion) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::ListRendered { region: r, markup } if *r == region => {
                    Some(markup.clone())
                }
                _ => None,
            })
            .collect()
    }

    /// Current content of `region`.
    pub fn last_markup(&self, region: ListRegion) -> Option<String> {
        self.markups(region).pop()
    }

    /// Notice messages, oldest first.
    pub fn notices(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::Notice { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ConsoleEvent>> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ConsoleView for RecordingView {
    fn emit(&self, event: ConsoleEvent) {
        self.lock().push(event);
    }
}
