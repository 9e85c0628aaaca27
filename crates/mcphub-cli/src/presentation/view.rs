//! Terminal rendering of console events.

use chrono::Local;
use mcphub_core::{ConsoleEvent, ConsoleView};
use tracing::debug;

/// Prints console events to stdout.
///
/// Notices are always printed. List markup is printed only when
/// `show_markup` is set; one-shot commands print their own tables instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalView {
    show_markup: bool,
}

impl TerminalView {
    /// A view that prints notices only.
    pub const fn notices_only() -> Self {
        Self { show_markup: false }
    }

    /// A view that also prints every rendered list.
    pub const fn with_markup() -> Self {
        Self { show_markup: true }
    }
}

/// Text to print for an event, if any.
pub fn format_event(event: &ConsoleEvent, show_markup: bool) -> Option<String> {
    match event {
        ConsoleEvent::Notice { message } => Some(message.clone()),
        ConsoleEvent::ListRendered { region, markup } if show_markup => {
            Some(format!("#{}\n{markup}", region.element_id()))
        }
        ConsoleEvent::AuthOptionsRendered { markup } if show_markup => {
            Some(format!("#http_auth_ref\n{markup}"))
        }
        ConsoleEvent::ToggleFlipped {
            server_name,
            enabled,
        } => Some(format!(
            "{server_name}: {}",
            if *enabled { "enabling" } else { "disabling" }
        )),
        _ => None,
    }
}

impl ConsoleView for TerminalView {
    fn emit(&self, event: ConsoleEvent) {
        match format_event(&event, self.show_markup) {
            Some(text) if matches!(event, ConsoleEvent::ListRendered { .. }) => {
                println!("[{}] {text}", Local::now().format("%H:%M:%S"));
            }
            Some(text) => println!("{text}"),
            None => debug!(?event, "Console event"),
        }
    }
}
