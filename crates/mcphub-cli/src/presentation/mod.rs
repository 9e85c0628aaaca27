//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: rendering decisions about servers and
//! commands live in `mcphub-console`.

pub mod tables;
pub mod view;

// Re-export commonly used items
pub use tables::{format_optional, print_separator, truncate_string, yes_no};
pub use view::TerminalView;
