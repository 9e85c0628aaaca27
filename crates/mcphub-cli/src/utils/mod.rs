//! Utility modules for CLI operations.

pub mod input;

pub use input::StdinPrompter;
