//! User input utilities for interactive command-line prompts.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use mcphub_core::Prompter;
use tracing::warn;

/// Prompts the user for a string input.
///
/// The input is read from stdin and returned with whitespace trimmed.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_string(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read user input")?;

    Ok(input.trim().to_string())
}

/// Interpret a yes/no answer. Empty input means no.
///
/// Returns `None` for anything that is not a recognizable answer.
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input is treated as 'no'.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_string(&format!("{prompt} (y/N)"))?;
        if let Some(answer) = parse_confirmation(&input) {
            return Ok(answer);
        }
        eprintln!("Please enter 'y' for yes or 'n' for no.");
    }
}

/// Confirmation prompts answered on stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm(&self, prompt: &str) -> bool {
        prompt_confirmation(prompt).unwrap_or_else(|e| {
            warn!(error = %e, "Confirmation prompt failed; treating as declined");
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_confirmation_accepts_yes() {
        assert_eq!(parse_confirmation("y"), Some(true));
        assert_eq!(parse_confirmation(" YES "), Some(true));
    }

    #[test]
    fn test_parse_confirmation_defaults_to_no() {
        assert_eq!(parse_confirmation(""), Some(false));
        assert_eq!(parse_confirmation("n"), Some(false));
        assert_eq!(parse_confirmation("No"), Some(false));
    }

    #[test]
    fn test_parse_confirmation_rejects_garbage() {
        assert_eq!(parse_confirmation("maybe"), None);
    }
}
