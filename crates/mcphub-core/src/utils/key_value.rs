//! Line-oriented `key: value` parser for header and query blocks.
//!
//! Parsing is tolerant: malformed lines are dropped silently and never
//! reported back to the user.

use std::collections::BTreeMap;

/// Parse `key: value` lines into a mapping.
///
/// For each non-blank line (after trimming) the text is split at the first
/// colon. Lines without a colon, or with the colon at position 0, are
/// dropped, as are lines whose trimmed key is empty. Keys and values are
/// trimmed. Later duplicates overwrite earlier ones.
///
/// Returns `None` when no valid pair was found, so callers can omit the
/// field entirely instead of sending an empty mapping.
///
/// # Examples
///
/// ```rust
/// use mcphub_core::utils::parse_key_value_text;
///
/// let parsed = parse_key_value_text("a: 1\nb:2\nbad\n: x\n").unwrap();
/// assert_eq!(parsed.len(), 2);
/// assert_eq!(parsed["a"], "1");
/// assert!(parse_key_value_text("   ").is_none());
/// ```
pub fn parse_key_value_text(text: &str) -> Option<BTreeMap<String, String>> {
    let mut pairs = BTreeMap::new();

    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            tracing::trace!(line = trimmed, "Dropping key-value line without colon");
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            tracing::trace!(line = trimmed, "Dropping key-value line with empty key");
            continue;
        }

        pairs.insert(key.to_string(), value.trim().to_string());
    }

    (!pairs.is_empty()).then_some(pairs)
}
