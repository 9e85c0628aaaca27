//! Form-to-payload mapping.
//!
//! The add-server and add-command forms are flat: every variant's fields
//! are present at once and a discriminator field picks which ones count.
//! Mapping builds exactly one enum variant from the discriminator, so a
//! payload can never carry fields of an inactive variant.
//!
//! Mapping is pure. The same form always yields the same payload.

use mcphub_core::domain::{
    DEFAULT_HTTP_METHOD, DEFAULT_INTERPRETER, DEFAULT_SERVER_TIMEOUT_SECS, DEFAULT_STDIO_COMMAND,
};
use mcphub_core::{
    AuthRef, CommandKind, ConnectionConfig, HttpCommand, NewCommand, NewServer, RequestBody,
    ScriptCommand, parse_key_value_text,
};

use crate::error::FormError;

/// Value a checked checkbox submits.
const CHECKED: &str = "on";

/// Submitted form fields, in submission order.
///
/// Unchecked checkboxes are absent, as in a browser submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    /// Append a field only when a value is present.
    #[must_use]
    pub fn with_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of `name`, empty when absent.
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Non-empty value of `name`.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// Whether a checkbox named `name` was checked.
    pub fn is_checked(&self, name: &str) -> bool {
        self.get(name) == Some(CHECKED)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Parse the leading integer of a field, the way a lenient number input
/// does: leading whitespace and a `+` sign are skipped, digits are read up
/// to the first non-digit. No digits, a minus sign or overflow give `None`.
///
/// ```
/// use mcphub_console::forms::parse_leading_int;
///
/// assert_eq!(parse_leading_int(" 45s"), Some(45));
/// assert_eq!(parse_leading_int("abc"), None);
/// ```
pub fn parse_leading_int(text: &str) -> Option<u64> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

/// Body text: blank is omitted, valid JSON is structured, anything else is
/// sent as the trimmed literal.
fn parse_body(text: &str) -> Option<RequestBody> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).map_or_else(
        |_| RequestBody::Text(text.trim().to_string()),
        RequestBody::Json,
    ))
}

// ============================================================================
// Command form
// ============================================================================

/// Map the add-command form to a creation payload.
///
/// Discriminator: `type` (`http` | `script`).
pub fn map_command_form(form: &FormData) -> Result<NewCommand, FormError> {
    let kind = match form.non_empty("type") {
        None => return Err(FormError::MissingDiscriminator { field: "type" }),
        Some("http") => CommandKind::Http {
            http: map_http_fields(form),
        },
        Some("script") => CommandKind::Script {
            script: ScriptCommand {
                interpreter: form
                    .non_empty("script_interpreter")
                    .unwrap_or(DEFAULT_INTERPRETER)
                    .to_string(),
                path: form.value("script_path").to_string(),
            },
        },
        Some(other) => {
            return Err(FormError::UnknownDiscriminator {
                field: "type",
                value: other.to_string(),
            });
        }
    };

    Ok(NewCommand {
        name: form.value("name").to_string(),
        description: form.value("description").to_string(),
        kind,
        enabled: form.is_checked("enabled"),
        parameters: Vec::new(),
    })
}

fn map_http_fields(form: &FormData) -> HttpCommand {
    HttpCommand {
        method: form
            .non_empty("http_method")
            .unwrap_or(DEFAULT_HTTP_METHOD)
            .to_string(),
        url: form.value("http_url").to_string(),
        auth: form.non_empty("http_auth_ref").map(AuthRef::new),
        headers: parse_key_value_text(form.value("http_headers")),
        params: parse_key_value_text(form.value("http_params")),
        body: parse_body(form.value("http_body")),
        timeout: form.non_empty("http_timeout").and_then(parse_leading_int),
        response_format: form.non_empty("http_response_format").map(String::from),
    }
}

// ============================================================================
// Server form
// ============================================================================

/// Map the add-server form to a creation payload.
///
/// Discriminator: `connection_type` (`stdio` | `sse` | `websocket`).
pub fn map_server_form(form: &FormData) -> Result<NewServer, FormError> {
    let connection = match form.non_empty("connection_type") {
        None => {
            return Err(FormError::MissingDiscriminator {
                field: "connection_type",
            });
        }
        Some("stdio") => ConnectionConfig::stdio(
            form.non_empty("stdio_command")
                .unwrap_or(DEFAULT_STDIO_COMMAND),
            split_args(form.value("stdio_args")),
        ),
        Some("sse") => ConnectionConfig::sse(form.value("sse_url")),
        Some("websocket") => ConnectionConfig::websocket(form.value("websocket_url")),
        Some(other) => {
            return Err(FormError::UnknownDiscriminator {
                field: "connection_type",
                value: other.to_string(),
            });
        }
    };

    Ok(NewServer {
        name: form.value("name").to_string(),
        description: form.value("description").to_string(),
        enabled: form.is_checked("enabled"),
        connection,
        prefix: form.non_empty("prefix").map(String::from),
        timeout: form
            .non_empty("timeout")
            .and_then(parse_leading_int)
            .unwrap_or(DEFAULT_SERVER_TIMEOUT_SECS),
        retry_on_failure: true,
        auto_reconnect: true,
    })
}

/// One argument per line; blank lines dropped, other lines kept verbatim.
fn split_args(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}
