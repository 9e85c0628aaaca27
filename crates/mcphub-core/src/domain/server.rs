//! MCP server domain types.
//!
//! A "server" is a configured connector the backend reaches over stdio,
//! SSE or WebSocket. The console lists, creates, toggles and deletes them;
//! it never edits one in place.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{default_true, null_as_default, null_as_true};

/// Command used for stdio connections when the form leaves it blank.
pub const DEFAULT_STDIO_COMMAND: &str = "uvx";

/// Server timeout used when the form leaves it blank or unparseable.
pub const DEFAULT_SERVER_TIMEOUT_SECS: u64 = 30;

const fn default_timeout() -> u64 {
    DEFAULT_SERVER_TIMEOUT_SECS
}

fn null_as_default_timeout<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(DEFAULT_SERVER_TIMEOUT_SECS))
}

/// Connection settings for an MCP server, tagged by `type`.
///
/// Only the fields of the active variant exist, so a payload can never
/// carry a stale `url` on a stdio connection or `args` on an SSE one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConnectionConfig {
    /// Backend spawns `command` with `args` and talks over stdio.
    Stdio {
        /// Executable to spawn (e.g. `uvx`, `npx`).
        #[serde(default, deserialize_with = "null_as_default")]
        command: String,
        /// Arguments, one per form line.
        #[serde(default, deserialize_with = "null_as_default")]
        args: Vec<String>,
    },
    /// Server-sent events endpoint.
    Sse {
        /// Endpoint URL.
        #[serde(default, deserialize_with = "null_as_default")]
        url: String,
    },
    /// WebSocket endpoint.
    Websocket {
        /// Endpoint URL.
        #[serde(default, deserialize_with = "null_as_default")]
        url: String,
    },
}

impl ConnectionConfig {
    /// Create a stdio connection.
    pub fn stdio(command: impl Into<String>, args: Vec<String>) -> Self {
        Self::Stdio {
            command: command.into(),
            args,
        }
    }

    /// Create an SSE connection.
    pub fn sse(url: impl Into<String>) -> Self {
        Self::Sse { url: url.into() }
    }

    /// Create a WebSocket connection.
    pub fn websocket(url: impl Into<String>) -> Self {
        Self::Websocket { url: url.into() }
    }

    /// Wire name of the connection type.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Stdio { .. } => "stdio",
            Self::Sse { .. } => "sse",
            Self::Websocket { .. } => "websocket",
        }
    }
}

/// Connection status reported by the backend.
///
/// On the wire this is a plain string: `unknown`, `connecting`,
/// `connected`, `disconnected` or `error:<message>`. Anything else is kept
/// verbatim in [`ConnectionStatus::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No status reported yet.
    #[default]
    Unknown,
    /// Backend is establishing the connection.
    Connecting,
    /// Connection is up.
    Connected,
    /// Connection was closed.
    Disconnected,
    /// Connection failed; carries the text after `error:`.
    Error(String),
    /// Unrecognised status string, shown as-is.
    Other(String),
}

impl ConnectionStatus {
    /// Parse a wire status string.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | "unknown" => Self::Unknown,
            "connecting" => Self::Connecting,
            "connected" => Self::Connected,
            "disconnected" => Self::Disconnected,
            other => other.strip_prefix("error:").map_or_else(
                || Self::Other(other.to_string()),
                |message| Self::Error(message.to_string()),
            ),
        }
    }

    /// Wire representation.
    pub fn as_wire(&self) -> Cow<'_, str> {
        match self {
            Self::Unknown => Cow::Borrowed("unknown"),
            Self::Connecting => Cow::Borrowed("connecting"),
            Self::Connected => Cow::Borrowed("connected"),
            Self::Disconnected => Cow::Borrowed("disconnected"),
            Self::Error(message) => Cow::Owned(format!("error:{message}")),
            Self::Other(raw) => Cow::Borrowed(raw.as_str()),
        }
    }

    /// Presentation class suffix (`status-<class>`).
    ///
    /// Unrecognised statuses use their raw text, so callers must escape it.
    pub fn css_class(&self) -> &str {
        match self {
            Self::Unknown => "unknown",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::Error(_) => "error",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Self::Unknown => "Unknown",
            Self::Connecting => "Connecting",
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
            Self::Error(_) => "Error",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Whether the backend reported a connection error.
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_wire())
    }
}

impl Serialize for ConnectionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_wire())
    }
}

impl<'de> Deserialize<'de> for ConnectionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or(Self::Unknown, |s| Self::parse(&s)))
    }
}

/// An MCP server as listed by the backend.
///
/// Use [`NewServer`] for the creation payload; status fields are assigned
/// by the backend and never submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Unique, immutable name.
    pub name: String,

    /// Free-text description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Whether the backend should keep this server connected.
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub enabled: bool,

    /// Connection settings.
    pub connection: ConnectionConfig,

    /// Optional tool-name prefix.
    #[serde(default)]
    pub prefix: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout", deserialize_with = "null_as_default_timeout")]
    pub timeout: u64,

    /// Retry failed calls.
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub retry_on_failure: bool,

    /// Reconnect after a dropped connection.
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub auto_reconnect: bool,

    /// Current connection status.
    #[serde(default)]
    pub connection_status: ConnectionStatus,

    /// Error detail, present only in the error state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_error: Option<String>,
}

/// An MCP server to be created (no status yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewServer {
    /// Unique name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Initial enabled state.
    pub enabled: bool,
    /// Connection settings.
    pub connection: ConnectionConfig,
    /// Optional tool-name prefix; submitted as `null` when absent.
    pub prefix: Option<String>,
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Retry failed calls.
    pub retry_on_failure: bool,
    /// Reconnect after a dropped connection.
    pub auto_reconnect: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_parse_known_values() {
        assert_eq!(ConnectionStatus::parse("unknown"), ConnectionStatus::Unknown);
        assert_eq!(ConnectionStatus::parse(""), ConnectionStatus::Unknown);
        assert_eq!(
            ConnectionStatus::parse("connecting"),
            ConnectionStatus::Connecting
        );
        assert_eq!(
            ConnectionStatus::parse("connected"),
            ConnectionStatus::Connected
        );
        assert_eq!(
            ConnectionStatus::parse("disconnected"),
            ConnectionStatus::Disconnected
        );
    }

    #[test]
    fn test_status_error_keeps_message() {
        let status = ConnectionStatus::parse("error: connection refused");
        assert_eq!(
            status,
            ConnectionStatus::Error(" connection refused".to_string())
        );
        assert_eq!(status.css_class(), "error");
        assert_eq!(status.label(), "Error");
        assert_eq!(status.as_wire(), "error: connection refused");
    }

    #[test]
    fn test_status_unrecognised_is_verbatim() {
        let status = ConnectionStatus::parse("handshaking");
        assert_eq!(status, ConnectionStatus::Other("handshaking".to_string()));
        assert_eq!(status.label(), "handshaking");
        assert_eq!(status.css_class(), "handshaking");
    }

    #[test]
    fn test_listed_server_null_fields_read_as_defaults() {
        let server: ServerConfig = serde_json::from_value(json!({
            "name": "alpha",
            "description": null,
            "enabled": null,
            "connection": {"type": "sse", "url": "http://host/sse"},
            "prefix": null,
            "timeout": null,
            "retry_on_failure": null,
            "auto_reconnect": null,
            "connection_status": null
        }))
        .unwrap();

        assert!(server.enabled);
        assert_eq!(server.timeout, DEFAULT_SERVER_TIMEOUT_SECS);
        assert!(server.retry_on_failure);
        assert!(server.auto_reconnect);
        assert!(server.prefix.is_none());
        assert_eq!(server.connection_status, ConnectionStatus::Unknown);
    }

    #[test]
    fn test_status_null_reads_as_unknown() {
        let status: ConnectionStatus = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(status, ConnectionStatus::Unknown);
    }

    #[test]
    fn test_server_config_from_backend_payload() {
        // The backend serialises every connection field, active or not.
        let server: ServerConfig = serde_json::from_value(json!({
            "name": "tapd",
            "description": null,
            "enabled": true,
            "connection": {"type": "sse", "command": null, "args": [], "url": "http://x/sse"},
            "prefix": null,
            "timeout": 60,
            "retry_on_failure": true,
            "auto_reconnect": false,
            "connection_status": "error:timeout",
            "connection_error": "timeout"
        }))
        .unwrap();

        assert_eq!(server.description, "");
        assert_eq!(server.connection, ConnectionConfig::sse("http://x/sse"));
        assert_eq!(server.timeout, 60);
        assert!(!server.auto_reconnect);
        assert!(server.connection_status.is_error());
        assert_eq!(server.connection_error.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_server_config_defaults() {
        let server: ServerConfig = serde_json::from_value(json!({
            "name": "local",
            "connection": {"type": "stdio", "command": "uvx", "args": null}
        }))
        .unwrap();

        assert!(server.enabled);
        assert_eq!(server.timeout, DEFAULT_SERVER_TIMEOUT_SECS);
        assert_eq!(server.connection_status, ConnectionStatus::Unknown);
        assert_eq!(server.connection, ConnectionConfig::stdio("uvx", vec![]));
    }

    #[test]
    fn test_new_server_serializes_only_active_connection_fields() {
        let server = NewServer {
            name: "ws".to_string(),
            description: String::new(),
            enabled: true,
            connection: ConnectionConfig::websocket("ws://host/mcp"),
            prefix: None,
            timeout: 30,
            retry_on_failure: true,
            auto_reconnect: true,
        };

        let value = serde_json::to_value(&server).unwrap();
        assert_eq!(
            value["connection"],
            json!({"type": "websocket", "url": "ws://host/mcp"})
        );
        assert_eq!(value["prefix"], json!(null));
        assert!(value.get("connection_status").is_none());
    }

    #[test]
    fn test_connection_kind_names() {
        assert_eq!(ConnectionConfig::stdio("uvx", vec![]).kind(), "stdio");
        assert_eq!(ConnectionConfig::sse("u").kind(), "sse");
        assert_eq!(ConnectionConfig::websocket("u").kind(), "websocket");
    }
}
