//! Command domain types.
//!
//! A command is either a local HTTP/script definition or an operation
//! surfaced by a connected MCP server (`source = mcp`). The kind-specific
//! payload lives under a key named after the kind:
//!
//! ```json
//! { "name": "weather", "type": "http", "http": { "method": "GET", "url": "..." } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::{AuthRef, default_true, null_as_default, null_as_true};

/// HTTP method used when the form leaves it blank.
pub const DEFAULT_HTTP_METHOD: &str = "GET";

/// Script interpreter used when the form leaves it blank.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Parameter type assumed when the backend omits it.
pub const DEFAULT_PARAMETER_TYPE: &str = "string";

fn default_method() -> String {
    DEFAULT_HTTP_METHOD.to_string()
}

fn default_interpreter() -> String {
    DEFAULT_INTERPRETER.to_string()
}

fn default_parameter_type() -> String {
    DEFAULT_PARAMETER_TYPE.to_string()
}

/// `null` reads as `fallback`, like an absent field.
fn null_or<'de, D: Deserializer<'de>>(deserializer: D, fallback: &str) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(|| fallback.to_string()))
}

fn null_as_method<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    null_or(deserializer, DEFAULT_HTTP_METHOD)
}

fn null_as_interpreter<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    null_or(deserializer, DEFAULT_INTERPRETER)
}

fn null_as_parameter_type<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    null_or(deserializer, DEFAULT_PARAMETER_TYPE)
}

/// Request body of an HTTP command.
///
/// Structured JSON is preferred; text that fails to parse is sent as a
/// literal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestBody {
    /// Literal text body.
    Text(String),
    /// Structured JSON body.
    Json(serde_json::Value),
}

impl RequestBody {
    /// Whether the body was parsed as structured data.
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

/// Payload of an HTTP command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpCommand {
    /// HTTP method.
    #[serde(default = "default_method", deserialize_with = "null_as_method")]
    pub method: String,

    /// Target URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// Reference to a named auth config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthRef>,

    /// Extra request headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,

    /// Query parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<BTreeMap<String, String>>,

    /// Request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,

    /// Timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Expected response format (`json`, `xml`, `text`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<String>,
}

impl Default for HttpCommand {
    fn default() -> Self {
        Self {
            method: default_method(),
            url: String::new(),
            auth: None,
            headers: None,
            params: None,
            body: None,
            timeout: None,
            response_format: None,
        }
    }
}

/// Payload of a script command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptCommand {
    /// Interpreter binary (`python3`, `bash`, `node`, ...).
    #[serde(default = "default_interpreter", deserialize_with = "null_as_interpreter")]
    pub interpreter: String,

    /// Script path on the backend host.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
}

impl Default for ScriptCommand {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            path: String::new(),
        }
    }
}

/// Kind of command, tagged by `type`, with its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CommandKind {
    /// HTTP request command.
    Http {
        /// HTTP payload.
        #[serde(default, deserialize_with = "null_as_default")]
        http: HttpCommand,
    },
    /// Local script command.
    Script {
        /// Script payload.
        #[serde(default, deserialize_with = "null_as_default")]
        script: ScriptCommand,
    },
}

impl CommandKind {
    /// Wire name of the kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Http { .. } => "http",
            Self::Script { .. } => "script",
        }
    }
}

/// Where a command came from. Assigned by the backend, never submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandSource {
    /// Defined in the backend's local configuration.
    Local,
    /// Surfaced by a connected MCP server.
    Mcp,
    /// Missing or unrecognised provenance.
    #[default]
    #[serde(other)]
    Unknown,
}

impl CommandSource {
    /// Only locally defined commands may be deleted from the console.
    pub const fn is_deletable(self) -> bool {
        matches!(self, Self::Local)
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mcp => "MCP tool",
            Self::Local | Self::Unknown => "Local command",
        }
    }
}

/// Declared parameter of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name.
    pub name: String,

    /// Parameter type (`string`, `number`, `boolean`, `array`, `object`).
    #[serde(
        rename = "type",
        default = "default_parameter_type",
        deserialize_with = "null_as_parameter_type"
    )]
    pub kind: String,

    /// Whether the caller must supply it.
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub required: bool,

    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A command as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Unique name.
    pub name: String,

    /// Free-text description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Kind and payload.
    #[serde(flatten)]
    pub kind: CommandKind,

    /// Whether the command is exposed.
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub enabled: bool,

    /// Provenance.
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: CommandSource,

    /// Owning MCP server, for `source = mcp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Declared parameters.
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<ParameterSpec>,
}

/// A command to be created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCommand {
    /// Unique name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Kind and payload.
    #[serde(flatten)]
    pub kind: CommandKind,
    /// Initial enabled state.
    pub enabled: bool,
    /// Declared parameters; always empty from the console.
    pub parameters: Vec<ParameterSpec>,
}
