//! Auth config references.
//!
//! Auth configs are managed by the backend; the console only lists them to
//! let an HTTP command point at one by name.

use serde::{Deserialize, Serialize};

/// A named auth config as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfigRef {
    /// Config name, used as the reference key.
    pub name: String,

    /// Auth scheme (`api_key`, `bearer_token`, `basic_auth`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl AuthConfigRef {
    /// Label shown in the selection control: `name (type)`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

/// Reference from an HTTP command to an auth config: `{"ref": "<name>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRef {
    /// Name of the referenced auth config.
    #[serde(rename = "ref")]
    pub reference: String,
}

impl AuthRef {
    /// Create a reference to the named auth config.
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}
