//! Console events emitted to a [`ConsoleView`](crate::ports::ConsoleView).
//!
//! Every state change the console wants reflected in the UI is one of these
//! events. Markup carried by an event is already escaped.
//!
//! # Wire Format
//!
//! Events serialize with a `type` tag so a browser bridge can forward them:
//!
//! ```json
//! { "type": "list_rendered", "region": "servers", "markup": "<div ...>" }
//! ```

use serde::{Deserialize, Serialize};

/// Console tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// MCP servers tab (default on load).
    #[default]
    Servers,
    /// Commands tab.
    Commands,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Self; 2] = [Self::Servers, Self::Commands];

    /// List region shown inside this tab.
    pub const fn region(self) -> ListRegion {
        match self {
            Self::Servers => ListRegion::Servers,
            Self::Commands => ListRegion::Commands,
        }
    }
}

/// Modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modal {
    /// "Add MCP server" form.
    AddServer,
    /// "Add command" form.
    AddCommand,
}

impl Modal {
    /// Every modal.
    pub const ALL: [Self; 2] = [Self::AddServer, Self::AddCommand];
}

/// Rendered list region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListRegion {
    /// `#servers-list`.
    Servers,
    /// `#commands-list`.
    Commands,
}

impl ListRegion {
    /// DOM element id of the region.
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Servers => "servers-list",
            Self::Commands => "commands-list",
        }
    }
}

/// Events emitted by the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConsoleEvent {
    /// Replace the whole content of a list region.
    ListRendered {
        /// Target region.
        region: ListRegion,
        /// Escaped markup.
        markup: String,
    },

    /// Flip a server's enable switch before the backend confirms.
    ToggleFlipped {
        /// Server whose switch changes.
        server_name: String,
        /// New switch position.
        enabled: bool,
    },

    /// Replace the options of the auth-config selection control.
    AuthOptionsRendered {
        /// Escaped `<option>` markup.
        markup: String,
    },

    /// A tab became active; all others are inactive.
    TabActivated {
        /// Active tab.
        tab: Tab,
    },

    /// A modal was shown.
    ModalOpened {
        /// Shown modal.
        modal: Modal,
    },

    /// A modal was hidden.
    ModalClosed {
        /// Hidden modal.
        modal: Modal,
    },

    /// A modal's form was cleared.
    FormReset {
        /// Modal owning the form.
        modal: Modal,
    },

    /// Blocking user notification.
    Notice {
        /// Plain-text message.
        message: String,
    },
}

impl ConsoleEvent {
    /// Create a list render event.
    pub fn list_rendered(region: ListRegion, markup: impl Into<String>) -> Self {
        Self::ListRendered {
            region,
            markup: markup.into(),
        }
    }

    /// Create an optimistic toggle event.
    pub fn toggle_flipped(server_name: impl Into<String>, enabled: bool) -> Self {
        Self::ToggleFlipped {
            server_name: server_name.into(),
            enabled,
        }
    }

    /// Create an auth options render event.
    pub fn auth_options_rendered(markup: impl Into<String>) -> Self {
        Self::AuthOptionsRendered {
            markup: markup.into(),
        }
    }

    /// Create a notice event.
    pub fn notice(message: impl Into<String>) -> Self {
        Self::Notice {
            message: message.into(),
        }
    }
}
