//! CLI subcommand definitions.
//!
//! The `add` subcommands mirror the console's add-forms field for field and
//! go through the same form mapper, so the terminal and the browser submit
//! identical payloads.

use clap::{Args, Subcommand, ValueEnum};
use mcphub_console::FormData;

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage MCP servers
    Servers {
        #[command(subcommand)]
        command: ServersCommand,
    },

    /// Manage commands
    Commands {
        #[command(subcommand)]
        command: CommandsCommand,
    },

    /// Inspect auth configs
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Run one synchronization pass and print the escaped list markup
    Render {
        /// Collection to render
        #[arg(value_enum)]
        target: RenderTarget,
    },

    /// Keep the servers list in sync and print it on every refresh
    Watch {
        /// Refresh period in seconds
        #[arg(long, default_value_t = 5)]
        interval: u64,
    },

    /// Ask the backend to reload its configuration file
    ReloadConfig,
}

/// `mcphub servers ...`
#[derive(Subcommand, Debug)]
pub enum ServersCommand {
    /// List configured MCP servers
    List,

    /// Add an MCP server
    Add(ServerAddArgs),

    /// Enable or disable an MCP server (flips it when no flag is given)
    Toggle {
        /// Server name
        name: String,
        /// Enable the server
        #[arg(long, conflicts_with = "disable")]
        enable: bool,
        /// Disable the server
        #[arg(long)]
        disable: bool,
    },

    /// Delete an MCP server
    #[command(alias = "remove")]
    Rm {
        /// Server name
        name: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Ask the backend to test a server connection
    Test {
        /// Server name
        name: String,
    },

    /// Ask the backend to reconnect a server
    Reconnect {
        /// Server name
        name: String,
    },
}

/// `mcphub commands ...`
#[derive(Subcommand, Debug)]
pub enum CommandsCommand {
    /// List commands, local and MCP-provided
    List,

    /// Add a local command
    Add(CommandAddArgs),

    /// Delete a local command
    #[command(alias = "remove")]
    Rm {
        /// Command name
        name: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// `mcphub auth ...`
#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// List auth configs available to HTTP commands
    List,
}

/// Collection for `mcphub render`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    Servers,
    Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionTypeArg {
    Stdio,
    Sse,
    Websocket,
}

impl ConnectionTypeArg {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Stdio => "stdio",
            Self::Sse => "sse",
            Self::Websocket => "websocket",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandTypeArg {
    Http,
    Script,
}

impl CommandTypeArg {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Script => "script",
        }
    }
}

/// Flags for `mcphub servers add`.
#[derive(Args, Debug)]
pub struct ServerAddArgs {
    /// Unique server name
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Connection type
    #[arg(long = "type", value_enum, default_value = "stdio")]
    pub connection_type: ConnectionTypeArg,

    /// Executable for stdio connections (default: uvx)
    #[arg(long)]
    pub command: Option<String>,

    /// Argument for stdio connections; repeat for several
    #[arg(long = "arg", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Endpoint for sse and websocket connections
    #[arg(long)]
    pub url: Option<String>,

    /// Tool-name prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Timeout in seconds (default: 30)
    #[arg(long)]
    pub timeout: Option<String>,

    /// Create the server disabled
    #[arg(long)]
    pub disabled: bool,
}

impl ServerAddArgs {
    /// The add-server form these flags describe.
    pub fn to_form(&self) -> FormData {
        let url = self.url.as_deref();
        let mut form = FormData::new()
            .with("name", self.name.as_str())
            .with_opt("description", self.description.as_deref())
            .with("connection_type", self.connection_type.as_str())
            .with_opt("prefix", self.prefix.as_deref())
            .with_opt("timeout", self.timeout.as_deref())
            .with_opt("stdio_command", self.command.as_deref())
            .with("stdio_args", self.args.join("\n"))
            .with_opt("sse_url", url)
            .with_opt("websocket_url", url);
        if !self.disabled {
            form.append("enabled", "on");
        }
        form
    }
}

/// Flags for `mcphub commands add`.
#[derive(Args, Debug)]
pub struct CommandAddArgs {
    /// Unique command name
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Command type
    #[arg(long = "type", value_enum)]
    pub command_type: CommandTypeArg,

    /// HTTP method (default: GET)
    #[arg(long)]
    pub method: Option<String>,

    /// HTTP target URL
    #[arg(long)]
    pub url: Option<String>,

    /// Name of an auth config to attach
    #[arg(long)]
    pub auth: Option<String>,

    /// Request header as `Key: Value`; repeat for several
    #[arg(long = "header")]
    pub headers: Vec<String>,

    /// Query parameter as `key: value`; repeat for several
    #[arg(long = "param")]
    pub params: Vec<String>,

    /// Request body; JSON is sent structured, anything else as text
    #[arg(long)]
    pub body: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout: Option<String>,

    /// Expected response format (json, xml, text)
    #[arg(long)]
    pub response_format: Option<String>,

    /// Script interpreter (default: python3)
    #[arg(long)]
    pub interpreter: Option<String>,

    /// Script path on the backend host
    #[arg(long)]
    pub path: Option<String>,

    /// Create the command disabled
    #[arg(long)]
    pub disabled: bool,
}

impl CommandAddArgs {
    /// The add-command form these flags describe.
    pub fn to_form(&self) -> FormData {
        let mut form = FormData::new()
            .with("name", self.name.as_str())
            .with_opt("description", self.description.as_deref())
            .with("type", self.command_type.as_str())
            .with_opt("http_method", self.method.as_deref())
            .with_opt("http_url", self.url.as_deref())
            .with_opt("http_auth_ref", self.auth.as_deref())
            .with("http_headers", self.headers.join("\n"))
            .with("http_params", self.params.join("\n"))
            .with_opt("http_body", self.body.as_deref())
            .with_opt("http_timeout", self.timeout.as_deref())
            .with_opt("http_response_format", self.response_format.as_deref())
            .with_opt("script_interpreter", self.interpreter.as_deref())
            .with_opt("script_path", self.path.as_deref());
        if !self.disabled {
            form.append("enabled", "on");
        }
        form
    }
}
