//! Main CLI parser and top-level argument handling.

use clap::Parser;
use mcphub_client::DEFAULT_ADMIN_URL;

use crate::commands::Commands;

/// Command-line interface for administering an mcphub backend.
#[derive(Parser)]
#[command(name = "mcphub")]
#[command(about = "Manage MCP servers and commands on an mcphub backend")]
#[command(version)]
pub struct Cli {
    /// Admin API origin
    #[arg(
        long = "admin-url",
        env = "MCPHUB_ADMIN_URL",
        default_value = DEFAULT_ADMIN_URL,
        global = true
    )]
    pub admin_url: String,

    /// Request timeout in seconds
    #[arg(
        long = "request-timeout",
        env = "MCPHUB_TIMEOUT",
        default_value_t = 30,
        global = true
    )]
    pub request_timeout: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{RenderTarget, ServersCommand};
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "mcphub",
            "--verbose",
            "--admin-url",
            "http://10.0.0.2:18888",
            "servers",
            "list",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.admin_url, "http://10.0.0.2:18888");
        assert!(matches!(
            cli.command,
            Some(Commands::Servers {
                command: ServersCommand::List
            })
        ));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["mcphub", "render", "commands", "--request-timeout", "5"]);
        assert_eq!(cli.request_timeout, 5);
        assert!(matches!(
            cli.command,
            Some(Commands::Render {
                target: RenderTarget::Commands
            })
        ));
    }
}
