//! `mcphub servers ...` handlers.

use std::sync::Arc;

use anyhow::Result;
use mcphub_console::{ConsoleController, ToggleOutcome};
use mcphub_core::{AlwaysConfirm, Prompter, ServerConfig};

use crate::bootstrap::CliContext;
use crate::commands::{ServerAddArgs, ServersCommand};
use crate::error::CliError;
use crate::presentation::{TerminalView, format_optional, print_separator, truncate_string, yes_no};
use crate::utils::StdinPrompter;

/// Dispatch a `servers` subcommand.
pub async fn execute(ctx: &CliContext, command: ServersCommand) -> Result<()> {
    match command {
        ServersCommand::List => list(ctx).await,
        ServersCommand::Add(args) => add(ctx, &args).await,
        ServersCommand::Toggle {
            name,
            enable,
            disable,
        } => {
            let desired = if enable {
                Some(true)
            } else if disable {
                Some(false)
            } else {
                None
            };
            toggle(ctx, &name, desired).await
        }
        ServersCommand::Rm { name, force } => remove(ctx, &name, force).await,
        ServersCommand::Test { name } => {
            let message = ctx.api().test_server(&name).await.map_err(CliError::from)?;
            print_message(&message, &format!("Test requested for '{name}'"));
            Ok(())
        }
        ServersCommand::Reconnect { name } => {
            let message = ctx
                .api()
                .reconnect_server(&name)
                .await
                .map_err(CliError::from)?;
            print_message(&message, &format!("Reconnect requested for '{name}'"));
            Ok(())
        }
    }
}

fn print_message(message: &str, fallback: &str) {
    if message.is_empty() {
        println!("{fallback}");
    } else {
        println!("{message}");
    }
}

fn console(ctx: &CliContext, prompter: Arc<dyn Prompter>) -> ConsoleController {
    ctx.console(Arc::new(TerminalView::notices_only()), prompter)
}

/// One table row for a server.
pub fn server_row(server: &ServerConfig) -> String {
    format!(
        "{:<24} {:<8} {:<10} {:<14} {:<10} {}",
        truncate_string(&server.name, 23),
        yes_no(server.enabled),
        server.connection.kind(),
        truncate_string(server.connection_status.label(), 13),
        truncate_string(&format_optional(server.prefix.as_deref(), "--"), 9),
        server.timeout
    )
}

async fn list(ctx: &CliContext) -> Result<()> {
    let servers = ctx.api().list_servers().await.map_err(CliError::from)?;

    if servers.is_empty() {
        println!("No MCP servers configured.");
        println!("Use 'mcphub servers add <name>' to add one.");
        return Ok(());
    }

    println!(
        "{:<24} {:<8} {:<10} {:<14} {:<10} Timeout",
        "Name", "Enabled", "Type", "Status", "Prefix"
    );
    print_separator(80);
    for server in &servers {
        println!("{}", server_row(server));
        if let Some(error) = server.connection_error.as_deref().filter(|e| !e.is_empty()) {
            println!("  Error: {error}");
        }
    }

    Ok(())
}

async fn add(ctx: &CliContext, args: &ServerAddArgs) -> Result<()> {
    console(ctx, Arc::new(AlwaysConfirm(true)))
        .submit_server_form(&args.to_form())
        .await
        .map_err(CliError::from)?;
    Ok(())
}

/// Set a server's enabled state.
///
/// The backend only offers a flip, so the current state is looked up first
/// and no request is sent when it already matches.
async fn toggle(ctx: &CliContext, name: &str, desired: Option<bool>) -> Result<()> {
    let servers = ctx.api().list_servers().await.map_err(CliError::from)?;
    let Some(current) = servers.iter().find(|s| s.name == name).map(|s| s.enabled) else {
        return Err(CliError::Arguments(format!("No MCP server named '{name}'")).into());
    };

    let target = desired.unwrap_or(!current);
    if target == current {
        println!(
            "{name} is already {}",
            if current { "enabled" } else { "disabled" }
        );
        return Ok(());
    }

    match console(ctx, Arc::new(AlwaysConfirm(true)))
        .toggle_server(name, target)
        .await
    {
        ToggleOutcome::Confirmed => Ok(()),
        ToggleOutcome::RolledBack => {
            Err(CliError::Rejected(format!("Could not toggle '{name}'")).into())
        }
    }
}

async fn remove(ctx: &CliContext, name: &str, force: bool) -> Result<()> {
    let prompter: Arc<dyn Prompter> = if force {
        Arc::new(AlwaysConfirm(true))
    } else {
        Arc::new(StdinPrompter)
    };

    let deleted = console(ctx, prompter)
        .delete_server(name)
        .await
        .map_err(CliError::from)?;
    if !deleted {
        println!("Delete cancelled.");
    }
    Ok(())
}
