//! `mcphub commands ...` handlers.

use std::sync::Arc;

use anyhow::Result;
use mcphub_core::{AlwaysConfirm, CommandConfig, CommandSource, Prompter};

use crate::bootstrap::CliContext;
use crate::commands::{CommandAddArgs, CommandsCommand};
use crate::error::CliError;
use crate::presentation::{TerminalView, format_optional, print_separator, truncate_string, yes_no};
use crate::utils::StdinPrompter;

/// Dispatch a `commands` subcommand.
pub async fn execute(ctx: &CliContext, command: CommandsCommand) -> Result<()> {
    match command {
        CommandsCommand::List => list(ctx).await,
        CommandsCommand::Add(args) => add(ctx, &args).await,
        CommandsCommand::Rm { name, force } => remove(ctx, &name, force).await,
    }
}

const fn source_name(source: CommandSource) -> &'static str {
    match source {
        CommandSource::Local => "local",
        CommandSource::Mcp => "mcp",
        CommandSource::Unknown => "unknown",
    }
}

/// One table row for a command.
pub fn command_row(command: &CommandConfig) -> String {
    format!(
        "{:<24} {:<7} {:<8} {:<8} {}",
        truncate_string(&command.name, 23),
        command.kind.kind(),
        source_name(command.source),
        yes_no(command.enabled),
        format_optional(command.service.as_deref(), "--")
    )
}

async fn list(ctx: &CliContext) -> Result<()> {
    let commands = ctx.api().list_commands().await.map_err(CliError::from)?;

    if commands.is_empty() {
        println!("No commands configured.");
        println!("Use 'mcphub commands add <name> --type http|script' to add one.");
        return Ok(());
    }

    println!(
        "{:<24} {:<7} {:<8} {:<8} Service",
        "Name", "Type", "Source", "Enabled"
    );
    print_separator(70);
    for command in &commands {
        println!("{}", command_row(command));
    }

    Ok(())
}

async fn add(ctx: &CliContext, args: &CommandAddArgs) -> Result<()> {
    ctx.console(
        Arc::new(TerminalView::notices_only()),
        Arc::new(AlwaysConfirm(true)),
    )
    .submit_command_form(&args.to_form())
    .await
    .map_err(CliError::from)?;
    Ok(())
}

/// Delete a local command.
///
/// Only `source = local` commands may be deleted, so the command is looked
/// up first and anything else is refused without a request.
async fn remove(ctx: &CliContext, name: &str, force: bool) -> Result<()> {
    let commands = ctx.api().list_commands().await.map_err(CliError::from)?;
    let Some(source) = commands.iter().find(|c| c.name == name).map(|c| c.source) else {
        return Err(CliError::Arguments(format!("No command named '{name}'")).into());
    };
    if !source.is_deletable() {
        return Err(CliError::Arguments(format!(
            "'{name}' is not a local command and cannot be deleted (source: {})",
            source_name(source)
        ))
        .into());
    }

    let prompter: Arc<dyn Prompter> = if force {
        Arc::new(AlwaysConfirm(true))
    } else {
        Arc::new(StdinPrompter)
    };

    let deleted = ctx
        .console(Arc::new(TerminalView::notices_only()), prompter)
        .delete_command(name)
        .await
        .map_err(CliError::from)?;
    if !deleted {
        println!("Delete cancelled.");
    }
    Ok(())
}
