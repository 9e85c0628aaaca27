//! `mcphub auth ...` handlers.

use anyhow::Result;
use mcphub_core::AuthConfigRef;

use crate::bootstrap::CliContext;
use crate::commands::AuthCommand;
use crate::error::CliError;
use crate::presentation::{print_separator, truncate_string};

/// Dispatch an `auth` subcommand.
pub async fn execute(ctx: &CliContext, command: AuthCommand) -> Result<()> {
    match command {
        AuthCommand::List => list(ctx).await,
    }
}

fn auth_row(config: &AuthConfigRef) -> String {
    format!("{:<24} {}", truncate_string(&config.name, 23), config.kind)
}

async fn list(ctx: &CliContext) -> Result<()> {
    let configs = ctx.api().list_auth_configs().await.map_err(CliError::from)?;

    if configs.is_empty() {
        println!("No auth configs defined.");
        return Ok(());
    }

    println!("{:<24} Type", "Name");
    print_separator(40);
    for config in &configs {
        println!("{}", auth_row(config));
    }
    Ok(())
}
