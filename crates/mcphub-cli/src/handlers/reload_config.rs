//! `mcphub reload-config` handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Ask the backend to re-read its configuration file.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let message = ctx.api().reload_config().await.map_err(CliError::from)?;
    if message.is_empty() {
        println!("Configuration reloaded");
    } else {
        println!("{message}");
    }
    Ok(())
}
