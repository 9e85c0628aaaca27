//! `mcphub watch` handler.
//!
//! Hosts a full console session in the terminal: the servers list is loaded
//! once and then refreshed on every tick until Ctrl-C.

use std::sync::Arc;

use anyhow::{Context, Result};
use mcphub_core::AlwaysConfirm;
use tracing::info;

use crate::bootstrap::CliContext;
use crate::presentation::TerminalView;

/// Execute the watch command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let console = ctx.console(
        Arc::new(TerminalView::with_markup()),
        Arc::new(AlwaysConfirm(false)),
    );

    println!(
        "Watching {} every {}s (Ctrl-C to stop)",
        ctx.config().admin_url,
        ctx.config().refresh_interval.as_secs()
    );
    console.start().await;

    let signal = tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C");
    info!("Stopping watch");
    console.shutdown().await;
    signal
}
