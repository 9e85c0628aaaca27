//! `mcphub render` handler.
//!
//! Runs one synchronization pass exactly as the browser console would and
//! prints the resulting escaped markup.

use std::sync::Arc;

use anyhow::Result;
use mcphub_console::{Collection, CommandCollection, RecordingView, ResourceSynchronizer, ServerCollection};

use crate::bootstrap::CliContext;
use crate::commands::RenderTarget;
use crate::error::CliError;

/// Execute the render command.
///
/// The markup is printed even when the fetch fails, since the inline error
/// block is what the list region would show.
pub async fn execute(ctx: &CliContext, target: RenderTarget) -> Result<()> {
    match target {
        RenderTarget::Servers => render_once(ctx, ServerCollection).await,
        RenderTarget::Commands => render_once(ctx, CommandCollection).await,
    }
}

async fn render_once<C: Collection>(ctx: &CliContext, collection: C) -> Result<()> {
    let markup = render_markup(ctx, collection).await;
    match markup {
        Ok(markup) => {
            println!("{markup}");
            Ok(())
        }
        Err((markup, err)) => {
            println!("{markup}");
            Err(err.into())
        }
    }
}

async fn render_markup<C: Collection>(
    ctx: &CliContext,
    collection: C,
) -> Result<String, (String, CliError)> {
    let view = Arc::new(RecordingView::new());
    let sync = ResourceSynchronizer::new(collection, Arc::clone(ctx.api()), view.clone());
    let region = sync.region();
    let result = sync.reload().await;
    let markup = view.last_markup(region).unwrap_or_default();

    match result {
        Ok(_) => Ok(markup),
        Err(e) => Err((markup, e.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::CliConfig;
    use mcphub_console::testing::{FakeAdminApi, server};
    use mcphub_core::ApiError;
    use std::time::Duration;

    fn context(api: &Arc<FakeAdminApi>) -> CliContext {
        CliContext::new(
            api.clone(),
            CliConfig {
                admin_url: "http://127.0.0.1:18888".to_string(),
                timeout: Duration::from_secs(30),
                refresh_interval: Duration::from_secs(5),
            },
        )
    }

    #[tokio::test]
    async fn test_renders_escaped_server_cards() {
        let api = Arc::new(FakeAdminApi::new().with_servers(vec![server("<alpha>", true)]));

        let markup = render_markup(&context(&api), ServerCollection).await.unwrap();

        assert!(markup.contains("&lt;alpha&gt;"));
        assert!(!markup.contains("<alpha>"));
    }

    #[tokio::test]
    async fn test_empty_commands_placeholder() {
        let api = Arc::new(FakeAdminApi::new());

        let markup = render_markup(&context(&api), CommandCollection).await.unwrap();

        assert!(markup.contains("No commands"));
    }

    #[tokio::test]
    async fn test_failure_keeps_inline_error_markup() {
        let api = Arc::new(FakeAdminApi::new());
        api.fail("list_servers", ApiError::transport("connection refused"));

        let (markup, err) = render_markup(&context(&api), ServerCollection)
            .await
            .unwrap_err();

        assert!(markup.contains("Failed to load: connection refused"));
        assert_eq!(err.exit_code(), 69);
    }
}
