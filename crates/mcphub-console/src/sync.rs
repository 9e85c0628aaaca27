//! Resource list synchronization.
//!
//! A reload replaces a list region wholesale: loading placeholder first,
//! then the freshly fetched collection (or an inline error). Concurrent
//! reloads are neither coalesced nor cancelled, so whichever response lands
//! last decides what the region shows.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use mcphub_core::{
    AdminApiPort, ApiResult, CommandConfig, ConsoleEvent, ConsoleView, ListRegion, ServerConfig,
};
use tracing::{debug, warn};

use crate::render::{error_markup, loading_markup, render_commands, render_servers};

/// A remote collection that can be fetched and rendered into one region.
#[async_trait]
pub trait Collection: Send + Sync {
    type Item: Send;

    /// Region the collection renders into.
    fn region(&self) -> ListRegion;

    /// Read the full collection.
    async fn fetch(&self, api: &dyn AdminApiPort) -> ApiResult<Vec<Self::Item>>;

    /// Render a non-empty or empty collection.
    fn render(&self, items: &[Self::Item]) -> String;
}

/// The MCP servers collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerCollection;

#[async_trait]
impl Collection for ServerCollection {
    type Item = ServerConfig;

    fn region(&self) -> ListRegion {
        ListRegion::Servers
    }

    async fn fetch(&self, api: &dyn AdminApiPort) -> ApiResult<Vec<ServerConfig>> {
        api.list_servers().await
    }

    fn render(&self, items: &[ServerConfig]) -> String {
        render_servers(items)
    }
}

/// The commands collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandCollection;

#[async_trait]
impl Collection for CommandCollection {
    type Item = CommandConfig;

    fn region(&self) -> ListRegion {
        ListRegion::Commands
    }

    async fn fetch(&self, api: &dyn AdminApiPort) -> ApiResult<Vec<CommandConfig>> {
        api.list_commands().await
    }

    fn render(&self, items: &[CommandConfig]) -> String {
        render_commands(items)
    }
}

/// Keeps one list region in step with the backend.
pub struct ResourceSynchronizer<C: Collection> {
    collection: C,
    api: Arc<dyn AdminApiPort>,
    view: Arc<dyn ConsoleView>,
    /// Sequence of the most recently issued reload.
    issued: AtomicU64,
    /// Highest sequence whose response has been rendered.
    rendered: AtomicU64,
}

impl<C: Collection> ResourceSynchronizer<C> {
    pub fn new(collection: C, api: Arc<dyn AdminApiPort>, view: Arc<dyn ConsoleView>) -> Self {
        Self {
            collection,
            api,
            view,
            issued: AtomicU64::new(0),
            rendered: AtomicU64::new(0),
        }
    }

    pub fn region(&self) -> ListRegion {
        self.collection.region()
    }

    /// Refetch the collection and replace the region.
    ///
    /// Returns the number of items rendered. On failure the region already
    /// shows the inline error; the error is returned for the caller's
    /// benefit only. Nothing is retried.
    pub async fn reload(&self) -> ApiResult<usize> {
        let region = self.collection.region();
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(?region, seq, "Reloading list");

        self.view
            .emit(ConsoleEvent::list_rendered(region, loading_markup()));

        let result = self.collection.fetch(self.api.as_ref()).await;

        let newest_rendered = self.rendered.fetch_max(seq, Ordering::SeqCst);
        if newest_rendered > seq {
            debug!(
                ?region,
                seq,
                newest_rendered,
                "Stale list response rendered over a newer one"
            );
        }

        match result {
            Ok(items) => {
                let markup = self.collection.render(&items);
                self.view.emit(ConsoleEvent::list_rendered(region, markup));
                debug!(?region, seq, count = items.len(), "List reloaded");
                Ok(items.len())
            }
            Err(e) => {
                warn!(?region, seq, error = %e, "List reload failed");
                self.view
                    .emit(ConsoleEvent::list_rendered(region, error_markup(e.detail())));
                Err(e)
            }
        }
    }
}
