//! Periodic background refresh.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Fires a refresh on a fixed period until cancelled.
///
/// Each tick spawns its own task, so a slow refresh never delays the next
/// tick. Spawned refreshes are not tracked and are never cancelled.
pub struct PeriodicRefresh {
    period: Duration,
    cancel_token: CancellationToken,
}

impl PeriodicRefresh {
    /// # Arguments
    ///
    /// * `period` - Time between refreshes; the first one fires after one period
    /// * `cancel_token` - Stops the ticker when cancelled
    pub const fn new(period: Duration, cancel_token: CancellationToken) -> Self {
        Self {
            period,
            cancel_token,
        }
    }

    /// Spawn the ticker task.
    pub fn spawn<F, Fut>(self, refresh: F) -> JoinHandle<()>
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let Self {
            period,
            cancel_token,
        } = self;

        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            debug!(?period, "Starting periodic refresh");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        tokio::spawn(refresh());
                    }
                    () = cancel_token.cancelled() => {
                        debug!("Periodic refresh cancelled");
                        break;
                    }
                }
            }
        })
    }
}
