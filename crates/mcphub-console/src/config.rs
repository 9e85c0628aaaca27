//! Console timing configuration.

use std::time::Duration;

/// Timing knobs for the console controller.
///
/// # Example
///
/// ```
/// use mcphub_console::ConsoleConfig;
/// use std::time::Duration;
///
/// let config = ConsoleConfig::new().with_refresh_interval(Duration::from_secs(10));
/// assert_eq!(config.refresh_interval(), Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    refresh_interval: Duration,
    toggle_settle_delay: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(5),
            toggle_settle_delay: Duration::from_millis(500),
        }
    }
}

impl ConsoleConfig {
    /// Create a configuration with default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Period of the background servers refresh. Defaults to 5 seconds.
    #[must_use]
    pub const fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Wait between a confirmed toggle and the follow-up reload.
    /// Defaults to 500 ms.
    #[must_use]
    pub const fn with_toggle_settle_delay(mut self, delay: Duration) -> Self {
        self.toggle_settle_delay = delay;
        self
    }

    pub const fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    pub const fn toggle_settle_delay(&self) -> Duration {
        self.toggle_settle_delay
    }
}
