//! Public configuration for the admin API client.

use std::time::Duration;

/// Admin backend address used when none is configured.
pub const DEFAULT_ADMIN_URL: &str = "http://127.0.0.1:18888";

/// Configuration for the admin API client.
///
/// # Example
///
/// ```
/// use mcphub_client::AdminClientConfig;
/// use std::time::Duration;
///
/// let config = AdminClientConfig::new()
///     .with_base_url("http://admin.internal:18888")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct AdminClientConfig {
    /// Backend origin; API paths are appended to it.
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for AdminClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ADMIN_URL.to_string(),
            user_agent: concat!("mcphub-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl AdminClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend origin.
    ///
    /// Defaults to `http://127.0.0.1:18888`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Backend origin as configured.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
