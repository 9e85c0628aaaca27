//! Admin API client.
//!
//! Thin request layer over an [`HttpBackend`]. Each operation sends exactly
//! one request; decoding into domain types happens here so the port layer
//! only maps errors.

mod commands;
mod servers;

use mcphub_core::ApiResult;
use mcphub_core::contracts::MessageBody;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::AdminClientConfig;
use crate::error::ClientResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::port::map_error;
use crate::url::build_url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default admin client using the reqwest HTTP backend.
pub type DefaultAdminClient = AdminClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the mcphub admin API.
///
/// Generic over the HTTP backend so tests can inject a fake. External code
/// should build a `DefaultAdminClient` and use it through `AdminApiPort`.
pub struct AdminClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultAdminClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the base URL does not parse or the HTTP client cannot be
    /// built.
    pub fn new(config: &AdminClientConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| map_error(e.into()))?;
        let backend = ReqwestBackend::new(config).map_err(map_error)?;
        tracing::debug!(%base_url, "Admin API client created");
        Ok(Self { backend, base_url })
    }
}

impl<B: HttpBackend> AdminClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(base_url: Url, backend: B) -> Self {
        Self { backend, base_url }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = build_url(&self.base_url, path);
        let value = self.backend.send_json(Method::GET, &url, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Send a mutation; the 2xx body is returned undecoded.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ClientResult<Value> {
        let url = build_url(&self.base_url, path);
        self.backend.send_json(method, &url, body).await
    }

    /// Send a mutation and return its `message`, or an empty string.
    pub(crate) async fn send_for_message(&self, method: Method, path: &str) -> ClientResult<String> {
        let value = self.send(method, path, None).await?;
        let body: MessageBody = serde_json::from_value(value).unwrap_or_default();
        Ok(body.message.unwrap_or_default())
    }
}
