//! HTTP backend abstraction for the admin API.
//!
//! The production backend issues exactly one request per call. There is no
//! retry: every mutation is user-initiated and the console reports the
//! outcome of that single attempt.

use async_trait::async_trait;
use mcphub_core::UNKNOWN_ERROR_DETAIL;
use mcphub_core::contracts::ErrorBody;
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::config::AdminClientConfig;
use crate::error::{ClientError, ClientResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Sends one JSON request and returns the decoded 2xx body.
///
/// A 2xx response whose body is empty or not JSON decodes as `Value::Null`.
/// A non-2xx response becomes [`ClientError::Rejected`] carrying the body's
/// `detail`.
///
/// This is an implementation detail - external code should use `AdminApiPort`.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn send_json(
        &self,
        method: Method,
        url: &Url,
        body: Option<&Value>,
    ) -> ClientResult<Value>;
}

/// Turn a non-2xx body into the user-facing reason.
pub(crate) fn rejection_detail(bytes: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(bytes)
        .map_or_else(|_| UNKNOWN_ERROR_DETAIL.to_string(), |body| body.detail_text())
}

fn decode_success(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "2xx response body is not JSON");
        Value::Null
    })
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &AdminClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send_json(
        &self,
        method: Method,
        url: &Url,
        body: Option<&Value>,
    ) -> ClientResult<Value> {
        tracing::debug!(%method, %url, "Admin API request");

        let mut request = self.client.request(method, url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(decode_success(&bytes));
        }

        let detail = rejection_detail(&bytes);
        tracing::debug!(status = status.as_u16(), %detail, "Admin API rejected request");
        Err(ClientError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_detail_reads_detail_field() {
        assert_eq!(rejection_detail(br#"{"detail": "Server not found"}"#), "Server not found");
    }

    #[test]
    fn test_rejection_detail_falls_back_to_unknown() {
        assert_eq!(rejection_detail(b"<html>502 Bad Gateway</html>"), UNKNOWN_ERROR_DETAIL);
        assert_eq!(rejection_detail(b"{}"), UNKNOWN_ERROR_DETAIL);
        assert_eq!(rejection_detail(b""), UNKNOWN_ERROR_DETAIL);
    }

    #[test]
    fn test_decode_success_tolerates_empty_and_non_json() {
        assert_eq!(decode_success(b""), Value::Null);
        assert_eq!(decode_success(b"OK"), Value::Null);
        assert_eq!(decode_success(br#"{"message": "done"}"#)["message"], "done");
    }

    #[test]
    fn test_reqwest_backend_creation() {
        assert!(ReqwestBackend::new(&AdminClientConfig::default()).is_ok());
    }

    mod fake_backend_tests {
        use super::super::testing::*;
        use super::*;
        use serde_json::json;

        #[tokio::test]
        async fn test_fake_backend_matches_method_and_path() {
            let backend = FakeBackend::new().with_response(
                Method::GET,
                "/api/commands",
                CannedResponse::ok(json!({"commands": []})),
            );
            let url = Url::parse("http://localhost/api/commands").unwrap();

            let value = backend.send_json(Method::GET, &url, None).await.unwrap();
            assert_eq!(value, json!({"commands": []}));

            let err = backend.send_json(Method::POST, &url, None).await.unwrap_err();
            assert!(matches!(err, ClientError::Rejected { status: 404, .. }));
        }
    }
}
