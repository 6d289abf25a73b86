//! HTTP transport for resolution requests.

use std::future::Future;
use std::time::Duration;

use tracing::{trace, warn};

use super::types::ResolveError;

/// User agent sent with resolution requests.
const DEFAULT_USER_AGENT: &str = concat!("launchgate/", env!("CARGO_PKG_VERSION"));

/// Default request timeout for the underlying client.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Async HTTP GET returning the response body as text.
///
/// The resolver depends on this trait so tests can script responses
/// without a server.
pub trait HttpFetch: Send + Sync {
    /// Fetch the body at `url`.
    fn get(&self, url: &str) -> impl Future<Output = Result<String, ResolveError>> + Send;
}

/// Production fetcher backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Create a fetcher with the default request timeout.
    pub fn new() -> Result<Self, ResolveError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a fetcher with a custom request timeout.
    ///
    /// The retry loop applies its own per-attempt bound on top; the
    /// client timeout is the backstop for connections that stall
    /// mid-body.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ResolveError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| ResolveError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<String, ResolveError> {
        trace!(url, "Resolution request starting");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(
                url,
                error = %e,
                is_connect = e.is_connect(),
                is_timeout = e.is_timeout(),
                "Resolution request failed"
            );
            ResolveError::Network(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Protocol(format!(
                "HTTP {} from {}",
                status, url
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ResolveError::Network(format!("Failed to read response body: {}", e)))?;
        let text = String::from_utf8(body.to_vec())
            .map_err(|_| ResolveError::Protocol("Response body is not valid UTF-8".to_string()))?;

        trace!(url, bytes = text.len(), "Resolution response received");
        Ok(text)
    }
}
