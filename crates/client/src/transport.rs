//! Transport: fetch one catalog path as raw JSON.
//!
//! A transport answers with three outcomes: a JSON payload, "not found"
//! (`Ok(None)`), or an error. Only HTTP 404 means "not found"; every other
//! failure is an error so that it is never cached as absence.

use async_trait::async_trait;
use moka::future::Cache;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::TransportError;

/// Source of raw catalog payloads.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the payload at `path`, relative to the catalog root
    /// (e.g. `pokemon/25`).
    ///
    /// # Errors
    ///
    /// Returns `TransportError` for network failures, non-404 error statuses
    /// and unparseable bodies.
    async fn get(&self, path: &str) -> Result<Option<Value>, TransportError>;
}

// =============================================================================
// HttpTransport
// =============================================================================

/// Transport over HTTP using `reqwest`.
///
/// Paths that came back 404 are remembered, and later requests for them
/// return `Ok(None)` without touching the network.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    missing: Cache<String, ()>,
}

impl HttpTransport {
    /// Create a transport for the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            missing: Cache::builder().build(),
        })
    }

    /// Whether `path` is known to be missing from the catalog.
    #[must_use]
    pub fn is_known_missing(&self, path: &str) -> bool {
        self.missing.contains_key(path)
    }

    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&joined)?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self), fields(path = %path))]
    async fn get(&self, path: &str) -> Result<Option<Value>, TransportError> {
        if self.is_known_missing(path) {
            debug!("Skipping request for path known to be missing");
            return Ok(None);
        }

        let url = self.url_for(path)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            debug!("Catalog reported path as not found");
            self.missing.insert(path.to_string(), ()).await;
            return Ok(None);
        }

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(TransportError::RateLimited(retry_after));
        }

        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog returned non-success status"
            );
            return Err(TransportError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        match parse_payload(&body) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse catalog response"
                );
                Err(e.into())
            }
        }
    }
}

/// Parse a response body with no nesting limit.
///
/// Evolution trees nest once per stage, so serde_json's default recursion
/// limit is lifted and the stack grows on demand instead.
fn parse_payload(body: &str) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
