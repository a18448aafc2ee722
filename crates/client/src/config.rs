//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `POKEAPI_BASE_URL` - Catalog root (default: `https://pokeapi.co/api/v2`)
//! - `POKEAPI_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)
//! - `POKEAPI_USER_AGENT` - User-Agent header (default: `pokeapi-client/<version>`)

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Public catalog root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Settings for a catalog client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Catalog root without a trailing slash; record paths are appended to it.
    pub base_url: String,
    /// Timeout for a single HTTP request.
    pub timeout: Duration,
    /// User-Agent sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_url = match get("POKEAPI_BASE_URL") {
            Some(raw) => parse_base_url(&raw)?,
            None => DEFAULT_BASE_URL.to_string(),
        };

        let timeout = match get("POKEAPI_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("POKEAPI_TIMEOUT_SECS".to_string(), e.to_string())
                })?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let user_agent = get("POKEAPI_USER_AGENT").unwrap_or_else(default_user_agent);

        Ok(Self {
            base_url,
            timeout,
            user_agent,
        })
    }

    /// Point the configuration at another catalog root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let invalid =
        |reason: String| ConfigError::InvalidEnvVar("POKEAPI_BASE_URL".to_string(), reason);

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("not a hierarchical URL".to_string()));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn default_user_agent() -> String {
    format!("pokeapi-client/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("pokeapi-client/"));
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("POKEAPI_BASE_URL", "http://localhost:8000/api/v2/"),
            ("POKEAPI_TIMEOUT_SECS", "5"),
            ("POKEAPI_USER_AGENT", "dex/1.0"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8000/api/v2");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "dex/1.0");
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:9000/");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[("POKEAPI_TIMEOUT_SECS", "  ")])).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[("POKEAPI_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar(name, _) if name == "POKEAPI_TIMEOUT_SECS"
        ));
    }

    #[test]
    fn test_invalid_base_url() {
        let err =
            ClientConfig::from_lookup(lookup(&[("POKEAPI_BASE_URL", "not a url")])).unwrap_err();
        assert!(err.to_string().starts_with("Invalid environment variable POKEAPI_BASE_URL"));
    }

    #[test]
    fn test_rejects_non_hierarchical_url() {
        let err =
            ClientConfig::from_lookup(lookup(&[("POKEAPI_BASE_URL", "mailto:ash@example.com")]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(name, _) if name == "POKEAPI_BASE_URL"));
    }
}
