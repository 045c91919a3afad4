//! Catalog client configuration.
//!
//! Configures the storefront API endpoint and request timeout. Defaults
//! point at the public mock.shop endpoint. Override via environment
//! variables or explicit construction for testing.

use url::Url;

/// Default storefront API endpoint.
const DEFAULT_API_URL: &str = "https://mock.shop/api";

/// Configuration for connecting to the storefront catalog API.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// GraphQL endpoint URL. Default: <https://mock.shop/api>
    pub api_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SHOPFRONT_API_URL` (default: `https://mock.shop/api`)
    /// - `SHOPFRONT_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: env_url("SHOPFRONT_API_URL", DEFAULT_API_URL)?,
            timeout_secs: std::env::var("SHOPFRONT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a configuration pointing at a local mock server (for tests).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be
    /// parsed (should not occur for valid port numbers, but avoids
    /// `expect()`).
    pub fn local_mock(port: u16) -> Result<Self, ConfigError> {
        let api_url = Url::parse(&format!("http://127.0.0.1:{port}"))
            .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))?;
        Ok(Self {
            api_url,
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A URL value could not be parsed.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
