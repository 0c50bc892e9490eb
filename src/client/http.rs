//! HTTP client abstraction for NFT API requests.

use reqwest::Client;
use std::time::Duration;

use crate::domain::GalleryError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Idle connections kept per host
const POOL_MAX_IDLE_PER_HOST: usize = 4;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Value sent in the `user-agent` header
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::ClientInit` if the TLS backend cannot be set up.
    pub fn with_config(config: HttpConfig) -> Result<Self, GalleryError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(Duration::from_secs(30))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GalleryError::client_init(e.to_string()))?;

        Ok(Self { inner, config })
    }

    /// Build a GET request with standard headers
    pub fn get(&self, url: url::Url) -> reqwest::RequestBuilder {
        self.inner
            .get(url)
            .header("accept", "application/json")
            .timeout(self.config.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.user_agent.starts_with("nftgallery/"));
    }

    #[test]
    fn test_client_builds_with_short_timeout() {
        let config = HttpConfig {
            timeout: Duration::from_secs(5),
            ..HttpConfig::default()
        };
        let client = HttpClient::with_config(config).unwrap();
        assert_eq!(client.config.timeout, Duration::from_secs(5));
    }
}
