//! Client configuration.

use std::time::Duration;

use url::Url;

/// Public production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.xendit.co";

/// Connection settings for the API clients.
#[derive(Clone)]
pub struct ClientConfig {
    /// Root URL of the API. Endpoint paths are resolved relative to it, so
    /// a path prefix such as `https://proxy.example.com/xendit/` is kept.
    pub base_url: Url,
    /// Secret API key, sent as the Basic auth username.
    pub secret_key: String,
    /// Per-request timeout. `None` leaves reqwest's default in place.
    pub timeout: Option<Duration>,
}

/// Errors produced while building a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("secret key is empty")]
    EmptySecretKey,

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl ClientConfig {
    /// Configuration pointing at the public endpoint.
    pub fn new(secret_key: impl Into<String>) -> Result<Self, ConfigError> {
        let secret_key = secret_key.into();
        if secret_key.trim().is_empty() {
            return Err(ConfigError::EmptySecretKey);
        }
        Ok(Self {
            base_url: Url::parse(DEFAULT_BASE_URL)?,
            secret_key,
            timeout: None,
        })
    }

    /// Point the client at another host (e.g. a mock server).
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Ensure the URL path ends in `/` so relative joins append to it instead of
/// replacing its last segment.
pub fn normalize_base_url(mut base_url: Url) -> Url {
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("secret_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
