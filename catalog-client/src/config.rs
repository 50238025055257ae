//! Client configuration

use crate::{ClientError, ClientResult};

/// Connection settings for the two catalog API generations
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | CATALOG_API_URL | http://localhost:8080/api | v1 base URL (categories) |
/// | CATALOG_API_V2_URL | http://localhost:8080/api/v2 | v2 base URL (everything else) |
/// | CATALOG_API_TOKEN | - | Bearer token attached to every request |
/// | CATALOG_TIMEOUT_SECS | 30 | Request timeout in seconds |
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// v1 API base URL
    pub api_url: String,

    /// v2 API base URL
    pub api_v2_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a configuration for the given base URLs
    pub fn new(api_url: impl Into<String>, api_v2_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_v2_url: api_v2_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Load from the process environment (and a `.env` file when present)
    pub fn from_env() -> ClientResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let timeout = match lookup("CATALOG_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ClientError::Config(format!("CATALOG_TIMEOUT_SECS is not a number: {raw}"))
            })?,
            None => defaults.timeout,
        };

        Ok(Self {
            api_url: lookup("CATALOG_API_URL").unwrap_or(defaults.api_url),
            api_v2_url: lookup("CATALOG_API_V2_URL").unwrap_or(defaults.api_v2_url),
            token: lookup("CATALOG_API_TOKEN").filter(|t| !t.is_empty()),
            timeout,
        })
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api", "http://localhost:8080/api/v2")
    }
}
