use crate::{ApiError, Result};

/// Client configuration, validated once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL for API requests, e.g. `http://localhost:8000/api`
    pub api_url: String,
    /// Reserved for an external auth provider. No provider in this
    /// codebase reads it.
    pub auth_url: Option<String>,
    pub retry: RetryConfig,
}

/// Retry/backoff defaults for the API client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    pub timeout_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay_ms: 1000,
            timeout_ms: 30_000,
        }
    }
}

impl ApiConfig {
    /// Build a config from the API base URL, rejecting malformed URLs.
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let api_url = api_url.into();
        validate_url(&api_url)?;
        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            auth_url: None,
            retry: RetryConfig::default(),
        })
    }

    /// The health probe lives at the server origin, outside the API
    /// prefix: strip one trailing `/api` segment from the base URL.
    pub fn health_url(&self) -> String {
        let origin = self
            .api_url
            .strip_suffix("/api")
            .unwrap_or(&self.api_url);
        format!("{}/health", origin)
    }
}

/// Minimal well-formedness check: an http(s) scheme and a non-empty host.
fn validate_url(url: &str) -> Result<()> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| {
            ApiError::validation(format!(
                "invalid API URL {:?}: must start with http:// or https://",
                url
            ))
        })?;

    let host = rest.split('/').next().unwrap_or("");
    if host.is_empty() || host.contains(char::is_whitespace) {
        return Err(ApiError::validation(format!(
            "invalid API URL {:?}: missing or malformed host",
            url
        )));
    }
    Ok(())
}
