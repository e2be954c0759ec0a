//! Runtime configuration.
//!
//! The only setting is the backend base URL, read once at startup from
//! `FOLIO_API_URL` and never changed afterwards.

use thiserror::Error;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "FOLIO_API_URL";

/// Default URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("FOLIO_API_URL must be an http(s) URL, got {0:?}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_url: String,
}

impl Config {
    /// Load configuration from the environment, falling back to
    /// [`DEFAULT_API_URL`] when the variable is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::with_api_url(url),
            _ => Self::with_api_url(DEFAULT_API_URL),
        }
    }

    /// Create with an explicit base URL. A trailing slash is stripped.
    pub fn with_api_url(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url));
        }
        Ok(Self {
            api_url: normalize_base_url(trimmed),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Strip a single trailing slash so paths can be appended verbatim.
pub fn normalize_base_url(url: &str) -> String {
    url.strip_suffix('/').unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = Config::with_api_url("https://api.example.com/").unwrap();
        assert_eq!(config.api_url(), "https://api.example.com");
    }

    #[test]
    fn test_url_without_slash_is_unchanged() {
        assert_eq!(
            normalize_base_url("http://127.0.0.1:9000"),
            "http://127.0.0.1:9000"
        );
    }

    #[test]
    fn test_default_points_at_loopback() {
        assert_eq!(Config::default().api_url(), "http://localhost:8000");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = Config::with_api_url("localhost:8000").unwrap_err();
        assert_eq!(err, ConfigError::InvalidUrl("localhost:8000".to_string()));
    }
}
