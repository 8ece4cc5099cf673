//! Client configuration from environment variables.

use std::env;

use reqwest::Url;

/// Environment variable holding the backend base URL.
pub const URL_VAR: &str = "STUDYNOTES_URL";

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "STUDYNOTES_LOG_LEVEL";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash (e.g. `http://localhost:5000`).
    pub base_url: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl ClientConfig {
    /// Default backend origin (the Flask development server).
    pub const DEFAULT_URL: &'static str = "http://localhost:5000";

    /// Default log level.
    pub const DEFAULT_LOG_LEVEL: &'static str = "warn";

    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `STUDYNOTES_URL`: Backend base URL (default: http://localhost:5000)
    /// - `STUDYNOTES_LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(URL_VAR).unwrap_or_else(|| Self::DEFAULT_URL.to_string());
        let base_url = normalize_base_url(URL_VAR, &base_url)?;

        let log_level = lookup(LOG_LEVEL_VAR)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            base_url,
            log_level,
        })
    }

    /// Replace the base URL, e.g. with a command-line override.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url("--url", base_url)?;
        Ok(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_URL.to_string(),
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Validate an absolute http(s) URL and strip trailing slashes.
fn normalize_base_url(name: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');

    let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(trimmed.to_string())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable or flag value.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
