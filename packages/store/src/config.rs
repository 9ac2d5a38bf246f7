//! # Client configuration (`luckylease.toml`)
//!
//! Deployment settings for the web client. The browser has no runtime
//! environment, so the API base URL is baked in at compile time through
//! `LUCKYLEASE_API_URL` (see [`ClientConfig::from_env`]); the TOML form exists
//! for native tooling and tests.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3001"
//!
//! [log]
//! level = "warn"
//! ```
//!
//! Every section has defaults, so an empty file is the default configuration.

use serde::{Deserialize, Serialize};

/// Compile-time override for [`ApiConfig::base_url`].
const API_URL_ENV: Option<&str> = option_env!("LUCKYLEASE_API_URL");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Where the marketplace REST API lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Logging settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the API base URL taken from `LUCKYLEASE_API_URL` if it
    /// was set when the crate was compiled.
    pub fn from_env() -> Self {
        let config = Self::default();
        match API_URL_ENV {
            Some(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        }
    }

    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api.base_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "luckylease.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let parsed: Self = toml::from_str(s)?;
        let base = parsed.api.base_url.clone();
        Ok(parsed.with_base_url(&base))
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
