//! Application configuration
//!
//! Loaded from `config.json` in the platform config directory when present,
//! then overridden by environment variables, then clamped to safe ranges.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use url::Url;

use crate::constants;

/// Configuration errors surfaced when the API client is built
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is required (set it in config.json or the environment)")]
    MissingCredential(&'static str),
    #[error("invalid base URL {0:?}: {1}")]
    InvalidUrl(String, String),
}

/// Marvel API key pair
#[derive(Clone)]
pub struct Credentials {
    pub public_key: String,
    pub private_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// User-editable settings
///
/// Custom `Debug` redacts the private key.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub public_key: String,

    #[serde(default)]
    pub private_key: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Overrides the key-value store location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("base_url", &self.base_url)
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("storage_path", &self.storage_path)
            .finish()
    }
}

fn default_base_url() -> String {
    constants::api::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    constants::api::DEFAULT_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            public_key: String::new(),
            private_key: String::new(),
            timeout_secs: default_timeout_secs(),
            storage_path: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(constants::config::APP_DIR);
        path.push(constants::config::FILENAME);
        path
    }

    /// Load from `path` (or the default location), apply env overrides and validate.
    /// A missing file yields defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        let mut config = match fs::read_to_string(&config_path) {
            Ok(contents) => {
                info!(path = %config_path.display(), "Loading config");
                serde_json::from_str::<AppConfig>(&contents)
                    .with_context(|| format!("Failed to parse config file {}", config_path.display()))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %config_path.display(), "No config file found, using defaults");
                AppConfig::default()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read config file {}", config_path.display()));
            }
        };

        config.apply_overrides(|var| env::var(var).ok());
        config.validate_and_clamp();
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(constants::env::PUBLIC_KEY) {
            self.public_key = key.trim().to_string();
        }
        if let Some(key) = lookup(constants::env::PRIVATE_KEY) {
            self.private_key = key.trim().to_string();
        }
        if let Some(url) = lookup(constants::env::BASE_URL) {
            self.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(constants::env::TIMEOUT_SECS) {
            match raw.trim().parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(e) => warn!(var = constants::env::TIMEOUT_SECS, value = %raw, error = %e, "Ignoring unparsable timeout"),
            }
        }
    }

    /// Clamp values to safe ranges
    pub fn validate_and_clamp(&mut self) {
        use constants::validation::*;

        if self.timeout_secs < MIN_TIMEOUT_SECS {
            warn!(timeout_secs = self.timeout_secs, min = MIN_TIMEOUT_SECS, "timeout_secs below minimum, clamping");
            self.timeout_secs = MIN_TIMEOUT_SECS;
        } else if self.timeout_secs > MAX_TIMEOUT_SECS {
            warn!(timeout_secs = self.timeout_secs, max = MAX_TIMEOUT_SECS, "timeout_secs exceeds maximum, clamping");
            self.timeout_secs = MAX_TIMEOUT_SECS;
        }
    }

    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        if self.public_key.is_empty() {
            return Err(ConfigError::MissingCredential(constants::env::PUBLIC_KEY));
        }
        if self.private_key.is_empty() {
            return Err(ConfigError::MissingCredential(constants::env::PRIVATE_KEY));
        }
        Ok(Credentials {
            public_key: self.public_key.clone(),
            private_key: self.private_key.clone(),
        })
    }

    /// Base URL with a trailing slash, so relative joins append to its path
    pub fn api_base_url(&self) -> Result<Url, ConfigError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidUrl(self.base_url.clone(), e.to_string()))?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn storage_path(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(crate::store::FileStore::default_path)
    }
}
