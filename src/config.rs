//! Configuration management for raidscout.
//!
//! Handles loading configuration from a TOML file and environment variables.
//! Precedence for each setting: command line, then config file, then
//! environment (`WOW_CLIENT_ID`, `WOW_CLIENT_SECRET`).

use crate::blizzard::client::DEFAULT_TIMEOUT_SECS;
use crate::error::{BotError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the API client id.
pub const CLIENT_ID_ENV: &str = "WOW_CLIENT_ID";

/// Environment variable holding the API client secret.
pub const CLIENT_SECRET_ENV: &str = "WOW_CLIENT_SECRET";

/// Main configuration structure for raidscout.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Profile API settings.
    #[serde(default)]
    pub blizzard: BlizzardConfig,
}

/// Profile API credentials and client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlizzardConfig {
    /// OAuth client id.
    pub client_id: Option<String>,

    /// OAuth client secret (prefer the environment over the config file).
    pub client_secret: Option<String>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for BlizzardConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Explicitly supplied settings that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlizzardOverrides {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl BlizzardConfig {
    /// Applies every override that was set.
    pub fn merge(&mut self, overrides: &BlizzardOverrides) {
        if overrides.client_id.is_some() {
            self.client_id = overrides.client_id.clone();
        }
        if overrides.client_secret.is_some() {
            self.client_secret = overrides.client_secret.clone();
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
    }

    /// Fills unset credentials from `WOW_CLIENT_ID` and `WOW_CLIENT_SECRET`.
    pub fn apply_env_defaults(&mut self) {
        if self.client_id.is_none() {
            self.client_id = std::env::var(CLIENT_ID_ENV).ok();
        }
        if self.client_secret.is_none() {
            self.client_secret = std::env::var(CLIENT_SECRET_ENV).ok();
        }
    }

    /// Returns `(client_id, client_secret)`, failing if either is missing or empty.
    pub fn credentials(&self) -> Result<(&str, &str)> {
        let client_id = self
            .client_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| BotError::config(format!("client id not set (use {CLIENT_ID_ENV})")))?;
        let client_secret = self
            .client_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                BotError::config(format!("client secret not set (use {CLIENT_SECRET_ENV})"))
            })?;
        Ok((client_id, client_secret))
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("raidscout")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file. A missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| BotError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            BotError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
