//! Configuration management for Zenbook
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{Result, ZenbookError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Zenbook
///
/// This structure holds all configuration needed by the client: where the
/// booking backend lives and how requests to it behave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the booking backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    /// Default configuration file path under the user config directory
    ///
    /// Falls back to a relative `config/config.yaml` when no home directory
    /// can be resolved.
    pub fn default_path() -> String {
        directories::ProjectDirs::from("", "", "zenbook")
            .map(|dirs| dirs.config_dir().join("config.yaml").display().to_string())
            .unwrap_or_else(|| "config/config.yaml".to_string())
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ZenbookError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| ZenbookError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("ZENBOOK_API_BASE_URL") {
            self.api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("ZENBOOK_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.api.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid ZENBOOK_TIMEOUT_SECONDS: {}", timeout);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(base_url) = &cli.base_url {
            self.api.base_url = base_url.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an absolute http(s) URL or the
    /// timeout is zero
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api.base_url).map_err(|e| {
            ZenbookError::Config(format!("Invalid api.base_url {}: {}", self.api.base_url, e))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ZenbookError::Config(format!(
                "api.base_url must use http or https, got: {}",
                parsed.scheme()
            ))
            .into());
        }

        if self.api.timeout_seconds == 0 {
            return Err(
                ZenbookError::Config("timeout_seconds must be greater than 0".to_string()).into(),
            );
        }

        Ok(())
    }
}
