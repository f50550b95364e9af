//! Configuration management for Fabula
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{FabulaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Environment variable overriding the configured API base URL
pub const API_BASE_ENV: &str = "FABULA_API_BASE";

/// Main configuration structure for Fabula
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Story API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Story API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin for all backend calls
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// Resolution order: built-in defaults, then the config file (a
    /// missing file is a logged warning, not an error), then the
    /// `FABULA_API_BASE` environment variable, then CLI flags.
    ///
    /// # Errors
    ///
    /// Returns error if an existing file cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    /// Parse configuration from a YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(FabulaError::Io)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(FabulaError::Yaml)?;
        tracing::debug!("Loaded configuration from {}", path);
        Ok(config)
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base) = std::env::var(API_BASE_ENV) {
            if !base.trim().is_empty() {
                tracing::debug!("Overriding api.base_url from {}", API_BASE_ENV);
                self.api.base_url = base;
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(base) = &cli.api_base {
            tracing::debug!("Overriding api.base_url from CLI: {}", base);
            self.api.base_url = base.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the API base URL is empty, unparseable, or uses
    /// a scheme other than http/https
    pub fn validate(&self) -> Result<()> {
        let base = self.api.base_url.trim();
        if base.is_empty() {
            return Err(FabulaError::Config("api.base_url must not be empty".to_string()).into());
        }

        let url = Url::parse(base)
            .map_err(|e| FabulaError::Config(format!("Invalid api.base_url: {}", e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(FabulaError::Config(format!(
                "Unsupported api.base_url scheme: {}",
                other
            ))
            .into()),
        }
    }
}
