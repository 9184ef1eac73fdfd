use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::{Config, ENV_CONFIG, ENV_DEBUG, ENV_JQ};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `$YQ_CONFIG` when set, otherwise `yq/config.toml` under
    /// `dirs::config_dir()`, falling back to the current directory.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(ENV_CONFIG).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("yq").join("config.toml")
    }

    /// Loads the config file (defaults when it is missing) and applies the
    /// process environment on top.
    pub fn resolve() -> Result<Self, ConfigError> {
        let config = Self::load_from(&Self::config_path())?;
        let config = config.with_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies `YQ_JQ` and `YQ_DEBUG` from `lookup`. Empty values are ignored.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(jq) = lookup(ENV_JQ).filter(|v| !v.is_empty()) {
            self.jq = PathBuf::from(jq);
        }
        if lookup(ENV_DEBUG).is_some_and(|v| !v.is_empty()) {
            self.debug = true;
        }
        self
    }

    /// Checks that a jq binary is named.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jq.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "jq path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
