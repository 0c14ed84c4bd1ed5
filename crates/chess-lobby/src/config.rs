//! Lobby configuration loaded from `lobby.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A value parsed but is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Lobby settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LobbyConfig {
    /// Notifications buffered per game before slow observers start
    /// missing them. Defaults to 64.
    #[serde(default = "default_broadcast_capacity")]
    pub broadcast_capacity: usize,
    /// Log filter used when `RUST_LOG` is not set. Defaults to "info".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_broadcast_capacity() -> usize {
    64
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: default_broadcast_capacity(),
            log_level: default_log_level(),
        }
    }
}

impl LobbyConfig {
    /// Loads `lobby.toml` from the current directory, falling back to the
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path())
    }

    /// Loads the configuration at `path`; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or
    /// [`ConfigError::Invalid`] if `broadcast_capacity` is zero.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("lobby.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.broadcast_capacity == 0 {
            return Err(ConfigError::Invalid(
                "broadcast_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
