#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for fixstage
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (./fixstage.toml or ~/.config/fixstage/config.toml)
//! - Environment variables

use serde::{Deserialize, Serialize};
use fixstage_errors::{ConfigError, Error};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File name looked up in the working directory before falling back to the
/// user config directory.
pub const CONFIG_FILE_NAME: &str = "fixstage.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub staging: StagingConfig,
}

/// Staging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StagingConfig {
    /// Ordered list of `"<source>:<destination>"` mappings. The list order
    /// is the copy and remove order. Absent or empty means both phases are
    /// no-ops.
    #[serde(default)]
    pub files: Vec<String>,
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir.join("fixstage").join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|_| ConfigError::NotFound {
                path: path.display().to_string(),
            })?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load configuration with fallback to defaults
    ///
    /// Looks for `fixstage.toml` in the working directory first, then the
    /// user config directory; missing files fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub async fn load() -> Result<Self, Error> {
        let local_path = PathBuf::from(CONFIG_FILE_NAME);
        if local_path.exists() {
            debug!(path = %local_path.display(), "loading config from working directory");
            return Self::load_from_file(&local_path).await;
        }

        let config_path = Self::default_path()?;
        if config_path.exists() {
            debug!(path = %config_path.display(), "loading config from user config directory");
            Self::load_from_file(&config_path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// If path is provided, loads from that file.
    /// If path is None, uses the default loading behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub async fn load_or_default(path: &Option<PathBuf>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load().await,
        }
    }

    /// Merge with environment variables
    ///
    /// `FIXSTAGE_FILES` holds a comma-separated list of mapping strings and
    /// replaces the file list when set.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains a value that is
    /// not a plausible mapping (no colon separator).
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // FIXSTAGE_FILES
        if let Ok(files) = std::env::var("FIXSTAGE_FILES") {
            let entries: Vec<String> = files
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();

            for entry in &entries {
                if !entry.contains(':') {
                    return Err(ConfigError::InvalidValue {
                        field: "FIXSTAGE_FILES".to_string(),
                        value: entry.clone(),
                    }
                    .into());
                }
            }

            self.staging.files = entries;
        }

        Ok(())
    }
}
