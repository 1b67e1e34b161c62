//! Configuration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("parse error: {message}")]
    ParseError { message: String },

    #[error("invalid file mapping: {entry}")]
    InvalidMapping { entry: String },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => {
                Some("Provide a configuration file or pass --config with an explicit path.")
            }
            Self::ParseError { .. } | Self::InvalidValue { .. } => {
                Some("Fix the configuration value and retry the command.")
            }
            Self::InvalidMapping { .. } => {
                Some("File mappings must look like \"<source>:<destination>\" with both sides non-empty.")
            }
        }
    }
}
