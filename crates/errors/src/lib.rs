#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for fixstage
//!
//! This crate provides fine-grained error types organized by domain.
//! All error types implement Clone for easier handling.

use std::borrow::Cow;

use thiserror::Error;

pub mod config;
pub mod staging;

// Re-export all error types at the root
pub use config::ConfigError;
pub use staging::StagingError;

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("staging error: {0}")]
    Staging(#[from] StagingError),

    #[error("I/O error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl Error {
    /// Create an Io error with an associated path
    pub fn io_with_path(err: &std::io::Error, path: impl AsRef<std::path::Path>) -> Self {
        Self::Io {
            message: err.to_string(),
            path: Some(path.as_ref().display().to_string()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

/// Result type alias for fixstage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Minimal interface for rendering user-facing error information without
/// requiring heavyweight envelopes.
pub trait UserFacingError {
    /// Short message suitable for CLI output.
    fn user_message(&self) -> Cow<'_, str>;

    /// Optional remediation hint.
    fn user_hint(&self) -> Option<&'static str> {
        None
    }
}

impl UserFacingError for Error {
    fn user_message(&self) -> Cow<'_, str> {
        match self {
            Error::Config(err) => err.user_message(),
            Error::Staging(err) => err.user_message(),
            Error::Io { message, path } => match path {
                Some(path) => Cow::Owned(format!("{message} ({path})")),
                None => Cow::Owned(message.clone()),
            },
        }
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Error::Config(err) => err.user_hint(),
            Error::Staging(err) => err.user_hint(),
            _ => None,
        }
    }
}
