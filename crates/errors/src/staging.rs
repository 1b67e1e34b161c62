//! Staging error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum StagingError {
    #[error("source file [{path}] does not exist")]
    SourceNotFound { path: String },

    #[error("source file [{path}] is not readable")]
    SourceNotReadable { path: String },

    #[error("destination parent dir [{path}] is not writable")]
    DestinationParentNotWritable { path: String },

    #[error("copy of [{source_path}:{destination}] failed: {message}")]
    CopyFailed {
        source_path: String,
        destination: String,
        message: String,
    },

    #[error("removal of [{path}] failed: {message}")]
    RemovalFailed { path: String, message: String },
}

impl UserFacingError for StagingError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::SourceNotFound { .. } => {
                Some("Check the source path in the [staging] files list; relative paths resolve against the working directory.")
            }
            Self::SourceNotReadable { .. } | Self::DestinationParentNotWritable { .. } => {
                Some("Check filesystem permissions for the path noted in the error message.")
            }
            Self::CopyFailed { .. } | Self::RemovalFailed { .. } => {
                Some("Inspect the underlying filesystem state and retry the phase.")
            }
        }
    }
}
