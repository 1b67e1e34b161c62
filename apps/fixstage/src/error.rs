//! CLI error handling

use std::fmt;

use fixstage_errors::UserFacingError;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Staging or configuration error
    Staging(fixstage_errors::Error),
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Staging(e) => {
                let message = e.user_message();
                write!(f, "{message}")?;
                if let Some(hint) = e.user_hint() {
                    write!(f, "\n  Hint: {hint}")?;
                }
                Ok(())
            }
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Staging(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<fixstage_errors::Error> for CliError {
    fn from(e: fixstage_errors::Error) -> Self {
        CliError::Staging(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
