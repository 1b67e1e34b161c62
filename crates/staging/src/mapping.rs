//! Source-to-destination mapping entries

use fixstage_errors::{ConfigError, Error};
use std::path::{Path, PathBuf};
use tokio::fs;

/// One `"<source>:<destination>"` pair from the configuration
///
/// The pair is split on the first colon, so destinations may be absolute
/// paths. Entries are independent of each other; configuration order is
/// execution order.
#[derive(Debug, Clone)]
pub struct MappingEntry {
    source: PathBuf,
    destination: PathBuf,
}

impl MappingEntry {
    /// Parse a raw mapping string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMapping` if the string has no colon
    /// separator or either half is empty.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let Some((source, destination)) = raw.split_once(':') else {
            return Err(ConfigError::InvalidMapping {
                entry: raw.to_string(),
            }
            .into());
        };

        if source.is_empty() || destination.is_empty() {
            return Err(ConfigError::InvalidMapping {
                entry: raw.to_string(),
            }
            .into());
        }

        Ok(Self {
            source: PathBuf::from(source),
            destination: PathBuf::from(destination),
        })
    }

    /// Resolve the source to its canonical absolute form
    ///
    /// An unresolvable source keeps the raw path; the manager's eager
    /// source validation reports it as missing.
    pub async fn canonicalize_source(&mut self) {
        if let Ok(resolved) = fs::canonicalize(&self.source).await {
            self.source = resolved;
        }
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
