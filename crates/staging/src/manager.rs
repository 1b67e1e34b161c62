//! Staging manager for fixture copy and cleanup
//!
//! This module provides the main `StagingManager` struct that validates
//! the configured mappings up front and applies per-entry copy and remove
//! operations in configuration order.

use fixstage_errors::{Error, StagingError};
use fixstage_fsops as fsops;
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use super::mapping::MappingEntry;

/// Staging manager for fixture copy and cleanup
///
/// The entry set is fixed at construction and is processed strictly in
/// configuration order. Operations are per-entry and not transactional:
/// the first failure aborts the remaining entries and already-processed
/// entries are left as they are. Duplicate destinations are permitted;
/// the last copy to a destination wins.
#[derive(Debug)]
pub struct StagingManager {
    /// Ordered mapping entries, configuration order
    entries: Vec<MappingEntry>,
}

impl StagingManager {
    /// Create a new staging manager from raw mapping strings
    ///
    /// Parses every `"<source>:<destination>"` string, canonicalizes the
    /// sources, then eagerly validates every source and prepares every
    /// destination. Preparing a destination creates missing parent
    /// directories and removes pre-existing content at the destination
    /// path, so the later copy starts from a clean slate.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A mapping string cannot be parsed
    /// - A source does not exist or is not readable
    /// - A destination parent is not writable after the creation attempt
    pub async fn new(files: &[String]) -> Result<Self, Error> {
        let mut entries = Vec::with_capacity(files.len());
        for raw in files {
            let mut entry = MappingEntry::parse(raw)?;
            entry.canonicalize_source().await;
            entries.push(entry);
        }

        // Sources first: a bad source must not leave destination-side
        // artifacts behind.
        for entry in &entries {
            validate_source(entry.source()).await?;
        }
        for entry in &entries {
            prepare_destination(entry.destination()).await?;
        }

        Ok(Self { entries })
    }

    /// Lifecycle hook invoked by the host before the test run begins
    ///
    /// # Errors
    ///
    /// Returns the first `CopyFailed` encountered; see [`Self::copy_all`].
    pub async fn copy_files(&self) -> Result<(), Error> {
        self.copy_all().await
    }

    /// Lifecycle hook invoked by the host after the test run ends
    ///
    /// # Errors
    ///
    /// Returns the first `RemovalFailed` encountered; see
    /// [`Self::remove_all`].
    pub async fn remove_files(&self) -> Result<(), Error> {
        self.remove_all().await
    }

    /// Copy every mapping entry in configuration order
    ///
    /// No-op when the entry set is empty. Not transactional: entries
    /// copied before a failure stay in place and later entries are not
    /// attempted.
    ///
    /// # Errors
    ///
    /// Returns `StagingError::CopyFailed` naming both paths if a file or
    /// recursive directory copy fails.
    pub async fn copy_all(&self) -> Result<(), Error> {
        if self.entries.is_empty() {
            return Ok(());
        }

        for entry in &self.entries {
            copy_entry(entry.source(), entry.destination()).await?;
        }

        info!(count = self.entries.len(), "staged files copied");
        Ok(())
    }

    /// Remove every mapping entry's destination in configuration order
    ///
    /// Targets the same destination list used for copying, whether or not
    /// a copy ever ran. Destinations that do not exist are skipped, so the
    /// operation is idempotent. Not transactional, same as
    /// [`Self::copy_all`].
    ///
    /// # Errors
    ///
    /// Returns `StagingError::RemovalFailed` naming the path if a
    /// recursive removal fails.
    pub async fn remove_all(&self) -> Result<(), Error> {
        if self.entries.is_empty() {
            return Ok(());
        }

        for entry in &self.entries {
            remove_destination(entry.destination()).await?;
        }

        info!(count = self.entries.len(), "staged files removed");
        Ok(())
    }

    #[must_use]
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check that a source exists and is readable
///
/// The path passes if it exists as given or relative to the current
/// working directory. Read-only check, no side effects.
async fn validate_source(source: &Path) -> Result<(), Error> {
    let Some(path) = locate_source(source).await else {
        return Err(StagingError::SourceNotFound {
            path: source.display().to_string(),
        }
        .into());
    };

    let metadata = fs::metadata(&path)
        .await
        .map_err(|_| StagingError::SourceNotReadable {
            path: source.display().to_string(),
        })?;

    // Probe actual readability; mode bits alone cannot answer this for
    // the current process.
    let readable = if metadata.is_dir() {
        fs::read_dir(&path).await.map(|_| ())
    } else {
        fs::File::open(&path).await.map(|_| ())
    };

    readable.map_err(|_| {
        StagingError::SourceNotReadable {
            path: source.display().to_string(),
        }
        .into()
    })
}

/// Find the existing form of a source path: as given, or relative to the
/// current working directory
async fn locate_source(source: &Path) -> Option<PathBuf> {
    if fsops::exists(source).await {
        return Some(source.to_path_buf());
    }

    let relative = source.strip_prefix("/").unwrap_or(source);
    let cwd = env::current_dir().ok()?;
    let fallback = cwd.join(relative);
    if fsops::exists(&fallback).await {
        Some(fallback)
    } else {
        None
    }
}

/// Prepare a destination for a later copy
///
/// Creates the parent directory (and all missing ancestors) if absent,
/// verifies the parent is writable, and removes any pre-existing content
/// at the destination path itself.
async fn prepare_destination(destination: &Path) -> Result<(), Error> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let not_writable = || StagingError::DestinationParentNotWritable {
        path: parent.display().to_string(),
    };

    // A failed creation attempt (read-only ancestor, path component that
    // is a file) counts as a non-writable parent, not a raw I/O error.
    if !fsops::exists(parent).await && fsops::create_dir_all(parent).await.is_err() {
        return Err(not_writable().into());
    }

    let probe_dir = parent.to_path_buf();
    let writable = tokio::task::spawn_blocking(move || tempfile::tempfile_in(probe_dir).is_ok())
        .await
        .unwrap_or(false);
    if !writable {
        return Err(not_writable().into());
    }

    remove_destination(destination).await
}

/// Copy one source to one destination
///
/// Regular files are copied byte-for-byte; directories are copied
/// recursively with their full tree.
async fn copy_entry(source: &Path, destination: &Path) -> Result<(), Error> {
    debug!(
        source = %source.display(),
        destination = %destination.display(),
        "copying staged path"
    );

    let copy_failed = |message: String| StagingError::CopyFailed {
        source_path: source.display().to_string(),
        destination: destination.display().to_string(),
        message,
    };

    let metadata = fs::metadata(source)
        .await
        .map_err(|e| copy_failed(e.to_string()))?;

    let result = if metadata.is_dir() {
        fsops::copy_directory(source, destination).await
    } else {
        fsops::copy_file(source, destination).await
    };

    result.map_err(|e| copy_failed(e.to_string()).into())
}

/// Remove a previously staged destination
///
/// A destination that does not exist is a no-op, so removal is safe to
/// repeat.
async fn remove_destination(destination: &Path) -> Result<(), Error> {
    if !fsops::exists(destination).await {
        return Ok(());
    }

    debug!(path = %destination.display(), "removing staged path");

    fsops::remove_path(destination).await.map_err(|e| {
        StagingError::RemovalFailed {
            path: destination.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}
