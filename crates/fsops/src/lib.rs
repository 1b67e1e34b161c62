#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Filesystem primitives for fixstage
//!
//! This crate provides the recursive copy and recursive remove operations
//! the staging layer is built on, plus directory management helpers.

use fixstage_errors::Error;
use std::path::Path;
use tokio::fs;

/// Result type for filesystem operations
type Result<T> = std::result::Result<T, Error>;

/// Recursively copy a directory
///
/// Creates `dst` (and missing ancestors) and copies the full tree under
/// `src` into it, preserving structure.
///
/// # Errors
///
/// Returns an error if:
/// - Creating the destination directory fails
/// - Reading the source directory fails
/// - Copying any file or subdirectory fails
pub async fn copy_directory(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)
        .await
        .map_err(|e| Error::io_with_path(&e, dst))?;

    let mut entries = fs::read_dir(src)
        .await
        .map_err(|e| Error::io_with_path(&e, src))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(&e, src))?
    {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        let metadata = entry
            .metadata()
            .await
            .map_err(|e| Error::io_with_path(&e, &src_path))?;
        if metadata.is_dir() {
            Box::pin(copy_directory(&src_path, &dst_path)).await?;
        } else {
            fs::copy(&src_path, &dst_path)
                .await
                .map_err(|e| Error::io_with_path(&e, &dst_path))?;
        }
    }

    Ok(())
}

/// Copy a single regular file byte-for-byte, overwriting the destination
///
/// # Errors
///
/// Returns an error if the underlying copy fails (permissions, missing
/// source, full disk, etc.)
pub async fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst)
        .await
        .map(|_| ())
        .map_err(|e| Error::io_with_path(&e, dst))
}

/// Remove a file or directory tree
///
/// A path that does not exist is a no-op, so removal is idempotent.
///
/// # Errors
///
/// Returns an error if the removal operation fails (permissions, busy
/// mount, etc.)
pub async fn remove_path(path: &Path) -> Result<()> {
    let Ok(metadata) = fs::symlink_metadata(path).await else {
        return Ok(());
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };

    result.map_err(|e| Error::io_with_path(&e, path))
}

/// Create a directory with all parent directories
///
/// # Errors
///
/// Returns an error if:
/// - Permission is denied
/// - Any I/O operation fails during directory creation
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| Error::io_with_path(&e, path))
}

/// Check if a path exists
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}
