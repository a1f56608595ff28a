//! Directory creation and verification.
//!
//! `DirectoryCreationStrategy` has no interactive variant; adapters that want
//! to prompt do so first and then pass `AutoCreate` or `Disallow`.

use std::fs;
use std::path::Path;

use super::error::PathError;

/// Name of the probe file written by [`verify_writable`].
const WRITE_PROBE: &str = ".homedash_write_test";

/// How to handle a missing directory in [`ensure_directory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryCreationStrategy {
    /// Create the directory and its parents.
    #[default]
    AutoCreate,
    /// Fail with [`PathError::DirectoryNotFound`].
    Disallow,
}

/// Make sure `path` is an existing, writable directory.
pub fn ensure_directory(path: &Path, strategy: DirectoryCreationStrategy) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
    } else if strategy == DirectoryCreationStrategy::AutoCreate {
        fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::info!(target: "homedash.paths", path = %path.display(), "Created directory");
    } else {
        return Err(PathError::DirectoryNotFound(path.to_path_buf()));
    }

    verify_writable(path)
}

/// Verify a directory is writable by creating and removing a probe file.
pub fn verify_writable(path: &Path) -> Result<(), PathError> {
    let probe = path.join(WRITE_PROBE);
    fs::write(&probe, b"ok").map_err(|e| PathError::NotWritable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if let Err(e) = fs::remove_file(&probe) {
        tracing::debug!(target: "homedash.paths", error = %e, "Could not remove write probe");
    }
    Ok(())
}
