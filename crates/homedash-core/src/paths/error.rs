//! Errors from resolving and preparing homedash directories.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    /// `~` was used but no home directory is known.
    #[error("Cannot expand '~': home directory unknown")]
    NoHomeDir,

    #[error("No platform data directory available; set HOMEDASH_DATA_DIR")]
    NoDataDir,

    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Missing and `DirectoryCreationStrategy::Disallow` was requested.
    #[error("Directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    #[error("Cannot create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// The write probe could not be created.
    #[error("Directory {path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    #[error("Path override is blank")]
    EmptyPath,

    /// A relative override could not be anchored to the working directory.
    #[error("Cannot resolve relative path: {0}")]
    CurrentDirError(String),
}
