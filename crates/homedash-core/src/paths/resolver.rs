//! Pure path resolver for testing and CLI introspection.
//!
//! Captures every resolved location in one struct, exposed via the
//! `homedash paths` command.

use std::fmt;
use std::path::{Path, PathBuf};

use super::{CLIENT_CACHE_FILE, PathError, cache_dir, data_root, documents_dir};

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data.
    pub data_root: PathBuf,
    /// Directory with the server's JSON documents.
    pub documents_dir: PathBuf,
    /// Directory with the client's offline cache.
    pub cache_dir: PathBuf,
    /// The client cache file itself.
    pub cache_file: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Self::resolve_with(None, None)
    }

    /// Resolve with explicit overrides, as passed on the command line.
    ///
    /// `documents_dir` replaces the server document directory only;
    /// `cache_dir` replaces the client cache directory.
    pub fn resolve_with(
        documents_dir_override: Option<&Path>,
        cache_dir_override: Option<&Path>,
    ) -> Result<Self, PathError> {
        let data_root = data_root()?;
        let documents_dir = match documents_dir_override {
            Some(dir) => dir.to_path_buf(),
            None => documents_dir()?,
        };
        let cache_dir = match cache_dir_override {
            Some(dir) => dir.to_path_buf(),
            None => cache_dir()?,
        };
        let cache_file = cache_dir.join(CLIENT_CACHE_FILE);

        Ok(Self {
            data_root,
            documents_dir,
            cache_dir,
            cache_file,
        })
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        writeln!(f, "documents_dir = {}", self.documents_dir.display())?;
        writeln!(f, "cache_dir = {}", self.cache_dir.display())?;
        write!(f, "cache_file = {}", self.cache_file.display())
    }
}
