//! Path utilities for homedash data directories.
//!
//! This module provides the canonical path resolution for all homedash components:
//! - Server document directory
//! - Client cache directory and file
//! - Application data root
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod documents;
mod ensure;
mod error;
mod platform;
mod resolver;

#[cfg(test)]
mod test_utils;

// Re-export public API

// Error type
pub use error::PathError;

// Platform roots
pub use platform::{CACHE_DIR_ENV, DATA_DIR_ENV, data_root};

// Document and cache locations
pub use documents::{CLIENT_CACHE_FILE, cache_dir, client_cache_path, documents_dir};

// Directory operations
pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};

// Pure resolver for testing and CLI
pub use resolver::ResolvedPaths;
