//! Traits the core expects from infrastructure, and the errors they speak.
//!
//! Signatures carry domain types only. Storage is whole-document read/write.

pub mod document_store;

use thiserror::Error;

pub use document_store::{DocumentStore, Documents};

#[cfg(test)]
pub use document_store::MockDocumentStore;

/// Failure inside a [`DocumentStore`], with io and serde detail flattened
/// to text.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// What services return. Adapters map it to HTTP statuses or exit codes.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A link id did not match any stored link.
    #[error("Link not found: {0}")]
    NotFound(String),

    /// Credentials did not match the stored auth settings.
    #[error("Invalid credentials")]
    Unauthorized,
}
