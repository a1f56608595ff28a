//! Document store trait definition.
//!
//! This port defines the interface for whole-document persistence.
//! Implementations handle all storage details internally.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::RepositoryError;
use crate::domain::{Document, DocumentKind};

/// Storage for the named JSON documents.
///
/// Reads and writes always cover a whole document; there is no field-level
/// update. Implementations provide no locking: two writers racing on the same
/// kind resolve as last-writer-wins.
///
/// # Design Rules
///
/// - Works with raw JSON values so backends stay schema-agnostic
/// - `read` returns `Ok(None)` when the document does not exist yet
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read a whole document, or `None` if it was never written.
    async fn read(&self, kind: DocumentKind) -> Result<Option<Value>, RepositoryError>;

    /// Overwrite a whole document.
    async fn write(&self, kind: DocumentKind, value: &Value) -> Result<(), RepositoryError>;
}

/// Typed access to a [`DocumentStore`].
#[derive(Clone)]
pub struct Documents {
    store: Arc<dyn DocumentStore>,
}

impl Documents {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// The underlying untyped store.
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Load a document, falling back to its default when it does not exist.
    pub async fn load<D: Document>(&self) -> Result<D, RepositoryError> {
        match self.store.read(D::KIND).await? {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| RepositoryError::Serialization(format!("{}: {e}", D::KIND))),
            None => {
                tracing::warn!(
                    target: "homedash.store",
                    document = %D::KIND,
                    "Document missing, using default"
                );
                Ok(D::default())
            }
        }
    }

    /// Serialize and overwrite a document.
    pub async fn save<D: Document>(&self, document: &D) -> Result<(), RepositoryError> {
        let value = serde_json::to_value(document)
            .map_err(|e| RepositoryError::Serialization(format!("{}: {e}", D::KIND)))?;
        self.store.write(D::KIND, &value).await
    }
}
