//! File-backed implementation of the `DocumentStore` trait.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use homedash_core::{DocumentKind, DocumentStore, RepositoryError};

/// Stores each document as `<dir>/<kind>.json`, pretty-printed.
///
/// Every write replaces the whole file. There is no locking; concurrent
/// writers to the same document resolve as last-writer-wins.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    dir: PathBuf,
}

impl FileDocumentStore {
    /// Create a store rooted at `dir`. The directory is not created here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the document files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a document kind.
    pub fn path_for(&self, kind: DocumentKind) -> PathBuf {
        self.dir.join(format!("{}.json", kind.name()))
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn read(&self, kind: DocumentKind) -> Result<Option<Value>, RepositoryError> {
        let path = self.path_for(kind);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RepositoryError::Storage(format!(
                    "{}: {e}",
                    path.display()
                )));
            }
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| RepositoryError::Serialization(format!("{}: {e}", path.display())))
    }

    async fn write(&self, kind: DocumentKind, value: &Value) -> Result<(), RepositoryError> {
        let path = self.path_for(kind);
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tokio::fs::write(&path, text)
            .await
            .map_err(|e| RepositoryError::Storage(format!("{}: {e}", path.display())))?;

        tracing::info!(target: "homedash.store", document = %kind, "Document saved");
        Ok(())
    }
}
