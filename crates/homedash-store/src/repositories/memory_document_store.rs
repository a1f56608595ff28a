//! In-memory implementation of the `DocumentStore` trait.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use homedash_core::{DocumentKind, DocumentStore, RepositoryError};

/// Mutex-guarded map of documents, for tests and throwaway servers.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: Mutex<HashMap<DocumentKind, Value>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with the given documents.
    pub fn with_documents(documents: impl IntoIterator<Item = (DocumentKind, Value)>) -> Self {
        Self {
            documents: Mutex::new(documents.into_iter().collect()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<DocumentKind, Value>>, RepositoryError> {
        self.documents
            .lock()
            .map_err(|_| RepositoryError::Storage("document map lock poisoned".to_string()))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn read(&self, kind: DocumentKind) -> Result<Option<Value>, RepositoryError> {
        Ok(self.lock()?.get(&kind).cloned())
    }

    async fn write(&self, kind: DocumentKind, value: &Value) -> Result<(), RepositoryError> {
        self.lock()?.insert(kind, value.clone());
        tracing::debug!(target: "homedash.store", document = %kind, "Document saved in memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn empty_store_reads_none() {
        let store = MemoryDocumentStore::new();
        assert_eq!(store.read(DocumentKind::DashboardSettings).await.unwrap(), None);
    }

    #[tokio::test]
    async fn writes_overwrite_whole_document() {
        let store = MemoryDocumentStore::with_documents([(
            DocumentKind::Links,
            json!({"links": [{"id": "a"}]}),
        )]);

        store
            .write(DocumentKind::Links, &json!({"links": []}))
            .await
            .unwrap();

        assert_eq!(
            store.read(DocumentKind::Links).await.unwrap(),
            Some(json!({"links": []}))
        );
    }
}
