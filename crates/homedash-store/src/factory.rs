//! Composition utilities for building `AppCore` over a document store.
//!
//! Construction only; no domain logic lives here.

use std::path::Path;
use std::sync::Arc;

use homedash_core::{AppCore, DocumentStore};

use crate::repositories::MemoryDocumentStore;
use crate::setup::setup_store;

/// Factory for wiring `AppCore` to a concrete store.
pub struct CoreFactory;

impl CoreFactory {
    /// Build an `AppCore` from any store.
    pub fn build_app_core(store: Arc<dyn DocumentStore>) -> AppCore {
        AppCore::new(store)
    }

    /// Set up the file store in `dir` and build an `AppCore` over it.
    pub async fn file_app_core(dir: &Path) -> anyhow::Result<AppCore> {
        let store = setup_store(dir).await?;
        Ok(Self::build_app_core(store))
    }

    /// Build an `AppCore` over an empty in-memory store.
    pub fn memory_app_core() -> AppCore {
        Self::build_app_core(Arc::new(MemoryDocumentStore::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn file_app_core_reads_seeded_documents() {
        let temp = TempDir::new().unwrap();
        let core = CoreFactory::file_app_core(temp.path()).await.unwrap();

        assert!(core.links().list().await.unwrap().links.is_empty());
        assert_eq!(
            core.dashboard().get().await.unwrap().title,
            "Services Dashboard"
        );
    }

    #[tokio::test]
    async fn memory_app_core_falls_back_to_defaults() {
        let core = CoreFactory::memory_app_core();
        assert!(core.links().order().await.unwrap().order.is_empty());
    }
}
