//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and domain logic. Services here are
//! pure orchestrators - they don't know about concrete implementations.

mod app_core;
mod auth_service;
mod dashboard_service;
mod link_service;

pub use app_core::AppCore;
pub use auth_service::AuthService;
pub use dashboard_service::DashboardService;
pub use link_service::LinkService;

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory store shared by the service tests.

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::domain::DocumentKind;
    use crate::ports::{DocumentStore, RepositoryError};

    #[derive(Default)]
    pub struct InMemoryStore {
        docs: Mutex<HashMap<DocumentKind, Value>>,
    }

    impl InMemoryStore {
        pub fn get(&self, kind: DocumentKind) -> Option<Value> {
            self.docs.lock().unwrap().get(&kind).cloned()
        }
    }

    #[async_trait]
    impl DocumentStore for InMemoryStore {
        async fn read(&self, kind: DocumentKind) -> Result<Option<Value>, RepositoryError> {
            Ok(self.get(kind))
        }

        async fn write(&self, kind: DocumentKind, value: &Value) -> Result<(), RepositoryError> {
            self.docs.lock().unwrap().insert(kind, value.clone());
            Ok(())
        }
    }
}
