//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (HTTP, CLI)
//! receive an `AppCore` instance and use it to access all functionality.

use std::sync::Arc;

use crate::ports::DocumentStore;

use super::{AuthService, DashboardService, LinkService};

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at the
/// adapter's composition root with a concrete document store.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(FileDocumentStore::new(dir));
/// let core = AppCore::new(store);
///
/// let links = core.links().list().await?;
/// ```
pub struct AppCore {
    links: LinkService,
    dashboard: DashboardService,
    auth: AuthService,
}

impl AppCore {
    /// Create a new `AppCore` over the given document store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            links: LinkService::new(Arc::clone(&store)),
            dashboard: DashboardService::new(Arc::clone(&store)),
            auth: AuthService::new(store),
        }
    }

    /// Access the link service.
    pub const fn links(&self) -> &LinkService {
        &self.links
    }

    /// Access the dashboard settings service.
    pub const fn dashboard(&self) -> &DashboardService {
        &self.dashboard
    }

    /// Access the auth service.
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DashboardSettings, NewLink};
    use crate::services::testing::InMemoryStore;

    #[tokio::test]
    async fn services_share_one_store() {
        let core = AppCore::new(Arc::new(InMemoryStore::default()));

        let link = core
            .links()
            .create(NewLink {
                name: "Router".to_string(),
                url: "http://192.168.1.1".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(core.links().order().await.unwrap().order, vec![link.id]);
        assert_eq!(
            core.dashboard().get().await.unwrap(),
            DashboardSettings::default()
        );
        assert!(!core.auth().settings().await.unwrap().is_enabled);
    }
}
