//! Dashboard settings service.

use std::sync::Arc;

use crate::domain::DashboardSettings;
use crate::ports::{CoreError, DocumentStore, Documents};

/// Service for dashboard appearance settings.
pub struct DashboardService {
    docs: Documents,
}

impl DashboardService {
    /// Create a new dashboard service.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            docs: Documents::new(store),
        }
    }

    /// Get current settings.
    pub async fn get(&self) -> Result<DashboardSettings, CoreError> {
        Ok(self.docs.load().await?)
    }

    /// Overwrite settings wholesale.
    pub async fn save(&self, settings: &DashboardSettings) -> Result<(), CoreError> {
        Ok(self.docs.save(settings).await?)
    }
}
