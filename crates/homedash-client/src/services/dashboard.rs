//! Dashboard appearance settings with offline fallback.

use homedash_core::{Acknowledgement, DashboardSettings, DashboardSettingsUpdate};
use tracing::info;

use super::DASHBOARD_SETTINGS_PATH;
use crate::api::ApiClient;
use crate::cache::{CacheKey, DocumentCache};
use crate::fallback::{Synced, with_fallback};

#[derive(Clone)]
pub struct DashboardSettingsService {
    api: ApiClient,
    cache: DocumentCache,
}

impl DashboardSettingsService {
    pub const fn new(api: ApiClient, cache: DocumentCache) -> Self {
        Self { api, cache }
    }

    /// Current settings; defaults when the server is down and nothing is cached.
    pub async fn get_settings(&self) -> Synced<DashboardSettings> {
        with_fallback(
            "getSettings",
            self.api.get::<DashboardSettings>(DASHBOARD_SETTINGS_PATH),
            |settings| self.cache.store(CacheKey::DashboardSettings, settings),
            |_| {
                self.cache
                    .load(CacheKey::DashboardSettings)
                    .unwrap_or_default()
            },
        )
        .await
    }

    pub async fn save_settings(&self, settings: &DashboardSettings) -> Synced<()> {
        with_fallback(
            "saveSettings",
            async {
                self.api
                    .put::<_, Acknowledgement>(DASHBOARD_SETTINGS_PATH, settings)
                    .await
                    .map(|_| ())
            },
            |_| self.cache.store(CacheKey::DashboardSettings, settings),
            |_| self.cache.store(CacheKey::DashboardSettings, settings),
        )
        .await
    }

    /// Read, merge `update`, and write the whole document back.
    pub async fn update_settings(&self, update: DashboardSettingsUpdate) -> Synced<DashboardSettings> {
        let mut current = self.get_settings().await;
        if update.is_empty() {
            return current;
        }

        current.value.merge(update);
        let saved = self.save_settings(&current.value).await;
        Synced {
            source: current.source.combine(saved.source),
            value: current.value,
        }
    }

    /// Load settings at startup, seeding the cache with defaults when offline.
    pub async fn initialize(&self) -> Synced<DashboardSettings> {
        let settings = self.get_settings().await;
        if !settings.is_remote() && !self.cache.contains(CacheKey::DashboardSettings) {
            info!(target: "homedash.client", "Seeding cached dashboard settings with defaults");
            self.cache
                .store(CacheKey::DashboardSettings, &DashboardSettings::default());
        }
        settings
    }
}
