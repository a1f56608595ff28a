#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod api;
mod cache;
mod config;
mod error;
mod fallback;
mod http;
mod services;

use std::path::Path;
use std::sync::Arc;

// ============================================================================
// Public API
// ============================================================================

// Transport
pub use api::ApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, ApiResult, CacheError, TIMEOUT_STATUS};
pub use http::{HttpBackend, Method, ReqwestBackend};

// Cache and fallback
pub use cache::{CacheKey, CacheStore, DocumentCache, FileCache, MemoryCache};
pub use fallback::{Source, Synced, with_fallback};

// Services
pub use services::{AuthClientService, DashboardSettingsService, LinkClientService};

/// Entry point bundling the three client services over one API client and cache.
#[derive(Clone)]
pub struct HomedashClient {
    links: LinkClientService,
    dashboard: DashboardSettingsService,
    auth: AuthClientService,
}

impl HomedashClient {
    pub fn new(api: ApiClient, cache: DocumentCache) -> Self {
        Self {
            links: LinkClientService::new(api.clone(), cache.clone()),
            dashboard: DashboardSettingsService::new(api.clone(), cache.clone()),
            auth: AuthClientService::new(api, cache),
        }
    }

    /// Build a reqwest-backed client with a file cache at `cache_file`.
    pub fn connect(config: &ClientConfig, cache_file: &Path) -> Result<Self, ConnectError> {
        let api = ApiClient::new(config)?;
        let cache = FileCache::open(cache_file)?;
        Ok(Self::new(api, DocumentCache::new(Arc::new(cache))))
    }

    pub const fn links(&self) -> &LinkClientService {
        &self.links
    }

    pub const fn dashboard(&self) -> &DashboardSettingsService {
        &self.dashboard
    }

    pub const fn auth(&self) -> &AuthClientService {
        &self.auth
    }
}

/// Failure while building a [`HomedashClient`].
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Cache(#[from] CacheError),
}

// Silence unused dev-dependency warnings
#[cfg(test)]
use homedash_axum as _;
#[cfg(test)]
use homedash_store as _;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn connect_with_unreachable_server_still_serves_cache() {
        let temp = TempDir::new().unwrap();
        let config = ClientConfig::new()
            .with_base_url("http://127.0.0.1:9/api")
            .with_timeout(std::time::Duration::from_secs(2));
        let client = HomedashClient::connect(&config, &temp.path().join("client_cache.json")).unwrap();

        let settings = client.dashboard().initialize().await;

        assert_eq!(settings.source, Source::Cache);
        assert!(temp.path().join("client_cache.json").is_file());
    }

    #[test]
    fn connect_rejects_bad_url() {
        let temp = TempDir::new().unwrap();
        let config = ClientConfig::new().with_base_url("::nope");

        let result = HomedashClient::connect(&config, &temp.path().join("cache.json"));

        assert!(matches!(result, Err(ConnectError::Api(ApiError::InvalidUrl(_)))));
    }
}
