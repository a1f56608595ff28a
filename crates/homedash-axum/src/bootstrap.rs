//! Server configuration and wiring of the document store into `AppCore`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use homedash_core::paths::documents_dir;
use homedash_core::{AppCore, DocumentStore};
use homedash_store::{CoreFactory, setup_store};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3001;

/// Which browser origins may call the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    #[default]
    AllowAll,
    /// Exact origins such as `http://dash.lan:8080`.
    AllowOrigins(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the JSON documents.
    pub data_dir: PathBuf,
    /// Built web UI to serve next to the API.
    pub static_dir: Option<PathBuf>,
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Config with an explicit data directory and default everything else.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: data_dir.into(),
            static_dir: None,
            cors: CorsConfig::default(),
        }
    }

    /// Config rooted at the platform documents directory.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(documents_dir()?))
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// What the handlers share.
pub struct AxumContext {
    pub core: Arc<AppCore>,
}

impl AxumContext {
    /// Wrap an already-built store. Used by tests and embedders.
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            core: Arc::new(CoreFactory::build_app_core(store)),
        }
    }
}

/// Bootstrap the Axum server: prepare the data directory and wire `AppCore`.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "homedash.paths",
        data_dir = %config.data_dir.display(),
        static_dir = ?config.static_dir,
        "Axum bootstrap resolved paths"
    );

    let store = setup_store(&config.data_dir).await?;
    Ok(AxumContext::with_store(store))
}

/// Bind `0.0.0.0:port` and serve until the process exits.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;

    let (app, mode) = match config.static_dir.as_deref() {
        Some(static_dir) => (
            crate::routes::create_spa_router(ctx, static_dir, &config.cors),
            "api+ui",
        ),
        None => (crate::routes::create_router(ctx, &config.cors), "api"),
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        target: "homedash.api",
        addr = %listener.local_addr()?,
        mode,
        "homedash server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = ServerConfig::new("/tmp/data")
            .with_port(8080)
            .with_static_dir("/srv/www")
            .with_allowed_origins(vec!["http://dash.lan".to_string()]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, Some(PathBuf::from("/srv/www")));
        assert_eq!(
            config.cors,
            CorsConfig::AllowOrigins(vec!["http://dash.lan".to_string()])
        );
    }

    #[test]
    fn defaults_to_port_3001() {
        assert_eq!(ServerConfig::new("/tmp").port, 3001);
    }
}
