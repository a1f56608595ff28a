//! CLI bootstrap - the composition root for client commands.
//!
//! Builds the REST client and the file-backed offline cache and loads the
//! auth settings. Commands that touch the dashboard then pass
//! [`ensure_authenticated`] before anything else is loaded.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use homedash_client::{ClientConfig, HomedashClient};
use homedash_core::paths::{CLIENT_CACHE_FILE, DirectoryCreationStrategy, cache_dir, ensure_directory};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the dashboard API.
    pub api_url: String,
    /// Directory holding the offline cache file.
    pub cache_dir: PathBuf,
}

impl CliConfig {
    /// Resolve the default cache directory when none was given.
    pub fn new(api_url: String, cache_dir_override: Option<PathBuf>) -> Result<Self> {
        let cache_dir = match cache_dir_override {
            Some(dir) => dir,
            None => cache_dir()?,
        };
        Ok(Self { api_url, cache_dir })
    }

    /// Build from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::new(cli.api_url.clone(), cli.cache_dir.clone())
    }

    pub fn cache_file(&self) -> PathBuf {
        self.cache_dir.join(CLIENT_CACHE_FILE)
    }

    fn client_config(&self) -> ClientConfig {
        ClientConfig::new().with_base_url(self.api_url.clone())
    }
}

/// Fully composed context for client commands.
pub struct CliContext {
    /// The client services facade.
    pub client: HomedashClient,
    /// Where the offline cache lives.
    pub cache_file: PathBuf,
}

impl CliContext {
    pub const fn client(&self) -> &HomedashClient {
        &self.client
    }

    pub fn cache_file(&self) -> &Path {
        &self.cache_file
    }
}

/// Bootstrap the client side of the CLI.
///
/// 1. Creates the cache directory
/// 2. Opens the cache file and builds the REST client
/// 3. Initializes auth settings (seeding the cache when offline)
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    ensure_directory(&config.cache_dir, DirectoryCreationStrategy::AutoCreate)
        .with_context(|| format!("Cannot use cache directory {}", config.cache_dir.display()))?;

    let cache_file = config.cache_file();
    let client =
        HomedashClient::connect(&config.client_config(), &cache_file).map_err(CliError::from)?;

    client.auth().initialize().await;

    tracing::debug!(
        api_url = %config.api_url,
        cache_file = %cache_file.display(),
        "CLI context ready"
    );

    Ok(CliContext { client, cache_file })
}

/// Gate for `links` and `settings` commands.
///
/// Passes when auth is disabled or the stored token checks out, then loads
/// the dashboard settings (seeding the cache when offline).
pub async fn ensure_authenticated(ctx: &CliContext) -> Result<()> {
    let authenticated = ctx.client().auth().is_authenticated().await;
    if !authenticated.value {
        tracing::debug!(source = ?authenticated.source, "No valid token");
        return Err(CliError::NotLoggedIn.into());
    }

    ctx.client().dashboard().initialize().await;
    Ok(())
}
