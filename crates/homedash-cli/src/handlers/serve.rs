//! Serve command handler.
//!
//! Runs the dashboard API (and optionally the web UI) in the foreground.

use std::path::PathBuf;

use anyhow::Result;
use homedash_axum::{ServerConfig, start_server};

/// Options for `homedash serve`.
#[derive(Debug, Clone, Default)]
pub struct ServeArgs {
    pub port: u16,
    pub data_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub allowed_origins: Vec<String>,
}

/// Build the server config from CLI options, defaulting the data directory.
pub fn server_config(args: ServeArgs) -> Result<ServerConfig> {
    let mut config = match args.data_dir {
        Some(dir) => ServerConfig::new(dir),
        None => ServerConfig::with_defaults()?,
    }
    .with_port(args.port);

    if let Some(dir) = args.static_dir {
        config = config.with_static_dir(dir);
    }
    if !args.allowed_origins.is_empty() {
        config = config.with_allowed_origins(args.allowed_origins);
    }
    Ok(config)
}

/// Execute the serve command. Runs until the process is stopped.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = server_config(args)?;

    println!();
    println!("  homedash server starting...");
    println!();
    println!("  Data:    {}", config.data_dir.display());
    println!("  API:     http://localhost:{}/api", config.port);
    match &config.static_dir {
        Some(dir) => println!("  UI:      {} (http://localhost:{})", dir.display(), config.port),
        None => println!("  UI:      none (use --static-dir to serve a frontend build)"),
    }
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use homedash_axum::CorsConfig;

    #[test]
    fn explicit_options_are_applied() {
        let config = server_config(ServeArgs {
            port: 8080,
            data_dir: Some(PathBuf::from("/srv/homedash/data")),
            static_dir: Some(PathBuf::from("/srv/homedash/dist")),
            allowed_origins: vec!["http://dash.lan".to_string()],
        })
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("/srv/homedash/data"));
        assert_eq!(config.static_dir, Some(PathBuf::from("/srv/homedash/dist")));
        assert_eq!(
            config.cors,
            CorsConfig::AllowOrigins(vec!["http://dash.lan".to_string()])
        );
    }

    #[test]
    fn no_origins_means_allow_all() {
        let config = server_config(ServeArgs {
            port: 3001,
            data_dir: Some(PathBuf::from("/tmp/data")),
            ..ServeArgs::default()
        })
        .unwrap();

        assert_eq!(config.cors, CorsConfig::AllowAll);
        assert_eq!(config.static_dir, None);
    }
}
