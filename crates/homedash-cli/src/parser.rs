//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the services dashboard.
///
/// `serve` runs the API server; every other data command talks to a server
/// over HTTP and falls back to the local cache when it is unreachable.
#[derive(Parser)]
#[command(name = "homedash")]
#[command(about = "Self-hosted services dashboard: server and command-line client")]
#[command(version)]
pub struct Cli {
    /// Base URL of the dashboard API
    #[arg(
        long = "api-url",
        env = "HOMEDASH_API_URL",
        global = true,
        default_value = homedash_client::DEFAULT_BASE_URL
    )]
    pub api_url: String,

    /// Directory for the offline cache file
    #[arg(long = "cache-dir", env = "HOMEDASH_CACHE_DIR", global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
