//! Main commands enum and subcommand trees.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::Subcommand;
use homedash_core::{SortOption, ViewMode};

/// Available commands for the dashboard CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard API server (and optionally the web UI)
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = homedash_axum::DEFAULT_PORT)]
        port: u16,
        /// Directory holding the JSON documents
        #[arg(long, env = "HOMEDASH_DATA_DIR")]
        data_dir: Option<PathBuf>,
        /// Directory with the built web UI to serve at `/`
        #[arg(long, env = "HOMEDASH_STATIC_DIR")]
        static_dir: Option<PathBuf>,
        /// Allowed CORS origin (repeatable; default allows all)
        #[arg(long = "allowed-origin")]
        allowed_origins: Vec<String>,
    },

    /// Manage dashboard links
    Links {
        #[command(subcommand)]
        command: LinksCommand,
    },

    /// View or change dashboard appearance settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },

    /// Log in, log out and manage the shared password
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Show resolved paths for all homedash directories
    Paths,
}

/// Link management commands.
#[derive(Subcommand)]
pub enum LinksCommand {
    /// List links in display order
    List {
        /// Sort order (remembered for later calls)
        #[arg(long)]
        sort: Option<SortOption>,
        /// Layout: grid, list or detailed (remembered for later calls)
        #[arg(long)]
        view: Option<ViewMode>,
        /// Only show links whose name or description contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a new link
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        url: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Edit an existing link; omitted fields are unchanged
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// New image URL (pass an empty string to clear it)
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Delete a link
    Remove { id: String },
    /// Show or replace the custom order
    Order {
        #[command(subcommand)]
        command: LinkOrderCommand,
    },
    /// Move a link to a position in the custom order (0 = first)
    Move { id: String, position: usize },
}

/// Custom order commands.
#[derive(Subcommand)]
pub enum LinkOrderCommand {
    /// Show the custom order
    Show,
    /// Replace the custom order with the given ids
    Set {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Dashboard settings commands.
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show the current settings
    Show,
    /// Update one or more settings
    Set {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        subtitle: Option<String>,
        #[arg(long)]
        primary_color: Option<String>,
        #[arg(long)]
        background_color: Option<String>,
    },
}

/// Authentication commands.
#[derive(Subcommand)]
pub enum AuthCommand {
    /// Log in and store the token locally (prompts for missing values)
    Login {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored token
    Logout,
    /// Show whether this machine is authenticated
    Status,
    /// View or change the auth settings
    Settings {
        #[command(subcommand)]
        command: AuthSettingsCommand,
    },
}

/// Auth settings commands.
#[derive(Subcommand)]
pub enum AuthSettingsCommand {
    /// Show the auth settings (password masked)
    Show,
    /// Change the auth settings; omitted fields are unchanged
    Set {
        #[arg(long, conflicts_with = "disable")]
        enable: bool,
        #[arg(long)]
        disable: bool,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
}
