#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

#[cfg(test)]
use homedash_store as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, ensure_authenticated};
pub use commands::{
    AuthCommand, AuthSettingsCommand, Commands, LinkOrderCommand, LinksCommand, SettingsCommand,
};
pub use error::CliError;
pub use parser::Cli;
