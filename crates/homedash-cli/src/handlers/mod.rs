//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call the client services
//!   3. Format output for the terminal
//!
//! `serve` and `paths` do not need a client context.

pub mod auth;
pub mod links;
pub mod paths;
pub mod serve;
pub mod settings;
