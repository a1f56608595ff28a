//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use std::path::Path;

use anyhow::Result;

use homedash_core::paths::ResolvedPaths;

/// Execute the paths command.
///
/// Prints every location homedash uses in `key = value` format, honoring
/// the `--cache-dir` override.
pub fn execute(cache_dir: Option<&Path>) -> Result<()> {
    let paths = ResolvedPaths::resolve_with(None, cache_dir)?;
    println!("{paths}");
    Ok(())
}
