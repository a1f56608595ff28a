//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

pub mod tables;

use homedash_client::Synced;

// Re-export commonly used items
pub use tables::{format_optional, format_timestamp, print_separator, truncate_string};

/// Tell the user when a result came from the local cache.
pub fn report_source<T>(result: &Synced<T>) {
    if !result.is_remote() {
        eprintln!("(offline mode: server unreachable, showing locally cached data)");
    }
}
