//! Server document and client cache locations.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::{CACHE_DIR_ENV, data_root, env_override, normalize_user_path};

/// File name of the client's local cache inside [`cache_dir`].
pub const CLIENT_CACHE_FILE: &str = "client_cache.json";

/// Directory holding the server's `<kind>.json` documents.
pub fn documents_dir() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join("data"))
}

/// Directory holding the client's offline cache.
///
/// `HOMEDASH_CACHE_DIR` wins; otherwise `<data_root>/cache`.
pub fn cache_dir() -> Result<PathBuf, PathError> {
    match env_override(CACHE_DIR_ENV) {
        Some(raw) => normalize_user_path(&raw),
        None => Ok(data_root()?.join("cache")),
    }
}

/// Full path of the client cache file.
pub fn client_cache_path() -> Result<PathBuf, PathError> {
    Ok(cache_dir()?.join(CLIENT_CACHE_FILE))
}
