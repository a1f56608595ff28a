//! Platform-specific root resolution.
//!
//! Public API is exposed through sibling modules.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Overrides the data root.
pub const DATA_DIR_ENV: &str = "HOMEDASH_DATA_DIR";

/// Overrides the client cache directory.
pub const CACHE_DIR_ENV: &str = "HOMEDASH_CACHE_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `HOMEDASH_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/homedash`)
///
/// Nothing is created here; see [`super::ensure_directory`].
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Some(raw) = env_override(DATA_DIR_ENV) {
        return normalize_user_path(&raw);
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("homedash"))
}

/// A non-blank environment value.
pub(super) fn env_override(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::ScopedEnv;

    #[test]
    fn data_root_honours_env_override() {
        let _env = ScopedEnv::data_dir("/srv/homedash");

        assert_eq!(data_root().unwrap(), PathBuf::from("/srv/homedash"));
    }

    #[test]
    fn relative_override_is_made_absolute() {
        let _env = ScopedEnv::data_dir("state");

        let root = data_root().unwrap();
        assert!(root.is_absolute());
        assert!(root.ends_with("state"));
    }

    #[test]
    fn blank_path_is_rejected() {
        assert!(matches!(normalize_user_path("   "), Err(PathError::EmptyPath)));
    }
}
