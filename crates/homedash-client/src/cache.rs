//! Local durable cache for offline mode.
//!
//! Entries are JSON values under fixed string keys. [`FileCache`] keeps all of
//! them in one JSON object file that is rewritten on every change.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::CacheError;

// ─────────────────────────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────────────────────────

/// Keys stored in the client cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Links,
    LinksOrder,
    DashboardSettings,
    AuthSettings,
    AuthToken,
    SortOption,
    ViewMode,
}

impl CacheKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Links => "dashboard_links",
            Self::LinksOrder => "dashboard_links_order",
            Self::DashboardSettings => "dashboard_settings",
            Self::AuthSettings => "dashboard_auth_settings",
            Self::AuthToken => "dashboard_auth_token",
            Self::SortOption => "dashboard_sort_option",
            Self::ViewMode => "dashboard_view_mode",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Port
// ─────────────────────────────────────────────────────────────────────────────

/// Synchronous key/value storage for cached JSON values.
#[cfg_attr(test, mockall::automock)]
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, CacheError>;

    fn set(&self, key: &str, value: Value) -> Result<(), CacheError>;

    fn remove(&self, key: &str) -> Result<(), CacheError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// File backend
// ─────────────────────────────────────────────────────────────────────────────

type Entries = BTreeMap<String, Value>;

/// Cache persisted as a single JSON object file.
#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl FileCache {
    /// Open the cache file, starting empty if it does not exist.
    ///
    /// A file that is not a JSON object is logged and ignored; it is
    /// overwritten by the next change.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str::<Entries>(&text).unwrap_or_else(|e| {
                warn!(
                    target: "homedash.client",
                    path = %path.display(),
                    error = %e,
                    "Ignoring unreadable cache file"
                );
                Entries::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Entries::new(),
            Err(e) => {
                return Err(CacheError::Io {
                    path,
                    reason: e.to_string(),
                });
            }
        };

        debug!(target: "homedash.client", path = %path.display(), entries = entries.len(), "Cache opened");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &Entries) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(&e))?;
        }
        let text = serde_json::to_string_pretty(entries)
            .map_err(|e| CacheError::Serialization(e.to_string()))?;
        fs::write(&self.path, text).map_err(|e| self.io_error(&e))
    }

    fn io_error(&self, error: &std::io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            reason: error.to_string(),
        }
    }
}

impl CacheStore for FileCache {
    fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        entries.insert(key.to_string(), value);
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory backend
// ─────────────────────────────────────────────────────────────────────────────

/// Non-persistent cache, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<Entries>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Typed wrapper
// ─────────────────────────────────────────────────────────────────────────────

/// Typed, best-effort access to a [`CacheStore`].
///
/// Read failures and undecodable entries are logged and reported as absent.
/// Write failures are logged and dropped. Offline mode should degrade, not
/// fail, when the cache itself is broken.
#[derive(Clone)]
pub struct DocumentCache {
    store: Arc<dyn CacheStore>,
}

impl DocumentCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    pub fn load<T: DeserializeOwned>(&self, key: CacheKey) -> Option<T> {
        let value = match self.store.get(key.as_str()) {
            Ok(value) => value?,
            Err(e) => {
                warn!(target: "homedash.client", key = key.as_str(), error = %e, "Cache read failed");
                return None;
            }
        };

        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(target: "homedash.client", key = key.as_str(), error = %e, "Discarding malformed cache entry");
                None
            }
        }
    }

    pub fn contains(&self, key: CacheKey) -> bool {
        matches!(self.store.get(key.as_str()), Ok(Some(_)))
    }

    pub fn store<T: Serialize + ?Sized>(&self, key: CacheKey, value: &T) {
        let result = serde_json::to_value(value)
            .map_err(|e| CacheError::Serialization(e.to_string()))
            .and_then(|value| self.store.set(key.as_str(), value));

        if let Err(e) = result {
            warn!(target: "homedash.client", key = key.as_str(), error = %e, "Cache write failed");
        }
    }

    pub fn remove(&self, key: CacheKey) {
        if let Err(e) = self.store.remove(key.as_str()) {
            warn!(target: "homedash.client", key = key.as_str(), error = %e, "Cache remove failed");
        }
    }

    /// Load (or default), mutate, and store back.
    pub fn update<T, F>(&self, key: CacheKey, mutate: F) -> T
    where
        T: Serialize + DeserializeOwned + Default,
        F: FnOnce(&mut T),
    {
        let mut value = self.load(key).unwrap_or_default();
        mutate(&mut value);
        self.store(key, &value);
        value
    }
}
