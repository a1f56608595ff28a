//! Scoped control of `HOMEDASH_DATA_DIR` and `HOMEDASH_CACHE_DIR` for tests.

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{CACHE_DIR_ENV, DATA_DIR_ENV};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Pins both path overrides for the life of the value.
///
/// Holds a process-wide lock, so path tests touching the environment run one
/// at a time. Previous values come back on drop.
pub struct ScopedEnv {
    saved: [(&'static str, Option<String>); 2],
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    /// `None` removes the variable.
    pub fn new(data_dir: Option<&str>, cache_dir: Option<&str>) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let saved = [
            (DATA_DIR_ENV, env::var(DATA_DIR_ENV).ok()),
            (CACHE_DIR_ENV, env::var(CACHE_DIR_ENV).ok()),
        ];
        apply(DATA_DIR_ENV, data_dir);
        apply(CACHE_DIR_ENV, cache_dir);
        Self { saved, _lock: lock }
    }

    /// Data root override only; the cache override is cleared.
    pub fn data_dir(path: &str) -> Self {
        Self::new(Some(path), None)
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            apply(key, value.as_deref());
        }
    }
}

#[allow(unsafe_code)]
fn apply(key: &str, value: Option<&str>) {
    // Callers hold ENV_LOCK.
    unsafe {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }
}
