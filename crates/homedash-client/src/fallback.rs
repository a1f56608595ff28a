//! Server-or-cache execution.
//!
//! Every client service call runs the remote request first. On success the
//! result is mirrored into the cache; on any failure the cache answers
//! instead. Callers see a value either way, tagged with where it came from.

use std::future::Future;

use tracing::warn;

use crate::error::ApiError;

/// Where a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The server answered.
    Remote,
    /// The server was unavailable and the local cache answered.
    Cache,
}

impl Source {
    /// `Cache` if either side is `Cache`.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Remote, Self::Remote) => Self::Remote,
            _ => Self::Cache,
        }
    }
}

/// A service result plus its [`Source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synced<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Synced<T> {
    pub const fn remote(value: T) -> Self {
        Self {
            value,
            source: Source::Remote,
        }
    }

    pub const fn cached(value: T) -> Self {
        Self {
            value,
            source: Source::Cache,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.source == Source::Remote
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Synced<U> {
        Synced {
            value: f(self.value),
            source: self.source,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Run `remote`, mirroring success with `on_success` and degrading with `on_failure`.
pub async fn with_fallback<T, Fut, S, F>(
    operation: &str,
    remote: Fut,
    on_success: S,
    on_failure: F,
) -> Synced<T>
where
    Fut: Future<Output = Result<T, ApiError>>,
    S: FnOnce(&T),
    F: FnOnce(ApiError) -> T,
{
    match remote.await {
        Ok(value) => {
            on_success(&value);
            Synced::remote(value)
        }
        Err(error) => {
            warn!(
                target: "homedash.client",
                operation,
                status = error.status(),
                error = %error,
                "Request failed, using local cache"
            );
            Synced::cached(on_failure(error))
        }
    }
}
