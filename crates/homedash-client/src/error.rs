//! Client error types.
//!
//! `ApiError` carries a numeric status the way the dashboard reports it:
//! the HTTP status for server answers, 408 for a local timeout and 0 for
//! anything that never produced a response.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for REST calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Status reported for a request that hit the client-side timeout.
pub const TIMEOUT_STATUS: u16 = 408;

/// Errors from a REST call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text, or a generic message when empty
        message: String,
    },

    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Connection refused, DNS failure or any other transport problem.
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("Invalid request body: {0}")]
    Encode(String),

    /// The configured base URL or request path is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Build a status error, substituting a generic message for an empty body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("Request failed with status {status}")
        } else {
            body.to_string()
        };
        Self::Status { status, message }
    }

    /// Numeric status: HTTP status, 408 for timeouts, 0 otherwise.
    pub const fn status(&self) -> u16 {
        match self {
            Self::Status { status, .. } => *status,
            Self::Timeout => TIMEOUT_STATUS,
            Self::Transport(_) | Self::Decode(_) | Self::Encode(_) | Self::InvalidUrl(_) => 0,
        }
    }

    /// True for a definitive 401 from the server.
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Errors from the local cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Reading or writing the cache file failed.
    #[error("Cache file {path}: {reason}")]
    Io {
        /// The cache file
        path: PathBuf,
        /// Underlying error text
        reason: String,
    },

    /// A cache entry could not be (de)serialized.
    #[error("Cache serialization error: {0}")]
    Serialization(String),

    /// The in-memory entry map is unusable after a panic.
    #[error("Cache lock poisoned")]
    Poisoned,
}
