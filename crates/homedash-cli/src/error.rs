//! CLI-specific error types and exit codes.

use homedash_client::ConnectError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The named link does not exist (on the server or in the cache).
    #[error("Link not found: {0}")]
    LinkNotFound(String),

    /// Login was refused.
    #[error("Invalid credentials")]
    Unauthorized,

    /// Auth is enabled and no valid token is stored.
    #[error("Not logged in; run 'homedash auth login' first")]
    NotLoggedIn,

    /// IO error (stdin closed, cache directory not writable, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (bad API URL, unusable cache file).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::LinkNotFound(_) => 1,
            Self::Unauthorized | Self::NotLoggedIn => 77, // EX_NOPERM
            Self::Io(_) => 74,        // EX_IOERR
            Self::Config(_) => 78,    // EX_CONFIG
        }
    }
}

impl From<ConnectError> for CliError {
    fn from(err: ConnectError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
