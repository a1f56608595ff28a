//! Axum-specific error types and mappings.
//!
//! Handlers never leak storage details to callers: unexpected failures are
//! logged here and answered with a fixed per-operation message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use homedash_core::{CoreError, LoginResponse};
use serde::Serialize;
use thiserror::Error;

/// Body of every 404.
pub const LINK_NOT_FOUND: &str = "Link not found";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Login credentials rejected.
    #[error("Invalid credentials")]
    Unauthorized,

    /// Internal server error. Carries the public message only.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Unauthorized => {
                return (StatusCode::UNAUTHORIZED, axum::Json(LoginResponse::rejected()))
                    .into_response();
            }
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl HttpError {
    /// Map a core error, using `operation` as the public 500 message.
    pub fn from_core(err: CoreError, operation: &'static str) -> Self {
        match err {
            CoreError::NotFound(id) => {
                tracing::debug!(target: "homedash.api", link_id = %id, "{operation}: not found");
                Self::NotFound(LINK_NOT_FOUND.to_string())
            }
            CoreError::Unauthorized => Self::Unauthorized,
            CoreError::Repository(_) => {
                tracing::error!(target: "homedash.api", error = %err, "{operation}");
                Self::Internal(operation.to_string())
            }
        }
    }
}

/// Attach a public failure message to a core result.
pub trait CoreResultExt<T> {
    fn or_fail(self, operation: &'static str) -> Result<T, HttpError>;
}

impl<T> CoreResultExt<T> for Result<T, CoreError> {
    fn or_fail(self, operation: &'static str) -> Result<T, HttpError> {
        self.map_err(|err| HttpError::from_core(err, operation))
    }
}
