//! Auth handlers - settings, login and token verification.

use axum::Json;
use axum::extract::State;

use crate::error::{CoreResultExt, HttpError};
use crate::state::AppState;
use homedash_core::{
    Acknowledgement, AuthSettings, LoginRequest, LoginResponse, VerifyRequest, VerifyResponse,
};

/// Get auth settings with the password masked.
pub async fn get_settings(State(state): State<AppState>) -> Result<Json<AuthSettings>, HttpError> {
    let settings = state
        .core
        .auth()
        .settings()
        .await
        .or_fail("Failed to get auth settings")?;
    Ok(Json(settings))
}

/// Save auth settings. A masked password leaves the stored one in place.
pub async fn save_settings(
    State(state): State<AppState>,
    Json(settings): Json<AuthSettings>,
) -> Result<Json<Acknowledgement>, HttpError> {
    state
        .core
        .auth()
        .save(settings)
        .await
        .or_fail("Failed to save auth settings")?;
    Ok(Json(Acknowledgement::OK))
}

/// Check credentials. Rejections answer 401.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    let response = state
        .core
        .auth()
        .login(&request)
        .await
        .or_fail("Login failed")?;
    Ok(Json(response))
}

/// Check a token.
pub async fn verify(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, HttpError> {
    let response = state
        .core
        .auth()
        .verify(&request)
        .await
        .or_fail("Token verification failed")?;
    Ok(Json(response))
}
