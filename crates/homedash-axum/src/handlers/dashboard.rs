//! Dashboard settings handlers.

use axum::Json;
use axum::extract::State;

use crate::error::{CoreResultExt, HttpError};
use crate::state::AppState;
use homedash_core::{Acknowledgement, DashboardSettings};

/// Get dashboard settings.
pub async fn get(State(state): State<AppState>) -> Result<Json<DashboardSettings>, HttpError> {
    let settings = state
        .core
        .dashboard()
        .get()
        .await
        .or_fail("Failed to get dashboard settings")?;
    Ok(Json(settings))
}

/// Overwrite dashboard settings.
pub async fn save(
    State(state): State<AppState>,
    Json(settings): Json<DashboardSettings>,
) -> Result<Json<Acknowledgement>, HttpError> {
    state
        .core
        .dashboard()
        .save(&settings)
        .await
        .or_fail("Failed to save dashboard settings")?;
    Ok(Json(Acknowledgement::OK))
}
