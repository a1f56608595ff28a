//! Link handlers - CRUD and manual ordering.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::error::{CoreResultExt, HttpError};
use crate::state::AppState;
use homedash_core::{Acknowledgement, Link, LinkCollection, LinkOrder, NewLink};

/// List all links in storage order.
pub async fn list(State(state): State<AppState>) -> Result<Json<LinkCollection>, HttpError> {
    let links = state.core.links().list().await.or_fail("Failed to get links")?;
    Ok(Json(links))
}

/// Create a link.
pub async fn add(
    State(state): State<AppState>,
    Json(new_link): Json<NewLink>,
) -> Result<(StatusCode, Json<Link>), HttpError> {
    let link = state
        .core
        .links()
        .create(new_link)
        .await
        .or_fail("Failed to add link")?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// Replace a link.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(link): Json<Link>,
) -> Result<Json<Link>, HttpError> {
    let updated = state
        .core
        .links()
        .update(&id, link)
        .await
        .or_fail("Failed to update link")?;
    Ok(Json(updated))
}

/// Delete a link.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    state
        .core
        .links()
        .delete(&id)
        .await
        .or_fail("Failed to delete link")?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the manual order.
pub async fn get_order(State(state): State<AppState>) -> Result<Json<LinkOrder>, HttpError> {
    let order = state
        .core
        .links()
        .order()
        .await
        .or_fail("Failed to get links order")?;
    Ok(Json(order))
}

/// Overwrite the manual order.
pub async fn set_order(
    State(state): State<AppState>,
    Json(order): Json<LinkOrder>,
) -> Result<Json<Acknowledgement>, HttpError> {
    state
        .core
        .links()
        .set_order(&order)
        .await
        .or_fail("Failed to save links order")?;
    Ok(Json(Acknowledgement::OK))
}
