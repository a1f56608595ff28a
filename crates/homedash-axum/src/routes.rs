//! The `/api` route table plus the health and static-asset wrappers around it.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match config {
        CorsConfig::AllowAll => layer.allow_origin(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(target: "homedash.api", %origin, "Ignoring unparsable CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(allowed)
        }
    }
}

/// Routes relative to `/api`. State is attached by the caller.
///
/// `/links/order` is a static segment and wins over `/links/{id}`.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Dashboard settings
        .route(
            "/dashboard/settings",
            get(handlers::dashboard::get).put(handlers::dashboard::save),
        )
        // Links
        .route(
            "/links",
            get(handlers::links::list).post(handlers::links::add),
        )
        .route(
            "/links/order",
            get(handlers::links::get_order).put(handlers::links::set_order),
        )
        .route(
            "/links/{id}",
            put(handlers::links::update).delete(handlers::links::remove),
        )
        // Auth
        .route(
            "/auth/settings",
            get(handlers::auth::get_settings).put(handlers::auth::save_settings),
        )
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/verify", post(handlers::auth::verify))
}

/// API-only router: `/health` plus everything under `/api`.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes().with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// [`create_router`] with a built web UI behind it.
///
/// Unmatched paths are served from `static_dir`; anything that is not a file
/// there gets `index.html` so the UI can do its own routing.
pub fn create_spa_router<P: AsRef<Path>>(
    ctx: AxumContext,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    let static_path = static_dir.as_ref();
    let index_path = static_path.join("index.html");

    let serve_dir = ServeDir::new(static_path).fallback(ServeFile::new(&index_path));

    create_router(ctx, cors_config).fallback_service(serve_dir)
}

pub(crate) async fn health_check() -> &'static str {
    "OK"
}
