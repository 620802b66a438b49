//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the camera API consumed by the control panel. When a static
//! directory is configured (the built `web` crate), it is served for every
//! path the API does not claim.

pub mod cameras;
pub mod stream;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use wire::paths;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route(paths::CAMERAS, get(cameras::list_cameras))
        .route("/api/camera/{id}/connect", post(cameras::connect_camera))
        .route("/api/camera/{id}/disconnect", post(cameras::disconnect_camera))
        .route(
            "/api/camera/{id}/settings",
            get(cameras::get_settings).post(cameras::update_settings),
        )
        .route("/api/camera/{id}/stream", get(stream::stream_camera))
        .route(paths::HEALTHZ, get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true)),
        None => router,
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
