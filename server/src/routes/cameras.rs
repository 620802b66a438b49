//! Camera enumeration, connection and settings routes.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a 400 with a JSON body. Connect/disconnect failures use
//! the `{status: "error", message}` shape; settings failures use
//! `{error}`. Device errors are logged and collapsed into those messages.

#[cfg(test)]
#[path = "cameras_test.rs"]
mod cameras_test;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use tokio::sync::Mutex;
use wire::{ActionResponse, ActionStatus, CameraId, CameraList, CameraSettings, ErrorResponse, SettingUpdated};

use crate::state::AppState;

pub const NOT_CONNECTED: &str = "Camera not connected";
pub const FAILED_TO_CONNECT: &str = "Failed to connect";
pub const INVALID_PARAMETERS: &str = "Invalid parameters";
pub const FAILED_TO_SET: &str = "Failed to set setting";

/// A 400 response carrying one of the API's error bodies.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiFailure {
    /// `{status: "error", message}`
    Action(&'static str),
    /// `{error}`
    Settings(&'static str),
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match self {
            Self::Action(message) => (StatusCode::BAD_REQUEST, Json(ActionResponse::error(message))).into_response(),
            Self::Settings(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: error.to_owned() })).into_response()
            }
        }
    }
}

/// Body of `POST /api/camera/:id/settings`. Both fields are optional so a
/// missing one is reported as invalid parameters instead of a 422.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingBody {
    pub setting: Option<String>,
    pub value: Option<f64>,
}

/// `GET /api/cameras` — detected and connected camera IDs.
pub async fn list_cameras(State(state): State<AppState>) -> Json<CameraList> {
    let available = state.driver.detect().await;
    let connected = state.connected_ids().await;
    Json(CameraList { available, connected })
}

/// `POST /api/camera/:id/connect` — open a camera.
pub async fn connect_camera(
    State(state): State<AppState>,
    Path(id): Path<CameraId>,
) -> Result<Json<ActionResponse>, ApiFailure> {
    if state.device(id).await.is_some() {
        return Ok(Json(ActionResponse::already_connected(id)));
    }

    // Opening can be slow on real hardware; keep it outside the map lock.
    let mut device = state.driver.open(id).await.map_err(|e| {
        tracing::warn!(camera_id = id, error = %e, "camera open failed");
        ApiFailure::Action(FAILED_TO_CONNECT)
    })?;

    let mut cameras = state.cameras.write().await;
    if cameras.contains_key(&id) {
        drop(cameras);
        device.release();
        return Ok(Json(ActionResponse::already_connected(id)));
    }
    cameras.insert(id, Arc::new(Mutex::new(device)));
    tracing::info!(camera_id = id, "camera connected");
    Ok(Json(ActionResponse::success(id)))
}

/// `POST /api/camera/:id/disconnect` — release a camera.
pub async fn disconnect_camera(
    State(state): State<AppState>,
    Path(id): Path<CameraId>,
) -> Result<Json<ActionResponse>, ApiFailure> {
    let removed = state.cameras.write().await.remove(&id);
    let Some(device) = removed else {
        return Err(ApiFailure::Action(NOT_CONNECTED));
    };
    device.lock().await.release();
    tracing::info!(camera_id = id, "camera disconnected");
    Ok(Json(ActionResponse::success(id)))
}

/// `GET /api/camera/:id/settings` — current device settings.
pub async fn get_settings(
    State(state): State<AppState>,
    Path(id): Path<CameraId>,
) -> Result<Json<CameraSettings>, ApiFailure> {
    let device = state.device(id).await.ok_or(ApiFailure::Settings(NOT_CONNECTED))?;
    let settings = device.lock().await.settings();
    Ok(Json(settings))
}

/// `POST /api/camera/:id/settings` — write one setting.
pub async fn update_settings(
    State(state): State<AppState>,
    Path(id): Path<CameraId>,
    body: Result<Json<UpdateSettingBody>, JsonRejection>,
) -> Result<Json<SettingUpdated>, ApiFailure> {
    let device = state.device(id).await.ok_or(ApiFailure::Settings(NOT_CONNECTED))?;

    let Json(body) = body.map_err(|e| {
        tracing::debug!(camera_id = id, error = %e, "rejected settings body");
        ApiFailure::Settings(INVALID_PARAMETERS)
    })?;
    let (setting, value) = match (body.setting, body.value) {
        (Some(setting), Some(value)) if !setting.is_empty() => (setting, value),
        _ => return Err(ApiFailure::Settings(INVALID_PARAMETERS)),
    };

    device.lock().await.set_setting(&setting, value).map_err(|e| {
        tracing::warn!(camera_id = id, %setting, error = %e, "setting rejected");
        ApiFailure::Settings(FAILED_TO_SET)
    })?;

    tracing::debug!(camera_id = id, %setting, value, "setting updated");
    Ok(Json(SettingUpdated { status: ActionStatus::Success, setting, value }))
}
