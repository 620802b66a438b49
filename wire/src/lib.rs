//! Shared JSON wire model for the camera control HTTP API.
//!
//! This crate owns the request/response bodies and endpoint paths used by
//! `server`, `panel`, `cli`, and `web`. Everything here is plain serde data;
//! transport lives with the callers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Backend-assigned identifier of a capture device.
pub type CameraId = u32;

/// Setting name -> value as reported by `GET /api/camera/{id}/settings`.
///
/// A value of [`UNSUPPORTED`] marks a setting the device cannot adjust.
pub type CameraSettings = BTreeMap<String, f64>;

/// Sentinel value for settings the device does not support.
pub const UNSUPPORTED: f64 = -1.0;

/// Multipart boundary used by the MJPEG stream endpoint.
pub const STREAM_BOUNDARY: &str = "frame";

/// Content type of the MJPEG stream endpoint.
pub const STREAM_CONTENT_TYPE: &str = "multipart/x-mixed-replace; boundary=frame";

/// Returns true when a reported setting value is the "not supported" sentinel.
#[must_use]
pub fn is_unsupported(value: f64) -> bool {
    (value - UNSUPPORTED).abs() < f64::EPSILON
}

// =============================================================================
// BODIES
// =============================================================================

/// Body of `GET /api/cameras`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraList {
    /// Every camera the backend detected.
    pub available: Vec<CameraId>,
    /// The subset currently connected on the backend.
    pub connected: Vec<CameraId>,
}

/// Outcome tag carried by connect/disconnect/update responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Success,
    AlreadyConnected,
    Error,
}

/// Body of `POST /api/camera/{id}/connect` and `/disconnect`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: ActionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_id: Option<CameraId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResponse {
    #[must_use]
    pub fn success(camera_id: CameraId) -> Self {
        Self { status: ActionStatus::Success, camera_id: Some(camera_id), message: None }
    }

    #[must_use]
    pub fn already_connected(camera_id: CameraId) -> Self {
        Self { status: ActionStatus::AlreadyConnected, camera_id: Some(camera_id), message: None }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { status: ActionStatus::Error, camera_id: None, message: Some(message.into()) }
    }
}

/// Body of `POST /api/camera/{id}/settings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingUpdate {
    pub setting: String,
    pub value: f64,
}

/// Success body of `POST /api/camera/{id}/settings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingUpdated {
    pub status: ActionStatus,
    pub setting: String,
    pub value: f64,
}

/// Error body used by the settings endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// Endpoint paths, relative to the API origin.
pub mod paths {
    use super::CameraId;

    pub const CAMERAS: &str = "/api/cameras";
    pub const HEALTHZ: &str = "/healthz";

    #[must_use]
    pub fn connect(id: CameraId) -> String {
        format!("/api/camera/{id}/connect")
    }

    #[must_use]
    pub fn disconnect(id: CameraId) -> String {
        format!("/api/camera/{id}/disconnect")
    }

    #[must_use]
    pub fn settings(id: CameraId) -> String {
        format!("/api/camera/{id}/settings")
    }

    #[must_use]
    pub fn stream(id: CameraId) -> String {
        format!("/api/camera/{id}/stream")
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
