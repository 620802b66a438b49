//! Backend seam for the controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Controller` never builds requests itself. Native callers plug in
//! `HttpCameraApi` (reqwest), the browser front end plugs in a `gloo-net`
//! implementation, and tests plug in an in-memory fake.
//!
//! ERROR HANDLING
//! ==============
//! Only "call succeeded" vs "call failed" matters to the controller, but the
//! failure is kept structured so a UI can tell a dead network from a 400.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::{CameraId, CameraList, CameraSettings, SettingUpdate};

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, timeout).
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    /// The backend answered with a non-success status.
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },
    /// The response body was not the expected JSON.
    #[error("unexpected response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
    /// This build has no transport for the camera API.
    #[error("camera API is not available in this build")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn transport(endpoint: &str, message: impl std::fmt::Display) -> Self {
        Self::Transport { endpoint: endpoint.to_owned(), message: message.to_string() }
    }

    #[must_use]
    pub fn status(endpoint: &str, status: u16) -> Self {
        Self::Status { endpoint: endpoint.to_owned(), status }
    }

    #[must_use]
    pub fn decode(endpoint: &str, message: impl std::fmt::Display) -> Self {
        Self::Decode { endpoint: endpoint.to_owned(), message: message.to_string() }
    }
}

/// Operations the controller needs from the camera backend.
///
/// Futures are not required to be `Send`: the browser implementation runs on
/// a single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait CameraApi {
    /// `GET /api/cameras`.
    async fn list_cameras(&self) -> Result<CameraList, ApiError>;

    /// `POST /api/camera/{id}/connect`; any success status counts.
    async fn connect(&self, camera: CameraId) -> Result<(), ApiError>;

    /// `POST /api/camera/{id}/disconnect`; any success status counts.
    async fn disconnect(&self, camera: CameraId) -> Result<(), ApiError>;

    /// `GET /api/camera/{id}/settings`.
    async fn settings(&self, camera: CameraId) -> Result<CameraSettings, ApiError>;

    /// `POST /api/camera/{id}/settings` with `{setting, value}`.
    async fn update_setting(&self, camera: CameraId, update: &SettingUpdate) -> Result<(), ApiError>;

    /// URL an image element can load to show the live stream.
    fn stream_url(&self, camera: CameraId) -> String;
}
