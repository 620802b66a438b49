//! MJPEG streaming route.
//!
//! The response body is an endless `multipart/x-mixed-replace` stream: one
//! part per tick of the configured frame interval. The stream ends when the
//! device it started with leaves the connected map.

#[cfg(test)]
#[path = "stream_test.rs"]
mod stream_test;

use std::convert::Infallible;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use futures::Stream;
use tokio::time::MissedTickBehavior;
use wire::{CameraId, STREAM_BOUNDARY, STREAM_CONTENT_TYPE};

use crate::routes::cameras::NOT_CONNECTED;
use crate::state::{AppState, SharedDevice};

/// Wrap one JPEG frame as a multipart part.
#[must_use]
pub fn multipart_part(jpeg: &[u8]) -> Bytes {
    let header = format!("--{STREAM_BOUNDARY}\r\nContent-Type: image/jpeg\r\n\r\n");
    let mut part = Vec::with_capacity(header.len() + jpeg.len() + 2);
    part.extend_from_slice(header.as_bytes());
    part.extend_from_slice(jpeg);
    part.extend_from_slice(b"\r\n");
    Bytes::from(part)
}

/// Frames of `device` paced at the state's frame interval.
pub fn frame_stream(
    state: AppState,
    id: CameraId,
    device: SharedDevice,
) -> impl Stream<Item = Result<Bytes, Infallible>> + Send + 'static {
    let mut ticker = tokio::time::interval(state.frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    futures::stream::unfold((state, device, ticker), move |(state, device, mut ticker)| async move {
        loop {
            ticker.tick().await;
            let current = state.device(id).await?;
            if !Arc::ptr_eq(&current, &device) {
                return None;
            }
            let frame = device.lock().await.frame();
            if let Some(jpeg) = frame {
                return Some((Ok(multipart_part(&jpeg)), (state, device, ticker)));
            }
        }
    })
}

/// `GET /api/camera/:id/stream` — live MJPEG stream.
pub async fn stream_camera(State(state): State<AppState>, Path(id): Path<CameraId>) -> Response {
    let Some(device) = state.device(id).await else {
        return (StatusCode::BAD_REQUEST, NOT_CONNECTED).into_response();
    };

    tracing::debug!(camera_id = id, "stream opened");
    let body = Body::from_stream(frame_stream(state, id, device));
    ([(CONTENT_TYPE, STREAM_CONTENT_TYPE), (CACHE_CONTROL, "no-cache")], body).into_response()
}
