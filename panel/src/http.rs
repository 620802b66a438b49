//! `CameraApi` over HTTP using `reqwest`.
//!
//! Any 2xx status counts as success for connect/disconnect/update; the body
//! of those responses is not inspected.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use serde::de::DeserializeOwned;
use wire::{CameraId, CameraList, CameraSettings, SettingUpdate, paths};

use crate::api::{ApiError, CameraApi};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Transport settings for [`HttpCameraApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    /// API origin, without a trailing slash.
    pub base_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl HttpConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Build config from environment variables.
    ///
    /// - `CAMERA_API_URL`: default `http://127.0.0.1:5001`
    /// - `CAMERA_API_TIMEOUT_SECS`: default 10
    /// - `CAMERA_API_CONNECT_TIMEOUT_SECS`: default 5
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("CAMERA_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let secs = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };

        Self {
            base_url: normalize_base_url(&base_url),
            request_timeout: Duration::from_secs(secs("CAMERA_API_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)),
            connect_timeout: Duration::from_secs(secs(
                "CAMERA_API_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )),
        }
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_owned()
}

/// HTTP client for the camera API.
#[derive(Clone, Debug)]
pub struct HttpCameraApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCameraApi {
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be built
    /// (e.g. TLS backend initialization failure).
    pub fn new(config: &HttpConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ApiError::transport(&config.base_url, e))?;
        Ok(Self { client, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: reqwest::RequestBuilder, endpoint: &str) -> Result<reqwest::Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(endpoint, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::status(endpoint, status.as_u16()));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self.send(self.client.get(self.url(endpoint)), endpoint).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(endpoint, e))?;
        serde_json::from_slice(&body).map_err(|e| ApiError::decode(endpoint, e))
    }

    async fn post_empty(&self, endpoint: &str) -> Result<(), ApiError> {
        self.send(self.client.post(self.url(endpoint)), endpoint).await?;
        Ok(())
    }
}

impl CameraApi for HttpCameraApi {
    async fn list_cameras(&self) -> Result<CameraList, ApiError> {
        self.get_json(paths::CAMERAS).await
    }

    async fn connect(&self, camera: CameraId) -> Result<(), ApiError> {
        self.post_empty(&paths::connect(camera)).await
    }

    async fn disconnect(&self, camera: CameraId) -> Result<(), ApiError> {
        self.post_empty(&paths::disconnect(camera)).await
    }

    async fn settings(&self, camera: CameraId) -> Result<CameraSettings, ApiError> {
        self.get_json(&paths::settings(camera)).await
    }

    async fn update_setting(&self, camera: CameraId, update: &SettingUpdate) -> Result<(), ApiError> {
        let endpoint = paths::settings(camera);
        let request = self.client.post(self.url(&endpoint)).json(update);
        self.send(request, &endpoint).await?;
        Ok(())
    }

    fn stream_url(&self, camera: CameraId) -> String {
        self.url(&paths::stream(camera))
    }
}
