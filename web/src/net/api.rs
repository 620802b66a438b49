//! `CameraApi` for the browser.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with `ApiError::Unavailable`, which keeps
//! the component tree compilable and testable off the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status codes outside 2xx become `ApiError::Status`; response bodies of
//! mutating calls are not inspected.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use panel::{ApiError, CameraApi};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wire::{CameraId, CameraList, CameraSettings, SettingUpdate, paths};

/// Camera API reached with `fetch`. An empty base URL means same origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserApi {
    base_url: String,
}

impl BrowserApi {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url(endpoint))
                .send()
                .await
                .map_err(|e| ApiError::transport(endpoint, e))?;
            if !resp.ok() {
                return Err(ApiError::status(endpoint, resp.status()));
            }
            resp.json::<T>().await.map_err(|e| ApiError::decode(endpoint, e))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    async fn post(&self, endpoint: &str, body: Option<&impl Serialize>) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::post(&self.url(endpoint));
            let sent = match body {
                Some(body) => {
                    builder
                        .json(body)
                        .map_err(|e| ApiError::transport(endpoint, e))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::transport(endpoint, e))?;
            if !resp.ok() {
                return Err(ApiError::status(endpoint, resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

impl CameraApi for BrowserApi {
    async fn list_cameras(&self) -> Result<CameraList, ApiError> {
        self.get_json(paths::CAMERAS).await
    }

    async fn connect(&self, camera: CameraId) -> Result<(), ApiError> {
        self.post(&paths::connect(camera), None::<&()>).await
    }

    async fn disconnect(&self, camera: CameraId) -> Result<(), ApiError> {
        self.post(&paths::disconnect(camera), None::<&()>).await
    }

    async fn settings(&self, camera: CameraId) -> Result<CameraSettings, ApiError> {
        self.get_json(&paths::settings(camera)).await
    }

    async fn update_setting(&self, camera: CameraId, update: &SettingUpdate) -> Result<(), ApiError> {
        self.post(&paths::settings(camera), Some(update)).await
    }

    fn stream_url(&self, camera: CameraId) -> String {
        self.url(&paths::stream(camera))
    }
}
