//! # panel
//!
//! Controller for the camera control page: discovers cameras, connects and
//! disconnects them, and keeps a registry of camera cards (stream URL plus
//! setting sliders) in sync with the backend.
//!
//! The controller is UI-agnostic. It talks to the backend through the
//! [`CameraApi`] seam and exposes its state as plain view-model data
//! ([`PanelSnapshot`]) that a renderer turns into DOM or terminal output.

pub mod api;
pub mod controller;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod settings;
pub mod view;

pub use api::{ApiError, CameraApi};
pub use controller::{Controller, PanelSnapshot};
pub use error::PanelError;
#[cfg(feature = "http")]
pub use http::{HttpCameraApi, HttpConfig};
pub use settings::{SettingControl, SettingsPanel};
pub use view::{CameraButton, CameraCard, CameraListView};
pub use wire::{CameraId, CameraList, CameraSettings, SettingUpdate};
