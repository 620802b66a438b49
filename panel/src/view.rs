//! View model for the camera list and camera cards.
//!
//! DESIGN
//! ======
//! Renderers never look elements up by constructed id strings. Cards live in
//! the controller's registry keyed by camera id; element ids are derived data
//! on the card for renderers that need stable DOM ids.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::collections::BTreeSet;

use wire::{CameraId, CameraList, CameraSettings};

use crate::settings::{SettingsPanel, render_settings};

/// Text shown instead of buttons when no camera is available.
pub const NO_CAMERAS_TEXT: &str = "No cameras detected";

/// One entry of the available-camera list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraButton {
    pub id: CameraId,
    pub label: String,
    /// Already connected on the backend; clicking would be a no-op.
    pub disabled: bool,
}

/// The available-camera list as last reported by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CameraListView {
    /// Nothing rendered yet (before the first successful discovery).
    #[default]
    Unloaded,
    /// The backend reported no cameras.
    Empty,
    Buttons(Vec<CameraButton>),
}

impl CameraListView {
    #[must_use]
    pub fn buttons(&self) -> &[CameraButton] {
        match self {
            Self::Buttons(buttons) => buttons,
            Self::Unloaded | Self::Empty => &[],
        }
    }
}

/// Build the list view from a discovery response.
#[must_use]
pub fn render_camera_list(list: &CameraList) -> CameraListView {
    if list.available.is_empty() {
        return CameraListView::Empty;
    }

    let connected: BTreeSet<CameraId> = list.connected.iter().copied().collect();
    let buttons = list
        .available
        .iter()
        .map(|&id| {
            let disabled = connected.contains(&id);
            let label = if disabled { format!("Camera {id} (Connected)") } else { format!("Camera {id}") };
            CameraButton { id, label, disabled }
        })
        .collect();
    CameraListView::Buttons(buttons)
}

/// A connected camera: header, live stream, and settings.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraCard {
    pub id: CameraId,
    pub title: String,
    pub stream_url: String,
    pub settings: SettingsPanel,
}

impl CameraCard {
    #[must_use]
    pub fn new(id: CameraId, stream_url: String, settings: &CameraSettings) -> Self {
        Self { id, title: format!("Camera {id}"), stream_url, settings: render_settings(id, settings) }
    }

    /// DOM id of the card, e.g. `camera-5`.
    #[must_use]
    pub fn element_id(&self) -> String {
        card_element_id(self.id)
    }

    /// DOM id of the settings grid, e.g. `settings-5`.
    #[must_use]
    pub fn settings_element_id(&self) -> String {
        format!("settings-{}", self.id)
    }

    /// Alt text of the stream image.
    #[must_use]
    pub fn stream_alt(&self) -> String {
        format!("Camera {} Stream", self.id)
    }
}

/// DOM id of the card for `id`.
#[must_use]
pub fn card_element_id(id: CameraId) -> String {
    format!("camera-{id}")
}
