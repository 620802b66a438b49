//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the `PanelContext` snapshot from Leptos context and
//! forward user actions to it. DOM ids follow the camera page contract:
//! `#availableCameras`, `#connectedCameras`, `camera-{id}`, `settings-{id}`,
//! `{id}-{setting}` and `{id}-{setting}-value`.

pub mod camera_card;
pub mod camera_list;
pub mod error_banner;
pub mod setting_slider;
