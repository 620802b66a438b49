//! Camera device seam.
//!
//! DESIGN
//! ======
//! Routes only see `CameraDriver` (enumerate + open) and `CameraDevice`
//! (settings, frames, release). The shipped driver is `simulated`; a real
//! capture backend would implement the same two traits.

pub mod simulated;

use axum::body::Bytes;
use wire::{CameraId, CameraSettings};

/// Every setting a device reports, adjustable or not.
pub const SETTING_NAMES: [&str; 9] =
    ["brightness", "contrast", "saturation", "hue", "exposure", "gain", "width", "height", "fps"];

#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("camera {0} not found")]
    NotFound(CameraId),
    #[error("camera {0} failed to open")]
    OpenFailed(CameraId),
    #[error("unknown setting `{0}`")]
    UnknownSetting(String),
    #[error("setting `{0}` is not supported by this camera")]
    Unsupported(String),
    #[error("camera {0} has been released")]
    Released(CameraId),
}

/// Enumerates and opens devices.
#[async_trait::async_trait]
pub trait CameraDriver: Send + Sync {
    /// IDs of devices that can currently be opened, ascending.
    async fn detect(&self) -> Vec<CameraId>;

    /// Open a device for exclusive use.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`] for unknown IDs and
    /// [`DeviceError::OpenFailed`] when the device exists but cannot be opened.
    async fn open(&self, id: CameraId) -> Result<Box<dyn CameraDevice>, DeviceError>;
}

/// An opened device. Callers serialize access (one frame read or setting
/// write at a time).
pub trait CameraDevice: Send + Sync {
    fn id(&self) -> CameraId;

    /// Current value of every entry in [`SETTING_NAMES`]; `-1` marks
    /// unsupported ones. Empty once released.
    fn settings(&self) -> CameraSettings;

    /// # Errors
    ///
    /// Returns [`DeviceError::UnknownSetting`], [`DeviceError::Unsupported`],
    /// or [`DeviceError::Released`].
    fn set_setting(&mut self, name: &str, value: f64) -> Result<(), DeviceError>;

    /// Latest JPEG frame, if one is available.
    fn frame(&mut self) -> Option<Bytes>;

    fn release(&mut self);
}
