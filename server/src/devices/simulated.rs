//! In-process simulated cameras.
//!
//! Every device serves the same embedded JPEG test pattern and keeps its
//! settings in memory. Odd IDs report exposure as unsupported and hue is
//! unsupported everywhere, so clients see the `-1` sentinel in practice.

#[cfg(test)]
#[path = "simulated_test.rs"]
mod simulated_test;

use std::collections::BTreeSet;

use axum::body::Bytes;
use wire::{CameraId, CameraSettings, UNSUPPORTED, is_unsupported};

use super::{CameraDevice, CameraDriver, DeviceError, SETTING_NAMES};

static TEST_PATTERN: &[u8] = include_bytes!("../../assets/test-pattern.jpg");

/// Driver over a fixed set of simulated IDs.
pub struct SimulatedDriver {
    cameras: BTreeSet<CameraId>,
    faulty: BTreeSet<CameraId>,
}

impl SimulatedDriver {
    #[must_use]
    pub fn new(cameras: &[CameraId], faulty: &[CameraId]) -> Self {
        Self { cameras: cameras.iter().copied().collect(), faulty: faulty.iter().copied().collect() }
    }
}

#[async_trait::async_trait]
impl CameraDriver for SimulatedDriver {
    async fn detect(&self) -> Vec<CameraId> {
        self.cameras.iter().copied().collect()
    }

    async fn open(&self, id: CameraId) -> Result<Box<dyn CameraDevice>, DeviceError> {
        if !self.cameras.contains(&id) {
            return Err(DeviceError::NotFound(id));
        }
        if self.faulty.contains(&id) {
            return Err(DeviceError::OpenFailed(id));
        }
        Ok(Box::new(SimulatedCamera::new(id)))
    }
}

pub struct SimulatedCamera {
    id: CameraId,
    settings: CameraSettings,
    released: bool,
}

impl SimulatedCamera {
    #[must_use]
    pub fn new(id: CameraId) -> Self {
        Self { id, settings: default_profile(id), released: false }
    }
}

/// Initial settings for a simulated device.
#[must_use]
pub fn default_profile(id: CameraId) -> CameraSettings {
    let exposure = if id % 2 == 0 { -6.0 } else { UNSUPPORTED };
    SETTING_NAMES
        .iter()
        .map(|&name| {
            let value = match name {
                "contrast" => 32.0,
                "saturation" => 60.0,
                "hue" => UNSUPPORTED,
                "exposure" => exposure,
                "width" => 640.0,
                "height" => 480.0,
                "fps" => 30.0,
                _ => 0.0,
            };
            (name.to_owned(), value)
        })
        .collect()
}

impl CameraDevice for SimulatedCamera {
    fn id(&self) -> CameraId {
        self.id
    }

    fn settings(&self) -> CameraSettings {
        if self.released { CameraSettings::new() } else { self.settings.clone() }
    }

    fn set_setting(&mut self, name: &str, value: f64) -> Result<(), DeviceError> {
        if self.released {
            return Err(DeviceError::Released(self.id));
        }
        let Some(current) = self.settings.get_mut(name) else {
            return Err(DeviceError::UnknownSetting(name.to_owned()));
        };
        if is_unsupported(*current) || !value.is_finite() {
            return Err(DeviceError::Unsupported(name.to_owned()));
        }
        *current = value;
        Ok(())
    }

    fn frame(&mut self) -> Option<Bytes> {
        (!self.released).then(|| Bytes::from_static(TEST_PATTERN))
    }

    fn release(&mut self) {
        self.released = true;
    }
}
