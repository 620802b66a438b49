//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the device driver and the map of connected devices. Each device
//! sits behind its own mutex so a stream reading frames never blocks a
//! settings write on another camera. A device is connected exactly while
//! it is present in the map; stream loops poll the map and end once their
//! device is gone.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use wire::CameraId;

use crate::devices::{CameraDevice, CameraDriver};

pub type SharedDevice = Arc<Mutex<Box<dyn CameraDevice>>>;

/// Shared application state. Clone is required by Axum; all inner fields are
/// Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub driver: Arc<dyn CameraDriver>,
    pub cameras: Arc<RwLock<HashMap<CameraId, SharedDevice>>>,
    /// Pacing of the MJPEG stream.
    pub frame_interval: Duration,
}

impl AppState {
    #[must_use]
    pub fn new(driver: Arc<dyn CameraDriver>, frame_interval: Duration) -> Self {
        Self { driver, cameras: Arc::new(RwLock::new(HashMap::new())), frame_interval }
    }

    /// The connected device for `id`, if any.
    pub async fn device(&self, id: CameraId) -> Option<SharedDevice> {
        self.cameras.read().await.get(&id).cloned()
    }

    /// Connected IDs, ascending.
    pub async fn connected_ids(&self) -> Vec<CameraId> {
        let mut ids: Vec<CameraId> = self.cameras.read().await.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Release and forget every connected device. Used on shutdown.
    pub async fn release_all(&self) {
        let drained: Vec<SharedDevice> = self.cameras.write().await.drain().map(|(_, device)| device).collect();
        for device in drained {
            let mut device = device.lock().await;
            device.release();
            tracing::info!(camera_id = device.id(), "camera released");
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::devices::simulated::SimulatedDriver;

    /// `AppState` over simulated cameras 0..=3 (camera 3 fails to open),
    /// streaming at 100 fps.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(Arc::new(SimulatedDriver::new(&[0, 1, 2, 3], &[3])), Duration::from_millis(10))
    }

    /// Open `id` through the driver and place it in the connected map.
    pub async fn seed_connected(state: &AppState, id: CameraId) {
        let device = state.driver.open(id).await.expect("seed camera should open");
        state.cameras.write().await.insert(id, Arc::new(Mutex::new(device)));
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
