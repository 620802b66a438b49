//! Camera control panel controller.
//!
//! DESIGN
//! ======
//! One `Controller` owns the connected-set, the camera list view, and the
//! card registry. Operations take `&self` so event handlers can share it
//! behind an `Arc`; state sits behind a std mutex that is never held across
//! an await.
//!
//! Every mutating operation re-runs discovery afterwards, so the
//! connected-set is re-derived from the backend rather than trusted.
//!
//! CONCURRENCY
//! ===========
//! Operations on the same camera (connect, disconnect, setting update,
//! restore) are serialized through a per-camera async lock. Operations on
//! different cameras run concurrently. A camera is reported as pending from
//! the moment an operation is requested until it finishes.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged and returned as `PanelError`. Nothing is retried, and
//! a failed call never changes local state.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::OwnedMutexGuard;
use tracing::{debug, info, warn};
use wire::{CameraId, CameraList, CameraSettings, SettingUpdate};

use crate::api::CameraApi;
use crate::error::PanelError;
use crate::settings;
use crate::view::{CameraCard, CameraListView, render_camera_list};

/// Owned copy of the controller state for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelSnapshot {
    pub list: CameraListView,
    /// Cards ordered by camera id.
    pub cards: Vec<CameraCard>,
    pub connected: BTreeSet<CameraId>,
    /// Cameras with an operation requested or running.
    pub pending: BTreeSet<CameraId>,
}

impl PanelSnapshot {
    #[must_use]
    pub fn card(&self, id: CameraId) -> Option<&CameraCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    #[must_use]
    pub fn is_pending(&self, id: CameraId) -> bool {
        self.pending.contains(&id)
    }
}

#[derive(Default)]
struct PanelState {
    list: CameraListView,
    connected: BTreeSet<CameraId>,
    cards: BTreeMap<CameraId, CameraCard>,
    /// camera -> number of operations requested and not yet finished.
    pending: BTreeMap<CameraId, usize>,
}

type CameraLocks = Mutex<HashMap<CameraId, Arc<tokio::sync::Mutex<()>>>>;

/// Controller for the camera control page.
pub struct Controller<A> {
    api: A,
    state: Mutex<PanelState>,
    locks: CameraLocks,
}

impl<A: CameraApi> Controller<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self { api, state: Mutex::new(PanelState::default()), locks: Mutex::new(HashMap::new()) }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn snapshot(&self) -> PanelSnapshot {
        let state = self.lock_state();
        PanelSnapshot {
            list: state.list.clone(),
            cards: state.cards.values().cloned().collect(),
            connected: state.connected.clone(),
            pending: state.pending.keys().copied().collect(),
        }
    }

    #[must_use]
    pub fn is_connected(&self, camera: CameraId) -> bool {
        self.lock_state().connected.contains(&camera)
    }

    #[must_use]
    pub fn card(&self, camera: CameraId) -> Option<CameraCard> {
        self.lock_state().cards.get(&camera).cloned()
    }

    /// Refresh the available-camera list and the connected-set.
    ///
    /// # Errors
    ///
    /// Returns the API error if the list cannot be fetched; the previous list
    /// and connected-set are kept.
    pub async fn discover(&self) -> Result<CameraList, PanelError> {
        let list = match self.api.list_cameras().await {
            Ok(list) => list,
            Err(e) => {
                warn!(error = %e, "camera discovery failed");
                return Err(e.into());
            }
        };

        let view = render_camera_list(&list);
        {
            let mut state = self.lock_state();
            state.connected = list.connected.iter().copied().collect();
            state.list = view;
        }
        debug!(available = list.available.len(), connected = list.connected.len(), "camera list refreshed");
        Ok(list)
    }

    /// Connect `camera`, build its card, and refresh the list.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::CardExists`] if the camera already has a card,
    /// or the API error if the backend refuses the connect. In both cases no
    /// card is created.
    pub async fn connect(&self, camera: CameraId) -> Result<(), PanelError> {
        let _op = self.begin(camera).await;

        let has_card = self.lock_state().cards.contains_key(&camera);
        if has_card {
            warn!(camera_id = camera, "connect ignored: camera already has a card");
            return Err(PanelError::CardExists(camera));
        }

        if let Err(e) = self.api.connect(camera).await {
            warn!(camera_id = camera, error = %e, "camera connect failed");
            return Err(e.into());
        }
        self.lock_state().connected.insert(camera);

        let card = self.build_card(camera).await;
        self.lock_state().cards.insert(camera, card);
        info!(camera_id = camera, "camera connected");

        self.refresh().await;
        Ok(())
    }

    /// Disconnect `camera`, drop its card, and refresh the list.
    ///
    /// # Errors
    ///
    /// Returns the API error if the backend refuses the disconnect; the card
    /// and connected-set are left untouched.
    pub async fn disconnect(&self, camera: CameraId) -> Result<(), PanelError> {
        let _op = self.begin(camera).await;

        if let Err(e) = self.api.disconnect(camera).await {
            warn!(camera_id = camera, error = %e, "camera disconnect failed");
            return Err(e.into());
        }
        {
            let mut state = self.lock_state();
            state.connected.remove(&camera);
            state.cards.remove(&camera);
        }
        info!(camera_id = camera, "camera disconnected");

        self.refresh().await;
        Ok(())
    }

    /// Push a new value for one setting of a carded camera.
    ///
    /// On success the control's slider and readout show `value`. On failure
    /// nothing is rolled back, so a renderer that already moved the slider
    /// may disagree with the backend until the next change.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InvalidValue`] for non-finite values,
    /// [`PanelError::NoCard`] / [`PanelError::NoControl`] when there is no
    /// such control, or the API error from the update call.
    pub async fn update_setting(&self, camera: CameraId, setting: &str, value: f64) -> Result<(), PanelError> {
        if !value.is_finite() {
            return Err(PanelError::InvalidValue(value.to_string()));
        }

        let _op = self.begin(camera).await;
        self.ensure_control(camera, setting)?;

        let update = SettingUpdate { setting: setting.to_owned(), value };
        if let Err(e) = self.api.update_setting(camera, &update).await {
            warn!(camera_id = camera, setting, error = %e, "setting update failed");
            return Err(e.into());
        }

        let mut state = self.lock_state();
        if let Some(control) = state
            .cards
            .get_mut(&camera)
            .and_then(|card| card.settings.control_mut(setting))
        {
            control.set_value(value);
        }
        debug!(camera_id = camera, setting, value, "setting updated");
        Ok(())
    }

    /// [`Controller::update_setting`] for raw slider text.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InvalidValue`] if `raw` is not a finite number,
    /// otherwise whatever `update_setting` returns.
    pub async fn update_setting_text(&self, camera: CameraId, setting: &str, raw: &str) -> Result<(), PanelError> {
        let Some(value) = settings::parse_value(raw) else {
            return Err(PanelError::InvalidValue(raw.to_owned()));
        };
        self.update_setting(camera, setting, value).await
    }

    /// Discover, then build cards for cameras the backend already reports as
    /// connected but that have no card yet (e.g. after a page reload).
    ///
    /// Returns the ids that received a card.
    ///
    /// # Errors
    ///
    /// Returns the discovery error; no cards are built in that case.
    pub async fn restore(&self) -> Result<Vec<CameraId>, PanelError> {
        let list = self.discover().await?;

        let mut restored = Vec::new();
        for camera in list.connected {
            let _op = self.begin(camera).await;
            let needs_card = {
                let state = self.lock_state();
                state.connected.contains(&camera) && !state.cards.contains_key(&camera)
            };
            if !needs_card {
                continue;
            }
            let card = self.build_card(camera).await;
            self.lock_state().cards.insert(camera, card);
            restored.push(camera);
        }

        if !restored.is_empty() {
            info!(cameras = ?restored, "restored cards for connected cameras");
        }
        Ok(restored)
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Fetch settings and build a card. A failed fetch still yields a card
    /// (with the no-settings placeholder) so the camera can be disconnected.
    async fn build_card(&self, camera: CameraId) -> CameraCard {
        let settings = match self.api.settings(camera).await {
            Ok(settings) => settings,
            Err(e) => {
                warn!(camera_id = camera, error = %e, "settings fetch failed; card has no controls");
                CameraSettings::new()
            }
        };
        CameraCard::new(camera, self.api.stream_url(camera), &settings)
    }

    async fn refresh(&self) {
        if let Err(e) = self.discover().await {
            debug!(error = %e, "list refresh after action failed");
        }
    }

    fn ensure_control(&self, camera: CameraId, setting: &str) -> Result<(), PanelError> {
        let state = self.lock_state();
        let Some(card) = state.cards.get(&camera) else {
            return Err(PanelError::NoCard(camera));
        };
        if card.settings.control(setting).is_none() {
            return Err(PanelError::NoControl { camera, setting: setting.to_owned() });
        }
        Ok(())
    }

    /// Mark `camera` pending and wait for its operation lock.
    async fn begin(&self, camera: CameraId) -> CameraOp<'_> {
        let pending = PendingMark::new(&self.state, camera);
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(camera).or_default())
        };
        let guard = lock.lock_owned().await;
        CameraOp { guard: Some(guard), locks: &self.locks, camera, _pending: pending }
    }

    #[cfg(test)]
    fn tracked_locks(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn lock_state(&self) -> MutexGuard<'_, PanelState> {
        lock(&self.state)
    }
}

fn lock(state: &Mutex<PanelState>) -> MutexGuard<'_, PanelState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Exclusive right to operate on one camera. Dropping the last holder of a
/// camera's lock removes it from the lock table.
struct CameraOp<'a> {
    guard: Option<OwnedMutexGuard<()>>,
    locks: &'a CameraLocks,
    camera: CameraId,
    _pending: PendingMark<'a>,
}

impl Drop for CameraOp<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        // Waiters clone the Arc under this same lock, so a count of one is final.
        if locks.get(&self.camera).is_some_and(|entry| Arc::strong_count(entry) == 1) {
            locks.remove(&self.camera);
        }
    }
}

/// Counts a camera as pending until dropped, including when the owning
/// future is dropped while still waiting for the lock.
struct PendingMark<'a> {
    state: &'a Mutex<PanelState>,
    camera: CameraId,
}

impl<'a> PendingMark<'a> {
    fn new(state: &'a Mutex<PanelState>, camera: CameraId) -> Self {
        *lock(state).pending.entry(camera).or_insert(0) += 1;
        Self { state, camera }
    }
}

impl Drop for PendingMark<'_> {
    fn drop(&mut self) {
        let mut state = lock(self.state);
        if let Some(count) = state.pending.get_mut(&self.camera) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                state.pending.remove(&self.camera);
            }
        }
    }
}
