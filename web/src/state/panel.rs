//! Reactive wrapper around the panel controller.
//!
//! DESIGN
//! ======
//! The controller owns all camera state; components never mutate it
//! directly. Each user action spawns one controller operation and then
//! copies the controller's snapshot into `snapshot`, which is the only
//! signal components read. The last failure is kept in `error` until the
//! next user action succeeds; background discovery can report a failure but
//! never clears one.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::sync::Arc;

use leptos::prelude::*;
use panel::{CameraId, Controller, PanelError, PanelSnapshot};

use crate::net::api::BrowserApi;

/// Who started an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    User,
    Background,
}

/// Error text to show after an operation finishes.
#[must_use]
pub fn settle_error(previous: Option<String>, result: &Result<(), PanelError>, origin: Origin) -> Option<String> {
    match (result, origin) {
        (Err(err), _) => Some(error_text(err)),
        (Ok(()), Origin::User) => None,
        (Ok(()), Origin::Background) => previous,
    }
}

/// Shared page context, provided at the root of the app.
#[derive(Clone)]
pub struct PanelContext {
    controller: Arc<Controller<BrowserApi>>,
    pub snapshot: RwSignal<PanelSnapshot>,
    pub error: RwSignal<Option<String>>,
}

impl PanelContext {
    #[must_use]
    pub fn new(api: BrowserApi) -> Self {
        let controller = Arc::new(Controller::new(api));
        let snapshot = RwSignal::new(controller.snapshot());
        Self { controller, snapshot, error: RwSignal::new(None) }
    }

    /// Copy the controller state into the snapshot signal.
    pub fn sync(&self) {
        self.snapshot.set(self.controller.snapshot());
    }

    pub fn refresh(&self) {
        self.run(Origin::User, |c| async move { c.discover().await.map(drop) });
    }

    /// Timer-driven discovery.
    pub fn poll(&self) {
        self.run(Origin::Background, |c| async move { c.discover().await.map(drop) });
    }

    /// Discover, then rebuild cards for cameras already connected on the
    /// backend (page reload).
    pub fn restore(&self) {
        self.run(Origin::User, |c| async move { c.restore().await.map(drop) });
    }

    pub fn connect(&self, camera: CameraId) {
        self.run(Origin::User, move |c| async move { c.connect(camera).await });
    }

    pub fn disconnect(&self, camera: CameraId) {
        self.run(Origin::User, move |c| async move { c.disconnect(camera).await });
    }

    /// Push a slider's raw value.
    pub fn update_setting(&self, camera: CameraId, setting: String, raw: String) {
        self.run(Origin::User, move |c| async move { c.update_setting_text(camera, &setting, &raw).await });
    }

    fn finish(&self, origin: Origin, result: &Result<(), PanelError>) {
        self.sync();
        self.error.update(|error| *error = settle_error(error.take(), result, origin));
    }

    #[cfg(feature = "csr")]
    fn run<F, Fut>(&self, origin: Origin, op: F)
    where
        F: FnOnce(Arc<Controller<BrowserApi>>) -> Fut,
        Fut: Future<Output = Result<(), PanelError>> + 'static,
    {
        let ctx = self.clone();
        let task = op(Arc::clone(&self.controller));
        leptos::task::spawn_local(async move {
            // The first poll of `task` marks its camera pending; sync right
            // after so the UI shows it.
            let (result, ()) = futures::future::join(task, async { ctx.sync() }).await;
            ctx.finish(origin, &result);
        });
    }

    #[cfg(not(feature = "csr"))]
    fn run<F, Fut>(&self, origin: Origin, _op: F)
    where
        F: FnOnce(Arc<Controller<BrowserApi>>) -> Fut,
        Fut: Future<Output = Result<(), PanelError>> + 'static,
    {
        self.finish(origin, &Err(PanelError::Api(panel::ApiError::Unavailable)));
    }
}

/// User-facing text for a failed action.
#[must_use]
pub fn error_text(error: &PanelError) -> String {
    match error {
        PanelError::Api(panel::ApiError::Status { status: 400, .. }) => {
            "The camera server rejected the request.".to_owned()
        }
        PanelError::Api(panel::ApiError::Transport { .. }) => "Camera server unreachable.".to_owned(),
        other => panel::settings::capitalize(&other.to_string()),
    }
}

/// Readout text of one control in the snapshot.
#[must_use]
pub fn control_readout(snapshot: &PanelSnapshot, camera: CameraId, setting: &str) -> Option<String> {
    snapshot
        .card(camera)
        .and_then(|card| card.settings.control(setting))
        .map(|control| control.readout.clone())
}

/// Slider position of one control in the snapshot, as an input value.
#[must_use]
pub fn control_position(snapshot: &PanelSnapshot, camera: CameraId, setting: &str) -> Option<String> {
    snapshot
        .card(camera)
        .and_then(|card| card.settings.control(setting))
        .map(|control| panel::settings::format_value(control.value))
}
