//! # web
//!
//! Browser front end for the camera control panel. Build with
//! `trunk serve --features csr` (see `index.html`); without `csr` the crate
//! compiles natively with a stubbed API for tests.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
