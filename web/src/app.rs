//! Root component.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::components::camera_card::ConnectedCameras;
use crate::components::camera_list::CameraList;
use crate::components::error_banner::ErrorBanner;
use crate::net::api::BrowserApi;
use crate::state::panel::PanelContext;

/// Seconds between background discovery runs.
pub const DISCOVERY_INTERVAL_SECS: u64 = 5;

/// Provide the page context and start the load-time discovery.
pub fn mount_panel(api: BrowserApi) -> PanelContext {
    let ctx = PanelContext::new(api);
    provide_context(ctx.clone());
    ctx.restore();
    ctx
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = mount_panel(BrowserApi::default());

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        let poll = ctx.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(DISCOVERY_INTERVAL_SECS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                poll.poll();
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let refresh = ctx.clone();
    view! {
        <main class="camera-panel">
            <h1>"Camera Control Panel"</h1>
            <ErrorBanner/>
            <section>
                <div class="section-header">
                    <h2>"Available Cameras"</h2>
                    <button class="refresh-btn" on:click=move |_| refresh.refresh()>"Refresh"</button>
                </div>
                <CameraList/>
            </section>
            <section>
                <h2>"Connected Cameras"</h2>
                <ConnectedCameras/>
            </section>
        </main>
    }
}
