//! Connected-camera cards: live stream, disconnect button, settings grid.

use leptos::prelude::*;
use panel::settings::NO_SETTINGS_TEXT;
use panel::{CameraId, SettingsPanel};

use crate::components::setting_slider::SettingSlider;
use crate::state::panel::PanelContext;

/// `#connectedCameras`: one card per connected camera, keyed by id so a
/// card's stream survives unrelated updates.
#[component]
pub fn ConnectedCameras() -> impl IntoView {
    let snapshot = expect_context::<PanelContext>().snapshot;
    view! {
        <div id="connectedCameras" class="camera-grid">
            <For
                each=move || snapshot.with(|s| s.cards.iter().map(|card| card.id).collect::<Vec<_>>())
                key=|id| *id
                children=move |id| view! { <CameraCardView id=id/> }
            />
        </div>
    }
}

#[component]
pub fn CameraCardView(id: CameraId) -> impl IntoView {
    let ctx = expect_context::<PanelContext>();
    let snapshot = ctx.snapshot;
    let Some(card) = snapshot.with_untracked(|s| s.card(id).cloned()) else {
        return ().into_any();
    };
    let pending = move || snapshot.with(|s| s.is_pending(id));

    let settings = match card.settings.clone() {
        SettingsPanel::Placeholder => view! { <p class="placeholder">{NO_SETTINGS_TEXT}</p> }.into_any(),
        SettingsPanel::Controls(controls) => controls
            .into_iter()
            .map(|control| view! { <SettingSlider control=control/> })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="camera-card" class:pending=pending id=card.element_id()>
            <div class="camera-header">
                <h3>{card.title.clone()}</h3>
                <button class="disconnect-btn" disabled=pending on:click=move |_| ctx.disconnect(id)>
                    "Disconnect"
                </button>
            </div>
            <div class="video-container">
                <img src=card.stream_url.clone() alt=card.stream_alt()/>
            </div>
            <div class="settings-grid" id=card.settings_element_id()>
                {settings}
            </div>
        </div>
    }
    .into_any()
}
