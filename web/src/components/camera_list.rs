//! Available-camera buttons.

#[cfg(test)]
#[path = "camera_list_test.rs"]
mod camera_list_test;

use leptos::prelude::*;
use panel::view::NO_CAMERAS_TEXT;
use panel::{CameraButton, CameraListView};

use crate::state::panel::PanelContext;

/// `#availableCameras`: one button per detected camera.
#[component]
pub fn CameraList() -> impl IntoView {
    let ctx = expect_context::<PanelContext>();
    let snapshot = ctx.snapshot;

    view! {
        <div id="availableCameras" class="camera-list">
            {move || {
                let (list, pending) = snapshot.with(|s| (s.list.clone(), s.pending.clone()));
                match list {
                    CameraListView::Unloaded => view! { <p class="placeholder">"Detecting cameras..."</p> }.into_any(),
                    CameraListView::Empty => view! { <p class="placeholder">{NO_CAMERAS_TEXT}</p> }.into_any(),
                    CameraListView::Buttons(buttons) => buttons
                        .into_iter()
                        .map(|button| {
                            let busy = pending.contains(&button.id);
                            camera_button(ctx.clone(), button, busy)
                        })
                        .collect_view()
                        .into_any(),
                }
            }}
        </div>
    }
}

fn camera_button(ctx: PanelContext, button: CameraButton, busy: bool) -> impl IntoView {
    let id = button.id;
    let disabled = button_disabled(&button, busy);
    view! {
        <button
            class="camera-button"
            disabled=disabled
            on:click=move |_| ctx.connect(id)
        >
            {button.label}
        </button>
    }
}

/// Connected cameras and cameras with an action in flight are not clickable.
fn button_disabled(button: &CameraButton, busy: bool) -> bool {
    button.disabled || busy
}
