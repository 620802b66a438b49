use super::*;
use crate::net::api::BrowserApi;

fn button(disabled: bool) -> CameraButton {
    CameraButton { id: 1, label: "Camera 1".into(), disabled }
}

#[test]
fn idle_unconnected_button_is_enabled() {
    assert!(!button_disabled(&button(false), false));
}

#[test]
fn connected_or_busy_button_is_disabled() {
    assert!(button_disabled(&button(true), false));
    assert!(button_disabled(&button(false), true));
}

#[test]
fn camera_button_builds_for_busy_and_idle_cameras() {
    leptos::reactive::owner::Owner::new().with(|| {
        let ctx = PanelContext::new(BrowserApi::default());
        drop(camera_button(ctx.clone(), button(false), false));
        drop(camera_button(ctx, button(true), true));
    });
}
