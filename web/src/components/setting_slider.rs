//! One range input with its readout.

use leptos::prelude::*;
use panel::SettingControl;
use panel::settings::{SETTING_MAX, SETTING_MIN, format_value};

use crate::state::panel::{PanelContext, control_position, control_readout};

/// Slider for one setting. Position and readout track the controller, so
/// a rejected update snaps the slider back to the last accepted value.
#[component]
pub fn SettingSlider(control: SettingControl) -> impl IntoView {
    let ctx = expect_context::<PanelContext>();
    let snapshot = ctx.snapshot;
    let camera = control.camera;
    let name = control.name.clone();

    let position = {
        let name = name.clone();
        let fallback = format_value(control.value);
        move || snapshot.with(|s| control_position(s, camera, &name)).unwrap_or_else(|| fallback.clone())
    };
    let readout = {
        let name = name.clone();
        let fallback = control.readout.clone();
        move || snapshot.with(|s| control_readout(s, camera, &name)).unwrap_or_else(|| fallback.clone())
    };
    let on_change = move |ev| ctx.update_setting(camera, name.clone(), event_target_value(&ev));

    view! {
        <div class="setting-control">
            <label for=control.element_id()>{control.label.clone()}</label>
            <input
                type="range"
                min=format_value(SETTING_MIN)
                max=format_value(SETTING_MAX)
                id=control.element_id()
                prop:value=position
                on:change=on_change
            />
            <span class="setting-value" id=control.readout_id()>{readout}</span>
        </div>
    }
}
