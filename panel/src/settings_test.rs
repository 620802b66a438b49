use super::*;

fn settings(pairs: &[(&str, f64)]) -> CameraSettings {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
}

// =============================================================
// render_settings
// =============================================================

#[test]
fn sentinel_settings_are_hidden() {
    let panel = render_settings(7, &settings(&[("brightness", 10.0), ("exposure", -1.0), ("gain", 50.0)]));
    let names: Vec<&str> = panel.controls().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["brightness", "gain"]);
    assert_eq!(panel.control("brightness").map(|c| c.readout.as_str()), Some("10"));
    assert_eq!(panel.control("gain").map(|c| c.readout.as_str()), Some("50"));
    assert!(panel.control("exposure").is_none());
}

#[test]
fn controls_follow_allow_list_order() {
    let panel = render_settings(
        1,
        &settings(&[("gain", 1.0), ("saturation", 2.0), ("brightness", 3.0), ("contrast", 4.0), ("exposure", 5.0)]),
    );
    let names: Vec<&str> = panel.controls().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["brightness", "contrast", "saturation", "exposure", "gain"]);
}

#[test]
fn settings_outside_allow_list_are_ignored() {
    let panel = render_settings(1, &settings(&[("hue", 5.0), ("fps", 30.0), ("width", 640.0)]));
    assert!(panel.is_placeholder());
    assert!(panel.controls().is_empty());
}

#[test]
fn empty_settings_render_placeholder() {
    assert_eq!(render_settings(1, &CameraSettings::new()), SettingsPanel::Placeholder);
}

#[test]
fn all_sentinel_settings_render_placeholder() {
    let panel = render_settings(1, &settings(&[("brightness", -1.0), ("gain", -1.0)]));
    assert!(panel.is_placeholder());
}

#[test]
fn out_of_range_value_clamps_slider_but_keeps_readout() {
    let panel = render_settings(2, &settings(&[("exposure", 156.0), ("gain", -300.0)]));
    let exposure = panel.control("exposure").expect("exposure control");
    assert_eq!(exposure.value, SETTING_MAX);
    assert_eq!(exposure.readout, "156");
    let gain = panel.control("gain").expect("gain control");
    assert_eq!(gain.value, SETTING_MIN);
    assert_eq!(gain.readout, "-300");
}

// =============================================================
// SettingControl
// =============================================================

#[test]
fn control_ids_derive_from_camera_and_setting() {
    let control = SettingControl::new(5, "contrast", 0.0);
    assert_eq!(control.element_id(), "5-contrast");
    assert_eq!(control.readout_id(), "5-contrast-value");
    assert_eq!(control.label, "Contrast");
}

#[test]
fn set_value_updates_slider_and_readout() {
    let mut control = SettingControl::new(5, "brightness", 10.0);
    control.set_value(42.0);
    assert_eq!(control.value, 42.0);
    assert_eq!(control.readout, "42");
}

#[test]
fn control_mut_finds_named_control() {
    let mut panel = render_settings(3, &settings(&[("brightness", 1.0)]));
    panel.control_mut("brightness").expect("control").set_value(-5.5);
    assert_eq!(panel.control("brightness").map(|c| c.readout.as_str()), Some("-5.5"));
    assert!(panel.control_mut("gain").is_none());
}

#[test]
fn placeholder_has_no_mutable_controls() {
    let mut panel = SettingsPanel::Placeholder;
    assert!(panel.control_mut("brightness").is_none());
}

// =============================================================
// helpers
// =============================================================

#[test]
fn capitalize_upper_cases_first_char() {
    assert_eq!(capitalize("brightness"), "Brightness");
    assert_eq!(capitalize("g"), "G");
    assert_eq!(capitalize(""), "");
}

#[test]
fn format_value_drops_integral_fraction() {
    assert_eq!(format_value(42.0), "42");
    assert_eq!(format_value(-7.0), "-7");
    assert_eq!(format_value(0.25), "0.25");
    assert_eq!(format_value(-0.0), "0");
}

#[test]
fn parse_value_accepts_numbers() {
    assert_eq!(parse_value("42"), Some(42.0));
    assert_eq!(parse_value(" -3.5 "), Some(-3.5));
}

#[test]
fn parse_value_rejects_garbage_and_non_finite() {
    assert_eq!(parse_value(""), None);
    assert_eq!(parse_value("abc"), None);
    assert_eq!(parse_value("NaN"), None);
    assert_eq!(parse_value("inf"), None);
}
