//! Setting sliders for a camera card.
//!
//! DESIGN
//! ======
//! Only a fixed allow-list of settings is adjustable from the page. The
//! backend may report more (hue, width, fps, ...) and marks unsupported ones
//! with the `-1` sentinel; both are filtered out here so renderers only ever
//! see controls they can draw.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use wire::{CameraId, CameraSettings};

/// Settings shown as sliders, in display order.
pub const ADJUSTABLE_SETTINGS: [&str; 5] = ["brightness", "contrast", "saturation", "exposure", "gain"];

/// Lower bound of every slider.
pub const SETTING_MIN: f64 = -100.0;

/// Upper bound of every slider.
pub const SETTING_MAX: f64 = 100.0;

/// Text shown in place of sliders when a camera exposes none.
pub const NO_SETTINGS_TEXT: &str = "No adjustable settings available";

/// One labeled range control with its numeric readout.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingControl {
    pub camera: CameraId,
    pub name: String,
    pub label: String,
    /// Slider position, always within `[SETTING_MIN, SETTING_MAX]`.
    pub value: f64,
    /// Readout text next to the slider.
    pub readout: String,
}

impl SettingControl {
    #[must_use]
    pub fn new(camera: CameraId, name: &str, value: f64) -> Self {
        Self {
            camera,
            name: name.to_owned(),
            label: capitalize(name),
            value: clamp_value(value),
            readout: format_value(value),
        }
    }

    /// Reflect a value the backend accepted.
    pub fn set_value(&mut self, value: f64) {
        self.value = clamp_value(value);
        self.readout = format_value(value);
    }

    /// DOM id of the range input, e.g. `5-brightness`.
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("{}-{}", self.camera, self.name)
    }

    /// DOM id of the readout, e.g. `5-brightness-value`.
    #[must_use]
    pub fn readout_id(&self) -> String {
        format!("{}-{}-value", self.camera, self.name)
    }
}

/// Settings area of a card: sliders, or a placeholder when there are none.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingsPanel {
    Controls(Vec<SettingControl>),
    Placeholder,
}

impl SettingsPanel {
    #[must_use]
    pub fn controls(&self) -> &[SettingControl] {
        match self {
            Self::Controls(controls) => controls,
            Self::Placeholder => &[],
        }
    }

    #[must_use]
    pub fn control(&self, name: &str) -> Option<&SettingControl> {
        self.controls().iter().find(|c| c.name == name)
    }

    pub fn control_mut(&mut self, name: &str) -> Option<&mut SettingControl> {
        match self {
            Self::Controls(controls) => controls.iter_mut().find(|c| c.name == name),
            Self::Placeholder => None,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Build the settings area for `camera` from a backend settings map.
#[must_use]
pub fn render_settings(camera: CameraId, settings: &CameraSettings) -> SettingsPanel {
    let controls: Vec<SettingControl> = ADJUSTABLE_SETTINGS
        .iter()
        .filter_map(|name| {
            let value = *settings.get(*name)?;
            if wire::is_unsupported(value) || !value.is_finite() {
                return None;
            }
            Some(SettingControl::new(camera, name, value))
        })
        .collect();

    if controls.is_empty() {
        SettingsPanel::Placeholder
    } else {
        SettingsPanel::Controls(controls)
    }
}

/// Upper-case the first character: `brightness` -> `Brightness`.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Clamp a value into the slider range.
#[must_use]
pub fn clamp_value(value: f64) -> f64 {
    value.clamp(SETTING_MIN, SETTING_MAX)
}

/// Readout text: integral values print without a fraction (`42`, not `42.0`).
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_owned();
    }
    value.to_string()
}

/// Parse slider input text into a finite number.
#[must_use]
pub fn parse_value(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}
