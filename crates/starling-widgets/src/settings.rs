//! Host-side settings form for the rating widget.

use egui::{Color32, DragValue, Ui};
use starling_core::Rgba8;

use crate::theme;

/// Upper bound on the star-count field.
const MAX_STARS: u32 = 20;

/// Raw form values, as handed to `RatingWidget::update_properties`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedSettings {
    pub star_count: String,
    pub default_value: String,
    pub color: String,
    pub size: String,
}

/// The host-side settings collaborator: star-count, default-value, color,
/// and size fields plus an Apply action.
///
/// The widget itself never validates `default_value` against the star
/// count; this panel performs the host-side clamp instead, dropping its
/// own default-value field to the new count whenever the star count
/// shrinks below it.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsPanel {
    star_count: u32,
    default_value: f32,
    color: Color32,
    size_px: u32,
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsPanel {
    /// Create a panel mirroring the widget defaults.
    pub fn new() -> Self {
        Self {
            star_count: 5,
            default_value: 3.5,
            color: theme::color32(Rgba8::ACTIVE),
            size_px: 36,
        }
    }

    /// Show the form. Returns the collected settings when Apply is clicked.
    pub fn show(&mut self, ui: &mut Ui) -> Option<AppliedSettings> {
        ui.heading("Settings");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Number of stars:");
            let changed = ui
                .add(DragValue::new(&mut self.star_count).range(1..=MAX_STARS))
                .changed();
            if changed {
                self.default_value = clamp_default(self.default_value, self.star_count);
            }
        });
        ui.horizontal(|ui| {
            ui.label("Default value:");
            ui.add(
                DragValue::new(&mut self.default_value)
                    .speed(0.5)
                    .range(0.0..=self.star_count as f32),
            );
        });
        ui.horizontal(|ui| {
            ui.label("Star color:");
            ui.color_edit_button_srgba(&mut self.color);
        });
        ui.horizontal(|ui| {
            ui.label("Star size:");
            ui.add(DragValue::new(&mut self.size_px).range(8..=96).suffix("px"));
        });
        ui.add_space(8.0);

        if ui.button("Apply settings").clicked() {
            let applied = self.applied();
            log::debug!("settings applied: {applied:?}");
            Some(applied)
        } else {
            None
        }
    }

    /// The current form contents as the raw strings the widget consumes.
    pub fn applied(&self) -> AppliedSettings {
        AppliedSettings {
            star_count: self.star_count.to_string(),
            default_value: self.default_value.to_string(),
            color: Rgba8::new(self.color.r(), self.color.g(), self.color.b(), self.color.a())
                .to_hex(),
            size: format!("{}px", self.size_px),
        }
    }
}

/// Keep the default value expressible under the star count.
fn clamp_default(default_value: f32, star_count: u32) -> f32 {
    default_value.min(star_count as f32)
}
