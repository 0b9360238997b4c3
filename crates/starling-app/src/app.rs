//! The demo application shell.

use starling_core::RatingWidget;
use starling_widgets::{RatingBar, SettingsPanel};

/// The host application: a rating widget, its settings form, and the
/// wiring between them.
pub struct StarlingApp {
    widget: RatingWidget,
    settings: SettingsPanel,
}

impl StarlingApp {
    pub fn new() -> Self {
        let mut widget = RatingWidget::new();
        widget.on_change(|value| log::info!("rating changed: {value}"));

        Self {
            widget,
            settings: SettingsPanel::new(),
        }
    }
}

impl Default for StarlingApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for StarlingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("settings")
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(applied) = self.settings.show(ui) {
                    self.widget.update_properties(
                        &applied.star_count,
                        &applied.default_value,
                        &applied.color,
                        &applied.size,
                    );
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.heading("Rate your experience");
                ui.add_space(24.0);
                RatingBar::new(&mut self.widget).show(ui);
            });
        });
    }
}
