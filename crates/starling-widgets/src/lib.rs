//! egui components for the Starling rating widget.
//!
//! - **Rating bar**: paints the star row from the core model and feeds
//!   pointer/touch input back into it.
//! - **Settings panel**: the host-side form (star count, default value,
//!   color, size) with an Apply action.

pub mod rating;
pub mod settings;

pub use rating::RatingBar;
pub use settings::{AppliedSettings, SettingsPanel};

/// Standard sizing constants used across the widgets.
pub mod sizing {
    /// Height reserved under the star row for the text label.
    pub const LABEL_HEIGHT: f32 = 28.0;
    /// Label font size.
    pub const LABEL_FONT: f32 = 20.0;
    /// Scale applied to the glyph under the pointer.
    pub const HOVER_SCALE: f32 = 1.2;
}

/// Standard colors used across the widgets.
pub mod theme {
    use egui::Color32;
    use starling_core::Rgba8;

    /// Inactive glyph color (`#cccccc`).
    pub const INACTIVE: Color32 = Color32::from_rgb(204, 204, 204);
    /// Label text color. Dark gray rather than the white a dark-page
    /// styling would use; the demo shell runs egui's light theme.
    pub const LABEL_TEXT: Color32 = Color32::from_rgb(60, 60, 60);

    /// Convert a core color to an egui color.
    pub fn color32(color: Rgba8) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}
