//! Starling demo application
//!
//! The host shell: owns the rating widget and the settings panel, holds
//! typed references to both, and wires the panel's Apply action to the
//! widget's configuration update.

mod app;

pub use app::StarlingApp;
