//! Starling Core Library
//!
//! Display-free model and interaction logic for the Starling star-rating
//! widget. Everything here is a pure function of widget state and input
//! positions, so the full interaction contract is testable without any UI
//! environment; the `starling-widgets` crate applies it to a display.

pub mod color;
pub mod gesture;
pub mod layout;
pub mod style;
pub mod value;
pub mod widget;

pub use color::Rgba8;
pub use gesture::{DRAG_THRESHOLD, TAP_MAX_MS, TouchEnd, TouchMove, TouchTracker};
pub use layout::{RowLayout, StarHit};
pub use style::{StarSize, StarStyle, StyleError};
pub use value::{HalfSide, Rating, StarFill, star_fills};
pub use widget::{RatingConfig, RatingWidget, RowVisual};
