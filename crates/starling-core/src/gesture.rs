//! Tap-versus-drag disambiguation for touch input.
//!
//! A gesture runs from touch-start to touch-end. Horizontal movement past
//! [`DRAG_THRESHOLD`] marks it as a drag for the rest of the gesture; a
//! gesture that never became a drag and ended within [`TAP_MAX_MS`] is a
//! tap. Timestamps are supplied by the caller so the timing rule is
//! directly testable.

use std::time::Instant;

/// Horizontal displacement (in logical units) past which a gesture is a drag.
pub const DRAG_THRESHOLD: f64 = 5.0;

/// Maximum duration of a tap, in milliseconds.
pub const TAP_MAX_MS: u64 = 300;

/// Classification of a touch-move step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchMove {
    /// Not (yet) a drag; the move carries no rating update.
    Pending,
    /// The gesture is a drag; the caller should recompute the value under
    /// the current touch position.
    Drag,
}

/// Classification of a touch-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEnd {
    /// Short, stationary gesture: commit the value under the release point.
    Tap,
    /// Drag or long press: nothing to commit at release.
    Ignored,
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    start_x: f64,
    start_time: Instant,
    dragging: bool,
}

/// Tracks the transient state of the current touch gesture.
///
/// State never leaks across gestures: starting a gesture resets it and
/// ending one clears it, regardless of outcome.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    gesture: Option<Gesture>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the in-progress gesture has been classified as a drag.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some_and(|g| g.dragging)
    }

    /// Begin a gesture at horizontal position `x`.
    pub fn touch_start(&mut self, x: f64, at: Instant) {
        self.gesture = Some(Gesture {
            start_x: x,
            start_time: at,
            dragging: false,
        });
    }

    /// Record a move to horizontal position `x`.
    pub fn touch_move(&mut self, x: f64) -> TouchMove {
        match &mut self.gesture {
            Some(g) if g.dragging || (x - g.start_x).abs() > DRAG_THRESHOLD => {
                g.dragging = true;
                TouchMove::Drag
            }
            // Moves without a preceding start (gesture began outside the
            // row) carry no state to classify against.
            _ => TouchMove::Pending,
        }
    }

    /// End the gesture, clearing all state.
    pub fn touch_end(&mut self, at: Instant) -> TouchEnd {
        match self.gesture.take() {
            Some(g)
                if !g.dragging
                    && at.duration_since(g.start_time).as_millis() < u128::from(TAP_MAX_MS) =>
            {
                TouchEnd::Tap
            }
            _ => TouchEnd::Ignored,
        }
    }

    /// Abandon the gesture without classifying it (e.g. touch-cancel).
    pub fn reset(&mut self) {
        self.gesture = None;
    }
}
