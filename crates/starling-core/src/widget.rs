//! The rating widget: owned state, interaction entry points, observers.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

use crate::color::Rgba8;
use crate::gesture::{TouchEnd, TouchMove, TouchTracker};
use crate::layout::RowLayout;
use crate::style::{StarSize, StarStyle};
use crate::value::{self, Rating, StarFill, star_fills};

/// Default rating when no attribute is supplied or it fails to parse.
pub const DEFAULT_VALUE: f64 = 3.5;

/// Default star count when no attribute is supplied or it fails to parse.
pub const DEFAULT_MAX: u32 = 5;

/// Observer invoked with the new value on every commit.
pub type ChangeObserver = Box<dyn FnMut(Rating)>;

/// The desired visual state of the row: one fill class per glyph plus the
/// text label. Pure function of widget state; the presentation layer only
/// applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowVisual {
    pub fills: Vec<StarFill>,
    pub label: String,
}

/// Serializable snapshot of the persistent widget state (transient
/// interaction state is not part of it).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    pub value: Rating,
    pub max_value: u32,
    pub style: StarStyle,
}

/// A half-star rating widget.
///
/// Owns the committed value, star count, and style; interprets pointer and
/// touch positions (against a caller-supplied [`RowLayout`]) into previews
/// and commits. A preview only changes what [`visual`](Self::visual)
/// reports; the committed value changes only on an explicit commit, and
/// every commit notifies the registered observers.
pub struct RatingWidget {
    value: Rating,
    max_value: u32,
    style: StarStyle,
    /// Candidate value under the pointer; visual-only.
    preview: Option<Rating>,
    touch: TouchTracker,
    observers: Vec<ChangeObserver>,
}

impl Default for RatingWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RatingWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingWidget")
            .field("value", &self.value)
            .field("max_value", &self.max_value)
            .field("style", &self.style)
            .field("preview", &self.preview)
            .field("touch", &self.touch)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl RatingWidget {
    /// Create a widget with the default value, star count, and style.
    pub fn new() -> Self {
        Self {
            value: Rating::new(DEFAULT_VALUE),
            max_value: DEFAULT_MAX,
            style: StarStyle::default(),
            preview: None,
            touch: TouchTracker::new(),
            observers: Vec::new(),
        }
    }

    /// Declarative construction from host-supplied attributes.
    ///
    /// Absent or unparseable attributes fall back to the defaults; this
    /// path never errors.
    pub fn from_attributes(value: Option<&str>, max: Option<&str>) -> Self {
        let mut widget = Self::new();
        widget.value = Rating::new(parse_or(value, DEFAULT_VALUE));
        widget.max_value = parse_or(max, DEFAULT_MAX).max(1);
        widget
    }

    /// Restore a widget from a serialized snapshot.
    pub fn from_config(config: RatingConfig) -> Self {
        let mut widget = Self::new();
        widget.value = config.value;
        widget.max_value = config.max_value.max(1);
        widget.style = config.style;
        widget
    }

    /// Snapshot the persistent state.
    pub fn config(&self) -> RatingConfig {
        RatingConfig {
            value: self.value,
            max_value: self.max_value,
            style: self.style,
        }
    }

    /// The committed rating.
    pub fn value(&self) -> Rating {
        self.value
    }

    /// The number of stars in the row.
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    pub fn style(&self) -> StarStyle {
        self.style
    }

    /// The candidate value currently previewed, if any.
    pub fn preview(&self) -> Option<Rating> {
        self.preview
    }

    /// Register an observer fired on every commit (click, tap, drag step,
    /// programmatic set, and configuration update).
    pub fn on_change(&mut self, observer: impl FnMut(Rating) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Commit a value programmatically.
    pub fn set_value(&mut self, value: Rating) {
        self.commit(value);
    }

    /// Compute the desired visual state.
    ///
    /// Fills come from the preview when one is active, otherwise from the
    /// committed value. The label always reflects the committed value; a
    /// preview never touches it.
    pub fn visual(&self) -> RowVisual {
        let shown = self.preview.unwrap_or(self.value);
        RowVisual {
            fills: star_fills(shown, self.max_value),
            label: value::label(self.value, self.max_value),
        }
    }

    /// Pointer moved over the control: preview the candidate value under
    /// it without committing. A position outside every glyph clears the
    /// preview.
    pub fn pointer_moved(&mut self, point: Point, layout: &RowLayout) {
        self.preview = layout
            .hit(point)
            .map(|hit| Rating::from_star(hit.index, hit.side));
    }

    /// Pointer left the control: cancel the preview, restoring the
    /// committed value.
    pub fn pointer_left(&mut self) {
        self.preview = None;
    }

    /// Click: commit the candidate under the pointer.
    pub fn pointer_clicked(&mut self, point: Point, layout: &RowLayout) {
        if let Some(hit) = layout.hit(point) {
            self.commit(Rating::from_star(hit.index, hit.side));
        }
    }

    /// Touch-start: begin gesture tracking, but only when the touch lands
    /// on the row. A gesture starting outside it is ignored for all its
    /// phases, so later moves or a y-blind release can never commit.
    pub fn touch_started(&mut self, point: Point, at: Instant, layout: &RowLayout) {
        if layout.bounds().contains(point) {
            self.touch.touch_start(point.x, at);
        } else {
            self.touch.reset();
        }
    }

    /// Touch-move: once the gesture is a drag, continuously commit the
    /// value under the touch x-position.
    pub fn touch_moved(&mut self, point: Point, layout: &RowLayout) {
        if self.touch.touch_move(point.x) == TouchMove::Drag {
            if let Some(hit) = layout.hit_x(point.x) {
                self.commit(Rating::from_star(hit.index, hit.side));
            }
        }
    }

    /// Touch-end: a tap commits the value under the release point; drags
    /// and long presses commit nothing here. Gesture state and preview are
    /// cleared regardless of outcome.
    pub fn touch_ended(&mut self, point: Point, at: Instant, layout: &RowLayout) {
        if self.touch.touch_end(at) == TouchEnd::Tap {
            if let Some(hit) = layout.hit_x(point.x) {
                self.commit(Rating::from_star(hit.index, hit.side));
            }
        }
        self.preview = None;
    }

    /// Touch-cancel: abandon the gesture without committing.
    pub fn touch_cancelled(&mut self) {
        self.touch.reset();
        self.preview = None;
    }

    /// Replace star count, value, and style from raw host strings.
    ///
    /// Numerics parse with the same silent fallback as construction; the
    /// star count is clamped below at 1. The value is deliberately NOT
    /// clamped against the new star count: the host pre-validates (the
    /// settings panel does), and an oversized value is clamped only
    /// visually by the star loop bound.
    pub fn update_properties(
        &mut self,
        star_count: &str,
        default_value: &str,
        color: &str,
        size: &str,
    ) {
        self.max_value = parse_or(Some(star_count), DEFAULT_MAX).max(1);
        self.style.color = Rgba8::parse_or(color, Rgba8::ACTIVE);
        self.style.size = StarSize::parse_or_default(size);
        log::debug!(
            "properties updated: max={} color={} size={}",
            self.max_value,
            self.style.color.to_hex(),
            self.style.size
        );
        self.commit(Rating::new(parse_or(Some(default_value), DEFAULT_VALUE)));
    }

    fn commit(&mut self, value: Rating) {
        self.value = value;
        self.preview = None;
        log::debug!("rating committed: {}/{}", self.value, self.max_value);
        for observer in &mut self.observers {
            observer(value);
        }
    }
}

fn parse_or<T: std::str::FromStr>(s: Option<&str>, default: T) -> T {
    s.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn layout(count: u32) -> RowLayout {
        RowLayout::new(Point::ZERO, Size::new(40.0, 40.0), count)
    }

    /// Center of the left or right half of star `index` (1-based).
    fn half_center(index: u32, side: crate::HalfSide) -> Point {
        let x0 = f64::from(index - 1) * 40.0;
        match side {
            crate::HalfSide::Left => Point::new(x0 + 10.0, 20.0),
            crate::HalfSide::Right => Point::new(x0 + 30.0, 20.0),
        }
    }

    #[test]
    fn test_defaults() {
        let widget = RatingWidget::new();
        assert_eq!(widget.value().get(), 3.5);
        assert_eq!(widget.max_value(), 5);

        let visual = widget.visual();
        assert_eq!(
            visual.fills,
            vec![
                StarFill::Full,
                StarFill::Full,
                StarFill::Full,
                StarFill::Half,
                StarFill::Empty,
            ]
        );
        assert_eq!(visual.label, "Rating: 3.5/5");
    }

    #[test]
    fn test_from_attributes() {
        let widget = RatingWidget::from_attributes(Some("4.5"), Some("10"));
        assert_eq!(widget.value().get(), 4.5);
        assert_eq!(widget.max_value(), 10);
    }

    #[test]
    fn test_malformed_attributes_fall_back() {
        let widget = RatingWidget::from_attributes(Some("lots"), Some("-3"));
        assert_eq!(widget.value().get(), 3.5);
        assert_eq!(widget.max_value(), 5);

        let widget = RatingWidget::from_attributes(None, None);
        assert_eq!(widget.value().get(), 3.5);
        assert_eq!(widget.max_value(), 5);
    }

    #[test]
    fn test_click_commits_half_and_full() {
        let layout = layout(5);
        let mut widget = RatingWidget::new();

        widget.pointer_clicked(half_center(4, crate::HalfSide::Left), &layout);
        assert_eq!(widget.value().get(), 3.5);

        widget.pointer_clicked(half_center(4, crate::HalfSide::Right), &layout);
        assert_eq!(widget.value().get(), 4.0);
    }

    #[test]
    fn test_hover_previews_without_committing() {
        let layout = layout(5);
        let mut widget = RatingWidget::new();

        widget.pointer_moved(half_center(2, crate::HalfSide::Left), &layout);
        assert_eq!(widget.preview().map(Rating::get), Some(1.5));
        assert_eq!(widget.value().get(), 3.5);

        // Preview drives the fills, but the label stays committed.
        let visual = widget.visual();
        assert_eq!(
            visual.fills,
            vec![
                StarFill::Full,
                StarFill::Half,
                StarFill::Empty,
                StarFill::Empty,
                StarFill::Empty,
            ]
        );
        assert_eq!(visual.label, "Rating: 3.5/5");

        widget.pointer_left();
        assert_eq!(widget.preview(), None);
        assert_eq!(widget.visual().fills[3], StarFill::Half);
    }

    #[test]
    fn test_tap_commits_under_release_point() {
        let layout = layout(5);
        let mut widget = RatingWidget::new();
        let t0 = Instant::now();

        let pos = half_center(2, crate::HalfSide::Right);
        widget.touch_started(pos, t0, &layout);
        widget.touch_ended(pos, t0 + Duration::from_millis(100), &layout);
        assert_eq!(widget.value().get(), 2.0);
    }

    #[test]
    fn test_touch_outside_row_never_commits() {
        let layout = layout(5);
        let mut widget = RatingWidget::new();
        let t0 = Instant::now();

        // Tap far below the row but x-aligned with star 1: no gesture
        // begins, so the y-blind release path has nothing to commit.
        let below = Point::new(10.0, 540.0);
        widget.touch_started(below, t0, &layout);
        widget.touch_ended(below, t0 + Duration::from_millis(100), &layout);
        assert_eq!(widget.value().get(), 3.5);

        // Same for a drag: moves after an outside start carry no state.
        widget.touch_started(below, t0, &layout);
        widget.touch_moved(Point::new(150.0, 540.0), &layout);
        widget.touch_ended(
            Point::new(150.0, 540.0),
            t0 + Duration::from_millis(100),
            &layout,
        );
        assert_eq!(widget.value().get(), 3.5);
    }

    #[test]
    fn test_outside_start_discards_stale_gesture() {
        let layout = layout(5);
        let mut widget = RatingWidget::new();
        let t0 = Instant::now();

        widget.touch_started(half_center(1, crate::HalfSide::Left), t0, &layout);
        // A new gesture starting off the row replaces the tracked one, so
        // its release commits nothing.
        widget.touch_started(Point::new(10.0, 540.0), t0, &layout);
        widget.touch_ended(
            Point::new(10.0, 540.0),
            t0 + Duration::from_millis(100),
            &layout,
        );
        assert_eq!(widget.value().get(), 3.5);
    }

    #[test]
    fn test_drag_commits_continuously_and_skips_tap() {
        let layout = layout(5);
        let mut widget = RatingWidget::new();
        let t0 = Instant::now();

        widget.touch_started(Point::new(10.0, 20.0), t0, &layout);
        widget.touch_moved(Point::new(70.0, 20.0), &layout);
        assert_eq!(widget.value().get(), 2.0);
        widget.touch_moved(Point::new(150.0, 20.0), &layout);
        assert_eq!(widget.value().get(), 4.0);

        // Release over star 1 within the tap window: the drag already
        // classified the gesture, so nothing commits at release.
        widget.touch_ended(
            Point::new(10.0, 20.0),
            t0 + Duration::from_millis(100),
            &layout,
        );
        assert_eq!(widget.value().get(), 4.0);
    }

    #[test]
    fn test_long_press_commits_nothing() {
        let layout = layout(5);
        let mut widget = RatingWidget::new();
        let t0 = Instant::now();

        let pos = half_center(1, crate::HalfSide::Left);
        widget.touch_started(pos, t0, &layout);
        widget.touch_ended(pos, t0 + Duration::from_millis(400), &layout);
        assert_eq!(widget.value().get(), 3.5);
    }

    #[test]
    fn test_update_properties_does_not_clamp_value() {
        let mut widget = RatingWidget::new();
        widget.update_properties("3", "5", "#000000", "10px");

        assert_eq!(widget.max_value(), 3);
        assert_eq!(widget.value().get(), 5.0);
        // Visually clamped by the loop bound only.
        assert_eq!(widget.visual().fills, vec![StarFill::Full; 3]);
        assert_eq!(widget.style().color, Rgba8::opaque(0, 0, 0));
        assert_eq!(widget.style().size.px(), 10.0);
    }

    #[test]
    fn test_update_properties_grows_row() {
        let mut widget = RatingWidget::new();
        widget.update_properties("10", "4.5", "#ff0000", "20px");

        let visual = widget.visual();
        assert_eq!(visual.fills.len(), 10);
        assert_eq!(
            visual.fills.iter().filter(|f| **f == StarFill::Full).count(),
            4
        );
        assert_eq!(visual.fills[4], StarFill::Half);
        assert_eq!(
            visual.fills.iter().filter(|f| **f == StarFill::Empty).count(),
            5
        );
        assert_eq!(widget.style().color, Rgba8::opaque(255, 0, 0));
        assert_eq!(widget.style().size.px(), 20.0);
        assert_eq!(visual.label, "Rating: 4.5/10");
    }

    #[test]
    fn test_update_properties_malformed_falls_back() {
        let mut widget = RatingWidget::new();
        widget.update_properties("many", "some", "gold", "large");

        assert_eq!(widget.max_value(), 5);
        assert_eq!(widget.value().get(), 3.5);
        assert_eq!(widget.style().color, Rgba8::ACTIVE);
        assert_eq!(widget.style().size, StarSize::DEFAULT);
    }

    #[test]
    fn test_observers_fire_on_commit_only() {
        let layout = layout(5);
        let mut widget = RatingWidget::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        widget.on_change(move |value| sink.borrow_mut().push(value.get()));

        widget.pointer_moved(half_center(1, crate::HalfSide::Left), &layout);
        assert!(seen.borrow().is_empty());

        widget.pointer_clicked(half_center(2, crate::HalfSide::Right), &layout);
        widget.update_properties("5", "1", "#ffd700", "36px");
        assert_eq!(*seen.borrow(), vec![2.0, 1.0]);
    }

    #[test]
    fn test_config_round_trip() {
        let mut widget = RatingWidget::new();
        widget.update_properties("7", "2.5", "#336699", "24px");

        let json = serde_json::to_string(&widget.config()).unwrap();
        let restored = RatingWidget::from_config(serde_json::from_str(&json).unwrap());
        assert_eq!(restored.value().get(), 2.5);
        assert_eq!(restored.max_value(), 7);
        assert_eq!(restored.style(), widget.style());
    }
}
