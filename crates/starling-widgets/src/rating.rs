//! The star rating bar: paints the row and feeds input into the core.

use egui::{
    Align2, CursorIcon, Event, FontId, Pos2, Rect, Response, Sense, TouchPhase, Ui, pos2, vec2,
};
use kurbo::{Point, Size};
use starling_core::{RatingWidget, RowLayout, StarFill};
use std::time::Instant;

use crate::{sizing, theme};

/// Star glyph rendered for every fill class.
const STAR: &str = "★";

/// egui presentation of a [`RatingWidget`].
///
/// Allocates one glyph box per star plus a label line, rebuilds the core
/// [`RowLayout`] from the allocated rect, routes hover/click and raw touch
/// events into the core entry points, and paints from the resulting
/// visual state. All rating logic lives in the core; this type only maps
/// between egui and it.
pub struct RatingBar<'a> {
    widget: &'a mut RatingWidget,
}

impl<'a> RatingBar<'a> {
    pub fn new(widget: &'a mut RatingWidget) -> Self {
        Self { widget }
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let widget = self.widget;
        let glyph = widget.style().size.px() as f32;
        let count = widget.max_value();
        let row_size = vec2(glyph * count as f32, glyph);
        let desired = vec2(row_size.x, row_size.y + sizing::LABEL_HEIGHT);

        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());
        let row_rect = Rect::from_min_size(rect.min, row_size);
        let layout = RowLayout::new(
            Point::new(f64::from(row_rect.min.x), f64::from(row_rect.min.y)),
            Size::new(f64::from(glyph), f64::from(glyph)),
            count,
        );

        // Raw touch events drive the tap/drag path.
        let touches: Vec<(TouchPhase, Pos2)> = ui.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    Event::Touch { phase, pos, .. } => Some((*phase, *pos)),
                    _ => None,
                })
                .collect()
        });
        let touched = !touches.is_empty();
        for (phase, pos) in touches {
            let point = to_point(pos);
            match phase {
                TouchPhase::Start => widget.touch_started(point, Instant::now(), &layout),
                TouchPhase::Move => widget.touch_moved(point, &layout),
                TouchPhase::End => widget.touch_ended(point, Instant::now(), &layout),
                TouchPhase::Cancel => widget.touch_cancelled(),
            }
        }

        // Pointer path: hover previews, leaving cancels, click commits.
        // Skipped on frames with touch events; egui synthesizes pointer
        // events from touches and the touch path already handled those.
        let hover = response.hover_pos();
        if !touched {
            match hover {
                Some(pos) => widget.pointer_moved(to_point(pos), &layout),
                None => widget.pointer_left(),
            }
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    widget.pointer_clicked(to_point(pos), &layout);
                }
            }
        }

        if ui.is_rect_visible(rect) {
            let visual = widget.visual();
            let active = theme::color32(widget.style().color);
            let painter = ui.painter();

            for (i, fill) in visual.fills.iter().enumerate() {
                let star_rect = Rect::from_min_size(
                    pos2(row_rect.min.x + glyph * i as f32, row_rect.min.y),
                    vec2(glyph, glyph),
                );
                let hovered = hover.is_some_and(|pos| star_rect.contains(pos));
                let scale = if hovered { sizing::HOVER_SCALE } else { 1.0 };
                let font = FontId::proportional(glyph * scale);
                let center = star_rect.center();

                match fill {
                    StarFill::Full => {
                        painter.text(center, Align2::CENTER_CENTER, STAR, font, active);
                    }
                    StarFill::Empty => {
                        painter.text(center, Align2::CENTER_CENTER, STAR, font, theme::INACTIVE);
                    }
                    StarFill::Half => {
                        // Active glyph clipped to the left half painted
                        // over an inactive one.
                        painter.text(
                            center,
                            Align2::CENTER_CENTER,
                            STAR,
                            font.clone(),
                            theme::INACTIVE,
                        );
                        let left_half =
                            Rect::from_min_max(star_rect.min, pos2(center.x, star_rect.max.y));
                        painter.with_clip_rect(left_half).text(
                            center,
                            Align2::CENTER_CENTER,
                            STAR,
                            font,
                            active,
                        );
                    }
                }
            }

            painter.text(
                pos2(rect.center().x, rect.max.y - sizing::LABEL_HEIGHT / 2.0),
                Align2::CENTER_CENTER,
                visual.label,
                FontId::proportional(sizing::LABEL_FONT),
                theme::LABEL_TEXT,
            );
        }

        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}

fn to_point(pos: Pos2) -> Point {
    Point::new(f64::from(pos.x), f64::from(pos.y))
}
