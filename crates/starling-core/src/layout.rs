//! Star row geometry and half-aware hit testing.

use kurbo::{Point, Rect, Size};

use crate::value::HalfSide;

/// A hit on one star glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarHit {
    /// 1-based star index, left to right.
    pub index: u32,
    /// Which half of the glyph box the position landed in.
    pub side: HalfSide,
}

/// The on-screen geometry of a star row: `count` equal glyph boxes laid
/// out left to right from `origin`.
///
/// The presentation layer rebuilds this from the rect it actually
/// allocated each frame; the interaction logic only ever sees positions
/// against these boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    origin: Point,
    glyph: Size,
    count: u32,
}

impl RowLayout {
    pub fn new(origin: Point, glyph: Size, count: u32) -> Self {
        Self {
            origin,
            glyph,
            count,
        }
    }

    /// Number of glyph boxes in the row.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Bounding box of star `index` (1-based).
    pub fn star_rect(&self, index: u32) -> Rect {
        let x0 = self.origin.x + f64::from(index - 1) * self.glyph.width;
        Rect::from_origin_size(Point::new(x0, self.origin.y), self.glyph)
    }

    /// Bounding box of the whole row.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(
            self.origin,
            Size::new(self.glyph.width * f64::from(self.count), self.glyph.height),
        )
    }

    /// Hit-test a position against the row.
    pub fn hit(&self, point: Point) -> Option<StarHit> {
        (1..=self.count).find_map(|index| {
            let rect = self.star_rect(index);
            rect.contains(point).then(|| StarHit {
                index,
                side: side_of(point.x, rect),
            })
        })
    }

    /// X-only hit test, used by touch drags: a drag tracks only the
    /// horizontal touch position against each glyph box.
    pub fn hit_x(&self, x: f64) -> Option<StarHit> {
        (1..=self.count).find_map(|index| {
            let rect = self.star_rect(index);
            (x >= rect.x0 && x <= rect.x1).then(|| StarHit {
                index,
                side: side_of(x, rect),
            })
        })
    }
}

fn side_of(x: f64, rect: Rect) -> HalfSide {
    if x < rect.x0 + rect.width() / 2.0 {
        HalfSide::Left
    } else {
        HalfSide::Right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RowLayout {
        RowLayout::new(Point::new(10.0, 20.0), Size::new(40.0, 40.0), 5)
    }

    #[test]
    fn test_star_rects() {
        let row = row();
        assert_eq!(row.star_rect(1), Rect::new(10.0, 20.0, 50.0, 60.0));
        assert_eq!(row.star_rect(3), Rect::new(90.0, 20.0, 130.0, 60.0));
        assert_eq!(row.bounds(), Rect::new(10.0, 20.0, 210.0, 60.0));
    }

    #[test]
    fn test_hit_left_and_right_halves() {
        let row = row();
        let hit = row.hit(Point::new(95.0, 40.0)).unwrap();
        assert_eq!(hit, StarHit { index: 3, side: HalfSide::Left });

        let hit = row.hit(Point::new(115.0, 40.0)).unwrap();
        assert_eq!(hit, StarHit { index: 3, side: HalfSide::Right });
    }

    #[test]
    fn test_hit_outside_row() {
        let row = row();
        assert_eq!(row.hit(Point::new(5.0, 40.0)), None);
        assert_eq!(row.hit(Point::new(95.0, 100.0)), None);
        assert_eq!(row.hit(Point::new(300.0, 40.0)), None);
    }

    #[test]
    fn test_hit_x_ignores_vertical() {
        let row = row();
        let hit = row.hit_x(55.0).unwrap();
        assert_eq!(hit, StarHit { index: 2, side: HalfSide::Left });
        assert_eq!(row.hit_x(500.0), None);
    }
}
