//! Axis-aligned bounding box prefilter.
//!
//! Why two comparison regimes
//! - `overlaps` is strict (`>` / `<`): boxes sharing only an edge do not
//!   overlap, so edge-touching shapes are not double-counted by batch
//!   prefilters. `contains_point` is inclusive on all four bounds. The
//!   asymmetry is intentional; downstream tests depend on it.

use crate::geom::{approx_zero, cross};
use crate::shapes::{Line, Segment};
use crate::Point;

/// Populated axis-aligned box with `x1 <= x2` and `y1 <= y2`.
///
/// An unpopulated box is not representable; build from at least one point
/// via `from_points` (`None` for an empty set).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    /// Smallest box containing all `points`; `None` when empty.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bb = Self {
            x1: first.x,
            y1: first.y,
            x2: first.x,
            y2: first.y,
        };
        for p in &points[1..] {
            bb.x1 = bb.x1.min(p.x);
            bb.y1 = bb.y1.min(p.y);
            bb.x2 = bb.x2.max(p.x);
            bb.y2 = bb.y2.max(p.y);
        }
        Some(bb)
    }

    /// Strict overlap test; edge-touching boxes report `false`.
    #[inline]
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.x2 > other.x1 && self.x1 < other.x2 && self.y2 > other.y1 && self.y1 < other.y2
    }

    /// Inclusive containment on all four bounds.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x1 && p.x <= self.x2 && p.y >= self.y1 && p.y <= self.y2
    }

    #[inline]
    fn in_x(&self, x: f64) -> bool {
        x >= self.x1 && x <= self.x2
    }

    #[inline]
    fn in_y(&self, y: f64) -> bool {
        y >= self.y1 && y <= self.y2
    }

    /// Does the infinite line pass through the box?
    ///
    /// Evaluates the line at the box's x-bounds and y-bounds and accepts
    /// when any resulting coordinate lands in range. A zero-slope line is
    /// decided solely by its y-intercept.
    pub fn intersects_line(&self, line: &Line) -> bool {
        if let Some(m) = line.slope() {
            if approx_zero(m) {
                return match line.y_intercept() {
                    Some(b) => self.in_y(b),
                    None => false,
                };
            }
        }
        if matches!(line.y_at(self.x1), Some(y) if self.in_y(y)) {
            return true;
        }
        if matches!(line.y_at(self.x2), Some(y) if self.in_y(y)) {
            return true;
        }
        if matches!(line.x_at(self.y1), Some(x) if self.in_x(x)) {
            return true;
        }
        matches!(line.x_at(self.y2), Some(x) if self.in_x(x))
    }

    /// Does the segment cross the box?
    ///
    /// Rejects via box-vs-segment-box overlap first, then rejects when
    /// all four corners lie on the same side of the segment's carrier
    /// line (no crossing possible).
    pub fn intersects_segment(&self, seg: &Segment) -> bool {
        if !self.overlaps(&seg.bounding_box()) {
            return false;
        }
        let corners = [
            Point::new(self.x1, self.y2),
            Point::new(self.x2, self.y2),
            Point::new(self.x2, self.y1),
            Point::new(self.x1, self.y1),
        ];
        let dir = seg.to_vector();
        let sides = corners.map(|c| cross(dir, c - seg.p1));
        !equally_signed(&sides)
    }
}

/// All values on the same side of zero (zero counts as non-negative).
fn equally_signed(values: &[f64]) -> bool {
    let first = values[0] < 0.0;
    values[1..].iter().all(|v| (*v < 0.0) == first)
}
