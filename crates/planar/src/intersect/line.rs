//! Line-line intersection.

use crate::geom::cross;
use crate::shapes::Line;
use crate::{Point, Vec2};

/// Intersection of two lines in parametric form `p + t v`. `None` for
/// parallel directions, coincident lines included.
pub fn parametric(p1: Point, v1: Vec2<f64>, p2: Point, v2: Vec2<f64>) -> Option<Point> {
    let c = cross(v1, v2);
    if c == 0.0 {
        return None;
    }
    let t = cross(p2 - p1, v2) / c;
    Some(p1 + v1 * t)
}

/// Intersection point of two infinite lines.
pub fn line_line(a: &Line, b: &Line) -> Option<Point> {
    parametric(a.point(), a.dir(), b.point(), b.dir())
}
