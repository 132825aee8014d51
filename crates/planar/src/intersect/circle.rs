//! Circle intersection solvers.
//!
//! Bounded solvers take a `skip_prefilter` flag so batch callers that
//! already ran the box test do not pay for it twice. A discriminant of
//! zero is a valid tangency; roots within `EPS` of each other collapse
//! to a single contact point.

use crate::geom::{approx_eq, approx_zero, perp, unit_or_zero, Quadratic};
use crate::intersect::Hit;
use crate::shapes::{Circle, Line, Segment};
use crate::Point;

/// Do the discs overlap? Touching circles report `false`.
pub fn fast_circle_circle(a: &Circle, b: &Circle) -> bool {
    (b.center - a.center).norm() < a.radius + b.radius
}

/// Distance from the center to the closest point of the segment,
/// compared against the radius.
pub fn fast_circle_segment(circle: &Circle, segment: &Segment) -> bool {
    let v = segment.to_vector();
    let u = circle.center - segment.p1;
    let t = (u.dot(&v) / v.dot(&v)).clamp(0.0, 1.0);
    (u - v * t).norm() < circle.radius
}

/// Perpendicular distance from the center to the line, compared
/// against the radius.
pub fn fast_circle_line(circle: &Circle, l: &Line) -> bool {
    let u = circle.center - l.point();
    (u - l.dir() * u.dot(&l.dir())).norm() < circle.radius
}

pub fn fast_circle_segment_set(circle: &Circle, set: &[Segment]) -> bool {
    set.iter().any(|s| fast_circle_segment(circle, s))
}

/// Chord cut from an infinite line, or the tangent point.
///
/// The fast prefilter compares distance strictly, so a grazing line is
/// rejected by it; tangency queries must set `skip_prefilter`.
pub fn circle_line(circle: &Circle, l: &Line, skip_prefilter: bool) -> Hit {
    if !skip_prefilter && !fast_circle_line(circle, l) {
        return Hit::None;
    }
    let r = circle.radius;
    let cx = circle.center.x;
    let cy = circle.center.y;

    let (lm, lb) = match (l.slope(), l.y_intercept()) {
        (Some(m), Some(b)) => (m, b),
        // Vertical line: substitute x and solve the quadratic in y.
        _ => {
            let x = l.point().x;
            let dx = x - cx;
            let quad = Quadratic::new(1.0, -2.0 * cy, cy * cy + dx * dx - r * r);
            return match quad.roots() {
                Some((y1, y2)) if approx_zero(y1 - y2) => Hit::Point(Point::new(x, y1)),
                Some((y1, y2)) => Hit::Segment(Segment::new_unchecked(
                    Point::new(x, y1),
                    Point::new(x, y2),
                )),
                None => Hit::None,
            };
        }
    };

    let a = lm * lm + 1.0;
    let b = 2.0 * (lm * lb - lm * cy - cx);
    let c = cy * cy - r * r + cx * cx - 2.0 * lb * cy + lb * lb;

    match Quadratic::new(a, b, c).roots() {
        Some((x1, x2)) if approx_zero(x1 - x2) => Hit::Point(Point::new(x1, lm * x1 + lb)),
        Some((x1, x2)) => Hit::Segment(Segment::new_unchecked(
            Point::new(x1, lm * x1 + lb),
            Point::new(x2, lm * x2 + lb),
        )),
        None => Hit::None,
    }
}

/// Part of the segment inside the circle, classified by the parametric
/// roots: miss, fully inside, clipped at one end, tangent point, or an
/// interior sub-chord.
pub fn circle_segment(circle: &Circle, segment: &Segment, skip_prefilter: bool) -> Hit {
    if !skip_prefilter
        && !circle
            .bounding_box()
            .overlaps(&segment.bounding_box())
    {
        return Hit::None;
    }
    let s = segment.oriented_ltr();
    let v = s.to_vector();
    let u = s.p1 - circle.center;

    let a = v.dot(&v);
    let b = 2.0 * u.dot(&v);
    let c = u.dot(&u) - circle.radius * circle.radius;

    let (t1, t2) = match Quadratic::new(a, b, c).roots() {
        Some(roots) => roots,
        None => return Hit::None,
    };

    if (t1 > 1.0 && t2 > 1.0) || (t1 < 0.0 && t2 < 0.0) {
        return Hit::None;
    }
    // Fully inside the circle.
    if t1 < 0.0 && t2 > 1.0 {
        return Hit::Segment(s);
    }
    // Only the start is inside.
    if t2 > 1.0 {
        return Hit::Segment(Segment::new_unchecked(s.p1 + v * t1, s.p2));
    }
    // Only the end is inside.
    if t1 < 0.0 {
        return Hit::Segment(Segment::new_unchecked(s.p1, s.p1 + v * t2));
    }
    if approx_zero(t2 - t1) {
        return Hit::Point(s.p1 + v * t1);
    }
    Hit::Segment(Segment::new_unchecked(s.p1 + v * t1, s.p1 + v * t2))
}

/// Exact circle-circle intersection: the two boundary crossing points
/// as a segment (the radical chord), or the tangent point.
pub fn circle_circle(a: &Circle, b: &Circle) -> Hit {
    let dv = b.center - a.center;
    let d = dv.norm();
    if d == 0.0 {
        // Concentric circles never cross.
        return Hit::None;
    }
    if d > a.radius + b.radius || d < (a.radius - b.radius).abs() {
        return Hit::None;
    }
    let along = (a.radius * a.radius - b.radius * b.radius + d * d) / (2.0 * d);
    let h2 = a.radius * a.radius - along * along;
    let h = h2.max(0.0).sqrt();
    let dir = unit_or_zero(dv);
    let mid = a.center + dir * along;
    if approx_zero(h) || approx_eq(d, a.radius + b.radius) {
        return Hit::Point(mid);
    }
    let off = perp(dir) * h;
    Hit::Segment(Segment::new_unchecked(mid + off, mid - off))
}
