//! Segment-segment and segment-line intersection.
//!
//! `segment_segment` distinguishes a transversal crossing (one point)
//! from collinear overlap (a sub-segment). The collinear branch projects
//! both segments onto the first one's direction, swaps a reversed
//! interval and clips to `[0, 1]`.

use crate::geom::{cross, orientation};
use crate::intersect::{line, Hit};
use crate::shapes::{Line, Segment};
use crate::Point;

fn opposite_sides(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    orientation(p1, q1, p2) != orientation(p1, q1, q2)
        && orientation(q2, p2, q1) != orientation(q2, p2, p1)
}

/// Orientation-only crossing test, no intersection point computed.
pub fn fast_segment_segment(a: &Segment, b: &Segment) -> bool {
    opposite_sides(a.p1, a.p2, b.p1, b.p2)
}

/// Any crossing between the two edge sets?
pub fn fast_test_sets(set_a: &[Segment], set_b: &[Segment]) -> bool {
    set_a
        .iter()
        .any(|a| set_b.iter().any(|b| fast_segment_segment(a, b)))
}

/// Full segment-segment intersection.
pub fn segment_segment(s1: &Segment, s2: &Segment) -> Hit {
    if !s1.bounding_box().overlaps(&s2.bounding_box()) {
        return Hit::None;
    }

    let p = s1.p1;
    let q = s2.p1;
    let r = s1.to_vector();
    let s = s2.to_vector();
    let pq = q - p;

    let r_x_s = cross(r, s);
    let pq_x_r = cross(pq, r);

    if r_x_s == 0.0 {
        if pq_x_r != 0.0 {
            // Parallel, never touching.
            return Hit::None;
        }
        // Collinear: overlap in the parameter space of s1.
        let rr = r.dot(&r);
        let sr = s.dot(&r);
        let mut t0 = pq.dot(&r) / rr;
        let mut t1 = t0 + sr / rr;
        if sr < 0.0 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t1 >= 0.0 && t0 <= 1.0 {
            let t0 = t0.max(0.0);
            let t1 = t1.min(1.0);
            return Hit::Segment(Segment::new_unchecked(p + r * t0, p + r * t1));
        }
        return Hit::None;
    }

    let pq_x_s = cross(pq, s);
    let t = pq_x_s / r_x_s;
    let u = pq_x_r / r_x_s;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        return Hit::Point(p + r * t);
    }
    Hit::None
}

/// Pairwise crossing points between two edge sets; collinear overlaps
/// contribute no points.
pub fn test_sets(set_a: &[Segment], set_b: &[Segment]) -> Vec<Point> {
    let mut ips = Vec::new();
    for a in set_a {
        for b in set_b {
            if a.bounding_box().overlaps(&b.bounding_box()) {
                if let Hit::Point(p) = segment_segment(a, b) {
                    ips.push(p);
                }
            }
        }
    }
    ips
}

/// Intersection of a segment with an infinite line.
pub fn segment_line(seg: &Segment, l: &Line) -> Hit {
    if seg.is_vertical() {
        if let Some(y) = l.y_at(seg.p1.x) {
            if y <= seg.p1.y.max(seg.p2.y) && y >= seg.p1.y.min(seg.p2.y) {
                return Hit::Point(Point::new(seg.p1.x, y));
            }
        }
        return Hit::None;
    }
    match line::line_line(&seg.to_line(), l) {
        Some(ip) if seg.point_on(ip) => Hit::Point(ip),
        _ => Hit::None,
    }
}

/// Does the line cross the segment? Touching an endpoint counts.
pub fn fast_segment_line(seg: &Segment, l: &Line) -> bool {
    let d1 = cross(l.dir(), seg.p1 - l.point());
    let d2 = cross(l.dir(), seg.p2 - l.point());
    d1 == 0.0 || d2 == 0.0 || (d1 < 0.0) != (d2 < 0.0)
}

/// Convert an infinite line to a segment spanning the box-plus-margin,
/// for solvers that only speak segments. `None` for a vertical line.
pub(crate) fn line_as_chord(l: &Line, x1: f64, x2: f64) -> Option<Segment> {
    let p1 = l.point_at_x(x1)?;
    let p2 = l.point_at_x(x2)?;
    Some(Segment::new_unchecked(p1, p2))
}
