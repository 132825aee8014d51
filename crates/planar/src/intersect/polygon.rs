//! Polygon intersection: fast predicates, segment/line clipping, and
//! the boolean AND of two polygons via triangulate-and-merge.

use std::cmp::Ordering;

use crate::error::Result;
use crate::geom::order_ccw;
use crate::intersect::{circle, merge, segment, Hit};
use crate::shapes::{Circle, Line, Polygon, Segment};
use crate::Point;

/// Do the polygons touch? Box test, edge crossings, then mutual
/// containment for the nested case.
pub fn fast_polygon_polygon(a: &Polygon, b: &Polygon, skip_prefilter: bool) -> bool {
    if !skip_prefilter {
        match (a.bounding_box(), b.bounding_box()) {
            (Some(ba), Some(bb)) if ba.overlaps(&bb) => {}
            _ => return false,
        }
    }
    if segment::fast_test_sets(&a.edges(), &b.edges()) {
        return true;
    }
    b.is_internal(a.vertices()[0]) || a.is_internal(b.vertices()[0])
}

/// Does the line cross the polygon boundary?
pub fn fast_polygon_line(polygon: &Polygon, l: &Line) -> bool {
    let bbox = match polygon.bounding_box() {
        Some(b) => b,
        None => return false,
    };
    if !bbox.intersects_line(l) {
        return false;
    }
    polygon
        .edges()
        .iter()
        .any(|e| segment::fast_segment_line(e, l))
}

/// Does the circle touch the polygon? Covers the circle-inside case via
/// the center, then checks every edge against the disc.
pub fn fast_polygon_circle(polygon: &Polygon, c: &Circle) -> bool {
    match polygon.bounding_box() {
        Some(b) if b.overlaps(&c.bounding_box()) => {}
        _ => return false,
    }
    if polygon.is_internal(c.center) {
        return true;
    }
    circle::fast_circle_segment_set(c, &polygon.edges())
}

fn order_along(points: &mut [Point]) {
    points.sort_by(|a, b| {
        let dx = a.x - b.x;
        if dx == 0.0 {
            a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal)
        } else {
            dx.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
        }
    });
}

/// Sub-segments of `seg` inside the polygon.
///
/// Boundary crossings and contained endpoints are collected and paired
/// along the segment. An odd point count means a vertex graze or
/// numerically ill-defined parity; that query has no defined answer and
/// reports `None`. No intersection is `Some(vec![])`.
pub fn polygon_segment(
    polygon: &Polygon,
    seg: &Segment,
    skip_prefilter: bool,
) -> Option<Vec<Segment>> {
    if !skip_prefilter {
        match polygon.bounding_box() {
            Some(b) if b.overlaps(&seg.bounding_box()) => {}
            _ => return Some(Vec::new()),
        }
    }

    let mut ips = segment::test_sets(&[*seg], &polygon.edges());
    ips.extend(polygon.filter_internal(&[seg.p1, seg.p2]));

    if ips.is_empty() {
        return Some(Vec::new());
    }
    if ips.len() % 2 != 0 {
        log::debug!(
            "segment clip collected {} boundary points; parity undefined",
            ips.len()
        );
        return None;
    }

    order_along(&mut ips);

    let segments = ips
        .chunks_exact(2)
        .map(|pair| Segment::new_unchecked(pair[0], pair[1]))
        .collect();
    Some(segments)
}

/// Sub-segments of an infinite line inside the polygon, computed by
/// clipping the line to a chord spanning the box plus a margin.
pub fn polygon_line(polygon: &Polygon, l: &Line) -> Option<Vec<Segment>> {
    let bbox = polygon.bounding_box()?;
    if !bbox.intersects_line(l) {
        return Some(Vec::new());
    }
    let chord = match segment::line_as_chord(l, bbox.x1 - 1.0, bbox.x2 + 1.0) {
        Some(s) => s,
        // Vertical line: span the y range instead.
        None => {
            let x = l.point().x;
            Segment::new_unchecked(
                Point::new(x, bbox.y1 - 1.0),
                Point::new(x, bbox.y2 + 1.0),
            )
        }
    };
    polygon_segment(polygon, &chord, true)
}

/// All boundary crossing points plus mutually contained vertices.
pub fn intersection_points(a: &Polygon, b: &Polygon) -> Vec<Point> {
    match (a.bounding_box(), b.bounding_box()) {
        (Some(ba), Some(bb)) if ba.overlaps(&bb) => {}
        _ => return Vec::new(),
    }
    let mut ips = segment::test_sets(&a.edges(), &b.edges());
    ips.extend(a.filter_internal(b.vertices()));
    ips.extend(b.filter_internal(a.vertices()));
    ips
}

fn candidate(points: Vec<Point>) -> Option<Polygon> {
    if points.len() < 3 {
        // Corner grazes produce 1-2 points; nothing with area to keep.
        return None;
    }
    let mut points = points;
    order_ccw(&mut points);
    Some(Polygon::from_vertices_unchecked(points))
}

/// Boolean AND of two polygons.
///
/// Convex operands intersect directly; a concave operand is
/// triangulated and its triangles intersected piecewise. The piecewise
/// results are merged back into maximal polygons along shared edges and
/// cleaned of collinear vertices. Every returned polygon is simple;
/// outlines the merge walk cannot keep simple are dropped.
pub fn polygon_polygon(a: &Polygon, b: &Polygon) -> Result<Vec<Polygon>> {
    let mut pieces: Vec<Polygon> = Vec::new();
    let a_convex = a.is_convex();
    let b_convex = b.is_convex();

    match (a_convex, b_convex) {
        (true, true) => {
            pieces.extend(candidate(intersection_points(a, b)));
        }
        (true, false) => {
            for tb in b.triangulate() {
                pieces.extend(candidate(intersection_points(a, &tb)));
            }
        }
        (false, true) => {
            for ta in a.triangulate() {
                pieces.extend(candidate(intersection_points(b, &ta)));
            }
        }
        (false, false) => {
            let ta = a.triangulate();
            let tb = b.triangulate();
            for pa in &ta {
                for pb in &tb {
                    pieces.extend(candidate(intersection_points(pa, pb)));
                }
            }
        }
    }

    if pieces.is_empty() {
        return Ok(Vec::new());
    }
    let mut merged = merge::merge(&pieces)?;
    for p in &mut merged {
        p.clean_mut();
    }
    // Operands sharing collinear boundary edges can leave the edge walk
    // with a self-intersecting outline; outputs must be simple polygons.
    merged.retain(|p| {
        let simple = !p.is_self_intersecting();
        if !simple {
            log::debug!("dropping self-intersecting outline from merged overlap");
        }
        simple
    });
    Ok(merged)
}
