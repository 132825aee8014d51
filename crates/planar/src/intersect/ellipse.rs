//! Ellipse intersection solvers.
//!
//! Two interchangeable line strategies are kept: direct substitution of
//! the slope-intercept form into the implicit ellipse equation, and an
//! axis scale that maps the ellipse to a circle, delegates, and scales
//! the result back. They must agree within tolerance; tests hold them
//! to that.

use crate::geom::{approx_zero, Quadratic};
use crate::intersect::{circle, polygon, Hit};
use crate::shapes::{Circle, Ellipse, Line, Polygon, Segment};
use crate::Point;

/// Approximation depth used by the fast ellipse-ellipse test.
const FAST_DEPTH: u32 = 3;

fn scale_x(p: Point, sx: f64) -> Point {
    Point::new(p.x * sx, p.y)
}

/// Squeeze the ellipse into a circle by scaling x with `ry/rx`.
fn to_circle(ellipse: &Ellipse) -> (Circle, f64) {
    let sx = ellipse.radius_y / ellipse.radius_x;
    (
        Circle {
            center: scale_x(ellipse.center, sx),
            radius: ellipse.radius_y,
        },
        sx,
    )
}

fn unscale_hit(hit: Hit, sx: f64) -> Hit {
    match hit {
        Hit::Point(p) => Hit::Point(Point::new(p.x / sx, p.y)),
        Hit::Segment(s) => Hit::Segment(Segment::new_unchecked(
            Point::new(s.p1.x / sx, s.p1.y),
            Point::new(s.p2.x / sx, s.p2.y),
        )),
        other => other,
    }
}

/// Box test, then crossing test on inscribed approximations.
pub fn fast_ellipse_ellipse(a: &Ellipse, b: &Ellipse) -> bool {
    if !a.bounding_box().overlaps(&b.bounding_box()) {
        return false;
    }
    let pa = a.inscribe(FAST_DEPTH);
    let pb = b.inscribe(FAST_DEPTH);
    polygon::fast_polygon_polygon(&pa, &pb, true)
}

pub fn fast_ellipse_segment(ellipse: &Ellipse, segment: &Segment) -> bool {
    let (c, sx) = to_circle(ellipse);
    let tls = Segment::new_unchecked(scale_x(segment.p1, sx), scale_x(segment.p2, sx));
    circle::fast_circle_segment(&c, &tls)
}

pub fn fast_ellipse_line(ellipse: &Ellipse, l: &Line) -> bool {
    let (c, sx) = to_circle(ellipse);
    match Line::from_points(scale_x(l.point(), sx), scale_x(l.point() + l.dir(), sx)) {
        Ok(tl) => circle::fast_circle_line(&c, &tl),
        Err(_) => false,
    }
}

/// Strategy (a): substitute `y = m x + b` into the implicit equation.
pub fn ellipse_line(ellipse: &Ellipse, l: &Line, skip_prefilter: bool) -> Hit {
    if !skip_prefilter && !ellipse.bounding_box().intersects_line(l) {
        return Hit::None;
    }

    let aa = ellipse.radius_x * ellipse.radius_x;
    let bb = ellipse.radius_y * ellipse.radius_y;
    let cx = ellipse.center.x;
    let cy = ellipse.center.y;

    let (lm, lb) = match (l.slope(), l.y_intercept()) {
        (Some(m), Some(b)) => (m, b),
        // Vertical line: substitute x and solve the quadratic in y.
        _ => {
            let x = l.point().x;
            let dx = x - cx;
            let a = aa;
            let b = -2.0 * aa * cy;
            let c = aa * cy * cy + bb * dx * dx - aa * bb;
            return match Quadratic::new(a, b, c).roots() {
                Some((y1, y2)) if approx_zero(y1 - y2) => Hit::Point(Point::new(x, y1)),
                Some((y1, y2)) => Hit::Segment(Segment::new_unchecked(
                    Point::new(x, y1),
                    Point::new(x, y2),
                )),
                None => Hit::None,
            };
        }
    };

    let a = bb + aa * lm * lm;
    let b = -2.0 * bb * cx + 2.0 * aa * lm * lb - 2.0 * aa * lm * cy;
    let c = bb * cx * cx + aa * cy * cy - aa * bb + aa * lb * lb - 2.0 * aa * lb * cy;

    match Quadratic::new(a, b, c).roots() {
        Some((x1, x2)) if approx_zero(x1 - x2) => Hit::Point(Point::new(x1, lm * x1 + lb)),
        Some((x1, x2)) => Hit::Segment(Segment::new_unchecked(
            Point::new(x1, lm * x1 + lb),
            Point::new(x2, lm * x2 + lb),
        )),
        None => Hit::None,
    }
}

/// Strategy (b): scale to a circle, delegate, scale back.
pub fn ellipse_line_by_transform(ellipse: &Ellipse, l: &Line, skip_prefilter: bool) -> Hit {
    if !skip_prefilter && !ellipse.bounding_box().intersects_line(l) {
        return Hit::None;
    }
    let (c, sx) = to_circle(ellipse);
    let tl = match Line::from_points(scale_x(l.point(), sx), scale_x(l.point() + l.dir(), sx)) {
        Ok(tl) => tl,
        Err(_) => return Hit::None,
    };
    unscale_hit(circle::circle_line(&c, &tl, true), sx)
}

/// Part of the segment inside the ellipse, via the circle transform.
pub fn ellipse_segment(ellipse: &Ellipse, segment: &Segment, skip_prefilter: bool) -> Hit {
    if !skip_prefilter
        && !ellipse
            .bounding_box()
            .overlaps(&segment.bounding_box())
    {
        return Hit::None;
    }
    let (c, sx) = to_circle(ellipse);
    let tls = Segment::new_unchecked(scale_x(segment.p1, sx), scale_x(segment.p2, sx));
    unscale_hit(circle::circle_segment(&c, &tls, true), sx)
}

/// Inscribed-polygon stand-in for ellipse area-overlap queries.
pub fn approximation(ellipse: &Ellipse) -> Polygon {
    ellipse.inscribe(FAST_DEPTH)
}
