//! Intersection queries.
//!
//! Purpose
//! - Pairwise solvers per shape pair (free functions in the submodules)
//!   and a typed dispatch surface over a `Shape` union, so every pair is
//!   handled exhaustively at compile time.
//!
//! Result model
//! - `Hit` carries the exact geometric answer for the pair kind: nothing,
//!   a point, a chord/overlap segment, a set of clipped segments, or a
//!   set of overlap polygons. "No intersection" is `Hit::None`, never an
//!   error.
//!
//! Fast tests
//! - `fast_test` is a cheap boolean usable as a prefilter. It may err on
//!   the side of `true` for ray operands (it tests the carrier line).

pub mod circle;
pub mod ellipse;
pub mod line;
pub mod merge;
pub mod polygon;
pub mod segment;


use crate::error::Result;
use crate::geom::points_approx_eq;
use crate::shapes::{Circle, Ellipse, Line, Polygon, Ray, Segment};
use crate::Point;

/// Exact intersection result.
#[derive(Clone, Debug)]
pub enum Hit {
    /// No intersection.
    None,
    /// A single point (transversal crossing or tangency).
    Point(Point),
    /// A chord or overlap segment.
    Segment(Segment),
    /// Clipped sub-segments (segment/line against a polygon).
    Segments(Vec<Segment>),
    /// Overlap polygons (polygon against polygon).
    Polygons(Vec<Polygon>),
}

impl Hit {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Hit::None)
    }

    /// The hit as a point, when it is one.
    pub fn point(&self) -> Option<Point> {
        match self {
            Hit::Point(p) => Some(*p),
            _ => None,
        }
    }
}

/// Union of every shape the kernel can test, for exhaustive dispatch.
#[derive(Clone, Debug)]
pub enum Shape {
    Line(Line),
    Ray(Ray),
    Segment(Segment),
    Circle(Circle),
    Ellipse(Ellipse),
    Polygon(Polygon),
}

impl From<Line> for Shape {
    fn from(v: Line) -> Self {
        Shape::Line(v)
    }
}
impl From<Ray> for Shape {
    fn from(v: Ray) -> Self {
        Shape::Ray(v)
    }
}
impl From<Segment> for Shape {
    fn from(v: Segment) -> Self {
        Shape::Segment(v)
    }
}
impl From<Circle> for Shape {
    fn from(v: Circle) -> Self {
        Shape::Circle(v)
    }
}
impl From<Ellipse> for Shape {
    fn from(v: Ellipse) -> Self {
        Shape::Ellipse(v)
    }
}
impl From<Polygon> for Shape {
    fn from(v: Polygon) -> Self {
        Shape::Polygon(v)
    }
}

/// Restrict a carrier-line hit to the forward half of a ray. Chord
/// endpoints behind the origin are clipped to the origin.
fn clip_to_ray(hit: Hit, ray: &Ray) -> Hit {
    match hit {
        Hit::Point(p) if ray.is_behind(p) => Hit::None,
        Hit::Segment(s) => {
            let b1 = ray.is_behind(s.p1);
            let b2 = ray.is_behind(s.p2);
            match (b1, b2) {
                (true, true) => Hit::None,
                (false, false) => Hit::Segment(s),
                (true, false) => clipped_or_point(ray.origin(), s.p2),
                (false, true) => clipped_or_point(ray.origin(), s.p1),
            }
        }
        Hit::Segments(list) => {
            let clipped: Vec<Segment> = list
                .into_iter()
                .filter_map(|s| match clip_to_ray(Hit::Segment(s), ray) {
                    Hit::Segment(s) => Some(s),
                    _ => None,
                })
                .collect();
            if clipped.is_empty() {
                Hit::None
            } else {
                Hit::Segments(clipped)
            }
        }
        other => other,
    }
}

fn clipped_or_point(origin: Point, forward: Point) -> Hit {
    if points_approx_eq(origin, forward) {
        Hit::Point(origin)
    } else {
        Hit::Segment(Segment::new_unchecked(origin, forward))
    }
}

fn option_segments(result: Option<Vec<Segment>>) -> Hit {
    match result {
        Some(list) if list.is_empty() => Hit::None,
        Some(list) => Hit::Segments(list),
        None => {
            log::debug!("polygon clip parity undefined; reporting no intersection");
            Hit::None
        }
    }
}

fn polygons_hit(list: Vec<Polygon>) -> Hit {
    if list.is_empty() {
        Hit::None
    } else {
        Hit::Polygons(list)
    }
}

/// Cheap boolean intersection predicate over any shape pair.
pub fn fast_test(a: &Shape, b: &Shape) -> bool {
    use Shape::*;
    match (a, b) {
        (Line(a), Line(b)) => line::line_line(a, b).is_some() || a.point_on(b.point()),
        (Line(l), Segment(s)) | (Segment(s), Line(l)) => segment::fast_segment_line(s, l),
        (Line(l), Circle(c)) | (Circle(c), Line(l)) => circle::fast_circle_line(c, l),
        (Line(l), Ellipse(e)) | (Ellipse(e), Line(l)) => ellipse::fast_ellipse_line(e, l),
        (Line(l), Polygon(p)) | (Polygon(p), Line(l)) => polygon::fast_polygon_line(p, l),

        (Segment(a), Segment(b)) => segment::fast_segment_segment(a, b),
        (Segment(s), Circle(c)) | (Circle(c), Segment(s)) => circle::fast_circle_segment(c, s),
        (Segment(s), Ellipse(e)) | (Ellipse(e), Segment(s)) => {
            ellipse::fast_ellipse_segment(e, s)
        }
        (Segment(s), Polygon(p)) | (Polygon(p), Segment(s)) => match p.bounding_box() {
            Some(b) => {
                b.overlaps(&s.bounding_box())
                    && (segment::fast_test_sets(&p.edges(), &[*s]) || p.is_internal(s.p1))
            }
            None => false,
        },

        (Circle(a), Circle(b)) => circle::fast_circle_circle(a, b),
        (Circle(c), Ellipse(e)) | (Ellipse(e), Circle(c)) => {
            ellipse::fast_ellipse_ellipse(&c.as_ellipse(), e)
        }
        (Circle(c), Polygon(p)) | (Polygon(p), Circle(c)) => polygon::fast_polygon_circle(p, c),

        (Ellipse(a), Ellipse(b)) => ellipse::fast_ellipse_ellipse(a, b),
        (Ellipse(e), Polygon(p)) | (Polygon(p), Ellipse(e)) => {
            match (p.bounding_box(), e.bounding_box()) {
                (Some(pb), eb) if pb.overlaps(&eb) => {
                    polygon::fast_polygon_polygon(&ellipse::approximation(e), p, true)
                }
                _ => false,
            }
        }

        (Polygon(a), Polygon(b)) => polygon::fast_polygon_polygon(a, b, false),

        // Rays test as their carrier lines (conservative).
        (Ray(r), other) | (other, Ray(r)) => fast_test(&Line(r.line().clone()), other),
    }
}

/// Exact intersection of any shape pair.
pub fn test(a: &Shape, b: &Shape) -> Result<Hit> {
    use Shape::*;
    let hit = match (a, b) {
        (Line(a), Line(b)) => match line::line_line(a, b) {
            Some(p) => Hit::Point(p),
            None => Hit::None,
        },
        (Line(l), Segment(s)) | (Segment(s), Line(l)) => segment::segment_line(s, l),
        (Line(l), Circle(c)) | (Circle(c), Line(l)) => circle::circle_line(c, l, false),
        (Line(l), Ellipse(e)) | (Ellipse(e), Line(l)) => ellipse::ellipse_line(e, l, false),
        (Line(l), Polygon(p)) | (Polygon(p), Line(l)) => {
            option_segments(polygon::polygon_line(p, l))
        }

        (Segment(a), Segment(b)) => segment::segment_segment(a, b),
        (Segment(s), Circle(c)) | (Circle(c), Segment(s)) => circle::circle_segment(c, s, false),
        (Segment(s), Ellipse(e)) | (Ellipse(e), Segment(s)) => {
            ellipse::ellipse_segment(e, s, false)
        }
        (Segment(s), Polygon(p)) | (Polygon(p), Segment(s)) => {
            option_segments(polygon::polygon_segment(p, s, false))
        }

        (Circle(a), Circle(b)) => circle::circle_circle(a, b),
        (Circle(c), Ellipse(e)) | (Ellipse(e), Circle(c)) => polygons_hit(
            polygon::polygon_polygon(&ellipse::approximation(&c.as_ellipse()), &ellipse::approximation(e))?,
        ),
        (Circle(c), Polygon(p)) | (Polygon(p), Circle(c)) => polygons_hit(
            polygon::polygon_polygon(&ellipse::approximation(&c.as_ellipse()), p)?,
        ),

        (Ellipse(a), Ellipse(b)) => polygons_hit(polygon::polygon_polygon(
            &ellipse::approximation(a),
            &ellipse::approximation(b),
        )?),
        (Ellipse(e), Polygon(p)) | (Polygon(p), Ellipse(e)) => {
            polygons_hit(polygon::polygon_polygon(&ellipse::approximation(e), p)?)
        }

        (Polygon(a), Polygon(b)) => polygons_hit(polygon::polygon_polygon(a, b)?),

        (Ray(ra), Ray(rb)) => {
            let carrier = test(&Line(ra.line().clone()), &Line(rb.line().clone()))?;
            clip_to_ray(clip_to_ray(carrier, ra), rb)
        }
        (Ray(r), other) | (other, Ray(r)) => {
            let carrier = test(&Line(r.line().clone()), other)?;
            clip_to_ray(carrier, r)
        }
    };
    Ok(hit)
}
