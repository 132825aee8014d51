//! Circle, with exact constructions an ellipse cannot offer.

use crate::error::{Error, Result};
use crate::geom::{approx_eq, approx_zero, perp, unit_normal, unit_or_zero, Angle, BoundingBox};
use crate::intersect::line::parametric;
use crate::shapes::{Ellipse, Polygon, Segment};
use crate::{Point, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(Error::NonFiniteCoordinate);
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidRadius);
        }
        Ok(Self { center, radius })
    }

    /// View as an ellipse with equal semi-axes.
    pub fn as_ellipse(&self) -> Ellipse {
        Ellipse {
            center: self.center,
            radius_x: self.radius,
            radius_y: self.radius,
        }
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Strictly inside; boundary points are not internal.
    pub fn is_internal(&self, point: Point) -> bool {
        (point - self.center).norm() < self.radius
    }

    #[inline]
    pub fn centroid(&self) -> Point {
        self.center
    }

    pub fn area(&self) -> f64 {
        self.radius * self.radius * Angle::PI
    }

    pub fn perimeter(&self) -> f64 {
        Angle::TAU * self.radius
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            x1: self.center.x - self.radius,
            y1: self.center.y - self.radius,
            x2: self.center.x + self.radius,
            y2: self.center.y + self.radius,
        }
    }

    pub fn point_at_angle(&self, angle: Angle) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Contact points of the two tangent lines through an external
    /// point. `None` when the point is inside the circle; a point on the
    /// circle is its own single contact point.
    pub fn tangents_from_point(&self, point: Point) -> Option<Vec<Point>> {
        let vc = self.center - point;
        let l = vc.norm();
        if l < self.radius {
            return None;
        }
        if approx_eq(l, self.radius) {
            return Some(vec![point]);
        }

        let a = (self.radius / l).asin();
        let b = vc.y.atan2(vc.x);

        let t = b - a;
        let t1 = Point::new(
            self.center.x + self.radius * t.sin(),
            self.center.y - self.radius * t.cos(),
        );

        let t = b + a;
        let t2 = Point::new(
            self.center.x - self.radius * t.sin(),
            self.center.y + self.radius * t.cos(),
        );

        Some(vec![t1, t2])
    }

    /// Tangent segments touching both circles on the same side. `None`
    /// for concentric or fully nested circles.
    pub fn exterior_tangents(&self, other: &Circle) -> Option<Vec<Segment>> {
        let (c1, c2) = if other.radius > self.radius {
            (other, self)
        } else {
            (self, other)
        };
        let ri = c1.radius - c2.radius;

        if approx_zero(ri) {
            // Equal radii: tangents are parallel to the center line.
            let v = c2.center - c1.center;
            if v.norm() == 0.0 {
                return None;
            }
            let n = unit_normal(v);
            let tangents: Vec<Segment> = [
                Segment::new(c1.center + n * c1.radius, c2.center + n * c2.radius),
                Segment::new(c1.center - n * c1.radius, c2.center - n * c2.radius),
            ]
            .into_iter()
            .flatten()
            .collect();
            return if tangents.is_empty() {
                None
            } else {
                Some(tangents)
            };
        }

        let helper = Circle {
            center: c1.center,
            radius: ri,
        };
        let contacts = helper.tangents_from_point(c2.center)?;
        let tangents: Vec<Segment> = contacts
            .into_iter()
            .filter_map(|t| {
                let v = unit_or_zero(t - c1.center);
                Segment::new(t + v * c2.radius, c2.center + v * c2.radius).ok()
            })
            .collect();
        if tangents.is_empty() {
            None
        } else {
            Some(tangents)
        }
    }

    /// Tangent segments crossing between the circles. `None` when the
    /// circles overlap.
    pub fn interior_tangents(&self, other: &Circle) -> Option<Vec<Segment>> {
        let (c1, c2) = if other.radius > self.radius {
            (other, self)
        } else {
            (self, other)
        };
        let helper = Circle {
            center: c1.center,
            radius: c1.radius + c2.radius,
        };
        let contacts = helper.tangents_from_point(c2.center)?;
        let tangents: Vec<Segment> = contacts
            .into_iter()
            .filter_map(|t| {
                let v = unit_or_zero(t - c1.center);
                Segment::new(t - v * c2.radius, c2.center - v * c2.radius).ok()
            })
            .collect();
        if tangents.is_empty() {
            None
        } else {
            Some(tangents)
        }
    }

    pub fn scaled(&self, factor: f64) -> Circle {
        Circle {
            center: self.center,
            radius: self.radius * factor,
        }
    }

    pub fn scale_mut(&mut self, factor: f64) -> &mut Self {
        self.radius *= factor;
        self
    }

    /// Regular polygon inscribed in the circle, `8 * depth` vertices.
    pub fn inscribe(&self, depth: u32) -> Polygon {
        let steps = 8 * depth.max(1) as usize;
        let step = Angle::QPI / depth.max(1) as f64;
        let verts: Vec<Point> = (0..steps)
            .map(|i| self.point_at_angle(Angle::new(i as f64 * step)))
            .collect();
        Polygon::from_vertices_unchecked(verts)
    }

    /// Regular polygon escribed around the circle, built from tangent
    /// intersections, `8 * depth` vertices.
    pub fn escribe(&self, depth: u32) -> Polygon {
        let steps = 8 * depth.max(1) as usize;
        let step = Angle::QPI / depth.max(1) as f64;
        let mut verts = Vec::with_capacity(steps);
        let mut pp = self.center + Vec2::new(self.radius, 0.0);
        let mut pt = Vec2::new(0.0, 1.0);
        for i in 1..=steps {
            let cp = self.point_at_angle(Angle::new(i as f64 * step));
            let t = perp(cp - self.center);
            // Consecutive tangents meet for any step below a half turn.
            let ip = parametric(pp, pt, cp, t).unwrap_or(cp);
            verts.push(ip);
            pp = cp;
            pt = t;
        }
        Polygon::from_vertices_unchecked(verts)
    }
}
