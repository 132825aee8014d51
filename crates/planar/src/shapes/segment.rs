//! Directed line segment between two endpoints.

use crate::error::{Error, Result};
use crate::geom::{approx_zero, cross, points_approx_eq, BoundingBox};
use crate::shapes::Line;
use crate::{Point, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    /// Segment between two distinct, finite endpoints.
    pub fn new(p1: Point, p2: Point) -> Result<Self> {
        if ![p1.x, p1.y, p2.x, p2.y].iter().all(|v| v.is_finite()) {
            return Err(Error::NonFiniteCoordinate);
        }
        if points_approx_eq(p1, p2) {
            return Err(Error::DegenerateSegment);
        }
        Ok(Self { p1, p2 })
    }

    /// Polygon edges may repeat a vertex; callers filter degenerates.
    pub(crate) fn new_unchecked(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }

    /// Endpoints share the exact same x coordinate.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.p1.x == self.p2.x
    }

    /// Endpoints share the exact same y coordinate.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.p1.y == self.p2.y
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            x1: self.p1.x.min(self.p2.x),
            y1: self.p1.y.min(self.p2.y),
            x2: self.p1.x.max(self.p2.x),
            y2: self.p1.y.max(self.p2.y),
        }
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        (self.p1 + self.p2) / 2.0
    }

    /// Displacement from `p1` to `p2`.
    #[inline]
    pub fn to_vector(&self) -> Vec2<f64> {
        self.p2 - self.p1
    }

    /// Carrier line through both endpoints.
    pub fn to_line(&self) -> Line {
        let v = self.to_vector();
        Line::new_unchecked(v / v.norm(), self.p1)
    }

    /// Is `p` on the segment, endpoints included?
    pub fn point_on(&self, p: Point) -> bool {
        if self.p1 == self.p2 {
            return false;
        }
        let v1 = self.to_vector();
        let v2 = p - self.p1;
        if !approx_zero(cross(v1, v2)) {
            return false;
        }
        let s = v1.dot(&v1);
        let t = v1.dot(&v2);
        t == 0.0 || t == s || (t > 0.0 && t < s)
    }

    /// Endpointwise equality respecting direction.
    pub fn coincides(&self, other: &Segment) -> bool {
        points_approx_eq(self.p1, other.p1) && points_approx_eq(self.p2, other.p2)
    }

    /// Endpointwise equality ignoring direction.
    pub fn coincides_undirected(&self, other: &Segment) -> bool {
        self.coincides(other)
            || (points_approx_eq(self.p1, other.p2) && points_approx_eq(self.p2, other.p1))
    }

    pub fn reversed(&self) -> Segment {
        Segment {
            p1: self.p2,
            p2: self.p1,
        }
    }

    pub fn reverse_mut(&mut self) -> &mut Self {
        std::mem::swap(&mut self.p1, &mut self.p2);
        self
    }

    /// Reorient so the segment points left-to-right, or bottom-to-top
    /// when vertical.
    pub fn oriented_ltr(&self) -> Segment {
        if self.p2.x < self.p1.x || (self.is_vertical() && self.p1.y > self.p2.y) {
            return self.reversed();
        }
        *self
    }

    pub fn orient_ltr_mut(&mut self) -> &mut Self {
        if self.p2.x < self.p1.x || (self.is_vertical() && self.p1.y > self.p2.y) {
            self.reverse_mut();
        }
        self
    }

    pub fn translated(&self, delta: Vec2<f64>) -> Segment {
        Segment {
            p1: self.p1 + delta,
            p2: self.p2 + delta,
        }
    }

    pub fn translate_mut(&mut self, delta: Vec2<f64>) -> &mut Self {
        self.p1 += delta;
        self.p2 += delta;
        self
    }
}
