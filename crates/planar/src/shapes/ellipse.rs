//! Axis-aligned ellipse.
//!
//! Angles address the circumference through the parametric substitution
//! `t = atan(rx tanθ / ry)`, so `vector_at_angle` returns the point whose
//! central ray has direction θ, not the naive `(rx cosθ, ry sinθ)`.

use crate::error::{Error, Result};
use crate::geom::{unit_or_zero, Angle, BoundingBox};
use crate::intersect::line::parametric;
use crate::shapes::Polygon;
use crate::{Point, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Ellipse {
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Result<Self> {
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(Error::NonFiniteCoordinate);
        }
        if !radius_x.is_finite() || !radius_y.is_finite() || radius_x <= 0.0 || radius_y <= 0.0 {
            return Err(Error::InvalidRadius);
        }
        Ok(Self {
            center,
            radius_x,
            radius_y,
        })
    }

    #[inline]
    pub fn major_semi_axis(&self) -> f64 {
        self.radius_x.max(self.radius_y)
    }

    #[inline]
    pub fn minor_semi_axis(&self) -> f64 {
        self.radius_x.min(self.radius_y)
    }

    /// Strictly inside; boundary points are not internal.
    pub fn is_internal(&self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx / (self.radius_x * self.radius_x) + dy * dy / (self.radius_y * self.radius_y) < 1.0
    }

    #[inline]
    pub fn centroid(&self) -> Point {
        self.center
    }

    pub fn area(&self) -> f64 {
        self.radius_x * self.radius_y * Angle::PI
    }

    /// Approximate perimeter (root-mean-square radius formula).
    pub fn perimeter(&self) -> f64 {
        Angle::TAU
            * ((self.radius_x * self.radius_x + self.radius_y * self.radius_y) / 2.0).sqrt()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            x1: self.center.x - self.radius_x,
            y1: self.center.y - self.radius_y,
            x2: self.center.x + self.radius_x,
            y2: self.center.y + self.radius_y,
        }
    }

    /// Vector from the center to the circumference point whose central
    /// ray has direction `angle`.
    pub fn vector_at_angle(&self, angle: Angle) -> Vec2<f64> {
        let theta = angle.normalized();
        let sign = if theta.radians() > Angle::SPI || theta.radians() < -Angle::SPI {
            -1.0
        } else {
            1.0
        };
        let t = (self.radius_x * theta.tan() / self.radius_y).atan();
        Vec2::new(
            self.radius_x * t.cos() * sign,
            self.radius_y * t.sin() * sign,
        )
    }

    /// Point on the circumference at the given central angle.
    pub fn point_at_angle(&self, angle: Angle) -> Point {
        self.center + self.vector_at_angle(angle)
    }

    /// Unit tangent at the circumference point addressed by `angle`.
    pub fn tangent_at_angle(&self, angle: Angle) -> Vec2<f64> {
        let aa = self.radius_x * self.radius_x;
        let bb = self.radius_y * self.radius_y;
        let v = self.vector_at_angle(angle);
        unit_or_zero(Vec2::new(-v.y / bb, v.x / aa))
    }

    /// Unit outward normal at the circumference point addressed by `angle`.
    pub fn normal_at_angle(&self, angle: Angle) -> Vec2<f64> {
        let aa = self.radius_x * self.radius_x;
        let bb = self.radius_y * self.radius_y;
        let v = self.vector_at_angle(angle);
        unit_or_zero(Vec2::new(v.x / aa, v.y / bb))
    }

    pub fn scaled(&self, factor: f64) -> Ellipse {
        Ellipse {
            center: self.center,
            radius_x: self.radius_x * factor,
            radius_y: self.radius_y * factor,
        }
    }

    pub fn scale_mut(&mut self, factor: f64) -> &mut Self {
        self.radius_x *= factor;
        self.radius_y *= factor;
        self
    }

    /// Contact point of the quadrant arc between `r1` and `r2`, at the
    /// bisecting central direction.
    fn arc_midpoint(&self, r1: Point, r2: Point) -> Point {
        let u = (r1 - self.center) + (r2 - self.center);
        self.center + self.vector_at_angle(Angle::new(u.y.atan2(u.x)))
    }

    /// Polygon approximation inscribed in the ellipse, `4 * 2^depth`
    /// vertices placed by arc subdivision of one quadrant, mirrored
    /// across both axes. Subdivision runs over an explicit stack.
    pub fn inscribe(&self, depth: u32) -> Polygon {
        let len = 1usize << depth;
        let mut verts = vec![Point::zeros(); len * 4];
        let dcx = 2.0 * self.center.x;
        let dcy = 2.0 * self.center.y;
        let mut idx = 0usize;

        let r1 = Point::new(self.center.x - self.radius_x, self.center.y);
        let r2 = Point::new(self.center.x, self.center.y - self.radius_y);
        // In-order walk: pop a sector, split until the target level,
        // pushing the right half first so the left is handled next.
        let mut stack: Vec<(Point, Point, u32)> = vec![(r1, r2, 0)];
        while let Some((r1, r2, level)) = stack.pop() {
            let np = self.arc_midpoint(r1, r2);
            if level < depth {
                stack.push((np, r2, level + 1));
                stack.push((r1, np, level + 1));
            } else {
                let i = idx;
                idx += 1;
                verts[i] = np;
                verts[len + (len - 1 - i)] = Point::new(dcx - np.x, np.y);
                verts[2 * len + i] = Point::new(dcx - np.x, dcy - np.y);
                verts[3 * len + (len - 1 - i)] = Point::new(np.x, dcy - np.y);
            }
        }
        Polygon::from_vertices_unchecked(verts)
    }

    /// Polygon approximation escribed around the ellipse, built from
    /// tangent-line intersections at the subdivision points, `4 * 2^depth`
    /// vertices. `depth >= 1`.
    pub fn escribe(&self, depth: u32) -> Polygon {
        let depth = depth.max(1);
        let len = 1usize << depth;
        let mut verts = vec![Point::zeros(); len * 4];
        let aa = self.radius_x * self.radius_x;
        let bb = self.radius_y * self.radius_y;
        let dcx = 2.0 * self.center.x;
        let dcy = 2.0 * self.center.y;
        let mut idx = 0usize;

        let r1 = Point::new(self.center.x - self.radius_x, self.center.y);
        let r2 = Point::new(self.center.x, self.center.y - self.radius_y);
        let t1 = Vec2::new(0.0, -1.0);
        let t2 = Vec2::new(1.0, 0.0);
        let mut stack: Vec<(Point, Point, Vec2<f64>, Vec2<f64>, u32)> =
            vec![(r1, r2, t1, t2, 0)];
        while let Some((r1, r2, t1, t2, level)) = stack.pop() {
            let np = self.arc_midpoint(r1, r2);
            let v = np - self.center;
            let tv = unit_or_zero(Vec2::new(-v.y / bb, v.x / aa));
            if level < depth - 1 {
                stack.push((np, r2, tv, t2, level + 1));
                stack.push((r1, np, t1, tv, level + 1));
            } else {
                // Adjacent tangents are never parallel; fall back to the
                // contact point if numerics disagree.
                let ip1 = parametric(r1, t1, np, tv).unwrap_or(np);
                let ip2 = parametric(np, tv, r2, t2).unwrap_or(np);
                let i1 = idx;
                let i2 = idx + 1;
                idx += 2;
                verts[i1] = ip1;
                verts[i2] = ip2;
                verts[len + (len - 1 - i1)] = Point::new(dcx - ip1.x, ip1.y);
                verts[len + (len - 1 - i2)] = Point::new(dcx - ip2.x, ip2.y);
                verts[2 * len + i1] = Point::new(dcx - ip1.x, dcy - ip1.y);
                verts[2 * len + i2] = Point::new(dcx - ip2.x, dcy - ip2.y);
                verts[3 * len + (len - 1 - i1)] = Point::new(ip1.x, dcy - ip1.y);
                verts[3 * len + (len - 1 - i2)] = Point::new(ip2.x, dcy - ip2.y);
            }
        }
        Polygon::from_vertices_unchecked(verts)
    }
}
