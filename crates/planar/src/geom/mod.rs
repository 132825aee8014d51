//! Shared numeric primitives and predicates.
//!
//! Purpose
//! - One place for the tolerance policy and the small vector/point
//!   helpers every solver leans on: cross products, orientation,
//!   rotations, angle measures, CCW ordering, quadratic roots.
//!
//! Tolerance policy
//! - `EPS` is an absolute tolerance used by every equality/zero check on
//!   roots, directions and orientation. `_eps` variants exist where a
//!   caller needs custom slack; scale inputs to O(1) coordinates for
//!   best behavior.

use std::cmp::Ordering;

use crate::{Point, Vec2};

mod angle;
mod bbox;

pub use angle::Angle;
pub use bbox::BoundingBox;

#[cfg(test)]
mod tests;

/// Numerical tolerance used for geometric predicates.
pub const EPS: f64 = 1e-9;

#[inline]
pub fn approx_zero(v: f64) -> bool {
    approx_zero_eps(v, EPS)
}

#[inline]
pub fn approx_zero_eps(v: f64, eps: f64) -> bool {
    v.abs() < eps
}

#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_zero(a - b)
}

/// Epsilon-based point equality (componentwise).
#[inline]
pub fn points_approx_eq(a: Point, b: Point) -> bool {
    approx_zero(a.x - b.x) && approx_zero(a.y - b.y)
}

/// Perp-product of two displacement vectors (signed parallelogram area).
#[inline]
pub fn cross(u: Vec2<f64>, v: Vec2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Unit vector in the direction of `v`, or zero when `v` is zero.
#[inline]
pub fn unit_or_zero(v: Vec2<f64>) -> Vec2<f64> {
    let l = v.norm();
    if l == 0.0 {
        Vec2::zeros()
    } else {
        v / l
    }
}

/// Left-hand unit normal of `v` (90° CCW), or zero when `v` is zero.
#[inline]
pub fn unit_normal(v: Vec2<f64>) -> Vec2<f64> {
    unit_or_zero(Vec2::new(-v.y, v.x))
}

/// 90° CCW rotation without normalization.
#[inline]
pub fn perp(v: Vec2<f64>) -> Vec2<f64> {
    Vec2::new(-v.y, v.x)
}

/// Rotate `v` by `angle` (CCW positive).
#[inline]
pub fn rotated(v: Vec2<f64>, angle: Angle) -> Vec2<f64> {
    let (s, c) = angle.radians().sin_cos();
    Vec2::new(v.x * c - v.y * s, v.y * c + v.x * s)
}

/// Signed angle from `u` to `v`.
#[inline]
pub fn angle_between(u: Vec2<f64>, v: Vec2<f64>) -> Angle {
    Angle::new(cross(u, v).atan2(u.dot(&v)))
}

/// Angle formed between `p1` and `p3` at `p2`.
#[inline]
pub fn turn_angle(p1: Point, p2: Point, p3: Point) -> Angle {
    angle_between(p3 - p2, p1 - p2)
}

/// Orientation of the ordered triple `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Three-point orientation predicate, collinear within `EPS`.
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if approx_zero(val) {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Arithmetic mean of a point set. Zero for an empty slice.
pub fn average(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::zeros();
    }
    let sum = points.iter().fold(Point::zeros(), |s, p| s + p);
    sum / points.len() as f64
}

/// Order points counter-clockwise around their centroid.
///
/// Tie-break: points collinear with the centroid are ordered by
/// proximity (closer first). The half-plane split on x keeps the
/// comparator a total order without computing angles.
pub fn order_ccw(points: &mut [Point]) {
    let c = average(points);
    points.sort_by(|a, b| {
        let (ax, ay) = (a.x - c.x, a.y - c.y);
        let (bx, by) = (b.x - c.x, b.y - c.y);
        if ax >= 0.0 && bx < 0.0 {
            return Ordering::Greater;
        }
        if ax < 0.0 && bx >= 0.0 {
            return Ordering::Less;
        }
        if ax == 0.0 && bx == 0.0 {
            // Both on the vertical through the centroid.
            if ay >= 0.0 || by >= 0.0 {
                return a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal);
            }
            return b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal);
        }
        let det = ax * by - bx * ay;
        if det < 0.0 {
            return Ordering::Greater;
        }
        if det > 0.0 {
            return Ordering::Less;
        }
        // Collinear with the centroid: closer point first.
        let d1 = ax * ax + ay * ay;
        let d2 = bx * bx + by * by;
        d1.partial_cmp(&d2).unwrap_or(Ordering::Equal)
    });
}

/// Quadratic `a x² + b x + c` with explicit discriminant handling.
///
/// A discriminant within `[-..0)` means no real roots; `>= 0` is accepted
/// as-is (tangency is geometrically valid, not an error).
#[derive(Clone, Copy, Debug)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Real roots `(r1, r2)` with `r1 <= r2`, or `None` when the
    /// discriminant is negative.
    pub fn roots(&self) -> Option<(f64, f64)> {
        let dis = self.discriminant();
        if dis < 0.0 {
            return None;
        }
        let sq = dis.sqrt();
        let a2 = 2.0 * self.a;
        let r1 = (-self.b - sq) / a2;
        let r2 = (-self.b + sq) / a2;
        if r1 <= r2 {
            Some((r1, r2))
        } else {
            Some((r2, r1))
        }
    }
}
