//! Infinite line in direction-point form.
//!
//! The parametric form `p(t) = point + t * dir` is the primary
//! representation; the slope-intercept view is derived on demand and
//! memoized. A vertical line has no slope and no y-intercept, so both
//! accessors return `Option`.

use crate::cache::{fingerprint_scalars, Memo};
use crate::error::{Error, Result};
use crate::geom::{angle_between, approx_zero, cross, unit_or_zero, Angle};
use crate::{Point, Vec2};

#[derive(Clone, Debug)]
pub struct Line {
    dir: Vec2<f64>,
    point: Point,
    slope: Memo<Option<f64>>,
    intercept: Memo<Option<f64>>,
}

impl Line {
    /// Line through `point` in direction `dir` (normalized on entry).
    pub fn new(dir: Vec2<f64>, point: Point) -> Result<Self> {
        if !dir.x.is_finite() || !dir.y.is_finite() || !point.x.is_finite() || !point.y.is_finite()
        {
            return Err(Error::NonFiniteCoordinate);
        }
        let unit = unit_or_zero(dir);
        if unit == Vec2::zeros() {
            return Err(Error::ZeroDirection);
        }
        Ok(Self::new_unchecked(unit, point))
    }

    pub(crate) fn new_unchecked(unit_dir: Vec2<f64>, point: Point) -> Self {
        Self {
            dir: unit_dir,
            point,
            slope: Memo::new(),
            intercept: Memo::new(),
        }
    }

    /// Line through two distinct points, directed from `p1` to `p2`.
    pub fn from_points(p1: Point, p2: Point) -> Result<Self> {
        Self::new(p2 - p1, p1)
    }

    /// Line from slope-intercept form `y(x) = m x + b`.
    pub fn from_slope_intercept(m: f64, b: f64) -> Result<Self> {
        Self::from_points(Point::new(0.0, b), Point::new(1.0, m + b))
    }

    #[inline]
    pub fn dir(&self) -> Vec2<f64> {
        self.dir
    }

    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }

    fn fingerprint(&self) -> u64 {
        fingerprint_scalars(&[self.dir.x, self.dir.y, self.point.x, self.point.y])
    }

    /// Slope `dy/dx`; `None` for a vertical line.
    pub fn slope(&self) -> Option<f64> {
        self.slope.get_or_compute(self.fingerprint(), || {
            if self.dir.x == 0.0 {
                None
            } else {
                Some(self.dir.y / self.dir.x)
            }
        })
    }

    /// Intersection with the y-axis; `None` for a vertical line.
    pub fn y_intercept(&self) -> Option<f64> {
        self.intercept
            .get_or_compute(self.fingerprint(), || self.y_at(0.0))
    }

    /// Is `p` on the line (within tolerance)?
    pub fn point_on(&self, p: Point) -> bool {
        approx_zero(cross(self.dir, p - self.point))
    }

    /// Angle of the direction vector, wrapped into `(-π, π]`.
    pub fn angle(&self) -> Angle {
        angle_between(Vec2::new(1.0, 0.0), self.dir).normalized()
    }

    /// Parameter at which the line reaches `x`; `None` if vertical.
    pub fn t_at_x(&self, x: f64) -> Option<f64> {
        if self.dir.x == 0.0 {
            return None;
        }
        Some((x - self.point.x) / self.dir.x)
    }

    /// Parameter at which the line reaches `y`; `None` if horizontal.
    pub fn t_at_y(&self, y: f64) -> Option<f64> {
        if self.dir.y == 0.0 {
            return None;
        }
        Some((y - self.point.y) / self.dir.y)
    }

    /// The x value where the line has the given y value.
    pub fn x_at(&self, y: f64) -> Option<f64> {
        let t = self.t_at_y(y)?;
        Some(self.point.x + t * self.dir.x)
    }

    /// The y value where the line has the given x value.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        let t = self.t_at_x(x)?;
        Some(self.point.y + t * self.dir.y)
    }

    /// Point on the line at the given x value; `None` if vertical.
    pub fn point_at_x(&self, x: f64) -> Option<Point> {
        Some(Point::new(x, self.y_at(x)?))
    }

    /// Point at parameter `t` of the parametric form.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.point + self.dir * t
    }
}
