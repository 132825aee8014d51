//! Half-infinite line anchored at an origin.

use crate::error::Result;
use crate::shapes::Line;
use crate::{Point, Vec2};

/// A `Line` restricted to `t >= 0` from its anchor point.
#[derive(Clone, Debug)]
pub struct Ray {
    line: Line,
}

impl Ray {
    pub fn new(dir: Vec2<f64>, origin: Point) -> Result<Self> {
        Ok(Self {
            line: Line::new(dir, origin)?,
        })
    }

    pub fn from_points(origin: Point, through: Point) -> Result<Self> {
        Ok(Self {
            line: Line::from_points(origin, through)?,
        })
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.line.point()
    }

    #[inline]
    pub fn dir(&self) -> Vec2<f64> {
        self.line.dir()
    }

    /// The carrier line through the origin.
    #[inline]
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Is `p` behind the ray's origin?
    pub fn is_behind(&self, p: Point) -> bool {
        self.dir().dot(&(p - self.origin())) < 0.0
    }

    /// The x value where the ray has the given y value. `None` when the
    /// ray never reaches that y, including when the matching point on
    /// the carrier line lies behind the origin.
    pub fn x_at(&self, y: f64) -> Option<f64> {
        if self.dir().y == 0.0 {
            if y == self.origin().y {
                return Some(self.origin().x);
            }
            return None;
        }
        let x = self.line.x_at(y)?;
        if self.is_behind(Point::new(x, y)) {
            return None;
        }
        Some(x)
    }

    /// The y value where the ray has the given x value; see `x_at`.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        if self.dir().x == 0.0 {
            if x == self.origin().x {
                return Some(self.origin().y);
            }
            return None;
        }
        let y = self.line.y_at(x)?;
        if self.is_behind(Point::new(x, y)) {
            return None;
        }
        Some(y)
    }

    /// Proximity of the ray's heading to `p`, in `[-1, 1]`.
    pub fn proximity_to_point(&self, p: Point) -> f64 {
        let u = p - self.origin();
        self.dir().dot(&u) / u.norm()
    }
}
