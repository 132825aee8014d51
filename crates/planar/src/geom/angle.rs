//! Plane angle in radians.
//!
//! Values are not stored normalized; `normalized` wraps into `(-π, π]`
//! on demand and `positive` into `[0, 2π)`.

use std::f64::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const PI: f64 = PI;
    pub const TAU: f64 = TAU;
    /// Half of π.
    pub const SPI: f64 = PI / 2.0;
    /// Quarter of π.
    pub const QPI: f64 = PI / 4.0;

    #[inline]
    pub fn new(radians: f64) -> Self {
        Self { radians }
    }

    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.radians
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// Wrap into `(-π, π]`.
    pub fn normalized(self) -> Self {
        let mut x = self.radians;
        while x <= -PI {
            x += TAU;
        }
        while x > PI {
            x -= TAU;
        }
        Self { radians: x }
    }

    /// Wrap into `[0, 2π)`.
    pub fn positive(self) -> f64 {
        let v = self.radians % TAU;
        if v < 0.0 {
            v + TAU
        } else {
            v
        }
    }

    #[inline]
    pub fn inverted(self) -> Self {
        Self {
            radians: -self.radians,
        }
    }

    #[inline]
    pub fn plus(self, radians: f64) -> Self {
        Self {
            radians: self.radians + radians,
        }
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.radians.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.radians.cos()
    }

    #[inline]
    pub fn tan(self) -> f64 {
        self.radians.tan()
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Self { radians }
    }
}
