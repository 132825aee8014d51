//! 2-D computational-geometry kernel.
//!
//! Purpose
//! - Answer intersection, containment, decomposition and combination
//!   queries over points, lines, rays, segments, circles, ellipses and
//!   simple polygons.
//! - Cheap axis-aligned bounding-box prefilters short-circuit exact
//!   solvers; polygon booleans go through triangulate-and-merge.
//!
//! Design notes
//! - Floating point with a fixed absolute tolerance (`geom::EPS`), no
//!   exact arithmetic. Undefined results (vertical slope, centroid of a
//!   self-intersecting polygon) are `None`, never errors; construction
//!   and reconstruction failures are `Error`.
//! - Shapes own per-instance memoization of derived properties keyed by a
//!   structural fingerprint; mutation invalidates implicitly.

pub mod cache;
pub mod error;
pub mod geom;
pub mod intersect;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use nalgebra::Vector2 as Vec2;

/// A location in the plane. Same representation as a displacement; the
/// distinction is carried by usage, not by type.
pub type Point = Vec2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geom::{Angle, BoundingBox, Orientation, EPS};
    pub use crate::intersect::{Hit, Shape};
    pub use crate::shapes::{Circle, Ellipse, Line, Polygon, Ray, Segment};
    pub use crate::{Point, Vec2};
}
