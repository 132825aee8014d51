//! Geometric entities.
//!
//! Purpose
//! - Value types for the kernel: infinite lines, rays, segments, circles,
//!   ellipses and polygons, plus a deterministic random-polygon sampler
//!   for tests and benchmarks.
//!
//! Conventions
//! - Constructors validate and return `Result`; accessors that can be
//!   undefined (vertical slope, self-intersecting area) return `Option`.
//! - Transformations come in pairs: a pure method returning a new shape
//!   and a `_mut` variant mutating in place.

mod circle;
mod ellipse;
mod line;
mod polygon;
pub mod rand;
mod ray;
mod segment;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use polygon::Polygon;
pub use ray::Ray;
pub use segment::Segment;

#[cfg(test)]
mod tests;
