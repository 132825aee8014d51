//! Crate error type.
//!
//! Only construction failures and merge-reconstruction failures are
//! errors. "No intersection" and undefined-result conditions are ordinary
//! return values (`Hit::None`, `Option::None`) the caller checks.

/// Fatal conditions: invalid construction input, or a broken internal
/// invariant during polygon reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("line segment endpoints must be distinct")]
    DegenerateSegment,
    #[error("a polygon requires at least 3 vertices, got {0}")]
    InsufficientVertices(usize),
    #[error("coordinates must be finite")]
    NonFiniteCoordinate,
    #[error("direction vector must be non-zero")]
    ZeroDirection,
    #[error("radius must be finite and positive")]
    InvalidRadius,
    #[error("boundary-edge walk could not be continued; polygon reconstruction failed")]
    Reconstruction,
}

pub type Result<T> = std::result::Result<T, Error>;
