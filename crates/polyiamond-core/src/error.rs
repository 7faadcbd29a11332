//! Error type for lattice operations.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Every failure here is a precondition violation spotted at the call that
//! made it: a bad axis label, an angle that isn't a lattice rotation, a
//! triangle count that can't be enumerated. Nothing is retried, so the
//! error just names the offending value and goes back to the caller via `?`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// An axis label outside `{x, y, z}`.
    #[error("invalid axis '{0}': expected one of x, y, z")]
    InvalidAxis(String),

    /// A rotation that is not one of 60, 120, 180, 240, 300 degrees.
    #[error("invalid rotation angle {0}: expected 60, 120, 180, 240 or 300 degrees")]
    InvalidAngle(i32),

    /// A target size that is not a positive integer.
    #[error("invalid triangle count '{0}': expected a positive integer")]
    InvalidTriangleCount(String),

    /// Coordinates whose sum is not +1 or -1.
    #[error("({x}, {y}, {z}) is not a lattice triangle: coordinates must sum to +1 or -1")]
    InvalidTriangle { x: i32, y: i32, z: i32 },
}

pub type Result<T> = std::result::Result<T, LatticeError>;
