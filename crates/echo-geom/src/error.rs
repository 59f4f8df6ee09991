// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Errors raised by checked constructors and point-set builders.
//!
//! Geometric degeneracy inside a query (parallel planes, zero-area triangles)
//! is never an error: those functions return `None` or `false`.

use thiserror::Error;

/// Failures when building a primitive from caller-supplied data.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeomError {
    /// A min/max pair has a minimum component above its maximum.
    #[error("inverted bounds: min exceeds max on axis {axis}")]
    InvertedBounds {
        /// Offending axis index (`0 = x`, `1 = y`, `2 = z`).
        axis: usize,
    },
    /// OBB axes are not unit length or not mutually perpendicular.
    #[error("oriented box axes are not orthonormal")]
    NonOrthonormalAxes,
    /// A half-extent is negative.
    #[error("negative half-extent {value} on axis {axis}")]
    NegativeExtent {
        /// Offending axis index.
        axis: usize,
        /// The negative value supplied.
        value: f32,
    },
    /// A plane or line normal has (near) zero length.
    #[error("normal has zero length")]
    DegenerateNormal,
    /// A bounding volume was requested for zero points.
    #[error("point set is empty")]
    EmptyPointSet,
    /// An algorithm needs more distinct points than were supplied.
    #[error("need at least {required} distinct points, got {actual}")]
    InsufficientPoints {
        /// Minimum accepted count.
        required: usize,
        /// Count actually available.
        actual: usize,
    },
}

/// Convenience alias for geometry results.
pub type GeomResult<T> = Result<T, GeomError>;
