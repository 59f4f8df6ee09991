// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![doc = r"Geometry for Echo.

This crate provides:
- Bounded primitives: `Rect`/`RectI`, `Aabb`, `Obb`, `Plane`, `Line2d` and
  the three frustum forms (`FrustumPlanes`, `FrustumPoints`, `FrustumRadar`).
- An intersection engine: containment, closest points and distances, ray and
  segment casts, static overlap, triangle tests, frustum culling and swept
  (continuous) collision.
- Bounding volumes and point-set statistics: boxes, spheres, OBB fitting via
  covariance and Jacobi eigen-decomposition, 2D convex hull.
- Catmull-Rom and Bézier curves with arc-length parametrization.
- Random sampling with an explicitly passed generator.

Design notes:
- Row vectors (`v' = v * M`) and inward-facing half-spaces throughout.
- Stateless: every query is a pure function; the only shared data is a
  read-only Poisson-disc table built once on first use.
- Float32 throughout; degeneracy yields `None`/`false`, and only checked
  constructors and point-set builders return [`GeomError`].
- Diagnostics go through `tracing`; the crate never installs a subscriber.
"]

/// Bounding volumes, centroids, covariance and the convex hull.
pub mod bounds;
/// Catmull-Rom and Bézier curves.
pub mod curve;
/// Error type for checked constructors and point-set builders.
pub mod error;
/// Intersection, containment and distance queries.
pub mod intersect;
/// Random points, directions and rotations.
pub mod sampling;
/// Foundational geometric types.
pub mod types;

pub use bounds::{SymmetricEigen, JACOBI_MAX_ITERATIONS};
pub use curve::{
    ControlPoint, CubicBezier, QuadraticBezier, ARC_LENGTH_EPSILON, ARC_LENGTH_MAX_DEPTH,
};
pub use error::{GeomError, GeomResult};
pub use intersect::halfspace::{HalfSpace, Interval};
pub use intersect::overlap::OBB_SAT_EPSILON;
pub use types::aabb::Aabb;
pub use types::frustum::{Frustum, FrustumPlanes, FrustumPoints, FrustumRadar};
pub use types::line2d::Line2d;
pub use types::obb::Obb;
pub use types::plane::{Plane, PlaneSide};
pub use types::rect::{Rect, RectI};
