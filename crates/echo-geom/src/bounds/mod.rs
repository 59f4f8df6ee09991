// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Bounding volumes and point-set statistics.

/// Boxes, rectangles, spheres and circles enclosing point sets.
pub mod bounding;
/// 2D convex hull.
pub mod hull;
/// Centroids, covariance, Jacobi eigen-decomposition and OBB fitting.
pub mod stats;

pub use bounding::{
    aabb_from_points, aabb_from_sphere, bounding_circle, bounding_sphere, circle_from_rect,
    rect_from_points, sphere_from_aabb,
};
pub use hull::convex_hull_2d;
pub use stats::{
    centroid, centroid_2d, covariance, jacobi_eigen, obb_from_points, SymmetricEigen,
    JACOBI_MAX_ITERATIONS,
};
