// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-math: float32 linear algebra for Echo's geometry toolkit.
//!
//! This crate provides:
//! - Scalar helpers (`clamp`, `lerp`, epsilon comparisons, polynomial roots).
//! - Vectors (`Vec2`, `Vec3`, `Vec4`) and integer points (`Point2i`).
//! - Matrices (`Mat3`, `Mat4`) and 2D affine transforms (`Affine2d`).
//! - Quaternions (`Quat`) with slerp/squad/log/exp and Euler conversions.
//! - A seeded pseudo-random generator (`Prng`) behind the `UniformSource` seam.
//!
//! Conventions:
//! - Row vectors: a point is transformed as `v' = v * M`, so `A * B` applies
//!   `A` first and `B` second. Quaternion multiplication follows the same
//!   left-to-right order (see [`Quat::multiply`]).
//! - Every type is a small `Copy` value; nothing allocates or holds state
//!   except `Prng`, which callers own and pass explicitly.
//! - `f32` throughout; degeneracy checks use [`EPSILON`].

mod affine2d;
mod mat3;
mod mat4;
mod point2i;
mod prng;
mod quat;
/// Scalar helpers shared by every vector and geometry routine.
pub mod scalar;
mod vec2;
mod vec3;
mod vec4;

pub use affine2d::Affine2d;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use point2i::Point2i;
pub use prng::{Prng, UniformSource};
pub use quat::{Quat, GIMBAL_LOCK_THRESHOLD, SLERP_LERP_THRESHOLD};
pub use scalar::{clamp, deg_to_rad, lerp, rad_to_deg, EPSILON};
pub use vec2::{orient_2d, Vec2};
pub use vec3::Vec3;
pub use vec4::Vec4;
