// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Bounded primitives (rectangles, boxes, planes, lines, frusta).
//!
//! Notes:
//! - Overlap and containment are inclusive on faces and edges.
//! - Spheres, capsules, cones, rays, segments and triangles are not types;
//!   the query functions take their parts as plain parameters.
//! - Half-spaces face inward: a point is inside when its signed distance is
//!   non-negative.

#[doc = "Axis-aligned bounding boxes."]
pub mod aabb;
#[doc = "View frusta as planes, corners, or camera radar."]
pub mod frustum;
#[doc = "2D lines `a*x + b*y + c = 0`."]
pub mod line2d;
#[doc = "Oriented bounding boxes."]
pub mod obb;
#[doc = "Planes `a*x + b*y + c*z + d = 0` and side classification."]
pub mod plane;
#[doc = "Float and integer 2D rectangles."]
pub mod rect;
