// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Frustum containment and overlap.
//!
//! The `*_fast` variants only test the six planes. They never reject a shape
//! that overlaps, but accept some shapes near the frustum's edges and corners
//! that do not. The exact variants run the fast test first and then look for
//! a separating axis among the shape's own axes or the directions from the
//! shape to the frustum corners and center.

use echo_math::Vec3;

use crate::intersect::halfspace::contains;
use crate::types::aabb::Aabb;
use crate::types::frustum::{Frustum, FrustumPlanes, FrustumPoints, FrustumRadar};
use crate::types::obb::Obb;

/// `true` when `p` is inside or on the frustum.
pub fn point_in_frustum(p: &Vec3, frustum: &FrustumPlanes) -> bool {
    contains(frustum.planes(), p, 0.0)
}

/// Plane-only sphere test (conservative).
pub fn sphere_in_frustum_fast(center: &Vec3, radius: f32, frustum: &FrustumPlanes) -> bool {
    contains(frustum.planes(), center, radius)
}

/// `true` when every corner projects beyond `radius` along `axis` from `center`.
fn points_beyond(points: &FrustumPoints, center: &Vec3, axis: &Vec3, radius: f32) -> bool {
    points.points().iter().all(|p| p.sub(center).dot(axis) > radius)
}

/// Sphere vs frustum with separating-axis refinement.
pub fn sphere_in_frustum(center: &Vec3, radius: f32, frustum: &Frustum) -> bool {
    if !sphere_in_frustum_fast(center, radius, &frustum.planes) {
        return false;
    }
    let points = &frustum.points;
    let targets = points.points().iter().copied().chain([points.center()]);
    for target in targets {
        if let Some(axis) = target.sub(center).try_normalize() {
            if points_beyond(points, center, &axis, radius) {
                return false;
            }
        }
    }
    true
}

/// Plane-only box test using the corner furthest along each plane normal.
pub fn aabb_in_frustum_fast(aabb: &Aabb, frustum: &FrustumPlanes) -> bool {
    let min = aabb.min();
    let max = aabb.max();
    frustum.planes().iter().all(|plane| {
        let n = plane.normal();
        let p_vertex = Vec3::new(
            if n.x() >= 0.0 { max.x() } else { min.x() },
            if n.y() >= 0.0 { max.y() } else { min.y() },
            if n.z() >= 0.0 { max.z() } else { min.z() },
        );
        plane.dot_coord(&p_vertex) >= 0.0
    })
}

/// Box vs frustum with refinement along the box axes.
pub fn aabb_in_frustum(aabb: &Aabb, frustum: &Frustum) -> bool {
    if !aabb_in_frustum_fast(aabb, &frustum.planes) {
        return false;
    }
    let pts = frustum.points.points();
    (0..3).all(|axis| {
        let lo = aabb.min().component(axis);
        let hi = aabb.max().component(axis);
        !(pts.iter().all(|p| p.component(axis) > hi) || pts.iter().all(|p| p.component(axis) < lo))
    })
}

/// Plane-only oriented box test.
pub fn obb_in_frustum_fast(obb: &Obb, frustum: &FrustumPlanes) -> bool {
    frustum.planes().iter().all(|plane| {
        plane.dot_coord(&obb.center()) + obb.projected_radius(&plane.normal()) >= 0.0
    })
}

/// Oriented box vs frustum with refinement along the box axes.
pub fn obb_in_frustum(obb: &Obb, frustum: &Frustum) -> bool {
    if !obb_in_frustum_fast(obb, &frustum.planes) {
        return false;
    }
    let local = frustum.points.points().map(|p| obb.to_local(&p));
    let e = obb.half_extents();
    (0..3).all(|axis| {
        let h = e.component(axis);
        let above = local.iter().all(|p| p.component(axis) > h);
        let below = local.iter().all(|p| p.component(axis) < -h);
        !(above || below)
    })
}

/// Frustum vs frustum: the planes of each against the corners of the other.
///
/// Exact for separations along a face normal; edge-edge separations are not
/// detected, so the test may report overlap for frusta that only come close.
pub fn frustum_to_frustum(a: &Frustum, b: &Frustum) -> bool {
    let separated = |planes: &FrustumPlanes, points: &FrustumPoints| {
        planes
            .planes()
            .iter()
            .any(|plane| points.points().iter().all(|p| plane.dot_coord(p) < 0.0))
    };
    !separated(&a.planes, &b.points) && !separated(&b.planes, &a.points)
}

/// Radar point test: depth against near/far, then the side bounds scaled by
/// depth.
pub fn point_in_radar(p: &Vec3, radar: &FrustumRadar) -> bool {
    let c = radar.to_camera(p);
    let depth = c.z();
    if depth < radar.near() || depth > radar.far() {
        return false;
    }
    c.y().abs() <= depth * radar.tan_y() && c.x().abs() <= depth * radar.tan_x()
}

/// Radar sphere test; side bounds are widened by `radius / cos(half_angle)`.
pub fn sphere_in_radar(center: &Vec3, radius: f32, radar: &FrustumRadar) -> bool {
    let c = radar.to_camera(center);
    let depth = c.z();
    if depth < radar.near() - radius || depth > radar.far() + radius {
        return false;
    }
    let limit_y = depth * radar.tan_y() + radius * radar.sphere_factor_y();
    let limit_x = depth * radar.tan_x() + radius * radar.sphere_factor_x();
    c.y().abs() <= limit_y && c.x().abs() <= limit_x
}
