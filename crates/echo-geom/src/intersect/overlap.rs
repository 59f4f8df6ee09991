// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Static shape-vs-shape tests and plane/line intersections.

use echo_math::{Vec2, Vec3, EPSILON};

use crate::intersect::point::{closest_point_on_segment, closest_points_segment_segment};
use crate::types::aabb::Aabb;
use crate::types::obb::Obb;
use crate::types::plane::{Plane, PlaneSide};
use crate::types::rect::Rect;

/// Added to every `|R_ij|` in [`obb_to_obb`] so that nearly parallel edge
/// pairs, whose cross product is close to zero, cannot hide an overlap.
pub const OBB_SAT_EPSILON: f32 = 1e-6;

/// Box vs box; inclusive on touching faces and symmetric in its arguments.
pub fn aabb_to_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

/// Rectangle vs rectangle; inclusive on touching edges.
pub fn rect_to_rect(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Sphere vs sphere.
pub fn sphere_to_sphere(c1: &Vec3, r1: f32, c2: &Vec3, r2: f32) -> bool {
    let r = r1 + r2;
    c1.distance_squared(c2) <= r * r
}

/// Circle vs circle.
pub fn circle_to_circle(c1: &Vec2, r1: f32, c2: &Vec2, r2: f32) -> bool {
    let r = r1 + r2;
    c1.distance_squared(c2) <= r * r
}

/// Circle vs rectangle.
pub fn circle_to_rect(center: &Vec2, radius: f32, rect: &Rect) -> bool {
    rect.closest_point(center).distance_squared(center) <= radius * radius
}

/// Sphere vs box (Arvo): squared distance from the center to the box.
pub fn sphere_to_aabb(center: &Vec3, radius: f32, aabb: &Aabb) -> bool {
    aabb.distance_squared_to_point(center) <= radius * radius
}

/// Sphere vs oriented box.
pub fn sphere_to_obb(center: &Vec3, radius: f32, obb: &Obb) -> bool {
    obb.distance_squared_to_point(center) <= radius * radius
}

/// Sphere vs normalized plane.
pub fn sphere_to_plane(center: &Vec3, radius: f32, plane: &Plane) -> PlaneSide {
    PlaneSide::from_distance_and_radius(plane.dot_coord(center), radius)
}

/// Box vs normalized plane.
pub fn aabb_to_plane(aabb: &Aabb, plane: &Plane) -> PlaneSide {
    aabb.classify(plane)
}

/// Oriented box vs normalized plane.
pub fn obb_to_plane(obb: &Obb, plane: &Plane) -> PlaneSide {
    obb.classify(plane)
}

/// Oriented box vs oriented box (separating axis theorem).
///
/// Tests the three face normals of each box and the nine edge-pair cross
/// products, all expressed in `a`'s frame. [`OBB_SAT_EPSILON`] pads the
/// rotation magnitudes.
pub fn obb_to_obb(a: &Obb, b: &Obb) -> bool {
    let au = a.axes();
    let bu = b.axes();
    let ae = a.half_extents().to_array();
    let be = b.half_extents().to_array();

    let r: [[f32; 3]; 3] = core::array::from_fn(|i| core::array::from_fn(|j| au[i].dot(&bu[j])));
    let abs_r: [[f32; 3]; 3] =
        core::array::from_fn(|i| core::array::from_fn(|j| r[i][j].abs() + OBB_SAT_EPSILON));
    let d = b.center().sub(&a.center());
    let t = [d.dot(&au[0]), d.dot(&au[1]), d.dot(&au[2])];

    for i in 0..3 {
        let ra = ae[i];
        let rb = be[0] * abs_r[i][0] + be[1] * abs_r[i][1] + be[2] * abs_r[i][2];
        if t[i].abs() > ra + rb {
            return false;
        }
    }

    for j in 0..3 {
        let ra = ae[0] * abs_r[0][j] + ae[1] * abs_r[1][j] + ae[2] * abs_r[2][j];
        let rb = be[j];
        let proj = t[0] * r[0][j] + t[1] * r[1][j] + t[2] * r[2][j];
        if proj.abs() > ra + rb {
            return false;
        }
    }

    for i in 0..3 {
        let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
        for j in 0..3 {
            let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
            let ra = ae[i1] * abs_r[i2][j] + ae[i2] * abs_r[i1][j];
            let rb = be[j1] * abs_r[i][j2] + be[j2] * abs_r[i][j1];
            let proj = t[i2] * r[i1][j] - t[i1] * r[i2][j];
            if proj.abs() > ra + rb {
                return false;
            }
        }
    }
    true
}

/// Box vs oriented box.
pub fn aabb_to_obb(aabb: &Aabb, obb: &Obb) -> bool {
    obb_to_obb(&Obb::from_aabb(aabb), obb)
}

/// Capsule (`a`–`b`, `cap_radius`) vs sphere.
pub fn capsule_to_sphere(a: &Vec3, b: &Vec3, cap_radius: f32, center: &Vec3, radius: f32) -> bool {
    let (q, _) = closest_point_on_segment(center, a, b);
    let r = cap_radius + radius;
    q.distance_squared(center) <= r * r
}

/// Capsule vs capsule.
pub fn capsule_to_capsule(a1: &Vec3, b1: &Vec3, r1: f32, a2: &Vec3, b2: &Vec3, r2: f32) -> bool {
    let r = r1 + r2;
    closest_points_segment_segment(a1, b1, a2, b2).distance_squared <= r * r
}

/// Sphere vs finite cone (tip `apex`, unit `axis`, `half_angle`, `height`).
///
/// The lateral test is exact for the infinite cone: the cone's tip is pulled
/// back by `radius / sin(half_angle)` so the sphere test reduces to a point
/// test, with a separate check for the region around the tip. The base cap is
/// tested against the sphere's extent along the axis only, so spheres just
/// past the rim of the base may be reported as overlapping.
pub fn sphere_to_cone(
    center: &Vec3,
    radius: f32,
    apex: &Vec3,
    axis: &Vec3,
    half_angle: f32,
    height: f32,
) -> bool {
    debug_assert!(axis.is_normalized(1e-3), "cone axis must be unit length");
    let axial = axis.dot(&center.sub(apex));
    if axial - radius > height {
        return false;
    }
    let (sin, cos) = half_angle.sin_cos();
    if sin <= EPSILON {
        return false;
    }
    let pulled_apex = apex.sub(&axis.scale(radius / sin));
    let d = center.sub(&pulled_apex);
    let e = axis.dot(&d);
    if e <= 0.0 || e * e < d.length_squared() * cos * cos {
        return false;
    }
    let d = center.sub(apex);
    let e = -axis.dot(&d);
    if e > 0.0 && e * e >= d.length_squared() * sin * sin {
        return d.length_squared() <= radius * radius;
    }
    true
}

/// Intersection point of 2D segments `p1`–`q1` and `p2`–`q2`.
///
/// Parallel (including collinear) segments report `None`.
pub fn segment_to_segment_2d(p1: &Vec2, q1: &Vec2, p2: &Vec2, q2: &Vec2) -> Option<Vec2> {
    let r = q1.sub(p1);
    let s = q2.sub(p2);
    let denom = r.perp_dot(&s);
    if denom.abs() <= EPSILON {
        return None;
    }
    let qp = p2.sub(p1);
    let t = qp.perp_dot(&s) / denom;
    let u = qp.perp_dot(&r) / denom;
    ((0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)).then(|| p1.add(&r.scale(t)))
}

/// Line of intersection of two planes as `(point, direction)`.
///
/// The direction is `n1 × n2` (not normalized); the point is the one on the
/// line closest to the origin when both planes are normalized. Parallel
/// planes report `None`.
pub fn plane_to_plane(p1: &Plane, p2: &Plane) -> Option<(Vec3, Vec3)> {
    let n1 = p1.normal();
    let n2 = p2.normal();
    let dir = n1.cross(&n2);
    let denom = dir.length_squared();
    if denom <= EPSILON {
        return None;
    }
    let point = n1
        .scale(p2.d())
        .sub(&n2.scale(p1.d()))
        .cross(&dir)
        .scale(1.0 / denom);
    Some((point, dir))
}

/// Common point of three planes, or `None` when any two are parallel or the
/// three share a line.
pub fn intersect_three_planes(p1: &Plane, p2: &Plane, p3: &Plane) -> Option<Vec3> {
    let n1 = p1.normal();
    let n2 = p2.normal();
    let n3 = p3.normal();
    let u = n2.cross(&n3);
    let denom = n1.dot(&u);
    if denom.abs() <= EPSILON {
        return None;
    }
    let v = n3.scale(p2.d()).sub(&n2.scale(p3.d()));
    Some(u.scale(-p1.d()).add(&n1.cross(&v)).scale(1.0 / denom))
}
