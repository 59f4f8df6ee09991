// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Ray and segment queries.
//!
//! A ray is `origin + t * dir` for `t >= 0`; a segment `a`–`b` is the same
//! with `dir = b - a` and `t ∈ [0, 1]`. `dir` need not be unit length; every
//! returned `t` is in units of `dir`. Hits report the entry parameter, and an
//! origin already inside a solid reports `t = 0`.

use echo_math::{Vec2, Vec3, EPSILON};

use crate::intersect::halfspace::{clip_ray, Interval};
use crate::intersect::point::point_in_capsule;
use crate::types::aabb::Aabb;
use crate::types::frustum::FrustumPlanes;
use crate::types::line2d::Line2d;
use crate::types::obb::Obb;
use crate::types::plane::Plane;
use crate::types::rect::Rect;

/// Möller–Trumbore hit: parameter plus barycentric `(u, v)` of `b` and `c`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleHit {
    /// Ray parameter of the hit.
    pub t: f32,
    /// Weight of vertex `b`.
    pub u: f32,
    /// Weight of vertex `c`.
    pub v: f32,
}

impl TriangleHit {
    /// Barycentric weight of vertex `a`.
    pub fn w(&self) -> f32 {
        1.0 - self.u - self.v
    }
}

/// Ray vs plane; `None` when parallel or the plane is behind the origin.
pub fn ray_to_plane(origin: &Vec3, dir: &Vec3, plane: &Plane) -> Option<f32> {
    let dn = plane.dot_normal(dir);
    if dn.abs() <= EPSILON {
        return None;
    }
    let t = -plane.dot_coord(origin) / dn;
    (t >= 0.0).then_some(t)
}

/// Segment vs plane; `t ∈ [0, 1]`.
pub fn segment_to_plane(a: &Vec3, b: &Vec3, plane: &Plane) -> Option<f32> {
    ray_to_plane(a, &b.sub(a), plane).filter(|t| *t <= 1.0)
}

/// Slab test shared by the box queries. Returns the entry parameter clamped
/// at zero, or `None` when the slabs do not overlap within `[0, t_max]`.
fn slab<const N: usize>(
    origin: [f32; N],
    dir: [f32; N],
    min: [f32; N],
    max: [f32; N],
    t_max: f32,
) -> Option<f32> {
    let mut t_min = 0.0_f32;
    let mut t_max = t_max;
    for (((&o, &d), &lo), &hi) in origin.iter().zip(&dir).zip(&min).zip(&max) {
        if d.abs() <= EPSILON {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let t1 = (lo - o) * inv;
        let t2 = (hi - o) * inv;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
        if t_min > t_max {
            return None;
        }
    }
    Some(t_min)
}

/// Ray vs axis-aligned box (slab method).
pub fn ray_to_aabb(origin: &Vec3, dir: &Vec3, aabb: &Aabb) -> Option<f32> {
    slab(
        origin.to_array(),
        dir.to_array(),
        aabb.min().to_array(),
        aabb.max().to_array(),
        f32::INFINITY,
    )
}

/// Segment vs axis-aligned box.
pub fn segment_to_aabb(a: &Vec3, b: &Vec3, aabb: &Aabb) -> Option<f32> {
    slab(
        a.to_array(),
        b.sub(a).to_array(),
        aabb.min().to_array(),
        aabb.max().to_array(),
        1.0,
    )
}

/// Ray vs oriented box: the slab test in box-local coordinates.
pub fn ray_to_obb(origin: &Vec3, dir: &Vec3, obb: &Obb) -> Option<f32> {
    let local_origin = obb.to_local(origin);
    let axes = obb.axes();
    let local_dir = Vec3::new(dir.dot(&axes[0]), dir.dot(&axes[1]), dir.dot(&axes[2]));
    let e = obb.half_extents();
    slab(
        local_origin.to_array(),
        local_dir.to_array(),
        e.scale(-1.0).to_array(),
        e.to_array(),
        f32::INFINITY,
    )
}

/// Ray vs sphere.
///
/// * Origin inside (or on) the sphere: `Some(0.0)`.
/// * Otherwise the smaller root `(-b - √disc) / a`. When the sphere lies
///   behind the origin this is negative and is still returned, so callers
///   must check the sign.
/// * No real root (or a zero direction): `None`.
pub fn ray_to_sphere(origin: &Vec3, dir: &Vec3, center: &Vec3, radius: f32) -> Option<f32> {
    let m = origin.sub(center);
    let c = m.length_squared() - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }
    let a = dir.length_squared();
    if a <= EPSILON {
        return None;
    }
    let b = m.dot(dir);
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    Some((-b - disc.sqrt()) / a)
}

/// Segment vs sphere; only entries with `t ∈ [0, 1]` count.
pub fn segment_to_sphere(a: &Vec3, b: &Vec3, center: &Vec3, radius: f32) -> Option<f32> {
    ray_to_sphere(a, &b.sub(a), center, radius).filter(|t| (0.0..=1.0).contains(t))
}

/// Ray vs triangle (Möller–Trumbore).
///
/// With `cull_backface` only triangles whose `(b - a) × (c - a)` normal faces
/// the ray are hit. Near-parallel rays (`|det| < EPSILON`) miss.
pub fn ray_to_triangle(
    origin: &Vec3,
    dir: &Vec3,
    a: &Vec3,
    b: &Vec3,
    c: &Vec3,
    cull_backface: bool,
) -> Option<TriangleHit> {
    let e1 = b.sub(a);
    let e2 = c.sub(a);
    let pvec = dir.cross(&e2);
    let det = e1.dot(&pvec);
    if cull_backface {
        if det < EPSILON {
            return None;
        }
    } else if det.abs() < EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;
    let tvec = origin.sub(a);
    let u = tvec.dot(&pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let qvec = tvec.cross(&e1);
    let v = dir.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(&qvec) * inv_det;
    (t >= 0.0).then_some(TriangleHit { t, u, v })
}

/// Segment vs triangle; `t ∈ [0, 1]`.
pub fn segment_to_triangle(
    p: &Vec3,
    q: &Vec3,
    a: &Vec3,
    b: &Vec3,
    c: &Vec3,
    cull_backface: bool,
) -> Option<TriangleHit> {
    ray_to_triangle(p, &q.sub(p), a, b, c, cull_backface).filter(|hit| hit.t <= 1.0)
}

/// Ray vs capsule (segment `a`–`b` swept by `radius`).
///
/// Takes the earliest of the lateral cylinder hit (restricted to the
/// segment's extent) and the two end-cap sphere entries.
pub fn ray_to_capsule(origin: &Vec3, dir: &Vec3, a: &Vec3, b: &Vec3, radius: f32) -> Option<f32> {
    if point_in_capsule(origin, a, b, radius) {
        return Some(0.0);
    }
    let d = b.sub(a);
    let m = origin.sub(a);
    let md = m.dot(&d);
    let nd = dir.dot(&d);
    let dd = d.length_squared();
    let nn = dir.length_squared();
    let mn = m.dot(dir);

    let mut best: Option<f32> = None;
    let mut consider = |t: f32| {
        if t >= 0.0 && best.is_none_or(|cur| t < cur) {
            best = Some(t);
        }
    };

    let qa = dd * nn - nd * nd;
    if qa.abs() > EPSILON {
        let k = m.length_squared() - radius * radius;
        let qc = dd * k - md * md;
        let qb = dd * mn - nd * md;
        let disc = qb * qb - qa * qc;
        if disc >= 0.0 {
            let t = (-qb - disc.sqrt()) / qa;
            let axial = md + t * nd;
            if (0.0..=dd).contains(&axial) {
                consider(t);
            }
        }
    }
    for cap in [a, b] {
        if let Some(t) = ray_to_sphere(origin, dir, cap, radius) {
            consider(t);
        }
    }
    best
}

/// Ray vs convex polyhedron given by inward-facing planes.
///
/// Returns the entry parameter (`0` when the origin is inside).
pub fn ray_to_polyhedron(origin: &Vec3, dir: &Vec3, planes: &[Plane]) -> Option<f32> {
    clip_ray(planes, origin, dir, 0.0, Interval::RAY).map(|iv| iv.enter)
}

/// Segment vs convex polyhedron; `t ∈ [0, 1]`.
pub fn segment_to_polyhedron(a: &Vec3, b: &Vec3, planes: &[Plane]) -> Option<f32> {
    clip_ray(planes, a, &b.sub(a), 0.0, Interval::SEGMENT).map(|iv| iv.enter)
}

/// Ray vs frustum.
pub fn ray_to_frustum(origin: &Vec3, dir: &Vec3, frustum: &FrustumPlanes) -> Option<f32> {
    ray_to_polyhedron(origin, dir, frustum.planes())
}

/// 2D ray vs convex polygon given by inward-facing edge lines.
pub fn ray_to_convex_polygon(origin: &Vec2, dir: &Vec2, edges: &[Line2d]) -> Option<f32> {
    clip_ray(edges, origin, dir, 0.0, Interval::RAY).map(|iv| iv.enter)
}

/// 2D ray vs rectangle (slab method).
pub fn ray_to_rect(origin: &Vec2, dir: &Vec2, rect: &Rect) -> Option<f32> {
    slab(
        origin.to_array(),
        dir.to_array(),
        rect.min().to_array(),
        rect.max().to_array(),
        f32::INFINITY,
    )
}
