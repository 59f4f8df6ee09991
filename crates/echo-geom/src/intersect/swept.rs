// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Swept (continuous) collision.
//!
//! Every test returns the [`Interval`] of times during which the shapes are
//! in contact, for motion `position(t) = start + t * velocity`. Times are not
//! clamped: a negative `enter` means contact began before `t = 0`, and shapes
//! that never separate report infinite bounds. Callers decide which part of
//! the interval matters to them.

use echo_math::{Vec3, EPSILON};

use crate::intersect::halfspace::{clip_ray, Interval};
use crate::types::aabb::Aabb;
use crate::types::frustum::FrustumPlanes;
use crate::types::plane::Plane;

/// Sphere moving against a normalized plane.
///
/// Contact is `|distance| <= radius`. A sphere moving parallel to the plane
/// is either always in contact (unbounded interval) or never (`None`).
pub fn swept_sphere_plane(
    center: &Vec3,
    radius: f32,
    velocity: &Vec3,
    plane: &Plane,
) -> Option<Interval> {
    let d0 = plane.dot_coord(center);
    let dn = plane.dot_normal(velocity);
    if dn.abs() <= EPSILON {
        return (d0.abs() <= radius).then_some(Interval::UNBOUNDED);
    }
    let t1 = (radius - d0) / dn;
    let t2 = (-radius - d0) / dn;
    Some(Interval {
        enter: t1.min(t2),
        exit: t1.max(t2),
    })
}

/// Two moving spheres.
pub fn swept_sphere_sphere(
    c1: &Vec3,
    r1: f32,
    v1: &Vec3,
    c2: &Vec3,
    r2: f32,
    v2: &Vec3,
) -> Option<Interval> {
    let s = c1.sub(c2);
    let v = v1.sub(v2);
    let r = r1 + r2;
    let a = v.length_squared();
    let c = s.length_squared() - r * r;
    if a <= EPSILON {
        return (c <= 0.0).then_some(Interval::UNBOUNDED);
    }
    let b = s.dot(&v);
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    Some(Interval {
        enter: (-b - root) / a,
        exit: (-b + root) / a,
    })
}

/// Sphere moving through a frustum.
///
/// Clips the center's path against the planes pushed out by `radius`. Near
/// the frustum's edges this bound is wider than the true swept contact.
pub fn swept_sphere_frustum(
    center: &Vec3,
    radius: f32,
    velocity: &Vec3,
    frustum: &FrustumPlanes,
) -> Option<Interval> {
    clip_ray(frustum.planes(), center, velocity, radius, Interval::UNBOUNDED)
}

/// Sphere moving against a static box.
///
/// Clips the center's path against the box grown by `radius` on every
/// face; as with [`swept_sphere_frustum`], corners are treated as square.
pub fn swept_sphere_aabb(
    center: &Vec3,
    radius: f32,
    velocity: &Vec3,
    aabb: &Aabb,
) -> Option<Interval> {
    let sphere_box = Aabb::from_center_half_extents(*center, radius, radius, radius);
    swept_aabb_aabb(aabb, &Vec3::ZERO, &sphere_box, velocity)
}

/// Two moving boxes, per-axis slab overlap of `b` relative to `a`.
pub fn swept_aabb_aabb(a: &Aabb, va: &Vec3, b: &Aabb, vb: &Vec3) -> Option<Interval> {
    let v = vb.sub(va);
    let mut iv = Interval::UNBOUNDED;
    for axis in 0..3 {
        let a_min = a.min().component(axis);
        let a_max = a.max().component(axis);
        let b_min = b.min().component(axis);
        let b_max = b.max().component(axis);
        let speed = v.component(axis);
        if speed.abs() <= EPSILON {
            if b_max < a_min || b_min > a_max {
                return None;
            }
            continue;
        }
        let t1 = (a_min - b_max) / speed;
        let t2 = (a_max - b_min) / speed;
        iv.enter = iv.enter.max(t1.min(t2));
        iv.exit = iv.exit.min(t1.max(t2));
        if iv.is_empty() {
            return None;
        }
    }
    Some(iv)
}
