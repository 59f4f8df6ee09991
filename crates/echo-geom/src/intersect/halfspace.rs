// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Ray clipping against a convex set of half-spaces.
//!
//! This is the one routine behind ray-vs-polyhedron, ray-vs-frustum,
//! ray-vs-convex-polygon and the swept sphere-vs-frustum test. Each
//! half-space shrinks the parametric interval `[enter, exit]`; the ray misses
//! as soon as the interval empties.

use echo_math::{Vec2, Vec3, EPSILON};

use crate::types::line2d::Line2d;
use crate::types::plane::Plane;

/// Boundary of an inward-facing half-space.
///
/// A point is inside when [`HalfSpace::signed_distance`] is non-negative.
pub trait HalfSpace {
    /// Point/vector type of the ambient space.
    type Point;

    /// Signed distance (scaled by the normal length) of `p`.
    fn signed_distance(&self, p: &Self::Point) -> f32;

    /// Rate of change of the signed distance along `dir`.
    fn normal_dot(&self, dir: &Self::Point) -> f32;
}

impl HalfSpace for Plane {
    type Point = Vec3;

    fn signed_distance(&self, p: &Vec3) -> f32 {
        self.dot_coord(p)
    }

    fn normal_dot(&self, dir: &Vec3) -> f32 {
        self.dot_normal(dir)
    }
}

impl HalfSpace for Line2d {
    type Point = Vec2;

    fn signed_distance(&self, p: &Vec2) -> f32 {
        self.dot_coord(p)
    }

    fn normal_dot(&self, dir: &Vec2) -> f32 {
        self.dot_normal(dir)
    }
}

/// Parametric interval `[enter, exit]` along a ray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    /// Parameter where the ray enters the set.
    pub enter: f32,
    /// Parameter where the ray leaves the set.
    pub exit: f32,
}

impl Interval {
    /// The whole line.
    pub const UNBOUNDED: Self = Self {
        enter: f32::NEG_INFINITY,
        exit: f32::INFINITY,
    };

    /// `[0, ∞)`: a ray starting at its origin.
    pub const RAY: Self = Self {
        enter: 0.0,
        exit: f32::INFINITY,
    };

    /// `[0, 1]`: a segment between its endpoints.
    pub const SEGMENT: Self = Self {
        enter: 0.0,
        exit: 1.0,
    };

    /// `true` when no parameter satisfies `enter <= t <= exit`.
    pub fn is_empty(&self) -> bool {
        self.enter > self.exit
    }
}

/// Clips the line `origin + t * dir` against every half-space.
///
/// Each half-space is pushed outward by `inflate` (so `inflate = r` clips the
/// center of a sphere of radius `r`). Starts from `initial`, usually
/// [`Interval::UNBOUNDED`] or [`Interval::RAY`]. Returns `None` when the
/// interval empties; a direction parallel to a boundary misses when its
/// origin is outside that half-space.
pub fn clip_ray<'a, H, I>(
    halfspaces: I,
    origin: &H::Point,
    dir: &H::Point,
    inflate: f32,
    initial: Interval,
) -> Option<Interval>
where
    H: HalfSpace + 'a,
    I: IntoIterator<Item = &'a H>,
{
    let mut iv = initial;
    for h in halfspaces {
        let s0 = h.signed_distance(origin) + inflate;
        let dn = h.normal_dot(dir);
        if dn.abs() <= EPSILON {
            if s0 < 0.0 {
                return None;
            }
            continue;
        }
        let t = -s0 / dn;
        if dn > 0.0 {
            iv.enter = iv.enter.max(t);
        } else {
            iv.exit = iv.exit.min(t);
        }
        if iv.is_empty() {
            return None;
        }
    }
    Some(iv)
}

/// `true` when `p` is inside (or on) every half-space pushed out by `inflate`.
pub fn contains<'a, H, I>(halfspaces: I, p: &H::Point, inflate: f32) -> bool
where
    H: HalfSpace + 'a,
    I: IntoIterator<Item = &'a H>,
{
    halfspaces.into_iter().all(|h| h.signed_distance(p) + inflate >= 0.0)
}
