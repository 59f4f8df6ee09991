// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Parametric curves: Catmull-Rom segments and quadratic/cubic Bézier curves.
//!
//! Curves are generic over [`ControlPoint`], implemented for [`Vec2`] and
//! [`Vec3`]. Parameters run over `[0, 1]`; out-of-range `t` extrapolates the
//! polynomial except in [`QuadraticBezier::split`]/[`CubicBezier::split`],
//! which clamp.

use std::ops::{Add, Mul, Sub};

use echo_math::scalar::{solve_cubic, solve_quadratic};
use echo_math::{Vec2, Vec3, EPSILON};
use tracing::debug;

use crate::types::line2d::Line2d;

/// Stop refining an arc-length interval once the two-half estimate moves
/// the whole-interval estimate by at most this much.
pub const ARC_LENGTH_EPSILON: f32 = 1e-4;

/// Maximum recursion depth of the arc-length integrator.
pub const ARC_LENGTH_MAX_DEPTH: u32 = 10;

/// Bisection steps used to invert arc length.
const ARC_LENGTH_BISECTION_STEPS: u32 = 32;

/// Point type a curve can be built from.
pub trait ControlPoint:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
    /// Euclidean length when treated as a vector.
    fn magnitude(&self) -> f32;
}

impl ControlPoint for Vec2 {
    fn magnitude(&self) -> f32 {
        self.length()
    }
}

impl ControlPoint for Vec3 {
    fn magnitude(&self) -> f32 {
        self.length()
    }
}

fn mix<P: ControlPoint>(a: P, b: P, t: f32) -> P {
    a + (b - a) * t
}

/// Catmull-Rom position between `p1` (`t = 0`) and `p2` (`t = 1`).
///
/// `p0` and `p3` only shape the tangents at the ends.
pub fn catmull_rom<P: ControlPoint>(p0: &P, p1: &P, p2: &P, p3: &P, t: f32) -> P {
    let t2 = t * t;
    let t3 = t2 * t;
    let (p0, p1, p2, p3) = (*p0, *p1, *p2, *p3);
    (p1 * 2.0
        + (p2 - p0) * t
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
        + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3)
        * 0.5
}

/// Derivative of [`catmull_rom`] with respect to `t`.
pub fn catmull_rom_tangent<P: ControlPoint>(p0: &P, p1: &P, p2: &P, p3: &P, t: f32) -> P {
    let (p0, p1, p2, p3) = (*p0, *p1, *p2, *p3);
    ((p2 - p0)
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * (2.0 * t)
        + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * (3.0 * t * t))
        * 0.5
}

/// Quadratic Bézier curve.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticBezier<P> {
    /// Start point.
    pub p0: P,
    /// Control point.
    pub p1: P,
    /// End point.
    pub p2: P,
}

impl<P: ControlPoint> QuadraticBezier<P> {
    /// Creates a curve from its three control points.
    pub const fn new(p0: P, p1: P, p2: P) -> Self {
        Self { p0, p1, p2 }
    }

    /// Position at `t`.
    pub fn eval(&self, t: f32) -> P {
        let s = 1.0 - t;
        self.p0 * (s * s) + self.p1 * (2.0 * s * t) + self.p2 * (t * t)
    }

    /// First derivative at `t`.
    pub fn tangent(&self, t: f32) -> P {
        (self.p1 - self.p0) * (2.0 * (1.0 - t)) + (self.p2 - self.p1) * (2.0 * t)
    }

    /// De Casteljau split at `t` (clamped to `[0, 1]`).
    pub fn split(&self, t: f32) -> (Self, Self) {
        let t = t.clamp(0.0, 1.0);
        let p01 = mix(self.p0, self.p1, t);
        let p12 = mix(self.p1, self.p2, t);
        let mid = mix(p01, p12, t);
        (Self::new(self.p0, p01, mid), Self::new(mid, p12, self.p2))
    }

    /// Split at `t = 0.5`.
    pub fn split_half(&self) -> (Self, Self) {
        self.split(0.5)
    }
}

impl QuadraticBezier<Vec2> {
    /// Parameters in `[0, 1]` where the curve crosses `line`, ascending.
    pub fn intersect_line(&self, line: &Line2d) -> Vec<f32> {
        let n = line.normal();
        let a = n.dot(&(self.p0 - self.p1 * 2.0 + self.p2));
        let b = 2.0 * n.dot(&(self.p1 - self.p0));
        let c = line.dot_coord(&self.p0);
        in_unit_interval(solve_quadratic(a, b, c).iter())
    }
}

/// Cubic Bézier curve.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier<P> {
    /// Start point.
    pub p0: P,
    /// First control point.
    pub p1: P,
    /// Second control point.
    pub p2: P,
    /// End point.
    pub p3: P,
}

impl<P: ControlPoint> CubicBezier<P> {
    /// Creates a curve from its four control points.
    pub const fn new(p0: P, p1: P, p2: P, p3: P) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Position at `t`.
    pub fn eval(&self, t: f32) -> P {
        let s = 1.0 - t;
        self.p0 * (s * s * s)
            + self.p1 * (3.0 * s * s * t)
            + self.p2 * (3.0 * s * t * t)
            + self.p3 * (t * t * t)
    }

    /// First derivative at `t`.
    pub fn tangent(&self, t: f32) -> P {
        let s = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * s * s)
            + (self.p2 - self.p1) * (6.0 * s * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    /// De Casteljau split at `t` (clamped to `[0, 1]`).
    pub fn split(&self, t: f32) -> (Self, Self) {
        let t = t.clamp(0.0, 1.0);
        let p01 = mix(self.p0, self.p1, t);
        let p12 = mix(self.p1, self.p2, t);
        let p23 = mix(self.p2, self.p3, t);
        let p012 = mix(p01, p12, t);
        let p123 = mix(p12, p23, t);
        let mid = mix(p012, p123, t);
        (
            Self::new(self.p0, p01, p012, mid),
            Self::new(mid, p123, p23, self.p3),
        )
    }

    /// Split at `t = 0.5`.
    pub fn split_half(&self) -> (Self, Self) {
        self.split(0.5)
    }

    /// Total arc length.
    pub fn length(&self) -> f32 {
        self.length_to(1.0)
    }

    /// Arc length from `t = 0` to `t`.
    ///
    /// Integrates `|tangent|` with Bode's rule, bisecting any interval whose
    /// estimate has not settled to within [`ARC_LENGTH_EPSILON`], down to
    /// [`ARC_LENGTH_MAX_DEPTH`] levels.
    pub fn length_to(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        let speed = |u: f32| self.tangent(u).magnitude();
        let whole = bode(&speed, 0.0, t);
        let mut capped = false;
        let len = adaptive_length(&speed, 0.0, t, whole, 0, &mut capped);
        if capped {
            debug!(t, len, "arc length hit recursion depth cap");
        }
        len
    }

    /// Parameter at which the arc length from the start equals `s`.
    ///
    /// Clamps to `0` for `s <= 0` and to `1` for `s` past the end.
    pub fn parameter_at_length(&self, s: f32) -> f32 {
        if s <= 0.0 {
            return 0.0;
        }
        if s >= self.length() {
            return 1.0;
        }
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        for _ in 0..ARC_LENGTH_BISECTION_STEPS {
            let mid = (lo + hi) * 0.5;
            if self.length_to(mid) < s {
                lo = mid;
            } else {
                hi = mid;
            }
            if hi - lo <= EPSILON {
                break;
            }
        }
        (lo + hi) * 0.5
    }
}

impl CubicBezier<Vec2> {
    /// Parameters in `[0, 1]` where the curve crosses `line`, ascending.
    pub fn intersect_line(&self, line: &Line2d) -> Vec<f32> {
        let n = line.normal();
        let a = n.dot(&(self.p3 - self.p0 + (self.p1 - self.p2) * 3.0));
        let b = 3.0 * n.dot(&(self.p0 - self.p1 * 2.0 + self.p2));
        let c = 3.0 * n.dot(&(self.p1 - self.p0));
        let d = line.dot_coord(&self.p0);
        in_unit_interval(solve_cubic(a, b, c, d).iter())
    }
}

fn in_unit_interval(roots: impl Iterator<Item = f32>) -> Vec<f32> {
    let mut ts: Vec<f32> = roots
        .filter(|t| (-EPSILON..=1.0 + EPSILON).contains(t))
        .map(|t| t.clamp(0.0, 1.0))
        .collect();
    ts.dedup();
    ts
}

fn bode(f: &impl Fn(f32) -> f32, a: f32, b: f32) -> f32 {
    let h = (b - a) * 0.25;
    let ends = f(a) + f(b);
    let quarters = f(a + h) + f(a + 3.0 * h);
    (2.0 * h / 45.0) * (7.0 * ends + 32.0 * quarters + 12.0 * f(a + 2.0 * h))
}

fn adaptive_length(
    f: &impl Fn(f32) -> f32,
    a: f32,
    b: f32,
    whole: f32,
    depth: u32,
    capped: &mut bool,
) -> f32 {
    let mid = (a + b) * 0.5;
    let left = bode(f, a, mid);
    let right = bode(f, mid, b);
    let sum = left + right;
    if (sum - whole).abs() <= ARC_LENGTH_EPSILON {
        return sum;
    }
    if depth >= ARC_LENGTH_MAX_DEPTH {
        *capped = true;
        return sum;
    }
    adaptive_length(f, a, mid, left, depth + 1, capped)
        + adaptive_length(f, mid, b, right, depth + 1, capped)
}
