// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers used by the vector, matrix and geometry code.
//!
//! Everything here is pure and total. Functions that take an angle expect
//! radians. Inverse trigonometric helpers clamp their argument so that values
//! drifting slightly outside `[-1, 1]` through rounding never produce `NaN`.

use std::f32::consts::TAU;

/// Global epsilon used by math routines when detecting degenerate values.
///
/// This is a degeneracy threshold, not a precision guarantee: lengths,
/// determinants and denominators at or below it are treated as zero.
pub const EPSILON: f32 = 1e-6;

/// Returns `true` when `value` is within [`EPSILON`] of zero.
#[inline]
pub fn almost_zero(value: f32) -> bool {
    value.abs() <= EPSILON
}

/// Compares two floats with a tolerance scaled by their magnitude.
///
/// The tolerance is `EPSILON * max(1, |a|, |b|)`, so values near zero are
/// compared absolutely and large values relatively.
#[inline]
pub fn float_equal(a: f32, b: f32) -> bool {
    let scale = 1.0_f32.max(a.abs()).max(b.abs());
    (a - b).abs() <= EPSILON * scale
}

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
///
/// # Panics
/// Panics if `min > max`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Linear interpolation `a + (b - a) * t`; `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite smooth step of `t` clamped to `[0, 1]`.
pub fn smooth_step(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// `acos` with the argument clamped to `[-1, 1]`.
#[inline]
pub fn safe_acos(value: f32) -> f32 {
    value.clamp(-1.0, 1.0).acos()
}

/// `asin` with the argument clamped to `[-1, 1]`.
#[inline]
pub fn safe_asin(value: f32) -> f32 {
    value.clamp(-1.0, 1.0).asin()
}

/// Up to three real roots of a polynomial, sorted ascending.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Roots {
    values: [f32; 3],
    len: usize,
}

impl Roots {
    fn push(&mut self, value: f32) {
        if self.len < 3 {
            self.values[self.len] = value;
            self.len += 1;
        }
    }

    fn sorted(mut self) -> Self {
        self.values[..self.len].sort_by(f32::total_cmp);
        self
    }

    /// Number of roots found.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the polynomial has no real root.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The roots as a slice, ascending.
    pub fn as_slice(&self) -> &[f32] {
        &self.values[..self.len]
    }

    /// Iterates the roots in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.as_slice().iter().copied()
    }
}

/// Solves `a*t^2 + b*t + c = 0` for real `t`.
///
/// Degrades to the linear equation when `|a| <= EPSILON`. A double root is
/// reported once. Uses the cancellation-free form `q = -(b + sign(b)*sqrt(D))/2`.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Roots {
    let mut roots = Roots::default();
    if almost_zero(a) {
        if !almost_zero(b) {
            roots.push(-c / b);
        }
        return roots;
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return roots;
    }
    if disc == 0.0 {
        roots.push(-b / (2.0 * a));
        return roots;
    }
    let sqrt_disc = disc.sqrt();
    let q = -0.5 * (b + b.signum() * sqrt_disc);
    if q == 0.0 {
        // b == 0 and c == 0: both roots coincide at zero.
        roots.push(0.0);
        return roots;
    }
    roots.push(q / a);
    roots.push(c / q);
    roots.sorted()
}

/// Solves `a*t^3 + b*t^2 + c*t + d = 0` for real `t` (Cardano / trigonometric).
///
/// Degrades to [`solve_quadratic`] when `|a| <= EPSILON`. Evaluated in `f64`
/// and rounded back to `f32` so the depressed-cubic discriminant keeps its sign.
#[allow(clippy::cast_possible_truncation)]
pub fn solve_cubic(a: f32, b: f32, c: f32, d: f32) -> Roots {
    if almost_zero(a) {
        return solve_quadratic(b, c, d);
    }
    let a = f64::from(a);
    let aa = f64::from(b) / a;
    let bb = f64::from(c) / a;
    let cc = f64::from(d) / a;

    // t = x - aa/3 gives x^3 + p*x + q = 0.
    let shift = aa / 3.0;
    let p = bb - aa * aa / 3.0;
    let q = 2.0 * aa * aa * aa / 27.0 - aa * bb / 3.0 + cc;
    let disc = (q * 0.5) * (q * 0.5) + (p / 3.0) * (p / 3.0) * (p / 3.0);

    let mut roots = Roots::default();
    let tiny = 1e-12;
    if disc.abs() <= tiny {
        if q.abs() <= tiny {
            roots.push((-shift) as f32);
        } else {
            let u = (-q * 0.5).cbrt();
            roots.push((2.0 * u - shift) as f32);
            roots.push((-u - shift) as f32);
        }
    } else if disc > 0.0 {
        let sqrt_disc = disc.sqrt();
        let u = (-q * 0.5 + sqrt_disc).cbrt();
        let v = (-q * 0.5 - sqrt_disc).cbrt();
        roots.push((u + v - shift) as f32);
    } else {
        let r = (-(p * p * p) / 27.0).sqrt();
        let phi = (-q / (2.0 * r)).clamp(-1.0, 1.0).acos();
        let m = 2.0 * r.cbrt();
        for k in 0..3 {
            let angle = (phi + std::f64::consts::TAU * f64::from(k)) / 3.0;
            roots.push((m * angle.cos() - shift) as f32);
        }
    }
    roots.sorted()
}
