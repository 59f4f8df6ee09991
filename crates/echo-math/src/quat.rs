// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar::{safe_acos, safe_asin};
use crate::{Mat4, Vec3, EPSILON};

/// Cosine above which [`Quat::slerp`] falls back to linear weights.
pub const SLERP_LERP_THRESHOLD: f32 = 0.9999;

/// `|sin(pitch)|` above which Euler extraction treats the rotation as
/// gimbal-locked and folds bank into heading.
pub const GIMBAL_LOCK_THRESHOLD: f32 = 0.9999;

/// Quaternion stored as `(x, y, z, w)`.
///
/// * All angles are expressed in radians.
/// * Rotation helpers assume unit quaternions and do not renormalise their
///   inputs; [`Quat::to_mat4`] is the exception and normalises first.
/// * [`Quat::multiply`] composes left-to-right like [`Mat4::multiply`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    data: [f32; 4],
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quat {
    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the quaternion as an array.
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Scalar part.
    pub const fn w(&self) -> f32 {
        self.data[3]
    }

    /// Vector part.
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    fn from_parts(v: Vec3, w: f32) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `EPSILON` to
    /// avoid undefined orientations. No small-angle approximation is applied.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::identity();
        }
        let norm_axis = axis.scale(1.0 / len_sq.sqrt());
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        Self::from_parts(norm_axis.scale(sin_half), cos_half)
    }

    /// Decomposes a unit quaternion into `(axis, angle)`.
    ///
    /// Near-identity rotations return `(UNIT_X, 0.0)`.
    pub fn to_axis_angle(&self) -> (Vec3, f32) {
        let angle = 2.0 * safe_acos(self.w());
        let sin_half = (1.0 - self.w() * self.w()).max(0.0).sqrt();
        if sin_half <= EPSILON {
            return (Vec3::UNIT_X, 0.0);
        }
        (self.xyz().scale(1.0 / sin_half), angle)
    }

    /// Composes two rotations: `self` first, then `other`.
    ///
    /// This is the Hamilton product with the operands swapped
    /// (`self * other == other ⊗ self`), which keeps quaternion chains in
    /// the same left-to-right order as row-vector matrix chains:
    /// `a.multiply(&b).to_mat4() == a.to_mat4().multiply(&b.to_mat4())`.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use echo_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    /// // Non‑commutative: pitch*yaw is different
    /// assert_ne!(yaw.multiply(&pitch).to_array(), pitch.multiply(&yaw).to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            aw * bx + ax * bw - ay * bz + az * by,
            aw * by + ay * bw - az * bx + ax * bz,
            aw * bz + az * bw - ax * by + ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
            self.w() + other.w(),
        )
    }

    /// Component-wise difference.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
            self.w() - other.w(),
        )
    }

    /// Scales all four components.
    pub fn scale(&self, s: f32) -> Self {
        Self::new(self.x() * s, self.y() * s, self.z() * s, self.w() * s)
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
    }

    /// Squared norm.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Norm.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns `true` when `| |q| - 1 | <= tolerance`.
    pub fn is_normalized(&self, tolerance: f32) -> bool {
        (self.length() - 1.0).abs() <= tolerance
    }

    /// Normalises the quaternion; returns identity when norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::identity();
        }
        self.scale(1.0 / len)
    }

    /// Negated vector part; the inverse rotation for unit quaternions.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Multiplicative inverse, or `None` when the norm is ≤ `EPSILON`.
    pub fn try_inverse(&self) -> Option<Self> {
        let len_sq = self.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return None;
        }
        Some(self.conjugate().scale(1.0 / len_sq))
    }

    /// Rotates a vector by a unit quaternion.
    ///
    /// Equivalent to `q.to_mat4().transform_direction(v)`.
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        let u = self.xyz();
        let t = u.cross(v).scale(2.0);
        v.add(&t.scale(self.w())).add(&u.cross(&t))
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// When the operands are on opposite hemispheres the second is negated
    /// first. Above [`SLERP_LERP_THRESHOLD`] the weights fall back to plain
    /// linear ones to avoid dividing by a vanishing sine. The result is not
    /// renormalised.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let mut cos = self.dot(other);
        let mut end = *other;
        if cos < 0.0 {
            cos = -cos;
            end = -end;
        }
        let (k0, k1) = if cos > SLERP_LERP_THRESHOLD {
            (1.0 - t, t)
        } else {
            let sin = (1.0 - cos * cos).sqrt();
            let omega = sin.atan2(cos);
            let inv_sin = 1.0 / sin;
            (((1.0 - t) * omega).sin() * inv_sin, (t * omega).sin() * inv_sin)
        };
        self.scale(k0).add(&end.scale(k1))
    }

    /// Normalised linear interpolation along the shorter arc.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let end = if self.dot(other) < 0.0 { -*other } else { *other };
        self.scale(1.0 - t).add(&end.scale(t)).normalize()
    }

    /// Spherical quadrangle interpolation from `self` to `c`.
    ///
    /// `a`, `b` and `c` are the control quaternions produced by
    /// [`Quat::squad_setup`].
    pub fn squad(&self, a: &Self, b: &Self, c: &Self, t: f32) -> Self {
        let outer = self.slerp(c, t);
        let inner = a.slerp(b, t);
        outer.slerp(&inner, 2.0 * t * (1.0 - t))
    }

    /// Computes squad control points for the segment `q1 → q2` given its
    /// neighbours `q0` and `q3`.
    ///
    /// Returns `(a, b, c)` for [`Quat::squad`]; `c` is `q2` moved onto the
    /// same hemisphere as `q1`.
    pub fn squad_setup(q0: &Self, q1: &Self, q2: &Self, q3: &Self) -> (Self, Self, Self) {
        let near = |reference: &Self, q: &Self| {
            if reference.add(q).length_squared() < reference.sub(q).length_squared() {
                -*q
            } else {
                *q
            }
        };
        let q0 = near(q1, q0);
        let q2 = near(q1, q2);
        let q3 = near(&q2, q3);

        let a = Self::squad_tangent(&q0, q1, &q2);
        let b = Self::squad_tangent(q1, &q2, &q3);
        (a, b, q2)
    }

    // Shoemake's inner control point: q * exp(-(log(q⁻¹ next) + log(q⁻¹ prev)) / 4),
    // written in the left-to-right composition order used by `multiply`.
    fn squad_tangent(prev: &Self, q: &Self, next: &Self) -> Self {
        let inv = q.conjugate();
        let to_next = next.multiply(&inv).log();
        let to_prev = prev.multiply(&inv).log();
        let delta = to_next.add(&to_prev).scale(-0.25).exp();
        delta.multiply(q)
    }

    /// Natural logarithm of a unit quaternion: `(axis * half_angle, 0)`.
    #[must_use]
    pub fn log(&self) -> Self {
        let theta = safe_acos(self.w());
        let sin = theta.sin();
        if sin.abs() <= EPSILON {
            return Self::from_parts(self.xyz(), 0.0);
        }
        Self::from_parts(self.xyz().scale(theta / sin), 0.0)
    }

    /// Exponential of a pure quaternion (`w` is ignored).
    #[must_use]
    pub fn exp(&self) -> Self {
        let v = self.xyz();
        let theta = v.length();
        let (sin, cos) = theta.sin_cos();
        if theta <= EPSILON {
            return Self::from_parts(v, cos);
        }
        Self::from_parts(v.scale(sin / theta), cos)
    }

    /// Raises a unit quaternion to `t`, scaling its rotation angle.
    #[must_use]
    pub fn pow(&self, t: f32) -> Self {
        self.log().scale(t).exp()
    }

    /// Rotation `d` such that `self.multiply(&d) == other` for unit inputs.
    pub fn diff(&self, other: &Self) -> Self {
        self.conjugate().multiply(other)
    }

    /// Converts the quaternion to a rotation matrix (row-vector convention).
    pub fn to_mat4(&self) -> Mat4 {
        let q = self.normalize();
        let [x, y, z, w] = q.data;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Extracts a unit quaternion from the rotation in `m`'s upper 3×3.
    ///
    /// Shoemake's method: uses the trace when it is positive, otherwise
    /// solves for the component with the largest diagonal term first so the
    /// divisor never approaches zero. The result may be `q` or `-q`.
    pub fn from_rotation_matrix(m: &Mat4) -> Self {
        let m00 = m.get(0, 0);
        let m11 = m.get(1, 1);
        let m22 = m.get(2, 2);
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            let w = (trace + 1.0).sqrt() * 0.5;
            let s = 0.25 / w;
            return Self::new(
                (m.get(1, 2) - m.get(2, 1)) * s,
                (m.get(2, 0) - m.get(0, 2)) * s,
                (m.get(0, 1) - m.get(1, 0)) * s,
                w,
            );
        }

        if m00 >= m11 && m00 >= m22 {
            let x = (1.0 + m00 - m11 - m22).sqrt() * 0.5;
            let s = 0.25 / x;
            Self::new(
                x,
                (m.get(0, 1) + m.get(1, 0)) * s,
                (m.get(0, 2) + m.get(2, 0)) * s,
                (m.get(1, 2) - m.get(2, 1)) * s,
            )
        } else if m11 >= m22 {
            let y = (1.0 + m11 - m00 - m22).sqrt() * 0.5;
            let s = 0.25 / y;
            Self::new(
                (m.get(0, 1) + m.get(1, 0)) * s,
                y,
                (m.get(1, 2) + m.get(2, 1)) * s,
                (m.get(2, 0) - m.get(0, 2)) * s,
            )
        } else {
            let z = (1.0 + m22 - m00 - m11).sqrt() * 0.5;
            let s = 0.25 / z;
            Self::new(
                (m.get(0, 2) + m.get(2, 0)) * s,
                (m.get(1, 2) + m.get(2, 1)) * s,
                z,
                (m.get(0, 1) - m.get(1, 0)) * s,
            )
        }
    }

    /// Object-to-inertial quaternion from heading (Y), pitch (X) and bank (Z).
    ///
    /// Bank is applied first, then pitch, then heading; the matrix form is
    /// [`Mat4::rotation_from_euler`]`(heading, pitch, bank)`.
    pub fn from_euler_o2i(heading: f32, pitch: f32, bank: f32) -> Self {
        let (sh, ch) = (heading * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sb, cb) = (bank * 0.5).sin_cos();
        Self::new(
            ch * sp * cb + sh * cp * sb,
            -ch * sp * sb + sh * cp * cb,
            -sh * sp * cb + ch * cp * sb,
            ch * cp * cb + sh * sp * sb,
        )
    }

    /// Inertial-to-object quaternion; the conjugate of [`Quat::from_euler_o2i`].
    pub fn from_euler_i2o(heading: f32, pitch: f32, bank: f32) -> Self {
        Self::from_euler_o2i(heading, pitch, bank).conjugate()
    }

    /// Extracts `(heading, pitch, bank)` from an object-to-inertial unit
    /// quaternion.
    ///
    /// The pitch sine is clamped to `[-1, 1]`. Past
    /// [`GIMBAL_LOCK_THRESHOLD`] pitch snaps to ±π/2, bank is reported as zero
    /// and the whole yaw is folded into heading.
    pub fn to_euler_o2i(&self) -> (f32, f32, f32) {
        let [x, y, z, w] = self.data;
        let sin_pitch = -2.0 * (y * z - w * x);
        if sin_pitch.abs() > GIMBAL_LOCK_THRESHOLD {
            let pitch = core::f32::consts::FRAC_PI_2.copysign(sin_pitch);
            let heading = (-x * z + w * y).atan2(0.5 - y * y - z * z);
            return (heading, pitch, 0.0);
        }
        let pitch = safe_asin(sin_pitch);
        let heading = (x * z + w * y).atan2(0.5 - x * x - y * y);
        let bank = (x * y + w * z).atan2(0.5 - x * x - z * z);
        (heading, pitch, bank)
    }

    /// Extracts `(heading, pitch, bank)` from an inertial-to-object unit
    /// quaternion.
    pub fn to_euler_i2o(&self) -> (f32, f32, f32) {
        self.conjugate().to_euler_o2i()
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}
