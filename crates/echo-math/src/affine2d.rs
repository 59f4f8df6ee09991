// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{lerp, Mat4, Vec2};

/// 2D affine transform stored as a 3×2 row-vector matrix.
///
/// Layout (row-major):
/// ```text
/// | m00 m01 |
/// | m10 m11 |
/// | tx  ty  |
/// ```
/// A point maps as `p' = (x*m00 + y*m10 + tx, x*m01 + y*m11 + ty)`, so
/// `a.multiply(&b)` applies `a` first, matching [`Mat4`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affine2d {
    data: [f32; 6],
}

impl Default for Affine2d {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2d {
    /// Creates a transform from `[m00, m01, m10, m11, tx, ty]`.
    pub const fn new(data: [f32; 6]) -> Self {
        Self { data }
    }

    /// Identity transform.
    pub const fn identity() -> Self {
        Self::new([1.0, 0.0, 0.0, 1.0, 0.0, 0.0])
    }

    /// Pure translation.
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self::new([1.0, 0.0, 0.0, 1.0, tx, ty])
    }

    /// Axis-aligned scaling about the origin.
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self::new([sx, 0.0, 0.0, sy, 0.0, 0.0])
    }

    /// Counter-clockwise rotation about the origin by `angle` radians.
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([c, s, -s, c, 0.0, 0.0])
    }

    /// Returns the raw `[m00, m01, m10, m11, tx, ty]` data.
    pub const fn to_array(self) -> [f32; 6] {
        self.data
    }

    /// Translation part.
    pub const fn translation_part(&self) -> Vec2 {
        Vec2::new(self.data[4], self.data[5])
    }

    /// Composes `self` then `rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let [a00, a01, a10, a11, ax, ay] = self.data;
        let [b00, b01, b10, b11, bx, by] = rhs.data;
        Self::new([
            a00 * b00 + a01 * b10,
            a00 * b01 + a01 * b11,
            a10 * b00 + a11 * b10,
            a10 * b01 + a11 * b11,
            ax * b00 + ay * b10 + bx,
            ax * b01 + ay * b11 + by,
        ])
    }

    /// Determinant of the linear 2×2 part.
    pub fn determinant(&self) -> f32 {
        self.data[0] * self.data[3] - self.data[1] * self.data[2]
    }

    /// Inverse transform, or `None` when the linear part is singular.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        let inv = 1.0 / det;
        let [m00, m01, m10, m11, tx, ty] = self.data;
        let i00 = m11 * inv;
        let i01 = -m01 * inv;
        let i10 = -m10 * inv;
        let i11 = m00 * inv;
        Some(Self::new([
            i00,
            i01,
            i10,
            i11,
            -(tx * i00 + ty * i10),
            -(tx * i01 + ty * i11),
        ]))
    }

    /// Transforms a point (translation applied).
    pub fn transform_point(&self, p: &Vec2) -> Vec2 {
        self.transform_vector(p).add(&self.translation_part())
    }

    /// Transforms a direction (translation ignored).
    pub fn transform_vector(&self, v: &Vec2) -> Vec2 {
        let [m00, m01, m10, m11, _, _] = self.data;
        Vec2::new(v.x() * m00 + v.y() * m10, v.x() * m01 + v.y() * m11)
    }

    /// Element-wise interpolation (`t` unclamped).
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mut out = self.data;
        for (o, b) in out.iter_mut().zip(other.data.iter()) {
            *o = lerp(*o, *b, t);
        }
        Self::new(out)
    }

    /// Embeds the transform in the XY plane of a 4×4 matrix.
    #[rustfmt::skip]
    pub const fn to_mat4(&self) -> Mat4 {
        let [m00, m01, m10, m11, tx, ty] = self.data;
        Mat4::new([
            m00, m01, 0.0, 0.0,
            m10, m11, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            tx,  ty,  0.0, 1.0,
        ])
    }

    /// Reads the XY affine part back out of a 4×4 matrix; Z and projective
    /// terms are dropped.
    pub const fn from_mat4(m: &Mat4) -> Self {
        Self::new([
            m.get(0, 0),
            m.get(0, 1),
            m.get(1, 0),
            m.get(1, 1),
            m.get(3, 0),
            m.get(3, 1),
        ])
    }
}

impl core::ops::Mul for Affine2d {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}
