// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::Vec3;

/// Row‑major 3×3 matrix, row-vector convention (`v' = v * M`).
///
/// Used for linear parts of transforms and for symmetric matrices such as
/// covariance, where `get`/`set` addressing matters more than operators.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    data: [f32; 9],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat3 {
    /// Identity matrix.
    pub const fn identity() -> Self {
        Self::new([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    }

    /// All-zero matrix.
    pub const fn zero() -> Self {
        Self::new([0.0; 9])
    }

    /// Creates a matrix from row-major data.
    pub const fn new(data: [f32; 9]) -> Self {
        Self { data }
    }

    /// Builds a matrix from three rows.
    pub const fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        let [a, b, c] = r0.to_array();
        let [d, e, f] = r1.to_array();
        let [g, h, i] = r2.to_array();
        Self::new([a, b, c, d, e, f, g, h, i])
    }

    /// Returns the row-major data.
    pub const fn to_array(self) -> [f32; 9] {
        self.data
    }

    /// Element at `(row, col)`.
    pub const fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * 3 + col]
    }

    /// Sets the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * 3 + col] = value;
    }

    /// Row `i`.
    pub const fn row(&self, i: usize) -> Vec3 {
        Vec3::new(self.data[i * 3], self.data[i * 3 + 1], self.data[i * 3 + 2])
    }

    /// Column `i`.
    pub const fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.data[i], self.data[3 + i], self.data[6 + i])
    }

    /// `self * rhs`; applies `self` first.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = (0..3).map(|k| self.get(row, k) * rhs.get(k, col)).sum();
            }
        }
        Self::new(out)
    }

    /// Element-wise sum.
    pub fn add(&self, rhs: &Self) -> Self {
        let mut out = self.data;
        for (o, r) in out.iter_mut().zip(rhs.data.iter()) {
            *o += r;
        }
        Self::new(out)
    }

    /// Multiplies every element by `s`.
    pub fn mul_scalar(&self, s: f32) -> Self {
        Self::new(self.data.map(|v| v * s))
    }

    /// Transposed copy.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.col(0), self.col(1), self.col(2))
    }

    /// Determinant (scalar triple product of the rows).
    pub fn determinant(&self) -> f32 {
        self.row(0).dot(&self.row(1).cross(&self.row(2)))
    }

    /// Inverse, or `None` when the determinant is exactly zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let (r0, r1, r2) = (self.row(0), self.row(1), self.row(2));
        let c0 = r1.cross(&r2);
        let c1 = r2.cross(&r0);
        let c2 = r0.cross(&r1);
        let det = r0.dot(&c0);
        if det == 0.0 {
            return None;
        }
        // Inverse columns are the cross products; lay them out as rows of the
        // transpose.
        Some(Self::from_rows(c0, c1, c2).transpose().mul_scalar(1.0 / det))
    }

    /// Transforms a row vector (`v * M`).
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        Vec3::new(v.dot(&self.col(0)), v.dot(&self.col(1)), v.dot(&self.col(2)))
    }

    /// Returns `true` when the matrix equals its transpose exactly.
    pub fn is_symmetric(&self) -> bool {
        self.data == self.transpose().data
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(value: [f32; 9]) -> Self {
        Self::new(value)
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}
