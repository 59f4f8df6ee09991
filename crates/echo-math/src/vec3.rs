// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar::{safe_acos, EPSILON};

/// Float32 3D vector used throughout the geometry toolkit.
///
/// * Components may represent either points or directions depending on the
///   calling context.
/// * Use [`crate::Mat4::transform_point`] for points (homogeneous `w = 1`)
///   and [`crate::Mat4::transform_direction`] for directions (`w = 0`).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components; callers must ensure values are finite.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns a vector with every component equal to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 3] {
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

    /// Component by axis index (`0 = x`, `1 = y`, `2 = z`).
    ///
    /// # Panics
    /// Panics if `idx > 2`.
    pub const fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Returns a copy with component `idx` replaced by `value`.
    #[must_use]
    pub const fn with_component(mut self, idx: usize, value: f32) -> Self {
        self.data[idx] = value;
        self
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) + other.component(0),
            self.component(1) + other.component(1),
            self.component(2) + other.component(2),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) - other.component(0),
            self.component(1) - other.component(1),
            self.component(2) - other.component(2),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.component(0) * scalar,
            self.component(1) * scalar,
            self.component(2) * scalar,
        )
    }

    /// Component-wise product.
    pub fn mul_elem(&self, other: &Self) -> Self {
        Self::new(self.x() * other.x(), self.y() * other.y(), self.z() * other.z())
    }

    /// Component-wise quotient; no zero check.
    pub fn div_elem(&self, other: &Self) -> Self {
        Self::new(self.x() / other.x(), self.y() / other.y(), self.z() / other.z())
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Cross product with another vector (right-handed).
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Distance between two points.
    pub fn distance(&self, other: &Self) -> f32 {
        self.sub(other).length()
    }

    /// Squared distance between two points.
    pub fn distance_squared(&self, other: &Self) -> f32 {
        self.sub(other).length_squared()
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    ///
    /// `EPSILON` is a degeneracy threshold (not numeric precision): vectors
    /// with length ≤ `EPSILON` are considered degenerate and normalized to
    /// zero so downstream callers can detect them deterministically. Use
    /// [`Vec3::try_normalize`] when the caller needs to branch on failure.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Normalises the vector, or returns `None` when length ≤ `EPSILON`.
    pub fn try_normalize(&self) -> Option<Self> {
        let len = self.length();
        if len <= EPSILON {
            return None;
        }
        Some(self.scale(1.0 / len))
    }

    /// Returns `true` when the length is within `tolerance` of one.
    pub fn is_normalized(&self, tolerance: f32) -> bool {
        (self.length_squared() - 1.0).abs() <= tolerance
    }

    /// Returns `true` when all components are finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    /// Linear interpolation between two vectors (`t` is not clamped).
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.add(&other.sub(self).scale(t))
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            self.x().min(other.x()),
            self.y().min(other.y()),
            self.z().min(other.z()),
        )
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            self.x().max(other.x()),
            self.y().max(other.y()),
            self.z().max(other.z()),
        )
    }

    /// Component-wise absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.x().abs(), self.y().abs(), self.z().abs())
    }

    /// Smallest component.
    pub fn min_component(&self) -> f32 {
        self.x().min(self.y()).min(self.z())
    }

    /// Largest component.
    pub fn max_component(&self) -> f32 {
        self.x().max(self.y()).max(self.z())
    }

    /// Index of the component with the largest absolute value.
    ///
    /// Ties resolve toward the lower index.
    pub fn dominant_axis(&self) -> usize {
        let a = self.abs();
        if a.x() >= a.y() && a.x() >= a.z() {
            0
        } else if a.y() >= a.z() {
            1
        } else {
            2
        }
    }

    /// Reflects an incident vector about a plane with unit `normal`.
    ///
    /// `normal` must be unit length; the result is undefined otherwise.
    pub fn reflect(&self, normal: &Self) -> Self {
        debug_assert!(normal.is_normalized(1e-3), "reflect requires a unit normal");
        self.sub(&normal.scale(2.0 * self.dot(normal)))
    }

    /// Refracts a unit incident vector through a surface with unit `normal`.
    ///
    /// `eta` is the ratio of refraction indices (incident / transmitted).
    /// Returns the zero vector on total internal reflection.
    pub fn refract(&self, normal: &Self, eta: f32) -> Self {
        debug_assert!(normal.is_normalized(1e-3), "refract requires a unit normal");
        let cos_i = -self.dot(normal);
        let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
        if k < 0.0 {
            return Self::ZERO;
        }
        self.scale(eta).add(&normal.scale(eta * cos_i - k.sqrt()))
    }

    /// Projects this vector onto `onto`.
    ///
    /// Returns the zero vector when `onto` is degenerate (squared length at or
    /// below `EPSILON²`) instead of dividing by zero.
    pub fn project(&self, onto: &Self) -> Self {
        let len_sq = onto.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::ZERO;
        }
        onto.scale(self.dot(onto) / len_sq)
    }

    /// Angle in radians between two vectors; zero when either is degenerate.
    pub fn angle_between(&self, other: &Self) -> f32 {
        let denom = (self.length_squared() * other.length_squared()).sqrt();
        if denom <= EPSILON {
            return 0.0;
        }
        safe_acos(self.dot(other) / denom)
    }

    /// Returns a unit vector perpendicular to `self` (any one of them).
    ///
    /// Crosses with the basis axis least aligned with `self`. Returns zero
    /// for degenerate input.
    pub fn any_perpendicular(&self) -> Self {
        let a = self.abs();
        let helper = if a.x() <= a.y() && a.x() <= a.z() {
            Self::UNIT_X
        } else if a.y() <= a.z() {
            Self::UNIT_Y
        } else {
            Self::UNIT_Z
        };
        self.cross(&helper).normalize()
    }

    /// Gram–Schmidt orthonormalisation of an axis triple.
    ///
    /// `x` keeps its direction, `y` is made perpendicular to `x`, and `z` is
    /// rebuilt as `x × y` so the triple stays right-handed.
    pub fn orthogonalize(x: &Self, y: &Self) -> (Self, Self, Self) {
        let nx = x.normalize();
        let ny = y.sub(&nx.scale(y.dot(&nx))).normalize();
        let nz = nx.cross(&ny);
        (nx, ny, nz)
    }
}

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use echo_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl core::ops::Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, idx: usize) -> &f32 {
        &self.data[idx]
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3::sub(&self, &rhs)
    }
}

impl core::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl core::ops::Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl core::ops::Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.scale(1.0 / rhs)
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl core::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec3::add(self, &rhs);
    }
}

impl core::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec3::sub(self, &rhs);
    }
}

impl core::ops::MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

impl core::ops::DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = self.scale(1.0 / rhs);
    }
}
