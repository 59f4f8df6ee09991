// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Mat4, Vec3, Vec4, EPSILON};

use crate::error::{GeomError, GeomResult};

/// Which side of a plane (or line) a primitive lies on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaneSide {
    /// Entirely on the side the normal points to.
    Front,
    /// Entirely on the opposite side.
    Back,
    /// Straddles or touches the plane.
    Intersecting,
}

impl PlaneSide {
    /// Classifies a shape with projected `radius` whose center sits at signed
    /// `distance` from the plane.
    pub fn from_distance_and_radius(distance: f32, radius: f32) -> Self {
        if distance > radius {
            Self::Front
        } else if distance < -radius {
            Self::Back
        } else {
            Self::Intersecting
        }
    }
}

/// Plane `a*x + b*y + c*z + d = 0`.
///
/// Most queries require a *normalized* plane (`|(a, b, c)| = 1`) so that
/// [`Plane::dot_coord`] is a true signed distance. Constructors that derive
/// the normal themselves return normalized planes; [`Plane::new`] stores the
/// coefficients verbatim.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    normal: Vec3,
    d: f32,
}

impl Plane {
    /// The `z = 0` plane facing +Z.
    pub const XY: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// The `y = 0` plane facing +Y.
    pub const XZ: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// The `x = 0` plane facing +X.
    pub const YZ: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a plane from raw coefficients.
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self {
            normal: Vec3::new(a, b, c),
            d,
        }
    }

    /// Creates a plane from a normal vector and offset.
    pub const fn from_normal_d(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Plane through `point` with the given `normal` (normalised here).
    pub fn from_point_normal(point: &Vec3, normal: &Vec3) -> GeomResult<Self> {
        let n = normal.try_normalize().ok_or(GeomError::DegenerateNormal)?;
        Ok(Self::from_normal_d(n, -n.dot(point)))
    }

    /// Plane through three points; the normal is `(p1 - p0) × (p2 - p0)`,
    /// so counter-clockwise points (seen from the front) face the viewer.
    ///
    /// Returns `None` for collinear or coincident points.
    pub fn from_points(p0: &Vec3, p1: &Vec3, p2: &Vec3) -> Option<Self> {
        let n = p1.sub(p0).cross(&p2.sub(p0)).try_normalize()?;
        Some(Self::from_normal_d(n, -n.dot(p0)))
    }

    /// Coefficients as `[a, b, c, d]`.
    pub const fn to_array(self) -> [f32; 4] {
        let [a, b, c] = self.normal.to_array();
        [a, b, c, self.d]
    }

    /// Coefficients as a [`Vec4`].
    pub const fn to_vec4(self) -> Vec4 {
        Vec4::from_vec3(self.normal, self.d)
    }

    /// Normal `(a, b, c)`.
    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Offset `d`.
    pub const fn d(&self) -> f32 {
        self.d
    }

    /// `a*x + b*y + c*z + d`; the signed distance for normalized planes.
    pub fn dot_coord(&self, p: &Vec3) -> f32 {
        self.normal.dot(p) + self.d
    }

    /// `a*x + b*y + c*z`; ignores `d`.
    pub fn dot_normal(&self, v: &Vec3) -> f32 {
        self.normal.dot(v)
    }

    /// Four-component dot with a homogeneous point.
    pub fn dot(&self, v: &Vec4) -> f32 {
        self.to_vec4().dot(v)
    }

    /// `true` when the normal is unit length within `tolerance`.
    pub fn is_normalized(&self, tolerance: f32) -> bool {
        self.normal.is_normalized(tolerance)
    }

    /// Scales all coefficients so the normal is unit length.
    pub fn try_normalize(&self) -> GeomResult<Self> {
        let len = self.normal.length();
        if len <= EPSILON {
            return Err(GeomError::DegenerateNormal);
        }
        let inv = 1.0 / len;
        Ok(Self::from_normal_d(self.normal.scale(inv), self.d * inv))
    }

    /// Like [`Plane::try_normalize`], returning `self` unchanged when the
    /// normal is degenerate.
    #[must_use]
    pub fn normalize(&self) -> Self {
        self.try_normalize().unwrap_or(*self)
    }

    /// Same plane facing the other way.
    #[must_use]
    pub fn flip(&self) -> Self {
        Self::from_normal_d(self.normal.scale(-1.0), -self.d)
    }

    /// Orthogonal projection of `p` onto a normalized plane.
    pub fn project_point(&self, p: &Vec3) -> Vec3 {
        debug_assert!(self.is_normalized(1e-3), "project_point requires a normalized plane");
        p.sub(&self.normal.scale(self.dot_coord(p)))
    }

    /// `true` when `p` lies on a normalized plane within `EPSILON`.
    pub fn contains_point(&self, p: &Vec3) -> bool {
        self.dot_coord(p).abs() < EPSILON
    }

    /// Front/back/on classification of a point with `EPSILON` tolerance.
    pub fn classify_point(&self, p: &Vec3) -> PlaneSide {
        PlaneSide::from_distance_and_radius(self.dot_coord(p), EPSILON)
    }

    /// Applies the point transform `m` to the plane.
    ///
    /// Planes transform by the inverse transpose of the point matrix; the
    /// result is renormalised. Returns `None` when `m` is singular.
    pub fn transformed(&self, m: &Mat4) -> Option<Self> {
        let inv_t = m.try_inverse()?.transpose();
        let v = inv_t.transform_vec4(&self.to_vec4());
        Some(Self::from_normal_d(v.xyz(), v.w()).normalize())
    }
}

impl From<[f32; 4]> for Plane {
    fn from(value: [f32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}
