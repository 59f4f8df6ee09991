// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! View frustum in three interchangeable forms.
//!
//! * [`FrustumPlanes`]: six inward-facing normalized planes. A point is inside
//!   when `dot_coord >= 0` for every plane.
//! * [`FrustumPoints`]: the eight corners. Bit 0 of a corner index selects
//!   right over left, bit 1 top over bottom, bit 2 far over near.
//! * [`FrustumRadar`]: camera basis plus field-of-view tangents, for cheap
//!   point and sphere tests without planes.
//!
//! Projection matrices follow the row-vector, `z ∈ [0, 1]` clip convention of
//! [`Mat4::perspective_fov_lh`].

use echo_math::{Mat4, Vec3, Vec4};

use crate::intersect::overlap::intersect_three_planes;
use crate::types::plane::Plane;

/// Six inward-facing planes, ordered left, right, bottom, top, near, far.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrustumPlanes {
    planes: [Plane; 6],
}

impl FrustumPlanes {
    /// Index of the left plane.
    pub const LEFT: usize = 0;
    /// Index of the right plane.
    pub const RIGHT: usize = 1;
    /// Index of the bottom plane.
    pub const BOTTOM: usize = 2;
    /// Index of the top plane.
    pub const TOP: usize = 3;
    /// Index of the near plane.
    pub const NEAR: usize = 4;
    /// Index of the far plane.
    pub const FAR: usize = 5;

    /// Wraps six planes given in `LEFT..=FAR` order.
    pub const fn new(planes: [Plane; 6]) -> Self {
        Self { planes }
    }

    /// Extracts the planes of a combined view-projection matrix
    /// (Gribb–Hartmann).
    ///
    /// With row vectors the clip coordinates are dot products with the
    /// matrix columns, so each plane is a sum or difference of columns.
    pub fn from_matrix(m: &Mat4) -> Self {
        let c0 = m.col(0);
        let c1 = m.col(1);
        let c2 = m.col(2);
        let c3 = m.col(3);
        let plane = |v: Vec4| Plane::from_normal_d(v.xyz(), v.w()).normalize();
        Self {
            planes: [
                plane(c3 + c0),
                plane(c3 - c0),
                plane(c3 + c1),
                plane(c3 - c1),
                plane(c2),
                plane(c3 - c2),
            ],
        }
    }

    /// All six planes.
    pub const fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Plane at `index` (see the associated index constants).
    pub const fn plane(&self, index: usize) -> Plane {
        self.planes[index]
    }

    /// Corners obtained by intersecting plane triples.
    ///
    /// Returns `None` when any triple has no unique intersection.
    pub fn to_points(&self) -> Option<FrustumPoints> {
        let mut points = [Vec3::ZERO; 8];
        for (i, out) in points.iter_mut().enumerate() {
            let x = if i & 1 == 0 { Self::LEFT } else { Self::RIGHT };
            let y = if i & 2 == 0 { Self::BOTTOM } else { Self::TOP };
            let z = if i & 4 == 0 { Self::NEAR } else { Self::FAR };
            *out = intersect_three_planes(&self.planes[x], &self.planes[y], &self.planes[z])?;
        }
        Some(FrustumPoints::new(points))
    }
}

/// Eight frustum corners.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrustumPoints {
    points: [Vec3; 8],
}

/// Three corners spanning each face, in `FrustumPlanes` order.
const FACE_CORNERS: [[usize; 3]; 6] = [
    [0, 2, 4],
    [1, 3, 5],
    [0, 1, 4],
    [2, 3, 6],
    [0, 1, 2],
    [4, 5, 6],
];

impl FrustumPoints {
    /// Wraps eight corners in bit-indexed order.
    pub const fn new(points: [Vec3; 8]) -> Self {
        Self { points }
    }

    /// Unprojects the clip-space cube through `inv_view_proj`.
    ///
    /// Returns `None` if a corner lands on the `w = 0` plane.
    pub fn from_inverse_matrix(inv_view_proj: &Mat4) -> Option<Self> {
        let mut points = [Vec3::ZERO; 8];
        for (i, out) in points.iter_mut().enumerate() {
            let ndc = Vec3::new(
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { 0.0 } else { 1.0 },
            );
            *out = inv_view_proj.transform_coord(&ndc)?;
        }
        Some(Self { points })
    }

    /// Corners of the frustum of `view_proj`; `None` if it is singular.
    pub fn from_matrix(view_proj: &Mat4) -> Option<Self> {
        Self::from_inverse_matrix(&view_proj.try_inverse()?)
    }

    /// All eight corners.
    pub const fn points(&self) -> &[Vec3; 8] {
        &self.points
    }

    /// Average of the corners; always strictly inside a non-degenerate frustum.
    pub fn center(&self) -> Vec3 {
        self.points
            .iter()
            .fold(Vec3::ZERO, |acc, p| acc.add(p))
            .scale(1.0 / 8.0)
    }

    /// Inward-facing planes through the faces.
    ///
    /// Each face plane is oriented so the center lies in front of it.
    /// Returns `None` when a face is degenerate.
    pub fn to_planes(&self) -> Option<FrustumPlanes> {
        let center = self.center();
        let mut planes = [Plane::XY; 6];
        for (plane, [a, b, c]) in planes.iter_mut().zip(FACE_CORNERS) {
            let p = Plane::from_points(&self.points[a], &self.points[b], &self.points[c])?;
            *plane = if p.dot_coord(&center) < 0.0 { p.flip() } else { p };
        }
        Some(FrustumPlanes::new(planes))
    }
}

/// Both frustum representations, kept in sync.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frustum {
    /// Face planes.
    pub planes: FrustumPlanes,
    /// Corner points.
    pub points: FrustumPoints,
}

impl Frustum {
    /// Builds both forms from a view-projection matrix.
    pub fn from_view_projection(view_proj: &Mat4) -> Option<Self> {
        Some(Self {
            planes: FrustumPlanes::from_matrix(view_proj),
            points: FrustumPoints::from_matrix(view_proj)?,
        })
    }

    /// Builds both forms from corner points.
    pub fn from_points(points: FrustumPoints) -> Option<Self> {
        Some(Self {
            planes: points.to_planes()?,
            points,
        })
    }
}

/// Camera-space frustum for radar-style containment tests.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrustumRadar {
    eye: Vec3,
    forward: Vec3,
    up: Vec3,
    right: Vec3,
    near: f32,
    far: f32,
    tan_x: f32,
    tan_y: f32,
    sphere_factor_x: f32,
    sphere_factor_y: f32,
}

impl FrustumRadar {
    /// Builds a left-handed camera frustum looking along `forward`.
    ///
    /// `right = up × forward`; `up` is re-orthogonalised against `forward`.
    /// `fov_y` is the full vertical angle in radians and `aspect` is
    /// width over height.
    pub fn new(
        eye: Vec3,
        forward: Vec3,
        up: Vec3,
        near: f32,
        far: f32,
        fov_y: f32,
        aspect: f32,
    ) -> Self {
        let forward = forward.normalize();
        let right = up.cross(&forward).normalize();
        let up = forward.cross(&right);
        let tan_y = (fov_y * 0.5).tan();
        let tan_x = tan_y * aspect;
        Self {
            eye,
            forward,
            up,
            right,
            near,
            far,
            tan_x,
            tan_y,
            sphere_factor_x: tan_x.mul_add(tan_x, 1.0).sqrt(),
            sphere_factor_y: tan_y.mul_add(tan_y, 1.0).sqrt(),
        }
    }

    /// Camera position.
    pub const fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Unit view direction.
    pub const fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Unit up vector.
    pub const fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit right vector.
    pub const fn right(&self) -> Vec3 {
        self.right
    }

    /// Near distance.
    pub const fn near(&self) -> f32 {
        self.near
    }

    /// Far distance.
    pub const fn far(&self) -> f32 {
        self.far
    }

    /// Tangent of the horizontal half-angle.
    pub const fn tan_x(&self) -> f32 {
        self.tan_x
    }

    /// Tangent of the vertical half-angle.
    pub const fn tan_y(&self) -> f32 {
        self.tan_y
    }

    /// `1 / cos` of the horizontal half-angle; widens the side test for spheres.
    pub const fn sphere_factor_x(&self) -> f32 {
        self.sphere_factor_x
    }

    /// `1 / cos` of the vertical half-angle.
    pub const fn sphere_factor_y(&self) -> f32 {
        self.sphere_factor_y
    }

    /// Camera-space coordinates `(right, up, forward)` of a world point.
    pub fn to_camera(&self, p: &Vec3) -> Vec3 {
        let v = p.sub(&self.eye);
        Vec3::new(v.dot(&self.right), v.dot(&self.up), v.dot(&self.forward))
    }

    /// Corner points in the bit-indexed layout of [`FrustumPoints`].
    pub fn to_points(&self) -> FrustumPoints {
        let points = core::array::from_fn(|i| {
            let dist = if i & 4 == 0 { self.near } else { self.far };
            let sx = if i & 1 == 0 { -1.0 } else { 1.0 };
            let sy = if i & 2 == 0 { -1.0 } else { 1.0 };
            self.eye
                .add(&self.forward.scale(dist))
                .add(&self.right.scale(sx * dist * self.tan_x))
                .add(&self.up.scale(sy * dist * self.tan_y))
        });
        FrustumPoints::new(points)
    }
}
