// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Mat4, Vec3};

use crate::error::{GeomError, GeomResult};
use crate::types::aabb::Aabb;
use crate::types::plane::{Plane, PlaneSide};

const ORTHONORMAL_TOLERANCE: f32 = 1e-3;

/// Oriented bounding box: center, half-extents and an orthonormal axis triple.
///
/// Every query assumes the axes are unit length and mutually perpendicular.
/// [`Obb::try_new`] checks this; [`Obb::new`] only `debug_assert!`s it.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obb {
    center: Vec3,
    half_extents: Vec3,
    axes: [Vec3; 3],
}

fn axes_orthonormal(axes: &[Vec3; 3]) -> bool {
    axes.iter().all(|a| a.is_normalized(ORTHONORMAL_TOLERANCE))
        && axes[0].dot(&axes[1]).abs() <= ORTHONORMAL_TOLERANCE
        && axes[0].dot(&axes[2]).abs() <= ORTHONORMAL_TOLERANCE
        && axes[1].dot(&axes[2]).abs() <= ORTHONORMAL_TOLERANCE
}

impl Obb {
    /// Constructs an OBB; axes must already be orthonormal.
    pub fn new(center: Vec3, half_extents: Vec3, axes: [Vec3; 3]) -> Self {
        debug_assert!(axes_orthonormal(&axes), "OBB axes must be orthonormal");
        Self {
            center,
            half_extents,
            axes,
        }
    }

    /// Checked constructor.
    pub fn try_new(center: Vec3, half_extents: Vec3, axes: [Vec3; 3]) -> GeomResult<Self> {
        for axis in 0..3 {
            let value = half_extents.component(axis);
            if value < 0.0 {
                return Err(GeomError::NegativeExtent { axis, value });
            }
        }
        if !axes_orthonormal(&axes) {
            return Err(GeomError::NonOrthonormalAxes);
        }
        Ok(Self {
            center,
            half_extents,
            axes,
        })
    }

    /// Axis-aligned OBB equal to `aabb`.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self {
            center: aabb.center(),
            half_extents: aabb.half_extents(),
            axes: [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z],
        }
    }

    /// Places `aabb` under the rigid-plus-scale transform `m`.
    ///
    /// Each basis row of `m` becomes an axis; its length scales the matching
    /// half-extent. Shear is not representable and is dropped by
    /// re-orthonormalising the rows.
    pub fn from_aabb_transform(aabb: &Aabb, m: &Mat4) -> Self {
        let (rx, ry, rz) = m.to_axes();
        let (ax, ay, az) = Vec3::orthogonalize(&rx, &ry);
        let e = aabb.half_extents();
        Self {
            center: m.transform_point(&aabb.center()),
            half_extents: Vec3::new(e.x() * rx.length(), e.y() * ry.length(), e.z() * rz.length()),
            axes: [ax, ay, az],
        }
    }

    /// Center point.
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Half-extents along each local axis.
    pub const fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    /// Local axes (unit, orthogonal).
    pub const fn axes(&self) -> [Vec3; 3] {
        self.axes
    }

    /// Local axis `i`.
    pub const fn axis(&self, i: usize) -> Vec3 {
        self.axes[i]
    }

    /// Local-to-world transform (rows are the axes, last row the center).
    pub const fn to_mat4(&self) -> Mat4 {
        Mat4::from_axes(self.axes[0], self.axes[1], self.axes[2], self.center)
    }

    /// Expresses a world point in box-local coordinates.
    pub fn to_local(&self, p: &Vec3) -> Vec3 {
        let d = p.sub(&self.center);
        Vec3::new(d.dot(&self.axes[0]), d.dot(&self.axes[1]), d.dot(&self.axes[2]))
    }

    /// Eight corners; bit `i` of the index selects `+e_i` on axis `i`.
    pub fn corners(&self) -> [Vec3; 8] {
        let ex = self.axes[0].scale(self.half_extents.x());
        let ey = self.axes[1].scale(self.half_extents.y());
        let ez = self.axes[2].scale(self.half_extents.z());
        core::array::from_fn(|i| {
            let sx = if i & 1 == 0 { -1.0 } else { 1.0 };
            let sy = if i & 2 == 0 { -1.0 } else { 1.0 };
            let sz = if i & 4 == 0 { -1.0 } else { 1.0 };
            self.center
                .add(&ex.scale(sx))
                .add(&ey.scale(sy))
                .add(&ez.scale(sz))
        })
    }

    /// Radius of the box projected onto direction `d` (not necessarily unit).
    pub fn projected_radius(&self, d: &Vec3) -> f32 {
        (0..3)
            .map(|i| self.half_extents.component(i) * self.axes[i].dot(d).abs())
            .sum()
    }

    /// Smallest AABB enclosing the box.
    pub fn to_aabb(&self) -> Aabb {
        let r = Vec3::new(
            self.projected_radius(&Vec3::UNIT_X),
            self.projected_radius(&Vec3::UNIT_Y),
            self.projected_radius(&Vec3::UNIT_Z),
        );
        Aabb::new(self.center.sub(&r), self.center.add(&r))
    }

    /// Closest point on or in the box to `p`.
    pub fn closest_point(&self, p: &Vec3) -> Vec3 {
        let local = self.to_local(p);
        (0..3).fold(self.center, |acc, i| {
            let e = self.half_extents.component(i);
            acc.add(&self.axes[i].scale(local.component(i).clamp(-e, e)))
        })
    }

    /// Squared distance from `p` to the box; zero when inside.
    pub fn distance_squared_to_point(&self, p: &Vec3) -> f32 {
        self.closest_point(p).distance_squared(p)
    }

    /// `true` when `p` lies inside or on the boundary.
    pub fn contains_point(&self, p: &Vec3) -> bool {
        let local = self.to_local(p);
        (0..3).all(|i| local.component(i).abs() <= self.half_extents.component(i))
    }

    /// Classifies the box against a normalized plane.
    pub fn classify(&self, plane: &Plane) -> PlaneSide {
        let r = self.projected_radius(&plane.normal());
        PlaneSide::from_distance_and_radius(plane.dot_coord(&self.center), r)
    }
}
