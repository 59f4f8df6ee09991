// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Mat4, Vec3};

use crate::error::{GeomError, GeomResult};
use crate::types::plane::{Plane, PlaneSide};

/// Axis-aligned bounding box.
///
/// Invariants:
/// - A *valid* box has `min < max` on every axis.
/// - [`Aabb::inverted`] (`min = +∞`, `max = -∞`) is a legal sentinel that
///   acts as the identity for [`Aabb::union`] and [`Aabb::extend`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Constructs an AABB from its corners without validation.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Constructs an AABB, rejecting any `min > max` component.
    pub fn try_new(min: Vec3, max: Vec3) -> GeomResult<Self> {
        for axis in 0..3 {
            if min.component(axis) > max.component(axis) {
                return Err(GeomError::InvertedBounds { axis });
            }
        }
        Ok(Self { min, max })
    }

    /// Empty accumulation seed.
    pub const fn inverted() -> Self {
        Self::new(Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY))
    }

    /// Returns the minimum corner.
    pub const fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    pub const fn max(&self) -> Vec3 {
        self.max
    }

    /// Builds an AABB centered at `center` with half-extents `hx, hy, hz`.
    pub fn from_center_half_extents(center: Vec3, hx: f32, hy: f32, hz: f32) -> Self {
        let he = Vec3::new(hx, hy, hz);
        Self::new(center.sub(&he), center.add(&he))
    }

    /// Builds the minimal AABB that contains all `points`.
    pub fn from_points<'a, I>(points: I) -> GeomResult<Self>
    where
        I: IntoIterator<Item = &'a Vec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next().ok_or(GeomError::EmptyPointSet)?;
        let mut out = Self::new(*first, *first);
        for p in iter {
            out.extend(p);
        }
        Ok(out)
    }

    /// `true` when `min < max` on every axis.
    pub fn is_valid(&self) -> bool {
        (0..3).all(|i| self.min.component(i) < self.max.component(i))
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        self.min.add(&self.max).scale(0.5)
    }

    /// Half-extents along each axis.
    pub fn half_extents(&self) -> Vec3 {
        self.max.sub(&self.min).scale(0.5)
    }

    /// Full size along each axis.
    pub fn size(&self) -> Vec3 {
        self.max.sub(&self.min)
    }

    /// Volume (not clamped for inverted boxes).
    pub fn volume(&self) -> f32 {
        let s = self.size();
        s.x() * s.y() * s.z()
    }

    /// Eight corners; bit `i` of the index selects `max` on axis `i`.
    pub fn corners(&self) -> [Vec3; 8] {
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        [
            Vec3::new(minx, miny, minz),
            Vec3::new(maxx, miny, minz),
            Vec3::new(minx, maxy, minz),
            Vec3::new(maxx, maxy, minz),
            Vec3::new(minx, miny, maxz),
            Vec3::new(maxx, miny, maxz),
            Vec3::new(minx, maxy, maxz),
            Vec3::new(maxx, maxy, maxz),
        ]
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|i| {
            self.max.component(i) >= other.min.component(i)
                && self.min.component(i) <= other.max.component(i)
        })
    }

    /// `true` when `p` lies inside or on the boundary.
    pub fn contains_point(&self, p: &Vec3) -> bool {
        (0..3).all(|i| {
            p.component(i) >= self.min.component(i) && p.component(i) <= self.max.component(i)
        })
    }

    /// `true` when `other` lies entirely inside `self`.
    pub fn contains_aabb(&self, other: &Self) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// Grows the box to include `p`.
    pub fn extend(&mut self, p: &Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Returns the union of two AABBs.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.min.min(&other.min), self.max.max(&other.max))
    }

    /// Overlap region, or `None` when disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let r = Self::new(self.min.max(&other.min), self.max.min(&other.max));
        (0..3)
            .all(|i| r.min.component(i) <= r.max.component(i))
            .then_some(r)
    }

    /// Inflates the box by a uniform margin `m` in all directions.
    pub fn inflate(&self, m: f32) -> Self {
        let delta = Vec3::splat(m);
        Self::new(self.min.sub(&delta), self.max.add(&delta))
    }

    /// Translates by `delta`.
    pub fn offset(&self, delta: &Vec3) -> Self {
        Self::new(self.min.add(delta), self.max.add(delta))
    }

    /// Computes the AABB that bounds this box after transformation by `mat`.
    ///
    /// Uses Arvo's method: each output extent accumulates the smaller and
    /// larger of `m[i][j] * min[i]` and `m[i][j] * max[i]`, which equals
    /// transforming all eight corners without materialising them.
    pub fn transformed(&self, mat: &Mat4) -> Self {
        let t = mat.translation_part();
        let mut lo = [t.x(), t.y(), t.z()];
        let mut hi = lo;
        for i in 0..3 {
            for (j, (l, h)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                let a = mat.get(i, j) * self.min.component(i);
                let b = mat.get(i, j) * self.max.component(i);
                *l += a.min(b);
                *h += a.max(b);
            }
        }
        Self::new(Vec3::from(lo), Vec3::from(hi))
    }

    /// Closest point inside the box to `p` (clamps each coordinate).
    pub fn closest_point(&self, p: &Vec3) -> Vec3 {
        p.max(&self.min).min(&self.max)
    }

    /// Squared distance from `p` to the box; zero when inside.
    pub fn distance_squared_to_point(&self, p: &Vec3) -> f32 {
        self.closest_point(p).distance_squared(p)
    }

    /// Classifies the box against a normalized plane.
    ///
    /// Compares the projected radius `Σ |n_i| * e_i` with the signed distance
    /// of the center.
    pub fn classify(&self, plane: &Plane) -> PlaneSide {
        let e = self.half_extents();
        let r = e.dot(&plane.normal().abs());
        PlaneSide::from_distance_and_radius(plane.dot_coord(&self.center()), r)
    }
}
