// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Affine2d, Vec2, EPSILON};

use crate::error::{GeomError, GeomResult};
use crate::types::plane::PlaneSide;

/// Line `a*x + b*y + c = 0` in the plane.
///
/// Mirrors [`crate::Plane`]: queries that treat [`Line2d::dot_coord`] as a
/// distance require a normalized line (`|(a, b)| = 1`).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line2d {
    normal: Vec2,
    c: f32,
}

impl Line2d {
    /// Creates a line from raw coefficients.
    pub const fn new(a: f32, b: f32, c: f32) -> Self {
        Self {
            normal: Vec2::new(a, b),
            c,
        }
    }

    /// Normalized line through `p0` and `p1`.
    ///
    /// The normal is the direction rotated a quarter turn counter-clockwise,
    /// so points to the left of `p0 → p1` are in front. Returns `None` when
    /// the points coincide.
    pub fn from_points(p0: &Vec2, p1: &Vec2) -> Option<Self> {
        let n = p1.sub(p0).perp().try_normalize()?;
        Some(Self {
            normal: n,
            c: -n.dot(p0),
        })
    }

    /// Normalized line through `point` with the given `normal`.
    pub fn from_point_normal(point: &Vec2, normal: &Vec2) -> GeomResult<Self> {
        let n = normal.try_normalize().ok_or(GeomError::DegenerateNormal)?;
        Ok(Self {
            normal: n,
            c: -n.dot(point),
        })
    }

    /// Coefficients `[a, b, c]`.
    pub const fn to_array(self) -> [f32; 3] {
        [self.normal.x(), self.normal.y(), self.c]
    }

    /// Normal `(a, b)`.
    pub const fn normal(&self) -> Vec2 {
        self.normal
    }

    /// Offset `c`.
    pub const fn c(&self) -> f32 {
        self.c
    }

    /// Direction along the line (normal rotated clockwise).
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.normal.y(), -self.normal.x())
    }

    /// `a*x + b*y + c`.
    pub fn dot_coord(&self, p: &Vec2) -> f32 {
        self.normal.dot(p) + self.c
    }

    /// `a*x + b*y`.
    pub fn dot_normal(&self, v: &Vec2) -> f32 {
        self.normal.dot(v)
    }

    /// Scales coefficients so the normal is unit length.
    pub fn try_normalize(&self) -> GeomResult<Self> {
        let len = self.normal.length();
        if len <= EPSILON {
            return Err(GeomError::DegenerateNormal);
        }
        Ok(Self {
            normal: self.normal.scale(1.0 / len),
            c: self.c / len,
        })
    }

    /// Like [`Line2d::try_normalize`], returning `self` when degenerate.
    #[must_use]
    pub fn normalize(&self) -> Self {
        self.try_normalize().unwrap_or(*self)
    }

    /// Same line facing the other way.
    #[must_use]
    pub fn flip(&self) -> Self {
        Self {
            normal: self.normal.scale(-1.0),
            c: -self.c,
        }
    }

    /// Absolute distance from `p` to a normalized line.
    pub fn distance(&self, p: &Vec2) -> f32 {
        self.dot_coord(p).abs()
    }

    /// Orthogonal projection of `p` onto a normalized line.
    pub fn project_point(&self, p: &Vec2) -> Vec2 {
        p.sub(&self.normal.scale(self.dot_coord(p)))
    }

    /// `true` when `p` lies on a normalized line within `EPSILON`.
    pub fn contains_point(&self, p: &Vec2) -> bool {
        self.dot_coord(p).abs() < EPSILON
    }

    /// Front/back/on classification of a point.
    pub fn classify_point(&self, p: &Vec2) -> PlaneSide {
        PlaneSide::from_distance_and_radius(self.dot_coord(p), EPSILON)
    }

    /// `true` when the normals are parallel (within `EPSILON`).
    pub fn is_parallel(&self, other: &Self) -> bool {
        self.normal.perp_dot(&other.normal).abs() <= EPSILON
    }

    /// `true` when the normals are perpendicular (within `EPSILON`).
    pub fn is_perpendicular(&self, other: &Self) -> bool {
        self.normal.dot(&other.normal).abs() <= EPSILON
    }

    /// Intersection point, or `None` for parallel lines.
    pub fn intersection(&self, other: &Self) -> Option<Vec2> {
        let det = self.normal.perp_dot(&other.normal);
        if det.abs() <= EPSILON {
            return None;
        }
        let x = (self.normal.y() * other.c - other.normal.y() * self.c) / det;
        let y = (other.normal.x() * self.c - self.normal.x() * other.c) / det;
        Some(Vec2::new(x, y))
    }

    /// Applies the point transform `m` to the line.
    ///
    /// Lines transform by the inverse transpose of the point matrix; the
    /// result is renormalised. Returns `None` when `m` is singular.
    pub fn transformed(&self, m: &Affine2d) -> Option<Self> {
        let [i00, i01, i10, i11, ix, iy] = m.try_inverse()?.to_array();
        let (a, b) = (self.normal.x(), self.normal.y());
        let c = ix * a + iy * b + self.c;
        Some(Self::new(i00 * a + i01 * b, i10 * a + i11 * b, c).normalize())
    }
}
