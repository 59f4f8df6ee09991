// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Point2i, Vec2};

use crate::error::{GeomError, GeomResult};

/// Axis-aligned float rectangle given by its min/max corners.
///
/// A rectangle is *valid* when `min < max` on both axes. The
/// [`Rect::inverted`] sentinel (`min = +∞`, `max = -∞`) is legal and is the
/// identity for [`Rect::union`] and [`Rect::extend`], which makes it the seed
/// for min/max accumulation.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    min: Vec2,
    max: Vec2,
}

impl Rect {
    /// Constructs a rectangle without validating the corners.
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Constructs a rectangle, rejecting `min > max` on either axis.
    pub fn try_new(min: Vec2, max: Vec2) -> GeomResult<Self> {
        for axis in 0..2 {
            if min[axis] > max[axis] {
                return Err(GeomError::InvertedBounds { axis });
            }
        }
        Ok(Self { min, max })
    }

    /// Empty accumulation seed.
    pub const fn inverted() -> Self {
        Self::new(
            Vec2::new(f32::INFINITY, f32::INFINITY),
            Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        )
    }

    /// Rectangle from a corner and a size.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin, origin.add(&size))
    }

    /// Minimum corner.
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Maximum corner.
    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// `true` when `min < max` on both axes.
    pub fn is_valid(&self) -> bool {
        self.min.x() < self.max.x() && self.min.y() < self.max.y()
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        self.min.add(&self.max).scale(0.5)
    }

    /// Width and height.
    pub fn size(&self) -> Vec2 {
        self.max.sub(&self.min)
    }

    /// Width × height (not clamped for inverted rectangles).
    pub fn area(&self) -> f32 {
        let s = self.size();
        s.x() * s.y()
    }

    /// Grows the rectangle to include `p`.
    pub fn extend(&mut self, p: &Vec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.min.min(&other.min), self.max.max(&other.max))
    }

    /// Overlap region, or `None` when the rectangles do not overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let r = Self::new(self.min.max(&other.min), self.max.min(&other.max));
        (r.min.x() <= r.max.x() && r.min.y() <= r.max.y()).then_some(r)
    }

    /// `true` when `p` lies inside or on the boundary.
    pub fn contains_point(&self, p: &Vec2) -> bool {
        p.x() >= self.min.x()
            && p.x() <= self.max.x()
            && p.y() >= self.min.y()
            && p.y() <= self.max.y()
    }

    /// `true` when `other` lies entirely inside `self`.
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// `true` when the rectangles overlap (touching edges count).
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.max.x() < other.min.x()
            || self.min.x() > other.max.x()
            || self.max.y() < other.min.y()
            || self.min.y() > other.max.y())
    }

    /// Grows every side by `margin` (shrinks when negative).
    pub fn inflate(&self, margin: f32) -> Self {
        let d = Vec2::new(margin, margin);
        Self::new(self.min.sub(&d), self.max.add(&d))
    }

    /// Translates by `delta`.
    pub fn offset(&self, delta: &Vec2) -> Self {
        Self::new(self.min.add(delta), self.max.add(delta))
    }

    /// Closest point inside the rectangle to `p`.
    pub fn closest_point(&self, p: &Vec2) -> Vec2 {
        p.max(&self.min).min(&self.max)
    }

    /// Corners in counter-clockwise order starting at `min`.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x(), self.min.y()),
            self.max,
            Vec2::new(self.min.x(), self.max.y()),
        ]
    }
}

/// Integer rectangle with the same min/max conventions as [`Rect`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectI {
    min: Point2i,
    max: Point2i,
}

impl RectI {
    /// Constructs a rectangle without validating the corners.
    pub const fn new(min: Point2i, max: Point2i) -> Self {
        Self { min, max }
    }

    /// Constructs a rectangle, rejecting `min > max` on either axis.
    pub fn try_new(min: Point2i, max: Point2i) -> GeomResult<Self> {
        if min.x > max.x {
            return Err(GeomError::InvertedBounds { axis: 0 });
        }
        if min.y > max.y {
            return Err(GeomError::InvertedBounds { axis: 1 });
        }
        Ok(Self { min, max })
    }

    /// Empty accumulation seed.
    pub const fn inverted() -> Self {
        Self::new(Point2i::new(i32::MAX, i32::MAX), Point2i::new(i32::MIN, i32::MIN))
    }

    /// Minimum corner.
    pub const fn min(&self) -> Point2i {
        self.min
    }

    /// Maximum corner.
    pub const fn max(&self) -> Point2i {
        self.max
    }

    /// `true` when `min < max` on both axes.
    pub const fn is_valid(&self) -> bool {
        self.min.x < self.max.x && self.min.y < self.max.y
    }

    /// Width and height.
    pub fn size(&self) -> Point2i {
        self.max - self.min
    }

    /// Width × height, widened to avoid overflow.
    pub fn area(&self) -> i64 {
        let s = self.size();
        i64::from(s.x) * i64::from(s.y)
    }

    /// Grows the rectangle to include `p`.
    pub fn extend(&mut self, p: Point2i) {
        self.min = Point2i::new(self.min.x.min(p.x), self.min.y.min(p.y));
        self.max = Point2i::new(self.max.x.max(p.x), self.max.y.max(p.y));
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Self) -> Self {
        let mut r = *self;
        r.extend(other.min);
        r.extend(other.max);
        r
    }

    /// Overlap region, or `None` when the rectangles do not overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let r = Self::new(
            Point2i::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            Point2i::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        );
        (r.min.x <= r.max.x && r.min.y <= r.max.y).then_some(r)
    }

    /// `true` when `p` lies inside or on the boundary.
    pub const fn contains_point(&self, p: Point2i) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// `true` when the rectangles overlap (touching edges count).
    pub const fn overlaps(&self, other: &Self) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }

    /// Grows every side by `margin`.
    pub fn inflate(&self, margin: i32) -> Self {
        let d = Point2i::new(margin, margin);
        Self::new(self.min - d, self.max + d)
    }

    /// Translates by `delta`.
    pub fn offset(&self, delta: Point2i) -> Self {
        Self::new(self.min + delta, self.max + delta)
    }

    /// Converts to a float rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min.to_vec2(), self.max.to_vec2())
    }
}
