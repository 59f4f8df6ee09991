// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::Vec2;

/// Integer 2D point, e.g. a pixel or grid cell coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2i {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point2i {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts to a float vector.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Rounds a float vector to the nearest integer point.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_vec2_round(v: &Vec2) -> Self {
        Self::new(v.x().round() as i32, v.y().round() as i32)
    }

    /// Multiplies both coordinates by `s`.
    pub const fn scale(self, s: i32) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Manhattan distance.
    pub const fn manhattan(&self, other: &Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl core::ops::Add for Point2i {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::Sub for Point2i {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
