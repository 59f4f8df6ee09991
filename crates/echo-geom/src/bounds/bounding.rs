// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Vec2, Vec3};
use tracing::trace;

use crate::error::{GeomError, GeomResult};
use crate::types::aabb::Aabb;
use crate::types::rect::Rect;

/// Smallest box containing every point.
pub fn aabb_from_points<'a, I>(points: I) -> GeomResult<Aabb>
where
    I: IntoIterator<Item = &'a Vec3>,
{
    Aabb::from_points(points)
}

/// Smallest rectangle containing every point.
pub fn rect_from_points<'a, I>(points: I) -> GeomResult<Rect>
where
    I: IntoIterator<Item = &'a Vec2>,
{
    let mut iter = points.into_iter();
    let first = iter.next().ok_or(GeomError::EmptyPointSet)?;
    let mut rect = Rect::new(*first, *first);
    for p in iter {
        rect.extend(p);
    }
    Ok(rect)
}

/// Single-pass bounding sphere `(center, radius)`.
///
/// Starts as the first point with radius zero. Each later point outside the
/// current sphere grows it just enough to reach that point while keeping
/// the opposite side fixed. The result contains every point but is not
/// minimal; its quality depends on input order.
pub fn bounding_sphere<'a, I>(points: I) -> GeomResult<(Vec3, f32)>
where
    I: IntoIterator<Item = &'a Vec3>,
{
    let mut iter = points.into_iter();
    let mut center = *iter.next().ok_or(GeomError::EmptyPointSet)?;
    let mut radius = 0.0_f32;
    let mut growth_steps = 0_u32;
    for p in iter {
        let offset = p.sub(&center);
        let dist = offset.length();
        if dist > radius {
            let new_radius = (radius + dist) * 0.5;
            center = center.add(&offset.scale((new_radius - radius) / dist));
            radius = new_radius;
            growth_steps += 1;
        }
    }
    trace!(growth_steps, radius, "bounding sphere built");
    Ok((center, radius))
}

/// Single-pass bounding circle `(center, radius)`; see [`bounding_sphere`].
pub fn bounding_circle<'a, I>(points: I) -> GeomResult<(Vec2, f32)>
where
    I: IntoIterator<Item = &'a Vec2>,
{
    let mut iter = points.into_iter();
    let mut center = *iter.next().ok_or(GeomError::EmptyPointSet)?;
    let mut radius = 0.0_f32;
    let mut growth_steps = 0_u32;
    for p in iter {
        let offset = p.sub(&center);
        let dist = offset.length();
        if dist > radius {
            let new_radius = (radius + dist) * 0.5;
            center = center.add(&offset.scale((new_radius - radius) / dist));
            radius = new_radius;
            growth_steps += 1;
        }
    }
    trace!(growth_steps, radius, "bounding circle built");
    Ok((center, radius))
}

/// Sphere circumscribing a box.
pub fn sphere_from_aabb(aabb: &Aabb) -> (Vec3, f32) {
    (aabb.center(), aabb.half_extents().length())
}

/// Box circumscribing a sphere.
pub fn aabb_from_sphere(center: &Vec3, radius: f32) -> Aabb {
    Aabb::from_center_half_extents(*center, radius, radius, radius)
}

/// Circle circumscribing a rectangle.
pub fn circle_from_rect(rect: &Rect) -> (Vec2, f32) {
    (rect.center(), rect.size().length() * 0.5)
}
