// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Random point sampling.
//!
//! Every sampler takes the generator explicitly; there is no ambient RNG.
//! Distributions are uniform over the named region.

use std::f32::consts::{SQRT_2, TAU};

use echo_math::{Prng, Quat, UniformSource, Vec2, Vec3};
use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::types::aabb::Aabb;
use crate::types::rect::Rect;

const POISSON_TABLE_SEED: u64 = 0x9E37_79B9_7F4A_7C15;
const POISSON_TABLE_MIN_DISTANCE: f32 = 0.2;
const POISSON_TABLE_ATTEMPTS: usize = 30;

/// Largest acceleration grid [`poisson_disc_sample`] will allocate.
pub const POISSON_MAX_GRID_CELLS: usize = 1 << 22;

static POISSON_DISC_TABLE: Lazy<Vec<Vec2>> = Lazy::new(|| {
    let mut rng = Prng::from_seed_u64(POISSON_TABLE_SEED);
    let square = Rect::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
    let table: Vec<Vec2> = poisson_disc_sample(
        &mut rng,
        &square,
        POISSON_TABLE_MIN_DISTANCE,
        POISSON_TABLE_ATTEMPTS,
    )
    .into_iter()
    .filter(|p| p.length_squared() <= 1.0)
    .collect();
    debug!(samples = table.len(), "poisson disc table initialised");
    table
});

/// Uniform direction on the unit sphere.
pub fn random_unit_vector<R: UniformSource>(rng: &mut R) -> Vec3 {
    let z = rng.uniform(-1.0, 1.0);
    let phi = rng.uniform(0.0, TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}

/// Uniform direction on the unit circle.
pub fn random_unit_vector_2d<R: UniformSource>(rng: &mut R) -> Vec2 {
    let phi = rng.uniform(0.0, TAU);
    Vec2::new(phi.cos(), phi.sin())
}

/// Uniform point inside a ball.
pub fn random_point_in_sphere<R: UniformSource>(rng: &mut R, center: &Vec3, radius: f32) -> Vec3 {
    let dir = random_unit_vector(rng);
    let r = radius * rng.next_unit().cbrt();
    center.add(&dir.scale(r))
}

/// Uniform point inside a disc.
pub fn random_point_in_circle<R: UniformSource>(rng: &mut R, center: &Vec2, radius: f32) -> Vec2 {
    let dir = random_unit_vector_2d(rng);
    let r = radius * rng.next_unit().sqrt();
    center.add(&dir.scale(r))
}

/// Uniform point inside the capsule swept by a ball of `radius` along `a → b`.
///
/// Picks the cylindrical body or the two end caps in proportion to their
/// volumes, so the result is exact without rejection.
pub fn random_point_in_capsule<R: UniformSource>(
    rng: &mut R,
    a: &Vec3,
    b: &Vec3,
    radius: f32,
) -> Vec3 {
    let axis = b.sub(a);
    let height = axis.length();
    let Some(dir) = axis.try_normalize() else {
        return random_point_in_sphere(rng, a, radius);
    };
    let cylinder_share = height / (height + radius * 4.0 / 3.0);
    if rng.next_unit() < cylinder_share {
        let u = dir.any_perpendicular();
        let v = dir.cross(&u);
        let disc = random_point_in_circle(rng, &Vec2::ZERO, radius);
        return a
            .add(&axis.scale(rng.next_unit()))
            .add(&u.scale(disc.x()))
            .add(&v.scale(disc.y()));
    }
    let offset = random_point_in_sphere(rng, &Vec3::ZERO, radius);
    if offset.dot(&dir) >= 0.0 {
        b.add(&offset)
    } else {
        a.add(&offset)
    }
}

/// Uniform point inside a box.
pub fn random_point_in_aabb<R: UniformSource>(rng: &mut R, aabb: &Aabb) -> Vec3 {
    let (lo, hi) = (aabb.min(), aabb.max());
    Vec3::new(
        rng.uniform(lo.x(), hi.x()),
        rng.uniform(lo.y(), hi.y()),
        rng.uniform(lo.z(), hi.z()),
    )
}

/// Uniform point inside a rectangle.
pub fn random_point_in_rect<R: UniformSource>(rng: &mut R, rect: &Rect) -> Vec2 {
    let (lo, hi) = (rect.min(), rect.max());
    Vec2::new(rng.uniform(lo.x(), hi.x()), rng.uniform(lo.y(), hi.y()))
}

/// Uniform point inside triangle `abc` (fold the unit square onto it).
pub fn random_point_in_triangle<R: UniformSource>(
    rng: &mut R,
    a: &Vec3,
    b: &Vec3,
    c: &Vec3,
) -> Vec3 {
    let mut u = rng.next_unit();
    let mut v = rng.next_unit();
    if u + v > 1.0 {
        u = 1.0 - u;
        v = 1.0 - v;
    }
    a.add(&b.sub(a).scale(u)).add(&c.sub(a).scale(v))
}

/// Uniformly distributed unit quaternion (Shoemake's subgroup method).
pub fn random_rotation<R: UniformSource>(rng: &mut R) -> Quat {
    let u1 = rng.next_unit();
    let a = rng.uniform(0.0, TAU);
    let b = rng.uniform(0.0, TAU);
    let r1 = (1.0 - u1).sqrt();
    let r2 = u1.sqrt();
    Quat::new(r1 * a.sin(), r1 * a.cos(), r2 * b.sin(), r2 * b.cos())
}

/// Bridson Poisson-disc sampling of a rectangle.
///
/// Every pair of returned points is at least `min_distance` apart, and the
/// rectangle is filled until no active point can place a new neighbour in
/// `max_attempts` tries. Returns an empty set for a non-positive distance,
/// an invalid rectangle, or when the acceleration grid would exceed
/// [`POISSON_MAX_GRID_CELLS`].
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn poisson_disc_sample<R: UniformSource>(
    rng: &mut R,
    rect: &Rect,
    min_distance: f32,
    max_attempts: usize,
) -> Vec<Vec2> {
    if min_distance <= 0.0 || !rect.is_valid() {
        return Vec::new();
    }
    let origin = rect.min();
    let size = rect.size();
    let cell = min_distance / SQRT_2;
    let cols_f = (size.x() / cell).ceil() + 1.0;
    let rows_f = (size.y() / cell).ceil() + 1.0;
    let cells = f64::from(cols_f) * f64::from(rows_f);
    if cells.is_nan() || cells > POISSON_MAX_GRID_CELLS as f64 {
        warn!(cells, min_distance, "poisson disc grid too large; no samples");
        return Vec::new();
    }
    let cols = cols_f as usize;
    let rows = rows_f as usize;
    let mut grid: Vec<Option<usize>> = vec![None; cols * rows];
    let cell_of = |p: &Vec2| -> (usize, usize) {
        let offset = p.sub(&origin);
        (
            ((offset.x() / cell) as usize).min(cols - 1),
            ((offset.y() / cell) as usize).min(rows - 1),
        )
    };

    let first = random_point_in_rect(rng, rect);
    let (cx, cy) = cell_of(&first);
    grid[cy * cols + cx] = Some(0);
    let mut points = vec![first];
    let mut active = vec![0_usize];
    let min_sq = min_distance * min_distance;

    while !active.is_empty() {
        let slot = ((rng.next_unit() * active.len() as f32) as usize).min(active.len() - 1);
        let base = points[active[slot]];
        let mut placed = false;

        for _ in 0..max_attempts {
            let dist = rng.uniform(min_distance, 2.0 * min_distance);
            let candidate = base.add(&random_unit_vector_2d(rng).scale(dist));
            if !rect.contains_point(&candidate) {
                continue;
            }
            let (cx, cy) = cell_of(&candidate);
            let too_close = |i: usize| points[i].distance_squared(&candidate) < min_sq;
            let near = (cy.saturating_sub(2)..=(cy + 2).min(rows - 1)).any(|y| {
                (cx.saturating_sub(2)..=(cx + 2).min(cols - 1))
                    .any(|x| grid[y * cols + x].is_some_and(too_close))
            });
            if near {
                continue;
            }
            grid[cy * cols + cx] = Some(points.len());
            active.push(points.len());
            points.push(candidate);
            placed = true;
            break;
        }

        if !placed {
            active.swap_remove(slot);
        }
    }
    points
}

/// Fixed Poisson-disc pattern inside the unit disc.
///
/// Generated once from a fixed seed on first use and shared read-only
/// afterwards; identical on every run.
pub fn poisson_disc_table() -> &'static [Vec2] {
    POISSON_DISC_TABLE.as_slice()
}
