// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::cmp::Ordering;

use echo_math::{orient_2d, Vec2};
use tracing::{debug, instrument};

use crate::error::{GeomError, GeomResult};

/// Convex hull of a 2D point set (Graham scan).
///
/// * Exact duplicates are removed first.
/// * The pivot is the lowest point, the rightmost one on ties.
/// * Output is counter-clockwise starting at the pivot, with no repeated
///   or collinear vertices (the farther of two collinear points is kept).
/// * Fewer than three distinct points is an error. All-collinear input
///   yields just its two extreme points.
#[instrument(level = "trace", skip(points), fields(count = points.len()))]
pub fn convex_hull_2d(points: &[Vec2]) -> GeomResult<Vec<Vec2>> {
    let mut unique = points.to_vec();
    unique.sort_by(|a, b| a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y())));
    unique.dedup();
    let dropped = points.len() - unique.len();
    if dropped > 0 {
        debug!(dropped, "convex hull dropped duplicate points");
    }
    if unique.len() < 3 {
        return Err(GeomError::InsufficientPoints {
            required: 3,
            actual: unique.len(),
        });
    }

    let pivot_idx = unique
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.y().total_cmp(&b.y()).then(b.x().total_cmp(&a.x())))
        .map_or(0, |(i, _)| i);
    let pivot = unique.swap_remove(pivot_idx);

    unique.sort_by(|a, b| {
        let turn = orient_2d(&pivot, a, b);
        if turn > 0.0 {
            Ordering::Less
        } else if turn < 0.0 {
            Ordering::Greater
        } else {
            pivot.distance_squared(a).total_cmp(&pivot.distance_squared(b))
        }
    });

    let mut hull: Vec<Vec2> = Vec::with_capacity(unique.len() + 1);
    hull.push(pivot);
    for p in unique {
        while let [.., prev, last] = hull.as_slice() {
            if orient_2d(prev, last, &p) > 0.0 {
                break;
            }
            hull.pop();
        }
        hull.push(p);
    }

    if hull.len() < 3 {
        debug!("convex hull input is collinear");
    }
    Ok(hull)
}
