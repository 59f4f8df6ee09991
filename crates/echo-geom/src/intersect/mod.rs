// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Intersection and distance engine.
//!
//! Every query is a free function over plain values. Degenerate input
//! (parallel lines, zero-area triangles, zero-length directions) yields
//! `None` or `false`, never a panic or an error.

/// Point-vs-frustum, box/sphere/OBB-vs-frustum, radar and frustum pairs.
pub mod frustum;
/// Interval clipping against inward half-spaces.
pub mod halfspace;
/// Static shape-vs-shape overlap and plane intersections.
pub mod overlap;
/// Containment, closest points and distances.
pub mod point;
/// Ray and segment casts.
pub mod ray;
/// Continuous (swept) collision intervals.
pub mod swept;
/// Triangle-vs-triangle/box/plane/sphere.
pub mod triangle;
