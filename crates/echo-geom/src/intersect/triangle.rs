// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Triangle-vs-shape tests.
//!
//! Touching counts as overlapping throughout. Zero-area triangles overlap
//! nothing in the coplanar case.

use echo_math::{orient_2d, Vec2, Vec3};

use crate::intersect::point::closest_point_on_triangle;
use crate::types::aabb::Aabb;
use crate::types::plane::{Plane, PlaneSide};

/// Relative tolerance for a vertex to count as lying on the other
/// triangle's plane in [`tri_tri_overlap`].
pub const COPLANAR_EPSILON: f32 = 1e-5;

/// Triangle with vertices `p`, `q`, `r` (Devillers–Guigue naming).
#[derive(Copy, Clone)]
struct Tri<'a> {
    p: &'a Vec3,
    q: &'a Vec3,
    r: &'a Vec3,
}

impl<'a> Tri<'a> {
    const fn new(p: &'a Vec3, q: &'a Vec3, r: &'a Vec3) -> Self {
        Self { p, q, r }
    }

    /// The same triangle with `q` and `r` exchanged.
    const fn swapped(self) -> Self {
        Self::new(self.p, self.r, self.q)
    }

    /// Rotated so that `r` becomes the first vertex.
    const fn rotated_r(self) -> Self {
        Self::new(self.r, self.p, self.q)
    }

    /// Rotated so that `q` becomes the first vertex.
    const fn rotated_q(self) -> Self {
        Self::new(self.q, self.r, self.p)
    }
}

/// Signed distances (scaled) of `p`, `q`, `r` to the plane through `base`.
#[derive(Copy, Clone)]
struct Dists {
    p: f32,
    q: f32,
    r: f32,
}

impl Dists {
    /// Distances of `t`'s vertices to the plane of `base`.
    ///
    /// `normal` is the unnormalized cross product of `base`'s edges at `r`.
    /// A distance within `COPLANAR_EPSILON` of zero, relative to the edge
    /// lengths behind `normal` and the vertex offset, is snapped to exactly
    /// zero so the sign tests see it as lying on the plane.
    fn of(t: Tri<'_>, base: Tri<'_>, normal: &Vec3) -> Self {
        let span = base.p.distance(base.r) * base.q.distance(base.r);
        let dist = |v: &Vec3| {
            let rel = v.sub(base.r);
            let d = rel.dot(normal);
            if d.abs() <= COPLANAR_EPSILON * span * rel.length() {
                0.0
            } else {
                d
            }
        };
        Self {
            p: dist(t.p),
            q: dist(t.q),
            r: dist(t.r),
        }
    }

    fn strictly_one_side(&self) -> bool {
        self.p * self.q > 0.0 && self.p * self.r > 0.0
    }

    const fn swapped(self) -> Self {
        Self {
            p: self.p,
            q: self.r,
            r: self.q,
        }
    }
}

/// Triangle vs triangle in 3D (Devillers–Guigue).
///
/// Each triangle is first tested against the other's plane. Otherwise both
/// are permuted into a canonical form where `p` is alone on its side and
/// the overlap of the two intervals on the planes' intersection line is
/// decided with two orientation predicates. Coplanar triangles are
/// projected onto the coordinate plane that drops the dominant axis of the
/// normal and handed to [`tri_tri_overlap_2d`].
pub fn tri_tri_overlap(p1: &Vec3, q1: &Vec3, r1: &Vec3, p2: &Vec3, q2: &Vec3, r2: &Vec3) -> bool {
    let t1 = Tri::new(p1, q1, r1);
    let t2 = Tri::new(p2, q2, r2);

    let n2 = p2.sub(r2).cross(&q2.sub(r2));
    let d1 = Dists::of(t1, t2, &n2);
    if d1.strictly_one_side() {
        return false;
    }

    let n1 = q1.sub(p1).cross(&r1.sub(p1));
    let d2 = Dists::of(t2, t1, &n1);
    if d2.strictly_one_side() {
        return false;
    }

    let (a, b, d) = if d1.p > 0.0 {
        if d1.q > 0.0 {
            (t1.rotated_r(), t2.swapped(), d2.swapped())
        } else if d1.r > 0.0 {
            (t1.rotated_q(), t2.swapped(), d2.swapped())
        } else {
            (t1, t2, d2)
        }
    } else if d1.p < 0.0 {
        if d1.q < 0.0 {
            (t1.rotated_r(), t2, d2)
        } else if d1.r < 0.0 {
            (t1.rotated_q(), t2, d2)
        } else {
            (t1, t2.swapped(), d2.swapped())
        }
    } else if d1.q < 0.0 {
        if d1.r >= 0.0 {
            (t1.rotated_q(), t2.swapped(), d2.swapped())
        } else {
            (t1, t2, d2)
        }
    } else if d1.q > 0.0 {
        if d1.r > 0.0 {
            (t1, t2.swapped(), d2.swapped())
        } else {
            (t1.rotated_q(), t2, d2)
        }
    } else if d1.r > 0.0 {
        (t1.rotated_r(), t2, d2)
    } else if d1.r < 0.0 {
        (t1.rotated_r(), t2.swapped(), d2.swapped())
    } else {
        return coplanar_overlap(t1, t2, &n1);
    };
    canonical_overlap(a, b, d, &n1)
}

/// Second permutation stage: puts `b` in canonical form and runs the
/// interval check.
fn canonical_overlap(a: Tri<'_>, b: Tri<'_>, d: Dists, n1: &Vec3) -> bool {
    let (a2, b2) = if d.p > 0.0 {
        if d.q > 0.0 {
            (a.swapped(), b.rotated_r())
        } else if d.r > 0.0 {
            (a.swapped(), b.rotated_q())
        } else {
            (a, b)
        }
    } else if d.p < 0.0 {
        if d.q < 0.0 {
            (a, b.rotated_r())
        } else if d.r < 0.0 {
            (a, b.rotated_q())
        } else {
            (a.swapped(), b)
        }
    } else if d.q < 0.0 {
        if d.r >= 0.0 {
            (a.swapped(), b.rotated_q())
        } else {
            (a, b)
        }
    } else if d.q > 0.0 {
        if d.r > 0.0 {
            (a.swapped(), b)
        } else {
            (a, b.rotated_q())
        }
    } else if d.r > 0.0 {
        (a, b.rotated_r())
    } else if d.r < 0.0 {
        (a.swapped(), b.rotated_r())
    } else {
        return coplanar_overlap(a, b, n1);
    };
    check_min_max(a2, b2)
}

/// Interval overlap on the line shared by both planes.
fn check_min_max(a: Tri<'_>, b: Tri<'_>) -> bool {
    let n = b.p.sub(a.q).cross(&a.p.sub(a.q));
    if b.q.sub(a.q).dot(&n) > 0.0 {
        return false;
    }
    let n = b.p.sub(a.p).cross(&a.r.sub(a.p));
    b.r.sub(a.p).dot(&n) <= 0.0
}

fn coplanar_overlap(a: Tri<'_>, b: Tri<'_>, normal: &Vec3) -> bool {
    let (u, v) = match normal.abs().dominant_axis() {
        0 => (1, 2),
        1 => (2, 0),
        _ => (0, 1),
    };
    let flat = |p: &Vec3| Vec2::new(p.component(u), p.component(v));
    tri_tri_overlap_2d(
        &flat(a.p),
        &flat(a.q),
        &flat(a.r),
        &flat(b.p),
        &flat(b.q),
        &flat(b.r),
    )
}

/// `true` when some edge of `tri` has every point of `other` strictly outside.
fn has_separating_edge(tri: &[Vec2; 3], other: &[Vec2; 3]) -> bool {
    let winding = orient_2d(&tri[0], &tri[1], &tri[2]).signum();
    (0..3).any(|i| {
        let (a, b) = (&tri[i], &tri[(i + 1) % 3]);
        other.iter().all(|p| winding * orient_2d(a, b, p) < 0.0)
    })
}

/// Triangle vs triangle in the plane, for either winding.
///
/// Separating-axis test over the six edge normals. Zero-area triangles
/// never overlap.
pub fn tri_tri_overlap_2d(
    p1: &Vec2,
    q1: &Vec2,
    r1: &Vec2,
    p2: &Vec2,
    q2: &Vec2,
    r2: &Vec2,
) -> bool {
    let t1 = [*p1, *q1, *r1];
    let t2 = [*p2, *q2, *r2];
    if orient_2d(p1, q1, r1) == 0.0 || orient_2d(p2, q2, r2) == 0.0 {
        return false;
    }
    !has_separating_edge(&t1, &t2) && !has_separating_edge(&t2, &t1)
}

/// `true` when projecting the triangle (already relative to the box center)
/// onto `axis` leaves a gap to the box's projection.
fn axis_separates(axis: &Vec3, verts: &[Vec3; 3], half: &Vec3) -> bool {
    let p0 = verts[0].dot(axis);
    let p1 = verts[1].dot(axis);
    let p2 = verts[2].dot(axis);
    let r = half.dot(&axis.abs());
    p0.min(p1).min(p2) > r || p0.max(p1).max(p2) < -r
}

/// Triangle vs box (Akenine-Möller).
///
/// Thirteen candidate axes: the nine cross products of the box axes with
/// the triangle edges, the three box face normals, and the triangle normal.
pub fn tri_aabb_overlap(a: &Vec3, b: &Vec3, c: &Vec3, aabb: &Aabb) -> bool {
    let center = aabb.center();
    let half = aabb.half_extents();
    let verts = [a.sub(&center), b.sub(&center), c.sub(&center)];
    let edges = [
        verts[1].sub(&verts[0]),
        verts[2].sub(&verts[1]),
        verts[0].sub(&verts[2]),
    ];
    let box_axes = [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z];

    for edge in &edges {
        for axis in &box_axes {
            if axis_separates(&axis.cross(edge), &verts, &half) {
                return false;
            }
        }
    }
    for axis in &box_axes {
        if axis_separates(axis, &verts, &half) {
            return false;
        }
    }
    let normal = edges[0].cross(&edges[1]);
    !axis_separates(&normal, &verts, &half)
}

/// Side of a normalized plane the triangle lies on; touching vertices make
/// it [`PlaneSide::Intersecting`].
pub fn tri_plane(a: &Vec3, b: &Vec3, c: &Vec3, plane: &Plane) -> PlaneSide {
    let da = plane.dot_coord(a);
    let db = plane.dot_coord(b);
    let dc = plane.dot_coord(c);
    if da.min(db).min(dc) > 0.0 {
        PlaneSide::Front
    } else if da.max(db).max(dc) < 0.0 {
        PlaneSide::Back
    } else {
        PlaneSide::Intersecting
    }
}

/// Triangle vs sphere.
pub fn tri_sphere(a: &Vec3, b: &Vec3, c: &Vec3, center: &Vec3, radius: f32) -> bool {
    closest_point_on_triangle(center, a, b, c).distance_squared(center) <= radius * radius
}
