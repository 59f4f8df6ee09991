// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Point containment, closest points and distances.
//!
//! Containment tests are inclusive on the boundary except for the even-odd
//! polygon rule, which is half-open (see [`point_in_polygon`]).

use echo_math::{orient_2d, Vec2, Vec3, EPSILON};

/// `true` when `p` lies inside or on triangle `abc` (either winding).
pub fn point_in_triangle_2d(p: &Vec2, a: &Vec2, b: &Vec2, c: &Vec2) -> bool {
    let d1 = orient_2d(a, b, p);
    let d2 = orient_2d(b, c, p);
    let d3 = orient_2d(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Barycentric weights `(u, v, w)` of `p` with respect to `a`, `b`, `c`, so
/// that `p ≈ u*a + v*b + w*c` after projection onto the triangle's plane.
///
/// Returns `None` for degenerate (zero-area) triangles.
pub fn barycentric(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3) -> Option<Vec3> {
    let v0 = b.sub(a);
    let v1 = c.sub(a);
    let v2 = p.sub(a);
    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);
    let denom = d00 * d11 - d01 * d01;
    if denom.abs() <= EPSILON {
        return None;
    }
    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    Some(Vec3::new(1.0 - v - w, v, w))
}

/// `true` when `p` (assumed to lie in the triangle's plane) is inside or on
/// triangle `abc`. Degenerate triangles contain nothing.
pub fn point_in_triangle(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3) -> bool {
    barycentric(p, a, b, c).is_some_and(|w| w.min_component() >= 0.0)
}

/// `true` when `p` lies inside or on a convex polygon.
///
/// Vertices must be in counter-clockwise order. Classification is a binary
/// search over the fan of triangles around `poly[0]`, so the cost is
/// `O(log n)`. Fewer than three vertices contain nothing.
pub fn point_in_convex_polygon(p: &Vec2, poly: &[Vec2]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    let pivot = &poly[0];
    if orient_2d(pivot, &poly[1], p) < 0.0 || orient_2d(pivot, &poly[n - 1], p) > 0.0 {
        return false;
    }
    let (mut lo, mut hi) = (1, n - 1);
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if orient_2d(pivot, &poly[mid], p) >= 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    orient_2d(&poly[lo], &poly[hi], p) >= 0.0
}

/// Even-odd (crossing number) test for an arbitrary polygon.
///
/// Works for either winding and for self-intersecting outlines. Boundary
/// rule: an edge counts when one endpoint is strictly above `p.y` and the
/// other is not, and the crossing lies strictly right of `p`. Points on a
/// left or bottom edge are therefore inside and points on a right or top
/// edge are outside, which tiles shared edges without double counting.
pub fn point_in_polygon(p: &Vec2, poly: &[Vec2]) -> bool {
    let mut inside = false;
    let mut j = poly.len().wrapping_sub(1);
    for (i, vi) in poly.iter().enumerate() {
        let vj = &poly[j];
        if (vi.y() > p.y()) != (vj.y() > p.y()) {
            let x = (vj.x() - vi.x()) * (p.y() - vi.y()) / (vj.y() - vi.y()) + vi.x();
            if p.x() < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Even-odd test for a planar polygon in 3D.
///
/// The polygon and `p` are projected onto the coordinate plane that drops
/// the dominant axis of the Newell normal, then [`point_in_polygon`] decides
/// with the same boundary rule.
pub fn point_in_polygon_3d(p: &Vec3, poly: &[Vec3]) -> bool {
    if poly.len() < 3 {
        return false;
    }
    let normal = newell_normal(poly);
    let (u, v) = match normal.abs().dominant_axis() {
        0 => (1, 2),
        1 => (2, 0),
        _ => (0, 1),
    };
    let project = |q: &Vec3| Vec2::new(q.component(u), q.component(v));
    let flat: Vec<Vec2> = poly.iter().map(project).collect();
    point_in_polygon(&project(p), &flat)
}

fn newell_normal(poly: &[Vec3]) -> Vec3 {
    let mut n = Vec3::ZERO;
    let mut j = poly.len() - 1;
    for (i, cur) in poly.iter().enumerate() {
        let prev = &poly[j];
        n += Vec3::new(
            (prev.y() - cur.y()) * (prev.z() + cur.z()),
            (prev.z() - cur.z()) * (prev.x() + cur.x()),
            (prev.x() - cur.x()) * (prev.y() + cur.y()),
        );
        j = i;
    }
    n
}

/// `true` when `p` is inside or on the sphere.
pub fn point_in_sphere(p: &Vec3, center: &Vec3, radius: f32) -> bool {
    p.distance_squared(center) <= radius * radius
}

/// `true` when `p` is inside or on the circle.
pub fn point_in_circle(p: &Vec2, center: &Vec2, radius: f32) -> bool {
    p.distance_squared(center) <= radius * radius
}

/// `true` when `p` is inside the capsule swept by a sphere of `radius` along
/// segment `a`–`b`.
pub fn point_in_capsule(p: &Vec3, a: &Vec3, b: &Vec3, radius: f32) -> bool {
    let (q, _) = closest_point_on_segment(p, a, b);
    q.distance_squared(p) <= radius * radius
}

/// `true` when `p` lies in the finite cone with tip `apex`, unit `axis`,
/// `half_angle` (radians) and `height` measured along the axis.
pub fn point_in_cone(p: &Vec3, apex: &Vec3, axis: &Vec3, half_angle: f32, height: f32) -> bool {
    debug_assert!(axis.is_normalized(1e-3), "cone axis must be unit length");
    let v = p.sub(apex);
    let h = v.dot(axis);
    if h < 0.0 || h > height {
        return false;
    }
    let radial_sq = v.length_squared() - h * h;
    let r = h * half_angle.tan();
    radial_sq <= r * r
}

/// Closest point on segment `a`–`b` to `p`, with its parameter `t ∈ [0, 1]`.
///
/// A zero-length segment returns `(a, 0)`.
pub fn closest_point_on_segment(p: &Vec3, a: &Vec3, b: &Vec3) -> (Vec3, f32) {
    let ab = b.sub(a);
    let denom = ab.length_squared();
    if denom <= EPSILON {
        return (*a, 0.0);
    }
    let t = (p.sub(a).dot(&ab) / denom).clamp(0.0, 1.0);
    (a.add(&ab.scale(t)), t)
}

/// 2D counterpart of [`closest_point_on_segment`].
pub fn closest_point_on_segment_2d(p: &Vec2, a: &Vec2, b: &Vec2) -> (Vec2, f32) {
    let ab = b.sub(a);
    let denom = ab.length_squared();
    if denom <= EPSILON {
        return (*a, 0.0);
    }
    let t = (p.sub(a).dot(&ab) / denom).clamp(0.0, 1.0);
    (a.add(&ab.scale(t)), t)
}

/// Closest point on triangle `abc` to `p`.
///
/// Classifies `p` against the Voronoi regions of the vertices, edges and
/// face using the signs of the barycentric sub-determinants, so only the
/// feature that can hold the answer is evaluated.
pub fn closest_point_on_triangle(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3) -> Vec3 {
    let ab = b.sub(a);
    let ac = c.sub(a);
    let ap = p.sub(a);
    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return *a;
    }

    let bp = p.sub(b);
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return *b;
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        return a.add(&ab.scale(d1 / (d1 - d3)));
    }

    let cp = p.sub(c);
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return *c;
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        return a.add(&ac.scale(d2 / (d2 - d6)));
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && d4 - d3 >= 0.0 && d5 - d6 >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return b.add(&c.sub(b).scale(w));
    }

    let sum = va + vb + vc;
    if sum.abs() <= EPSILON {
        // Zero-area triangle: fall back to the nearest edge.
        return [(a, b), (b, c), (c, a)]
            .into_iter()
            .map(|(s, e)| closest_point_on_segment(p, s, e).0)
            .min_by(|x, y| x.distance_squared(p).total_cmp(&y.distance_squared(p)))
            .unwrap_or(*a);
    }
    let denom = 1.0 / sum;
    a.add(&ab.scale(vb * denom)).add(&ac.scale(vc * denom))
}

/// `true` when `p` and `d` lie strictly on opposite sides of plane `abc`.
fn point_outside_of_plane(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3, d: &Vec3) -> bool {
    let n = b.sub(a).cross(&c.sub(a));
    let sign_p = p.sub(a).dot(&n);
    let sign_d = d.sub(a).dot(&n);
    sign_p * sign_d < 0.0
}

/// Closest point on (or in) tetrahedron `abcd` to `p`.
///
/// Each face that has `p` on its outer side is projected onto and the nearest
/// projection wins; `p` itself is returned when it is inside. A flat
/// tetrahedron has no outer side and returns `p`.
pub fn closest_point_on_tetrahedron(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3, d: &Vec3) -> Vec3 {
    let faces = [(a, b, c, d), (a, c, d, b), (a, d, b, c), (b, d, c, a)];
    let mut closest = *p;
    let mut best = f32::INFINITY;
    for (f0, f1, f2, opposite) in faces {
        if point_outside_of_plane(p, f0, f1, f2, opposite) {
            let q = closest_point_on_triangle(p, f0, f1, f2);
            let dist = q.distance_squared(p);
            if dist < best {
                best = dist;
                closest = q;
            }
        }
    }
    closest
}

/// Closest points between two segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentClosest {
    /// Parameter on the first segment.
    pub s: f32,
    /// Parameter on the second segment.
    pub t: f32,
    /// Point on the first segment.
    pub c1: Vec3,
    /// Point on the second segment.
    pub c2: Vec3,
    /// `|c1 - c2|²`.
    pub distance_squared: f32,
}

/// Closest points between segments `p1`–`q1` and `p2`–`q2`.
///
/// Handles degenerate (point) segments. For parallel segments an arbitrary
/// pair at the minimum distance is returned.
pub fn closest_points_segment_segment(
    p1: &Vec3,
    q1: &Vec3,
    p2: &Vec3,
    q2: &Vec3,
) -> SegmentClosest {
    let d1 = q1.sub(p1);
    let d2 = q2.sub(p2);
    let r = p1.sub(p2);
    let a = d1.length_squared();
    let e = d2.length_squared();
    let f = d2.dot(&r);

    let (s, t) = if a <= EPSILON && e <= EPSILON {
        (0.0, 0.0)
    } else if a <= EPSILON {
        (0.0, (f / e).clamp(0.0, 1.0))
    } else {
        let c = d1.dot(&r);
        if e <= EPSILON {
            ((-c / a).clamp(0.0, 1.0), 0.0)
        } else {
            let b = d1.dot(&d2);
            let denom = a * e - b * b;
            let s = if denom == 0.0 {
                0.0
            } else {
                ((b * f - c * e) / denom).clamp(0.0, 1.0)
            };
            let t = (b * s + f) / e;
            if t < 0.0 {
                ((-c / a).clamp(0.0, 1.0), 0.0)
            } else if t > 1.0 {
                (((b - c) / a).clamp(0.0, 1.0), 1.0)
            } else {
                (s, t)
            }
        }
    };

    let c1 = p1.add(&d1.scale(s));
    let c2 = p2.add(&d2.scale(t));
    SegmentClosest {
        s,
        t,
        c1,
        c2,
        distance_squared: c1.distance_squared(&c2),
    }
}

/// Distance from `p` to segment `a`–`b`.
pub fn distance_point_segment(p: &Vec3, a: &Vec3, b: &Vec3) -> f32 {
    closest_point_on_segment(p, a, b).0.distance(p)
}

/// Distance between two segments.
pub fn distance_segment_segment(p1: &Vec3, q1: &Vec3, p2: &Vec3, q2: &Vec3) -> f32 {
    closest_points_segment_segment(p1, q1, p2, q2).distance_squared.sqrt()
}

/// Distance from `p` to triangle `abc`.
pub fn distance_point_triangle(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3) -> f32 {
    closest_point_on_triangle(p, a, b, c).distance(p)
}
