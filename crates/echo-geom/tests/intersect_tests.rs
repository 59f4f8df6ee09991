// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Integration tests for the intersection engine.

use std::f32::consts::{FRAC_PI_4, FRAC_PI_6, SQRT_2};

use echo_geom::intersect::overlap::{
    aabb_to_aabb, aabb_to_obb, aabb_to_plane, capsule_to_capsule, capsule_to_sphere,
    circle_to_circle, circle_to_rect, intersect_three_planes, obb_to_obb, obb_to_plane,
    rect_to_rect, segment_to_segment_2d, sphere_to_cone, sphere_to_obb, sphere_to_plane,
    sphere_to_sphere,
};
use echo_geom::intersect::point::{
    closest_point_on_segment_2d, closest_point_on_tetrahedron, closest_point_on_triangle,
    closest_points_segment_segment, distance_point_segment, distance_point_triangle,
    distance_segment_segment, point_in_circle, point_in_cone, point_in_convex_polygon,
    point_in_polygon, point_in_polygon_3d, point_in_sphere, point_in_triangle,
    point_in_triangle_2d,
};
use echo_geom::intersect::ray::{
    ray_to_aabb, ray_to_capsule, ray_to_convex_polygon, ray_to_frustum, ray_to_obb,
    ray_to_plane, ray_to_polyhedron, ray_to_rect, ray_to_sphere, ray_to_triangle,
    segment_to_aabb, segment_to_plane, segment_to_polyhedron, segment_to_sphere,
    segment_to_triangle,
};
use echo_geom::intersect::swept::{
    swept_aabb_aabb, swept_sphere_aabb, swept_sphere_frustum, swept_sphere_plane,
    swept_sphere_sphere,
};
use echo_geom::intersect::triangle::{
    tri_aabb_overlap, tri_plane, tri_sphere, tri_tri_overlap, tri_tri_overlap_2d,
};
use echo_geom::sampling::random_rotation;
use echo_geom::{Aabb, FrustumPlanes, Interval, Line2d, Obb, Plane, PlaneSide, Rect};
use echo_math::{Mat4, Prng, Vec2, Vec3};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-5
}

fn approx_eq3(a: Vec3, b: Vec3) {
    let (a, b) = (a.to_array(), b.to_array());
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= 1e-5, "index {i}: {a:?} vs {b:?}");
    }
}

fn approx_interval(iv: Option<Interval>, enter: f32, exit: f32) {
    let iv = iv.expect("expected contact");
    assert!(approx(iv.enter, enter) && approx(iv.exit, exit), "{iv:?}");
}

/// Unit-extent box at `center`, spun 45° about z.
fn diamond(center: Vec3) -> Obb {
    let c = 1.0 / SQRT_2;
    Obb::new(
        center,
        Vec3::ONE,
        [Vec3::new(c, c, 0.0), Vec3::new(-c, c, 0.0), Vec3::UNIT_Z],
    )
}

/// Inward planes of the cube `[-1, 1]³` in `FrustumPlanes` order.
fn cube_planes() -> [Plane; 6] {
    [
        Plane::new(1.0, 0.0, 0.0, 1.0),
        Plane::new(-1.0, 0.0, 0.0, 1.0),
        Plane::new(0.0, 1.0, 0.0, 1.0),
        Plane::new(0.0, -1.0, 0.0, 1.0),
        Plane::new(0.0, 0.0, 1.0, 1.0),
        Plane::new(0.0, 0.0, -1.0, 1.0),
    ]
}

fn rotated_cube(center: Vec3, angle: f32) -> Obb {
    let aabb = Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 1.0, 1.0);
    let (x, y, z) = (center.x(), center.y(), center.z());
    let m = Mat4::rotation_z(angle).multiply(&Mat4::translation(x, y, z));
    Obb::from_aabb_transform(&aabb, &m)
}

#[test]
fn ray_hits_sphere_at_closer_root() {
    let t = ray_to_sphere(
        &Vec3::new(0.0, 0.0, -5.0),
        &Vec3::UNIT_Z,
        &Vec3::ZERO,
        1.0,
    );
    assert!(t.is_some_and(|t| approx(t, 4.0)), "{t:?}");
}

#[test]
fn ray_sphere_edge_cases() {
    let behind = ray_to_sphere(&Vec3::new(0.0, 0.0, 5.0), &Vec3::UNIT_Z, &Vec3::ZERO, 1.0);
    assert!(behind.is_some_and(|t| approx(t, -6.0)), "{behind:?}");
    let inside = ray_to_sphere(&Vec3::new(0.2, 0.0, 0.0), &Vec3::UNIT_X, &Vec3::ZERO, 1.0);
    assert_eq!(inside, Some(0.0));
    let miss = ray_to_sphere(&Vec3::new(0.0, 3.0, -5.0), &Vec3::UNIT_Z, &Vec3::ZERO, 1.0);
    assert!(miss.is_none());

    let a = Vec3::new(0.0, 0.0, -5.0);
    let short = Vec3::new(0.0, 0.0, -3.0);
    let long = Vec3::new(0.0, 0.0, 5.0);
    assert!(segment_to_sphere(&a, &short, &Vec3::ZERO, 1.0).is_none());
    let hit = segment_to_sphere(&a, &long, &Vec3::ZERO, 1.0);
    assert!(hit.is_some_and(|t| approx(t, 0.4)), "{hit:?}");
}

#[test]
fn point_in_triangle_scenarios() {
    let (a, b, c) = (Vec2::ZERO, Vec2::UNIT_X, Vec2::UNIT_Y);
    assert!(point_in_triangle_2d(&Vec2::new(0.25, 0.25), &a, &b, &c));
    assert!(!point_in_triangle_2d(&Vec2::new(2.0, 2.0), &a, &b, &c));
    // Winding does not matter.
    assert!(point_in_triangle_2d(&Vec2::new(0.25, 0.25), &a, &c, &b));

    let (a, b, c) = (Vec3::ZERO, Vec3::UNIT_X, Vec3::UNIT_Y);
    assert!(point_in_triangle(&Vec3::new(0.25, 0.25, 0.0), &a, &b, &c));
    assert!(!point_in_triangle(&Vec3::new(2.0, 2.0, 0.0), &a, &b, &c));
}

#[test]
fn polygon_containment_rules() {
    // CCW square
    let square = [
        Vec2::ZERO,
        Vec2::new(2.0, 0.0),
        Vec2::new(2.0, 2.0),
        Vec2::new(0.0, 2.0),
    ];
    assert!(point_in_convex_polygon(&Vec2::new(1.0, 1.0), &square));
    assert!(!point_in_convex_polygon(&Vec2::new(3.0, 1.0), &square));
    assert!(!point_in_convex_polygon(&Vec2::new(1.0, 1.0), &square[..2]));

    // Concave "U": the notch between the arms is outside.
    let u = [
        Vec2::ZERO,
        Vec2::new(3.0, 0.0),
        Vec2::new(3.0, 3.0),
        Vec2::new(2.0, 3.0),
        Vec2::new(2.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 3.0),
        Vec2::new(0.0, 3.0),
    ];
    assert!(point_in_polygon(&Vec2::new(0.5, 2.0), &u));
    assert!(point_in_polygon(&Vec2::new(2.5, 2.0), &u));
    assert!(!point_in_polygon(&Vec2::new(1.5, 2.0), &u));
    assert!(point_in_polygon(&Vec2::new(1.5, 0.5), &u));

    // Half-open boundary: left edge inside, right edge outside.
    assert!(point_in_polygon(&Vec2::new(0.0, 1.0), &square));
    assert!(!point_in_polygon(&Vec2::new(2.0, 1.0), &square));

    let tilted = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(0.0, 2.0, 2.0),
        Vec3::new(0.0, 0.0, 2.0),
    ];
    assert!(point_in_polygon_3d(&Vec3::new(0.0, 1.0, 1.0), &tilted));
    assert!(!point_in_polygon_3d(&Vec3::new(0.0, 3.0, 1.0), &tilted));
}

#[test]
fn cone_containment() {
    let apex = Vec3::ZERO;
    let axis = Vec3::UNIT_Z;
    assert!(point_in_cone(&Vec3::new(0.0, 0.0, 5.0), &apex, &axis, FRAC_PI_6, 10.0));
    assert!(point_in_cone(&Vec3::new(2.0, 0.0, 5.0), &apex, &axis, FRAC_PI_6, 10.0));
    assert!(!point_in_cone(&Vec3::new(5.0, 0.0, 5.0), &apex, &axis, FRAC_PI_6, 10.0));
    assert!(!point_in_cone(&Vec3::new(0.0, 0.0, 11.0), &apex, &axis, FRAC_PI_6, 10.0));
    assert!(!point_in_cone(&Vec3::new(0.0, 0.0, -1.0), &apex, &axis, FRAC_PI_6, 10.0));

    assert!(sphere_to_cone(&Vec3::new(0.0, 0.0, 5.0), 0.5, &apex, &axis, FRAC_PI_6, 10.0));
    assert!(!sphere_to_cone(&Vec3::new(10.0, 0.0, 5.0), 1.0, &apex, &axis, FRAC_PI_6, 10.0));
    assert!(!sphere_to_cone(&Vec3::new(0.0, 0.0, 12.0), 1.0, &apex, &axis, FRAC_PI_6, 10.0));
    // Sphere behind the tip that still touches it.
    assert!(sphere_to_cone(&Vec3::new(0.0, 0.0, -0.5), 1.0, &apex, &axis, FRAC_PI_6, 10.0));
    assert!(!sphere_to_cone(&Vec3::new(0.0, 0.0, -2.0), 1.0, &apex, &axis, FRAC_PI_6, 10.0));
}

#[test]
fn closest_points_and_distances() {
    let (a, b, c) = (Vec3::ZERO, Vec3::UNIT_X, Vec3::UNIT_Y);
    approx_eq3(
        closest_point_on_triangle(&Vec3::new(0.25, 0.25, 3.0), &a, &b, &c),
        Vec3::new(0.25, 0.25, 0.0),
    );
    approx_eq3(
        closest_point_on_triangle(&Vec3::new(-1.0, -1.0, 0.0), &a, &b, &c),
        Vec3::ZERO,
    );
    approx_eq3(
        closest_point_on_triangle(&Vec3::new(1.0, 1.0, 0.0), &a, &b, &c),
        Vec3::new(0.5, 0.5, 0.0),
    );
    assert!(approx(distance_point_triangle(&Vec3::new(0.25, 0.25, 3.0), &a, &b, &c), 3.0));

    let d = Vec3::UNIT_Z;
    let inside = Vec3::new(0.1, 0.1, 0.1);
    approx_eq3(closest_point_on_tetrahedron(&inside, &a, &b, &c, &d), inside);
    approx_eq3(
        closest_point_on_tetrahedron(&Vec3::new(-1.0, 0.1, 0.1), &a, &b, &c, &d),
        Vec3::new(0.0, 0.1, 0.1),
    );

    let sc = closest_points_segment_segment(
        &Vec3::ZERO,
        &Vec3::new(2.0, 0.0, 0.0),
        &Vec3::new(1.0, -1.0, 1.0),
        &Vec3::new(1.0, 1.0, 1.0),
    );
    assert!(approx(sc.s, 0.5) && approx(sc.t, 0.5), "{sc:?}");
    approx_eq3(sc.c1, Vec3::new(1.0, 0.0, 0.0));
    approx_eq3(sc.c2, Vec3::new(1.0, 0.0, 1.0));
    assert!(approx(sc.distance_squared, 1.0));

    let dist = distance_point_segment(&Vec3::new(5.0, 1.0, 0.0), &Vec3::ZERO, &Vec3::UNIT_X);
    assert!(approx(dist, 17.0_f32.sqrt()));
}

#[test]
fn rays_against_planes_and_boxes() {
    let origin = Vec3::new(0.0, 0.0, -1.0);
    assert!(ray_to_plane(&origin, &Vec3::UNIT_Z, &Plane::XY).is_some_and(|t| approx(t, 1.0)));
    assert!(ray_to_plane(&origin, &Vec3::UNIT_X, &Plane::XY).is_none());
    assert!(ray_to_plane(&origin, &Vec3::new(0.0, 0.0, -1.0), &Plane::XY).is_none());
    let seg = segment_to_plane(&origin, &Vec3::new(0.0, 0.0, 3.0), &Plane::XY);
    assert!(seg.is_some_and(|t| approx(t, 0.25)));

    let unit = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
    let start = Vec3::new(-5.0, 0.5, 0.5);
    assert!(ray_to_aabb(&start, &Vec3::UNIT_X, &unit).is_some_and(|t| approx(t, 5.0)));
    assert!(ray_to_aabb(&start, &Vec3::UNIT_Y, &unit).is_none());
    assert_eq!(ray_to_aabb(&Vec3::new(0.5, 0.5, 0.5), &Vec3::UNIT_X, &unit), Some(0.0));
    assert!(segment_to_aabb(&start, &Vec3::new(-1.0, 0.5, 0.5), &unit).is_none());
    let through = segment_to_aabb(&start, &Vec3::new(5.0, 0.5, 0.5), &unit);
    assert!(through.is_some_and(|t| approx(t, 0.5)));

    let obb = rotated_cube(Vec3::new(6.0, 0.0, 0.0), FRAC_PI_4);
    let t = ray_to_obb(&Vec3::ZERO, &Vec3::UNIT_X, &obb);
    assert!(t.is_some_and(|t| approx(t, 6.0 - SQRT_2)), "{t:?}");
}

#[test]
fn rays_against_triangles() {
    let (a, b, c) = (Vec3::ZERO, Vec3::UNIT_X, Vec3::UNIT_Y);
    let up = Vec3::new(0.25, 0.25, -1.0);
    let hit = ray_to_triangle(&up, &Vec3::UNIT_Z, &a, &b, &c, false).expect("front hit");
    assert!(approx(hit.t, 1.0) && approx(hit.u, 0.25) && approx(hit.v, 0.25));
    assert!(approx(hit.w(), 0.5));
    // The triangle's normal is +Z, so a ray travelling +Z sees its back.
    assert!(ray_to_triangle(&up, &Vec3::UNIT_Z, &a, &b, &c, true).is_none());
    let down = Vec3::new(0.25, 0.25, 1.0);
    assert!(ray_to_triangle(&down, &Vec3::new(0.0, 0.0, -1.0), &a, &b, &c, true).is_some());
    let wide = Vec3::new(2.0, 2.0, -1.0);
    assert!(ray_to_triangle(&wide, &Vec3::UNIT_Z, &a, &b, &c, false).is_none());

    let short = segment_to_triangle(&up, &Vec3::new(0.25, 0.25, -0.5), &a, &b, &c, false);
    assert!(short.is_none());
    let long = segment_to_triangle(&up, &Vec3::new(0.25, 0.25, 1.0), &a, &b, &c, false);
    assert!(long.is_some_and(|h| approx(h.t, 0.5)));
}

#[test]
fn rays_against_capsules_and_convex_sets() {
    let (a, b) = (Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0));
    let side = ray_to_capsule(&Vec3::new(-5.0, 0.0, 2.0), &Vec3::UNIT_X, &a, &b, 1.0);
    assert!(side.is_some_and(|t| approx(t, 4.0)), "{side:?}");
    let cap = ray_to_capsule(&Vec3::new(0.0, 0.0, -5.0), &Vec3::UNIT_Z, &a, &b, 1.0);
    assert!(cap.is_some_and(|t| approx(t, 4.0)), "{cap:?}");
    assert!(ray_to_capsule(&Vec3::new(-5.0, 3.0, 2.0), &Vec3::UNIT_X, &a, &b, 1.0).is_none());

    let cube = cube_planes();
    let enter = ray_to_polyhedron(&Vec3::new(-5.0, 0.0, 0.0), &Vec3::UNIT_X, &cube);
    assert!(enter.is_some_and(|t| approx(t, 4.0)));
    assert_eq!(ray_to_polyhedron(&Vec3::ZERO, &Vec3::UNIT_X, &cube), Some(0.0));
    assert!(ray_to_polyhedron(&Vec3::new(-5.0, 3.0, 0.0), &Vec3::UNIT_X, &cube).is_none());

    let edges = [
        Line2d::new(1.0, 0.0, 0.0),
        Line2d::new(-1.0, 0.0, 1.0),
        Line2d::new(0.0, 1.0, 0.0),
        Line2d::new(0.0, -1.0, 1.0),
    ];
    let origin = Vec2::new(-3.0, 0.5);
    let t = ray_to_convex_polygon(&origin, &Vec2::UNIT_X, &edges);
    assert!(t.is_some_and(|t| approx(t, 3.0)));
    let rect = Rect::new(Vec2::ZERO, Vec2::new(1.0, 1.0));
    assert!(ray_to_rect(&origin, &Vec2::UNIT_X, &rect).is_some_and(|t| approx(t, 3.0)));
    assert!(ray_to_rect(&origin, &Vec2::UNIT_Y, &rect).is_none());
}

#[test]
fn box_overlap_is_symmetric() {
    let a = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0));
    let touching = Aabb::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 1.0));
    let apart = Aabb::new(Vec3::new(2.5, 0.0, 0.0), Vec3::new(3.0, 1.0, 1.0));
    assert!(aabb_to_aabb(&a, &touching) && aabb_to_aabb(&touching, &a));
    assert!(!aabb_to_aabb(&a, &apart) && !aabb_to_aabb(&apart, &a));
}

#[test]
fn obb_separated_far_apart_but_overlapping_when_perturbed() {
    let a = rotated_cube(Vec3::ZERO, FRAC_PI_6);
    let far = rotated_cube(Vec3::new(10.0, 0.0, 0.0), FRAC_PI_4);
    let near = rotated_cube(Vec3::new(1.5, 0.2, 0.1), FRAC_PI_4);
    assert!(!obb_to_obb(&a, &far));
    assert!(!obb_to_obb(&far, &a));
    assert!(obb_to_obb(&a, &near));
    assert!(obb_to_obb(&near, &a));
    assert!(obb_to_obb(&a, &a));

    // A diamond's corner just inside, then just outside, a face.
    let square = rotated_cube(Vec3::ZERO, 0.0);
    let reach = 1.0 + SQRT_2;
    let poking = rotated_cube(Vec3::new(reach - 0.05, 0.0, 0.0), FRAC_PI_4);
    let clear = rotated_cube(Vec3::new(reach + 0.05, 0.0, 0.0), FRAC_PI_4);
    assert!(obb_to_obb(&square, &poking));
    assert!(!obb_to_obb(&square, &clear));
}

#[test]
fn spheres_capsules_and_planes() {
    assert!(sphere_to_sphere(&Vec3::ZERO, 1.0, &Vec3::new(2.0, 0.0, 0.0), 1.0));
    assert!(!sphere_to_sphere(&Vec3::ZERO, 1.0, &Vec3::new(2.1, 0.0, 0.0), 1.0));

    let rect = Rect::new(Vec2::ZERO, Vec2::new(2.0, 2.0));
    assert!(circle_to_rect(&Vec2::new(3.0, 1.0), 1.0, &rect));
    assert!(!circle_to_rect(&Vec2::new(3.0, 3.0), 1.0, &rect));

    let obb = rotated_cube(Vec3::ZERO, FRAC_PI_4);
    assert!(sphere_to_obb(&Vec3::new(2.0, 0.0, 0.0), 0.6, &obb));
    assert!(!sphere_to_obb(&Vec3::new(2.0, 0.0, 0.0), 0.5, &obb));

    assert_eq!(sphere_to_plane(&Vec3::new(0.0, 0.0, 2.0), 1.0, &Plane::XY), PlaneSide::Front);
    assert_eq!(sphere_to_plane(&Vec3::new(0.0, 0.0, -2.0), 1.0, &Plane::XY), PlaneSide::Back);
    assert_eq!(
        sphere_to_plane(&Vec3::new(0.0, 0.0, 0.5), 1.0, &Plane::XY),
        PlaneSide::Intersecting
    );

    let (a, b) = (Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0));
    assert!(capsule_to_sphere(&a, &b, 1.0, &Vec3::new(1.5, 0.0, 2.0), 0.6));
    assert!(!capsule_to_sphere(&a, &b, 1.0, &Vec3::new(1.5, 0.0, 2.0), 0.4));
    let (c, d) = (Vec3::new(1.5, -3.0, 2.0), Vec3::new(1.5, 3.0, 2.0));
    assert!(capsule_to_capsule(&a, &b, 1.0, &c, &d, 0.6));
    assert!(!capsule_to_capsule(&a, &b, 1.0, &c, &d, 0.4));
}

#[test]
fn plane_and_segment_intersections() {
    let p = intersect_three_planes(
        &Plane::new(1.0, 0.0, 0.0, -1.0),
        &Plane::new(0.0, 1.0, 0.0, -2.0),
        &Plane::new(0.0, 0.0, 1.0, -3.0),
    );
    approx_eq3(p.expect("planes meet in a point"), Vec3::new(1.0, 2.0, 3.0));
    assert!(intersect_three_planes(&Plane::XY, &Plane::XY, &Plane::YZ).is_none());

    let cross = segment_to_segment_2d(
        &Vec2::ZERO,
        &Vec2::new(2.0, 2.0),
        &Vec2::new(0.0, 2.0),
        &Vec2::new(2.0, 0.0),
    );
    assert_eq!(cross, Some(Vec2::new(1.0, 1.0)));
    let parallel = segment_to_segment_2d(
        &Vec2::ZERO,
        &Vec2::new(2.0, 0.0),
        &Vec2::new(0.0, 1.0),
        &Vec2::new(2.0, 1.0),
    );
    assert!(parallel.is_none());
    let short = segment_to_segment_2d(
        &Vec2::ZERO,
        &Vec2::new(0.5, 0.5),
        &Vec2::new(0.0, 2.0),
        &Vec2::new(2.0, 0.0),
    );
    assert!(short.is_none());
}

#[test]
fn triangle_pairs() {
    let t1 = [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)];
    let pierce = [
        Vec3::new(0.5, 0.5, -1.0),
        Vec3::new(0.5, 0.5, 1.0),
        Vec3::new(3.0, 3.0, 0.0),
    ];
    assert!(tri_tri_overlap(&t1[0], &t1[1], &t1[2], &pierce[0], &pierce[1], &pierce[2]));
    assert!(tri_tri_overlap(&pierce[0], &pierce[1], &pierce[2], &t1[0], &t1[1], &t1[2]));

    let shift = Vec3::new(10.0, 0.0, 0.0);
    let moved = pierce.map(|p| p + shift);
    assert!(!tri_tri_overlap(&t1[0], &t1[1], &t1[2], &moved[0], &moved[1], &moved[2]));

    let coplanar = [
        Vec3::new(0.5, 0.5, 0.0),
        Vec3::new(3.0, 0.5, 0.0),
        Vec3::new(0.5, 3.0, 0.0),
    ];
    assert!(tri_tri_overlap(&t1[0], &t1[1], &t1[2], &coplanar[0], &coplanar[1], &coplanar[2]));
    let away = coplanar.map(|p| p + Vec3::new(5.0, 5.0, 0.0));
    assert!(!tri_tri_overlap(&t1[0], &t1[1], &t1[2], &away[0], &away[1], &away[2]));

    let flat = |v: Vec3| Vec2::new(v.x(), v.y());
    let (p1, q1, r1) = (flat(t1[0]), flat(t1[1]), flat(t1[2]));
    let (p2, q2, r2) = (flat(coplanar[0]), flat(coplanar[1]), flat(coplanar[2]));
    assert!(tri_tri_overlap_2d(&p1, &q1, &r1, &p2, &q2, &r2));
    assert!(tri_tri_overlap_2d(&p1, &r1, &q1, &p2, &q2, &r2));
    let far = Vec2::new(5.0, 5.0);
    assert!(!tri_tri_overlap_2d(&p1, &q1, &r1, &(p2 + far), &(q2 + far), &(r2 + far)));
}

#[test]
fn rotated_coplanar_triangles_keep_their_2d_answer() {
    let base = [Vec3::ZERO, Vec3::UNIT_X, Vec3::UNIT_Y];
    let overlapping = [
        Vec3::new(0.2, 0.2, 0.0),
        Vec3::new(1.2, 0.2, 0.0),
        Vec3::new(0.2, 1.2, 0.0),
    ];
    let apart = overlapping.map(|p| p + Vec3::new(1.5, 1.5, 0.0));

    let mut rng = Prng::from_seed_u64(0x5eed);
    let mut frames = vec![Mat4::rotation_axis_angle(Vec3::new(0.3, 1.0, 0.2), 0.9)];
    for _ in 0..64 {
        let spin = Mat4::from_quat(&random_rotation(&mut rng));
        frames.push(spin.multiply(&Mat4::translation(0.5, -0.25, 0.75)));
    }

    for m in &frames {
        let a = base.map(|p| m.transform_point(&p));
        let b = overlapping.map(|p| m.transform_point(&p));
        let c = apart.map(|p| m.transform_point(&p));
        assert!(tri_tri_overlap(&a[0], &a[1], &a[2], &b[0], &b[1], &b[2]), "{m:?}");
        assert!(tri_tri_overlap(&b[0], &b[2], &b[1], &a[0], &a[1], &a[2]), "{m:?}");
        assert!(!tri_tri_overlap(&a[0], &a[1], &a[2], &c[0], &c[1], &c[2]), "{m:?}");
    }

    // A real offset off the plane still separates them.
    let lifted = overlapping.map(|p| p + Vec3::new(0.0, 0.0, 1e-2));
    assert!(!tri_tri_overlap(
        &base[0], &base[1], &base[2], &lifted[0], &lifted[1], &lifted[2]
    ));
}

#[test]
fn triangle_versus_box_plane_and_sphere() {
    let cube = Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 1.0, 1.0);
    let big = [Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 5.0, 0.0)];
    assert!(tri_aabb_overlap(&big[0], &big[1], &big[2], &cube));
    let lifted = big.map(|p| p + Vec3::new(0.0, 0.0, 5.0));
    assert!(!tri_aabb_overlap(&lifted[0], &lifted[1], &lifted[2], &cube));
    // Plane x + y + z = 3.5 clears the (1, 1, 1) corner.
    let slanted = [
        Vec3::new(3.5, 0.0, 0.0),
        Vec3::new(0.0, 3.5, 0.0),
        Vec3::new(0.0, 0.0, 3.5),
    ];
    assert!(!tri_aabb_overlap(&slanted[0], &slanted[1], &slanted[2], &cube));
    let close = slanted.map(|p| p.scale(1.5 / 3.5));
    assert!(tri_aabb_overlap(&close[0], &close[1], &close[2], &cube));

    assert_eq!(tri_plane(&big[0], &big[1], &big[2], &Plane::XY), PlaneSide::Intersecting);
    assert_eq!(
        tri_plane(&lifted[0], &lifted[1], &lifted[2], &Plane::XY),
        PlaneSide::Front
    );
    assert!(tri_sphere(&big[0], &big[1], &big[2], &Vec3::new(1.0, 1.0, 0.5), 0.6));
    assert!(!tri_sphere(&big[0], &big[1], &big[2], &Vec3::new(1.0, 1.0, 0.5), 0.4));
}

#[test]
fn swept_spheres() {
    let approach = swept_sphere_sphere(
        &Vec3::ZERO,
        1.0,
        &Vec3::UNIT_X,
        &Vec3::new(10.0, 0.0, 0.0),
        1.0,
        &Vec3::ZERO,
    );
    approx_interval(approach, 8.0, 12.0);
    let still = Vec3::ZERO;
    let resting = swept_sphere_sphere(&Vec3::ZERO, 1.0, &still, &Vec3::UNIT_X, 1.0, &still);
    assert_eq!(resting, Some(Interval::UNBOUNDED));

    let falling = swept_sphere_plane(
        &Vec3::new(0.0, 0.0, 5.0),
        1.0,
        &Vec3::new(0.0, 0.0, -1.0),
        &Plane::XY,
    );
    approx_interval(falling, 4.0, 6.0);
    let gliding = swept_sphere_plane(&Vec3::new(0.0, 0.0, 5.0), 1.0, &Vec3::UNIT_X, &Plane::XY);
    assert!(gliding.is_none());

    let frustum = FrustumPlanes::new(cube_planes());
    let through = swept_sphere_frustum(&Vec3::new(-5.0, 0.0, 0.0), 1.0, &Vec3::UNIT_X, &frustum);
    approx_interval(through, 3.0, 7.0);
}

#[test]
fn swept_boxes() {
    let unit = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
    let incoming = Aabb::new(Vec3::new(3.0, 0.0, 0.0), Vec3::new(4.0, 1.0, 1.0));
    let left = Vec3::new(-1.0, 0.0, 0.0);
    approx_interval(swept_aabb_aabb(&unit, &Vec3::ZERO, &incoming, &left), 2.0, 4.0);
    // Only relative velocity matters.
    approx_interval(
        swept_aabb_aabb(&unit, &Vec3::UNIT_X, &incoming, &Vec3::ZERO),
        2.0,
        4.0,
    );
    let offset = incoming.offset(&Vec3::new(0.0, 5.0, 0.0));
    assert!(swept_aabb_aabb(&unit, &Vec3::ZERO, &offset, &left).is_none());

    let sphere = swept_sphere_aabb(&Vec3::new(5.0, 0.5, 0.5), 0.5, &left, &unit);
    approx_interval(sphere, 3.5, 5.5);
}

#[test]
fn segments_and_frusta_clip_against_planes() {
    let cube = cube_planes();
    let x = |v: f32| Vec3::new(v, 0.0, 0.0);
    let across = segment_to_polyhedron(&x(-5.0), &x(5.0), &cube);
    assert!(across.is_some_and(|t| approx(t, 0.4)), "{across:?}");
    assert!(segment_to_polyhedron(&x(-5.0), &x(-2.0), &cube).is_none());
    assert_eq!(segment_to_polyhedron(&x(-0.5), &x(0.5), &cube), Some(0.0));

    let frustum = FrustumPlanes::new(cube);
    let origin = Vec3::new(0.0, 0.0, -5.0);
    let t = ray_to_frustum(&origin, &Vec3::UNIT_Z, &frustum);
    assert!(t.is_some_and(|t| approx(t, 4.0)), "{t:?}");
    assert!(ray_to_frustum(&origin, &Vec3::new(0.0, 0.0, -1.0), &frustum).is_none());
    assert!(ray_to_frustum(&Vec3::new(0.0, 3.0, -5.0), &Vec3::UNIT_Z, &frustum).is_none());
    assert_eq!(ray_to_frustum(&Vec3::ZERO, &Vec3::UNIT_X, &frustum), Some(0.0));
}

#[test]
fn boxes_against_oriented_boxes_and_planes() {
    let cube = Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 1.0, 1.0);
    // The spun box reaches √2 along x.
    assert!(aabb_to_obb(&cube, &diamond(Vec3::new(2.2, 0.0, 0.0))));
    assert!(!aabb_to_obb(&cube, &diamond(Vec3::new(2.5, 0.0, 0.0))));
    let face_to_face = Obb::from_aabb(&cube.offset(&Vec3::new(2.0, 0.0, 0.0)));
    assert!(aabb_to_obb(&cube, &face_to_face));

    let at = |x: f32| Plane::new(1.0, 0.0, 0.0, -x);
    let spun = diamond(Vec3::ZERO);
    assert_eq!(obb_to_plane(&spun, &at(1.3)), PlaneSide::Intersecting);
    assert_eq!(aabb_to_plane(&cube, &at(1.3)), PlaneSide::Back);
    assert_eq!(obb_to_plane(&spun, &at(-1.5)), PlaneSide::Front);
    assert_eq!(obb_to_plane(&spun, &at(-1.5).flip()), PlaneSide::Back);
    assert_eq!(aabb_to_plane(&cube, &at(1.0)), PlaneSide::Intersecting);
    assert_eq!(aabb_to_plane(&cube, &at(-2.0)), PlaneSide::Front);
}

#[test]
fn flat_shapes_touching_counts() {
    let a = Rect::new(Vec2::ZERO, Vec2::new(2.0, 2.0));
    let edge = Rect::from_origin_size(Vec2::new(2.0, 1.0), Vec2::new(1.0, 1.0));
    let gap = Rect::from_origin_size(Vec2::new(2.01, 0.0), Vec2::new(1.0, 1.0));
    let nested = Rect::new(Vec2::new(0.5, 0.5), Vec2::new(1.0, 1.0));
    assert!(rect_to_rect(&a, &edge) && rect_to_rect(&edge, &a));
    assert!(!rect_to_rect(&a, &gap));
    assert!(rect_to_rect(&a, &nested));

    let o = Vec2::ZERO;
    assert!(circle_to_circle(&o, 1.0, &Vec2::new(3.0, 0.0), 2.0));
    assert!(!circle_to_circle(&o, 1.0, &Vec2::new(3.01, 0.0), 2.0));
    assert!(circle_to_circle(&o, 5.0, &o, 0.5));

    assert!(point_in_circle(&Vec2::new(0.0, -2.0), &o, 2.0));
    assert!(!point_in_circle(&Vec2::new(1.5, 1.5), &o, 2.0));
    assert!(point_in_sphere(&Vec3::new(0.0, 0.0, 3.0), &Vec3::ZERO, 3.0));
    assert!(!point_in_sphere(&Vec3::new(2.0, 2.0, 2.0), &Vec3::ZERO, 3.0));
}

#[test]
fn segment_distances_cover_skew_parallel_and_degenerate() {
    let skew = distance_segment_segment(
        &Vec3::new(-1.0, 0.0, 0.0),
        &Vec3::UNIT_X,
        &Vec3::new(0.0, -1.0, 2.0),
        &Vec3::new(0.0, 1.0, 2.0),
    );
    assert!(approx(skew, 2.0), "{skew}");
    let parallel = distance_segment_segment(
        &Vec3::ZERO,
        &Vec3::UNIT_X,
        &Vec3::new(2.0, 1.0, 0.0),
        &Vec3::new(3.0, 1.0, 0.0),
    );
    assert!(approx(parallel, SQRT_2), "{parallel}");
    let p = Vec3::new(3.0, 4.0, 0.0);
    assert!(approx(distance_segment_segment(&Vec3::ZERO, &Vec3::ZERO, &p, &p), 5.0));

    let (a, b) = (Vec2::ZERO, Vec2::new(2.0, 0.0));
    let (q, t) = closest_point_on_segment_2d(&Vec2::new(0.5, 2.0), &a, &b);
    assert_eq!((q, t), (Vec2::new(0.5, 0.0), 0.25));
    assert_eq!(closest_point_on_segment_2d(&Vec2::new(5.0, 1.0), &a, &b), (b, 1.0));
    assert_eq!(closest_point_on_segment_2d(&Vec2::new(-3.0, 0.0), &a, &b), (a, 0.0));
    assert_eq!(closest_point_on_segment_2d(&Vec2::new(1.0, 1.0), &a, &a), (a, 0.0));
}
