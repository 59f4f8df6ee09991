// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use std::f32::consts::FRAC_PI_2;

use echo_geom::intersect::frustum::{
    aabb_in_frustum, aabb_in_frustum_fast, frustum_to_frustum, obb_in_frustum,
    obb_in_frustum_fast, point_in_frustum, point_in_radar, sphere_in_frustum,
    sphere_in_frustum_fast, sphere_in_radar,
};
use echo_geom::{Aabb, Frustum, FrustumPlanes, FrustumPoints, FrustumRadar, Obb};
use echo_math::{Mat4, Vec3};

const NEAR: f32 = 1.0;
const FAR: f32 = 11.0;

/// Camera at z = -5 looking down +z with a 90° square field of view.
///
/// In world space the frustum is `z ∈ [-4, 6]` and `|x|, |y| <= z + 5`.
fn view_projection(eye_x: f32) -> Mat4 {
    let eye = Vec3::new(eye_x, 0.0, -5.0);
    let target = Vec3::new(eye_x, 0.0, 0.0);
    Mat4::look_at_lh(&eye, &target, &Vec3::UNIT_Y)
        .multiply(&Mat4::perspective_fov_lh(FRAC_PI_2, 1.0, NEAR, FAR))
}

fn frustum() -> Frustum {
    Frustum::from_view_projection(&view_projection(0.0)).expect("invertible view-projection")
}

fn radar() -> FrustumRadar {
    FrustumRadar::new(
        Vec3::new(0.0, 0.0, -5.0),
        Vec3::UNIT_Z,
        Vec3::UNIT_Y,
        NEAR,
        FAR,
        FRAC_PI_2,
        1.0,
    )
}

fn near(a: Vec3, b: Vec3, tol: f32) -> bool {
    a.sub(&b).length() <= tol
}

#[test]
fn extracted_planes_are_normalized_and_inward() {
    let planes = FrustumPlanes::from_matrix(&view_projection(0.0));
    let center = Vec3::new(0.0, 0.0, 1.0);
    for plane in planes.planes() {
        assert!(plane.is_normalized(1e-4), "{plane:?}");
        assert!(plane.dot_coord(&center) > 0.0, "{plane:?}");
    }
    let near_plane = planes.plane(FrustumPlanes::NEAR);
    assert!(near(near_plane.normal(), Vec3::UNIT_Z, 1e-4));
    assert!((near_plane.d() - 4.0).abs() <= 1e-3);
    let far_plane = planes.plane(FrustumPlanes::FAR);
    assert!(near(far_plane.normal(), Vec3::new(0.0, 0.0, -1.0), 1e-4));
    assert!((far_plane.d() - 6.0).abs() <= 1e-3);
}

#[test]
fn corners_follow_bit_layout() {
    let points = FrustumPoints::from_matrix(&view_projection(0.0)).expect("invertible");
    let p = points.points();
    assert!(near(p[0], Vec3::new(-1.0, -1.0, -4.0), 1e-3), "{:?}", p[0]);
    assert!(near(p[3], Vec3::new(1.0, 1.0, -4.0), 1e-3), "{:?}", p[3]);
    assert!(near(p[4], Vec3::new(-11.0, -11.0, 6.0), 1e-2), "{:?}", p[4]);
    assert!(near(p[7], Vec3::new(11.0, 11.0, 6.0), 1e-2), "{:?}", p[7]);
    assert!(near(points.center(), Vec3::new(0.0, 0.0, 1.0), 1e-3));
}

#[test]
fn planes_and_points_convert_both_ways() {
    let vp = view_projection(0.0);
    let planes = FrustumPlanes::from_matrix(&vp);
    let points = FrustumPoints::from_matrix(&vp).expect("invertible");

    let rebuilt_points = planes.to_points().expect("planes meet in corners");
    for (a, b) in rebuilt_points.points().iter().zip(points.points()) {
        assert!(near(*a, *b, 1e-2), "{a:?} vs {b:?}");
    }

    let rebuilt_planes = points.to_planes().expect("faces are not degenerate");
    for (a, b) in rebuilt_planes.planes().iter().zip(planes.planes()) {
        assert!(near(a.normal(), b.normal(), 1e-3), "{a:?} vs {b:?}");
        assert!((a.d() - b.d()).abs() <= 1e-2, "{a:?} vs {b:?}");
    }

    let from_points = Frustum::from_points(points).expect("faces are not degenerate");
    assert_eq!(from_points.points, points);
}

#[test]
fn points_are_culled_by_every_plane() {
    let planes = frustum().planes;
    assert!(point_in_frustum(&Vec3::ZERO, &planes));
    assert!(point_in_frustum(&Vec3::new(4.9, -4.9, 0.0), &planes));
    assert!(!point_in_frustum(&Vec3::new(5.1, 0.0, 0.0), &planes));
    assert!(!point_in_frustum(&Vec3::new(0.0, -5.1, 0.0), &planes));
    assert!(!point_in_frustum(&Vec3::new(0.0, 0.0, -4.5), &planes));
    assert!(!point_in_frustum(&Vec3::new(0.0, 0.0, 6.5), &planes));
}

#[test]
fn sphere_beyond_far_corner_needs_exact_test() {
    let frustum = frustum();
    let corner = frustum.points.points()[7];
    let outward = (Vec3::new(1.0, 0.0, -1.0).normalize()
        + Vec3::new(0.0, 1.0, -1.0).normalize()
        + Vec3::UNIT_Z)
        .normalize();
    // Two units out from the corner, about 1.46 units from each side plane.
    let center = corner + outward * 2.0;

    assert!(sphere_in_frustum_fast(&center, 1.6, &frustum.planes));
    assert!(!sphere_in_frustum(&center, 1.6, &frustum));
    assert!(sphere_in_frustum(&center, 2.1, &frustum));
    assert!(!sphere_in_frustum_fast(&center, 1.0, &frustum.planes));
}

#[test]
fn spheres_inside_and_far_away() {
    let frustum = frustum();
    assert!(sphere_in_frustum(&Vec3::ZERO, 0.5, &frustum));
    assert!(sphere_in_frustum(&Vec3::new(7.0, 0.0, 0.0), 1.5, &frustum));
    assert!(!sphere_in_frustum(&Vec3::new(0.0, 0.0, 50.0), 1.0, &frustum));
    assert!(!sphere_in_frustum_fast(&Vec3::new(0.0, 0.0, -8.0), 1.0, &frustum.planes));
}

#[test]
fn box_beside_the_far_edge_needs_exact_test() {
    let frustum = frustum();
    // Overlaps every plane's positive side but lies past the widest corner in x.
    let beside = Aabb::new(Vec3::new(12.0, -1.0, 0.0), Vec3::new(13.0, 1.0, 20.0));
    assert!(aabb_in_frustum_fast(&beside, &frustum.planes));
    assert!(!aabb_in_frustum(&beside, &frustum));

    let obb = Obb::from_aabb(&beside);
    assert!(obb_in_frustum_fast(&obb, &frustum.planes));
    assert!(!obb_in_frustum(&obb, &frustum));
}

#[test]
fn boxes_inside_and_far_away() {
    let frustum = frustum();
    let inside = Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 1.0, 1.0);
    let far_away = Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, 50.0), 1.0, 1.0, 1.0);
    assert!(aabb_in_frustum(&inside, &frustum));
    assert!(!aabb_in_frustum(&far_away, &frustum));
    assert!(!aabb_in_frustum_fast(&far_away, &frustum.planes));

    let spun = Obb::from_aabb_transform(&inside, &Mat4::rotation_z(0.5));
    assert!(obb_in_frustum(&spun, &frustum));
    let spun_away = Obb::from_aabb_transform(&far_away, &Mat4::rotation_z(0.5));
    assert!(!obb_in_frustum(&spun_away, &frustum));
}

#[test]
fn radar_agrees_with_planes() {
    let radar = radar();
    let planes = frustum().planes;

    for (a, b) in radar.to_points().points().iter().zip(frustum().points.points()) {
        assert!(near(*a, *b, 1e-2), "{a:?} vs {b:?}");
    }

    let probes = [
        Vec3::ZERO,
        Vec3::new(4.0, 3.0, 0.0),
        Vec3::new(-9.0, 2.0, 5.0),
        Vec3::new(5.5, 0.0, 0.0),
        Vec3::new(0.0, -6.0, 0.5),
        Vec3::new(0.0, 0.0, -4.5),
        Vec3::new(0.0, 0.0, 7.0),
        Vec3::new(0.5, 0.5, -3.5),
    ];
    for p in probes {
        assert_eq!(
            point_in_radar(&p, &radar),
            point_in_frustum(&p, &planes),
            "disagreement at {p:?}"
        );
    }
}

#[test]
fn radar_sphere_widens_side_bounds() {
    let radar = radar();
    assert!((radar.tan_x() - 1.0).abs() <= 1e-5);
    assert!((radar.sphere_factor_x() - std::f32::consts::SQRT_2).abs() <= 1e-5);
    // Depth 5, side limit 5 + √2.
    assert!(sphere_in_radar(&Vec3::new(6.0, 0.0, 0.0), 1.0, &radar));
    assert!(!sphere_in_radar(&Vec3::new(8.0, 0.0, 0.0), 1.0, &radar));
    assert!(!sphere_in_radar(&Vec3::new(0.0, 0.0, -6.5), 1.0, &radar));
    assert!(sphere_in_radar(&Vec3::new(0.0, 0.0, -4.5), 1.0, &radar));
}

#[test]
fn frusta_overlap_until_separated_by_a_face() {
    let a = frustum();
    let nearby = Frustum::from_view_projection(&view_projection(2.0)).expect("invertible");
    let distant = Frustum::from_view_projection(&view_projection(100.0)).expect("invertible");
    assert!(frustum_to_frustum(&a, &nearby));
    assert!(frustum_to_frustum(&nearby, &a));
    assert!(!frustum_to_frustum(&a, &distant));
    assert!(!frustum_to_frustum(&distant, &a));
}
