// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use echo_math::{orient_2d, Point2i, Vec2, Vec3, Vec4};

fn approx_eq3(a: [f32; 3], b: [f32; 3]) {
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= 1e-6, "index {i}: {a:?} vs {b:?}");
    }
}

#[test]
fn add_sub_mul_ops_work() {
    let a = Vec3::new(1.0, -2.0, 0.5);
    let b = Vec3::new(-3.0, 4.0, 1.5);
    assert_eq!((a + b).to_array(), [-2.0, 2.0, 2.0]);
    assert_eq!((a - b).to_array(), [4.0, -6.0, -1.0]);
    assert_eq!((a * 2.0).to_array(), [2.0, -4.0, 1.0]);
    assert_eq!((2.0 * a).to_array(), [2.0, -4.0, 1.0]);
    assert_eq!((-a).to_array(), [-1.0, 2.0, -0.5]);
    assert_eq!((a / 2.0).to_array(), [0.5, -1.0, 0.25]);
}

#[test]
fn assign_ops_work() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    v += Vec3::new(-1.0, 1.0, 0.0);
    assert_eq!(v.to_array(), [0.0, 3.0, 3.0]);
    v -= Vec3::new(0.0, 1.0, 1.0);
    assert_eq!(v.to_array(), [0.0, 2.0, 2.0]);
    v *= 0.5;
    assert_eq!(v.to_array(), [0.0, 1.0, 1.0]);
    v /= 2.0;
    assert_eq!(v.to_array(), [0.0, 0.5, 0.5]);
}

#[test]
fn cross_is_right_handed() {
    assert_eq!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y).to_array(), [0.0, 0.0, 1.0]);
    assert_eq!(Vec3::UNIT_Y.cross(&Vec3::UNIT_Z).to_array(), [1.0, 0.0, 0.0]);
}

#[test]
fn normalize_degenerate_returns_zero() {
    let tiny = Vec3::new(1e-7, 0.0, 0.0);
    assert_eq!(tiny.normalize().to_array(), [0.0, 0.0, 0.0]);
    assert!(tiny.try_normalize().is_none());
    assert!(Vec2::ZERO.try_normalize().is_none());
}

#[test]
fn normalize_unit_length() {
    let n = Vec3::new(3.0, 4.0, 0.0).normalize();
    approx_eq3(n.to_array(), [0.6, 0.8, 0.0]);
}

#[test]
fn reflect_flips_normal_component() {
    let r = Vec3::new(1.0, -1.0, 0.0).reflect(&Vec3::UNIT_Y);
    assert_eq!(r.to_array(), [1.0, 1.0, 0.0]);
}

#[test]
fn refract_total_internal_reflection_returns_zero() {
    let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
    let out = incident.refract(&Vec3::UNIT_Y, 1.5);
    assert_eq!(out.to_array(), [0.0, 0.0, 0.0]);
}

#[test]
fn refract_with_unit_ratio_passes_straight_through() {
    let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
    let out = incident.refract(&Vec3::UNIT_Y, 1.0);
    approx_eq3(out.to_array(), incident.to_array());
}

#[test]
fn project_onto_axis_and_degenerate() {
    let v = Vec3::new(2.0, 3.0, 4.0);
    approx_eq3(v.project(&Vec3::new(0.0, 5.0, 0.0)).to_array(), [0.0, 3.0, 0.0]);
    assert_eq!(v.project(&Vec3::ZERO).to_array(), [0.0, 0.0, 0.0]);
}

#[test]
fn angle_between_perpendicular_axes() {
    let a = Vec3::UNIT_X.angle_between(&Vec3::UNIT_Z);
    assert!((a - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn orient_2d_classifies_turns() {
    let o = Vec2::new(0.0, 0.0);
    assert!(orient_2d(&o, &Vec2::new(1.0, 0.0), &Vec2::new(0.0, 1.0)) > 0.0);
    assert!(orient_2d(&o, &Vec2::new(0.0, 1.0), &Vec2::new(1.0, 0.0)) < 0.0);
    assert_eq!(orient_2d(&o, &Vec2::new(1.0, 0.0), &Vec2::new(2.0, 0.0)), 0.0);
}

#[test]
fn vec2_perp_dot_is_scalar_cross() {
    let a = Vec2::new(2.0, 0.0);
    let b = Vec2::new(0.0, 3.0);
    assert_eq!(a.perp_dot(&b), 6.0);
    assert_eq!(b.perp_dot(&a), -6.0);
    assert_eq!(a.perp().to_array(), [0.0, 2.0]);
    assert_eq!(a.mul_elem(&b).to_array(), [0.0, 0.0]);
    assert_eq!(Vec2::new(3.0, 8.0).div_elem(&Vec2::new(2.0, 4.0)).to_array(), [1.5, 2.0]);
}

#[test]
fn vec4_perspective_divide_by_w() {
    let h = Vec4::new(2.0, 4.0, 6.0, 2.0);
    assert_eq!(h.perspective_divide().map(Vec3::to_array), Some([1.0, 2.0, 3.0]));
    assert!(Vec4::new(1.0, 1.0, 1.0, 0.0).perspective_divide().is_none());
    let m = h.mul_elem(&Vec4::new(0.5, 0.25, 2.0, 1.0));
    assert_eq!(m.to_array(), [1.0, 1.0, 12.0, 2.0]);
    assert_eq!(m.div_elem(&h).to_array(), [0.5, 0.25, 2.0, 1.0]);
}

#[test]
fn point2i_arithmetic_and_conversion() {
    let p = Point2i::new(3, -4) + Point2i::new(1, 1);
    assert_eq!(p, Point2i::new(4, -3));
    assert_eq!(p.manhattan(&Point2i::new(0, 0)), 7);
    assert_eq!(p.scale(-2) - p, Point2i::new(-12, 9));
    assert_eq!(p.to_vec2().to_array(), [4.0, -3.0]);
    assert_eq!(Point2i::from_vec2_round(&Vec2::new(1.6, -2.4)), Point2i::new(2, -2));
}
