// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, PI};
use echo_math::{Mat4, Quat, Vec3};

const EPS: f32 = 1e-5;

fn approx_eq3(a: [f32; 3], b: [f32; 3]) {
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn approx_eq4(a: [f32; 4], b: [f32; 4]) {
    for i in 0..4 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn approx_eq16(a: [f32; 16], b: [f32; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn same_rotation(a: &Quat, b: &Quat) -> bool {
    // q and -q encode the same rotation.
    a.dot(b).abs() > 1.0 - 1e-5
}

fn samples() -> Vec<Quat> {
    vec![
        Quat::identity(),
        Quat::from_axis_angle(Vec3::UNIT_X, 0.3),
        Quat::from_axis_angle(Vec3::new(1.0, 2.0, -0.5), 2.0),
        Quat::from_axis_angle(Vec3::UNIT_Y, PI - 0.01),
        Quat::from_axis_angle(Vec3::UNIT_Z, PI),
        Quat::from_axis_angle(Vec3::new(-1.0, 1.0, 1.0), 3.1),
        Quat::from_axis_angle(Vec3::new(0.2, -0.9, 0.4), -1.3),
    ]
}

#[test]
fn multiply_composes_left_to_right_like_matrices() {
    let a = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    let b = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    approx_eq16(
        a.multiply(&b).to_mat4().to_array(),
        a.to_mat4().multiply(&b.to_mat4()).to_array(),
    );
    let v = Vec3::new(0.3, -1.0, 2.0);
    approx_eq3(a.multiply(&b).rotate(&v).to_array(), b.rotate(&a.rotate(&v)).to_array());
}

#[test]
fn rotate_matches_matrix() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    for q in samples() {
        approx_eq3(q.rotate(&v).to_array(), q.to_mat4().transform_direction(&v).to_array());
    }
}

#[test]
fn matrix_round_trip_respects_double_cover() {
    for q in samples() {
        let back = Quat::from_rotation_matrix(&q.to_mat4());
        assert!(same_rotation(&q, &back), "{q:?} vs {back:?}");
        assert!(back.is_normalized(1e-4));
    }
}

#[test]
fn slerp_endpoints() {
    let q0 = Quat::from_axis_angle(Vec3::UNIT_Y, 0.2);
    let q1 = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 1.0);
    approx_eq4(q0.slerp(&q1, 0.0).to_array(), q0.to_array());
    approx_eq4(q0.slerp(&q1, 1.0).to_array(), q1.to_array());
}

#[test]
fn slerp_of_identical_inputs_is_constant() {
    let q = Quat::from_axis_angle(Vec3::new(0.3, 0.4, 0.5), 0.9);
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        approx_eq4(q.slerp(&q, t).to_array(), q.to_array());
    }
}

#[test]
fn slerp_takes_short_arc_on_negative_dot() {
    let q = Quat::from_axis_angle(Vec3::UNIT_Z, 0.5);
    let neg = -q;
    approx_eq4(q.slerp(&neg, 0.5).to_array(), q.to_array());
}

#[test]
fn slerp_midpoint_halves_angle() {
    let q0 = Quat::identity();
    let q1 = Quat::from_axis_angle(Vec3::UNIT_X, 1.0);
    let (axis, angle) = q0.slerp(&q1, 0.5).to_axis_angle();
    approx_eq3(axis.to_array(), [1.0, 0.0, 0.0]);
    assert!((angle - 0.5).abs() < EPS);
}

#[test]
fn axis_angle_round_trip() {
    let q = Quat::from_axis_angle(Vec3::new(0.0, 3.0, 4.0), 1.25);
    let (axis, angle) = q.to_axis_angle();
    approx_eq3(axis.to_array(), [0.0, 0.6, 0.8]);
    assert!((angle - 1.25).abs() < EPS);
    assert_eq!(Quat::identity().to_axis_angle(), (Vec3::UNIT_X, 0.0));
}

#[test]
fn zero_axis_yields_identity() {
    assert_eq!(Quat::from_axis_angle(Vec3::ZERO, 1.0), Quat::identity());
}

#[test]
fn inverse_and_diff() {
    let a = Quat::from_axis_angle(Vec3::new(1.0, 0.0, 1.0), 0.7);
    let b = Quat::from_axis_angle(Vec3::new(0.0, 1.0, 1.0), -1.1);
    let inv = a.try_inverse().expect("unit quaternion is invertible");
    assert!(same_rotation(&a.multiply(&inv), &Quat::identity()));
    approx_eq4(a.multiply(&a.diff(&b)).to_array(), b.to_array());
    assert!(Quat::new(0.0, 0.0, 0.0, 0.0).try_inverse().is_none());
}

#[test]
fn euler_o2i_round_trip() {
    let (h, p, b) = (0.5, 0.3, -0.8);
    let (h2, p2, b2) = Quat::from_euler_o2i(h, p, b).to_euler_o2i();
    assert!((h - h2).abs() < EPS);
    assert!((p - p2).abs() < EPS);
    assert!((b - b2).abs() < EPS);
}

#[test]
fn euler_i2o_is_inverse_of_o2i() {
    let (h, p, b) = (-1.2, 0.4, 2.0);
    let o2i = Quat::from_euler_o2i(h, p, b);
    let i2o = Quat::from_euler_i2o(h, p, b);
    assert!(same_rotation(&o2i.multiply(&i2o), &Quat::identity()));
    let (h2, p2, b2) = i2o.to_euler_i2o();
    assert!((h - h2).abs() < EPS && (p - p2).abs() < EPS && (b - b2).abs() < EPS);
}

#[test]
fn euler_gimbal_lock_folds_bank_into_heading() {
    let (h, p, b) = Quat::from_euler_o2i(0.4, FRAC_PI_2, 0.0).to_euler_o2i();
    assert!((h - 0.4).abs() < 1e-4);
    assert!((p - FRAC_PI_2).abs() < 1e-6);
    assert_eq!(b, 0.0);
    assert!(h.is_finite() && p.is_finite());
}

#[test]
fn euler_heading_matches_matrix_yaw() {
    let q = Quat::from_euler_o2i(FRAC_PI_2, 0.0, 0.0);
    approx_eq16(
        q.to_mat4().to_array(),
        Mat4::rotation_from_euler(FRAC_PI_2, 0.0, 0.0).to_array(),
    );
}

#[test]
fn squad_hits_segment_endpoints() {
    let q: Vec<Quat> = (0u8..4)
        .map(|i| Quat::from_axis_angle(Vec3::new(1.0, 0.5, 0.2), 0.4 * f32::from(i)))
        .collect();
    let (a, b, c) = Quat::squad_setup(&q[0], &q[1], &q[2], &q[3]);
    approx_eq4(q[1].squad(&a, &b, &c, 0.0).to_array(), q[1].to_array());
    approx_eq4(q[1].squad(&a, &b, &c, 1.0).to_array(), c.to_array());
    assert!(same_rotation(&c, &q[2]));
}

#[test]
fn nlerp_is_unit_length() {
    let a = Quat::from_axis_angle(Vec3::UNIT_X, 0.1);
    let b = Quat::from_axis_angle(Vec3::UNIT_Y, 2.5);
    assert!(a.lerp(&b, 0.3).is_normalized(1e-5));
}
