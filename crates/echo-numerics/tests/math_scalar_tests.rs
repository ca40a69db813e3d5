// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::PI;

use echo_numerics::constants;
use echo_numerics::{
    barycentric, clamp, hermite, is_power_of_two, lerp, to_degrees, to_radians, wrap_angle,
};

fn approx_eq(a: f64, b: f64, tolerance: f64) {
    let diff = (a - b).abs();
    assert!(diff <= tolerance, "expected {b}, got {a} (diff {diff})");
}

#[test]
fn is_power_of_two_truth_table() {
    for n in [1_i32, 2, 4, 1024] {
        assert!(is_power_of_two(n), "{n} should be a power of two");
    }
    for n in [0_i32, -1, 3, 100] {
        assert!(!is_power_of_two(n), "{n} should not be a power of two");
    }
    assert!(is_power_of_two(1_u64 << 63));
    assert!(!is_power_of_two(0_u8));
}

#[test]
fn clamp_integer_and_float() {
    assert_eq!(clamp(5, 0, 10), 5);
    assert_eq!(clamp(-1, 0, 10), 0);
    assert_eq!(clamp(11, 0, 10), 10);

    assert_eq!(clamp(5.0_f32, 0.0, 10.0), 5.0);
    assert_eq!(clamp(-1.0_f32, 0.0, 10.0), 0.0);
    assert_eq!(clamp(11.0_f64, 0.0, 10.0), 10.0);
}

#[test]
fn wrap_angle_zero_and_full_turns() {
    assert_eq!(wrap_angle(0.0_f64), 0.0);
    assert_eq!(wrap_angle(0.0_f32), 0.0);
    approx_eq(wrap_angle(4.0 * PI), 0.0, 1e-12);
    approx_eq(wrap_angle(-4.0 * PI), 0.0, 1e-12);
    approx_eq(wrap_angle(3.0 * PI / 2.0), -PI / 2.0, 1e-12);
}

#[test]
fn wrap_angle_stays_in_half_open_interval() {
    let mut angle = -50.0_f64;
    while angle <= 50.0 {
        let wrapped = wrap_angle(angle);
        assert!(wrapped > -PI && wrapped <= PI, "{angle} wrapped to {wrapped}");
        angle += 0.173;
    }
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0_f32, 10.0, 0.0), 2.0);
    assert_eq!(lerp(2.0_f32, 10.0, 1.0), 10.0);
    assert_eq!(lerp(-4.0_f64, 4.0, 0.5), 0.0);
    assert_eq!(lerp(0.0_f64, 8.0, 1.5), 12.0);
}

#[test]
fn hermite_endpoints_ignore_tangents() {
    for (t0, t1) in [(0.0_f64, 0.0), (5.0, -3.0), (-100.0, 100.0)] {
        assert_eq!(hermite(1.25, t0, 7.5, t1, 0.0), 1.25);
        assert_eq!(hermite(1.25, t0, 7.5, t1, 1.0), 7.5);
    }
}

#[test]
fn hermite_midpoint_with_flat_tangents() {
    assert_eq!(hermite(0.0_f64, 0.0, 4.0, 0.0, 0.5), 2.0);
}

#[test]
fn barycentric_corners() {
    assert_eq!(barycentric(1.0_f32, 5.0, 9.0, 0.0, 0.0), 1.0);
    assert_eq!(barycentric(1.0_f32, 5.0, 9.0, 1.0, 0.0), 5.0);
    assert_eq!(barycentric(1.0_f32, 5.0, 9.0, 0.0, 1.0), 9.0);
    assert_eq!(barycentric(0.0_f64, 3.0, 6.0, 0.5, 0.25), 3.0);
}

#[test]
fn degree_radian_roundtrip() {
    for deg in [0.0_f64, 45.0, 90.0, 180.0, -90.0, 720.0] {
        approx_eq(to_degrees(to_radians(deg)), deg, 1e-9);
    }
    approx_eq(f64::from(to_radians(180.0_f32)), f64::from(constants::PI), 1e-6);
    approx_eq(to_degrees(PI / 2.0), 90.0, 1e-12);
}
