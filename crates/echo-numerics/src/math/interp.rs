// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Closed-form interpolation over [`Float`] scalars.

use super::{clamp, Float};

/// Linear interpolation: `a + (b - a) * t`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: where `value` sits between `a` and `b` as a fraction.
///
/// A degenerate span (`a == b`) yields zero.
pub fn inverse_lerp<T: Float>(a: T, b: T, value: T) -> T {
    let span = b - a;
    if span == T::ZERO {
        return T::ZERO;
    }
    (value - a) / span
}

/// Cubic Hermite spline through `p0` (tangent `t0`) and `p1` (tangent `t1`).
///
/// `s == 0` returns `p0` and `s == 1` returns `p1` exactly, independent of
/// the tangents.
pub fn hermite<T: Float>(p0: T, t0: T, p1: T, t1: T, s: T) -> T {
    if s == T::ZERO {
        return p0;
    }
    if s == T::ONE {
        return p1;
    }
    let two = T::from_u8(2);
    let three = T::from_u8(3);
    let s2 = s * s;
    let s3 = s2 * s;

    let h00 = two * s3 - three * s2 + T::ONE;
    let h01 = three * s2 - two * s3;
    let h10 = s3 - two * s2 + s;
    let h11 = s3 - s2;

    p0 * h00 + p1 * h01 + t0 * h10 + t1 * h11
}

/// Catmull-Rom spline segment between `p1` and `p2`, shaped by `p0` and `p3`.
pub fn catmull_rom<T: Float>(p0: T, p1: T, p2: T, p3: T, s: T) -> T {
    let two = T::from_u8(2);
    let three = T::from_u8(3);
    let four = T::from_u8(4);
    let five = T::from_u8(5);
    let s2 = s * s;
    let s3 = s2 * s;

    T::HALF
        * (two * p1
            + (p2 - p0) * s
            + (two * p0 - five * p1 + four * p2 - p3) * s2
            + (three * p1 - p0 - three * p2 + p3) * s3)
}

/// Point in the triangle `(v1, v2, v3)` at areal coordinates `a1` (towards
/// `v2`) and `a2` (towards `v3`).
pub fn barycentric<T: Float>(v1: T, v2: T, v3: T, a1: T, a2: T) -> T {
    v1 + (v2 - v1) * a1 + (v3 - v1) * a2
}

/// Hermite ease between `a` and `b` with zero end tangents; `t` is clamped
/// to `[0, 1]` first.
pub fn smooth_step<T: Float>(a: T, b: T, t: T) -> T {
    let t = clamp(t, T::ZERO, T::ONE);
    hermite(a, T::ZERO, b, T::ZERO, t)
}
