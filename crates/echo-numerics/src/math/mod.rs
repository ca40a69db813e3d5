// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pure scalar helpers: clamping, angle conversion and wrapping, and
//! power-of-two checks. Interpolation lives in [`interp`] and is re-exported
//! here.
//!
//! Every function is stateless and total; IEEE semantics (NaN propagation,
//! signed zero) apply unchanged to the floating variants.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

mod interp;

pub use interp::{barycentric, catmull_rom, hermite, inverse_lerp, lerp, smooth_step};

/// Floating-point scalar accepted by the interpolation and angle helpers.
///
/// Implemented for `f32` and `f64`. Range reduction goes through `libm` so
/// `wrap_angle` yields the same bits on every platform.
pub trait Float:
    Copy
    + PartialOrd
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// One half.
    const HALF: Self;
    /// π.
    const PI: Self;
    /// 2π.
    const TAU: Self;
    /// π/2.
    const FRAC_PI_2: Self;
    /// π/4.
    const FRAC_PI_4: Self;
    /// Euler's number.
    const E: Self;
    /// Degrees → radians factor.
    const DEG_TO_RAD: Self;
    /// Radians → degrees factor.
    const RAD_TO_DEG: Self;
    /// Tolerance for degenerate-value checks.
    const EPSILON: Self;

    /// Lossless conversion from a small integer coefficient.
    fn from_u8(value: u8) -> Self;

    /// Floating remainder with the sign of `self` (C `fmod`).
    fn fmod(self, rhs: Self) -> Self;
}

impl Float for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HALF: Self = 0.5;
    const PI: Self = core::f32::consts::PI;
    const TAU: Self = core::f32::consts::TAU;
    const FRAC_PI_2: Self = core::f32::consts::FRAC_PI_2;
    const FRAC_PI_4: Self = core::f32::consts::FRAC_PI_4;
    const E: Self = core::f32::consts::E;
    const DEG_TO_RAD: Self = crate::constants::DEG_TO_RAD;
    const RAD_TO_DEG: Self = crate::constants::RAD_TO_DEG;
    const EPSILON: Self = crate::constants::EPSILON;

    fn from_u8(value: u8) -> Self {
        Self::from(value)
    }

    fn fmod(self, rhs: Self) -> Self {
        libm::fmodf(self, rhs)
    }
}

impl Float for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HALF: Self = 0.5;
    const PI: Self = core::f64::consts::PI;
    const TAU: Self = core::f64::consts::TAU;
    const FRAC_PI_2: Self = core::f64::consts::FRAC_PI_2;
    const FRAC_PI_4: Self = core::f64::consts::FRAC_PI_4;
    const E: Self = core::f64::consts::E;
    const DEG_TO_RAD: Self = core::f64::consts::PI / 180.0;
    const RAD_TO_DEG: Self = 180.0 / core::f64::consts::PI;
    const EPSILON: Self = 1e-12;

    fn from_u8(value: u8) -> Self {
        Self::from(value)
    }

    fn fmod(self, rhs: Self) -> Self {
        libm::fmod(self, rhs)
    }
}

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// Works for any ordered type (integers and floats alike). Returns `min` when
/// `value < min`, `max` when `value > max`, and `value` otherwise, so a NaN
/// `value` passes through unchanged. `min > max` is a caller error.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    debug_assert!(min <= max, "invalid clamp range");
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Converts radians to degrees.
pub fn to_degrees<T: Float>(radians: T) -> T {
    radians * T::RAD_TO_DEG
}

/// Converts degrees to radians.
pub fn to_radians<T: Float>(degrees: T) -> T {
    degrees * T::DEG_TO_RAD
}

/// Reduces `angle` (radians) into `(-π, π]`.
///
/// The result is congruent to `angle` modulo 2π up to rounding; `-π` maps to
/// `π`. Non-finite inputs yield NaN.
pub fn wrap_angle<T: Float>(angle: T) -> T {
    let mut shifted = (angle + T::PI).fmod(T::TAU);
    if shifted <= T::ZERO {
        shifted = shifted + T::TAU;
    }
    shifted - T::PI
}

/// Integer types that can answer "is exactly one bit set and positive?".
pub trait PowerOfTwo: Copy {
    /// Returns `true` when `self` is a positive power of two.
    fn is_power_of_two(self) -> bool;
}

macro_rules! impl_power_of_two_unsigned {
    ($($t:ty),*) => {$(
        impl PowerOfTwo for $t {
            fn is_power_of_two(self) -> bool {
                <$t>::is_power_of_two(self)
            }
        }
    )*};
}

macro_rules! impl_power_of_two_signed {
    ($($t:ty),*) => {$(
        impl PowerOfTwo for $t {
            fn is_power_of_two(self) -> bool {
                self > 0 && self & (self - 1) == 0
            }
        }
    )*};
}

impl_power_of_two_unsigned!(u8, u16, u32, u64, u128, usize);
impl_power_of_two_signed!(i8, i16, i32, i64, i128, isize);

/// Returns `true` when `value` is a positive power of two (`0` and negatives
/// are not).
pub fn is_power_of_two<T: PowerOfTwo>(value: T) -> bool {
    value.is_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_accepts_equal_bounds() {
        assert_eq!(clamp(3, 7, 7), 7);
        assert_eq!(clamp(9_u64, 7, 7), 7);
    }

    #[test]
    fn clamp_passes_nan_through() {
        assert!(clamp(f32::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn wrap_angle_maps_negative_pi_to_positive_pi() {
        assert_eq!(wrap_angle(-core::f64::consts::PI), core::f64::consts::PI);
        assert_eq!(wrap_angle(core::f64::consts::PI), core::f64::consts::PI);
    }

    #[test]
    fn wrap_angle_propagates_non_finite() {
        assert!(wrap_angle(f32::INFINITY).is_nan());
        assert!(wrap_angle(f64::NAN).is_nan());
    }

    #[test]
    fn signed_min_is_not_a_power_of_two() {
        assert!(!is_power_of_two(i64::MIN));
        assert!(is_power_of_two(1_i8 << 6));
        assert!(is_power_of_two(1_u128 << 127));
    }
}
