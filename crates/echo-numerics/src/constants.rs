// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Numeric constants shared across Echo.
//!
//! The float set mirrors the engine's float32 mode; `f64` callers reach the
//! same values through the associated constants on [`crate::Float`].

use core::f32::consts;

/// π.
pub const PI: f32 = consts::PI;
/// 2π, one full turn.
pub const TAU: f32 = consts::TAU;
/// π/2.
pub const PI_OVER_2: f32 = consts::FRAC_PI_2;
/// π/4.
pub const PI_OVER_4: f32 = consts::FRAC_PI_4;
/// 1/π.
pub const ONE_OVER_PI: f32 = consts::FRAC_1_PI;
/// Euler's number.
pub const E: f32 = consts::E;
/// log2(e).
pub const LOG2_E: f32 = consts::LOG2_E;
/// log10(e).
pub const LOG10_E: f32 = consts::LOG10_E;
/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f32 = consts::PI / 180.0;
/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f32 = 180.0 / consts::PI;
/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Odd multiplier applied to the xorshift64* output (Vigna, 2014).
pub const XORSHIFT64_STAR_MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;

/// Mixing state substituted for a zero seed (2^64 / φ, odd and non-zero).
pub const ZERO_SEED_FALLBACK: u64 = 0x9E37_79B9_7F4A_7C15;
