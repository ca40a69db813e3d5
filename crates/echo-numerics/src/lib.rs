// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-numerics: deterministic numeric utilities for Echo's real-time loop.
//!
//! Two halves live here:
//! - [`math`]: pure, stateless helpers (clamp, lerp, Hermite, Catmull-Rom,
//!   barycentric, angle conversion and wrapping, power-of-two checks).
//! - [`rng`]: a seeded xorshift64* generator plus the widened-arithmetic
//!   remapper that turns its raw 64-bit stream into typed samples.
//!
//! Identical seeds produce identical sample streams on every supported
//! platform. Nothing in this crate is suitable for cryptographic use.
#![forbid(unsafe_code)]

/// Shared numeric constants (float32 set plus PRNG parameters).
pub mod constants;
/// Pure interpolation, clamping, and angle helpers.
pub mod math;
/// Seeded pseudo-random generation and range remapping.
pub mod rng;

mod error;

pub use error::{RemapError, RngError};
pub use math::{
    barycentric, catmull_rom, clamp, hermite, inverse_lerp, is_power_of_two, lerp, smooth_step,
    to_degrees, to_radians, wrap_angle, Float, PowerOfTwo,
};
pub use rng::{generate_seed, remap, FloatMode, Interval, Rng, Xorshift64Star};
