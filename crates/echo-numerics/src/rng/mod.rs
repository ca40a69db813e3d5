// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Seeded pseudo-random generation for deterministic timelines.
//!
//! Layering, leaves first:
//! - [`generate_seed`] folds a random UUID into a 64-bit seed.
//! - [`Xorshift64Star`] turns a seed into a raw `u64` stream.
//! - [`remap`] / [`Interval`] linearly map between closed `u64` intervals
//!   using 128-bit intermediates.
//! - [`Rng`] draws one raw value per sample and maps it onto the requested
//!   type's range.
//!
//! A generator is plain mutable state. Share one across threads only behind
//! your own lock; prefer one generator per thread or task.

use core::fmt;

use tracing::{debug, trace};

use crate::error::RngError;

mod interval;
mod seed;
mod xorshift;

pub use interval::{remap, Interval};
pub use seed::{fold_identifier, generate_seed};
pub use xorshift::Xorshift64Star;

/// How floating-point samples are derived from a raw draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FloatMode {
    /// Uniform value in `[0, 1)` built from the draw's high mantissa bits.
    #[default]
    Unit,
    /// The floating value of an `i64` sample (integer-valued, spans the
    /// whole `i64` range). Kept for streams recorded against that contract.
    Integral,
}

impl fmt::Display for FloatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("unit"),
            Self::Integral => f.write_str("integral"),
        }
    }
}

const BYTE: Interval = Interval::from_ordered(0, 0xFF);

/// Signed targets sampled by the double-then-shift construction.
trait SignedSample: Sized {
    /// `[0, 2 * MAX]`; the raw draw is remapped onto this first.
    const DOUBLED: Interval;
    /// `MIN` widened, added to the remapped midpoint.
    const MIN_WIDE: i128;

    fn from_wide(value: i128) -> Self;
}

macro_rules! impl_signed_sample {
    ($($t:ty),*) => {$(
        impl SignedSample for $t {
            #[allow(clippy::cast_sign_loss)]
            const DOUBLED: Interval = Interval::from_ordered(0, (<$t>::MAX as u64) * 2);
            #[allow(clippy::cast_lossless)]
            const MIN_WIDE: i128 = <$t>::MIN as i128;

            // MIN + [0, 2 * MAX] spans [MIN, MAX - 1].
            #[allow(clippy::cast_possible_truncation)]
            fn from_wide(value: i128) -> Self {
                value as $t
            }
        }
    )*};
}

impl_signed_sample!(i16, i32, i64);

/// Seeded sampler over an [`Xorshift64Star`] stream.
///
/// Every typed sample consumes exactly one raw draw, so interleaving sample
/// types never desynchronizes two generators built from the same seed.
#[derive(Debug, Clone)]
pub struct Rng {
    seed: u64,
    bits: Xorshift64Star,
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng {
    /// Builds a generator seeded from [`generate_seed`].
    pub fn new() -> Self {
        let seed = generate_seed();
        debug!(seed, "generator auto-seeded from entropy");
        Self::with_seed(seed)
    }

    /// Builds a reproducible generator from `seed`.
    ///
    /// A zero seed is accepted; the mixing state falls back to
    /// [`crate::constants::ZERO_SEED_FALLBACK`] while [`Rng::seed`] still
    /// reports `0`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            bits: Xorshift64Star::new(seed),
        }
    }

    /// Like [`Rng::with_seed`] but rejects a zero seed.
    pub fn try_with_seed(seed: u64) -> Result<Self, RngError> {
        Ok(Self {
            seed,
            bits: Xorshift64Star::try_new(seed)?,
        })
    }

    /// The seed this generator was configured with (not the live state).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The live mixing state, for diagnostics.
    pub fn state(&self) -> u64 {
        self.bits.state()
    }

    /// Replaces the seed and restarts the stream from it.
    ///
    /// Afterwards the generator is indistinguishable from
    /// `Rng::with_seed(seed)`.
    pub fn reseed(&mut self, seed: u64) {
        trace!(old = self.seed, new = seed, "reseeding generator");
        self.seed = seed;
        self.bits = Xorshift64Star::new(seed);
    }

    /// Next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        self.bits.next_u64()
    }

    /// Next `i32` sample; the generator's primary entry point.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> i32 {
        self.next_i32()
    }

    /// Next raw draw remapped onto `target`.
    pub fn next_in(&mut self, target: &Interval) -> u64 {
        let raw = self.next_u64();
        Interval::FULL.project(raw, target)
    }

    /// Next unsigned byte in `[0, 255]`.
    ///
    /// Linear remap of the full draw, so `255` only comes from `u64::MAX`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u8(&mut self) -> u8 {
        self.next_in(&BYTE) as u8
    }

    /// Next `i16` sample in `[i16::MIN, i16::MAX - 1]`.
    pub fn next_i16(&mut self) -> i16 {
        self.next_signed()
    }

    /// Next `i32` sample in `[i32::MIN, i32::MAX - 1]`.
    pub fn next_i32(&mut self) -> i32 {
        self.next_signed()
    }

    /// Next `i64` sample in `[i64::MIN, i64::MAX - 1]`.
    pub fn next_i64(&mut self) -> i64 {
        self.next_signed()
    }

    fn next_signed<T: SignedSample>(&mut self) -> T {
        // Remap onto [0, 2 * MAX] then shift down by MIN; the unsigned remap
        // never sees a negative bound.
        let mid = self.next_in(&T::DOUBLED);
        T::from_wide(i128::from(mid) + T::MIN_WIDE)
    }

    /// Next uniform `f32` in `[0, 1)`.
    ///
    /// Uses the high 23 bits of the draw to fill the mantissa.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_f32(&mut self) -> f32 {
        let raw = self.next_u64();
        let bits = ((raw >> 41) as u32) | 0x3f80_0000;
        f32::from_bits(bits) - 1.0
    }

    /// Next uniform `f64` in `[0, 1)`.
    ///
    /// Uses the high 52 bits of the draw to fill the mantissa.
    pub fn next_f64(&mut self) -> f64 {
        let raw = self.next_u64();
        let bits = (raw >> 12) | 0x3ff0_0000_0000_0000;
        f64::from_bits(bits) - 1.0
    }

    /// Floating value of the next `i64` sample, rounded to `f32`.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_f32_integral(&mut self) -> f32 {
        self.next_i64() as f32
    }

    /// Floating value of the next `i64` sample, rounded to `f64`.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_f64_integral(&mut self) -> f64 {
        self.next_i64() as f64
    }

    /// Next `f32` under the chosen [`FloatMode`].
    pub fn next_float_f32(&mut self, mode: FloatMode) -> f32 {
        match mode {
            FloatMode::Unit => self.next_f32(),
            FloatMode::Integral => self.next_f32_integral(),
        }
    }

    /// Next `f64` under the chosen [`FloatMode`].
    pub fn next_float_f64(&mut self, mode: FloatMode) -> f64 {
        match mode {
            FloatMode::Unit => self.next_f64(),
            FloatMode::Integral => self.next_f64_integral(),
        }
    }

    /// Uniform integer in the inclusive range `[lo, hi]`.
    ///
    /// Uses a 128-bit multiply-shift rather than the linear remap so every
    /// value (including `hi`) is reachable with near-equal weight. `lo == hi`
    /// returns `lo`.
    pub fn range_u64(&mut self, lo: u64, hi: u64) -> Result<u64, RngError> {
        if lo > hi {
            return Err(RngError::InvalidBounds);
        }
        Ok(lo + self.bounded(hi - lo))
    }

    /// Signed counterpart of [`Rng::range_u64`]; accepts the full `i64` range.
    pub fn range_i64(&mut self, lo: i64, hi: i64) -> Result<i64, RngError> {
        if lo > hi {
            return Err(RngError::InvalidBounds);
        }
        let offset = self.bounded(hi.abs_diff(lo));
        // lo + offset <= hi, so the add never actually wraps.
        Ok(lo.wrapping_add_unsigned(offset))
    }

    /// Uniform `f64` in `[lo, hi]`, blending `lo * (1 - unit) + hi * unit`.
    ///
    /// Bounds must be finite and ordered.
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> Result<f64, RngError> {
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(RngError::InvalidBounds);
        }
        // Convex blend: `hi - lo` overflows for bounds of opposite sign near MAX.
        let unit = self.next_f64();
        Ok(lo.mul_add(1.0 - unit, hi * unit).clamp(lo, hi))
    }

    /// Maps one draw onto `[0, max_offset]` via `(raw * (max_offset + 1)) >> 64`.
    #[allow(clippy::cast_possible_truncation)]
    fn bounded(&mut self, max_offset: u64) -> u64 {
        let buckets = u128::from(max_offset) + 1;
        ((u128::from(self.next_u64()) * buckets) >> 64) as u64
    }
}
