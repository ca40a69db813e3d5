// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::RemapError;

/// Closed `u64` interval `[min, max]` with `min < max`.
///
/// Construction rejects single-point and reversed intervals, so every
/// `Interval` admits a linear map onto any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    min: u64,
    max: u64,
}

impl Interval {
    /// The whole `u64` domain; the source interval of every raw draw.
    pub const FULL: Self = Self::from_ordered(0, u64::MAX);

    /// Validates and builds `[min, max]`.
    pub fn new(min: u64, max: u64) -> Result<Self, RemapError> {
        if min == max {
            return Err(RemapError::ZeroRange { min, max });
        }
        if min > max {
            return Err(RemapError::ReversedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub(crate) const fn from_ordered(min: u64, max: u64) -> Self {
        assert!(min < max, "interval bounds must be strictly ordered");
        Self { min, max }
    }

    /// Lower bound.
    pub const fn min(&self) -> u64 {
        self.min
    }

    /// Upper bound.
    pub const fn max(&self) -> u64 {
        self.max
    }

    /// `max - min`; never zero.
    pub const fn span(&self) -> u64 {
        self.max - self.min
    }

    /// Returns `true` when `value` lies in `[min, max]`.
    pub const fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Linearly maps `value` from `self` onto `target`.
    ///
    /// Endpoints map exactly; interior points truncate toward `target.min`.
    pub fn remap_to(&self, value: u64, target: &Self) -> Result<u64, RemapError> {
        if !self.contains(value) {
            return Err(RemapError::OutOfDomain {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(self.project(value, target))
    }

    /// Maps a value already known to lie in `self`.
    ///
    /// `(value - min) * target.span()` is formed in 128 bits; with
    /// `value - min <= span` the quotient never exceeds `target.span()`, so
    /// narrowing back to `u64` and adding `target.min` cannot overflow.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn project(&self, value: u64, target: &Self) -> u64 {
        debug_assert!(self.contains(value));
        let offset = u128::from(value - self.min);
        let scaled = offset * u128::from(target.span()) / u128::from(self.span());
        scaled as u64 + target.min
    }
}

/// Linearly remaps `value` from `[old_min, old_max]` onto `[new_min, new_max]`.
///
/// Computes `((value - old_min) * (new_max - new_min)) / (old_max - old_min)
/// + new_min` with a 128-bit intermediate, so full-width intervals never
/// overflow. The source interval is validated first, then the destination,
/// then the value's membership in the source.
pub fn remap(
    value: u64,
    old_min: u64,
    old_max: u64,
    new_min: u64,
    new_max: u64,
) -> Result<u64, RemapError> {
    let from = Interval::new(old_min, old_max)?;
    let onto = Interval::new(new_min, new_max)?;
    from.remap_to(value, &onto)
}
