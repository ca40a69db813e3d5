// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for remapping and generator construction.

use thiserror::Error;

/// Failure modes of [`crate::remap`] and [`crate::Interval`] construction.
///
/// Every variant carries the offending bounds so callers can report them
/// without re-deriving the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemapError {
    /// The interval collapses to a single point; no linear map exists.
    #[error("interval [{min}, {max}] collapses to a single point")]
    ZeroRange {
        /// Lower bound supplied.
        min: u64,
        /// Upper bound supplied.
        max: u64,
    },
    /// The interval's lower bound exceeds its upper bound.
    #[error("interval [{min}, {max}] is reversed (min > max)")]
    ReversedRange {
        /// Lower bound supplied.
        min: u64,
        /// Upper bound supplied.
        max: u64,
    },
    /// The value to remap lies outside the source interval.
    #[error("value {value} lies outside the source interval [{min}, {max}]")]
    OutOfDomain {
        /// Value supplied.
        value: u64,
        /// Source interval lower bound.
        min: u64,
        /// Source interval upper bound.
        max: u64,
    },
}

/// Errors raised by the seeded generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RngError {
    /// A strict constructor was handed the xorshift fixed point.
    #[error("seed 0 is a fixed point of the xorshift mixer")]
    ZeroSeed,
    /// A bounded draw was requested with `lo > hi` (or unordered float bounds).
    #[error("invalid sampling bounds: lower bound exceeds upper bound")]
    InvalidBounds,
}
