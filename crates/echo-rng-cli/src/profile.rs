// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted sampling defaults and their merge with command-line flags.

use clap::ValueEnum;
use echo_numerics::FloatMode;
use serde::{Deserialize, Serialize};

/// Config key the profile is stored under.
pub const PROFILE_KEY: &str = "rng-profile";

/// Samples drawn when neither flag nor profile says otherwise.
pub const DEFAULT_COUNT: usize = 8;

/// Output type of a sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleKind {
    /// Unsigned byte.
    U8,
    /// Signed 16-bit.
    I16,
    /// Signed 32-bit.
    #[default]
    I32,
    /// Signed 64-bit.
    I64,
    /// Raw generator output.
    U64,
    /// Single-precision float.
    F32,
    /// Double-precision float.
    F64,
}

/// Saved sampling preferences. Absent fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingProfile {
    /// Fixed seed; `None` means draw a fresh one per run.
    pub seed: Option<u64>,
    /// Output type.
    pub kind: SampleKind,
    /// Samples per run; `None` uses [`DEFAULT_COUNT`].
    pub count: Option<usize>,
    /// Floating sample construction.
    pub float_mode: FloatMode,
}

/// Flag values for a single run; `None` defers to the profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// `--seed`.
    pub seed: Option<u64>,
    /// `--kind`.
    pub kind: Option<SampleKind>,
    /// `--count`.
    pub count: Option<usize>,
    /// `--float-mode`.
    pub float_mode: Option<FloatMode>,
}

/// Fully resolved parameters of a sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePlan {
    /// Explicit seed, or `None` for an entropy seed.
    pub seed: Option<u64>,
    /// Output type.
    pub kind: SampleKind,
    /// Number of samples.
    pub count: usize,
    /// Floating sample construction.
    pub float_mode: FloatMode,
}

impl SamplingProfile {
    /// Merges flags over this profile: flag, then profile, then default.
    pub fn resolve(&self, overrides: Overrides) -> SamplePlan {
        SamplePlan {
            seed: overrides.seed.or(self.seed),
            kind: overrides.kind.unwrap_or(self.kind),
            count: overrides.count.or(self.count).unwrap_or(DEFAULT_COUNT),
            float_mode: overrides.float_mode.unwrap_or(self.float_mode),
        }
    }

    /// Writes flag values into the profile. `clear_seed` wins over `seed`.
    pub fn apply(&mut self, overrides: Overrides, clear_seed: bool) {
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if clear_seed {
            self.seed = None;
        }
        if let Some(kind) = overrides.kind {
            self.kind = kind;
        }
        if let Some(count) = overrides.count {
            self.count = Some(count);
        }
        if let Some(mode) = overrides.float_mode {
            self.float_mode = mode;
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_resolves_to_defaults() {
        let plan = SamplingProfile::default().resolve(Overrides::default());
        assert_eq!(
            plan,
            SamplePlan {
                seed: None,
                kind: SampleKind::I32,
                count: DEFAULT_COUNT,
                float_mode: FloatMode::Unit,
            }
        );
    }

    #[test]
    fn flags_override_profile() {
        let profile = SamplingProfile {
            seed: Some(1),
            kind: SampleKind::U8,
            count: Some(3),
            float_mode: FloatMode::Integral,
        };
        let plan = profile.resolve(Overrides {
            seed: Some(9),
            kind: None,
            count: Some(5),
            float_mode: None,
        });
        assert_eq!(plan.seed, Some(9));
        assert_eq!(plan.kind, SampleKind::U8);
        assert_eq!(plan.count, 5);
        assert_eq!(plan.float_mode, FloatMode::Integral);
    }

    #[test]
    fn clear_seed_beats_new_seed() {
        let mut profile = SamplingProfile {
            seed: Some(4),
            ..SamplingProfile::default()
        };
        profile.apply(
            Overrides {
                seed: Some(5),
                ..Overrides::default()
            },
            true,
        );
        assert_eq!(profile.seed, None);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let profile: SamplingProfile =
            serde_json::from_str(r#"{"kind":"f64","float_mode":"integral"}"#).expect("parse");
        assert_eq!(profile.kind, SampleKind::F64);
        assert_eq!(profile.float_mode, FloatMode::Integral);
        assert_eq!(profile.seed, None);
        assert_eq!(profile.count, None);
    }
}
