// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Drawing and formatting samples for a resolved plan.

use std::io::{self, Write};

use echo_numerics::{FloatMode, Rng};

use crate::profile::{SampleKind, SamplePlan};

/// Builds the generator a plan asks for, minting a seed when none is fixed.
pub fn generator_for(plan: &SamplePlan) -> Rng {
    plan.seed.map_or_else(Rng::new, Rng::with_seed)
}

/// Draws one sample of `kind` and renders it as text.
pub fn draw(rng: &mut Rng, kind: SampleKind, mode: FloatMode) -> String {
    match kind {
        SampleKind::U8 => rng.next_u8().to_string(),
        SampleKind::I16 => rng.next_i16().to_string(),
        SampleKind::I32 => rng.next().to_string(),
        SampleKind::I64 => rng.next_i64().to_string(),
        SampleKind::U64 => rng.next_u64().to_string(),
        SampleKind::F32 => rng.next_float_f32(mode).to_string(),
        SampleKind::F64 => rng.next_float_f64(mode).to_string(),
    }
}

/// Writes `plan.count` samples, one per line.
pub fn write_samples<W: Write>(rng: &mut Rng, plan: &SamplePlan, out: &mut W) -> io::Result<()> {
    for _ in 0..plan.count {
        writeln!(out, "{}", draw(rng, plan.kind, plan.float_mode))?;
    }
    Ok(())
}
