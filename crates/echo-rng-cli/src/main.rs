// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-rng
//!
//! Developer CLI over `echo-numerics`: draws seeded samples, mints entropy
//! seeds, remaps values between intervals, and manages the saved sampling
//! profile. Samples go to stdout; logs go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use echo_numerics::{generate_seed, remap, FloatMode};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod profile;
mod sample;

use config::{ConfigService, FsConfigStore};
use profile::{Overrides, SampleKind, SamplingProfile, PROFILE_KEY};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the saved profile (defaults to the platform config dir)
    #[clap(long, global = true, env = "ECHO_RNG_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw samples from a seeded generator
    Sample {
        #[clap(flatten)]
        flags: SampleFlags,

        /// Ignore the saved profile
        #[clap(long)]
        no_profile: bool,
    },
    /// Print a freshly generated seed
    Seed,
    /// Linearly remap VALUE from [OLD_MIN, OLD_MAX] onto [NEW_MIN, NEW_MAX]
    Remap {
        #[clap(value_parser = parse_u64)]
        value: u64,
        #[clap(value_parser = parse_u64)]
        old_min: u64,
        #[clap(value_parser = parse_u64)]
        old_max: u64,
        #[clap(value_parser = parse_u64)]
        new_min: u64,
        #[clap(value_parser = parse_u64)]
        new_max: u64,
    },
    /// Inspect or edit the saved sampling profile
    Profile {
        #[clap(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileAction {
    /// Print the saved profile as JSON
    Show,
    /// Update fields of the saved profile
    Set {
        #[clap(flatten)]
        flags: SampleFlags,

        /// Forget the saved seed (fresh entropy per run)
        #[clap(long, conflicts_with = "seed")]
        clear_seed: bool,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct SampleFlags {
    /// Seed (decimal or 0x-prefixed hex)
    #[clap(long, value_parser = parse_u64)]
    seed: Option<u64>,

    /// Output type
    #[clap(long, value_enum)]
    kind: Option<SampleKind>,

    /// Number of samples
    #[clap(short = 'n', long)]
    count: Option<usize>,

    /// Float construction: unit ([0, 1)) or integral (float of an i64 sample)
    #[clap(long, value_parser = parse_float_mode)]
    float_mode: Option<FloatMode>,
}

impl From<SampleFlags> for Overrides {
    fn from(flags: SampleFlags) -> Self {
        Self {
            seed: flags.seed,
            kind: flags.kind,
            count: flags.count,
            float_mode: flags.float_mode,
        }
    }
}

fn parse_u64(raw: &str) -> Result<u64, String> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => raw.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid u64 `{raw}`: {e}"))
}

fn parse_float_mode(raw: &str) -> Result<FloatMode, String> {
    match raw.to_ascii_lowercase().as_str() {
        "unit" => Ok(FloatMode::Unit),
        "integral" => Ok(FloatMode::Integral),
        other => Err(format!("unknown float mode `{other}` (expected unit|integral)")),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_store(config_dir: Option<PathBuf>) -> Result<FsConfigStore> {
    match config_dir {
        Some(dir) => Ok(FsConfigStore::at(&dir)),
        None => FsConfigStore::new().context("resolving config directory"),
    }
}

fn load_profile(service: &ConfigService<FsConfigStore>) -> Result<SamplingProfile> {
    let profile = service
        .load::<SamplingProfile>(PROFILE_KEY)
        .context("loading sampling profile")?
        .unwrap_or_default();
    Ok(profile)
}

fn run_sample(
    config_dir: Option<PathBuf>,
    flags: SampleFlags,
    no_profile: bool,
    out: &mut impl Write,
) -> Result<()> {
    let profile = if no_profile {
        SamplingProfile::default()
    } else {
        match open_store(config_dir) {
            Ok(store) => load_profile(&ConfigService::new(store))?,
            Err(err) => {
                warn!("no profile store available, using defaults: {err:#}");
                SamplingProfile::default()
            }
        }
    };
    let plan = profile.resolve(flags.into());
    debug!(?plan, "resolved sampling plan");

    let mut rng = sample::generator_for(&plan);
    info!(
        seed = rng.seed(),
        kind = ?plan.kind,
        count = plan.count,
        float_mode = %plan.float_mode,
        "sampling"
    );
    sample::write_samples(&mut rng, &plan, out).context("writing samples")
}

fn run_profile(
    config_dir: Option<PathBuf>,
    action: ProfileAction,
    out: &mut impl Write,
) -> Result<()> {
    let store = open_store(config_dir)?;
    let location = store.base().display().to_string();
    let service = ConfigService::new(store);
    let mut profile = load_profile(&service)?;

    if let ProfileAction::Set { flags, clear_seed } = action {
        profile.apply(flags.into(), clear_seed);
        service
            .save(PROFILE_KEY, &profile)
            .with_context(|| format!("saving sampling profile under {location}"))?;
        info!(%location, "sampling profile saved");
    }

    let json = serde_json::to_string_pretty(&profile).context("encoding profile")?;
    writeln!(out, "{json}")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.cmd {
        Command::Sample { flags, no_profile } => {
            run_sample(cli.config_dir, flags, no_profile, &mut out)?;
        }
        Command::Seed => {
            writeln!(out, "{}", generate_seed())?;
        }
        Command::Remap {
            value,
            old_min,
            old_max,
            new_min,
            new_max,
        } => {
            let mapped = remap(value, old_min, old_max, new_min, new_max)
                .with_context(|| format!("remapping {value}"))?;
            writeln!(out, "{mapped}")?;
        }
        Command::Profile { action } => {
            run_profile(cli.config_dir, action, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
