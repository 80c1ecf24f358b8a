//! LootLab CLI — compute, roll, and validate commands.
//!
//! Commands:
//! - `compute` — probability report for a table: per-entry single-draw
//!   probability, at-least-once chance over N draws, expected count, and
//!   the binomial outcome distribution
//! - `roll` — draw concrete loot with a (optionally seeded) weighted roll
//! - `validate` — schema and homogeneity check for a table file

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lootlab_core::{roll_loot, Entry, LootTable, SamplingMode, TableReport};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod output;
mod presets;

use output::Rounding;

#[derive(Parser)]
#[command(name = "lootlab", about = "LootLab CLI — loot-table probability calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the probability report for a loot table.
    Compute {
        /// Path to a JSON table file (a list of entries).
        #[arg(long)]
        table: Option<PathBuf>,

        /// Built-in preset: generic, d100.
        #[arg(long)]
        preset: Option<String>,

        /// Number of draws.
        #[arg(long, default_value_t = 3)]
        draws: u32,

        /// Sampling mode: with, without.
        #[arg(long, default_value = "with")]
        mode: SamplingMode,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Render probabilities as percentages instead of decimals.
        #[arg(long, default_value_t = false)]
        percent: bool,

        /// Write the output to a file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Roll concrete loot from a table.
    Roll {
        /// Path to a JSON table file (a list of entries).
        #[arg(long)]
        table: Option<PathBuf>,

        /// Built-in preset: generic, d100.
        #[arg(long)]
        preset: Option<String>,

        /// Number of draws.
        #[arg(long, default_value_t = 3)]
        draws: u32,

        /// Sampling mode: with, without.
        #[arg(long, default_value = "with")]
        mode: SamplingMode,

        /// RNG seed for reproducible rolls. Unseeded rolls use OS entropy.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Validate a table file without computing anything.
    Validate {
        /// Path to a JSON table file (a list of entries).
        table: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            table,
            preset,
            draws,
            mode,
            format,
            percent,
            output,
        } => run_compute(table, preset, draws, mode, format, percent, output),
        Commands::Roll {
            table,
            preset,
            draws,
            mode,
            seed,
        } => run_roll(table, preset, draws, mode, seed),
        Commands::Validate { table } => run_validate(&table),
    }
}

/// Load entries from exactly one source: a file or a named preset.
fn load_table(path: Option<&Path>, preset: Option<&str>) -> Result<LootTable> {
    let json = match (path, preset) {
        (Some(_), Some(_)) => bail!("--table and --preset are mutually exclusive"),
        (Some(path), None) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read table file {}", path.display()))?,
        (None, Some(name)) => presets::get(name)
            .with_context(|| {
                format!(
                    "unknown preset {name:?} (available: {})",
                    presets::NAMES.join(", ")
                )
            })?
            .to_string(),
        (None, None) => bail!("either --table or --preset is required"),
    };

    serde_json::from_str(&json).context("invalid loot table")
}

fn run_compute(
    table_path: Option<PathBuf>,
    preset: Option<String>,
    draws: u32,
    mode: SamplingMode,
    format: Format,
    percent: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let table = load_table(table_path.as_deref(), preset.as_deref())?;
    let report = TableReport::compute(&table, draws, mode)
        .context("probability computation failed")?;

    let rounding = if percent {
        Rounding::Percent
    } else {
        Rounding::Decimal
    };
    let rendered = match format {
        Format::Table => output::render_table(&table, &report, rounding),
        Format::Json => output::export_json(&report)?,
        Format::Csv => output::export_csv(&report)?,
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote report to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn run_roll(
    table_path: Option<PathBuf>,
    preset: Option<String>,
    draws: u32,
    mode: SamplingMode,
    seed: Option<u64>,
) -> Result<()> {
    let table = load_table(table_path.as_deref(), preset.as_deref())?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let loot = roll_loot(&table, draws, mode, &mut rng).context("roll failed")?;

    if loot.is_empty() {
        println!("No loot.");
    } else {
        for name in &loot {
            println!("{name}");
        }
    }
    Ok(())
}

fn run_validate(path: &Path) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read table file {}", path.display()))?;
    let entries: Vec<Entry> =
        serde_json::from_str(&json).context("table file is not a JSON list of entries")?;
    let count = entries.len();
    let table = LootTable::new(entries)?;

    match table.mode() {
        Some(mode) => println!("OK: {count} {mode:?} entries."),
        None => println!("OK: empty table."),
    }
    Ok(())
}
