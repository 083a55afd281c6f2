//! CLI entry-point for a one-off risk evaluation.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    cli::IngestionArg,
    config::Settings,
    risk::{self, ClinicalInput, LevelUnit},
};

/// Args for the `evaluate` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Acute or chronic ingestion.
    #[arg(long = "type", value_enum, default_value = "acute")]
    pub ingestion_type: IngestionArg,
    /// Free-text dosing pattern; not used in the calculation.
    #[arg(long)]
    pub pattern: Option<String>,
    /// First ingestion clock time (HH:MM).
    #[arg(long)]
    pub first: Option<String>,
    /// Latest ingestion clock time (HH:MM).
    #[arg(long)]
    pub latest: Option<String>,
    /// Sampling clock time (HH:MM).
    #[arg(long)]
    pub sampling: String,
    /// Measured paracetamol level.
    #[arg(long)]
    pub level: f64,
    /// Override the configured unit (umol or mcg).
    #[arg(long)]
    pub unit: Option<LevelUnit>,
}

#[instrument(skip_all, fields(ingestion = ?args.ingestion_type))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let profile = args.unit.unwrap_or(settings.level_unit).profile();
    let input = ClinicalInput {
        ingestion_type: args.ingestion_type.into(),
        ingestion_pattern: args.pattern,
        // A lone --latest means a single dose.
        first_ingestion: args.first.or_else(|| args.latest.clone()),
        latest_ingestion: args.latest,
        sampling_time: args.sampling,
        level: args.level,
    };
    let verdict = risk::evaluate(&input, profile).context("evaluating level")?;
    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}
