//! CLI entry-point for tabulating the treatment line.

use anyhow::{ensure, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    risk::{treatment_line, LevelUnit},
};

/// Args for the `curve` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// First hour to print.
    #[arg(long, default_value_t = 4.0)]
    pub from: f64,
    /// Last hour to print.
    #[arg(long, default_value_t = 24.0)]
    pub to: f64,
    /// Hours between rows.
    #[arg(long, default_value_t = 2.0)]
    pub step: f64,
    /// Override the configured unit (umol or mcg).
    #[arg(long)]
    pub unit: Option<LevelUnit>,
}

/// Upper bound on printed rows.
const MAX_ROWS: usize = 1000;

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let points = sample_points(args.from, args.to, args.step)?;
    let profile = args.unit.unwrap_or(settings.level_unit).profile();
    info!(?profile, "tabulating treatment line");

    println!("hours\tthreshold ({})", profile.unit);
    for hours in points {
        println!("{hours:.1}\t{:.1}", treatment_line(hours, profile));
    }
    Ok(())
}

fn sample_points(from: f64, to: f64, step: f64) -> Result<impl Iterator<Item = f64>> {
    ensure!(
        from.is_finite() && to.is_finite() && step.is_finite(),
        "--from, --to and --step must be finite"
    );
    ensure!(step > 0.0, "--step must be positive");
    ensure!(to >= from, "--to must not be before --from");

    let rows = ((to - from) / step).floor();
    ensure!(
        rows < MAX_ROWS as f64,
        "range would print {} rows; the limit is {MAX_ROWS}",
        rows + 1.0
    );
    Ok((0..=rows as usize).map(move |i| from + step * i as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_points_include_both_ends() {
        let points = |from, to, step| sample_points(from, to, step).unwrap().collect::<Vec<_>>();
        assert_eq!(points(4.0, 8.0, 2.0), vec![4.0, 6.0, 8.0]);
        assert_eq!(points(4.0, 9.0, 2.0), vec![4.0, 6.0, 8.0]);
        assert_eq!(points(4.0, 4.0, 1.0), vec![4.0]);
    }

    #[test]
    fn unbounded_ranges_are_rejected() {
        assert!(sample_points(4.0, f64::INFINITY, 1.0).is_err());
        assert!(sample_points(f64::NEG_INFINITY, 4.0, 1.0).is_err());
        assert!(sample_points(4.0, 8.0, f64::NAN).is_err());
        assert!(sample_points(4.0, 1e15, 1.0).is_err());
        assert!(sample_points(4.0, 8.0, 0.0).is_err());
        assert!(sample_points(8.0, 4.0, 1.0).is_err());
    }

    #[test]
    fn row_limit_is_inclusive() {
        assert_eq!(sample_points(0.0, 999.0, 1.0).unwrap().count(), MAX_ROWS);
        assert!(sample_points(0.0, 1000.0, 1.0).is_err());
    }
}
