//! Paracetamol toxicity risk classification.
//!
//! [`evaluate`] is pure: no I/O, no shared state, safe to call from any number
//! of request handlers at once.

pub mod clock;
pub mod nomogram;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RiskError, RiskResult};

pub use nomogram::{treatment_line, LevelUnit, ThresholdProfile, NOMOGRAM_START_HOURS};

/// Minimum hours between the latest dose and the sample for the nomogram to apply.
pub const MIN_SAMPLING_DELAY_HOURS: f64 = 4.0;

const NAC_ADVICE: &str = "Start NAC (N-acetylcysteine).";

/// How the paracetamol was taken. Anything other than `"chronic"` is treated as acute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum IngestionType {
    Acute,
    Chronic,
}

impl From<String> for IngestionType {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("chronic") {
            Self::Chronic
        } else {
            Self::Acute
        }
    }
}

/// Clinical details submitted for a single level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalInput {
    pub ingestion_type: IngestionType,
    /// Free-text dosing pattern; recorded by callers, not used here.
    #[serde(default)]
    pub ingestion_pattern: Option<String>,
    #[serde(default)]
    pub first_ingestion: Option<String>,
    #[serde(default)]
    pub latest_ingestion: Option<String>,
    pub sampling_time: String,
    pub level: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Risk {
    Low,
    High,
    /// Sample taken before the nomogram is valid; not a fault.
    Invalid,
}

/// Outcome of one evaluation. Every field is always serialised.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskVerdict {
    pub risk: Risk,
    pub message: String,
    pub treatment_threshold: Option<f64>,
    pub above_therapeutic: bool,
    pub hours_post_ingestion: Option<f64>,
    pub unit: LevelUnit,
}

/// Classify a level using the default micromolar profile.
pub fn evaluate_default(input: &ClinicalInput) -> RiskResult<RiskVerdict> {
    evaluate(input, &ThresholdProfile::default())
}

/// Classify a paracetamol level against the chronic threshold or the treatment line.
pub fn evaluate(input: &ClinicalInput, profile: &ThresholdProfile) -> RiskResult<RiskVerdict> {
    if !input.level.is_finite() || input.level < 0.0 {
        return Err(RiskError::InvalidLevel(input.level));
    }
    let sampling = clock::minutes_since_midnight("samplingTime", &input.sampling_time)?;

    let verdict = match input.ingestion_type {
        IngestionType::Chronic => chronic(input.level, profile),
        IngestionType::Acute => acute(input, sampling, profile)?,
    };
    debug!(
        ingestion = ?input.ingestion_type,
        risk = ?verdict.risk,
        hours = ?verdict.hours_post_ingestion,
        "evaluated paracetamol level"
    );
    Ok(verdict)
}

fn chronic(level: f64, profile: &ThresholdProfile) -> RiskVerdict {
    let above = level > profile.chronic_threshold;
    let message = if above {
        format!("Chronic ingestion with elevated level. {NAC_ADVICE}")
    } else {
        "Chronic ingestion with level within expected range. Toxicity unlikely.".to_string()
    };
    RiskVerdict {
        risk: if above { Risk::High } else { Risk::Low },
        message,
        treatment_threshold: None,
        above_therapeutic: above,
        hours_post_ingestion: None,
        unit: profile.unit,
    }
}

fn acute(
    input: &ClinicalInput,
    sampling: u32,
    profile: &ThresholdProfile,
) -> RiskResult<RiskVerdict> {
    let first_raw = required("firstIngestion", &input.first_ingestion)?;
    let latest_raw = required("latestIngestion", &input.latest_ingestion)?;
    let first = clock::minutes_since_midnight("firstIngestion", first_raw)?;
    let latest = clock::minutes_since_midnight("latestIngestion", latest_raw)?;

    // Same-day clocks only: a sample before a dose is a data-entry error.
    if first > latest {
        return Err(out_of_order(
            ("firstIngestion", first_raw),
            ("latestIngestion", latest_raw),
        ));
    }
    if latest > sampling {
        return Err(out_of_order(
            ("latestIngestion", latest_raw),
            ("samplingTime", input.sampling_time.as_str()),
        ));
    }

    let hours_since_latest = clock::hours_between(latest, sampling);
    if hours_since_latest < MIN_SAMPLING_DELAY_HOURS {
        return Ok(RiskVerdict {
            risk: Risk::Invalid,
            message: format!(
                "Sampling too early ({hours_since_latest:.1}h after latest dose). \
                 Wait until ≥4h post-ingestion."
            ),
            treatment_threshold: None,
            above_therapeutic: false,
            hours_post_ingestion: None,
            unit: profile.unit,
        });
    }

    let hours_since_first = clock::hours_between(first, sampling);
    let threshold = treatment_line(hours_since_first, profile);
    let above = input.level > threshold;
    let position = if above { "ABOVE" } else { "BELOW" };
    let advice = if above { NAC_ADVICE } else { "Toxicity unlikely." };

    Ok(RiskVerdict {
        risk: if above { Risk::High } else { Risk::Low },
        message: format!(
            "Level is {position} the Rumack-Matthew treatment line ({threshold:.1} {unit}) \
             at {hours_since_first:.1}h post-first-ingestion. {advice}",
            unit = profile.unit,
        ),
        treatment_threshold: Some(threshold),
        above_therapeutic: above,
        hours_post_ingestion: Some(hours_since_first),
        unit: profile.unit,
    })
}

fn required<'a>(field: &'static str, value: &'a Option<String>) -> RiskResult<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Ok(raw),
        _ => Err(RiskError::MissingField(field)),
    }
}

fn out_of_order(earlier: (&'static str, &str), later: (&'static str, &str)) -> RiskError {
    RiskError::OutOfOrder {
        earlier: earlier.0,
        earlier_value: earlier.1.to_string(),
        later: later.0,
        later_value: later.1.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acute_input(first: &str, latest: &str, sampling: &str, level: f64) -> ClinicalInput {
        ClinicalInput {
            ingestion_type: IngestionType::Acute,
            ingestion_pattern: None,
            first_ingestion: Some(first.into()),
            latest_ingestion: Some(latest.into()),
            sampling_time: sampling.into(),
            level,
        }
    }

    #[test]
    fn unknown_ingestion_type_takes_acute_path() {
        let parsed: IngestionType = serde_json::from_str("\"staggered\"").unwrap();
        assert_eq!(parsed, IngestionType::Acute);
        let parsed: IngestionType = serde_json::from_str("\"Chronic\"").unwrap();
        assert_eq!(parsed, IngestionType::Chronic);
    }

    #[test]
    fn missing_acute_clock_is_a_fault() {
        let mut input = acute_input("08:00", "08:00", "12:00", 10.0);
        input.latest_ingestion = None;
        assert_eq!(
            evaluate_default(&input),
            Err(RiskError::MissingField("latestIngestion"))
        );
        input.latest_ingestion = Some("  ".into());
        assert_eq!(
            evaluate_default(&input),
            Err(RiskError::MissingField("latestIngestion"))
        );
    }

    #[test]
    fn first_after_latest_is_rejected() {
        let input = acute_input("09:00", "08:00", "14:00", 10.0);
        let err = evaluate_default(&input).unwrap_err();
        assert!(matches!(err, RiskError::OutOfOrder { earlier: "firstIngestion", .. }));
    }

    #[test]
    fn sample_before_dose_is_rejected() {
        let input = acute_input("08:00", "08:00", "07:00", 10.0);
        let err = evaluate_default(&input).unwrap_err();
        assert!(matches!(err, RiskError::OutOfOrder { later: "samplingTime", .. }));
    }

    #[test]
    fn negative_or_nan_level_is_rejected() {
        for level in [-1.0, f64::NAN, f64::INFINITY] {
            let input = acute_input("08:00", "08:00", "12:00", level);
            assert!(matches!(evaluate_default(&input), Err(RiskError::InvalidLevel(_))));
        }
    }

    #[test]
    fn staggered_doses_use_first_dose_for_the_line() {
        let input = acute_input("06:00", "08:00", "14:00", 400.0);
        let verdict = evaluate_default(&input).unwrap();
        assert_eq!(verdict.hours_post_ingestion, Some(8.0));
        assert_eq!(verdict.treatment_threshold, Some(500.0));
        assert_eq!(verdict.risk, Risk::Low);
    }
}
