//! Rumack-Matthew treatment line and the threshold profiles that parameterise it.

use std::{fmt, str::FromStr};

use serde::Serialize;

/// Earliest time (hours after first ingestion) at which the nomogram applies.
pub const NOMOGRAM_START_HOURS: f64 = 4.0;

/// Concentration unit a deployment reports levels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LevelUnit {
    #[serde(rename = "umol/L")]
    MicromolPerLitre,
    #[serde(rename = "mcg/mL")]
    MicrogramPerMillilitre,
}

impl LevelUnit {
    pub fn label(self) -> &'static str {
        match self {
            Self::MicromolPerLitre => "umol/L",
            Self::MicrogramPerMillilitre => "mcg/mL",
        }
    }

    /// Threshold profile matching this unit.
    pub fn profile(self) -> &'static ThresholdProfile {
        match self {
            Self::MicromolPerLitre => &ThresholdProfile::MICROMOLAR,
            Self::MicrogramPerMillilitre => &ThresholdProfile::MASS,
        }
    }
}

impl fmt::Display for LevelUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LevelUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "umol" | "umol/l" | "µmol/l" | "μmol/l" | "micromolar" => Ok(Self::MicromolPerLitre),
            "mcg" | "mcg/ml" | "ug/ml" | "mg/l" | "mass" => Ok(Self::MicrogramPerMillilitre),
            other => Err(format!("unknown level unit {other:?} (expected umol or mcg)")),
        }
    }
}

/// Named clinical constants for one unit system.
///
/// These numbers are taken verbatim from the deployed calculators and must be
/// signed off by a clinical toxicologist before any change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdProfile {
    pub unit: LevelUnit,
    /// Treatment line value at 4h after first ingestion.
    pub reference_concentration: f64,
    /// Hours for the treatment line to halve.
    pub decay_half_life_hours: f64,
    /// Fixed level above which chronic ingestion is treated.
    pub chronic_threshold: f64,
}

impl ThresholdProfile {
    pub const MICROMOLAR: ThresholdProfile = ThresholdProfile {
        unit: LevelUnit::MicromolPerLitre,
        reference_concentration: 1000.0,
        decay_half_life_hours: 4.0,
        chronic_threshold: 100.0,
    };

    pub const MASS: ThresholdProfile = ThresholdProfile {
        unit: LevelUnit::MicrogramPerMillilitre,
        reference_concentration: 150.0,
        decay_half_life_hours: 4.0,
        chronic_threshold: 10.0,
    };
}

impl Default for ThresholdProfile {
    fn default() -> Self {
        Self::MICROMOLAR
    }
}

/// Treatment line value `hours` after first ingestion.
///
/// Flat at the 4h value before the nomogram starts, then halves every
/// `decay_half_life_hours`.
pub fn treatment_line(hours: f64, profile: &ThresholdProfile) -> f64 {
    let t = hours.max(NOMOGRAM_START_HOURS);
    profile.reference_concentration
        * 2f64.powf(-(t - NOMOGRAM_START_HOURS) / profile.decay_half_life_hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchored_at_four_hours() {
        let profile = ThresholdProfile::MICROMOLAR;
        assert_eq!(treatment_line(4.0, &profile), 1000.0);
        assert_eq!(treatment_line(8.0, &profile), 500.0);
        assert_eq!(treatment_line(12.0, &profile), 250.0);
    }

    #[test]
    fn plateau_before_four_hours() {
        let profile = ThresholdProfile::MASS;
        assert_eq!(treatment_line(0.0, &profile), 150.0);
        assert_eq!(treatment_line(-3.0, &profile), 150.0);
        assert_eq!(treatment_line(3.99, &profile), 150.0);
    }

    #[test]
    fn unit_names_parse() {
        assert_eq!("umol".parse(), Ok(LevelUnit::MicromolPerLitre));
        assert_eq!("mcg/mL".parse(), Ok(LevelUnit::MicrogramPerMillilitre));
        assert!("grains".parse::<LevelUnit>().is_err());
    }
}
