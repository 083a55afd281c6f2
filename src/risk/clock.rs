//! Time-of-day parsing for ingestion and sampling clocks.

use chrono::{NaiveTime, Timelike};

use crate::error::{RiskError, RiskResult};

/// Parse an "HH:MM" clock reading into minutes since midnight.
///
/// All clocks in a request are assumed to fall on the same calendar day.
pub fn minutes_since_midnight(field: &'static str, value: &str) -> RiskResult<u32> {
    let time = NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| {
        RiskError::MalformedTime {
            field,
            value: value.to_string(),
        }
    })?;
    Ok(time.num_seconds_from_midnight() / 60)
}

/// Hours elapsed between two minute-of-day readings. Negative when `to` is earlier.
pub fn hours_between(from: u32, to: u32) -> f64 {
    (f64::from(to) - f64::from(from)) / 60.0
}
