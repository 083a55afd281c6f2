//! Faults raised by the risk evaluator.
//!
//! An `Invalid` verdict (sampled too early) is not an error; it is returned as
//! a normal [`RiskVerdict`](crate::risk::RiskVerdict). Everything here means
//! the caller sent something the evaluator cannot reason about.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    #[error("{field} is not a valid HH:MM time: {value:?}")]
    MalformedTime { field: &'static str, value: String },

    #[error("{0} is required for acute ingestion")]
    MissingField(&'static str),

    #[error("{earlier} ({earlier_value}) must not be after {later} ({later_value})")]
    OutOfOrder {
        earlier: &'static str,
        earlier_value: String,
        later: &'static str,
        later_value: String,
    },

    #[error("level must be a finite, non-negative number (got {0})")]
    InvalidLevel(f64),
}

pub type RiskResult<T> = Result<T, RiskError>;
