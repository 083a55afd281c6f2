//! Paracetamol overdose risk assessment against the Rumack-Matthew nomogram.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod risk;

pub use error::{RiskError, RiskResult};
pub use risk::{evaluate, evaluate_default, ClinicalInput, IngestionType, Risk, RiskVerdict};
