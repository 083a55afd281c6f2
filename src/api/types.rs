//! Shared DTOs for JSON requests and responses.

use serde::{Deserialize, Serialize};

use crate::risk::{ClinicalInput, LevelUnit, RiskVerdict};

/// Body returned for any fault on the plain JSON endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Callable-function request envelope: `{"data": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CallableRequest {
    pub data: ClinicalInput,
}

/// Callable-function success envelope: `{"result": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct CallableResponse {
    pub result: RiskVerdict,
}

/// Callable-function failure envelope.
#[derive(Debug, Clone, Serialize)]
pub struct CallableErrorDto {
    pub error: CallableErrorDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallableErrorDetail {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub unit: LevelUnit,
}
