//! HTTP route handlers for Axum.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::{
    api::types::{
        CallableErrorDetail, CallableErrorDto, CallableRequest, CallableResponse, ErrorDto,
        HealthDto,
    },
    risk::{self, ClinicalInput, RiskVerdict},
};

use super::AppState;

/// Fault on the plain JSON endpoint; always a server error with no clinical content.
#[derive(Debug)]
pub struct ApiError(String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto { error: self.0 }),
        )
            .into_response()
    }
}

/// Fault on the callable endpoint, wrapped in the callable error envelope.
#[derive(Debug)]
pub struct CallableError(String);

impl IntoResponse for CallableError {
    fn into_response(self) -> Response {
        let body = CallableErrorDto {
            error: CallableErrorDetail {
                status: "INTERNAL",
                message: self.0,
            },
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn health(State(state): State<AppState>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok",
        unit: state.settings.level_unit,
    })
}

pub async fn calculate(State(state): State<AppState>, body: Bytes) -> ApiResult<RiskVerdict> {
    let input: ClinicalInput = parse_body(&body).map_err(ApiError)?;
    run(&state, &input).map(Json).map_err(ApiError)
}

pub async fn calculate_callable(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CallableResponse>, CallableError> {
    let request: CallableRequest = parse_body(&body).map_err(CallableError)?;
    let result = run(&state, &request.data).map_err(CallableError)?;
    Ok(Json(CallableResponse { result }))
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, String> {
    serde_json::from_slice(body).map_err(|err| {
        warn!(%err, "rejecting unparseable request body");
        format!("invalid request body: {err}")
    })
}

fn run(state: &AppState, input: &ClinicalInput) -> Result<RiskVerdict, String> {
    risk::evaluate(input, state.settings.profile()).map_err(|err| {
        warn!(%err, "evaluation fault");
        err.to_string()
    })
}
