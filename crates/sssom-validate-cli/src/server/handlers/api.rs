//! JSON API handlers.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Deserialize;
use sssom_validate::ValidationReport;

use super::run_pipeline;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Body of a validation request. The URL wins when both are given.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Validate a mapping set and return the full report.
pub async fn api_validate(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidationReport>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let report = run_pipeline(&state, request.text, request.url).await?;
    Ok(Json(report))
}

/// Liveness check.
pub async fn health() -> &'static str {
    "ok"
}
