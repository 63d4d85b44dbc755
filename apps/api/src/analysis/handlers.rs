//! Axum route handler for the Analysis API.

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::analysis::models::AnalysisRequest;
use crate::errors::AppError;
use crate::payload::decode_body;
use crate::state::AppState;

pub const API_VERSION_HEADER: &str = "x-api-version";
pub const API_VERSION: &str = "v1";

/// POST /api/v1/analyze
///
/// Validates `resume_text` and `job_description`, then returns the analyzer's
/// payload tagged with `X-API-Version: v1`. Body read and decode failures are
/// internal errors, not validation errors.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let body = body.context("failed to read request body")?;
    let value = decode_body(&body)?;
    let request = AnalysisRequest::from_body(&value)?;

    let analysis = state.resume_analyzer.analyze(&request).await?;
    tracing::info!(
        backend = state.resume_analyzer.backend(),
        ats_score = analysis.ats_score,
        "Analysis complete"
    );

    Ok(([(API_VERSION_HEADER, API_VERSION)], Json(analysis)).into_response())
}
