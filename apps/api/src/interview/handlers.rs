use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};

use crate::errors::AppError;
use crate::interview::models::{InterviewEnvelope, InterviewRequest};
use crate::payload::decode_body;
use crate::state::AppState;

/// POST /api/v1/interview
///
/// Requires a truthy `audio_data`. Every other failure is reported as `ANALYSIS_FAILED`.
pub async fn handle_interview(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<InterviewEnvelope>, AppError> {
    let body = body
        .context("failed to read request body")
        .map_err(AppError::AnalysisFailed)?;
    let value = decode_body(&body).map_err(AppError::AnalysisFailed)?;
    let request = InterviewRequest::from_body(&value)?;

    let data = state
        .interview_analyzer
        .analyze(&request)
        .await
        .map_err(AppError::AnalysisFailed)?;
    tracing::info!(
        backend = state.interview_analyzer.backend(),
        overall_score = data.overall_score,
        "Interview analysis complete"
    );

    Ok(Json(InterviewEnvelope {
        success: true,
        data,
    }))
}
