use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error codes carried in the `code` field of every error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingFields,
    MissingAudio,
    InternalError,
    AnalysisFailed,
}

/// Uniform error body: `{error, message, code}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    pub code: ErrorCode,
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// There are only two kinds: validation failures (4xx, specific code) and
/// internal failures (5xx, generic code chosen by the endpoint).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation { code: ErrorCode, message: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Interview analysis failed: {0}")]
    AnalysisFailed(anyhow::Error),
}

impl AppError {
    pub fn missing_fields() -> Self {
        AppError::Validation {
            code: ErrorCode::MissingFields,
            message: "Both resume_text and job_description are required".to_string(),
        }
    }

    pub fn missing_audio() -> Self {
        AppError::Validation {
            code: ErrorCode::MissingAudio,
            message: "audio_data is required".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal(_) | AppError::AnalysisFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::Internal(_) => ErrorCode::InternalError,
            AppError::AnalysisFailed(_) => ErrorCode::AnalysisFailed,
        }
    }

    /// Builds the client-facing body. Internal details never leak into `message`.
    pub fn to_body(&self) -> ApiError {
        let (error, message) = match self {
            AppError::Validation { message, .. } => ("Validation Error", message.clone()),
            AppError::Internal(_) => (
                "Internal Server Error",
                "An error occurred while processing your request".to_string(),
            ),
            AppError::AnalysisFailed(_) => (
                "Internal Server Error",
                "Failed to analyze interview".to_string(),
            ),
        };

        ApiError {
            error: error.to_string(),
            message,
            code: self.code(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation { code, message } => {
                tracing::debug!(?code, "Rejected request: {message}");
            }
            AppError::Internal(e) => tracing::error!("Analysis error: {e:?}"),
            AppError::AnalysisFailed(e) => tracing::error!("Interview analysis error: {e:?}"),
        }

        (self.status(), Json(self.to_body())).into_response()
    }
}
