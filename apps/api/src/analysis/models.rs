use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::payload::{field_text, truthy_field};

// ────────────────────────────────────────────────────────────────────────────
// Request
// ────────────────────────────────────────────────────────────────────────────

/// A validated analysis request. Both blobs are free-form; only presence is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description: String,
}

impl AnalysisRequest {
    /// Extracts the request from a decoded body.
    /// Fails with `MISSING_FIELDS` when either field is absent or falsy.
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        match (
            truthy_field(body, "resume_text"),
            truthy_field(body, "job_description"),
        ) {
            (Some(resume), Some(jd)) => Ok(Self {
                resume_text: field_text(resume),
                job_description: field_text(jd),
            }),
            _ => Err(AppError::missing_fields()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionReason {
    pub category: String,
    pub explanation: String,
    pub confidence_score: f64, // 0.0 – 1.0
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRecommendation {
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub roi_score: f64, // 0.0 – 1.0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChange {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteSuggestion {
    pub original: String,
    pub optimized: String,
    pub changes: Vec<TextChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpskillingSuggestion {
    pub category: String,
    pub items: Vec<String>,
}

/// Full analysis payload returned by `POST /api/v1/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub ats_score: u32,                  // 0 – 100
    pub semantic_alignment_score: u32,   // 0 – 100
    pub skill_gap_score: u32,            // 0 – 100
    pub experience_alignment_score: u32, // 0 – 100
    pub formatting_risk_score: u32,      // 0 – 100
    pub rejection_reasons: Vec<RejectionReason>,
    pub optimization_recommendations: Vec<OptimizationRecommendation>,
    pub resume_rewrite_suggestions: RewriteSuggestion,
    pub upskilling_suggestions: Vec<UpskillingSuggestion>,
}
