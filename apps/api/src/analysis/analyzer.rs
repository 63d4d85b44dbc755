//! Resume analyzer — pluggable, trait-based backend behind `POST /api/v1/analyze`.
//!
//! Default: `MockResumeAnalyzer`, which returns one fixed payload for every
//! valid request. A real engine implements `ResumeAnalyzer` and is swapped in
//! at startup without touching the handler or the response contract.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::analysis::models::{
    AnalysisRequest, AnalysisResponse, ChangeKind, Impact, OptimizationRecommendation,
    RejectionReason, RewriteSuggestion, Severity, TextChange, UpskillingSuggestion,
};
use crate::dashboard::timeline;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse>;

    /// Short backend label for logs ("mock", ...).
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// MockResumeAnalyzer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Input-invariant analyzer. Walks the processing timeline stages (optionally
/// pacing them like the dashboard does) and returns [`fixed_analysis`].
#[derive(Debug, Clone, Default)]
pub struct MockResumeAnalyzer {
    step_delay: Duration,
}

impl MockResumeAnalyzer {
    pub fn new(step_delay: Duration) -> Self {
        Self { step_delay }
    }
}

#[async_trait]
impl ResumeAnalyzer for MockResumeAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        tracing::debug!(
            resume_len = request.resume_text.len(),
            jd_len = request.job_description.len(),
            "Running mock analysis"
        );

        timeline::simulate(self.step_delay, |t, stage| {
            tracing::debug!(step = t.current_step(), %stage, "Analysis stage");
        })
        .await;

        Ok(fixed_analysis())
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed payload
// ────────────────────────────────────────────────────────────────────────────

/// The placeholder analysis. Values are arbitrary and carry no scoring meaning.
pub fn fixed_analysis() -> AnalysisResponse {
    AnalysisResponse {
        ats_score: 68,
        semantic_alignment_score: 72,
        skill_gap_score: 58,
        experience_alignment_score: 75,
        formatting_risk_score: 85,
        rejection_reasons: vec![
            reason(
                "Skill Gap",
                "The resume lacks specific mention of required technologies like React, Node.js, and PostgreSQL that are critical for this role.",
                0.87,
                Severity::High,
            ),
            reason(
                "Experience Depth",
                "While you have relevant experience, the JD requires 5+ years in senior roles. Your resume emphasizes mid-level accomplishments.",
                0.72,
                Severity::Medium,
            ),
            reason(
                "Keyword Density",
                "Key terms from the JD appear infrequently. Terms like 'microservices', 'CI/CD', and 'cloud architecture' are underrepresented.",
                0.81,
                Severity::High,
            ),
            reason(
                "Seniority Misalignment",
                "The job requires leadership experience managing teams. Your resume focuses more on individual contributions.",
                0.65,
                Severity::Medium,
            ),
        ],
        optimization_recommendations: vec![
            recommendation(
                "Add Technology Stack Section",
                "Create a dedicated 'Technical Skills' section highlighting React, Node.js, PostgreSQL, AWS, and other required technologies.",
                Impact::High,
                0.92,
            ),
            recommendation(
                "Quantify Leadership Impact",
                "Add metrics showing team size managed, project outcomes, and strategic decisions made in previous roles.",
                Impact::High,
                0.88,
            ),
            recommendation(
                "Incorporate JD Keywords",
                "Naturally integrate missing keywords like 'microservices architecture', 'CI/CD pipelines', and 'cloud-native design'.",
                Impact::High,
                0.85,
            ),
            recommendation(
                "Reformat Summary Statement",
                "Lead with a senior-level summary emphasizing strategic contributions and team leadership.",
                Impact::Medium,
                0.73,
            ),
        ],
        resume_rewrite_suggestions: RewriteSuggestion {
            original: "Software Engineer with 4 years of experience building web applications. Proficient in JavaScript and databases.".to_string(),
            optimized: "Senior Software Engineer with 5+ years of experience architecting scalable microservices and leading cross-functional teams. Expert in React, Node.js, PostgreSQL, and AWS cloud infrastructure with proven track record of delivering mission-critical systems.".to_string(),
            changes: vec![
                change(ChangeKind::Added, "Senior"),
                change(ChangeKind::Added, "5+ years"),
                change(ChangeKind::Added, "architecting scalable microservices"),
                change(ChangeKind::Added, "leading cross-functional teams"),
                change(ChangeKind::Modified, "React, Node.js, PostgreSQL, and AWS"),
            ],
        },
        upskilling_suggestions: vec![
            upskilling(
                "Certifications",
                &[
                    "AWS Certified Solutions Architect",
                    "Kubernetes Administrator (CKA)",
                    "Certified Scrum Master (CSM)",
                ],
            ),
            upskilling(
                "Missing Technologies",
                &[
                    "Docker & Container Orchestration",
                    "GraphQL API Design",
                    "Redis Caching Strategies",
                ],
            ),
            upskilling(
                "Leadership Skills",
                &[
                    "Technical Team Management",
                    "Stakeholder Communication",
                    "System Design & Architecture",
                ],
            ),
        ],
    }
}

fn reason(category: &str, explanation: &str, confidence: f64, severity: Severity) -> RejectionReason {
    RejectionReason {
        category: category.to_string(),
        explanation: explanation.to_string(),
        confidence_score: confidence,
        severity,
    }
}

fn recommendation(title: &str, description: &str, impact: Impact, roi: f64) -> OptimizationRecommendation {
    OptimizationRecommendation {
        title: title.to_string(),
        description: description.to_string(),
        impact,
        roi_score: roi,
    }
}

fn change(kind: ChangeKind, text: &str) -> TextChange {
    TextChange {
        kind,
        text: text.to_string(),
    }
}

fn upskilling(category: &str, items: &[&str]) -> UpskillingSuggestion {
    UpskillingSuggestion {
        category: category.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
