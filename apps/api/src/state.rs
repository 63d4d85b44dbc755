use std::sync::Arc;

use crate::analysis::analyzer::{MockResumeAnalyzer, ResumeAnalyzer};
use crate::config::Config;
use crate::interview::analyzer::{InterviewAnalyzer, MockInterviewAnalyzer};

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; requests never write to it.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable resume analyzer. Default: MockResumeAnalyzer.
    pub resume_analyzer: Arc<dyn ResumeAnalyzer>,
    /// Pluggable interview analyzer. Default: MockInterviewAnalyzer.
    pub interview_analyzer: Arc<dyn InterviewAnalyzer>,
}

impl AppState {
    /// State backed by the mock analyzers, paced per `config`.
    pub fn with_mock_analyzers(config: Config) -> Self {
        let resume_analyzer = Arc::new(MockResumeAnalyzer::new(config.processing_step_delay()));
        let interview_analyzer =
            Arc::new(MockInterviewAnalyzer::new(config.interview_analysis_delay()));
        Self {
            config,
            resume_analyzer,
            interview_analyzer,
        }
    }
}
