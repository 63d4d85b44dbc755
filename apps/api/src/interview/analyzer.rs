//! Interview analyzer — backend behind `POST /api/v1/interview`.
//!
//! Same seam as the resume analyzer: `AppState` carries an
//! `Arc<dyn InterviewAnalyzer>`, and the default mock returns canned feedback.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::interview::models::{
    InterviewAnalysisResponse, InterviewRequest, KeywordUsage, Sentiment, TalkingPoint,
};

#[async_trait]
pub trait InterviewAnalyzer: Send + Sync {
    async fn analyze(&self, request: &InterviewRequest) -> Result<InterviewAnalysisResponse>;

    fn backend(&self) -> &'static str;
}

/// Returns [`fixed_interview_analysis`] after an optional delay.
#[derive(Debug, Clone, Default)]
pub struct MockInterviewAnalyzer {
    delay: Duration,
}

impl MockInterviewAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl InterviewAnalyzer for MockInterviewAnalyzer {
    async fn analyze(&self, request: &InterviewRequest) -> Result<InterviewAnalysisResponse> {
        tracing::debug!(duration = ?request.duration, "Running mock interview analysis");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(fixed_interview_analysis())
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}

pub fn fixed_interview_analysis() -> InterviewAnalysisResponse {
    InterviewAnalysisResponse {
        overall_score: 82,
        communication_score: 85,
        technical_accuracy: 78,
        confidence_level: 88,
        clarity_score: 80,
        talking_points: vec![
            TalkingPoint {
                timestamp: "0:45".to_string(),
                category: "Introduction".to_string(),
                text: "Started with clear self-introduction and relevant experience".to_string(),
                sentiment: Sentiment::Positive,
            },
            TalkingPoint {
                timestamp: "2:15".to_string(),
                category: "Technical".to_string(),
                text: "Explained React hooks with good examples".to_string(),
                sentiment: Sentiment::Positive,
            },
        ],
        strengths: vec![
            "Clear and structured responses using frameworks".to_string(),
            "Good technical depth in areas of expertise".to_string(),
            "Confident body language and tone".to_string(),
        ],
        improvements: vec![
            "Reduce filler words - appeared 12 times".to_string(),
            "Take brief pauses before complex answers".to_string(),
            "Provide more concrete numbers when discussing achievements".to_string(),
        ],
        keyword_analysis: vec![
            keyword("React", 8, 0.95),
            keyword("TypeScript", 5, 0.88),
            keyword("Team collaboration", 6, 0.82),
        ],
    }
}

fn keyword(keyword: &str, count: u32, relevance: f64) -> KeywordUsage {
    KeywordUsage {
        keyword: keyword.to_string(),
        count,
        relevance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::time::Instant;

    #[test]
    fn test_overall_score_in_range() {
        let a = fixed_interview_analysis();
        assert_eq!(a.overall_score, 82);
        assert!(a.overall_score <= 100);
    }

    #[test]
    fn test_keyword_relevance_in_unit_range() {
        let a = fixed_interview_analysis();
        assert!(a
            .keyword_analysis
            .iter()
            .all(|k| (0.0..=1.0).contains(&k.relevance)));
    }

    #[test]
    fn test_talking_points_use_minute_second_timestamps() {
        let a = fixed_interview_analysis();
        let stamps: Vec<&str> = a.talking_points.iter().map(|t| t.timestamp.as_str()).collect();
        assert_eq!(stamps, vec!["0:45", "2:15"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_delay_is_applied() {
        let analyzer = MockInterviewAnalyzer::new(Duration::from_secs(3));
        let request = InterviewRequest {
            audio_data: json!("blob"),
            duration: None,
        };
        let start = Instant::now();
        let result = analyzer.analyze(&request).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(3));
        assert_eq!(result, fixed_interview_analysis());
    }
}
