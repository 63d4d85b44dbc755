use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::payload::truthy_field;

/// A validated interview request. `audio_data` is opaque; `duration` is carried but unused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewRequest {
    pub audio_data: Value,
    pub duration: Option<f64>,
}

impl InterviewRequest {
    /// Fails with `MISSING_AUDIO` when `audio_data` is absent or falsy.
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        let audio_data = truthy_field(body, "audio_data").ok_or_else(AppError::missing_audio)?;
        Ok(Self {
            audio_data: audio_data.clone(),
            duration: body.get("duration").and_then(Value::as_f64),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// A timestamped, categorized moment from the recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalkingPoint {
    pub timestamp: String, // "m:ss"
    pub category: String,
    pub text: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordUsage {
    pub keyword: String,
    pub count: u32,
    pub relevance: f64, // 0.0 – 1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewAnalysisResponse {
    pub overall_score: u32,
    pub communication_score: u32,
    pub technical_accuracy: u32,
    pub confidence_level: u32,
    pub clarity_score: u32,
    pub talking_points: Vec<TalkingPoint>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keyword_analysis: Vec<KeywordUsage>,
}

/// Success envelope: `{success: true, data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewEnvelope {
    pub success: bool,
    pub data: InterviewAnalysisResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_audio_present() {
        let req = InterviewRequest::from_body(&json!({"audio_data": "UklGRg==", "duration": 95}))
            .unwrap();
        assert_eq!(req.audio_data, json!("UklGRg=="));
        assert_eq!(req.duration, Some(95.0));
    }

    #[test]
    fn test_duration_is_optional() {
        let req = InterviewRequest::from_body(&json!({"audio_data": [1, 2, 3]})).unwrap();
        assert!(req.duration.is_none());
    }

    #[test]
    fn test_non_numeric_duration_ignored() {
        let req =
            InterviewRequest::from_body(&json!({"audio_data": "x", "duration": "long"})).unwrap();
        assert!(req.duration.is_none());
    }

    #[test]
    fn test_missing_audio() {
        let err = InterviewRequest::from_body(&json!({"duration": 30})).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingAudio);
    }

    #[test]
    fn test_empty_audio_rejected() {
        let err = InterviewRequest::from_body(&json!({"audio_data": ""})).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingAudio);
    }
}
