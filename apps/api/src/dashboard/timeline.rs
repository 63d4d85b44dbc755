//! Processing timeline: the fixed, linear sequence of analysis stages shown
//! while a resume is being analyzed.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    StructuredExtraction,
    EmbeddingComputation,
    ReasoningEngine,
    OptimizationAgent,
}

impl AnalysisStage {
    pub const ALL: [AnalysisStage; 4] = [
        AnalysisStage::StructuredExtraction,
        AnalysisStage::EmbeddingComputation,
        AnalysisStage::ReasoningEngine,
        AnalysisStage::OptimizationAgent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnalysisStage::StructuredExtraction => "Structured Extraction",
            AnalysisStage::EmbeddingComputation => "Embedding Computation",
            AnalysisStage::ReasoningEngine => "Reasoning Engine",
            AnalysisStage::OptimizationAgent => "Optimization Agent",
        }
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Complete,
    Current,
    Pending,
}

/// Progress through [`AnalysisStage::ALL`]. `current_step == 4` means every stage is complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingTimeline {
    current_step: usize,
}

impl ProcessingTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current_stage(&self) -> Option<AnalysisStage> {
        AnalysisStage::ALL.get(self.current_step).copied()
    }

    pub fn status(&self, index: usize) -> StageStatus {
        if index < self.current_step {
            StageStatus::Complete
        } else if index == self.current_step {
            StageStatus::Current
        } else {
            StageStatus::Pending
        }
    }

    /// Moves to the next stage, saturating once every stage is complete.
    pub fn advance(self) -> Self {
        Self {
            current_step: (self.current_step + 1).min(AnalysisStage::ALL.len()),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current_step >= AnalysisStage::ALL.len()
    }

    pub fn stages(&self) -> impl Iterator<Item = (AnalysisStage, StageStatus)> + '_ {
        AnalysisStage::ALL
            .iter()
            .enumerate()
            .map(move |(i, stage)| (*stage, self.status(i)))
    }
}

/// Walks every stage in order, reporting each as current and then waiting `delay`.
/// There is no cancellation and no error path; the returned timeline is finished.
pub async fn simulate<F>(delay: Duration, mut on_step: F) -> ProcessingTimeline
where
    F: FnMut(&ProcessingTimeline, AnalysisStage),
{
    let mut timeline = ProcessingTimeline::new();
    while let Some(stage) = timeline.current_stage() {
        on_step(&timeline, stage);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        timeline = timeline.advance();
    }
    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_initial_status() {
        let t = ProcessingTimeline::new();
        assert_eq!(t.status(0), StageStatus::Current);
        assert_eq!(t.status(1), StageStatus::Pending);
        assert_eq!(t.current_stage(), Some(AnalysisStage::StructuredExtraction));
    }

    #[test]
    fn test_advance_marks_previous_complete() {
        let t = ProcessingTimeline::new().advance().advance();
        assert_eq!(t.status(0), StageStatus::Complete);
        assert_eq!(t.status(1), StageStatus::Complete);
        assert_eq!(t.status(2), StageStatus::Current);
        assert_eq!(t.status(3), StageStatus::Pending);
    }

    #[test]
    fn test_advance_saturates() {
        let mut t = ProcessingTimeline::new();
        for _ in 0..10 {
            t = t.advance();
        }
        assert_eq!(t.current_step(), 4);
        assert!(t.is_finished());
        assert!(t.current_stage().is_none());
        assert!(t.stages().all(|(_, s)| s == StageStatus::Complete));
    }

    #[test]
    fn test_labels_in_order() {
        let labels: Vec<&str> = AnalysisStage::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Structured Extraction",
                "Embedding Computation",
                "Reasoning Engine",
                "Optimization Agent"
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulate_waits_per_stage() {
        let start = Instant::now();
        let mut seen = Vec::new();
        let timeline = simulate(Duration::from_millis(1500), |t, stage| {
            seen.push((t.current_step(), stage));
        })
        .await;

        assert!(timeline.is_finished());
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[3], (3, AnalysisStage::OptimizationAgent));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(6000), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(7500), "elapsed {elapsed:?}");
    }

    #[tokio::test]
    async fn test_simulate_zero_delay() {
        let mut count = 0;
        simulate(Duration::ZERO, |_, _| count += 1).await;
        assert_eq!(count, 4);
    }
}
