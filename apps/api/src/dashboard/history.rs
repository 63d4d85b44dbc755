use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Completed,
    Processing,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AnalysisStatus),
}

impl StatusFilter {
    fn accepts(self, status: AnalysisStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

/// Colour band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 70 {
            ScoreBand::Strong
        } else if score >= 40 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u32,
    pub job_title: String,
    pub company: String,
    pub score: u32,
    pub date: String,
    pub status: AnalysisStatus,
    pub trend: Trend,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisHistory {
    pub entries: Vec<HistoryEntry>,
}

impl AnalysisHistory {
    pub fn seeded() -> Self {
        let entry = |id: u32, job_title: &str, company: &str, score: u32, date: &str, trend: Trend| HistoryEntry {
            id,
            job_title: job_title.to_string(),
            company: company.to_string(),
            score,
            date: date.to_string(),
            status: AnalysisStatus::Completed,
            trend,
        };
        Self {
            entries: vec![
                entry(1, "Senior Software Engineer", "Tech Corp", 68, "2 days ago", Trend::Up),
                entry(2, "Full Stack Developer", "StartupXYZ", 82, "5 days ago", Trend::Up),
                entry(3, "Frontend Engineer", "Design Studio", 45, "1 week ago", Trend::Down),
                entry(4, "DevOps Engineer", "Cloud Services Inc", 73, "2 weeks ago", Trend::Neutral),
                entry(5, "Backend Developer", "Enterprise Solutions", 91, "3 weeks ago", Trend::Up),
            ],
        }
    }

    /// Case-insensitive match on job title or company, intersected with the status filter.
    pub fn filtered(&self, query: &str, status: StatusFilter) -> Vec<&HistoryEntry> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.job_title.to_lowercase().contains(&query)
                    || e.company.to_lowercase().contains(&query)
            })
            .filter(|e| status.accepts(e.status))
            .collect()
    }

    pub fn delete(mut self, id: u32) -> Self {
        self.entries.retain(|e| e.id != id);
        self
    }
}
