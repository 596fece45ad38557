use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

use crate::engine::{ProbeOutcome, ProbeStatus};

/// Complete record of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub username: String,
    pub summary: ReportSummary,
    /// Sorted by target name
    pub outcomes: Vec<ProbeOutcome>,
}

/// Report summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_targets: usize,
    pub status_counts: BTreeMap<ProbeStatus, usize>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_seconds: u64,
}

impl Report {
    /// Build a report from the outcomes of a finished run
    pub fn new(
        username: &str,
        mut outcomes: Vec<ProbeOutcome>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        outcomes.sort_by(|a, b| a.target_name.cmp(&b.target_name));

        let mut status_counts = BTreeMap::new();
        for outcome in &outcomes {
            *status_counts.entry(outcome.status).or_insert(0) += 1;
        }

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.to_string(),
            summary: ReportSummary {
                total_targets: outcomes.len(),
                status_counts,
                start_time,
                end_time,
                duration_seconds: (end_time - start_time).num_seconds().max(0) as u64,
            },
            outcomes,
        }
    }

    pub fn count(&self, status: ProbeStatus) -> usize {
        self.summary.status_counts.get(&status).copied().unwrap_or(0)
    }

    /// Outcomes where the account exists
    pub fn found(&self) -> impl Iterator<Item = &ProbeOutcome> {
        self.outcomes.iter().filter(|o| o.is_found())
    }
}
