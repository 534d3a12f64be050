use crate::types::scoring::{Score, ScoreBounds};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSummary {
    pub score: Score,
    pub bounds: ScoreBounds,
    pub total_weight: u64,
    pub contributing_groups: usize,
    pub skipped_groups: usize,
    /// One entry per input group; `None` where the group had no observations.
    pub group_averages: Vec<Option<Score>>,
}

impl AggregateSummary {
    pub fn has_signal(&self) -> bool {
        self.total_weight > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreatEntry {
    pub name: String,
    pub final_worth: f64,
    pub threat_score: f64,
}
