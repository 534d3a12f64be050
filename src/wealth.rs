use crate::types::config::WealthPolicy;
use crate::types::report::ThreatEntry;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WealthRecord {
    pub name: String,
    pub final_worth: f64,
}

/// `final_worth / divisor`, multiplied once more above the surge threshold.
pub fn threat_score(final_worth: f64, policy: &WealthPolicy) -> f64 {
    let score = final_worth / policy.divisor;
    if final_worth > policy.surge_threshold {
        score * policy.surge_multiplier
    } else {
        score
    }
}

/// Scores the `top` wealthiest records, richest first.
pub fn rank_threats(
    records: &[WealthRecord],
    policy: &WealthPolicy,
    top: usize,
) -> Vec<ThreatEntry> {
    let mut ranked = records.iter().collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.final_worth.total_cmp(&a.final_worth));
    ranked
        .into_iter()
        .take(top)
        .map(|record| ThreatEntry {
            name: record.name.clone(),
            final_worth: record.final_worth,
            threat_score: threat_score(record.final_worth, policy),
        })
        .collect()
}
