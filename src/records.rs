use crate::types::scoring::{Group, Score};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One scored member of a group, as produced by flat exports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub group_id: u32,
    pub score: Score,
}

pub fn group_mean(scores: &[Score]) -> Option<Score> {
    crate::aggregate::mean(scores)
}

/// Collects flat records into groups ordered by ascending `group_id`.
///
/// A group's size is taken from `sizes` when present there, otherwise it is the
/// number of records seen for that id.
pub fn group_records(
    records: &[ObservationRecord],
    sizes: Option<&HashMap<u32, u32>>,
) -> Vec<(u32, Group)> {
    let mut scores_by_group = BTreeMap::<u32, Vec<Score>>::new();
    for record in records {
        scores_by_group
            .entry(record.group_id)
            .or_default()
            .push(record.score);
    }

    scores_by_group
        .into_iter()
        .map(|(group_id, observations)| {
            let size = sizes
                .and_then(|sizes| sizes.get(&group_id).copied())
                .unwrap_or_else(|| u32::try_from(observations.len()).unwrap_or(u32::MAX));
            (group_id, Group::new(size, observations))
        })
        .collect()
}
