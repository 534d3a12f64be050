//! Size-weighted roll-up of per-group observations into one bounded score.

pub mod means;
pub mod validate;

use crate::types::report::AggregateSummary;
use crate::types::scoring::{Group, Score, ScoreBounds};

pub use means::aggregate_means;
pub use validate::validate_groups;

/// Arithmetic mean of a group's observations, `None` when it has none.
///
/// A `None` group is left out of both the weighted sum and the weight total;
/// it is never counted as an average of zero.
pub fn group_average(group: &Group) -> Option<Score> {
    mean(&group.observations)
}

pub(crate) fn mean(values: &[Score]) -> Option<Score> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<Score>() / values.len() as Score)
}

/// Weighted mean of group averages, weighted by group size and clamped into `bounds`.
///
/// Returns `bounds.low` when no group carries both observations and a positive size.
/// Observations are assumed to already lie within `bounds`; see [`validate_groups`].
pub fn aggregate(groups: &[Group], bounds: ScoreBounds) -> Score {
    summarize(groups, bounds).score
}

pub fn aggregate_default(groups: &[Group]) -> Score {
    aggregate(groups, ScoreBounds::DEFAULT)
}

pub fn summarize(groups: &[Group], bounds: ScoreBounds) -> AggregateSummary {
    let mut weighted_sum: Score = 0.0;
    let mut total_weight: u64 = 0;
    let mut contributing_groups = 0;

    let group_averages = groups
        .iter()
        .map(|group| {
            let average = group_average(group);
            if let Some(average) = average {
                weighted_sum += average * Score::from(group.size);
                total_weight += u64::from(group.size);
                contributing_groups += 1;
            }
            average
        })
        .collect::<Vec<_>>();

    let score = if total_weight == 0 {
        bounds.low
    } else {
        bounds.clamp(weighted_sum / total_weight as Score)
    };

    AggregateSummary {
        score,
        bounds,
        total_weight,
        contributing_groups,
        skipped_groups: groups.len() - contributing_groups,
        group_averages,
    }
}
