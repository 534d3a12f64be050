use crate::types::scoring::{GroupMean, Score, ScoreBounds};

/// Size-weighted mean of already averaged groups, clamped into `bounds`.
///
/// Returns `bounds.low` when the sizes sum to zero.
pub fn aggregate_means(means: &[GroupMean], bounds: ScoreBounds) -> Score {
    let (weighted_sum, total_weight) = means.iter().fold((0.0, 0_u64), |(sum, weight), group| {
        (
            sum + group.mean * Score::from(group.size),
            weight + u64::from(group.size),
        )
    });

    if total_weight == 0 {
        return bounds.low;
    }
    bounds.clamp(weighted_sum / total_weight as Score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn means(pairs: &[(Score, u32)]) -> Vec<GroupMean> {
        pairs
            .iter()
            .map(|&(mean, size)| GroupMean { mean, size })
            .collect()
    }

    #[test]
    fn high_score_department_lifts_aggregate() {
        let input = means(&[(50.0, 50), (50.0, 50), (50.0, 50), (90.0, 100), (10.0, 20)]);
        let score = aggregate_means(&input, ScoreBounds::DEFAULT);
        assert!(score > 50.0, "got {score}");
    }

    #[test]
    fn high_variance_department_lifts_aggregate() {
        let input = means(&[(50.0, 100), (50.0, 100), (50.0, 100), (50.0, 100), (90.0, 100)]);
        assert_eq!(aggregate_means(&input, ScoreBounds::DEFAULT), 58.0);
    }

    #[test]
    fn uniform_department_scores() {
        let input = means(&[(50.0, 100); 5]);
        assert_eq!(aggregate_means(&input, ScoreBounds::DEFAULT), 50.0);
    }

    #[test]
    fn extreme_threat_department_dominates_by_size() {
        let input = means(&[(50.0, 100), (50.0, 100), (50.0, 100), (50.0, 100), (90.0, 500)]);
        let score = aggregate_means(&input, ScoreBounds::DEFAULT);
        assert!(score > 58.0 && score < 90.0, "got {score}");
    }

    #[test]
    fn zero_total_size_returns_floor() {
        let input = means(&[(70.0, 0), (20.0, 0)]);
        assert_eq!(aggregate_means(&input, ScoreBounds::DEFAULT), 0.0);
        assert_eq!(aggregate_means(&[], ScoreBounds::DEFAULT), 0.0);
    }

    #[test]
    fn out_of_bounds_means_are_clamped() {
        let input = means(&[(120.0, 3)]);
        assert_eq!(aggregate_means(&input, ScoreBounds::DEFAULT), 90.0);
    }
}
