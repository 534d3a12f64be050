use crate::error::{Result, RiskError};
use crate::types::scoring::{Group, ScoreBounds};

/// Ingestion-boundary check; the aggregator itself never re-validates.
pub fn validate_groups(groups: &[Group], bounds: ScoreBounds) -> Result<()> {
    for (index, group) in groups.iter().enumerate() {
        if let Some(value) = group
            .observations
            .iter()
            .copied()
            .find(|value| !value.is_finite())
        {
            return Err(RiskError::InvalidGroup {
                index,
                reason: format!("observation is not finite: {value}"),
            });
        }
        if let Some(value) = group
            .observations
            .iter()
            .copied()
            .find(|value| !bounds.contains(*value))
        {
            return Err(RiskError::InvalidGroup {
                index,
                reason: format!(
                    "observation {value} outside [{}, {}]",
                    bounds.low, bounds.high
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_groups_within_bounds() {
        let groups = vec![Group::new(3, vec![0.0, 45.0, 90.0]), Group::new(0, vec![])];
        assert!(validate_groups(&groups, ScoreBounds::DEFAULT).is_ok());
    }

    #[test]
    fn reports_index_of_first_bad_group() {
        let groups = vec![
            Group::new(3, vec![10.0]),
            Group::new(3, vec![10.0, 91.0]),
            Group::new(3, vec![-1.0]),
        ];
        let err = validate_groups(&groups, ScoreBounds::DEFAULT).expect_err("should reject");
        match err {
            RiskError::InvalidGroup { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("91"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_nan_observation() {
        let groups = vec![Group::new(1, vec![f64::NAN])];
        let result = validate_groups(&groups, ScoreBounds::DEFAULT);
        assert!(matches!(result, Err(RiskError::InvalidGroup { index: 0, .. })));
    }

    #[test]
    fn respects_custom_bounds() {
        let bounds = ScoreBounds::new(0.0, 1.0).expect("bounds should be valid");
        let groups = vec![Group::new(2, vec![0.5, 2.0])];
        assert!(validate_groups(&groups, bounds).is_err());
    }
}
