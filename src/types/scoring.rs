use crate::error::{Result, RiskError};
use serde::{Deserialize, Serialize};

pub type Score = f64;

pub const DEFAULT_LOW: Score = 0.0;
pub const DEFAULT_HIGH: Score = 90.0;

/// Closed interval `[low, high]` every observation and aggregate must lie in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBounds {
    pub low: Score,
    pub high: Score,
}

impl ScoreBounds {
    pub const DEFAULT: ScoreBounds = ScoreBounds {
        low: DEFAULT_LOW,
        high: DEFAULT_HIGH,
    };

    pub fn new(low: Score, high: Score) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(RiskError::InvalidBounds(format!(
                "bounds must be finite (found [{low}, {high}])"
            )));
        }
        if low > high {
            return Err(RiskError::InvalidBounds(format!(
                "low must not exceed high (found [{low}, {high}])"
            )));
        }
        Ok(Self { low, high })
    }

    pub fn contains(&self, value: Score) -> bool {
        (self.low..=self.high).contains(&value)
    }

    pub fn clamp(&self, value: Score) -> Score {
        value.clamp(self.low, self.high)
    }
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A weighted collection of bounded observations, e.g. one department's threat scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub size: u32,
    #[serde(default)]
    pub observations: Vec<Score>,
}

impl Group {
    pub fn new(size: u32, observations: Vec<Score>) -> Self {
        Self { size, observations }
    }

    /// `size` members all reporting the same score.
    pub fn uniform(size: u32, score: Score) -> Self {
        Self::new(size, vec![score; size as usize])
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// A pre-computed group average paired with the group's size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupMean {
    pub mean: Score,
    pub size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_zero_to_ninety() {
        let bounds = ScoreBounds::default();
        assert_eq!(bounds.low, 0.0);
        assert_eq!(bounds.high, 90.0);
    }

    #[test]
    fn bounds_reject_inverted_interval() {
        let result = ScoreBounds::new(10.0, 5.0);
        assert!(matches!(result, Err(RiskError::InvalidBounds(_))));
    }

    #[test]
    fn bounds_reject_non_finite_ends() {
        assert!(ScoreBounds::new(f64::NAN, 1.0).is_err());
        assert!(ScoreBounds::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn bounds_allow_degenerate_interval() {
        let bounds = ScoreBounds::new(5.0, 5.0).expect("point interval should be valid");
        assert!(bounds.contains(5.0));
        assert_eq!(bounds.clamp(7.0), 5.0);
    }

    #[test]
    fn group_deserializes_without_observations() {
        let group: Group = serde_json::from_str(r#"{"size": 4}"#).expect("group should parse");
        assert_eq!(group.size, 4);
        assert!(group.is_empty());
    }

    #[test]
    fn group_rejects_negative_size() {
        let result = serde_json::from_str::<Group>(r#"{"size": -1, "observations": []}"#);
        assert!(result.is_err());
    }
}
