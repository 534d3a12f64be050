use crate::error::{Result, RiskError};
use serde::Serialize;

pub const HOURS_PER_DAY: f64 = 24.0;

/// A position on the 24-hour cycle, `0 <= hours < 24`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct TimeOfDay(f64);

impl TimeOfDay {
    pub fn new(hours: f64) -> Result<Self> {
        // NaN fails both comparisons
        if (0.0..HOURS_PER_DAY).contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(RiskError::OutOfRange(hours))
        }
    }

    pub fn hours(self) -> f64 {
        self.0
    }

    pub fn to_point(self) -> CyclicPoint {
        let theta = std::f64::consts::TAU * self.0 / HOURS_PER_DAY;
        let (sin, cos) = theta.sin_cos();
        CyclicPoint { sin, cos }
    }

    pub fn distance_to(self, other: TimeOfDay) -> f64 {
        // sin^2 + cos^2 can land a few ulps under 1.0 for equal inputs
        if self == other {
            return 0.0;
        }
        self.to_point().hours_to(other.to_point())
    }
}

impl TryFrom<f64> for TimeOfDay {
    type Error = RiskError;

    fn try_from(hours: f64) -> Result<Self> {
        Self::new(hours)
    }
}

/// Unit-circle coordinates of a [`TimeOfDay`]. Derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CyclicPoint {
    pub sin: f64,
    pub cos: f64,
}

impl CyclicPoint {
    pub fn dot(self, other: CyclicPoint) -> f64 {
        self.sin * other.sin + self.cos * other.cos
    }

    /// Shortest arc between two points, expressed in hours of the 24-hour cycle.
    pub fn hours_to(self, other: CyclicPoint) -> f64 {
        // rounding can push the dot product past +-1 where acos is undefined
        let d = self.dot(other).clamp(-1.0, 1.0);
        if d >= 1.0 {
            return 0.0;
        }
        d.acos() / std::f64::consts::TAU * HOURS_PER_DAY
    }
}
