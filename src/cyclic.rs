//! Time-of-day as a point on the 24-hour circle.
//!
//! Linear differences break across midnight (23:00 and 01:00 are two hours
//! apart, not twenty-two). Encoding each time as `(sin, cos)` of its angle and
//! measuring the arc between the two points gives the shortest distance.

use crate::error::Result;
use crate::types::time::{CyclicPoint, TimeOfDay};

/// Maps `hours` in `[0, 24)` to its unit-circle coordinates.
pub fn encode(hours: f64) -> Result<CyclicPoint> {
    Ok(TimeOfDay::new(hours)?.to_point())
}

/// Shortest distance in hours between two times of day, in `[0, 12]`.
pub fn circular_distance(first: f64, second: f64) -> Result<f64> {
    let first = TimeOfDay::new(first)?;
    let second = TimeOfDay::new(second)?;
    Ok(first.distance_to(second))
}
