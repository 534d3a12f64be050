//! Bounded, size-weighted risk aggregation and cyclic time-of-day distance.

pub mod aggregate;
pub mod config;
pub mod cyclic;
pub mod error;
pub mod generate;
pub mod input;
pub mod records;
pub mod report;
pub mod types;
pub mod wealth;

pub use aggregate::{aggregate, aggregate_default, group_average, summarize};
pub use cyclic::{circular_distance, encode};
pub use error::{Result, RiskError};
pub use types::scoring::{Group, ScoreBounds};
pub use types::time::{CyclicPoint, TimeOfDay};
