//! Seeded synthetic datasets for exercising the aggregator.

use crate::error::{Result, RiskError};
use crate::records::ObservationRecord;
use crate::types::config::GeneratorSettings;
use crate::types::scoring::{Group, Score, ScoreBounds};
use chrono::Utc;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub generated_at: String,
    pub seed: u64,
    pub bounds: ScoreBounds,
    pub groups: Vec<Group>,
}

pub struct DatasetGenerator {
    settings: GeneratorSettings,
    bounds: ScoreBounds,
    rng: ChaCha8Rng,
}

impl DatasetGenerator {
    pub fn new(settings: GeneratorSettings, bounds: ScoreBounds) -> Result<Self> {
        if settings.min_size > settings.max_size {
            return Err(RiskError::ConfigParse(format!(
                "generator.min_size ({}) exceeds generator.max_size ({})",
                settings.min_size, settings.max_size
            )));
        }
        let rng = ChaCha8Rng::seed_from_u64(settings.seed);
        Ok(Self {
            settings,
            bounds,
            rng,
        })
    }

    /// Groups whose observation count equals their size, each score an integer in bounds.
    pub fn generate_groups(&mut self) -> Vec<Group> {
        let ScoreBounds { low, high } = self.bounds;
        let sizes = self.settings.min_size..=self.settings.max_size;
        (0..self.settings.groups)
            .map(|_| {
                let size = self.rng.gen_range(sizes.clone());
                let observations = (0..size).map(|_| self.integer_score(low, high)).collect();
                Group::new(size, observations)
            })
            .collect()
    }

    /// Records for one group, scores spread uniformly around `mean` and kept within bounds.
    pub fn generate_records(
        &mut self,
        group_id: u32,
        mean: Score,
        spread: Score,
        samples: usize,
    ) -> Vec<ObservationRecord> {
        let low = (mean - spread).max(self.bounds.low);
        let high = (mean + spread).min(self.bounds.high);
        (0..samples)
            .map(|_| ObservationRecord {
                group_id,
                score: self.integer_score(low, high),
            })
            .collect()
    }

    pub fn dataset(&mut self) -> Dataset {
        let groups = self.generate_groups();
        Dataset {
            generated_at: Utc::now().to_rfc3339(),
            seed: self.settings.seed,
            bounds: self.bounds,
            groups,
        }
    }

    fn integer_score(&mut self, low: Score, high: Score) -> Score {
        let (first, last) = (low.ceil(), high.floor());
        if first >= last {
            // no integer strictly inside the interval
            return if first <= high { first } else { low };
        }
        self.rng.gen_range(first as i64..=last as i64) as Score
    }
}
