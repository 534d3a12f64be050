use crate::error::RiskError;
use crate::types::scoring::{ScoreBounds, DEFAULT_HIGH, DEFAULT_LOW};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskConfig {
    pub bounds: Option<BoundsConfig>,
    pub generator: Option<GeneratorConfig>,
    pub wealth: Option<WealthConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoundsConfig {
    #[serde(default = "default_low")]
    pub low: f64,
    #[serde(default = "default_high")]
    pub high: f64,
}

fn default_low() -> f64 {
    DEFAULT_LOW
}

fn default_high() -> f64 {
    DEFAULT_HIGH
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub groups: Option<usize>,
    pub min_size: Option<u32>,
    pub max_size: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WealthConfig {
    pub divisor: Option<f64>,
    pub surge_threshold: Option<f64>,
    pub surge_multiplier: Option<f64>,
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorSettings {
    pub groups: usize,
    pub min_size: u32,
    pub max_size: u32,
    pub seed: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            groups: 5,
            min_size: 10,
            max_size: 200,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WealthPolicy {
    pub divisor: f64,
    pub surge_threshold: f64,
    pub surge_multiplier: f64,
}

impl Default for WealthPolicy {
    fn default() -> Self {
        Self {
            divisor: 10.0,
            surge_threshold: 100_000.0,
            surge_multiplier: 2.0,
        }
    }
}

pub const DEFAULT_WEALTH_TOP: usize = 10;

impl RiskConfig {
    pub fn bounds(&self) -> Result<ScoreBounds, RiskError> {
        match &self.bounds {
            Some(bounds) => ScoreBounds::new(bounds.low, bounds.high),
            None => Ok(ScoreBounds::DEFAULT),
        }
    }

    pub fn generator_settings(&self) -> GeneratorSettings {
        let defaults = GeneratorSettings::default();
        match &self.generator {
            Some(generator) => GeneratorSettings {
                groups: generator.groups.unwrap_or(defaults.groups),
                min_size: generator.min_size.unwrap_or(defaults.min_size),
                max_size: generator.max_size.unwrap_or(defaults.max_size),
                seed: generator.seed.unwrap_or(defaults.seed),
            },
            None => defaults,
        }
    }

    pub fn wealth_policy(&self) -> WealthPolicy {
        let defaults = WealthPolicy::default();
        match &self.wealth {
            Some(wealth) => WealthPolicy {
                divisor: wealth.divisor.unwrap_or(defaults.divisor),
                surge_threshold: wealth.surge_threshold.unwrap_or(defaults.surge_threshold),
                surge_multiplier: wealth.surge_multiplier.unwrap_or(defaults.surge_multiplier),
            },
            None => defaults,
        }
    }

    pub fn wealth_top(&self) -> usize {
        self.wealth
            .as_ref()
            .and_then(|wealth| wealth.top)
            .unwrap_or(DEFAULT_WEALTH_TOP)
    }

    pub fn validate(&self) -> Result<(), RiskError> {
        self.bounds()
            .map_err(|e| RiskError::ConfigParse(format!("bounds: {e}")))?;

        let generator = self.generator_settings();
        if generator.min_size > generator.max_size {
            return Err(RiskError::ConfigParse(format!(
                "generator.min_size ({}) must not exceed generator.max_size ({})",
                generator.min_size, generator.max_size
            )));
        }

        let policy = self.wealth_policy();
        if !(policy.divisor.is_finite() && policy.divisor > 0.0) {
            return Err(RiskError::ConfigParse(
                "wealth.divisor must be a positive number".to_string(),
            ));
        }
        if !(policy.surge_multiplier.is_finite() && policy.surge_multiplier > 0.0) {
            return Err(RiskError::ConfigParse(
                "wealth.surge_multiplier must be a positive number".to_string(),
            ));
        }
        if !policy.surge_threshold.is_finite() {
            return Err(RiskError::ConfigParse(
                "wealth.surge_threshold must be finite".to_string(),
            ));
        }
        if self.wealth_top() == 0 {
            return Err(RiskError::ConfigParse(
                "wealth.top must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> RiskConfig {
        toml::from_str(source).expect("config should parse")
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = parse("");
        assert_eq!(cfg.bounds().expect("bounds"), ScoreBounds::DEFAULT);
        assert_eq!(cfg.generator_settings(), GeneratorSettings::default());
        assert_eq!(cfg.wealth_policy(), WealthPolicy::default());
        assert_eq!(cfg.wealth_top(), DEFAULT_WEALTH_TOP);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_sections_fall_back_per_field() {
        let cfg = parse(
            r#"
[bounds]
high = 100.0

[generator]
seed = 7
"#,
        );
        let bounds = cfg.bounds().expect("bounds");
        assert_eq!(bounds.low, 0.0);
        assert_eq!(bounds.high, 100.0);
        let generator = cfg.generator_settings();
        assert_eq!(generator.seed, 7);
        assert_eq!(generator.groups, 5);
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let cfg = parse(
            r#"
[bounds]
low = 50.0
high = 10.0
"#,
        );
        assert!(matches!(cfg.validate(), Err(RiskError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_inverted_generator_sizes() {
        let cfg = parse(
            r#"
[generator]
min_size = 300
"#,
        );
        let err = cfg.validate().expect_err("should reject");
        assert!(err.to_string().contains("generator.min_size"));
    }

    #[test]
    fn validate_rejects_non_positive_divisor_and_zero_top() {
        let divisor = parse(
            r#"
[wealth]
divisor = 0.0
"#,
        );
        assert!(divisor.validate().is_err());

        let top = parse(
            r#"
[wealth]
top = 0
"#,
        );
        assert!(top.validate().is_err());
    }
}
