//! Evolution configuration.
//!
//! Loaded from a JSON file; every field has a default so a config only needs
//! to name what it changes.

use super::network::Activation;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the population's fitness is summarised for the stop check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessCriterion {
    Max,
    Min,
    Mean,
}

impl FitnessCriterion {
    /// Summarise a set of fitness values. Empty input yields `None`.
    pub fn apply(&self, fitness: &[f64]) -> Option<f64> {
        if fitness.is_empty() {
            return None;
        }
        let value = match self {
            Self::Max => fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Min => fitness.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Mean => fitness.iter().sum::<f64>() / fitness.len() as f64,
        };
        Some(value)
    }
}

/// Configuration for an evolution run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Genomes per generation
    pub population_size: usize,

    /// Summary used for the stop check
    pub fitness_criterion: FitnessCriterion,

    /// Stop once the criterion reaches this value
    pub fitness_threshold: f64,

    /// Generation limit
    pub max_generations: u32,

    /// Width of the hidden layer (0 = inputs wired straight to the output)
    pub hidden_nodes: usize,

    /// Activation for freshly created genomes
    pub activation_default: Activation,

    /// Pool the activation mutation draws from
    pub activation_options: Vec<Activation>,

    /// Chance per offspring of switching activation
    pub activation_mutate_rate: f64,

    pub bias_min: f64,
    pub bias_max: f64,
    pub bias_mutate_rate: f64,
    pub bias_mutate_power: f64,
    pub bias_replace_rate: f64,

    pub weight_min: f64,
    pub weight_max: f64,
    pub weight_mutate_rate: f64,
    pub weight_mutate_power: f64,
    pub weight_replace_rate: f64,

    /// Best genomes copied unchanged into the next generation
    pub elitism: usize,

    /// Fraction of the population allowed to reproduce
    pub survival_threshold: f64,

    /// Tick cap per generation (None = until every bird is dead)
    pub max_ticks_per_generation: Option<u64>,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            fitness_criterion: FitnessCriterion::Max,
            fitness_threshold: 100.0,
            max_generations: 50,
            hidden_nodes: 0,
            activation_default: Activation::Tanh,
            activation_options: vec![Activation::Tanh],
            activation_mutate_rate: 0.0,
            bias_min: -30.0,
            bias_max: 30.0,
            bias_mutate_rate: 0.7,
            bias_mutate_power: 0.5,
            bias_replace_rate: 0.1,
            weight_min: -30.0,
            weight_max: 30.0,
            weight_mutate_rate: 0.8,
            weight_mutate_power: 0.5,
            weight_replace_rate: 0.1,
            elitism: 2,
            survival_threshold: 0.2,
            max_ticks_per_generation: None,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Check every field is usable.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.elitism > self.population_size {
            return Err(ConfigError::ElitismTooLarge {
                elitism: self.elitism,
                population_size: self.population_size,
            });
        }

        let rates = [
            ("activation_mutate_rate", self.activation_mutate_rate),
            ("bias_mutate_rate", self.bias_mutate_rate),
            ("bias_replace_rate", self.bias_replace_rate),
            ("weight_mutate_rate", self.weight_mutate_rate),
            ("weight_replace_rate", self.weight_replace_rate),
            ("survival_threshold", self.survival_threshold),
        ];
        for (field, value) in rates {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { field, value });
            }
        }
        if self.survival_threshold <= 0.0 {
            return Err(ConfigError::NoSurvivors);
        }

        if self.bias_min > self.bias_max {
            return Err(ConfigError::InvertedBounds {
                field: "bias",
                min: self.bias_min,
                max: self.bias_max,
            });
        }
        if self.weight_min > self.weight_max {
            return Err(ConfigError::InvertedBounds {
                field: "weight",
                min: self.weight_min,
                max: self.weight_max,
            });
        }

        if self.activation_options.is_empty() {
            return Err(ConfigError::NoActivations);
        }
        if !self.activation_options.contains(&self.activation_default) {
            return Err(ConfigError::DefaultActivationMissing(
                self.activation_default.name().to_string(),
            ));
        }

        Ok(())
    }

    /// Quick config for smoke tests: a small population and few generations.
    pub fn quick(population_size: usize, max_generations: u32) -> Self {
        Self {
            population_size,
            max_generations,
            elitism: population_size.min(2),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EvolutionConfig::from_json(r#"{"population_size": 20, "seed": 9}"#)
            .expect("valid config");
        assert_eq!(config.population_size, 20);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_generations, 50);
        assert_eq!(config.fitness_criterion, FitnessCriterion::Max);
    }

    #[test]
    fn test_criterion_and_activation_names() {
        let config = EvolutionConfig::from_json(
            r#"{"fitness_criterion": "mean",
                "activation_default": "sigmoid",
                "activation_options": ["sigmoid", "relu"]}"#,
        )
        .expect("valid config");
        assert_eq!(config.fitness_criterion, FitnessCriterion::Mean);
        assert_eq!(config.activation_default, Activation::Sigmoid);
        assert_eq!(config.activation_options.len(), 2);
    }

    #[test]
    fn test_zero_population_rejected() {
        let err = EvolutionConfig::from_json(r#"{"population_size": 0}"#).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::EmptyPopulation)));
    }

    #[test]
    fn test_elitism_larger_than_population_rejected() {
        let config = EvolutionConfig {
            population_size: 3,
            elitism: 4,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ElitismTooLarge {
                elitism: 4,
                population_size: 3
            })
        );
    }

    #[test]
    fn test_rate_out_of_range_rejected() {
        let config = EvolutionConfig {
            weight_mutate_rate: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RateOutOfRange {
                field: "weight_mutate_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_inverted_bias_bounds_rejected() {
        let config = EvolutionConfig {
            bias_min: 5.0,
            bias_max: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedBounds { field: "bias", .. })
        ));
    }

    #[test]
    fn test_default_activation_must_be_an_option() {
        let config = EvolutionConfig {
            activation_default: Activation::Relu,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DefaultActivationMissing("relu".to_string()))
        );
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = EvolutionConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_json_round_trip_preserves_config() {
        let config = EvolutionConfig::quick(10, 3);
        let parsed = EvolutionConfig::from_json(&config.to_json()).expect("valid config");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_fitness_criterion() {
        let fitness = [1.0, 4.0, 7.0];
        assert_eq!(FitnessCriterion::Max.apply(&fitness), Some(7.0));
        assert_eq!(FitnessCriterion::Min.apply(&fitness), Some(1.0));
        assert_eq!(FitnessCriterion::Mean.apply(&fitness), Some(4.0));
        assert_eq!(FitnessCriterion::Max.apply(&[]), None);
    }
}
