//! Library error types.

use thiserror::Error;

/// Problems found while validating an evolution config.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,
    #[error("elitism {elitism} exceeds population_size {population_size}")]
    ElitismTooLarge { elitism: usize, population_size: usize },
    #[error("{field} must be between 0.0 and 1.0, got {value}")]
    RateOutOfRange { field: &'static str, value: f64 },
    #[error("survival_threshold must be greater than 0.0")]
    NoSurvivors,
    #[error("{field}_min {min} is greater than {field}_max {max}")]
    InvertedBounds {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("activation_options must not be empty")]
    NoActivations,
    #[error("activation_default {0} is not listed in activation_options")]
    DefaultActivationMissing(String),
}

/// Crate-wide error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
