//! Fixed-topology neuroevolution.
//!
//! Genomes describe small feed-forward networks; a [`Population`] evaluates
//! them through a caller-supplied function (normally
//! [`crate::evaluation::evaluate_genomes`]) and breeds the next generation
//! from the fittest.

pub mod config;
pub mod network;
pub mod population;
pub mod report;

pub use config::{EvolutionConfig, FitnessCriterion};
pub use network::{Activation, FeedForwardNetwork, NetworkGenome, Neuron};
pub use population::{seeded_rng, Population};
pub use report::{GenerationStats, TrainingReport};
