//! Fixed-topology feed-forward networks and the genomes that encode them.

use super::config::EvolutionConfig;
use crate::constants::OBSERVATION_SIZE;
use crate::evaluation::{Controller, Genome, Observation};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Node activation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Tanh,
    Sigmoid,
    Relu,
    Identity,
}

impl Activation {
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Self::Tanh => x.tanh(),
            // Steepened logistic, matching the usual neuroevolution convention
            Self::Sigmoid => 1.0 / (1.0 + (-5.0 * x).exp()),
            Self::Relu => x.max(0.0),
            Self::Identity => x,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tanh => "tanh",
            Self::Sigmoid => "sigmoid",
            Self::Relu => "relu",
            Self::Identity => "identity",
        }
    }
}

/// One node: incoming weights plus a bias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl Neuron {
    fn random<R: Rng>(inputs: usize, config: &EvolutionConfig, rng: &mut R) -> Self {
        Self {
            weights: (0..inputs)
                .map(|_| gaussian(rng).clamp(config.weight_min, config.weight_max))
                .collect(),
            bias: gaussian(rng).clamp(config.bias_min, config.bias_max),
        }
    }

    fn fire(&self, inputs: &[f64], activation: Activation) -> f64 {
        let sum: f64 = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(weight, input)| weight * input)
            .sum();
        activation.apply(sum + self.bias)
    }

    fn mutate<R: Rng>(&mut self, config: &EvolutionConfig, rng: &mut R) {
        for weight in &mut self.weights {
            *weight = perturb(
                *weight,
                config.weight_mutate_rate,
                config.weight_replace_rate,
                config.weight_mutate_power,
                rng,
            )
            .clamp(config.weight_min, config.weight_max);
        }
        self.bias = perturb(
            self.bias,
            config.bias_mutate_rate,
            config.bias_replace_rate,
            config.bias_mutate_power,
            rng,
        )
        .clamp(config.bias_min, config.bias_max);
    }
}

/// An evolvable network description with its fitness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkGenome {
    pub id: u64,
    /// Hidden layer (empty = inputs feed the output directly).
    pub hidden: Vec<Neuron>,
    pub output: Neuron,
    pub activation: Activation,
    pub fitness: f64,
}

impl NetworkGenome {
    /// Random genome shaped by the config.
    pub fn random<R: Rng>(id: u64, config: &EvolutionConfig, rng: &mut R) -> Self {
        let hidden: Vec<Neuron> = (0..config.hidden_nodes)
            .map(|_| Neuron::random(OBSERVATION_SIZE, config, rng))
            .collect();
        let output_inputs = if hidden.is_empty() {
            OBSERVATION_SIZE
        } else {
            hidden.len()
        };

        Self {
            id,
            hidden,
            output: Neuron::random(output_inputs, config, rng),
            activation: config.activation_default,
            fitness: 0.0,
        }
    }

    /// Copy of this genome with perturbed parameters and a new id.
    pub fn offspring<R: Rng>(&self, id: u64, config: &EvolutionConfig, rng: &mut R) -> Self {
        let mut child = self.clone();
        child.id = id;
        child.fitness = 0.0;

        for neuron in &mut child.hidden {
            neuron.mutate(config, rng);
        }
        child.output.mutate(config, rng);

        if rng.gen::<f64>() < config.activation_mutate_rate {
            if let Some(activation) = config.activation_options.choose(rng) {
                child.activation = *activation;
            }
        }

        child
    }

    /// Build the decision network for this genome.
    pub fn network(&self) -> FeedForwardNetwork {
        FeedForwardNetwork {
            hidden: self.hidden.clone(),
            output: self.output.clone(),
            activation: self.activation,
        }
    }

    /// Number of connections in the network.
    pub fn connection_count(&self) -> usize {
        self.hidden.iter().map(|n| n.weights.len()).sum::<usize>() + self.output.weights.len()
    }
}

impl Genome for NetworkGenome {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Evaluated form of a [`NetworkGenome`].
#[derive(Debug, Clone)]
pub struct FeedForwardNetwork {
    hidden: Vec<Neuron>,
    output: Neuron,
    activation: Activation,
}

impl FeedForwardNetwork {
    pub fn evaluate(&self, inputs: &[f64]) -> f64 {
        if self.hidden.is_empty() {
            return self.output.fire(inputs, self.activation);
        }
        let hidden: Vec<f64> = self
            .hidden
            .iter()
            .map(|neuron| neuron.fire(inputs, self.activation))
            .collect();
        self.output.fire(&hidden, self.activation)
    }
}

impl Controller for FeedForwardNetwork {
    fn activate(&mut self, observation: &Observation) -> Vec<f64> {
        vec![self.evaluate(observation)]
    }
}

/// Standard normal sample (Box-Muller).
fn gaussian<R: Rng>(rng: &mut R) -> f64 {
    let u1 = rng.gen::<f64>().clamp(f64::MIN_POSITIVE, 1.0);
    let u2 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// Nudge a parameter with probability `mutate_rate`, or replace it outright
/// with probability `replace_rate`.
fn perturb<R: Rng>(value: f64, mutate_rate: f64, replace_rate: f64, power: f64, rng: &mut R) -> f64 {
    let roll = rng.gen::<f64>();
    if roll < mutate_rate {
        value + gaussian(rng) * power
    } else if roll < mutate_rate + replace_rate {
        gaussian(rng)
    } else {
        value
    }
}
