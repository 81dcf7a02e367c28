//! Generational driver: evaluate, summarise, breed.

use super::config::EvolutionConfig;
use super::network::NetworkGenome;
use super::report::{GenerationStats, TrainingReport};
use crate::error::Result;
use crate::evaluation::GenerationSummary;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;
use tracing::{debug, info};

const TOURNAMENT_SIZE: usize = 3;

/// Deterministic rng for a seed, or an entropy-seeded one.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// A population of network genomes evolving across generations.
pub struct Population {
    config: EvolutionConfig,
    genomes: Vec<NetworkGenome>,
    /// Generations evaluated so far
    generation: u32,
    next_id: u64,
}

impl Population {
    /// Seed a population of random genomes.
    pub fn new<R: Rng>(config: EvolutionConfig, rng: &mut R) -> Self {
        let genomes: Vec<NetworkGenome> = (0..config.population_size as u64)
            .map(|id| NetworkGenome::random(id, &config, rng))
            .collect();
        let next_id = genomes.len() as u64;

        Self {
            config,
            genomes,
            generation: 0,
            next_id,
        }
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn genomes(&self) -> &[NetworkGenome] {
        &self.genomes
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Run up to `max_generations` generations.
    ///
    /// `evaluate` receives the genomes and the 1-based number of the
    /// generation being evaluated; it must leave each genome's fitness set.
    /// An interrupted evaluation ends the run after its stats are recorded.
    pub fn run<R, F>(&mut self, rng: &mut R, mut evaluate: F) -> Result<TrainingReport>
    where
        R: Rng,
        F: FnMut(&mut [NetworkGenome], u32, &mut R) -> Result<GenerationSummary>,
    {
        let mut report = TrainingReport {
            generations: Vec::new(),
            best_genome: None,
            solved: false,
            interrupted: false,
        };

        for _ in 0..self.config.max_generations {
            let summary = evaluate(&mut self.genomes, self.generation + 1, rng)?;

            let fitness: Vec<f64> = self.genomes.iter().map(|g| g.fitness).collect();
            let stats =
                GenerationStats::from_fitness(self.generation, &fitness, summary.score, summary.ticks);
            info!(
                generation = stats.generation,
                best = stats.best_fitness,
                mean = stats.mean_fitness,
                score = stats.score,
                ticks = stats.ticks,
                "generation evaluated"
            );
            report.generations.push(stats);
            self.record_best(&mut report);
            self.generation += 1;

            if summary.interrupted {
                info!(generation = self.generation, "training interrupted");
                report.interrupted = true;
                break;
            }

            let criterion = self.config.fitness_criterion.apply(&fitness);
            if criterion.is_some_and(|value| value >= self.config.fitness_threshold) {
                info!(
                    generation = self.generation,
                    threshold = self.config.fitness_threshold,
                    "fitness threshold reached"
                );
                report.solved = true;
                break;
            }

            self.breed(rng);
        }

        Ok(report)
    }

    fn record_best(&self, report: &mut TrainingReport) {
        let Some(champion) = self.genomes.iter().max_by(|a, b| by_fitness(a, b)) else {
            return;
        };
        let improved = report
            .best_genome
            .as_ref()
            .map_or(true, |best| champion.fitness > best.fitness);
        if improved {
            report.best_genome = Some(champion.clone());
        }
    }

    /// Replace the population with the next generation: elites carried over
    /// unchanged, the rest mutated offspring of tournament winners drawn from
    /// the top `survival_threshold` fraction.
    pub fn breed<R: Rng>(&mut self, rng: &mut R) {
        let mut ranked = std::mem::take(&mut self.genomes);
        ranked.sort_by(|a, b| by_fitness(b, a));

        let size = self.config.population_size;
        let survivors = ((ranked.len() as f64 * self.config.survival_threshold).ceil() as usize)
            .clamp(1, ranked.len().max(1));

        let mut next: Vec<NetworkGenome> = ranked.iter().take(self.config.elitism).cloned().collect();
        let parents = &ranked[..survivors.min(ranked.len())];

        while next.len() < size {
            let Some(parent) = tournament(parents, rng) else {
                break;
            };
            let child = parent.offspring(self.next_id, &self.config, rng);
            self.next_id += 1;
            next.push(child);
        }

        debug!(
            elites = self.config.elitism.min(ranked.len()),
            parents = parents.len(),
            size = next.len(),
            "population bred"
        );
        self.genomes = next;
    }
}

/// Fittest of up to three random parents.
fn tournament<'a, R: Rng>(parents: &'a [NetworkGenome], rng: &mut R) -> Option<&'a NetworkGenome> {
    parents
        .choose_multiple(rng, TOURNAMENT_SIZE.min(parents.len()))
        .max_by(|a, b| by_fitness(a, b))
}

fn by_fitness(a: &NetworkGenome, b: &NetworkGenome) -> Ordering {
    a.fitness.partial_cmp(&b.fitness).unwrap_or(Ordering::Equal)
}
