//! Multi-agent evaluation: one generation of birds flying in lockstep.

use super::agent::Agent;
use super::controller::{observe, Controller, Genome};
use crate::constants::{BIRD_START_X, COLLISION_PENALTY, PASS_BONUS, SURVIVAL_REWARD};
use crate::error::Result;
use crate::game::{Pipe, Playfield, SpriteSheet, Tuning};
use rand::Rng;
use tracing::debug;

/// Returned by a generation observer after every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    /// Stop the generation now (e.g. the user asked to quit).
    Quit,
}

/// Why an agent was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    HitPipe,
    OutOfBounds,
}

/// Result of a single tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationTick {
    /// Pipes passed this tick.
    pub passed: u32,
    /// Genome ids removed this tick, in removal order.
    pub deaths: Vec<(usize, DeathCause)>,
}

/// How a finished (or interrupted) generation went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub ticks: u64,
    /// Pipes passed by the flock.
    pub score: u32,
    pub interrupted: bool,
}

/// One generation in flight.
pub struct Generation<C> {
    tuning: Tuning,
    sprites: SpriteSheet,
    playfield: Playfield,
    agents: Vec<Agent<C>>,
    /// Final fitness per genome id, filled in as agents die.
    final_fitness: Vec<Option<f64>>,
    tick: u64,
    max_ticks: Option<u64>,
}

impl<C: Controller> Generation<C> {
    /// Start a generation with one agent per controller. Agent ids follow the
    /// controllers' order.
    pub fn new<R, I>(controllers: I, tuning: Tuning, rng: &mut R) -> Self
    where
        R: Rng,
        I: IntoIterator<Item = C>,
    {
        let playfield = Playfield::new(&tuning, rng);
        Self::with_playfield(controllers, tuning, playfield)
    }

    /// Start a generation on a prepared play field.
    pub fn with_playfield<I>(controllers: I, tuning: Tuning, playfield: Playfield) -> Self
    where
        I: IntoIterator<Item = C>,
    {
        let agents: Vec<Agent<C>> = controllers
            .into_iter()
            .enumerate()
            .map(|(id, controller)| Agent::new(id, controller))
            .collect();

        Self {
            tuning,
            sprites: SpriteSheet::new(),
            playfield,
            final_fitness: vec![None; agents.len()],
            agents,
            tick: 0,
            max_ticks: None,
        }
    }

    /// End the generation after `max_ticks` even if agents remain.
    pub fn with_tick_cap(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Simulate one tick for every live agent.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> GenerationTick {
        let mut result = GenerationTick::default();
        if self.is_finished() {
            return result;
        }
        self.tick += 1;

        // Shared by every agent: the lead bird decides which pipe is next
        let lead_x = self.agents.first().map(|agent| agent.bird.x);
        let target = self
            .playfield
            .tracked_pipe(lead_x)
            .map(|pipe| (pipe.height, pipe.bottom));

        for agent in &mut self.agents {
            agent.fitness += SURVIVAL_REWARD;
            agent.bird.advance(&self.tuning);
            if let Some((gap_top, gap_bottom)) = target {
                agent.decide(&observe(agent.bird.y, gap_top, gap_bottom));
            }
        }

        let step = self
            .playfield
            .step(&self.tuning, lead_x.unwrap_or(BIRD_START_X), rng);
        result.passed = step.passed;

        let (crashed, survivors): (Vec<_>, Vec<_>) = std::mem::take(&mut self.agents)
            .into_iter()
            .partition(|agent| self.playfield.hits_pipe(&agent.bird, &self.sprites));
        self.agents = survivors;
        for mut agent in crashed {
            agent.fitness -= COLLISION_PENALTY;
            self.retire(agent, DeathCause::HitPipe, &mut result);
        }

        if step.passed > 0 {
            let bonus = PASS_BONUS * step.passed as f64;
            for agent in &mut self.agents {
                agent.fitness += bonus;
            }
        }

        let (fallen, survivors): (Vec<_>, Vec<_>) = std::mem::take(&mut self.agents)
            .into_iter()
            .partition(|agent| agent.bird.is_out_of_bounds(&self.tuning));
        self.agents = survivors;
        for agent in fallen {
            self.retire(agent, DeathCause::OutOfBounds, &mut result);
        }

        for agent in &mut self.agents {
            agent.bird.animate();
        }

        result
    }

    fn retire(&mut self, agent: Agent<C>, cause: DeathCause, result: &mut GenerationTick) {
        debug!(
            genome = agent.id,
            tick = self.tick,
            fitness = agent.fitness,
            ?cause,
            "agent removed"
        );
        if let Some(slot) = self.final_fitness.get_mut(agent.id) {
            *slot = Some(agent.fitness);
        }
        result.deaths.push((agent.id, cause));
    }

    /// No agents left, or the tick cap was reached.
    pub fn is_finished(&self) -> bool {
        self.agents.is_empty() || self.max_ticks.is_some_and(|cap| self.tick >= cap)
    }

    pub fn agents(&self) -> &[Agent<C>] {
        &self.agents
    }

    pub fn alive(&self) -> usize {
        self.agents.len()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn sprites(&self) -> &SpriteSheet {
        &self.sprites
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Pipe the flock is currently aiming at, if any.
    pub fn tracked_pipe(&self) -> Option<&Pipe> {
        let lead_x = self.agents.first().map(|agent| agent.bird.x);
        self.playfield.tracked_pipe(lead_x)
    }

    /// Current fitness of a genome, live or final.
    pub fn fitness_of(&self, id: usize) -> Option<f64> {
        self.agents
            .iter()
            .find(|agent| agent.id == id)
            .map(|agent| agent.fitness)
            .or_else(|| self.final_fitness.get(id).copied().flatten())
    }

    /// Final fitness of every genome, indexed by genome id.
    pub fn finish(mut self) -> Vec<f64> {
        for agent in &self.agents {
            if let Some(slot) = self.final_fitness.get_mut(agent.id) {
                *slot = Some(agent.fitness);
            }
        }
        self.final_fitness
            .into_iter()
            .map(|fitness| fitness.unwrap_or(0.0))
            .collect()
    }
}

/// Evaluate a whole population: reset every genome's fitness, build one
/// controller per genome, fly the generation to the end and write the final
/// fitness back.
///
/// `observer` runs after every tick (rendering, quit polling). Returning
/// [`TickControl::Quit`] stops the generation early; fitness earned so far is
/// still written back and the summary is marked interrupted.
pub fn evaluate_genomes<G, C, B, R, O>(
    genomes: &mut [G],
    mut build: B,
    tuning: &Tuning,
    max_ticks: Option<u64>,
    rng: &mut R,
    mut observer: O,
) -> Result<GenerationSummary>
where
    G: Genome,
    C: Controller,
    B: FnMut(&G) -> C,
    R: Rng,
    O: FnMut(&Generation<C>) -> Result<TickControl>,
{
    for genome in genomes.iter_mut() {
        genome.set_fitness(0.0);
    }

    let controllers: Vec<C> = genomes.iter().map(&mut build).collect();
    let mut generation = Generation::new(controllers, *tuning, rng);
    if let Some(cap) = max_ticks {
        generation = generation.with_tick_cap(cap);
    }

    let mut interrupted = false;
    while !generation.is_finished() {
        generation.step(rng);
        if observer(&generation)? == TickControl::Quit {
            interrupted = true;
            break;
        }
    }

    let summary = GenerationSummary {
        ticks: generation.tick(),
        score: generation.playfield().score,
        interrupted,
    };

    for (genome, fitness) in genomes.iter_mut().zip(generation.finish()) {
        genome.set_fitness(fitness);
    }

    Ok(summary)
}
