//! Pipe lifecycle, ground scrolling and score bookkeeping.

use super::base::Base;
use super::bird::Bird;
use super::pipe::Pipe;
use super::sprites::SpriteSheet;
use super::tuning::Tuning;
use rand::Rng;
use tracing::debug;

/// What happened to the pipes during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipeStep {
    /// Pipes passed this tick (each one spawned a replacement).
    pub passed: u32,
    /// Pipes removed after leaving the screen.
    pub retired: usize,
}

/// Everything in the world except the birds.
#[derive(Debug, Clone)]
pub struct Playfield {
    pub pipes: Vec<Pipe>,
    pub base: Base,
    /// Pipes passed so far.
    pub score: u32,
}

impl Playfield {
    /// Fresh play field with one pipe ahead of the birds.
    pub fn new<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            pipes: vec![Pipe::spawn(tuning.first_pipe_x, rng)],
            base: Base::new(tuning.base_y),
            score: 0,
        }
    }

    /// Play field with explicit pipes, mostly for tests and replays.
    pub fn with_pipes(tuning: &Tuning, pipes: Vec<Pipe>) -> Self {
        Self {
            pipes,
            base: Base::new(tuning.base_y),
            score: 0,
        }
    }

    /// Scroll the ground and pipes, score passes, spawn replacements and
    /// retire pipes that left the screen.
    pub fn step<R: Rng>(&mut self, tuning: &Tuning, bird_x: f64, rng: &mut R) -> PipeStep {
        self.base.advance(tuning.base_velocity);

        let mut step = PipeStep::default();
        for pipe in &mut self.pipes {
            pipe.advance(tuning.pipe_velocity);
            if !pipe.passed && pipe.x < bird_x {
                pipe.passed = true;
                step.passed += 1;
            }
        }

        for _ in 0..step.passed {
            self.score += 1;
            self.pipes.push(Pipe::spawn(tuning.spawn_pipe_x, rng));
        }

        let before = self.pipes.len();
        self.pipes.retain(|pipe| !pipe.is_off_screen());
        step.retired = before - self.pipes.len();

        if step.passed > 0 {
            debug!(score = self.score, pipes = self.pipes.len(), "pipe passed");
        }

        step
    }

    /// Index of the pipe birds should aim for: the first one, or the second
    /// once the lead bird has cleared the first pipe's right edge.
    pub fn tracked_pipe_index(&self, lead_x: Option<f64>) -> Option<usize> {
        let first = self.pipes.first()?;
        match lead_x {
            Some(x) if self.pipes.len() > 1 && x > first.right() => Some(1),
            _ => Some(0),
        }
    }

    pub fn tracked_pipe(&self, lead_x: Option<f64>) -> Option<&Pipe> {
        self.tracked_pipe_index(lead_x)
            .and_then(|index| self.pipes.get(index))
    }

    /// True if the bird overlaps any pipe.
    pub fn hits_pipe(&self, bird: &Bird, sprites: &SpriteSheet) -> bool {
        self.pipes.iter().any(|pipe| pipe.collides(bird, sprites))
    }
}
