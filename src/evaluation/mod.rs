//! Multi-agent evaluation arena.
//!
//! Every genome gets a bird. All birds fly the same pipes in lockstep; each
//! tick they earn a small survival reward, ask their controller whether to
//! flap, and are removed on hitting a pipe (with a penalty) or leaving the
//! screen. Passing a pipe rewards the whole surviving flock.

pub mod agent;
pub mod controller;
pub mod generation;

pub use agent::Agent;
pub use controller::{observe, Controller, Genome, Observation};
pub use generation::{
    evaluate_genomes, DeathCause, Generation, GenerationSummary, GenerationTick, TickControl,
};
