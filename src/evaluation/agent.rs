//! One bird together with the controller flying it and its running score.

use super::controller::{Controller, Observation};
use crate::constants::JUMP_THRESHOLD;
use crate::game::Bird;

/// A live member of a generation. Bird, controller and fitness always move
/// together, so removing an agent can never misalign them.
#[derive(Debug, Clone)]
pub struct Agent<C> {
    /// Index of the genome this agent was built from.
    pub id: usize,
    pub bird: Bird,
    pub controller: C,
    pub fitness: f64,
}

impl<C: Controller> Agent<C> {
    pub fn new(id: usize, controller: C) -> Self {
        Self {
            id,
            bird: Bird::at_start(),
            controller,
            fitness: 0.0,
        }
    }

    /// Ask the controller whether to flap and do so. Returns true on a jump.
    pub fn decide(&mut self, observation: &Observation) -> bool {
        let output = self.controller.activate(observation);
        let jump = output.first().is_some_and(|value| *value > JUMP_THRESHOLD);
        if jump {
            self.bird.jump();
        }
        jump
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_above_threshold_jumps() {
        let mut agent = Agent::new(0, |_: &Observation| vec![0.51]);
        assert!(agent.decide(&[0.0; 3]));
        assert!(agent.bird.velocity < 0.0);
    }

    #[test]
    fn test_output_at_threshold_does_not_jump() {
        let mut agent = Agent::new(0, |_: &Observation| vec![0.5]);
        assert!(!agent.decide(&[0.0; 3]));
        assert!((agent.bird.velocity).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_output_does_not_jump() {
        let mut agent = Agent::new(0, |_: &Observation| Vec::new());
        assert!(!agent.decide(&[0.0; 3]));
    }

    #[test]
    fn test_only_first_output_counts() {
        let mut agent = Agent::new(0, |_: &Observation| vec![0.0, 1.0]);
        assert!(!agent.decide(&[0.0; 3]));
    }
}
