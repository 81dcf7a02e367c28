//! The narrow interface between the arena and whatever evolves the birds.

use crate::constants::OBSERVATION_SIZE;

/// What a controller sees each tick: bird y, distance to the tracked pipe's
/// gap top, distance to its gap bottom.
pub type Observation = [f64; OBSERVATION_SIZE];

/// A decision function. The first output above the jump threshold means flap.
pub trait Controller {
    fn activate(&mut self, observation: &Observation) -> Vec<f64>;
}

/// Anything carrying a fitness score the arena can reset and accumulate.
pub trait Genome {
    fn fitness(&self) -> f64;
    fn set_fitness(&mut self, fitness: f64);
}

impl<F> Controller for F
where
    F: FnMut(&Observation) -> Vec<f64>,
{
    fn activate(&mut self, observation: &Observation) -> Vec<f64> {
        self(observation)
    }
}

/// Build the observation for a bird at `y` aiming at a gap spanning
/// `gap_top..gap_bottom`.
pub fn observe(y: f64, gap_top: f64, gap_bottom: f64) -> Observation {
    [y, (y - gap_top).abs(), (y - gap_bottom).abs()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_uses_absolute_distances() {
        let obs = observe(350.0, 300.0, 500.0);
        assert_eq!(obs, [350.0, 50.0, 150.0]);

        let obs = observe(100.0, 300.0, 500.0);
        assert_eq!(obs, [100.0, 200.0, 400.0]);
    }

    #[test]
    fn test_closure_is_a_controller() {
        let mut calls = 0;
        let mut controller = |obs: &Observation| {
            calls += 1;
            vec![obs[0]]
        };
        assert_eq!(controller.activate(&[1.0, 2.0, 3.0]), vec![1.0]);
        drop(controller);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_boxed_controller() {
        let mut controller: Box<dyn FnMut(&Observation) -> Vec<f64>> =
            Box::new(|_: &Observation| vec![0.9]);
        assert_eq!(controller.activate(&[0.0; 3]), vec![0.9]);
    }
}
