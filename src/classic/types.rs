//! Single-player game state.

use crate::game::{Bird, Playfield, SpriteSheet, Tuning};
use rand::Rng;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the first flap. Physics paused.
    Ready,
    Running,
    /// Terminal.
    GameOver,
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    HitPipe,
    HitFloor,
    FlewAway,
    Quit,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct ClassicGame {
    pub tuning: Tuning,
    pub sprites: SpriteSheet,
    pub bird: Bird,
    pub playfield: Playfield,
    pub state: SessionState,
    pub cause: Option<GameOverCause>,
    /// Flap input waiting to be consumed next tick.
    pub flap_queued: bool,
    /// Ticks simulated while running.
    pub tick_count: u64,
}

impl ClassicGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_tuning(Tuning::classic(), rng)
    }

    pub fn with_tuning<R: Rng>(tuning: Tuning, rng: &mut R) -> Self {
        let playfield = Playfield::new(&tuning, rng);
        Self {
            tuning,
            sprites: SpriteSheet::new(),
            bird: Bird::at_start(),
            playfield,
            state: SessionState::Ready,
            cause: None,
            flap_queued: false,
            tick_count: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.playfield.score
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_defaults() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let game = ClassicGame::new(&mut rng);
        assert_eq!(game.state, SessionState::Ready);
        assert!(game.cause.is_none());
        assert_eq!(game.score(), 0);
        assert!(!game.flap_queued);
        assert_eq!(game.playfield.pipes.len(), 1);
        assert!((game.playfield.pipes[0].x - 600.0).abs() < f64::EPSILON);
        assert!(!game.is_over());
    }
}
