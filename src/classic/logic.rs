//! Game logic for the single-player game.

use super::types::{ClassicGame, GameOverCause, SessionState};
use crate::constants::CEILING_Y;
use rand::Rng;
use tracing::info;

/// Input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassicInput {
    /// Flap (Space, Enter or Up).
    Flap,
    /// Quit (q or Esc).
    Quit,
    /// Any other key.
    Other,
}

/// Notable things that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassicEvent {
    Flapped,
    PipePassed { score: u32 },
    GameOver(GameOverCause),
}

/// Process player input.
pub fn process_input(game: &mut ClassicGame, input: ClassicInput) {
    if game.is_over() {
        return;
    }

    match input {
        ClassicInput::Flap => {
            if game.state == SessionState::Ready {
                game.state = SessionState::Running;
            }
            game.flap_queued = true;
        }
        ClassicInput::Quit => end_game(game, GameOverCause::Quit),
        ClassicInput::Other => {}
    }
}

/// Process one game tick: flap, physics, pipes, then collision checks.
pub fn process_tick<R: Rng>(game: &mut ClassicGame, rng: &mut R) -> Vec<ClassicEvent> {
    let mut events = Vec::new();
    if game.state != SessionState::Running {
        return events;
    }

    game.tick_count += 1;

    if game.flap_queued {
        game.flap_queued = false;
        game.bird.jump();
        events.push(ClassicEvent::Flapped);
    }

    game.bird.advance(&game.tuning);

    let step = game.playfield.step(&game.tuning, game.bird.x, rng);
    if step.passed > 0 {
        events.push(ClassicEvent::PipePassed {
            score: game.playfield.score,
        });
    }

    if let Some(cause) = check_collisions(game) {
        end_game(game, cause);
        events.push(ClassicEvent::GameOver(cause));
        return events;
    }

    game.bird.animate();
    events
}

/// Pipe hits take priority over leaving the vertical bounds.
fn check_collisions(game: &ClassicGame) -> Option<GameOverCause> {
    if game.playfield.hits_pipe(&game.bird, &game.sprites) {
        return Some(GameOverCause::HitPipe);
    }
    if game.bird.y < CEILING_Y {
        return Some(GameOverCause::FlewAway);
    }
    if game.bird.is_out_of_bounds(&game.tuning) {
        return Some(GameOverCause::HitFloor);
    }
    None
}

fn end_game(game: &mut ClassicGame, cause: GameOverCause) {
    game.state = SessionState::GameOver;
    game.cause = Some(cause);
    game.flap_queued = false;
    info!(?cause, score = game.playfield.score, ticks = game.tick_count, "game over");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Pipe;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn running_game() -> (ClassicGame, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut game = ClassicGame::new(&mut rng);
        game.state = SessionState::Running;
        (game, rng)
    }

    #[test]
    fn test_flap_starts_game() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut game = ClassicGame::new(&mut rng);
        process_input(&mut game, ClassicInput::Flap);
        assert_eq!(game.state, SessionState::Running);
        assert!(game.flap_queued);
    }

    #[test]
    fn test_no_tick_when_ready() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut game = ClassicGame::new(&mut rng);
        let initial_y = game.bird.y;
        let events = process_tick(&mut game, &mut rng);
        assert!(events.is_empty());
        assert!((game.bird.y - initial_y).abs() < f64::EPSILON);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_queued_flap_jumps_next_tick() {
        let (mut game, mut rng) = running_game();
        process_input(&mut game, ClassicInput::Flap);
        let events = process_tick(&mut game, &mut rng);
        assert_eq!(events, vec![ClassicEvent::Flapped]);
        assert!(!game.flap_queued);
        assert!((game.bird.y - 339.0).abs() < 1e-9);
    }

    #[test]
    fn test_gravity_pulls_bird_down() {
        let (mut game, mut rng) = running_game();
        let initial_y = game.bird.y;
        process_tick(&mut game, &mut rng);
        assert!(game.bird.y > initial_y);
    }

    #[test]
    fn test_floor_ends_game() {
        let (mut game, mut rng) = running_game();
        game.bird.y = 660.0;
        let events = process_tick(&mut game, &mut rng);
        assert_eq!(events, vec![ClassicEvent::GameOver(GameOverCause::HitFloor)]);
        assert!(game.is_over());
    }

    #[test]
    fn test_pipe_collision_ends_game() {
        let (mut game, mut rng) = running_game();
        // Pipe right on top of the bird with the gap far above it
        game.playfield.pipes = vec![Pipe::with_height(250.0, 60.0)];
        let events = process_tick(&mut game, &mut rng);
        assert_eq!(events, vec![ClassicEvent::GameOver(GameOverCause::HitPipe)]);
        assert_eq!(game.cause, Some(GameOverCause::HitPipe));
    }

    #[test]
    fn test_quit_from_any_state() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut game = ClassicGame::new(&mut rng);
        process_input(&mut game, ClassicInput::Quit);
        assert_eq!(game.cause, Some(GameOverCause::Quit));
        assert!(game.is_over());
    }

    #[test]
    fn test_input_ignored_after_game_over() {
        let (mut game, _) = running_game();
        process_input(&mut game, ClassicInput::Quit);
        process_input(&mut game, ClassicInput::Flap);
        assert!(!game.flap_queued);
        assert_eq!(game.state, SessionState::GameOver);
    }

    #[test]
    fn test_other_key_is_ignored() {
        let (mut game, _) = running_game();
        process_input(&mut game, ClassicInput::Other);
        assert!(!game.flap_queued);
        assert_eq!(game.state, SessionState::Running);
    }
}
