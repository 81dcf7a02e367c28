//! Scenes: what each mode puts on screen.
//!
//! `draw_*` functions only talk to a [`Surface`]; `render_*` functions wrap
//! them for a ratatui frame through a [`CellCanvas`].

use super::canvas::CellCanvas;
use super::surface::Surface;
use crate::classic::{ClassicGame, SessionState};
use crate::evaluation::{Controller, Generation};
use crate::game::{Bird, Playfield, Rgb, SpriteSheet};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const LABEL: Rgb = Rgb(255, 255, 255);
const GUIDE: Rgb = Rgb(255, 0, 0);

/// Pipes first, then the ground over them.
pub fn draw_playfield<S: Surface>(surface: &mut S, playfield: &Playfield, sprites: &SpriteSheet) {
    for pipe in &playfield.pipes {
        surface.blit(&sprites.pipe_top, pipe.x, pipe.top, 0.0);
        surface.blit(&sprites.pipe_bottom, pipe.x, pipe.bottom, 0.0);
    }
    let base = &playfield.base;
    surface.blit(&sprites.base, base.x1, base.y, 0.0);
    surface.blit(&sprites.base, base.x2, base.y, 0.0);
}

pub fn draw_bird<S: Surface>(surface: &mut S, bird: &Bird, sprites: &SpriteSheet) {
    surface.blit(sprites.bird_frame(bird.frame), bird.x, bird.y, bird.tilt);
}

pub fn draw_classic<S: Surface>(surface: &mut S, game: &ClassicGame) {
    draw_playfield(surface, &game.playfield, &game.sprites);
    draw_bird(surface, &game.bird, &game.sprites);

    let (width, height) = surface.size();
    let score = format!("Score: {}", game.score());
    let x = width - 10.0 - surface.text_width(&score);
    surface.text(x, 10.0, &score, LABEL);

    let prompt = match game.state {
        SessionState::Ready => Some("[ Press Space to Start ]"),
        SessionState::GameOver => Some("Game Over - Space to retry, q to quit"),
        SessionState::Running => None,
    };
    if let Some(prompt) = prompt {
        let x = (width - surface.text_width(prompt)) / 2.0;
        surface.text(x.max(0.0), height / 2.0, prompt, LABEL);
    }
}

/// Generation number as displayed: one less than the 1-based counter.
pub fn generation_label(generation: u32) -> u32 {
    generation.max(1) - 1
}

pub fn draw_generation<S: Surface, C: Controller>(
    surface: &mut S,
    generation: &Generation<C>,
    generation_number: u32,
) {
    let sprites = generation.sprites();
    draw_playfield(surface, generation.playfield(), sprites);

    let target = generation.tracked_pipe();
    for agent in generation.agents() {
        if let Some(pipe) = target {
            let center = agent.bird.center();
            let gap_x = pipe.x + sprites.pipe_top.width() as f64 / 2.0;
            surface.line(center, (gap_x, pipe.height), GUIDE);
            surface.line(center, (gap_x, pipe.bottom), GUIDE);
        }
        draw_bird(surface, &agent.bird, sprites);
    }

    let (width, _) = surface.size();
    let score = format!("Score: {}", generation.playfield().score);
    let x = width - 15.0 - surface.text_width(&score);
    surface.text(x, 10.0, &score, LABEL);
    surface.text(
        10.0,
        10.0,
        &format!("Gens: {}", generation_label(generation_number)),
        LABEL,
    );
    surface.text(10.0, 50.0, &format!("Alive: {}", generation.alive()), LABEL);
}

pub fn render_classic(frame: &mut Frame, game: &ClassicGame) {
    let area = frame.size();
    let inner = framed(frame, area, " Flappy Bird ");
    let mut canvas = CellCanvas::for_tuning(inner.width, inner.height, &game.tuning);
    draw_classic(&mut canvas, game);
    frame.render_widget(Paragraph::new(canvas.lines()), inner);
}

pub fn render_generation<C: Controller>(
    frame: &mut Frame,
    generation: &Generation<C>,
    generation_number: u32,
) {
    let area = frame.size();
    let inner = framed(frame, area, " Flappy Bird NEAT ");
    let mut canvas = CellCanvas::for_tuning(inner.width, inner.height, generation.tuning());
    draw_generation(&mut canvas, generation, generation_number);
    frame.render_widget(Paragraph::new(canvas.lines()), inner);
}

fn framed(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classic::{process_input, ClassicInput};
    use crate::evaluation::Observation;
    use crate::game::{Pipe, Sprite, Tuning};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Records draw calls instead of drawing.
    #[derive(Default)]
    struct Recorder {
        blits: Vec<(&'static str, f64, f64)>,
        lines: Vec<((f64, f64), (f64, f64))>,
        texts: Vec<String>,
    }

    impl Surface for Recorder {
        fn size(&self) -> (f64, f64) {
            (600.0, 800.0)
        }

        fn blit(&mut self, sprite: &Sprite, x: f64, y: f64, _tilt: f64) {
            self.blits.push((sprite.name, x, y));
        }

        fn line(&mut self, from: (f64, f64), to: (f64, f64), _color: Rgb) {
            self.lines.push((from, to));
        }

        fn text(&mut self, _x: f64, _y: f64, text: &str, _color: Rgb) {
            self.texts.push(text.to_string());
        }

        fn text_width(&self, text: &str) -> f64 {
            text.len() as f64 * 10.0
        }
    }

    fn never() -> impl FnMut(&Observation) -> Vec<f64> {
        |_: &Observation| vec![0.0]
    }

    #[test]
    fn test_generation_label() {
        assert_eq!(generation_label(0), 0);
        assert_eq!(generation_label(1), 0);
        assert_eq!(generation_label(5), 4);
    }

    #[test]
    fn test_classic_scene_draw_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let game = ClassicGame::new(&mut rng);
        let mut surface = Recorder::default();
        draw_classic(&mut surface, &game);

        let names: Vec<&str> = surface.blits.iter().map(|b| b.0).collect();
        assert_eq!(names, vec!["pipe-top", "pipe-bottom", "base", "base", "bird-up"]);
        assert!(surface.texts.contains(&"Score: 0".to_string()));
        assert!(surface.texts.iter().any(|t| t.contains("Press Space")));
    }

    #[test]
    fn test_running_classic_scene_has_no_prompt() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut game = ClassicGame::new(&mut rng);
        process_input(&mut game, ClassicInput::Flap);
        let mut surface = Recorder::default();
        draw_classic(&mut surface, &game);
        assert_eq!(surface.texts, vec!["Score: 0".to_string()]);
    }

    #[test]
    fn test_guide_lines_drawn_per_bird_when_pipe_tracked() {
        let tuning = Tuning::evolution();
        let playfield = Playfield::with_pipes(&tuning, vec![Pipe::with_height(400.0, 250.0)]);
        let generation = Generation::with_playfield(vec![never(), never()], tuning, playfield);
        let mut surface = Recorder::default();
        draw_generation(&mut surface, &generation, 3);

        assert_eq!(surface.lines.len(), 4);
        let (from, to) = surface.lines[0];
        assert_eq!(from, (264.0, 374.0));
        assert_eq!(to, (452.0, 250.0));
        assert_eq!(surface.lines[1].1, (452.0, 450.0));
        assert!(surface.texts.contains(&"Gens: 2".to_string()));
        assert!(surface.texts.contains(&"Alive: 2".to_string()));
    }

    #[test]
    fn test_no_guide_lines_without_tracked_pipe() {
        let tuning = Tuning::evolution();
        let playfield = Playfield::with_pipes(&tuning, Vec::new());
        let generation = Generation::with_playfield(vec![never()], tuning, playfield);
        let mut surface = Recorder::default();
        draw_generation(&mut surface, &generation, 1);

        assert!(surface.lines.is_empty());
        assert!(surface.texts.contains(&"Gens: 0".to_string()));
    }

    #[test]
    fn test_cell_canvas_renders_scene() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let game = ClassicGame::new(&mut rng);
        let mut canvas = CellCanvas::for_tuning(55, 45, &game.tuning);
        draw_classic(&mut canvas, &game);
        let text: String = (0..canvas.rows()).map(|row| canvas.row_text(row)).collect();
        assert!(text.contains("Score: 0"));
        assert!(text.contains('▒'));
        assert!(text.contains('>'));
    }
}
