//! Pipe pairs and pixel-accurate collision against birds.

use super::bird::Bird;
use super::sprites::{SpriteSheet, PIPE_HEIGHT, PIPE_WIDTH};
use crate::constants::{PIPE_GAP, PIPE_HEIGHT_MAX, PIPE_HEIGHT_MIN};
use rand::Rng;

/// A top/bottom pipe pair with a gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge; decreases every tick.
    pub x: f64,
    /// Gap top edge (bottom of the top pipe), sampled once.
    pub height: f64,
    /// Top edge of the top pipe sprite.
    pub top: f64,
    /// Top edge of the bottom pipe sprite (bottom of the gap).
    pub bottom: f64,
    /// Whether the bird has passed this pipe (for scoring).
    pub passed: bool,
}

impl Pipe {
    /// Spawn a pipe at `x` with a random gap height in `[50, 450)`.
    pub fn spawn<R: Rng>(x: f64, rng: &mut R) -> Self {
        let height = rng.gen_range(PIPE_HEIGHT_MIN..PIPE_HEIGHT_MAX) as f64;
        Self::with_height(x, height)
    }

    /// Pipe with a fixed gap height.
    pub fn with_height(x: f64, height: f64) -> Self {
        Self {
            x,
            height,
            top: height - PIPE_HEIGHT as f64,
            bottom: height + PIPE_GAP,
            passed: false,
        }
    }

    /// Scroll left.
    pub fn advance(&mut self, velocity: f64) {
        self.x -= velocity;
    }

    pub fn width(&self) -> f64 {
        PIPE_WIDTH as f64
    }

    /// Right edge of the pipe.
    pub fn right(&self) -> f64 {
        self.x + self.width()
    }

    /// True once the whole pipe has scrolled past the left edge.
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }

    /// Mask-accurate overlap test between the bird's current frame and either
    /// half of the pipe.
    pub fn collides(&self, bird: &Bird, sprites: &SpriteSheet) -> bool {
        let bird_mask = bird.mask(sprites);
        let bird_y = bird.y.round();

        let dx = (self.x - bird.x).round() as i32;
        let top_offset = (dx, (self.top - bird_y) as i32);
        let bottom_offset = (dx, (self.bottom - bird_y) as i32);

        bird_mask
            .overlap(&sprites.pipe_bottom.mask, bottom_offset)
            .is_some()
            || bird_mask
                .overlap(&sprites.pipe_top.mask, top_offset)
                .is_some()
    }
}
