//! The scrolling ground strip.

use super::sprites::BASE_WIDTH;

/// Two copies of the ground tile leap-frogging each other so the strip
/// appears to scroll forever.
#[derive(Debug, Clone, PartialEq)]
pub struct Base {
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
}

impl Base {
    pub fn new(y: f64) -> Self {
        Self {
            y,
            x1: 0.0,
            x2: Self::tile_width(),
        }
    }

    pub fn tile_width() -> f64 {
        BASE_WIDTH as f64
    }

    /// Scroll left; a tile that leaves the screen jumps behind the other one.
    pub fn advance(&mut self, velocity: f64) {
        let width = Self::tile_width();
        self.x1 -= velocity;
        self.x2 -= velocity;

        if self.x1 + width < 0.0 {
            self.x1 = self.x2 + width;
        }
        if self.x2 + width < 0.0 {
            self.x2 = self.x1 + width;
        }
    }
}
