//! Sprite dimensions and silhouettes.
//!
//! Sprites are generated procedurally at the sizes of the classic art
//! (scaled 2x): a 68x48 bird with three wing frames, a 104x640 pipe with a
//! wider lip, and a 672x224 ground tile. The renderer only needs the glyph and
//! colour hints; the simulation only needs dimensions and masks.

use super::mask::Mask;

pub const BIRD_WIDTH: i32 = 68;
pub const BIRD_HEIGHT: i32 = 48;
pub const PIPE_WIDTH: i32 = 104;
pub const PIPE_HEIGHT: i32 = 640;
pub const PIPE_LIP_HEIGHT: i32 = 48;
pub const PIPE_LIP_OVERHANG: i32 = 4;
pub const BASE_WIDTH: i32 = 672;
pub const BASE_HEIGHT: i32 = 224;

/// Number of wing frames in the bird animation.
pub const BIRD_FRAMES: usize = 3;

/// A display colour hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A sprite: its silhouette plus rendering hints.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub name: &'static str,
    pub mask: Mask,
    pub glyph: char,
    pub color: Rgb,
}

impl Sprite {
    pub fn width(&self) -> i32 {
        self.mask.width()
    }

    pub fn height(&self) -> i32 {
        self.mask.height()
    }
}

/// Every sprite the game draws or collides with.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub bird: [Sprite; BIRD_FRAMES],
    pub pipe_top: Sprite,
    pub pipe_bottom: Sprite,
    pub base: Sprite,
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteSheet {
    pub fn new() -> Self {
        let pipe_bottom = pipe_mask();
        let pipe_top = pipe_bottom.flipped_vertically();

        Self {
            bird: [
                bird_sprite("bird-up", WingPose::Up),
                bird_sprite("bird-level", WingPose::Level),
                bird_sprite("bird-down", WingPose::Down),
            ],
            pipe_top: Sprite {
                name: "pipe-top",
                mask: pipe_top,
                glyph: '█',
                color: Rgb(100, 170, 40),
            },
            pipe_bottom: Sprite {
                name: "pipe-bottom",
                mask: pipe_bottom,
                glyph: '█',
                color: Rgb(100, 170, 40),
            },
            base: Sprite {
                name: "base",
                mask: Mask::filled(BASE_WIDTH, BASE_HEIGHT),
                glyph: '▒',
                color: Rgb(210, 185, 110),
            },
        }
    }

    /// Bird sprite for an animation frame. Out-of-range frames wrap.
    pub fn bird_frame(&self, frame: usize) -> &Sprite {
        &self.bird[frame % BIRD_FRAMES]
    }
}

#[derive(Debug, Clone, Copy)]
enum WingPose {
    Up,
    Level,
    Down,
}

fn bird_sprite(name: &'static str, pose: WingPose) -> Sprite {
    let (cx, cy) = (34.0, 24.0);
    let (rx, ry) = (30.0, 20.0);

    let mask = Mask::from_fn(BIRD_WIDTH, BIRD_HEIGHT, |x, y| {
        let nx = (x as f64 + 0.5 - cx) / rx;
        let ny = (y as f64 + 0.5 - cy) / ry;
        let body = nx * nx + ny * ny <= 1.0;
        let beak = (60..68).contains(&x) && (22..30).contains(&y);
        let wing = match pose {
            WingPose::Up => (10..26).contains(&x) && (0..8).contains(&y),
            WingPose::Level => (0..20).contains(&x) && (20..28).contains(&y),
            WingPose::Down => (10..26).contains(&x) && (40..48).contains(&y),
        };
        body || beak || wing
    });

    Sprite {
        name,
        mask,
        glyph: '>',
        color: Rgb(245, 200, 66),
    }
}

/// Bottom pipe silhouette: a full-width lip on top of a slightly narrower body.
fn pipe_mask() -> Mask {
    Mask::from_fn(PIPE_WIDTH, PIPE_HEIGHT, |x, y| {
        y < PIPE_LIP_HEIGHT || (PIPE_LIP_OVERHANG..PIPE_WIDTH - PIPE_LIP_OVERHANG).contains(&x)
    })
}
