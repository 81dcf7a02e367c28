//! Bird physics: jump impulse, gravity integration, tilt and wing animation.

use super::mask::Mask;
use super::sprites::{SpriteSheet, BIRD_HEIGHT, BIRD_WIDTH};
use super::tuning::Tuning;
use crate::constants::*;

/// A bird. Position and velocity only change through [`Bird::jump`] and
/// [`Bird::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Horizontal position, fixed for the whole run.
    pub x: f64,
    /// Top edge of the sprite (y grows downward).
    pub y: f64,
    /// Velocity set by the last jump (negative = upward).
    pub velocity: f64,
    /// Ticks since the last jump.
    pub tick_count: u32,
    /// Tilt in degrees, positive = nose up.
    pub tilt: f64,
    /// Y at the last jump.
    pub launch_height: f64,
    /// Animation ticks elapsed in the current wing cycle.
    pub animation_count: u32,
    /// Current wing frame (index into the sprite sheet).
    pub frame: usize,
}

impl Bird {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            tick_count: 0,
            tilt: 0.0,
            launch_height: y,
            animation_count: 0,
            frame: 0,
        }
    }

    /// Bird at the standard start position.
    pub fn at_start() -> Self {
        Self::new(BIRD_START_X, BIRD_START_Y)
    }

    /// Instantaneous upward impulse.
    pub fn jump(&mut self) {
        self.velocity = JUMP_VELOCITY;
        self.tick_count = 0;
        self.launch_height = self.y;
    }

    /// Advance one tick. Returns the displacement after the terminal-speed
    /// clamp and before the jump boost.
    pub fn advance(&mut self, tuning: &Tuning) -> f64 {
        self.tick_count += 1;
        let t = self.tick_count as f64;

        let clamped = (self.velocity * t + 0.5 * tuning.gravity * t * t)
            .clamp(-MAX_DISPLACEMENT, MAX_DISPLACEMENT);

        let mut displacement = clamped;
        if displacement < 0.0 {
            displacement -= JUMP_BOOST;
        }
        self.y += displacement;

        if displacement < 0.0 || self.y < self.launch_height + TILT_HOLD_DISTANCE {
            if self.tilt < MAX_ROTATION {
                self.tilt = MAX_ROTATION;
            }
        } else if self.tilt > MIN_ROTATION {
            self.tilt = (self.tilt - ROTATION_VELOCITY).max(MIN_ROTATION);
        }

        clamped
    }

    /// Step the wing animation one tick: frames 0, 1, 2, 1 each held for
    /// `ANIMATION_TIME` ticks. A nose-diving bird holds its wings level.
    pub fn animate(&mut self) {
        self.animation_count += 1;

        if self.animation_count <= ANIMATION_TIME {
            self.frame = 0;
        } else if self.animation_count <= ANIMATION_TIME * 2 {
            self.frame = 1;
        } else if self.animation_count <= ANIMATION_TIME * 3 {
            self.frame = 2;
        } else if self.animation_count <= ANIMATION_TIME * 4 {
            self.frame = 1;
        } else {
            self.frame = 0;
            self.animation_count = 0;
        }

        if self.tilt <= NOSE_DIVE_TILT {
            self.frame = 1;
            self.animation_count = ANIMATION_TIME * 2;
        }
    }

    pub fn width(&self) -> f64 {
        BIRD_WIDTH as f64
    }

    pub fn height(&self) -> f64 {
        BIRD_HEIGHT as f64
    }

    /// Sprite centre, used as the origin of guide lines.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width() / 2.0, self.y + self.height() / 2.0)
    }

    /// True once the bird has hit the floor or flown above the ceiling bound.
    pub fn is_out_of_bounds(&self, tuning: &Tuning) -> bool {
        self.y + self.height() - tuning.floor_margin >= tuning.floor_y || self.y < CEILING_Y
    }

    /// Mask of the current wing frame.
    pub fn mask<'a>(&self, sprites: &'a SpriteSheet) -> &'a Mask {
        &sprites.bird_frame(self.frame).mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bird_defaults() {
        let bird = Bird::at_start();
        assert!((bird.x - 230.0).abs() < f64::EPSILON);
        assert!((bird.y - 350.0).abs() < f64::EPSILON);
        assert_eq!(bird.tick_count, 0);
        assert_eq!(bird.frame, 0);
        assert!((bird.tilt).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jump_records_launch_height() {
        let mut bird = Bird::new(230.0, 412.0);
        bird.tick_count = 7;
        bird.jump();
        assert!((bird.velocity - JUMP_VELOCITY).abs() < f64::EPSILON);
        assert_eq!(bird.tick_count, 0);
        assert!((bird.launch_height - 412.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_tick_after_jump() {
        let tuning = Tuning::evolution();
        let mut bird = Bird::new(230.0, 350.0);
        bird.jump();
        let displacement = bird.advance(&tuning);
        assert!((displacement - (-9.0)).abs() < 1e-9);
        // Jump boost adds 2px of lift on top
        assert!((bird.y - 339.0).abs() < 1e-9);
        assert!((bird.tilt - MAX_ROTATION).abs() < f64::EPSILON);
    }

    #[test]
    fn test_free_fall_first_tick() {
        let tuning = Tuning::classic();
        let mut bird = Bird::new(230.0, 350.0);
        let displacement = bird.advance(&tuning);
        assert!((displacement - 1.5).abs() < 1e-9);
        assert!((bird.y - 351.5).abs() < 1e-9);
    }

    #[test]
    fn test_terminal_speed_clamp() {
        let tuning = Tuning::evolution();
        let mut bird = Bird::new(230.0, 0.0);
        for _ in 0..30 {
            let displacement = bird.advance(&tuning);
            assert!(displacement.abs() <= MAX_DISPLACEMENT);
        }
        // Deep into free fall every tick moves exactly 16px
        let before = bird.y;
        bird.advance(&tuning);
        assert!((bird.y - before - MAX_DISPLACEMENT).abs() < 1e-9);
    }

    #[test]
    fn test_upward_clamp_applies_before_boost() {
        let tuning = Tuning::evolution();
        let mut bird = Bird::new(230.0, 400.0);
        bird.jump();
        bird.advance(&tuning); // -9
        bird.advance(&tuning); // -15
        let before = bird.y;
        let displacement = bird.advance(&tuning); // raw -18
        assert!((displacement + MAX_DISPLACEMENT).abs() < 1e-9);
        assert!((bird.y - (before - MAX_DISPLACEMENT - JUMP_BOOST)).abs() < 1e-9);
    }

    #[test]
    fn test_tilt_descends_at_fixed_rate_and_floors() {
        let tuning = Tuning::evolution();
        let mut bird = Bird::new(230.0, 100.0);
        bird.tilt = MAX_ROTATION;
        // Push the bird well below its launch height so it counts as falling
        bird.launch_height = -1000.0;
        let mut previous = bird.tilt;
        for _ in 0..10 {
            bird.advance(&tuning);
            assert!(bird.tilt >= MIN_ROTATION);
            if previous > MIN_ROTATION {
                let expected = (previous - ROTATION_VELOCITY).max(MIN_ROTATION);
                assert!((bird.tilt - expected).abs() < 1e-9);
            }
            previous = bird.tilt;
        }
        assert!((bird.tilt - MIN_ROTATION).abs() < f64::EPSILON);
    }

    #[test]
    fn test_animation_cycle() {
        let mut bird = Bird::at_start();
        let mut frames = Vec::new();
        for _ in 0..21 {
            bird.animate();
            frames.push(bird.frame);
        }
        assert_eq!(&frames[0..5], &[0; 5]);
        assert_eq!(&frames[5..10], &[1; 5]);
        assert_eq!(&frames[10..15], &[2; 5]);
        assert_eq!(&frames[15..20], &[1; 5]);
        assert_eq!(frames[20], 0);
        assert_eq!(bird.animation_count, 0);
    }

    #[test]
    fn test_nose_dive_holds_level_wings() {
        let mut bird = Bird::at_start();
        bird.tilt = -85.0;
        bird.animate();
        assert_eq!(bird.frame, 1);
        assert_eq!(bird.animation_count, ANIMATION_TIME * 2);
    }

    #[test]
    fn test_out_of_bounds() {
        let tuning = Tuning::evolution();
        let mut bird = Bird::new(230.0, 691.0);
        assert!(!bird.is_out_of_bounds(&tuning));
        bird.y = 692.0;
        assert!(bird.is_out_of_bounds(&tuning));
        bird.y = -50.0;
        assert!(!bird.is_out_of_bounds(&tuning));
        bird.y = -50.5;
        assert!(bird.is_out_of_bounds(&tuning));
    }
}
