//! Simulation core shared by the playable game and the evolution arena.
//!
//! Entities update independently each tick: the bird integrates gravity and
//! jumps, pipes scroll left, and the ground loops. Collision against pipes is
//! mask-accurate; the floor and ceiling are simple horizontal lines.

pub mod base;
pub mod bird;
pub mod mask;
pub mod pipe;
pub mod playfield;
pub mod sprites;
pub mod tuning;

pub use base::Base;
pub use bird::Bird;
pub use mask::Mask;
pub use pipe::Pipe;
pub use playfield::{PipeStep, Playfield};
pub use sprites::{Rgb, Sprite, SpriteSheet};
pub use tuning::{Tuning, Variant};
