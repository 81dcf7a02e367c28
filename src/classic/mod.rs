//! The playable single-bird game.
//!
//! The player flaps to steer the bird through scrolling pipe gaps. Gravity
//! pulls the bird down each tick; touching a pipe, the floor or flying off the
//! top of the screen ends the game.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
