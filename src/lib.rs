//! Flappy Bird with neuroevolution.
//!
//! The simulation core (`game`) is shared by the playable single-bird game
//! (`classic`) and the multi-agent arena (`evaluation`) that scores a
//! population of controllers. `evolution` breeds those controllers and `ui`
//! draws either mode in a terminal.

pub mod classic;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod evolution;
pub mod game;
pub mod logging;
pub mod ui;

pub use error::{ConfigError, Error, Result};
