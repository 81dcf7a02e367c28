//! Terminal rendering.

pub mod canvas;
pub mod scene;
pub mod surface;
pub mod terminal;

pub use canvas::{Cell, CellCanvas};
pub use scene::{draw_classic, draw_generation, generation_label, render_classic, render_generation};
pub use surface::Surface;
pub use terminal::{key_action, poll_key, poll_until, KeyAction, TerminalGuard};
