//! Drawing primitives the scenes are written against.
//!
//! Coordinates are logical window pixels (the simulation's units). A surface
//! decides how those map onto whatever it actually draws to.

use crate::game::{Rgb, Sprite};

pub trait Surface {
    /// Logical size in pixels.
    fn size(&self) -> (f64, f64);

    /// Draw a sprite with its top-left corner at `(x, y)`, rotated by `tilt`
    /// degrees (positive = nose up).
    fn blit(&mut self, sprite: &Sprite, x: f64, y: f64, tilt: f64);

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb);

    /// Draw text with its top-left corner at `(x, y)`.
    fn text(&mut self, x: f64, y: f64, text: &str, color: Rgb);

    /// Logical width `text` would occupy.
    fn text_width(&self, text: &str) -> f64;
}
