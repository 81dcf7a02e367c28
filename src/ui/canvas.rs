//! Terminal cell buffer implementing [`Surface`].
//!
//! The logical window is scaled onto a grid of cells. Sprites are sampled at
//! each cell's centre through their mask, so transparent corners stay
//! transparent on screen just as they do for collisions.

use super::surface::Surface;
use crate::game::{Rgb, Sprite, Tuning};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Cell in the render buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

pub struct CellCanvas {
    cols: usize,
    rows: usize,
    logical_width: f64,
    logical_height: f64,
    cells: Vec<Cell>,
}

impl CellCanvas {
    pub fn new(cols: u16, rows: u16, logical_width: f64, logical_height: f64) -> Self {
        let (cols, rows) = (cols as usize, rows as usize);
        Self {
            cols,
            rows,
            logical_width: logical_width.max(1.0),
            logical_height: logical_height.max(1.0),
            cells: vec![Cell::default(); cols * rows],
        }
    }

    /// Canvas covering a variant's whole window.
    pub fn for_tuning(cols: u16, rows: u16, tuning: &Tuning) -> Self {
        Self::new(cols, rows, tuning.window_width, tuning.window_height)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cells per logical pixel, horizontally and vertically.
    fn scale(&self) -> (f64, f64) {
        (
            self.cols as f64 / self.logical_width,
            self.rows as f64 / self.logical_height,
        )
    }

    fn to_cell(&self, x: f64, y: f64) -> (i64, i64) {
        let (sx, sy) = self.scale();
        ((x * sx).floor() as i64, (y * sy).floor() as i64)
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    fn put(&mut self, col: i64, row: i64, ch: char, fg: Color) {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return;
        }
        let index = row as usize * self.cols + col as usize;
        if let Some(cell) = self.cells.get_mut(index) {
            cell.ch = ch;
            cell.fg = fg;
        }
    }

    /// Characters of one row, for inspection.
    pub fn row_text(&self, row: usize) -> String {
        (0..self.cols)
            .filter_map(|col| self.cell(col, row))
            .map(|cell| cell.ch)
            .collect()
    }

    /// Convert the buffer into styled lines, merging runs of equal style.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.rows);
        for row in self.cells.chunks(self.cols.max(1)).take(self.rows) {
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut current_fg = Color::Reset;
            let mut current_bg = Color::Reset;
            let mut current_text = String::new();

            for cell in row {
                if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current_text),
                        Style::default().fg(current_fg).bg(current_bg),
                    ));
                }
                current_fg = cell.fg;
                current_bg = cell.bg;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(
                    current_text,
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

impl Surface for CellCanvas {
    fn size(&self) -> (f64, f64) {
        (self.logical_width, self.logical_height)
    }

    fn blit(&mut self, sprite: &Sprite, x: f64, y: f64, tilt: f64) {
        let (sx, sy) = self.scale();
        let (col_start, row_start) = self.to_cell(x, y);
        let (col_end, row_end) = self.to_cell(x + sprite.width() as f64, y + sprite.height() as f64);
        let glyph = if tilt == 0.0 {
            sprite.glyph
        } else {
            tilt_glyph(tilt)
        };
        let fg = color(sprite.color);

        let col_start = col_start.max(0);
        let row_start = row_start.max(0);
        let col_end = col_end.min(self.cols as i64 - 1);
        let row_end = row_end.min(self.rows as i64 - 1);

        for row in row_start..=row_end {
            let sample_y = ((row as f64 + 0.5) / sy - y).floor() as i32;
            for col in col_start..=col_end {
                let sample_x = ((col as f64 + 0.5) / sx - x).floor() as i32;
                if sprite.mask.get(sample_x, sample_y) {
                    self.put(col, row, glyph, fg);
                }
            }
        }
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color_hint: Rgb) {
        let (c0, r0) = self.to_cell(from.0, from.1);
        let (c1, r1) = self.to_cell(to.0, to.1);
        let steps = (c1 - c0).abs().max((r1 - r0).abs()).max(1);
        let fg = color(color_hint);
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let col = c0 as f64 + (c1 - c0) as f64 * t;
            let row = r0 as f64 + (r1 - r0) as f64 * t;
            self.put(col.round() as i64, row.round() as i64, '·', fg);
        }
    }

    fn text(&mut self, x: f64, y: f64, text: &str, color_hint: Rgb) {
        let (col, row) = self.to_cell(x, y);
        let fg = color(color_hint);
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i64, row, ch, fg);
        }
    }

    fn text_width(&self, text: &str) -> f64 {
        let (sx, _) = self.scale();
        text.chars().count() as f64 / sx
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Terminal stand-in for a rotated sprite.
fn tilt_glyph(tilt: f64) -> char {
    if tilt > 0.0 {
        '/'
    } else if tilt > -45.0 {
        '>'
    } else {
        'v'
    }
}
