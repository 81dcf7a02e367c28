//! Per-pixel opacity masks for pixel-accurate collision.

/// Opaque/transparent classification of every pixel of a sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: i32,
    height: i32,
    /// Row-major opacity bits.
    bits: Vec<bool>,
}

impl Mask {
    /// Create a fully transparent mask.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            bits: vec![false; (width * height) as usize],
        }
    }

    /// Create a mask whose opacity is decided per pixel.
    pub fn from_fn<F>(width: i32, height: i32, mut opaque: F) -> Self
    where
        F: FnMut(i32, i32) -> bool,
    {
        let mut mask = Self::new(width, height);
        for y in 0..mask.height {
            for x in 0..mask.width {
                if opaque(x, y) {
                    mask.set(x, y, true);
                }
            }
        }
        mask
    }

    /// Create a fully opaque mask.
    pub fn filled(width: i32, height: i32) -> Self {
        Self::from_fn(width, height, |_, _| true)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Opacity at a pixel. Out-of-range pixels are transparent.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y * self.width + x) as usize]
    }

    /// Set opacity at a pixel. Out-of-range writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, opaque: bool) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.bits[(y * self.width + x) as usize] = opaque;
    }

    /// Number of opaque pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// Mirror the mask top-to-bottom.
    pub fn flipped_vertically(&self) -> Self {
        Self::from_fn(self.width, self.height, |x, y| {
            self.get(x, self.height - 1 - y)
        })
    }

    /// First pixel where `other`, placed at `offset` relative to this mask's
    /// top-left corner, overlaps an opaque pixel of this mask.
    ///
    /// The returned point is in this mask's coordinates. Scans row by row so
    /// the result is deterministic.
    pub fn overlap(&self, other: &Mask, offset: (i32, i32)) -> Option<(i32, i32)> {
        let (dx, dy) = offset;

        let x_start = dx.max(0);
        let y_start = dy.max(0);
        let x_end = (dx + other.width).min(self.width);
        let y_end = (dy + other.height).min(self.height);

        if x_start >= x_end || y_start >= y_end {
            return None;
        }

        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x, y) && other.get(x - dx, y - dy) {
                    return Some((x, y));
                }
            }
        }
        None
    }
}
