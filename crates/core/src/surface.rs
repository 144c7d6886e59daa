//! Drawing surfaces.
//!
//! A surface only knows two operations: pick a fill color, then paint a 1x1
//! rectangle at `(x, y)`. That is all the renderer needs, and it keeps the
//! terminal out of the core.

use crate::types::Rgb;

/// Pixel-addressed sink for fill operations.
pub trait Surface {
    fn set_fill(&mut self, color: Rgb);

    /// Paint the unit rectangle at column `x`, row `y` with the current fill.
    fn fill_unit(&mut self, x: usize, y: usize);
}

/// Fixed-size pixel grid. `None` marks a pixel that was never painted.
///
/// Fills outside the canvas are clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    fill: Rgb,
    pixels: Vec<Option<Rgb>>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            fill: Rgb::default(),
            pixels: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Option<Rgb>] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        self.idx(x, y).and_then(|i| self.pixels[i])
    }
}

impl Surface for PixelCanvas {
    fn set_fill(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn fill_unit(&mut self, x: usize, y: usize) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = Some(self.fill);
        }
    }
}

/// One recorded fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOp {
    pub x: usize,
    pub y: usize,
    pub color: Rgb,
}

/// Surface that remembers every fill, in call order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    fill: Rgb,
    ops: Vec<FillOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[FillOp] {
        &self.ops
    }

    /// Remove and return the recorded fills.
    pub fn take_ops(&mut self) -> Vec<FillOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Surface for RecordingSurface {
    fn set_fill(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn fill_unit(&mut self, x: usize, y: usize) {
        self.ops.push(FillOp {
            x,
            y,
            color: self.fill,
        });
    }
}
