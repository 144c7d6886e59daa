//! FrameRenderer: paints a screen onto a surface, one unit fill per tile.

use crate::surface::Surface;
use crate::types::{ColorTable, Screen};

/// Stateless screen painter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameRenderer {
    colors: ColorTable,
}

impl FrameRenderer {
    pub fn new(colors: ColorTable) -> Self {
        Self { colors }
    }

    /// Paint every tile of `screen` at its `(col, row)` position.
    ///
    /// Returns the number of fills issued (`width * height`).
    pub fn render<S: Surface + ?Sized>(&self, screen: &Screen, surface: &mut S) -> usize {
        let mut fills = 0;
        for (col, row, tile) in screen.iter_tiles() {
            surface.set_fill(self.colors.color(tile).rgb());
            surface.fill_unit(col, row);
            fills += 1;
        }
        fills
    }
}
