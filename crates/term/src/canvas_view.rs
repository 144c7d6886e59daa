//! CanvasView: maps a pixel canvas into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{PixelCanvas, SchedulePolicy, ViewerStats};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

const PIXEL_GLYPH: char = '█';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Text for the bottom row.
#[derive(Debug, Clone, Copy)]
pub struct StatusLine<'a> {
    pub endpoint: &'a str,
    pub connection: &'a str,
    pub policy: SchedulePolicy,
    pub stats: ViewerStats,
    /// Why the most recent frame was rejected, if any was.
    pub last_reject: Option<&'a str>,
}

impl StatusLine<'_> {
    pub fn text(&self) -> String {
        let s = &self.stats;
        let mut text = format!(
            " {} [{}] {} | recv {} drawn {} dropped {} ignored {} rejected {}",
            self.endpoint,
            self.connection,
            self.policy.as_str(),
            s.received,
            s.rendered,
            s.superseded,
            s.ignored,
            s.rejected,
        );
        if let Some(reason) = self.last_reject {
            text.push_str(" | last reject: ");
            text.push_str(reason);
        }
        text.push_str(" | q quit");
        text
    }
}

pub struct CanvasView {
    /// Terminal columns per pixel at scale 1.
    cell_w: u16,
    /// Terminal rows per pixel at scale 1.
    cell_h: u16,
    status_style: CellStyle,
}

impl Default for CanvasView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl CanvasView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            status_style: CellStyle::new(Rgb::new(210, 210, 210), Rgb::new(40, 44, 60)),
        }
    }

    /// Largest integer scale that fits the canvas above the status row.
    pub fn scale_for(&self, canvas: &PixelCanvas, viewport: Viewport) -> u16 {
        let px_w = (canvas.width() as u64).saturating_mul(self.cell_w as u64);
        let px_h = (canvas.height() as u64).saturating_mul(self.cell_h as u64);
        if px_w == 0 || px_h == 0 {
            return 1;
        }
        let avail_h = viewport.height.saturating_sub(1) as u64;
        let scale = (viewport.width as u64 / px_w).min(avail_h / px_h);
        scale.clamp(1, u16::MAX as u64) as u16
    }

    /// Render the canvas into an existing framebuffer.
    ///
    /// Pixels are scaled by whole blocks (nearest neighbor) and centered.
    /// Unpainted pixels stay blank.
    pub fn render_into(
        &self,
        canvas: &PixelCanvas,
        status: Option<&StatusLine<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        // u64 with saturation: block origins past the viewport are skipped below.
        let scale = self.scale_for(canvas, viewport) as u64;
        let block_w = self.cell_w as u64 * scale;
        let block_h = self.cell_h as u64 * scale;
        let image_w = (canvas.width() as u64).saturating_mul(block_w);
        let image_h = (canvas.height() as u64).saturating_mul(block_h);
        let avail_h = viewport.height.saturating_sub(1) as u64;

        let start_x = (viewport.width as u64).saturating_sub(image_w) / 2;
        let start_y = avail_h.saturating_sub(image_h) / 2;

        for y in 0..canvas.height() {
            let top = start_y.saturating_add((y as u64).saturating_mul(block_h));
            if top >= avail_h {
                break;
            }
            for x in 0..canvas.width() {
                let left = start_x.saturating_add((x as u64).saturating_mul(block_w));
                if left >= viewport.width as u64 {
                    break;
                }
                if let Some(rgb) = canvas.get(x, y) {
                    let h = block_h.min(avail_h - top);
                    fb.fill_rect(
                        left as u16,
                        top as u16,
                        block_w as u16,
                        h as u16,
                        CellStyle::solid(rgb).into_cell(PIXEL_GLYPH),
                    );
                }
            }
        }

        if let Some(status) = status {
            if viewport.height > 0 {
                let row = viewport.height - 1;
                fb.fill_rect(0, row, viewport.width, 1, self.status_style.into_cell(' '));
                fb.put_str(0, row, &status.text(), self.status_style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        canvas: &PixelCanvas,
        status: Option<&StatusLine<'_>>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, status, viewport, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Surface;

    fn canvas_2x2() -> PixelCanvas {
        let mut canvas = PixelCanvas::new(2, 2);
        canvas.set_fill(Rgb::new(255, 0, 0));
        canvas.fill_unit(1, 1);
        canvas
    }

    #[test]
    fn scale_picks_largest_fit() {
        let view = CanvasView::default();
        let canvas = canvas_2x2();
        // 2x2 pixels => 4x2 cells at scale 1; 4 rows above the status line.
        assert_eq!(view.scale_for(&canvas, Viewport::new(20, 5)), 2);
        assert_eq!(view.scale_for(&canvas, Viewport::new(3, 1)), 1);
        assert_eq!(view.scale_for(&PixelCanvas::new(0, 0), Viewport::new(3, 3)), 1);
    }

    #[test]
    fn scaled_pixels_are_centered_blocks() {
        let view = CanvasView::default();
        let fb = view.render(&canvas_2x2(), None, Viewport::new(20, 5));

        // Scale 2: each pixel is 4 columns by 2 rows, image is 8x4, x offset 6.
        for y in 2..4 {
            for x in 10..14 {
                let cell = fb.get(x, y).unwrap();
                assert_eq!(cell.ch, '█');
                assert_eq!(cell.style.fg, Rgb::new(255, 0, 0));
            }
        }
        assert_eq!(fb.get(9, 2).unwrap().ch, ' ');
        assert_eq!(fb.get(14, 2).unwrap().ch, ' ');
        // Unpainted pixel (0, 0).
        assert_eq!(fb.get(6, 0).unwrap().ch, ' ');
    }

    #[test]
    fn status_line_sits_on_last_row() {
        let view = CanvasView::default();
        let status = StatusLine {
            endpoint: "ws://localhost:9000",
            connection: "connected",
            policy: SchedulePolicy::Coalesce,
            stats: ViewerStats {
                received: 5,
                rendered: 2,
                superseded: 3,
                ..ViewerStats::default()
            },
            last_reject: None,
        };
        let fb = view.render(&canvas_2x2(), Some(&status), Viewport::new(120, 6));
        let row = fb.row_text(5);
        assert!(row.starts_with(" ws://localhost:9000 [connected] coalesce"));
        assert!(row.contains("recv 5 drawn 2 dropped 3"));
        assert!(!row.contains("last reject"));
    }

    #[test]
    fn status_line_shows_last_reject_reason() {
        let status = StatusLine {
            endpoint: "ws://localhost:9000",
            connection: "connected",
            policy: SchedulePolicy::Immediate,
            stats: ViewerStats {
                rejected: 1,
                ..ViewerStats::default()
            },
            last_reject: Some("unknown tile code 9 at column 1, row 0"),
        };
        assert_eq!(
            status.text(),
            " ws://localhost:9000 [connected] immediate | recv 0 drawn 0 dropped 0 \
             ignored 0 rejected 1 | last reject: unknown tile code 9 at column 1, row 0 \
             | q quit"
        );
    }

    #[test]
    fn tiny_viewport_clips_without_panicking() {
        let view = CanvasView::default();
        let mut canvas = PixelCanvas::new(13, 13);
        canvas.set_fill(Rgb::new(0, 0, 0));
        for y in 0..13 {
            for x in 0..13 {
                canvas.fill_unit(x, y);
            }
        }
        let fb = view.render(&canvas, None, Viewport::new(5, 3));
        assert_eq!(fb.get(0, 0).unwrap().ch, '█');
        assert_eq!(fb.get(4, 1).unwrap().ch, '█');
        // Status row stays free.
        assert_eq!(fb.get(0, 2).unwrap().ch, ' ');

        let empty = view.render(&canvas, None, Viewport::new(0, 0));
        assert_eq!(empty.width(), 0);
    }

    #[test]
    fn largest_canvas_fits_without_overflow() {
        let view = CanvasView::new(u16::MAX, u16::MAX);
        // side * 65535 * 65535 does not fit in u32.
        let side = 1024;
        let mut canvas = PixelCanvas::new(side, side);
        canvas.set_fill(Rgb::new(0, 0, 0));
        canvas.fill_unit(0, 0);
        canvas.fill_unit(side - 1, side - 1);

        let vp = Viewport::new(u16::MAX, u16::MAX);
        assert_eq!(view.scale_for(&canvas, vp), 1);

        let fb = view.render(&canvas, None, Viewport::new(8, 4));
        assert_eq!(fb.get(0, 0).unwrap().ch, '█');
        assert_eq!(fb.get(7, 2).unwrap().ch, '█');
    }
}
