//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw. Every other frame only rewrites the runs of cells that
//! differ from the previous one.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The caller keeps passing the same `FrameBuffer`. After the call it holds
    /// the previous frame, ready to be overwritten without a new allocation.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            Some(mut prev) => {
                encode_full_into(fb, &mut self.buf)?;
                prev.resize(fb.width(), fb.height());
                prev
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            pen.print(out, cell.ch, cell.style)?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Nothing but a color reset is emitted when the frames are equal.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();

    for run in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        let start = run.x as usize;
        for cell in &next.row(run.y)[start..start + run.len as usize] {
            pen.print(out, cell.ch, cell.style)?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Tracks the active style so colors are only re-sent on change.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, ch: char, style: CellStyle) -> Result<()> {
        if self.style != Some(style) {
            out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
            out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
            self.style = Some(style);
        }
        out.queue(Print(ch))?;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal span of cells in `next` that must be rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

/// Spans where `next` differs from `prev`, row by row, left to right.
///
/// Frames of different sizes share no cells, so every row of `next` is one run.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    let same_size = prev.width() == next.width() && prev.height() == next.height();
    let mut runs = Vec::new();

    for y in 0..next.height() {
        let row = next.row(y);
        if !same_size {
            runs.push(Run { x: 0, y, len: next.width() });
            continue;
        }

        let old = prev.row(y);
        let mut open: Option<u16> = None;
        for (x, (a, b)) in (0u16..).zip(old.iter().zip(row)) {
            match (a != b, open) {
                (true, None) => open = Some(x),
                (false, Some(start)) => {
                    runs.push(Run { x: start, y, len: x - start });
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(start) = open {
            runs.push(Run { x: start, y, len: next.width() - start });
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(a: &FrameBuffer, b: &FrameBuffer) -> Vec<(u16, u16, u16)> {
        changed_runs(a, b)
            .into_iter()
            .map(|r| (r.x, r.y, r.len))
            .collect()
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        let red = CellStyle::solid(Rgb::new(255, 0, 0)).into_cell('█');

        for x in 1..=3 {
            b.set(x, 0, red);
        }
        b.set(5, 1, red);

        assert_eq!(runs(&a, &b), vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn run_reaching_row_end_is_closed() {
        let a = FrameBuffer::new(4, 1);
        let mut b = FrameBuffer::new(4, 1);
        let cell = CellStyle::default().into_cell('x');
        b.set(0, 0, cell);
        b.set(2, 0, cell);
        b.set(3, 0, cell);

        assert_eq!(runs(&a, &b), vec![(0, 0, 1), (2, 0, 2)]);
    }

    #[test]
    fn diff_rewrites_only_changed_glyphs() {
        let a = FrameBuffer::new(5, 1);
        let mut b = a.clone();
        b.put_str(3, 0, "QZ", CellStyle::default());

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();

        let mut expected = Vec::new();
        expected.queue(cursor::MoveTo(3, 0)).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(out.starts_with(&expected));
        assert!(text.contains("QZ"));
        assert_eq!(text.matches(' ').count(), 0);
    }

    #[test]
    fn size_change_marks_every_row() {
        let a = FrameBuffer::new(2, 2);
        let b = FrameBuffer::new(3, 2);
        assert_eq!(runs(&a, &b), vec![(0, 0, 3), (0, 1, 3)]);
    }

    #[test]
    fn equal_frames_encode_only_a_reset() {
        let fb = FrameBuffer::new(4, 4);
        let mut diff = Vec::new();
        encode_diff_into(&fb, &fb, &mut diff).unwrap();

        let mut reset = Vec::new();
        reset.queue(ResetColor).unwrap();
        assert_eq!(diff, reset);
    }

    #[test]
    fn full_encode_contains_every_glyph() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set(0, 0, CellStyle::default().into_cell('A'));
        fb.set(1, 0, CellStyle::default().into_cell('B'));

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("AB"));
    }
}
