//! TerminalRenderer: flushes framebuffers to a real terminal.
//!
//! Consecutive frames are diffed and only changed runs of cells reach the
//! terminal, which keeps redraw cost proportional to what actually moved —
//! during a fall that is a handful of cells per frame, not the whole board.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (resize, screen switch).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer`, repopulate it every frame, and pass
    /// it here; the renderer diffs against the previous frame and swaps
    /// buffers so neither side clones.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        if self.last.is_none() {
            // First frame after (re)entry: full redraw against a blank.
            self.full_redraw(fb)?;
            let mut prev = FrameBuffer::new(fb.width(), fb.height());
            std::mem::swap(&mut prev, fb);
            self.last = Some(prev);
            return Ok(());
        }

        let mut prev = self.last.take().unwrap_or_else(|| {
            FrameBuffer::new(fb.width(), fb.height())
        });

        if prev.width() != fb.width() || prev.height() != fb.height() {
            self.full_redraw(fb)?;
            prev.resize(fb.width(), fb.height());
        } else {
            self.diff_redraw(fb, &prev)?;
        }

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;

        let mut style: Option<Glyph> = None;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let glyph = fb.get(x, y).unwrap_or_default();
                self.print_glyph(glyph, &mut style)?;
            }
        }

        self.finish_frame()
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut style: Option<Glyph> = None;

        for_each_changed_run(prev, next, |x, y, len| {
            self.stdout.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let glyph = next.get(x + dx, y).unwrap_or_default();
                self.print_glyph(glyph, &mut style)?;
            }
            Ok(())
        })?;

        self.finish_frame()
    }

    /// Print one glyph, re-applying style only when it changes.
    fn print_glyph(&mut self, glyph: Glyph, current: &mut Option<Glyph>) -> Result<()> {
        let style_changed = match current {
            Some(prev) => {
                prev.fg != glyph.fg || prev.bg != glyph.bg || prev.bold != glyph.bold
            }
            None => true,
        };
        if style_changed {
            self.stdout.queue(SetAttribute(Attribute::Reset))?;
            self.stdout.queue(SetForegroundColor(glyph.fg))?;
            self.stdout.queue(SetBackgroundColor(glyph.bg))?;
            if glyph.bold {
                self.stdout.queue(SetAttribute(Attribute::Bold))?;
            }
        }
        *current = Some(glyph);
        self.stdout.queue(Print(glyph.ch))?;
        Ok(())
    }

    fn finish_frame(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Invoke `f(x, y, len)` for every horizontal run of cells that differs
/// between two equally-sized framebuffers.
pub fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: everything is dirty, one run per row.
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
