//! GameView: maps the core game state into a terminal framebuffer.
//!
//! Pure composition, no I/O. The active piece's tiles live in the grid, so
//! drawing the grid draws the piece; there is no separate overlay pass.

use crossterm::style::Color;

use quadris_core::GameState;
use quadris_types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::fb::{FrameBuffer, Glyph, Viewport};

/// Display color for a shape kind.
pub fn kind_color(kind: ShapeKind) -> Color {
    match kind {
        ShapeKind::I => Color::Cyan,
        ShapeKind::O => Color::Yellow,
        ShapeKind::L => Color::DarkYellow,
        ShapeKind::Z => Color::Red,
    }
}

/// Renders the playfield, the controls panel, and the score readout.
pub struct GameView {
    /// Board cell width in terminal columns (2 compensates for the typical
    /// terminal glyph aspect ratio).
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Top-left corner of the board frame for a given viewport.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render the current game state into a fresh framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, &mut fb);
        fb
    }

    /// Render the current game state, reusing the caller's framebuffer.
    pub fn render_into(&self, state: &GameState, fb: &mut FrameBuffer) {
        fb.clear();

        let viewport = Viewport::new(fb.width(), fb.height());
        let (start_x, start_y) = self.frame_origin(viewport);
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;

        fb.draw_border(start_x, start_y, frame_w, frame_h, Color::Grey);

        // Board cells. The active piece is part of the grid.
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                let x = start_x + 1 + (col as u16) * self.cell_w;
                let y = start_y + 1 + row as u16;
                match state.grid().get(row, col).flatten() {
                    Some(kind) => {
                        let glyph = Glyph::new('█', kind_color(kind)).bold();
                        for dx in 0..self.cell_w {
                            fb.set(x + dx, y, glyph);
                        }
                    }
                    None => {
                        fb.set(x, y, Glyph::new('·', Color::DarkGrey));
                    }
                }
            }
        }

        // Title above the frame.
        let title = "Q U A D R I S";
        let title_x = start_x + (frame_w.saturating_sub(title.len() as u16)) / 2;
        fb.put_str_bold(title_x, start_y.saturating_sub(1), title, Color::White);

        self.draw_controls(fb, start_y);
        self.draw_score(fb, state, start_x + frame_w + 3, start_y + 1);
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, start_y: u16) {
        let lines = [
            "Controls:",
            " [A]/[←]  Left",
            " [D]/[→]  Right",
            " [W]/[↑]  Rotate",
            " [S]/[↓]  Fast Drop",
            " [Q]      Quit",
        ];
        for (i, line) in lines.iter().enumerate() {
            fb.put_str(1, start_y + 1 + i as u16, line, Color::Grey);
        }
    }

    fn draw_score(&self, fb: &mut FrameBuffer, state: &GameState, x: u16, y: u16) {
        fb.put_str_bold(x, y, &format!("Score: {}", state.score()), Color::White);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadris_types::ShiftDir;

    fn cell_xy(view: &GameView, viewport: Viewport, row: i8, col: i8) -> (u16, u16) {
        let (sx, sy) = view.frame_origin(viewport);
        (sx + 1 + (col as u16) * 2, sy + 1 + row as u16)
    }

    #[test]
    fn spawned_tiles_render_as_blocks() {
        let mut state = GameState::new(12345);
        assert!(state.spawn_next());
        let kind = state.active().unwrap().kind();
        let tiles = *state.active().unwrap().tiles();

        let view = GameView::default();
        let viewport = Viewport::new(80, 24);
        let fb = view.render(&state, viewport);

        for (row, col) in tiles {
            let (x, y) = cell_xy(&view, viewport, row, col);
            let glyph = fb.get(x, y).unwrap();
            assert_eq!(glyph.ch, '█');
            assert_eq!(glyph.fg, kind_color(kind));
        }
    }

    #[test]
    fn empty_cells_render_as_dots() {
        let state = GameState::new(1);
        let view = GameView::default();
        let viewport = Viewport::new(80, 24);
        let fb = view.render(&state, viewport);

        let (x, y) = cell_xy(&view, viewport, 19, 0);
        assert_eq!(fb.get(x, y).unwrap().ch, '·');
    }

    #[test]
    fn score_readout_appears_right_of_frame() {
        let state = GameState::new(1);
        let view = GameView::default();
        let fb = view.render(&state, Viewport::new(80, 24));

        let row: String = (0..80)
            .map(|x| fb.get(x, 2).map(|g| g.ch).unwrap_or(' '))
            .collect();
        assert!(row.contains("Score: 0"), "row was: {:?}", row);
    }

    #[test]
    fn moves_reflect_in_consecutive_frames() {
        let mut state = GameState::new(12345);
        assert!(state.spawn_next());

        let view = GameView::default();
        let viewport = Viewport::new(80, 24);
        let before = view.render(&state, viewport);

        assert!(state.shift_active(ShiftDir::Right));
        let after = view.render(&state, viewport);
        assert_ne!(before, after);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut state = GameState::new(7);
        state.spawn_next();
        let view = GameView::default();
        let fb = view.render(&state, Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
    }
}
