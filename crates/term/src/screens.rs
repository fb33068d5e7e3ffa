//! Title and game-over screens.
//!
//! Pure frame composition: each screen renders a framebuffer for a given
//! animation step and the binary supplies the clock. The game-over banner
//! assembles itself line by line, bottom line first, each line falling from
//! the top of the banner area to its resting row — one row per step.

use crossterm::style::Color;

use crate::fb::{FrameBuffer, Viewport};

/// Milliseconds between game-over animation steps.
pub const GAME_OVER_STEP_MS: u64 = 250;

const TITLE_BANNER: [&str; 5] = [
    "╔════════════════════════════════╗",
    "║                                ║",
    "║        Q U A D R I S           ║",
    "║                                ║",
    "╚════════════════════════════════╝",
];

const GAME_OVER_BANNER: [&str; 5] = [
    " ██████   █████  ███    ███ ███████     ██████  ██    ██ ███████ ██████  ",
    "██       ██   ██ ████  ████ ██         ██    ██ ██    ██ ██      ██   ██ ",
    "██   ███ ███████ ██ ████ ██ █████      ██    ██ ██    ██ █████   ██████  ",
    "██    ██ ██   ██ ██  ██  ██ ██         ██    ██  ██  ██  ██      ██   ██ ",
    " ██████  ██   ██ ██      ██ ███████     ██████    ████   ███████ ██   ██ ",
];

/// Row every banner line starts its fall from.
const DROP_START_ROW: u16 = 2;

/// Resting row of the banner's top line.
const BANNER_TOP_ROW: u16 = 8;

fn centered_x(viewport: Viewport, text_width: usize) -> u16 {
    viewport.width.saturating_sub(text_width as u16) / 2
}

/// The static title screen.
pub struct TitleScreen;

impl TitleScreen {
    pub fn render(viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let x = centered_x(viewport, TITLE_BANNER[0].chars().count());
        for (i, line) in TITLE_BANNER.iter().enumerate() {
            fb.put_str_bold(x, 3 + i as u16, line, Color::Cyan);
        }

        let prompt = "[Space] Start...";
        fb.put_str(
            centered_x(viewport, prompt.len()),
            3 + TITLE_BANNER.len() as u16 + 3,
            prompt,
            Color::White,
        );

        fb
    }
}

/// The animated game-over screen.
pub struct GameOverScreen;

impl GameOverScreen {
    fn line_travel(line: usize) -> u16 {
        BANNER_TOP_ROW + line as u16 - DROP_START_ROW
    }

    /// Number of animation steps before the banner is fully assembled.
    pub fn total_steps() -> u16 {
        (0..GAME_OVER_BANNER.len())
            .rev()
            .map(|line| Self::line_travel(line) + 1)
            .sum()
    }

    /// Render the animation frame for `step`. Steps at or past
    /// [`total_steps`](Self::total_steps) render the settled banner plus the
    /// final score and exit prompt.
    pub fn render(viewport: Viewport, step: u16, score: u32) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let x = centered_x(viewport, GAME_OVER_BANNER[0].chars().count());

        // Walk lines bottom-to-top, spending each line's step budget.
        let mut remaining = step;
        for line in (0..GAME_OVER_BANNER.len()).rev() {
            let budget = Self::line_travel(line) + 1;
            let text = GAME_OVER_BANNER[line];

            if remaining >= budget {
                // This line has settled.
                fb.put_str_bold(x, BANNER_TOP_ROW + line as u16, text, Color::Red);
                remaining -= budget;
            } else {
                // This line is mid-fall; later (upper) lines have not
                // started yet.
                fb.put_str_bold(x, DROP_START_ROW + remaining, text, Color::Red);
                return fb;
            }
        }

        // Banner complete: show the score and the exit prompt.
        let score_line = format!("Score: {}", score);
        let prompt = "[Space] Exit    [R] Restart";
        let base = BANNER_TOP_ROW + GAME_OVER_BANNER.len() as u16 + 2;
        fb.put_str_bold(centered_x(viewport, score_line.len()), base, &score_line, Color::White);
        fb.put_str(centered_x(viewport, prompt.len()), base + 2, prompt, Color::Grey);

        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).map(|g| g.ch).unwrap_or(' '))
            .collect()
    }

    #[test]
    fn title_screen_shows_banner_and_prompt() {
        let fb = TitleScreen::render(Viewport::new(80, 24));
        let all: String = (0..24).map(|y| row_text(&fb, y)).collect();
        assert!(all.contains("Q U A D R I S"));
        assert!(all.contains("[Space] Start..."));
    }

    #[test]
    fn game_over_first_step_shows_bottom_line_at_top() {
        let fb = GameOverScreen::render(Viewport::new(100, 30), 0, 42);
        // The bottom banner line starts its fall at the drop start row.
        let row = row_text(&fb, DROP_START_ROW);
        assert!(row.contains("██████"));
        // Nothing has settled yet.
        assert!(!row_text(&fb, BANNER_TOP_ROW + 4).contains('█'));
    }

    #[test]
    fn game_over_final_step_shows_score_and_prompt() {
        let steps = GameOverScreen::total_steps();
        let fb = GameOverScreen::render(Viewport::new(100, 30), steps, 42);

        let all: String = (0..30).map(|y| row_text(&fb, y)).collect();
        assert!(all.contains("Score: 42"));
        assert!(all.contains("[Space] Exit"));

        // Every banner line is at its resting row.
        for line in 0..GAME_OVER_BANNER.len() {
            assert!(row_text(&fb, BANNER_TOP_ROW + line as u16).contains('█'));
        }
    }

    #[test]
    fn animation_settles_lines_bottom_first() {
        // After exactly the bottom line's budget, it rests and the next line
        // appears at the drop start row.
        let bottom_budget = GameOverScreen::line_travel(4) + 1;
        let fb = GameOverScreen::render(Viewport::new(100, 30), bottom_budget, 0);

        assert!(row_text(&fb, BANNER_TOP_ROW + 4).contains('█'));
        assert!(row_text(&fb, DROP_START_ROW).contains('█'));
    }

    #[test]
    fn steps_past_the_end_stay_settled() {
        let steps = GameOverScreen::total_steps();
        let a = GameOverScreen::render(Viewport::new(100, 30), steps, 7);
        let b = GameOverScreen::render(Viewport::new(100, 30), steps + 50, 7);
        assert_eq!(a, b);
    }
}
