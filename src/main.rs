//! Terminal quadris runner.
//!
//! Title screen → game session → game-over screen, all driven by one
//! cooperative polling loop. Each fall cycle samples the drop interval once
//! and then polls input in 10 ms slices, so a fast-drop toggle observed
//! mid-cycle only shortens the next wait.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal;

use tui_quadris::core::{GameState, StepOutcome};
use tui_quadris::input::{is_start_key, should_quit, HeldKey, KeyPoller};
use tui_quadris::term::{
    FrameBuffer, GameOverScreen, GameView, TerminalRenderer, TitleScreen, Viewport,
    GAME_OVER_STEP_MS,
};
use tui_quadris::types::{ShiftDir, POLL_SLICE_MS};

/// How long the title and game-over screens wait for their key before
/// giving up and moving on anyway.
const SCREEN_TIMEOUT: Duration = Duration::from_secs(10_000);

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = parse_seed_arg(&args)?.unwrap_or_else(clock_seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Parse an optional `--seed <u32>` argument.
fn parse_seed_arg(args: &[String]) -> Result<Option<u32>> {
    let mut seed = None;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(seed)
}

/// Time-based seed for runs without `--seed`.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, first_seed: u32) -> Result<()> {
    if !title_screen(term)? {
        return Ok(());
    }

    let mut seed = first_seed;
    loop {
        let Some(score) = play_session(term, seed)? else {
            // Quit mid-game.
            return Ok(());
        };

        if !game_over_screen(term, score)? {
            return Ok(());
        }
        seed = clock_seed();
    }
}

fn viewport() -> Viewport {
    let (w, h) = terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

/// Poll one key press, if any arrives within `timeout`.
///
/// Resize events invalidate the renderer as a side effect.
fn poll_key_press(term: &mut TerminalRenderer, timeout: Duration) -> Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        Event::Resize(..) => {
            term.invalidate();
            Ok(None)
        }
        _ => Ok(None),
    }
}

/// Show the title screen until Space (true), quit (false), or timeout
/// (proceed anyway, like the original cabinet-style attract screen).
fn title_screen(term: &mut TerminalRenderer) -> Result<bool> {
    term.invalidate();
    let deadline = Instant::now() + SCREEN_TIMEOUT;

    loop {
        let mut fb = TitleScreen::render(viewport());
        term.draw_swap(&mut fb)?;

        if Instant::now() >= deadline {
            return Ok(true);
        }
        if let Some(key) = poll_key_press(term, Duration::from_millis(200))? {
            if should_quit(key) {
                return Ok(false);
            }
            if is_start_key(key) {
                return Ok(true);
            }
        }
    }
}

/// Run one game session to its terminal condition.
///
/// Returns the final score, or `None` if the player quit mid-game.
fn play_session(term: &mut TerminalRenderer, seed: u32) -> Result<Option<u32>> {
    let mut game = GameState::new(seed);
    let view = GameView::default();
    let mut poller = KeyPoller::new();
    let mut fb = FrameBuffer::new(0, 0);

    term.invalidate();

    while game.spawn_next() {
        loop {
            // Sampled once per cycle: a fast-drop toggle seen during the
            // slices below applies to the next cycle's wait.
            let wait = Duration::from_millis(game.drop_interval_ms());
            let cycle_start = Instant::now();

            while cycle_start.elapsed() < wait {
                if !poll_slice(term, &mut poller)? {
                    return Ok(None);
                }

                poller.tick();
                if poller.is_held(HeldKey::Left) {
                    game.shift_active(ShiftDir::Left);
                }
                if poller.is_held(HeldKey::Right) {
                    game.shift_active(ShiftDir::Right);
                }
                if poller.take_rotate() {
                    game.rotate_active();
                }
                game.set_fast_drop(poller.is_held(HeldKey::FastDrop));

                draw_game(term, &view, &game, &mut fb)?;
            }

            if game.gravity_step() == StepOutcome::Locked {
                break;
            }
        }

        // Show the lock and any row sweep before the next spawn.
        draw_game(term, &view, &game, &mut fb)?;
        poller.reset();
    }

    draw_game(term, &view, &game, &mut fb)?;
    Ok(Some(game.score()))
}

/// One 10 ms poll slice: drain key/resize events until the slice elapses.
///
/// Returns false when the player quit.
fn poll_slice(term: &mut TerminalRenderer, poller: &mut KeyPoller) -> Result<bool> {
    let deadline = Instant::now() + Duration::from_millis(POLL_SLICE_MS);

    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() || !event::poll(left)? {
            return Ok(true);
        }
        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(false);
                }
                poller.handle_event(key);
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn draw_game(
    term: &mut TerminalRenderer,
    view: &GameView,
    game: &GameState,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let vp = viewport();
    fb.resize(vp.width, vp.height);
    view.render_into(game, fb);
    term.draw_swap(fb)
}

/// Animate the game-over banner, then wait for Space (exit) or R (restart).
///
/// Returns true to restart, false to exit (timeout exits too).
fn game_over_screen(term: &mut TerminalRenderer, score: u32) -> Result<bool> {
    term.invalidate();

    for step in 0..=GameOverScreen::total_steps() {
        let mut fb = GameOverScreen::render(viewport(), step, score);
        term.draw_swap(&mut fb)?;

        if let Some(key) = poll_key_press(term, Duration::from_millis(GAME_OVER_STEP_MS))? {
            if should_quit(key) {
                return Ok(false);
            }
        }
    }

    let deadline = Instant::now() + SCREEN_TIMEOUT;
    while Instant::now() < deadline {
        // Redraw so a resize mid-wait repaints the settled banner.
        let mut fb = GameOverScreen::render(viewport(), GameOverScreen::total_steps(), score);
        term.draw_swap(&mut fb)?;

        if let Some(key) = poll_key_press(term, Duration::from_millis(200))? {
            if should_quit(key) || is_start_key(key) {
                return Ok(false);
            }
            if matches!(
                key.code,
                crossterm::event::KeyCode::Char('r') | crossterm::event::KeyCode::Char('R')
            ) {
                return Ok(true);
            }
        }
    }

    Ok(false)
}
