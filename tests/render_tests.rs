//! Rendering integration tests: the view and diff pipeline without a
//! terminal.

use tui_quadris::core::{GameState, StepOutcome};
use tui_quadris::term::renderer::for_each_changed_run;
use tui_quadris::term::{FrameBuffer, GameView, Viewport};

fn frame(view: &GameView, state: &GameState) -> FrameBuffer {
    view.render(state, Viewport::new(80, 24))
}

#[test]
fn test_idle_frames_diff_to_nothing() {
    let mut state = GameState::new(42);
    state.spawn_next();

    let view = GameView::default();
    let a = frame(&view, &state);
    let b = frame(&view, &state);

    let mut runs = 0;
    for_each_changed_run(&a, &b, |_, _, _| {
        runs += 1;
        Ok(())
    })
    .unwrap();
    assert_eq!(runs, 0);
}

#[test]
fn test_gravity_step_touches_only_piece_rows() {
    let mut state = GameState::new(42);
    state.spawn_next();

    let view = GameView::default();
    let before = frame(&view, &state);
    assert_eq!(state.gravity_step(), StepOutcome::Descended);
    let after = frame(&view, &state);

    let mut rows = Vec::new();
    for_each_changed_run(&before, &after, |_, y, _| {
        rows.push(y);
        Ok(())
    })
    .unwrap();

    assert!(!rows.is_empty());
    // A one-row descent disturbs at most the piece's five board rows.
    let min = *rows.iter().min().unwrap();
    let max = *rows.iter().max().unwrap();
    assert!(max - min <= 5, "changed rows {:?}", rows);
}

#[test]
fn test_score_change_redraws_readout() {
    use tui_quadris::types::{ShapeKind, BOARD_WIDTH};

    let mut state = GameState::new(42);
    state.spawn_next();
    let view = GameView::default();
    let before = frame(&view, &state);

    // Force a scoring sweep at the next lock.
    for col in 0..BOARD_WIDTH {
        state.grid_mut().set(19, col, Some(ShapeKind::Z));
    }
    while state.gravity_step() == StepOutcome::Descended {}
    assert_eq!(state.score(), 4);

    let after = frame(&view, &state);
    let mut changed = false;
    for_each_changed_run(&before, &after, |_, _, _| {
        changed = true;
        Ok(())
    })
    .unwrap();
    assert!(changed);
}
