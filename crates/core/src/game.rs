//! Game state — the per-piece lifecycle and the session it runs in.
//!
//! A session repeats spawn → fall → lock until a freshly spawned piece
//! cannot make its very first drop. The real-time envelope (sleep slices,
//! key polling, frame drawing) lives in the binary; this module exposes a
//! step API so the whole lifecycle is drivable from tests.
//!
//! The active piece's tiles are written into the grid for its entire fall.
//! Moving it is an erase → mutate → redraw sequence, which is why the
//! collision predicates tolerate self-overlap. Locking is therefore
//! implicit: the tiles just stay where they are.

use quadris_types::{ShiftDir, DROP_INTERVAL_MS, FAST_DROP_INTERVAL_MS};

use crate::clearing::sweep_full_rows;
use crate::collision::{can_drop, can_occupy, can_shift};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::shape::Shape;

/// Outcome of one gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece moved one row down and keeps falling.
    Descended,
    /// The piece could not drop and its tiles are now terrain.
    Locked,
}

/// Complete session state.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<Shape>,
    /// Successful gravity steps for the current piece.
    drops: u32,
    score: u32,
    game_over: bool,
    /// Held fast-drop key state. Read once per fall cycle via
    /// [`drop_interval_ms`](Self::drop_interval_ms), so a toggle observed
    /// mid-cycle takes effect on the next wait.
    fast_drop: bool,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            drops: 0,
            score: 0,
            game_over: false,
            fast_drop: false,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Shape> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Gravity steps the current piece has survived.
    pub fn drops(&self) -> u32 {
        self.drops
    }

    /// Mutable grid access for tests and headless board setup.
    ///
    /// Gameplay code never reaches for this; the step API owns all
    /// in-session mutation.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Spawn the next piece: draw a uniformly random kind, place it at the
    /// fixed origin, and write its tiles into the grid.
    ///
    /// The spawn draws through whatever is already there; the terminal
    /// condition is the first-drop check, not the overlap. If the fresh
    /// piece already fails [`can_drop`] the game-over flag is set, the piece
    /// never locks, and `false` is returned.
    pub fn spawn_next(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let kind = self.rng.next_shape();
        let shape = Shape::spawn(kind);
        self.grid.fill_tiles(shape.tiles(), kind);
        self.drops = 0;

        let alive = can_drop(&self.grid, &shape);
        self.active = Some(shape);
        if !alive {
            // The stack has reached the spawn rows.
            self.game_over = true;
        }
        alive
    }

    /// Apply one collision-checked horizontal move to the active piece.
    pub fn shift_active(&mut self, dir: ShiftDir) -> bool {
        let Some(shape) = self.active.as_mut() else {
            return false;
        };
        if !can_shift(&self.grid, shape, dir) {
            return false;
        }

        self.grid.erase_tiles(shape.tiles());
        shape.shift(dir.dx());
        self.grid.fill_tiles(shape.tiles(), shape.kind());
        true
    }

    /// Attempt one clockwise rotation of the active piece.
    ///
    /// The rotated footprint must fit: inside the board, and crossing only
    /// empty cells or the piece's own current tiles. An illegal rotation
    /// leaves pattern, origin, tiles, and grid untouched.
    pub fn rotate_active(&mut self) -> bool {
        let Some(shape) = self.active.as_mut() else {
            return false;
        };
        let rotated = shape.rotated_tiles();
        if !can_occupy(&self.grid, shape, &rotated) {
            return false;
        }

        self.grid.erase_tiles(shape.tiles());
        shape.rotate();
        self.grid.fill_tiles(shape.tiles(), shape.kind());
        true
    }

    /// Record the held state of the fast-drop key.
    pub fn set_fast_drop(&mut self, held: bool) {
        self.fast_drop = held;
    }

    /// The wait for the upcoming fall cycle, in milliseconds.
    ///
    /// Callers sample this once per cycle, before the cycle's own wait, so
    /// a fast-drop toggle during the wait only shortens the next one.
    pub fn drop_interval_ms(&self) -> u64 {
        if self.fast_drop {
            FAST_DROP_INTERVAL_MS
        } else {
            DROP_INTERVAL_MS
        }
    }

    /// Perform one gravity step: descend if possible, otherwise lock the
    /// piece, sweep full rows, and update the score.
    pub fn gravity_step(&mut self) -> StepOutcome {
        let Some(shape) = self.active.as_mut() else {
            return StepOutcome::Locked;
        };

        if can_drop(&self.grid, shape) {
            self.grid.erase_tiles(shape.tiles());
            shape.descend();
            self.grid.fill_tiles(shape.tiles(), shape.kind());
            self.drops += 1;
            return StepOutcome::Descended;
        }

        // Lock: the tiles already live in the grid; just release the piece
        // and sweep.
        self.active = None;
        let outcome = sweep_full_rows(&mut self.grid);
        self.score += outcome.points;
        StepOutcome::Locked
    }
}
