//! Core game logic — pure, deterministic, and testable.
//!
//! Everything in this crate runs without a terminal: the grid, the shapes,
//! the collision predicates, row clearing and scoring, the RNG, and the
//! per-piece / per-session state machine. The binary supplies real time
//! (sleep slices) and real input; the core only ever sees the results.
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 board with bounds-checked cells and row compaction
//! - [`shape`]: 4x4 occupancy patterns, rotation transform, tile cache
//! - [`collision`]: pure can-drop / can-shift / self-overlap predicates
//! - [`clearing`]: full-row sweep and the fixed scoring table
//! - [`rng`]: seedable LCG and uniform shape selection
//! - [`game`]: spawn → fall → lock lifecycle and session state
//!
//! # Example
//!
//! ```
//! use quadris_core::GameState;
//! use quadris_types::ShiftDir;
//!
//! let mut game = GameState::new(12345);
//! assert!(game.spawn_next());
//!
//! game.shift_active(ShiftDir::Right);
//! game.rotate_active();
//!
//! // Drive gravity until the piece locks.
//! while game.gravity_step() == quadris_core::StepOutcome::Descended {}
//! assert!(!game.game_over());
//! ```

pub mod clearing;
pub mod collision;
pub mod game;
pub mod grid;
pub mod rng;
pub mod shape;

pub use quadris_types as types;

// Re-export commonly used types for convenience
pub use clearing::{score_for_rows, sweep_full_rows, SweepOutcome};
pub use collision::{can_drop, can_occupy, can_shift, tile_in_shape};
pub use game::{GameState, StepOutcome};
pub use grid::Grid;
pub use rng::SimpleRng;
pub use shape::{rotate_pattern, Pattern, Shape, TilePos};
