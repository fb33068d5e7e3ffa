//! Collision engine — pure predicates over the grid and the active shape.
//!
//! The active piece's tiles are written into the grid while it falls, so a
//! naive occupancy test would see the piece colliding with itself. Every
//! predicate here treats "occupied by this same shape" as free, which is
//! what makes the in-place erase/shift/redraw mutation sequences legal.

use quadris_types::{ShiftDir, BOARD_HEIGHT, BOARD_WIDTH};

use crate::grid::Grid;
use crate::shape::{Shape, TilePos};

/// True iff one of the shape's tiles currently occupies (row, col).
pub fn tile_in_shape(shape: &Shape, row: i8, col: i8) -> bool {
    shape.tiles().iter().any(|&(r, c)| r == row && c == col)
}

/// True iff every tile can move one row down: the destination must be above
/// the floor and either empty or part of this same shape.
pub fn can_drop(grid: &Grid, shape: &Shape) -> bool {
    shape.tiles().iter().all(|&(row, col)| {
        let below = row + 1;
        if below >= BOARD_HEIGHT {
            return false;
        }
        !grid.is_occupied(below, col) || tile_in_shape(shape, below, col)
    })
}

/// True iff every tile can move one column in `dir`: the destination must be
/// inside the side walls and either empty or part of this same shape.
pub fn can_shift(grid: &Grid, shape: &Shape, dir: ShiftDir) -> bool {
    let dx = dir.dx();
    shape.tiles().iter().all(|&(row, col)| {
        let dest = col + dx;
        if dest < 0 || dest >= BOARD_WIDTH {
            return false;
        }
        !grid.is_occupied(row, dest) || tile_in_shape(shape, row, dest)
    })
}

/// True iff the shape could occupy `candidate` tiles: all inside the board
/// and either empty or part of the shape's current footprint. Gates
/// rotation.
pub fn can_occupy(grid: &Grid, shape: &Shape, candidate: &[TilePos; 4]) -> bool {
    candidate.iter().all(|&(row, col)| {
        if row < 0 || row >= BOARD_HEIGHT || col < 0 || col >= BOARD_WIDTH {
            return false;
        }
        !grid.is_occupied(row, col) || tile_in_shape(shape, row, col)
    })
}
