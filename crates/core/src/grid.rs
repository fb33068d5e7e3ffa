//! Grid module — the authoritative board state.
//!
//! A 20-row × 10-column board stored as a flat row-major array for cache
//! locality. Coordinates are (row, col): row 0 is the top, column 0 is the
//! left. The active piece's tiles live *in* the grid while it falls, so the
//! collision predicates in [`crate::collision`] must tolerate self-overlap.

use arrayvec::ArrayVec;

use quadris_types::{Cell, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board.
const GRID_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board — 20 rows × 10 columns of [`Cell`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array, row-major (row * WIDTH + col).
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid.
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Flat index for (row, col), or `None` when out of bounds.
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT || col < 0 || col >= BOARD_WIDTH {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> i8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> i8 {
        BOARD_HEIGHT
    }

    /// Cell at (row, col); `None` if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff (row, col) is inside the board and empty.
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// True iff (row, col) is inside the board and filled.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// True iff all 10 cells of `row` are filled.
    pub fn is_row_full(&self, row: i8) -> bool {
        let Some(start) = Self::index(row, 0) else {
            return false;
        };
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Copy the cells of `src_row` into `dst_row`.
    ///
    /// Rows keep their left-right content; only the vertical position moves.
    fn copy_row(&mut self, src_row: i8, dst_row: i8) {
        let (Some(src), Some(dst)) = (Self::index(src_row, 0), Self::index(dst_row, 0)) else {
            return;
        };
        if src != dst {
            self.cells.copy_within(src..src + BOARD_WIDTH as usize, dst);
        }
    }

    /// Blank out one row.
    fn clear_row(&mut self, row: i8) {
        if let Some(start) = Self::index(row, 0) {
            for cell in &mut self.cells[start..start + BOARD_WIDTH as usize] {
                *cell = None;
            }
        }
    }

    /// Remove every full row, compacting the survivors downward.
    ///
    /// Scans bottom-to-top with a write cursor: each non-full row is copied
    /// down into the next free slot starting at row 19, then the rows left
    /// above the cursor are blanked. Returns the removed row indices in
    /// bottom-to-top scan order. A single lock cannot complete more than 4
    /// rows on this board, which is what the capacity encodes; any row past
    /// that is still removed but not recorded.
    pub fn compact_full_rows(&mut self) -> ArrayVec<i8, 4> {
        let mut removed = ArrayVec::new();
        let mut write_row = BOARD_HEIGHT - 1;

        for read_row in (0..BOARD_HEIGHT).rev() {
            if self.is_row_full(read_row) {
                let recorded = removed.try_push(read_row).is_ok();
                debug_assert!(recorded, "more than 4 full rows in one sweep");
            } else {
                self.copy_row(read_row, write_row);
                write_row -= 1;
            }
        }

        for row in 0..=write_row {
            self.clear_row(row);
        }

        removed
    }

    /// Write a shape kind into a set of tiles, ignoring out-of-bounds ones.
    pub fn fill_tiles(&mut self, tiles: &[(i8, i8)], kind: ShapeKind) {
        for &(row, col) in tiles {
            self.set(row, col, Some(kind));
        }
    }

    /// Blank a set of tiles, ignoring out-of-bounds ones.
    pub fn erase_tiles(&mut self, tiles: &[(i8, i8)]) {
        for &(row, col) in tiles {
            self.set(row, col, None);
        }
    }

    /// Reference to the flat cell array (row-major).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
