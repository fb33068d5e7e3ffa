//! Line clearing and scoring.
//!
//! After every lock the grid is swept bottom-to-top: full rows are removed,
//! surviving rows compact downward, and points are awarded from a fixed
//! table. The table tops out at four rows — the most a single lock can
//! complete — and the lookup clamps rather than read past the end if that
//! invariant is ever violated upstream.

use arrayvec::ArrayVec;

use quadris_types::LINE_SCORES;

use crate::grid::Grid;

/// Result of one post-lock sweep.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SweepOutcome {
    /// Removed row indices, bottom-to-top scan order.
    pub rows: ArrayVec<i8, 4>,
    /// Points awarded for this sweep.
    pub points: u32,
}

/// Points for clearing `count` rows in a single sweep.
///
/// Zero rows award zero points; counts above four clamp to the last table
/// entry (with a debug assertion, since the board cannot produce them).
pub fn score_for_rows(count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    debug_assert!(count <= LINE_SCORES.len(), "swept more than 4 rows");
    let index = count.min(LINE_SCORES.len()) - 1;
    LINE_SCORES[index]
}

/// Remove all full rows from the grid and score the removal.
pub fn sweep_full_rows(grid: &mut Grid) -> SweepOutcome {
    let rows = grid.compact_full_rows();
    let points = score_for_rows(rows.len());
    SweepOutcome { rows, points }
}
