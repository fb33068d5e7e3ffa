//! Grid integration tests.

use tui_quadris::core::Grid;
use tui_quadris::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), BOARD_WIDTH);
    assert_eq!(grid.height(), BOARD_HEIGHT);

    for row in 0..BOARD_HEIGHT {
        for col in 0..BOARD_WIDTH {
            assert!(grid.is_empty(row, col), "({}, {}) should be empty", row, col);
        }
    }
}

#[test]
fn test_grid_out_of_bounds() {
    let mut grid = Grid::new();

    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(BOARD_HEIGHT, 0), None);
    assert_eq!(grid.get(0, BOARD_WIDTH), None);

    assert!(!grid.set(BOARD_HEIGHT, 0, Some(ShapeKind::I)));
    assert!(!grid.is_empty(-1, 0));
    assert!(!grid.is_occupied(-1, 0));
}

#[test]
fn test_compaction_preserves_row_content() {
    let mut grid = Grid::new();

    // Row 19 full; row 18 has a single gap at column 7.
    for col in 0..BOARD_WIDTH {
        grid.set(19, col, Some(ShapeKind::I));
        if col != 7 {
            grid.set(18, col, Some(ShapeKind::L));
        }
    }

    let removed = grid.compact_full_rows();
    assert_eq!(removed.as_slice(), &[19]);

    // Row 19 now equals the old row 18, gap included.
    for col in 0..BOARD_WIDTH {
        if col == 7 {
            assert!(grid.is_empty(19, col));
        } else {
            assert_eq!(grid.get(19, col), Some(Some(ShapeKind::L)));
        }
    }
    // And the top row is fresh.
    for col in 0..BOARD_WIDTH {
        assert!(grid.is_empty(0, col));
    }
}

#[test]
fn test_compaction_of_four_rows() {
    let mut grid = Grid::new();
    for row in 16..20 {
        for col in 0..BOARD_WIDTH {
            grid.set(row, col, Some(ShapeKind::O));
        }
    }
    // A floating survivor above the stack.
    grid.set(15, 3, Some(ShapeKind::Z));

    let removed = grid.compact_full_rows();
    assert_eq!(removed.len(), 4);
    assert_eq!(grid.get(19, 3), Some(Some(ShapeKind::Z)));
    assert!(grid.is_empty(15, 3));
}
