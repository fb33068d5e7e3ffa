//! Shape module — 4×4 occupancy patterns and the rotation transform.
//!
//! Every shape lives in a 4×4 boolean frame with exactly four set cells.
//! Rotation is a 90° clockwise transform applied to the frame in place:
//! transpose along the main diagonal, then swap columns 0↔3 and 1↔2. The
//! transform does not recenter the shape, so a piece may drift inside its
//! frame across rotations (the O square walks around its frame and returns
//! home after four turns).

use quadris_types::{ShapeKind, SPAWN_COL, SPAWN_ROW};

/// A 4×4 occupancy frame, indexed `[row][col]`.
pub type Pattern = [[bool; 4]; 4];

/// An absolute grid position, (row, col).
pub type TilePos = (i8, i8);

const I_PATTERN: Pattern = pattern_from_rows([0b0100, 0b0100, 0b0100, 0b0100]);
const O_PATTERN: Pattern = pattern_from_rows([0b0110, 0b0110, 0b0000, 0b0000]);
const L_PATTERN: Pattern = pattern_from_rows([0b0100, 0b0100, 0b0110, 0b0000]);
const Z_PATTERN: Pattern = pattern_from_rows([0b0100, 0b0110, 0b0010, 0b0000]);

/// Expand four row bitmasks (bit 3 = column 0) into a boolean frame.
const fn pattern_from_rows(rows: [u8; 4]) -> Pattern {
    let mut out = [[false; 4]; 4];
    let mut r = 0;
    while r < 4 {
        let mut c = 0;
        while c < 4 {
            out[r][c] = rows[r] & (1 << (3 - c)) != 0;
            c += 1;
        }
        r += 1;
    }
    out
}

/// Canonical spawn pattern for a shape kind.
pub fn pattern_for(kind: ShapeKind) -> Pattern {
    match kind {
        ShapeKind::I => I_PATTERN,
        ShapeKind::O => O_PATTERN,
        ShapeKind::L => L_PATTERN,
        ShapeKind::Z => Z_PATTERN,
    }
}

/// Rotate a frame 90° clockwise in place: transpose, then reverse column
/// order (swap columns 0↔3 and 1↔2).
pub fn rotate_pattern(pattern: &mut Pattern) {
    for row in 0..4 {
        for col in row + 1..4 {
            let tmp = pattern[row][col];
            pattern[row][col] = pattern[col][row];
            pattern[col][row] = tmp;
        }
    }
    for row in pattern.iter_mut() {
        row.swap(0, 3);
        row.swap(1, 2);
    }
}

/// Absolute tile positions implied by a pattern and an origin, in row-major
/// scan order. That order defines tile indexing throughout the crate.
pub fn tiles_for(pattern: &Pattern, origin: TilePos) -> [TilePos; 4] {
    let mut tiles = [(0i8, 0i8); 4];
    let mut count = 0usize;
    for (r, row) in pattern.iter().enumerate() {
        for (c, &set) in row.iter().enumerate() {
            if set && count < tiles.len() {
                tiles[count] = (origin.0 + r as i8, origin.1 + c as i8);
                count += 1;
            }
        }
    }
    debug_assert_eq!(count, 4, "shape pattern must have exactly 4 set cells");
    tiles
}

/// The active falling piece.
///
/// Invariant: `tiles` always equals `tiles_for(&pattern, origin)`. Every
/// mutation of pattern or origin goes through a method that re-derives the
/// cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    pattern: Pattern,
    origin: TilePos,
    tiles: [TilePos; 4],
}

impl Shape {
    /// Create a shape of `kind` with its frame's top-left at `origin`.
    pub fn new(kind: ShapeKind, origin: TilePos) -> Self {
        let pattern = pattern_for(kind);
        let tiles = tiles_for(&pattern, origin);
        Self {
            kind,
            pattern,
            origin,
            tiles,
        }
    }

    /// Create a shape at the fixed spawn origin (row 0, column 3).
    pub fn spawn(kind: ShapeKind) -> Self {
        Self::new(kind, (SPAWN_ROW, SPAWN_COL))
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn origin(&self) -> TilePos {
        self.origin
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The cached absolute tile positions, row-major scan order.
    pub fn tiles(&self) -> &[TilePos; 4] {
        &self.tiles
    }

    fn rebuild_tiles(&mut self) {
        self.tiles = tiles_for(&self.pattern, self.origin);
    }

    /// Move the frame one row down.
    pub fn descend(&mut self) {
        self.origin.0 += 1;
        self.rebuild_tiles();
    }

    /// Move the frame one column sideways.
    pub fn shift(&mut self, dx: i8) {
        self.origin.1 += dx;
        self.rebuild_tiles();
    }

    /// Tile positions this shape would occupy after one clockwise rotation,
    /// without mutating it. Used to gate rotation legality.
    pub fn rotated_tiles(&self) -> [TilePos; 4] {
        let mut pattern = self.pattern;
        rotate_pattern(&mut pattern);
        tiles_for(&pattern, self.origin)
    }

    /// Rotate the frame 90° clockwise and refresh the tile cache.
    pub fn rotate(&mut self) {
        rotate_pattern(&mut self.pattern);
        self.rebuild_tiles();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_cells(pattern: &Pattern) -> usize {
        pattern.iter().flatten().filter(|&&b| b).count()
    }

    #[test]
    fn every_pattern_has_four_cells() {
        for kind in ShapeKind::ALL {
            assert_eq!(set_cells(&pattern_for(kind)), 4, "{:?}", kind);
        }
    }

    #[test]
    fn four_rotations_restore_every_pattern() {
        for kind in ShapeKind::ALL {
            let original = pattern_for(kind);
            let mut pattern = original;
            for turn in 1..=4 {
                rotate_pattern(&mut pattern);
                if turn < 4 {
                    // The I bar aside, no kind is symmetric under a single
                    // quarter turn in this frame.
                    if kind != ShapeKind::I || turn % 2 == 1 {
                        assert_ne!(pattern, original, "{:?} after {} turns", kind, turn);
                    }
                }
            }
            assert_eq!(pattern, original, "{:?} after 4 turns", kind);
        }
    }

    #[test]
    fn i_bar_rotates_between_column_and_row() {
        let mut pattern = pattern_for(ShapeKind::I);
        rotate_pattern(&mut pattern);
        // Vertical bar in column 1 becomes a horizontal bar in row 1.
        assert_eq!(pattern[1], [true, true, true, true]);
        for r in [0, 2, 3] {
            assert_eq!(pattern[r], [false; 4]);
        }
    }

    #[test]
    fn o_square_drifts_without_recentering() {
        let mut pattern = pattern_for(ShapeKind::O);
        rotate_pattern(&mut pattern);
        // Transpose + column reverse parks the square at rows 1-2, cols 2-3.
        let mut expected = [[false; 4]; 4];
        for r in 1..=2 {
            for c in 2..=3 {
                expected[r][c] = true;
            }
        }
        assert_eq!(pattern, expected);
    }

    #[test]
    fn spawn_tiles_match_pattern_and_origin() {
        let shape = Shape::spawn(ShapeKind::O);
        assert_eq!(shape.tiles(), &[(0, 4), (0, 5), (1, 4), (1, 5)]);

        let shape = Shape::spawn(ShapeKind::I);
        assert_eq!(shape.tiles(), &[(0, 4), (1, 4), (2, 4), (3, 4)]);
    }

    #[test]
    fn descend_and_shift_keep_cache_consistent() {
        let mut shape = Shape::spawn(ShapeKind::L);
        shape.descend();
        shape.shift(1);
        assert_eq!(shape.origin(), (1, 4));
        assert_eq!(*shape.tiles(), tiles_for(shape.pattern(), shape.origin()));
    }

    #[test]
    fn rotate_keeps_cache_consistent() {
        let mut shape = Shape::new(ShapeKind::Z, (5, 3));
        let preview = shape.rotated_tiles();
        shape.rotate();
        assert_eq!(*shape.tiles(), preview);
        assert_eq!(*shape.tiles(), tiles_for(shape.pattern(), shape.origin()));
    }

    #[test]
    fn tiles_scan_row_major() {
        // L at origin (0, 3): pattern rows scan top-down, left-right.
        let shape = Shape::spawn(ShapeKind::L);
        assert_eq!(shape.tiles(), &[(0, 4), (1, 4), (2, 4), (2, 5)]);
    }
}
