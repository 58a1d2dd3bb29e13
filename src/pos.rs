//! Grid cell addresses.

use std::fmt;

/// 2D grid cell address with i64 row and column components.
///
/// Equality is structural: two positions are equal iff both rows are equal
/// and both columns are equal. `Hash` agrees with equality, and the derived
/// total order is row-major (rows compare first, then columns), so a
/// `Position` behaves correctly as a key in hashed and ordered containers.
///
/// Both components are fixed at construction. Rust's reference types make a
/// comparison against an absent position unrepresentable; callers holding an
/// optional coordinate use `Option<Position>`, where `None` compares unequal
/// to every `Some`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: i64,
    col: i64,
}

impl Position {
    /// The (0, 0) cell.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a position naming the cell at `row`, `col`.
    ///
    /// Total: accepts any values, including negative ones. Whether the cell
    /// exists is decided by the consuming grid, not here.
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    pub const fn row(&self) -> i64 {
        self.row
    }

    pub const fn col(&self) -> i64 {
        self.col
    }
}

impl From<(i64, i64)> for Position {
    fn from(value: (i64, i64)) -> Self {
        Position::new(value.0, value.1)
    }
}

impl From<Position> for (i64, i64) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
