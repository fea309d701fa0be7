//! Cell coordinates and the diagonal addressing scheme.
//!
//! ## Diagonal keys
//!
//! Every cell sits on exactly one diagonal of each orientation. The
//! diagonal is identified by an integer key derived from the cell:
//!
//! - Major diagonal (top-left to bottom-right): `col - row`,
//!   ranging over `-(n-1)..=(n-1)`.
//! - Minor diagonal (top-right to bottom-left): `col + row`,
//!   ranging over `0..=2(n-1)`.
//!
//! ```
//! use queens_conflicts::core::Cell;
//!
//! let cell = Cell::new(1, 3);
//! assert_eq!(cell.major_diagonal(), 2);
//! assert_eq!(cell.minor_diagonal(), 4);
//!
//! // Cells on the same major diagonal share the key.
//! assert_eq!(Cell::new(0, 0).major_diagonal(), Cell::new(2, 2).major_diagonal());
//! ```

use serde::{Deserialize, Serialize};

/// A board coordinate. Row 0 is topmost, column 0 leftmost.
///
/// A `Cell` carries no board size; whether it lies on a given board is
/// checked by [`Board::contains`](crate::core::Board::contains).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Key of the major diagonal through this cell (`col - row`).
    #[must_use]
    pub const fn major_diagonal(self) -> isize {
        self.col as isize - self.row as isize
    }

    /// Key of the minor diagonal through this cell (`col + row`).
    #[must_use]
    pub const fn minor_diagonal(self) -> isize {
        self.col as isize + self.row as isize
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
