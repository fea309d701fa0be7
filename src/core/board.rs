//! The N×N occupancy board.
//!
//! ## Layout
//!
//! Cells are stored row-major in a flat `Vec<u8>` next to an explicit `n`.
//! Row 0 is topmost, column 0 leftmost. Every entry is [`EMPTY`] or
//! [`PIECE`]; constructors reject anything else.
//!
//! ## Mutation
//!
//! [`Board::toggle`] is the only mutation. The board does not notify
//! anyone; wrap it in [`ObservedBoard`](crate::events::ObservedBoard)
//! when a collaborator needs to hear about changes.
//!
//! ## Example
//!
//! ```
//! use queens_conflicts::core::Board;
//!
//! let mut board = Board::empty(4);
//! board.toggle(0, 1).unwrap();
//! board.toggle(2, 1).unwrap();
//!
//! assert_eq!(board.piece_count(), 2);
//! assert!(board.conflicts().has_any_col_conflicts());
//! assert!(!board.conflicts().has_any_row_conflicts());
//! ```

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::{ConstructionError, IndexError, Result};
use super::params::BoardParams;
use crate::conflicts::ConflictEngine;

/// Value of an empty cell.
pub const EMPTY: u8 = 0;

/// Value of an occupied cell.
pub const PIECE: u8 = 1;

/// Square grid of binary occupancy values.
///
/// The size is fixed at construction; only cell contents change.
/// Serializes as its row matrix and deserializes through the same
/// validation as [`Board::from_matrix`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardParams", into = "BoardParams")]
pub struct Board {
    n: usize,
    cells: Vec<u8>,
}

impl Board {
    /// Create an `n`×`n` board with every cell empty.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` cells cannot be addressed. Use [`Board::sized`]
    /// when `n` comes from outside the program.
    #[must_use]
    pub fn empty(n: usize) -> Self {
        match Self::sized(n) {
            Ok(board) => board,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create an `n`×`n` empty board, rejecting sizes whose cell count
    /// overflows.
    pub fn sized(n: usize) -> Result<Self> {
        let len = cell_count(n)?;
        Ok(Self {
            n,
            cells: vec![EMPTY; len],
        })
    }

    /// Create a board from caller-supplied rows.
    ///
    /// `n` is the number of rows. Every row must have exactly `n` entries,
    /// each 0 or 1.
    pub fn from_matrix<R: AsRef<[u8]>>(matrix: &[R]) -> Result<Self> {
        let n = matrix.len();
        let mut cells = Vec::with_capacity(cell_count(n)?);

        for (row, values) in matrix.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n {
                return Err(ConstructionError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                }
                .into());
            }
            if let Some(col) = values.iter().position(|&v| v != EMPTY && v != PIECE) {
                return Err(ConstructionError::NonBinaryEntry {
                    row,
                    col,
                    value: values[col],
                }
                .into());
            }
            cells.extend_from_slice(values);
        }

        Ok(Self { n, cells })
    }

    /// Create a board from optional construction parameters.
    ///
    /// `None` (for example a JSON `null`) is rejected with
    /// [`ConstructionError::MissingParams`].
    pub fn from_params(params: Option<BoardParams>) -> Result<Self> {
        params
            .ok_or(ConstructionError::MissingParams)?
            .try_into()
    }

    /// Board dimension.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Check if `cell` lies on this board.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.n && cell.col < self.n
    }

    /// Check if a signed coordinate lies on this board.
    ///
    /// Callers use this as a guard before addressing a cell, e.g. when
    /// stepping off an edge produces a negative index.
    #[must_use]
    pub fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        let n = self.n as isize;
        0 <= row && row < n && 0 <= col && col < n
    }

    /// Reject a cell that is not on this board.
    pub fn check(&self, cell: Cell) -> Result<(), IndexError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(IndexError::CellOutOfBounds {
                row: cell.row,
                col: cell.col,
                n: self.n,
            })
        }
    }

    /// Get the value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<u8> {
        let cell = Cell::new(row, col);
        self.check(cell)?;
        Ok(self.value(cell))
    }

    /// Check if `cell` holds a piece. Cells off the board are empty.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.contains(cell) && self.value(cell) == PIECE
    }

    /// Flip the cell at `(row, col)` and return its new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<u8> {
        let cell = Cell::new(row, col);
        self.check(cell)?;
        let index = self.index(cell);
        self.cells[index] ^= PIECE;
        Ok(self.cells[index])
    }

    /// Rows in order, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        // `chunks_exact(0)` panics; a 0x0 board has no cells to chunk anyway.
        self.cells.chunks_exact(self.n.max(1))
    }

    /// Owned copy of the rows.
    #[must_use]
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = Cell> + '_ {
        let n = self.n;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == PIECE)
            .map(move |(i, _)| Cell::new(i / n, i % n))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == PIECE).count()
    }

    /// Conflict queries over the current contents.
    #[must_use]
    pub fn conflicts(&self) -> ConflictEngine<'_> {
        ConflictEngine::new(self)
    }

    /// Value at a cell known to be on the board.
    #[inline]
    pub(crate) fn value(&self, cell: Cell) -> u8 {
        self.cells[self.index(cell)]
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.row * self.n + cell.col
    }
}

// `Vec` cannot hold more than `isize::MAX` bytes.
fn cell_count(n: usize) -> Result<usize, ConstructionError> {
    n.checked_mul(n)
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(ConstructionError::TooLarge { n })
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for &value in row {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(if value == PIECE { "Q" } else { "." })?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl TryFrom<BoardParams> for Board {
    type Error = super::error::BoardError;

    fn try_from(params: BoardParams) -> Result<Self> {
        match params {
            BoardParams::Size { n } => Board::sized(n),
            BoardParams::Matrix(rows) => Board::from_matrix(&rows),
        }
    }
}

impl From<Board> for BoardParams {
    fn from(board: Board) -> Self {
        BoardParams::Matrix(board.to_matrix())
    }
}
