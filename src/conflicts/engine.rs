//! Line-conflict predicates.
//!
//! A conflict is two or more pieces on the same line. For each orientation
//! the engine answers two questions:
//!
//! - **at**: does this specific line conflict? The line must exist on the
//!   board, otherwise the query fails with [`IndexError`](crate::core::IndexError).
//! - **any**: does any line of this orientation conflict?
//!
//! The rook and queen composites combine orientations according to
//! [`MovementRule`].
//!
//! The engine borrows the board immutably and keeps no state, so every
//! query re-scans the current contents and the board cannot change while a
//! query runs.

use rustc_hash::FxHashSet;

use super::report::ConflictReport;
use super::rules::MovementRule;
use crate::core::{Board, Cell, Line, Orientation, Result, PIECE};

/// Stateless conflict queries over a borrowed [`Board`].
#[derive(Clone, Copy, Debug)]
pub struct ConflictEngine<'a> {
    board: &'a Board,
}

impl<'a> ConflictEngine<'a> {
    /// Create an engine over `board`.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// The board being queried.
    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    // === Generic Lines ===

    /// Number of pieces on `line`.
    pub fn pieces_on(&self, line: Line) -> Result<usize> {
        line.validate(self.board.n())?;
        Ok(self.count(line))
    }

    /// Check if `line` holds two or more pieces.
    pub fn has_conflict_on(&self, line: Line) -> Result<bool> {
        Ok(self.pieces_on(line)? > 1)
    }

    /// Check if any line of `orientation` holds two or more pieces.
    #[must_use]
    pub fn has_any_conflict(&self, orientation: Orientation) -> bool {
        let n = self.board.n();
        // No line on a 0x0 or 1x1 board has room for two pieces.
        if n < 2 {
            return false;
        }
        orientation.lines(n).any(|line| self.count(line) > 1)
    }

    // === Rows ===

    /// Check if row `row` holds two or more pieces.
    pub fn has_row_conflict_at(&self, row: usize) -> Result<bool> {
        self.has_conflict_on(Line::Row(row))
    }

    /// Check if any row holds two or more pieces.
    #[must_use]
    pub fn has_any_row_conflicts(&self) -> bool {
        self.has_any_conflict(Orientation::Row)
    }

    // === Columns ===

    /// Check if column `col` holds two or more pieces.
    pub fn has_col_conflict_at(&self, col: usize) -> Result<bool> {
        self.has_conflict_on(Line::Col(col))
    }

    /// Check if any column holds two or more pieces.
    #[must_use]
    pub fn has_any_col_conflicts(&self) -> bool {
        self.has_any_conflict(Orientation::Col)
    }

    // === Major Diagonals ===

    /// Check if the major diagonal with key `col - row == key` holds two
    /// or more pieces. Valid keys are `-(n-1)..=(n-1)`.
    pub fn has_major_diagonal_conflict_at(&self, key: isize) -> Result<bool> {
        self.has_conflict_on(Line::MajorDiagonal(key))
    }

    /// Check if any major diagonal holds two or more pieces.
    #[must_use]
    pub fn has_any_major_diagonal_conflicts(&self) -> bool {
        self.has_any_conflict(Orientation::MajorDiagonal)
    }

    // === Minor Diagonals ===

    /// Check if the minor diagonal with key `col + row == key` holds two
    /// or more pieces. Valid keys are `0..=2(n-1)`.
    pub fn has_minor_diagonal_conflict_at(&self, key: isize) -> Result<bool> {
        self.has_conflict_on(Line::MinorDiagonal(key))
    }

    /// Check if any minor diagonal holds two or more pieces.
    #[must_use]
    pub fn has_any_minor_diagonal_conflicts(&self) -> bool {
        self.has_any_conflict(Orientation::MinorDiagonal)
    }

    // === Composites ===

    /// Check if any row or column conflicts.
    #[must_use]
    pub fn has_any_rooks_conflicts(&self) -> bool {
        self.has_any_row_conflicts() || self.has_any_col_conflicts()
    }

    /// Check if the row or the column through `(row, col)` conflicts.
    ///
    /// The cell itself need not be occupied.
    pub fn has_any_rooks_conflicts_on(&self, row: usize, col: usize) -> Result<bool> {
        self.has_any_conflicts_on(MovementRule::Rook, Cell::new(row, col))
    }

    /// Check if any row, column, or diagonal conflicts.
    #[must_use]
    pub fn has_any_queens_conflicts(&self) -> bool {
        self.has_any_rooks_conflicts()
            || self.has_any_major_diagonal_conflicts()
            || self.has_any_minor_diagonal_conflicts()
    }

    /// Check if the row, column, or either diagonal through `(row, col)`
    /// conflicts.
    ///
    /// The cell itself need not be occupied.
    pub fn has_any_queen_conflicts_on(&self, row: usize, col: usize) -> Result<bool> {
        self.has_any_conflicts_on(MovementRule::Queen, Cell::new(row, col))
    }

    /// Check if the board conflicts under `rule`.
    #[must_use]
    pub fn has_any_conflicts(&self, rule: MovementRule) -> bool {
        match rule {
            MovementRule::Rook => self.has_any_rooks_conflicts(),
            MovementRule::Queen => self.has_any_queens_conflicts(),
        }
    }

    /// Check if any line through `cell` that `rule` attacks along conflicts.
    pub fn has_any_conflicts_on(&self, rule: MovementRule, cell: Cell) -> Result<bool> {
        self.board.check(cell)?;
        Ok(rule
            .lines_through(cell)
            .into_iter()
            .any(|line| self.count(line) > 1))
    }

    // === Reporting ===

    /// Every conflicting line under `rule`.
    #[must_use]
    pub fn conflicting_lines(&self, rule: MovementRule) -> Vec<Line> {
        let n = self.board.n();
        if n < 2 {
            return Vec::new();
        }
        rule.orientations()
            .iter()
            .flat_map(|orientation| orientation.lines(n))
            .filter(|&line| self.count(line) > 1)
            .collect()
    }

    /// Conflicting lines under `rule` and the pieces on them.
    #[must_use]
    pub fn report(&self, rule: MovementRule) -> ConflictReport {
        let n = self.board.n();
        let lines = self.conflicting_lines(rule);

        let mut involved = FxHashSet::default();
        for line in &lines {
            involved.extend(line.cells(n).filter(|&cell| self.board.value(cell) == PIECE));
        }
        let mut cells: Vec<Cell> = involved.into_iter().collect();
        cells.sort_unstable();

        ConflictReport { rule, lines, cells }
    }

    // Callers validate `line` first; an off-board line walks no cells.
    fn count(&self, line: Line) -> usize {
        line.cells(self.board.n())
            .filter(|&cell| self.board.value(cell) == PIECE)
            .count()
    }
}
