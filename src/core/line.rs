//! Line identifiers and the cells they cover.
//!
//! A [`Line`] is a row, a column, or a diagonal, identified by its index
//! (rows and columns) or by its diagonal key (see [`Cell::major_diagonal`]
//! and [`Cell::minor_diagonal`]).
//!
//! Every line maps to a straight walk over the board: a start cell, a
//! step, and a length. [`Line::cells`] is that walk, and it is the only
//! place where line identifiers are turned into coordinates.
//!
//! ```
//! use queens_conflicts::core::{Cell, Line};
//!
//! // Minor diagonal 2 on a 3x3 board runs from the top-right corner
//! // to the bottom-left corner.
//! let cells: Vec<Cell> = Line::MinorDiagonal(2).cells(3).collect();
//! assert_eq!(cells, vec![Cell::new(0, 2), Cell::new(1, 1), Cell::new(2, 0)]);
//! ```

use std::iter::FusedIterator;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::IndexError;

/// Direction a line runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Left to right.
    Row,
    /// Top to bottom.
    Col,
    /// Top-left to bottom-right.
    MajorDiagonal,
    /// Top-right to bottom-left.
    MinorDiagonal,
}

impl Orientation {
    /// All four orientations, rows first.
    pub const ALL: [Orientation; 4] = [
        Orientation::Row,
        Orientation::Col,
        Orientation::MajorDiagonal,
        Orientation::MinorDiagonal,
    ];

    /// Range of valid keys for this orientation on an `n`×`n` board.
    ///
    /// Empty when `n == 0`.
    #[must_use]
    pub fn keys(self, n: usize) -> Range<isize> {
        let n = n as isize;
        match self {
            Orientation::Row | Orientation::Col => 0..n,
            Orientation::MajorDiagonal if n > 0 => -(n - 1)..n,
            Orientation::MinorDiagonal if n > 0 => 0..2 * n - 1,
            Orientation::MajorDiagonal | Orientation::MinorDiagonal => 0..0,
        }
    }

    /// Number of lines of this orientation on an `n`×`n` board.
    #[must_use]
    pub fn line_count(self, n: usize) -> usize {
        self.keys(n).len()
    }

    /// Every valid line of this orientation, in ascending key order.
    pub fn lines(self, n: usize) -> impl Iterator<Item = Line> {
        self.keys(n).map(move |key| self.line_at(key))
    }

    /// The line through `cell` with this orientation.
    #[must_use]
    pub fn line_through(self, cell: Cell) -> Line {
        match self {
            Orientation::Row => Line::Row(cell.row),
            Orientation::Col => Line::Col(cell.col),
            Orientation::MajorDiagonal => Line::MajorDiagonal(cell.major_diagonal()),
            Orientation::MinorDiagonal => Line::MinorDiagonal(cell.minor_diagonal()),
        }
    }

    // Keys come from `keys()`, so row and column keys are never negative.
    fn line_at(self, key: isize) -> Line {
        match self {
            Orientation::Row => Line::Row(key as usize),
            Orientation::Col => Line::Col(key as usize),
            Orientation::MajorDiagonal => Line::MajorDiagonal(key),
            Orientation::MinorDiagonal => Line::MinorDiagonal(key),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Orientation::Row => "row",
            Orientation::Col => "column",
            Orientation::MajorDiagonal => "major diagonal",
            Orientation::MinorDiagonal => "minor diagonal",
        };
        f.write_str(name)
    }
}

/// A single line on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row by index.
    Row(usize),
    /// Column by index.
    Col(usize),
    /// Major diagonal by `col - row` key.
    MajorDiagonal(isize),
    /// Minor diagonal by `col + row` key.
    MinorDiagonal(isize),
}

impl Line {
    /// The orientation of this line.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Line::Row(_) => Orientation::Row,
            Line::Col(_) => Orientation::Col,
            Line::MajorDiagonal(_) => Orientation::MajorDiagonal,
            Line::MinorDiagonal(_) => Orientation::MinorDiagonal,
        }
    }

    /// Check if this line exists on an `n`×`n` board.
    #[must_use]
    pub fn is_valid(self, n: usize) -> bool {
        match self {
            Line::Row(index) | Line::Col(index) => index < n,
            Line::MajorDiagonal(key) | Line::MinorDiagonal(key) => {
                self.orientation().keys(n).contains(&key)
            }
        }
    }

    /// Reject a line that does not exist on an `n`×`n` board.
    pub fn validate(self, n: usize) -> Result<(), IndexError> {
        if self.is_valid(n) {
            Ok(())
        } else {
            Err(IndexError::LineOutOfRange { line: self, n })
        }
    }

    /// Number of cells on this line, 0 if the line is not on the board.
    #[must_use]
    pub fn len(self, n: usize) -> usize {
        self.cells(n).len()
    }

    /// Cells covered by this line on an `n`×`n` board, walked from the
    /// top edge (or left edge, for rows) toward the opposite border.
    ///
    /// A line that is not on the board yields nothing.
    #[must_use]
    pub fn cells(self, n: usize) -> LineCells {
        if !self.is_valid(n) {
            return LineCells::empty();
        }

        let size = n as isize;
        let (start, step, len) = match self {
            Line::Row(row) => ((row as isize, 0), (0, 1), size),
            Line::Col(col) => ((0, col as isize), (1, 0), size),
            Line::MajorDiagonal(key) => {
                let start = (0_isize.max(-key), 0_isize.max(key));
                (start, (1, 1), size - key.abs())
            }
            Line::MinorDiagonal(key) => {
                let last = size - 1;
                let start = (0_isize.max(key - last), key.min(last));
                (start, (1, -1), size - (key - last).abs())
            }
        };

        LineCells {
            row: start.0,
            col: start.1,
            step,
            remaining: len as usize,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(index) | Line::Col(index) => write!(f, "{} {}", self.orientation(), index),
            Line::MajorDiagonal(key) | Line::MinorDiagonal(key) => {
                write!(f, "{} {}", self.orientation(), key)
            }
        }
    }
}

/// Iterator over the cells of a [`Line`].
#[derive(Clone, Debug)]
pub struct LineCells {
    row: isize,
    col: isize,
    step: (isize, isize),
    remaining: usize,
}

impl LineCells {
    fn empty() -> Self {
        Self {
            row: 0,
            col: 0,
            step: (0, 0),
            remaining: 0,
        }
    }
}

impl Iterator for LineCells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.remaining == 0 {
            return None;
        }
        let cell = Cell::new(self.row as usize, self.col as usize);
        self.row += self.step.0;
        self.col += self.step.1;
        self.remaining -= 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LineCells {}

impl FusedIterator for LineCells {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(line: Line, n: usize) -> Vec<(usize, usize)> {
        line.cells(n).map(|c| (c.row, c.col)).collect()
    }

    #[test]
    fn test_row_and_col_cells() {
        assert_eq!(cells(Line::Row(1), 3), vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(cells(Line::Col(2), 3), vec![(0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_major_diagonal_cells() {
        assert_eq!(cells(Line::MajorDiagonal(0), 3), vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(cells(Line::MajorDiagonal(1), 3), vec![(0, 1), (1, 2)]);
        assert_eq!(cells(Line::MajorDiagonal(-2), 3), vec![(2, 0)]);
        assert_eq!(cells(Line::MajorDiagonal(2), 3), vec![(0, 2)]);
    }

    #[test]
    fn test_minor_diagonal_cells() {
        assert_eq!(cells(Line::MinorDiagonal(0), 3), vec![(0, 0)]);
        assert_eq!(cells(Line::MinorDiagonal(1), 3), vec![(0, 1), (1, 0)]);
        assert_eq!(cells(Line::MinorDiagonal(3), 3), vec![(1, 2), (2, 1)]);
        assert_eq!(cells(Line::MinorDiagonal(4), 3), vec![(2, 2)]);
    }

    #[test]
    fn test_diagonal_cells_share_key() {
        let n = 6;
        for line in Orientation::MajorDiagonal.lines(n) {
            let Line::MajorDiagonal(key) = line else { unreachable!() };
            assert!(line.cells(n).all(|c| c.major_diagonal() == key));
        }
        for line in Orientation::MinorDiagonal.lines(n) {
            let Line::MinorDiagonal(key) = line else { unreachable!() };
            assert!(line.cells(n).all(|c| c.minor_diagonal() == key));
        }
    }

    #[test]
    fn test_every_cell_on_one_line_per_orientation() {
        let n = 5;
        for orientation in Orientation::ALL {
            let total: usize = orientation.lines(n).map(|line| line.len(n)).sum();
            assert_eq!(total, n * n, "{orientation} lines should tile the board");
        }
    }

    #[test]
    fn test_key_ranges() {
        assert_eq!(Orientation::Row.keys(4), 0..4);
        assert_eq!(Orientation::MajorDiagonal.keys(4), -3..4);
        assert_eq!(Orientation::MinorDiagonal.keys(4), 0..7);
        assert_eq!(Orientation::MajorDiagonal.line_count(1), 1);
    }

    #[test]
    fn test_degenerate_board_has_no_lines() {
        for orientation in Orientation::ALL {
            assert_eq!(orientation.line_count(0), 0);
            assert_eq!(orientation.lines(0).count(), 0);
        }
        assert_eq!(Line::MajorDiagonal(0).cells(0).count(), 0);
    }

    #[test]
    fn test_validate() {
        assert!(Line::Row(3).validate(4).is_ok());
        assert!(Line::MajorDiagonal(-3).validate(4).is_ok());
        assert_eq!(
            Line::Row(4).validate(4),
            Err(IndexError::LineOutOfRange { line: Line::Row(4), n: 4 })
        );
        assert!(Line::MajorDiagonal(4).validate(4).is_err());
        assert!(Line::MinorDiagonal(-1).validate(4).is_err());
        assert!(Line::MinorDiagonal(7).validate(4).is_err());
        assert_eq!(Line::Col(9).cells(4).count(), 0);
    }

    #[test]
    fn test_line_through() {
        let cell = Cell::new(2, 1);
        assert_eq!(Orientation::Row.line_through(cell), Line::Row(2));
        assert_eq!(Orientation::Col.line_through(cell), Line::Col(1));
        assert_eq!(Orientation::MajorDiagonal.line_through(cell), Line::MajorDiagonal(-1));
        assert_eq!(Orientation::MinorDiagonal.line_through(cell), Line::MinorDiagonal(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Line::Row(2).to_string(), "row 2");
        assert_eq!(Line::Col(0).to_string(), "column 0");
        assert_eq!(Line::MajorDiagonal(-1).to_string(), "major diagonal -1");
        assert_eq!(Line::MinorDiagonal(4).to_string(), "minor diagonal 4");
    }
}
