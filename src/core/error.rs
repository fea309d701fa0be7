//! Error types.
//!
//! Both kinds are caller errors. Nothing here is transient, so nothing is
//! retried: a query either returns a definite answer or fails outright.

use thiserror::Error;

use super::line::Line;

pub type Result<T, E = BoardError> = std::result::Result<T, E>;

/// Top-level error for board construction and queries.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Board construction input was missing or malformed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("board parameters missing: pass a size `{{\"n\": <num>}}` or a square 0/1 matrix")]
    MissingParams,

    #[error("matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("matrix entry at ({row}, {col}) is {value}, expected 0 or 1")]
    NonBinaryEntry { row: usize, col: usize, value: u8 },

    #[error("board size {n} is too large: {n}x{n} cells cannot be addressed")]
    TooLarge { n: usize },
}

/// A coordinate or line identifier is outside the board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("cell ({row}, {col}) is outside a {n}x{n} board")]
    CellOutOfBounds { row: usize, col: usize, n: usize },

    #[error("{line} does not exist on a {n}x{n} board")]
    LineOutOfRange { line: Line, n: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConstructionError::NotSquare { row: 1, len: 2, expected: 3 };
        assert_eq!(err.to_string(), "matrix is not square: row 1 has 2 entries, expected 3");

        let err = IndexError::LineOutOfRange { line: Line::MinorDiagonal(9), n: 4 };
        assert_eq!(err.to_string(), "minor diagonal 9 does not exist on a 4x4 board");

        assert!(ConstructionError::MissingParams.to_string().contains("{\"n\": <num>}"));
    }

    #[test]
    fn test_board_error_is_transparent() {
        let inner = IndexError::CellOutOfBounds { row: 5, col: 0, n: 3 };
        let err = BoardError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err, BoardError::Index(inner));
    }
}
