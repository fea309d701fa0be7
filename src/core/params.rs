//! Board construction parameters.
//!
//! A board is described either by its size (all cells empty) or by a full
//! matrix of 0/1 rows. Both shapes load from the same serialized form, so a
//! collaborator can read them straight from a config file or request body:
//!
//! ```
//! use queens_conflicts::core::BoardParams;
//!
//! let empty: BoardParams = serde_json::from_str(r#"{ "n": 5 }"#).unwrap();
//! assert_eq!(empty, BoardParams::size(5));
//!
//! let filled: BoardParams = serde_json::from_str("[[1, 0], [0, 1]]").unwrap();
//! assert_eq!(filled.build().unwrap().piece_count(), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::Result;

/// How to construct a [`Board`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoardParams {
    /// Empty board of dimension `n`.
    Size { n: usize },

    /// Board with the given rows. Must be square with 0/1 entries;
    /// this is checked by [`BoardParams::build`].
    Matrix(Vec<Vec<u8>>),
}

impl BoardParams {
    /// Parameters for an empty `n`×`n` board.
    #[must_use]
    pub fn size(n: usize) -> Self {
        Self::Size { n }
    }

    /// Parameters for a board with the given rows.
    #[must_use]
    pub fn matrix(rows: Vec<Vec<u8>>) -> Self {
        Self::Matrix(rows)
    }

    /// Dimension of the board these parameters describe.
    #[must_use]
    pub fn n(&self) -> usize {
        match self {
            Self::Size { n } => *n,
            Self::Matrix(rows) => rows.len(),
        }
    }

    /// Validate and build the board.
    pub fn build(self) -> Result<Board> {
        Board::try_from(self)
    }
}

impl Default for BoardParams {
    /// The classic 8×8 board.
    fn default() -> Self {
        Self::Size { n: 8 }
    }
}
