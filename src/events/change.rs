//! Board change events.

use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// One toggle applied to a board.
///
/// Carries enough for a renderer to update without re-reading the board:
/// which cell changed, its new state, and the resulting piece count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardChange {
    /// The toggled cell.
    pub cell: Cell,

    /// Whether the cell now holds a piece.
    pub occupied: bool,

    /// Pieces on the board after the toggle.
    pub piece_count: usize,
}

impl BoardChange {
    /// Create a change record.
    #[must_use]
    pub const fn new(cell: Cell, occupied: bool, piece_count: usize) -> Self {
        Self {
            cell,
            occupied,
            piece_count,
        }
    }

    /// Check if the toggle placed a piece.
    #[must_use]
    pub const fn is_placement(&self) -> bool {
        self.occupied
    }

    /// Check if the toggle removed a piece.
    #[must_use]
    pub const fn is_removal(&self) -> bool {
        !self.occupied
    }
}

impl std::fmt::Display for BoardChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = if self.occupied { "placed" } else { "removed" };
        write!(f, "{} {} ({} on board)", verb, self.cell, self.piece_count)
    }
}
