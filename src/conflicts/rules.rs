//! Movement rules: which lines a piece attacks along.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Cell, Line, Orientation};

static ROOK_ORIENTATIONS: [Orientation; 2] = [Orientation::Row, Orientation::Col];

/// The piece type whose attacks define a conflict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MovementRule {
    /// Rows and columns.
    Rook,
    /// Rows, columns, and both diagonal orientations.
    #[default]
    Queen,
}

impl MovementRule {
    /// Orientations this piece attacks along.
    #[must_use]
    pub fn orientations(self) -> &'static [Orientation] {
        match self {
            MovementRule::Rook => &ROOK_ORIENTATIONS,
            MovementRule::Queen => &Orientation::ALL,
        }
    }

    /// Check if this piece attacks along `orientation`.
    #[must_use]
    pub fn attacks_along(self, orientation: Orientation) -> bool {
        self.orientations().contains(&orientation)
    }

    /// Lines through `cell` that this piece attacks along.
    ///
    /// Rows first, then columns, then major and minor diagonals.
    #[must_use]
    pub fn lines_through(self, cell: Cell) -> SmallVec<[Line; 4]> {
        self.orientations()
            .iter()
            .map(|orientation| orientation.line_through(cell))
            .collect()
    }
}

impl std::fmt::Display for MovementRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovementRule::Rook => f.write_str("rook"),
            MovementRule::Queen => f.write_str("queen"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rook_lines_through() {
        let lines = MovementRule::Rook.lines_through(Cell::new(1, 2));
        assert_eq!(lines.as_slice(), &[Line::Row(1), Line::Col(2)]);
    }

    #[test]
    fn test_queen_lines_through() {
        let lines = MovementRule::Queen.lines_through(Cell::new(1, 2));
        assert_eq!(
            lines.as_slice(),
            &[
                Line::Row(1),
                Line::Col(2),
                Line::MajorDiagonal(1),
                Line::MinorDiagonal(3),
            ]
        );
        assert!(!lines.spilled());
    }

    #[test]
    fn test_attacks_along() {
        assert!(MovementRule::Rook.attacks_along(Orientation::Col));
        assert!(!MovementRule::Rook.attacks_along(Orientation::MajorDiagonal));
        assert!(MovementRule::Queen.attacks_along(Orientation::MinorDiagonal));
    }

    #[test]
    fn test_default_is_queen() {
        assert_eq!(MovementRule::default(), MovementRule::Queen);
        assert_eq!(MovementRule::Rook.to_string(), "rook");
    }
}
