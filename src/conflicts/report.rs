//! Conflict reports for highlighting.
//!
//! A presentation layer wants to know more than "is there a conflict":
//! it marks every piece that takes part in one. [`ConflictReport`] holds
//! the conflicting lines and the pieces that sit on them.

use serde::{Deserialize, Serialize};

use super::rules::MovementRule;
use crate::core::{Cell, Line};

/// Every conflict on a board under one movement rule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// The rule the board was checked against.
    pub rule: MovementRule,

    /// Lines holding two or more pieces, grouped by orientation in the
    /// rule's order and by ascending key within each orientation.
    pub lines: Vec<Line>,

    /// Occupied cells on any conflicting line, sorted row-major, no duplicates.
    pub cells: Vec<Cell>,
}

impl ConflictReport {
    /// Create an empty report for `rule`.
    #[must_use]
    pub fn new(rule: MovementRule) -> Self {
        Self {
            rule,
            lines: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Check if no line conflicts.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of conflicting lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the piece at `cell` takes part in a conflict.
    #[must_use]
    pub fn involves(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_clear() {
        let report = ConflictReport::new(MovementRule::Rook);
        assert!(report.is_clear());
        assert_eq!(report.line_count(), 0);
        assert!(!report.involves(Cell::new(0, 0)));
    }

    #[test]
    fn test_involves() {
        let report = ConflictReport {
            rule: MovementRule::Queen,
            lines: vec![Line::Row(0)],
            cells: vec![Cell::new(0, 0), Cell::new(0, 3)],
        };
        assert!(!report.is_clear());
        assert!(report.involves(Cell::new(0, 3)));
        assert!(!report.involves(Cell::new(1, 3)));
    }
}
