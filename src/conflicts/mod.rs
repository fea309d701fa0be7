//! Conflict detection.
//!
//! ## Key Types
//!
//! - [`ConflictEngine`]: Per-line, per-orientation, and composite predicates
//! - [`MovementRule`]: Rook (rows and columns) or queen (plus diagonals)
//! - [`ConflictReport`]: Conflicting lines and the pieces on them
//!
//! ## Example Usage
//!
//! ```
//! use queens_conflicts::core::{Board, Cell, Line};
//! use queens_conflicts::conflicts::MovementRule;
//!
//! let board = Board::from_matrix(&[
//!     [0_u8, 1, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 1, 0, 0],
//!     [0, 0, 0, 0],
//! ])
//! .unwrap();
//!
//! let engine = board.conflicts();
//! assert!(engine.has_any_col_conflicts());
//! assert!(!engine.has_any_row_conflicts());
//! assert!(engine.has_any_queens_conflicts());
//!
//! let report = engine.report(MovementRule::Queen);
//! assert_eq!(report.lines, vec![Line::Col(1)]);
//! assert!(report.involves(Cell::new(2, 1)));
//! ```

mod engine;
mod report;
mod rules;

pub use engine::ConflictEngine;
pub use report::ConflictReport;
pub use rules::MovementRule;
