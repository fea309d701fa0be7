//! # queens-conflicts
//!
//! Line-conflict detection for N-queens / N-rooks placements on an N×N board.
//!
//! ## Design Principles
//!
//! 1. **Pure Queries**: The conflict engine borrows a board and keeps no
//!    state. Every query re-scans the current contents.
//!
//! 2. **One Addressing Scheme**: Rows, columns, and diagonals are all
//!    [`Line`]s. A diagonal is identified by `col - row` (major) or
//!    `col + row` (minor), and every line maps to a single cell walk.
//!
//! 3. **Loud Preconditions**: Non-square matrices, non-binary entries,
//!    off-board cells, and out-of-range line keys are typed errors rather
//!    than silent misbehavior.
//!
//! 4. **Notification Outside the Core**: [`Board`] only mutates.
//!    Collaborators that need to react to moves use [`ObservedBoard`].
//!
//! ## Modules
//!
//! - `core`: Cells, lines, the board, construction parameters, errors
//! - `conflicts`: Conflict predicates, movement rules, conflict reports
//! - `events`: Change events and listener registration

pub mod core;
pub mod conflicts;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardParams, Cell, Line, Orientation,
    BoardError, ConstructionError, IndexError, Result,
};

pub use crate::conflicts::{ConflictEngine, ConflictReport, MovementRule};

pub use crate::events::{BoardChange, ChangeListeners, ObservedBoard, SubscriptionId};
