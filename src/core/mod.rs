//! Core board types: cells, lines, the board itself, construction
//! parameters, errors.
//!
//! Everything here is plain data. Conflict queries live in
//! [`conflicts`](crate::conflicts); change notification in
//! [`events`](crate::events).

pub mod cell;
pub mod line;
pub mod board;
pub mod params;
pub mod error;

pub use cell::Cell;
pub use line::{Line, LineCells, Orientation};
pub use board::{Board, EMPTY, PIECE};
pub use params::BoardParams;
pub use error::{BoardError, ConstructionError, IndexError, Result};
