//! Change notification.
//!
//! [`Board`](crate::core::Board) itself never notifies anyone. A
//! collaborator that re-renders or re-checks conflicts after each move
//! owns an [`ObservedBoard`] and subscribes to it.
//!
//! ## Key Components
//!
//! - [`BoardChange`]: One toggle (cell, new state, piece count)
//! - [`ChangeListeners`]: Ordered callbacks and channels keyed by [`SubscriptionId`]
//! - [`ObservedBoard`]: A board plus its listeners; toggles are announced
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::Cell as Counter;
//! use std::rc::Rc;
//!
//! use queens_conflicts::core::Board;
//! use queens_conflicts::events::ObservedBoard;
//!
//! let mut observed = ObservedBoard::new(Board::empty(4));
//!
//! let renders = Rc::new(Counter::new(0));
//! let seen = Rc::clone(&renders);
//! observed.subscribe(move |_change| seen.set(seen.get() + 1));
//!
//! observed.toggle(0, 1).unwrap();
//! observed.toggle(2, 1).unwrap();
//!
//! assert_eq!(renders.get(), 2);
//! assert!(observed.conflicts().has_any_col_conflicts());
//! ```

mod change;
mod listeners;
mod observed;

pub use change::BoardChange;
pub use listeners::{ChangeListeners, SubscriptionId};
pub use observed::ObservedBoard;
