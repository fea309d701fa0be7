//! A board that announces its changes.

use std::sync::mpsc::Receiver;

use super::change::BoardChange;
use super::listeners::{ChangeListeners, SubscriptionId};
use crate::conflicts::ConflictEngine;
use crate::core::{Board, Cell, Result, PIECE};

/// Owns a [`Board`] and notifies listeners after every toggle.
///
/// The board is only reachable read-only from outside, so every mutation
/// goes through [`ObservedBoard::toggle`] and is announced.
#[derive(Debug)]
pub struct ObservedBoard {
    board: Board,
    listeners: ChangeListeners,
}

impl ObservedBoard {
    /// Wrap `board` with no listeners.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            listeners: ChangeListeners::new(),
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Conflict queries over the current board.
    #[must_use]
    pub fn conflicts(&self) -> ConflictEngine<'_> {
        self.board.conflicts()
    }

    /// Flip the cell at `(row, col)`, then notify every listener.
    ///
    /// Nothing is notified if the cell is off the board.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<BoardChange> {
        let value = self.board.toggle(row, col)?;
        let change = BoardChange::new(Cell::new(row, col), value == PIECE, self.board.piece_count());
        self.listeners.notify(&change);
        Ok(change)
    }

    /// Register a callback invoked after every toggle.
    pub fn subscribe(&mut self, callback: impl FnMut(&BoardChange) + 'static) -> SubscriptionId {
        self.listeners.subscribe(callback)
    }

    /// Register a channel that receives every toggle.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, Receiver<BoardChange>) {
        self.listeners.subscribe_channel()
    }

    /// Remove a listener. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// The listener registry.
    #[must_use]
    pub fn listeners(&self) -> &ChangeListeners {
        &self.listeners
    }

    /// Drop every listener and return the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}

impl From<Board> for ObservedBoard {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}
