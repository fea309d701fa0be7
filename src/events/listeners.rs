//! Change listener registry.
//!
//! Collaborators register interest in board changes either as a callback
//! or as a channel receiver. Listeners are notified in subscription order.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

use super::change::BoardChange;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    /// Create a new subscription ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

enum Listener {
    Callback(Box<dyn FnMut(&BoardChange)>),
    Channel(Sender<BoardChange>),
}

impl Listener {
    /// Deliver a change. Returns false once the listener can no longer
    /// receive (its channel receiver was dropped).
    fn deliver(&mut self, change: &BoardChange) -> bool {
        match self {
            Listener::Callback(callback) => {
                callback(change);
                true
            }
            Listener::Channel(sender) => sender.send(*change).is_ok(),
        }
    }
}

/// Ordered set of change listeners.
#[derive(Default)]
pub struct ChangeListeners {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u32,
}

impl ChangeListeners {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked on every change.
    pub fn subscribe(&mut self, callback: impl FnMut(&BoardChange) + 'static) -> SubscriptionId {
        self.insert(Listener::Callback(Box::new(callback)))
    }

    /// Register a channel that receives every change.
    ///
    /// Dropping the receiver ends the subscription; it is pruned on the
    /// next notification.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, Receiver<BoardChange>) {
        let (sender, receiver) = mpsc::channel();
        let id = self.insert(Listener::Channel(sender));
        (id, receiver)
    }

    /// Remove a listener. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Notify every listener of `change`, in subscription order.
    pub fn notify(&mut self, change: &BoardChange) {
        self.listeners.retain_mut(|(_, listener)| listener.deliver(change));
    }

    /// Check if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.listeners.iter().any(|(listener_id, _)| *listener_id == id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Remove every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    fn insert(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }
}

impl std::fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("ids", &self.listeners.iter().map(|(id, _)| *id).collect::<Vec<_>>())
            .field("next_id", &self.next_id)
            .finish()
    }
}
