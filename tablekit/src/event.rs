//! Widget notifications and event handling types.
//!
//! Widgets never call each other directly. A sort engine publishes a
//! [`SortEvent`] on a channel after it has rewritten the table body; listeners
//! (pagination, striping) drain their receivers once the triggering
//! interaction has returned.

use std::sync::mpsc::{self, Receiver, Sender};

// =============================================================================
// Notifications
// =============================================================================

/// Published by a sort engine after the table body has been reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEvent {
    /// Id of the sorted table.
    pub table_id: String,
    /// Column the rows were sorted by.
    pub column: usize,
    /// True when sorted descending.
    pub reversed: bool,
}

/// Notifications from a collapse collaborator that shows or hides rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseEvent {
    /// Targets were hidden.
    Hidden,
    /// Targets were shown.
    Shown,
    /// Collapsible sections were reset to collapsed.
    Collapsed,
}

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling a UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

// =============================================================================
// Subscriptions
// =============================================================================

/// Fan-out of notifications to channel subscribers.
#[derive(Debug)]
pub(crate) struct Notifier<T> {
    subscribers: Vec<Sender<T>>,
}

impl<T> Default for Notifier<T> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }
}

impl<T: Clone> Notifier<T> {
    /// Register a new subscriber.
    pub fn subscribe(&mut self) -> Receiver<T> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Send `event` to every subscriber, dropping those that hung up.
    pub fn notify(&mut self, event: &T) {
        self.subscribers
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Drop every subscriber; their receivers disconnect.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }
}
