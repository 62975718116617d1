/*!
 * Store Events
 * Synchronous observer list fired around every structural mutation
 *
 * Callbacks run on the calling thread, in registration order, while the
 * mutation is in progress. They receive a shared view of the notification
 * only. Re-entrant use of the store from a callback is not supported: a
 * callback must not call back into a `SharedStore` handle that owns the
 * store, since the mutation still holds its write lock. Use
 * `SharedStore::try_read` if a callback needs to look at the store.
 */

use crate::core::types::StoreId;
use crate::permissions::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle points a subscriber can observe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Adding,
    Added,
    Removing,
    Removed,
    Updated,
    Clearing,
    Cleared,
    Resized,
    Moving,
    Moved,
}

/// Operation-specific data attached to a notification
#[derive(Debug, PartialEq)]
pub enum Payload<'a, T> {
    None,
    /// The item being added or removed by value
    Item(&'a T),
    /// A single slot and its content at the time of the event
    Slot { index: usize, value: Option<&'a T> },
    /// A contiguous batch starting at `index`
    Batch { index: usize, count: usize },
    /// New length after a resize
    Length(usize),
    /// Source and destination of a move
    Span { from: usize, to: usize },
    /// Number of slots affected
    Count(usize),
}

/// A single event delivered to subscribers
#[derive(Debug)]
pub struct Notification<'a, T> {
    /// Sender
    pub store: StoreId,
    pub kind: EventKind,
    /// Operation class of the public call that caused the event
    pub operation: Operation,
    /// Store length when the event fired
    pub length: usize,
    pub payload: Payload<'a, T>,
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn Fn(&Notification<'_, T>) + Send + Sync>;

struct Subscription<T> {
    id: SubscriptionId,
    /// `None` receives every kind
    filter: Option<EventKind>,
    callback: Callback<T>,
}

/// Ordered collection of callbacks
pub struct EventHooks<T> {
    subscriptions: Vec<Subscription<T>>,
    next_id: u64,
}

impl<T> EventHooks<T> {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback for one kind, or all kinds with `None`
    pub fn subscribe<F>(&mut self, filter: Option<EventKind>, callback: F) -> SubscriptionId
    where
        F: Fn(&Notification<'_, T>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            filter,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a callback. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Deliver to every matching subscriber in registration order
    pub fn emit(&self, notification: &Notification<'_, T>) {
        for sub in &self.subscriptions {
            if sub.filter.map_or(true, |kind| kind == notification.kind) {
                (sub.callback)(notification);
            }
        }
    }
}

impl<T> Default for EventHooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventHooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHooks")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
