/*!
 * Store Module
 * Gated, observable ordered collection
 *
 * ## Layout
 * - `store`: the `OrderedStore` type and its public operations
 * - `primitives`: resize, move, open/close gap and repack
 * - `search`: first-match search, parallel above a length threshold
 * - `events`: lifecycle notifications and the observer list
 * - `view`: constructors, iterators, list view and ordering
 * - `shared`: lock-wrapped handle for multi-threaded use
 * - `config`: per-store configuration
 *
 * ## Concurrency
 * A store has a single writer at a time: every mutation takes `&mut self`.
 * Wrap it in a [`SharedStore`] to serialize access across threads.
 */

pub mod config;
pub mod events;
mod primitives;
mod search;
pub mod shared;
#[allow(clippy::module_inception)]
mod store;
pub mod view;

pub use config::{RemovalStrategy, StoreConfig};
pub use events::{EventHooks, EventKind, Notification, Payload, SubscriptionId};
pub use shared::SharedStore;
pub use store::OrderedStore;
pub use view::{Iter, SlotView};
