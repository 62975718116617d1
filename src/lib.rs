/*!
 * Ordered Store Library
 * Permission-gated, observable ordered collections
 *
 * ## Modules
 * - `core`: errors, identifiers and tuning limits
 * - `permissions`: flags, policies, the access gate and its audit log
 * - `store`: the `OrderedStore` sequence, its events and the shared handle
 * - `keyed`: key/value layer over the ordered store
 * - `render`: human-readable text and JSON export
 * - `monitoring`: tracing setup
 */

pub mod core;
pub mod keyed;
pub mod monitoring;
pub mod permissions;
pub mod render;
pub mod store;

// Re-exports
pub use crate::core::{Slot, StoreError, StoreId, StoreResult};
pub use keyed::{KeyedStore, Pair};
pub use monitoring::init_tracing;
pub use permissions::{AccessGate, AccessPolicy, Operation, Permissions};
pub use render::{PairLike, Render};
pub use store::{
    EventKind, Notification, OrderedStore, Payload, RemovalStrategy, SharedStore, StoreConfig,
};
