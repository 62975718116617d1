/*!
 * Core Types
 * Identity and slot aliases shared across the crate
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single position in a store: a value or an explicit empty marker
pub type Slot<T> = Option<T>;

/// Identity of a store instance, passed to observers as the sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(Uuid);

impl StoreId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for StoreId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form is enough to correlate log lines
        let s = self.0.simple().to_string();
        f.write_str(&s[..8])
    }
}
