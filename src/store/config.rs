/*!
 * Store Configuration
 *
 * Access policy, removal strategy and search tuning for a store
 */

use crate::core::errors::StoreResult;
use crate::core::limits::{DEFAULT_AUDIT_CAPACITY, PARALLEL_SEARCH_THRESHOLD};
use crate::permissions::{AccessGate, Permissions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Removal strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalStrategy {
    /// Close the gap by sliding later slots left; removes exactly one occurrence
    Shift,
    /// Rebuild from the non-matching slots; removes every occurrence
    FilterRepack,
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Granted capability flags
    pub permissions: Permissions,
    /// Hard override blocking every mutation
    pub locked: bool,
    /// Surface denials as `AccessDenied` instead of silent no-ops
    pub strict: bool,
    /// Use the shifting strategy on removal (filter-repack otherwise)
    pub shift_on_remove: bool,
    /// Minimum length before searches run in parallel
    pub parallel_search_threshold: usize,
    /// Denial events retained by the audit trail
    pub audit_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            permissions: Permissions::UNLOCKED,
            locked: false,
            strict: false,
            shift_on_remove: true,
            parallel_search_threshold: PARALLEL_SEARCH_THRESHOLD,
            audit_capacity: DEFAULT_AUDIT_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Reads only; mutations are silently ignored
    pub fn read_only() -> Self {
        Self {
            permissions: Permissions::READ_ONLY,
            ..Default::default()
        }
    }

    /// Full access, but every denial is an error
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }

    /// Locked and strict: any mutation attempt fails
    pub fn frozen() -> Self {
        Self {
            locked: true,
            strict: true,
            ..Default::default()
        }
    }

    /// Builder: permission flags
    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// Builder: removal strategy
    pub fn with_removal(mut self, strategy: RemovalStrategy) -> Self {
        self.shift_on_remove = strategy == RemovalStrategy::Shift;
        self
    }

    /// Builder: parallel search threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_search_threshold = threshold;
        self
    }

    pub fn removal(&self) -> RemovalStrategy {
        if self.shift_on_remove {
            RemovalStrategy::Shift
        } else {
            RemovalStrategy::FilterRepack
        }
    }

    /// Parse from a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build the access gate this configuration describes
    pub fn gate(&self) -> AccessGate {
        AccessGate::new(self.permissions)
            .with_locked(self.locked)
            .with_strict(self.strict)
            .with_audit_capacity(self.audit_capacity)
    }
}
