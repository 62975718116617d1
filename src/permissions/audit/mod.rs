/*!
 * Access Audit Trail
 * Tracks gate checks and denials for a store
 */

use crate::core::limits::DEFAULT_AUDIT_CAPACITY;
use crate::core::types::StoreId;
use crate::permissions::types::{DenialReason, Operation};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TimestampSeconds};
use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

/// Audit event severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSeverity {
    /// Denial degraded to a silent no-op
    Warning,
    /// Denial surfaced to the caller as an error
    Critical,
}

/// A refused operation
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AuditEvent {
    pub store: StoreId,
    pub operation: Operation,
    pub reason: DenialReason,
    pub severity: AuditSeverity,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub logged_at: SystemTime,
}

impl AuditEvent {
    pub fn new(store: StoreId, operation: Operation, reason: DenialReason, strict: bool) -> Self {
        Self {
            store,
            operation,
            reason,
            severity: if strict {
                AuditSeverity::Critical
            } else {
                AuditSeverity::Warning
            },
            logged_at: SystemTime::now(),
        }
    }
}

/// Audit logger for gate checks
#[derive(Debug)]
pub struct AuditLogger {
    /// Recent denials (ring buffer)
    events: RwLock<VecDeque<AuditEvent>>,
    /// Denials per operation class, never trimmed
    denial_counts: RwLock<BTreeMap<Operation, u64>>,
    capacity: usize,
    total_checks: AtomicU64,
    total_denials: AtomicU64,
}

impl AuditLogger {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_AUDIT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: RwLock::new(VecDeque::with_capacity(capacity)),
            denial_counts: RwLock::new(BTreeMap::new()),
            capacity,
            total_checks: AtomicU64::new(0),
            total_denials: AtomicU64::new(0),
        }
    }

    /// Denial events retained before the oldest is dropped
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Count a check that was allowed
    pub fn record_allowed(&self) {
        self.total_checks.fetch_add(1, Ordering::Relaxed);
    }

    /// Log a denial
    pub fn log(&self, event: AuditEvent) {
        self.total_checks.fetch_add(1, Ordering::Relaxed);
        self.total_denials.fetch_add(1, Ordering::Relaxed);

        *self.denial_counts.write().entry(event.operation).or_insert(0) += 1;

        if self.capacity == 0 {
            return;
        }
        let mut events = self.events.write();
        if events.len() >= self.capacity {
            events.pop_front();
        }
        events.push_back(event);
    }

    /// Most recent denials, newest first
    pub fn recent(&self, limit: usize) -> Vec<AuditEvent> {
        let events = self.events.read();
        events.iter().rev().take(limit).cloned().collect()
    }

    /// Denials recorded for one operation class
    pub fn denial_count(&self, operation: Operation) -> u64 {
        self.denial_counts.read().get(&operation).copied().unwrap_or(0)
    }

    /// Get statistics
    pub fn stats(&self) -> AuditStats {
        AuditStats {
            total_checks: self.total_checks.load(Ordering::Relaxed),
            total_denials: self.total_denials.load(Ordering::Relaxed),
            retained_events: self.events.read().len(),
            denials_by_operation: self.denial_counts.read().clone(),
        }
    }
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::new()
    }
}

/// Audit statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStats {
    pub total_checks: u64,
    pub total_denials: u64,
    pub retained_events: usize,
    pub denials_by_operation: BTreeMap<Operation, u64>,
}
