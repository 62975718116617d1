/*!
 * Access Gate
 * Single decision point for every store operation
 */

use super::audit::{AuditEvent, AuditLogger, AuditStats};
use super::policy::{AccessPolicy, EvaluationContext, PolicyEngine};
use super::types::{AccessDecision, DenialReason, Operation, Permissions};
use crate::core::errors::{StoreError, StoreResult};
use crate::core::types::StoreId;
use std::sync::Arc;
use tracing::{debug, warn};

/// Decides whether a classified operation may proceed.
///
/// The flag check runs first; `locked` is evaluated after it and blocks every
/// mutation, UNLOCKED included. Reads never consult `locked`.
#[derive(Debug, Clone)]
pub struct AccessGate {
    permissions: Permissions,
    locked: bool,
    strict: bool,
    policy: PolicyEngine,
    audit: Arc<AuditLogger>,
}

impl AccessGate {
    /// Gate with the given flags, unlocked and in silent mode
    pub fn new(permissions: Permissions) -> Self {
        Self {
            permissions,
            locked: false,
            strict: false,
            policy: PolicyEngine::new(),
            audit: Arc::new(AuditLogger::new()),
        }
    }

    /// Builder: set the lock
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Builder: escalate denials into errors
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builder: bound the denial audit trail
    pub fn with_audit_capacity(mut self, capacity: usize) -> Self {
        self.audit = Arc::new(AuditLogger::with_capacity(capacity));
        self
    }

    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    pub fn set_permissions(&mut self, permissions: Permissions) {
        self.permissions = permissions;
    }

    pub fn grant(&mut self, flags: Permissions) {
        self.permissions.insert(flags);
    }

    pub fn revoke(&mut self, flags: Permissions) {
        self.permissions.remove(flags);
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Chain an extra policy after the flag check
    pub fn add_policy(&mut self, policy: Arc<dyn AccessPolicy>) {
        self.policy.add_policy(policy);
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn audit_stats(&self) -> AuditStats {
        self.audit.stats()
    }

    /// Pure decision for `operation` against the current state
    pub fn decide(&self, store: StoreId, operation: Operation, length: usize) -> AccessDecision {
        let context = EvaluationContext::new(store, self.permissions, length);
        let decision = self.policy.evaluate(operation, &context);
        if decision.is_allowed() && self.locked && operation.is_mutation() {
            return AccessDecision::Deny(DenialReason::Locked);
        }
        decision
    }

    /// Decide and apply the denial mode.
    ///
    /// Returns `Ok(true)` to proceed, `Ok(false)` for a silent no-op, or
    /// `AccessDenied` in strict mode.
    pub fn authorize(&self, store: StoreId, operation: Operation, length: usize) -> StoreResult<bool> {
        match self.decide(store, operation, length) {
            AccessDecision::Allow => {
                self.audit.record_allowed();
                Ok(true)
            }
            AccessDecision::Deny(reason) => {
                self.audit
                    .log(AuditEvent::new(store, operation, reason, self.strict));
                if self.strict {
                    warn!(%store, %operation, %reason, "operation denied");
                    Err(StoreError::denied(operation, reason.to_string()))
                } else {
                    debug!(%store, %operation, %reason, "operation denied, ignoring");
                    Ok(false)
                }
            }
        }
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(Permissions::default())
    }
}
