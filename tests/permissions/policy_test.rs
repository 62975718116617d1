/*!
 * Chained access policies
 */

use ordered_store::permissions::{
    AccessDecision, AccessGate, AccessPolicy, DenialReason, EvaluationContext, PolicyDecision,
};
use ordered_store::{OrderedStore, Operation, Permissions, StoreId};
use std::sync::Arc;

/// Caps the store at a fixed number of slots
struct Capacity(usize);

impl AccessPolicy for Capacity {
    fn evaluate(&self, operation: Operation, context: &EvaluationContext) -> PolicyDecision {
        match operation {
            Operation::Add | Operation::Paste if context.length >= self.0 => PolicyDecision::Deny,
            _ => PolicyDecision::Abstain,
        }
    }

    fn name(&self) -> &str {
        "capacity"
    }
}

/// Tries to allow everything
struct AllowAll;

impl AccessPolicy for AllowAll {
    fn evaluate(&self, _operation: Operation, _context: &EvaluationContext) -> PolicyDecision {
        PolicyDecision::Allow
    }

    fn name(&self) -> &str {
        "allow_all"
    }
}

#[test]
fn test_capacity_policy_limits_growth() {
    let mut store = OrderedStore::new();
    store.add_policy(Arc::new(Capacity(2)));
    for i in 0..5 {
        store.add(i).unwrap();
    }
    assert_eq!(store.to_list().unwrap(), vec![0, 1]);

    store.set_strict(true);
    let err = store.add(9).unwrap_err();
    assert!(err.is_access_denied());
    assert_eq!(store.recent_denials(1)[0].reason, DenialReason::Policy);
}

#[test]
fn test_policy_cannot_widen_flags() {
    let mut gate = AccessGate::new(Permissions::READ);
    gate.add_policy(Arc::new(AllowAll));
    assert_eq!(
        gate.decide(StoreId::new(), Operation::Add, 0),
        AccessDecision::Deny(DenialReason::MissingFlag)
    );
}

#[test]
fn test_lock_checked_after_policies() {
    let mut gate = AccessGate::new(Permissions::UNLOCKED).with_locked(true);
    gate.add_policy(Arc::new(AllowAll));
    assert_eq!(
        gate.decide(StoreId::new(), Operation::Remove, 3),
        AccessDecision::Deny(DenialReason::Locked)
    );
    assert!(gate.decide(StoreId::new(), Operation::Read, 3).is_allowed());
}
