/*!
 * Policy Engine
 * Evaluates operation classes against the flag policy and any chained policies
 */

use super::context::EvaluationContext;
use crate::permissions::types::{AccessDecision, DenialReason, Operation};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Policy decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    Allow,
    Deny,
    Abstain,
}

/// Policy that can evaluate an operation request
pub trait AccessPolicy: Send + Sync {
    /// Evaluate a request
    fn evaluate(&self, operation: Operation, context: &EvaluationContext) -> PolicyDecision;

    /// Policy name
    fn name(&self) -> &str;
}

/// Flag policy: an operation is allowed when its flag, or UNLOCKED, is granted
pub struct FlagPolicy;

impl AccessPolicy for FlagPolicy {
    fn evaluate(&self, operation: Operation, context: &EvaluationContext) -> PolicyDecision {
        if context.permissions.permits(operation) {
            PolicyDecision::Allow
        } else {
            PolicyDecision::Deny
        }
    }

    fn name(&self) -> &str {
        "flags"
    }
}

/// Policy engine: the flag policy first, then chained policies that may only restrict
#[derive(Clone)]
pub struct PolicyEngine {
    policies: Vec<Arc<dyn AccessPolicy>>,
}

impl PolicyEngine {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    /// Chain a policy after the flag policy
    pub fn add_policy(&mut self, policy: Arc<dyn AccessPolicy>) {
        self.policies.push(policy);
    }

    /// Number of chained policies
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Evaluate a request through the flag policy and every chained policy
    pub fn evaluate(&self, operation: Operation, context: &EvaluationContext) -> AccessDecision {
        if FlagPolicy.evaluate(operation, context) != PolicyDecision::Allow {
            trace!(store = %context.store, %operation, "flag policy denied");
            return AccessDecision::Deny(DenialReason::MissingFlag);
        }

        for policy in &self.policies {
            match policy.evaluate(operation, context) {
                PolicyDecision::Deny => {
                    trace!(store = %context.store, %operation, policy = policy.name(), "policy denied");
                    return AccessDecision::Deny(DenialReason::Policy);
                }
                PolicyDecision::Allow | PolicyDecision::Abstain => continue,
            }
        }

        AccessDecision::Allow
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PolicyEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.policies.iter().map(|p| p.name()).collect();
        f.debug_struct("PolicyEngine").field("policies", &names).finish()
    }
}
