/*!
 * Permissions Module
 * Per-operation access control for stores
 *
 * Every public store entry point classifies itself with an [`Operation`] and
 * asks the [`AccessGate`] before touching any slot. The gate checks the
 * permission flags, then any chained policies, then the `locked` override.
 *
 * ## Usage
 * ```ignore
 * use ordered_store::permissions::{AccessGate, Operation, Permissions};
 * use ordered_store::StoreId;
 *
 * let gate = AccessGate::new(Permissions::READ).with_strict(true);
 * assert!(gate.authorize(StoreId::new(), Operation::Add, 0).is_err());
 * ```
 */

pub mod audit;
pub mod gate;
pub mod policy;
pub mod types;

// Re-export commonly used items
pub use audit::{AuditEvent, AuditLogger, AuditSeverity, AuditStats};
pub use gate::AccessGate;
pub use policy::{AccessPolicy, EvaluationContext, FlagPolicy, PolicyDecision, PolicyEngine};
pub use types::{AccessDecision, DenialReason, Operation, Permissions};
