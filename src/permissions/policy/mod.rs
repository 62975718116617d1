/*!
 * Policy Module
 * Policy chain and evaluation context
 */

mod context;
mod engine;

pub use context::EvaluationContext;
pub use engine::{AccessPolicy, FlagPolicy, PolicyDecision, PolicyEngine};
