/*!
 * Permission Evaluation Context
 * Provides contextual information for access decisions
 */

use crate::core::types::StoreId;
use crate::permissions::types::Permissions;

/// Evaluation context containing all information needed for an access decision
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext {
    /// Store the request targets
    pub store: StoreId,
    /// Permission set at the time of the request
    pub permissions: Permissions,
    /// Store length at the time of the request
    pub length: usize,
}

impl EvaluationContext {
    pub fn new(store: StoreId, permissions: Permissions, length: usize) -> Self {
        Self {
            store,
            permissions,
            length,
        }
    }
}
