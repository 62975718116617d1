/*!
 * Store Limits and Constants
 *
 * Centralized location for thresholds and defaults used across the crate.
 */

// =============================================================================
// SEARCH
// =============================================================================

/// Minimum store length before searches fan out across threads (16K slots)
/// [PERF] Below this, spawning scoped workers costs more than a linear scan
pub const PARALLEL_SEARCH_THRESHOLD: usize = 16 * 1024;

/// Upper bound on search workers regardless of available parallelism
pub const MAX_SEARCH_WORKERS: usize = 8;

/// Slots a search worker scans between checks of the shared best match
/// [PERF] Keeps the atomic load off the per-element path
pub const SEARCH_CANCEL_STRIDE: usize = 256;

// =============================================================================
// AUDIT
// =============================================================================

/// Denial events kept per store before the oldest are dropped
pub const DEFAULT_AUDIT_CAPACITY: usize = 256;

// =============================================================================
// TRACING
// =============================================================================

/// Environment variable that switches tracing output to JSON
pub const TRACE_JSON_ENV: &str = "ORDERED_STORE_TRACE_JSON";
