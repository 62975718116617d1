/*!
 * Tracing
 * Subscriber setup and timed spans for store operations
 */

use crate::core::limits::TRACE_JSON_ENV;
use std::time::Instant;
use tracing::{debug, span, warn, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Operations slower than this are logged at warn level
const SLOW_OPERATION_MS: u128 = 100;

/// Install the global subscriber.
///
/// Environment variables:
/// - RUST_LOG: log filter (default: info)
/// - ORDERED_STORE_TRACE_JSON: `1` or `true` for JSON output
///
/// Returns false when a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()
            .is_ok()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
            .is_ok()
    };

    if installed {
        debug!("tracing initialized");
    }
    installed
}

fn json_requested() -> bool {
    std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Timed span around one store operation; logs its duration on drop
pub struct OperationSpan {
    span: Span,
    start: Instant,
    name: &'static str,
}

impl OperationSpan {
    pub fn new(name: &'static str, length: usize) -> Self {
        let span = span!(
            Level::DEBUG,
            "store_operation",
            operation = name,
            length,
            duration_us = tracing::field::Empty,
            workers = tracing::field::Empty,
        );
        Self {
            span,
            start: Instant::now(),
            name,
        }
    }

    pub fn record_workers(&self, count: usize) {
        self.span.record("workers", count);
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl Drop for OperationSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros() as u64);

        if duration.as_millis() > SLOW_OPERATION_MS {
            warn!(
                operation = self.name,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow store operation"
            );
        } else {
            debug!(
                operation = self.name,
                duration_us = duration.as_micros() as u64,
                "store operation completed"
            );
        }
    }
}

/// Start a timed span for a named operation
pub fn span_operation(name: &'static str, length: usize) -> OperationSpan {
    OperationSpan::new(name, length)
}
