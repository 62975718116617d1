/*!
 * Store Demo - Main Entry Point
 *
 * Builds a store from the integer arguments, runs a few edits and prints the
 * result with the gate's audit statistics.
 *
 * Environment variables:
 * - STORE_CONFIG: path to a JSON store configuration
 * - RUST_LOG / ORDERED_STORE_TRACE_JSON: see `init_tracing`
 */

use anyhow::{Context, Result};
use ordered_store::{init_tracing, EventKind, OrderedStore, StoreConfig};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::var("STORE_CONFIG") {
        Ok(path) => StoreConfig::load(&path)
            .with_context(|| format!("Failed to load store configuration from {}", path))?,
        Err(_) => StoreConfig::default(),
    };
    info!(
        permissions = ?config.permissions.names(),
        strict = config.strict,
        "configuration loaded"
    );

    let values = std::env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<i64>()
                .with_context(|| format!("Not an integer: {}", arg))
        })
        .collect::<Result<Vec<_>>>()?;
    let values = if values.is_empty() { vec![1, 2, 3] } else { values };

    let mut store = OrderedStore::from_sequence_with_config(values, config);
    store.subscribe_all(|event| {
        if matches!(event.kind, EventKind::Added | EventKind::Removed) {
            info!(kind = ?event.kind, length = event.length, "store changed");
        }
    });

    store.add(42)?;
    if !store.is_empty() {
        store.remove_at(0)?;
    }
    store.insert_at(1, -1)?;

    println!("{}", store.render_text()?);
    println!("{}", serde_json::to_string_pretty(&store.audit_stats())?);
    Ok(())
}
