/*!
 * Audit trail of gate checks
 */

use ordered_store::permissions::AuditSeverity;
use ordered_store::{OrderedStore, Operation, Permissions, StoreConfig};

#[test]
fn test_add_all_checks_once_per_item() {
    let mut store = OrderedStore::new();
    store.add_all([1, 2, 3]).unwrap();
    assert_eq!(store.audit_stats().total_checks, 3);

    store.add_all(Vec::new()).unwrap();
    assert_eq!(store.audit_stats().total_checks, 3);
}

#[test]
fn test_every_check_is_counted() {
    let mut store = OrderedStore::new();
    store.add(1).unwrap();
    store.add(2).unwrap();
    store.set_permissions(Permissions::READ_ONLY);
    store.add(3).unwrap();
    store.remove_at(0).unwrap();

    let stats = store.audit_stats();
    assert_eq!(stats.total_checks, 4);
    assert_eq!(stats.total_denials, 2);
    assert_eq!(stats.denials_by_operation.get(&Operation::Add), Some(&1));
    assert_eq!(stats.denials_by_operation.get(&Operation::Remove), Some(&1));
}

#[test]
fn test_severity_follows_denial_mode() {
    let mut store: OrderedStore<u8> = OrderedStore::with_config(StoreConfig::read_only());
    store.add(1).unwrap();
    store.set_strict(true);
    assert!(store.add(2).is_err());

    let recent = store.recent_denials(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].severity, AuditSeverity::Critical);
    assert_eq!(recent[1].severity, AuditSeverity::Warning);
    assert!(recent.iter().all(|e| e.store == store.id()));
}

#[test]
fn test_retention_is_bounded() {
    let mut config = StoreConfig::read_only();
    config.audit_capacity = 3;
    let mut store: OrderedStore<u8> = OrderedStore::with_config(config);
    for i in 0..10 {
        store.add(i).unwrap();
    }

    let stats = store.audit_stats();
    assert_eq!(stats.total_denials, 10);
    assert_eq!(stats.retained_events, 3);
}

#[test]
fn test_stats_serialize() {
    let mut store: OrderedStore<u8> = OrderedStore::with_config(StoreConfig::read_only());
    store.clear().unwrap();
    let json = serde_json::to_value(store.audit_stats()).unwrap();
    assert_eq!(json["total_denials"], 1);
    assert_eq!(json["denials_by_operation"]["clear"], 1);
}
