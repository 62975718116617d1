/*!
 * Configuration files and presets
 */

use ordered_store::{OrderedStore, Permissions, RemovalStrategy, StoreConfig, StoreError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"permissions": "READ | INDEX_READ | ADD", "strict": true, "shift_on_remove": false}}"#
    )
    .unwrap();

    let config = StoreConfig::load(file.path()).unwrap();
    assert_eq!(
        config.permissions,
        Permissions::READ | Permissions::INDEX_READ | Permissions::ADD
    );
    assert!(config.strict);
    assert_eq!(config.removal(), RemovalStrategy::FilterRepack);

    let mut store = OrderedStore::with_config(config);
    store.add(1).unwrap();
    assert!(store.remove_at(0).unwrap_err().is_access_denied());
    assert_eq!(store.get(0).unwrap(), Some(&1));
}

#[test]
fn test_missing_file_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StoreConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StoreError::Configuration(_)));
}

#[test]
fn test_store_reports_its_config() {
    let mut config = StoreConfig::read_only()
        .with_removal(RemovalStrategy::FilterRepack)
        .with_parallel_threshold(64);
    config.audit_capacity = 16;
    let store: OrderedStore<u8> = OrderedStore::with_config(config.clone());
    assert_eq!(store.config(), config);
}

#[test]
fn test_read_only_preset_ignores_mutations() {
    let mut store = OrderedStore::from_sequence_with_config([1, 2], StoreConfig::read_only());
    store.add(3).unwrap();
    store.clear().unwrap();
    assert_eq!(store.to_list().unwrap(), vec![1, 2]);
}
