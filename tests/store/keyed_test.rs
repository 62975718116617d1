/*!
 * Key/value layer
 */

use ordered_store::{KeyedStore, OrderedStore, Pair, Render, StoreConfig, StoreError};
use pretty_assertions::assert_eq;

#[test]
fn test_unique_keys_keep_first_value() {
    let mut store = KeyedStore::new();
    store.set_enforce_unique_keys(true).unwrap();
    assert!(store.add("id", 1).unwrap());
    assert!(!store.add("id", 2).unwrap());
    assert!(!store.add_pair(Pair::new("id", 3)).unwrap());

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&"id").unwrap(), &1);
}

#[test]
fn test_key_not_found() {
    let store: KeyedStore<String, u8> = KeyedStore::new();
    assert!(matches!(
        store.get(&"ghost".to_string()),
        Err(StoreError::KeyNotFound { .. })
    ));
}

#[test]
fn test_lookup_in_large_store() {
    let config = StoreConfig::default().with_parallel_threshold(256);
    let mut store = KeyedStore::with_config(config);
    store.add_all((0..5_000u32).map(|i| (i, i * 2))).unwrap();

    assert_eq!(store.get(&4_321).unwrap(), &8_642);
    assert!(store.try_get(&9_999).unwrap().is_none());
}

#[test]
fn test_uniqueness_toggle_repacks_in_order() {
    let mut store = KeyedStore::new();
    store
        .add_all([("x", 1), ("y", 2), ("x", 3), ("z", 4), ("y", 5)])
        .unwrap();
    store.set_enforce_unique_keys(true).unwrap();
    assert!(store.enforces_unique_keys());
    assert_eq!(store.render(), "{\"x\":1, \"y\":2, \"z\":4}");

    // Turning it off again leaves the pairs alone
    store.set_enforce_unique_keys(false).unwrap();
    store.add("x", 9).unwrap();
    assert_eq!(store.len(), 4);
}

#[test]
fn test_locked_inner_store_blocks_writes() {
    let mut store = KeyedStore::new();
    store.add("a", 1).unwrap();
    store.inner_mut().lock();

    store.set("a", 2).unwrap();
    assert_eq!(store.remove(&"a").unwrap(), None);
    assert_eq!(store.get(&"a").unwrap(), &1);
}

#[test]
fn test_pairs_render_inside_ordered_store() {
    let store = OrderedStore::from_array([Pair::new("k", 1u8), Pair::new("j", 2u8)]);
    assert_eq!(store.render(), "[\"k\":1, \"j\":2]");
}
