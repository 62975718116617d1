/*!
 * Removal strategies
 */

use ordered_store::{OrderedStore, RemovalStrategy, StoreConfig};
use pretty_assertions::assert_eq;

fn store_with(strategy: RemovalStrategy, values: &[i32]) -> OrderedStore<i32> {
    OrderedStore::from_sequence_with_config(
        values.iter().copied(),
        StoreConfig::default().with_removal(strategy),
    )
}

#[test]
fn test_shift_removes_single_occurrence() {
    let mut store = store_with(RemovalStrategy::Shift, &[5, 6, 7]);
    assert_eq!(store.remove(&6).unwrap(), 1);
    assert_eq!(store.len(), 2);
    assert_eq!(store.to_list().unwrap(), vec![5, 7]);
}

#[test]
fn test_shift_removes_first_of_duplicates() {
    let mut store = store_with(RemovalStrategy::Shift, &[1, 2, 1, 3, 1]);
    assert_eq!(store.remove(&1).unwrap(), 1);
    assert_eq!(store.to_list().unwrap(), vec![2, 1, 3, 1]);
}

#[test]
fn test_filter_repack_removes_all_occurrences() {
    let mut store = store_with(RemovalStrategy::FilterRepack, &[1, 2, 1, 3, 1]);
    assert_eq!(store.remove(&1).unwrap(), 3);
    assert_eq!(store.len(), 2);
    assert_eq!(store.to_list().unwrap(), vec![2, 3]);
}

#[test]
fn test_remove_missing_item() {
    for strategy in [RemovalStrategy::Shift, RemovalStrategy::FilterRepack] {
        let mut store = store_with(strategy, &[1, 2]);
        assert_eq!(store.remove(&9).unwrap(), 0);
        assert_eq!(store.len(), 2);
    }
}

#[test]
fn test_remove_at_under_both_strategies() {
    for strategy in [RemovalStrategy::Shift, RemovalStrategy::FilterRepack] {
        let mut store = store_with(strategy, &[4, 4, 5]);
        assert_eq!(store.remove_at(0).unwrap(), Some(4));
        assert_eq!(store.to_list().unwrap(), vec![4, 5]);
    }
}

#[test]
fn test_strategy_can_be_switched() {
    let mut store = store_with(RemovalStrategy::Shift, &[1, 1, 1]);
    store.set_removal(RemovalStrategy::FilterRepack);
    assert_eq!(store.removal(), RemovalStrategy::FilterRepack);
    assert_eq!(store.remove(&1).unwrap(), 3);
    assert!(store.is_empty());
}
