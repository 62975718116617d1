/*!
 * Public store operations
 */

use ordered_store::{OrderedStore, StoreError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_add_remove_insert_scenario() {
    let mut store = OrderedStore::new();
    store.add(1).unwrap();
    store.add(2).unwrap();
    store.add(3).unwrap();
    assert_eq!(store.to_list().unwrap(), vec![1, 2, 3]);
    assert_eq!(store.len(), 3);

    assert_eq!(store.remove_at(1).unwrap(), Some(2));
    assert_eq!(store.to_list().unwrap(), vec![1, 3]);
    assert_eq!(store.len(), 2);

    store.insert_at(1, 9).unwrap();
    assert_eq!(store.to_list().unwrap(), vec![1, 9, 3]);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_get_out_of_range_fails() {
    let store = OrderedStore::from_array([10, 20]);
    assert_eq!(store.get(1).unwrap(), Some(&20));
    assert_eq!(
        store.get(2).unwrap_err(),
        StoreError::IndexOutOfRange { index: 2, length: 2 }
    );
}

#[test]
fn test_try_get_never_fails() {
    let store = OrderedStore::from_slots(vec![Some('a'), None]);
    assert_eq!(store.try_get(0), Some(&'a'));
    assert_eq!(store.try_get(1), None);
    assert_eq!(store.try_get(99), None);
    assert_eq!(store.first(), Some(&'a'));
    assert_eq!(store.last(), None);

    let empty: OrderedStore<char> = OrderedStore::new();
    assert_eq!(empty.last(), None);
}

#[test]
fn test_index_of_and_contains() {
    let store = OrderedStore::from_array(["a", "b", "b"]);
    assert_eq!(store.index_of(&"b").unwrap(), Some(1));
    assert_eq!(store.index_of(&"z").unwrap(), None);
    assert!(store.contains(&"a").unwrap());
    assert!(!store.contains(&"z").unwrap());
}

#[test]
fn test_empty_slot_search() {
    let store = OrderedStore::from_slots(vec![Some(1), None, Some(3), None]);
    assert_eq!(store.first_empty().unwrap(), Some(1));
    assert_eq!(store.position(|v| *v > 1).unwrap(), Some(2));
}

#[test]
fn test_parallel_search_finds_first_match() {
    let mut store: OrderedStore<u32> = (0..50_000).map(|i| i % 1000).collect();
    store.set_parallel_threshold(1024);
    assert_eq!(store.index_of(&999).unwrap(), Some(999));
    assert_eq!(store.index_of(&5000).unwrap(), None);

    store.set(40_000, 5000).unwrap();
    assert_eq!(store.index_of(&5000).unwrap(), Some(40_000));
}

#[test]
fn test_clear_keeps_length() {
    let mut store = OrderedStore::from_array([1, 2, 3]);
    store.clear().unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.to_vec().unwrap(), vec![None, None, None]);
    assert!(store.to_list().unwrap().is_empty());
}

#[test]
fn test_compact_drops_empty_slots() {
    let mut store = OrderedStore::from_slots(vec![None, Some(1), None, Some(2)]);
    assert_eq!(store.compact().unwrap(), 2);
    assert_eq!(store.to_vec().unwrap(), vec![Some(1), Some(2)]);
}

#[test]
fn test_set_replaces_or_grows() {
    let mut store = OrderedStore::from_array([1, 2]);
    store.set(0, 7).unwrap();
    assert_eq!(store.to_list().unwrap(), vec![7, 2]);

    store.set(4, 9).unwrap();
    assert_eq!(store.len(), 5);
    assert_eq!(store.to_vec().unwrap(), vec![Some(7), Some(2), None, None, Some(9)]);
}

#[test]
fn test_insert_past_end_grows() {
    let mut store = OrderedStore::from_array([1]);
    store.insert_at(3, 4).unwrap();
    assert_eq!(store.to_vec().unwrap(), vec![Some(1), None, None, Some(4)]);
}

#[test]
fn test_prepend_keeps_order() {
    let mut store = OrderedStore::from_array([3, 4]);
    store.prepend([1, 2]).unwrap();
    assert_eq!(store.to_list().unwrap(), vec![1, 2, 3, 4]);

    let mut empty = OrderedStore::new();
    empty.prepend([5]).unwrap();
    assert_eq!(empty.to_list().unwrap(), vec![5]);
}

#[test]
fn test_copy_and_paste() {
    let mut store = OrderedStore::from_array([1, 2, 3]);
    let clip = store.copy_range(1, 2).unwrap();
    assert_eq!(clip, vec![Some(2), Some(3)]);

    store.paste_at(0, clip).unwrap();
    assert_eq!(store.to_list().unwrap(), vec![2, 3, 1, 2, 3]);

    assert!(matches!(
        store.copy_range(4, 3),
        Err(StoreError::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_remove_at_out_of_range_fails() {
    let mut store = OrderedStore::from_array([1]);
    assert!(matches!(
        store.remove_at(1),
        Err(StoreError::IndexOutOfRange { index: 1, length: 1 })
    ));
}

#[test]
fn test_views() {
    let store = OrderedStore::from_slots(vec![Some(1), None, Some(3)]);
    let view = store.view().unwrap();
    assert_eq!(view.len(), 3);
    assert_eq!(view.value(2), Some(&3));
    assert_eq!(view.value(1), None);

    let reversed: Vec<_> = store.iter().unwrap().rev().collect();
    assert_eq!(reversed, vec![Some(&3), None, Some(&1)]);
    let owned: Vec<_> = store.into_iter().collect();
    assert_eq!(owned, vec![Some(1), None, Some(3)]);
}

#[test]
fn test_ordering() {
    let a = OrderedStore::from_array([1, 2]);
    let b = OrderedStore::from_array([1, 3]);
    assert!(a < b);
    assert_eq!(a.compare_with(&vec![1, 2]).unwrap(), std::cmp::Ordering::Equal);
    assert_eq!(
        a.compare_with(&vec![Some(1), None]).unwrap(),
        std::cmp::Ordering::Greater
    );
    assert!(matches!(
        a.compare_with(&"text"),
        Err(StoreError::InvalidComparison { .. })
    ));
}

proptest! {
    #[test]
    fn prop_get_returns_add_order(values in proptest::collection::vec(any::<i64>(), 0..64)) {
        let mut store = OrderedStore::new();
        for v in &values {
            store.add(*v).unwrap();
        }
        prop_assert_eq!(store.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(store.get(i).unwrap(), Some(v));
        }
    }
}
