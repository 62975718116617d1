/*!
 * Shift and move behaviour through the public API
 */

use ordered_store::{OrderedStore, StoreError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_shift_right_opens_gap() {
    let mut store = OrderedStore::from_array([1, 2, 3]);
    store.shift_right(1, 2).unwrap();
    assert_eq!(
        store.to_vec().unwrap(),
        vec![Some(1), None, None, Some(2), Some(3)]
    );
}

#[test]
fn test_shift_right_past_end_leaves_store() {
    let mut store = OrderedStore::from_array([1, 2]);
    store.shift_right(5, 1).unwrap();
    store.shift_right(2, 3).unwrap();
    assert_eq!(store.len(), 2);

    store.shift_left(5, 1).unwrap();
    assert_eq!(store.to_vec().unwrap(), vec![Some(1), Some(2)]);
}

#[test]
fn test_shift_left_closes_gap() {
    let mut store = OrderedStore::from_array([1, 2, 3, 4, 5]);
    store.shift_left(1, 2).unwrap();
    assert_eq!(store.to_list().unwrap(), vec![1, 4, 5]);

    // A gap running past the end only removes what exists
    store.shift_left(2, 10).unwrap();
    assert_eq!(store.to_list().unwrap(), vec![1, 4]);
}

#[test]
fn test_move_item_grows_to_destination() {
    let mut store = OrderedStore::from_array([1, 2, 3]);
    store.move_item(1, 5).unwrap();
    assert_eq!(store.len(), 6);
    assert_eq!(
        store.to_vec().unwrap(),
        vec![Some(1), Some(2), Some(3), None, None, Some(2)]
    );
}

#[test]
fn test_move_item_destination_beyond_isize_fails() {
    let mut store = OrderedStore::from_array([1, 2, 3]);
    let err = store.move_item(0, usize::MAX).unwrap_err();
    assert_eq!(
        err,
        StoreError::IndexOutOfRange {
            index: usize::MAX,
            length: 3
        }
    );
    assert_eq!(store.to_list().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_move_item_invalid_source_is_noop() {
    let mut store = OrderedStore::from_array([1, 2]);
    store.move_item(5, 0).unwrap();
    assert_eq!(store.to_list().unwrap(), vec![1, 2]);
}

proptest! {
    #[test]
    fn prop_shift_round_trip(
        values in proptest::collection::vec(any::<u16>(), 0..32),
        start in 0usize..40,
        count in 0usize..8,
    ) {
        let mut store = OrderedStore::from_sequence(values.clone());
        store.shift_right(start, count).unwrap();
        store.shift_left(start, count).unwrap();

        let restored = store.to_vec().unwrap();
        prop_assert_eq!(restored.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            if i < start || i >= start + count {
                prop_assert_eq!(restored.get(i).cloned().flatten(), Some(*v));
            }
        }
    }

    #[test]
    fn prop_move_past_end_grows_exactly(
        values in proptest::collection::vec(any::<i32>(), 1..32),
        source in 0usize..32,
        extra in 0usize..16,
    ) {
        let source = source % values.len();
        let destination = values.len() + extra;
        let mut store = OrderedStore::from_sequence(values.clone());
        store.move_item(source, destination).unwrap();

        prop_assert_eq!(store.len(), destination + 1);
        prop_assert_eq!(store.get(destination).unwrap(), Some(&values[source]));
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(store.get(i).unwrap(), Some(v));
        }
    }
}
