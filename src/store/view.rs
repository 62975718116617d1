/*!
 * Store Views and Conversions
 * Explicit constructors, iteration, read-only list view and ordering
 */

use super::config::StoreConfig;
use super::store::OrderedStore;
use crate::core::errors::{StoreError, StoreResult};
use crate::core::types::Slot;
use crate::permissions::Operation;
use std::any::{type_name, Any};
use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ops::Deref;

impl<T> OrderedStore<T> {
    /// Copy an ordered sequence into a fresh store
    pub fn from_sequence<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_sequence_with_config(values, StoreConfig::default())
    }

    pub fn from_sequence_with_config<I>(values: I, config: StoreConfig) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_slots_with_config(values.into_iter().map(Some).collect(), config)
    }

    /// Move an array into a fresh store
    pub fn from_array<const N: usize>(values: [T; N]) -> Self {
        Self::from_sequence(values)
    }

    /// Build from slots that may already be empty
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Slot<T>>,
    {
        Self::from_slots_with_config(slots.into_iter().collect(), StoreConfig::default())
    }

    /// Iterate over slots in index order. Empty slots yield `None`.
    pub fn iter(&self) -> StoreResult<Iter<'_, T>> {
        Ok(Iter {
            inner: self.as_slots()?.iter(),
        })
    }

    /// Iterate over filled slots only
    pub fn values(&self) -> StoreResult<impl Iterator<Item = &T> + '_> {
        Ok(self.iter()?.flatten())
    }

    /// Positionally indexed read-only view of the slots
    pub fn view(&self) -> StoreResult<SlotView<'_, T>> {
        Ok(SlotView {
            slots: self.as_slots()?,
        })
    }

    /// Borrow the slots; empty when the read is silently denied
    pub fn as_slots(&self) -> StoreResult<&[Slot<T>]> {
        let slots: &[Slot<T>] = if self.authorize(Operation::Read)? {
            &self.items
        } else {
            &[]
        };
        Ok(slots)
    }
}

impl<T> FromIterator<T> for OrderedStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T> IntoIterator for OrderedStore<T> {
    type Item = Slot<T>;
    type IntoIter = std::vec::IntoIter<Slot<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_slots().into_iter()
    }
}

/// Borrowing slot iterator
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Slot<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Read-only list view; derefs to the slot slice
#[derive(Debug, Clone, Copy)]
pub struct SlotView<'a, T> {
    slots: &'a [Slot<T>],
}

impl<'a, T> SlotView<'a, T> {
    /// Value at `index`; `None` when empty or out of range
    pub fn value(&self, index: usize) -> Option<&'a T> {
        self.slots.get(index).and_then(Option::as_ref)
    }
}

impl<T> Deref for SlotView<'_, T> {
    type Target = [Slot<T>];

    fn deref(&self) -> &Self::Target {
        self.slots
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl<T: PartialEq> PartialEq for OrderedStore<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: PartialOrd> PartialOrd for OrderedStore<T> {
    /// Lexicographic over slots; an empty slot orders before any value
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.items.partial_cmp(&other.items)
    }
}

impl<T: Ord + 'static> OrderedStore<T> {
    /// Order against a value of unknown type.
    ///
    /// Accepts another `OrderedStore<T>`, a `Vec<Option<T>>` or a `Vec<T>`;
    /// anything else fails with `InvalidComparison`.
    pub fn compare_with(&self, other: &dyn Any) -> StoreResult<Ordering> {
        if let Some(store) = other.downcast_ref::<OrderedStore<T>>() {
            return Ok(self.items.cmp(&store.items));
        }
        if let Some(slots) = other.downcast_ref::<Vec<Slot<T>>>() {
            return Ok(self.items.as_slice().cmp(slots.as_slice()));
        }
        if let Some(values) = other.downcast_ref::<Vec<T>>() {
            let lhs = self.items.iter().map(Option::as_ref);
            let rhs = values.iter().map(Some);
            return Ok(lhs.cmp(rhs));
        }
        Err(StoreError::InvalidComparison {
            expected: type_name::<OrderedStore<T>>().to_string(),
            found: "unsupported type".to_string(),
        })
    }
}
