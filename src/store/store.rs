/*!
 * Ordered Store
 * Gated, observable, array-backed sequence of optional slots
 */

use super::config::{RemovalStrategy, StoreConfig};
use super::events::{EventHooks, EventKind, Notification, Payload, SubscriptionId};
use super::primitives::Transfer;
use super::search::find_first;
use crate::core::errors::{StoreError, StoreResult};
use crate::core::types::{Slot, StoreId};
use crate::permissions::{AccessGate, AccessPolicy, AuditEvent, AuditStats, Operation, Permissions};
use std::sync::Arc;
use tracing::debug;

/// An ordered, resizable sequence of optional values.
///
/// Every public operation is classified with an [`Operation`] and passes the
/// [`AccessGate`] before it touches a slot. A denied mutation is a silent
/// no-op unless the store is strict, in which case it returns
/// [`StoreError::AccessDenied`].
///
/// Mutation takes `&mut self`: there is exactly one writer at a time and a
/// read cannot overlap a write. Use [`SharedStore`](super::SharedStore) to
/// share a store between threads.
///
/// # Example
///
/// ```
/// use ordered_store::OrderedStore;
///
/// let mut store = OrderedStore::new();
/// store.add(1).unwrap();
/// store.add(2).unwrap();
/// store.add(3).unwrap();
/// store.remove_at(1).unwrap();
/// store.insert_at(1, 9).unwrap();
/// assert_eq!(store.to_list().unwrap(), vec![1, 9, 3]);
/// ```
#[derive(Debug)]
pub struct OrderedStore<T> {
    pub(super) id: StoreId,
    pub(super) items: Vec<Slot<T>>,
    pub(super) gate: AccessGate,
    pub(super) shift_on_remove: bool,
    pub(super) parallel_threshold: usize,
    pub(super) hooks: EventHooks<T>,
}

// =============================================================================
// Construction, configuration and hooks
// =============================================================================

impl<T> OrderedStore<T> {
    /// Empty store with the default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Empty store with the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self::from_slots_with_config(Vec::new(), config)
    }

    pub(crate) fn from_slots_with_config(items: Vec<Slot<T>>, config: StoreConfig) -> Self {
        let store = Self {
            id: StoreId::new(),
            items,
            gate: config.gate(),
            shift_on_remove: config.shift_on_remove,
            parallel_threshold: config.parallel_search_threshold,
            hooks: EventHooks::new(),
        };
        debug!(store = %store.id, length = store.items.len(), "store created");
        store
    }

    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Number of slots, empty ones included
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> StoreConfig {
        StoreConfig {
            permissions: self.gate.permissions(),
            locked: self.gate.is_locked(),
            strict: self.gate.is_strict(),
            shift_on_remove: self.shift_on_remove,
            parallel_search_threshold: self.parallel_threshold,
            audit_capacity: self.gate.audit().capacity(),
        }
    }

    pub fn permissions(&self) -> Permissions {
        self.gate.permissions()
    }

    pub fn set_permissions(&mut self, permissions: Permissions) {
        self.gate.set_permissions(permissions);
    }

    pub fn grant(&mut self, flags: Permissions) {
        self.gate.grant(flags);
    }

    pub fn revoke(&mut self, flags: Permissions) {
        self.gate.revoke(flags);
    }

    /// Block every mutation, regardless of permissions
    pub fn lock(&mut self) {
        self.gate.set_locked(true);
    }

    pub fn unlock(&mut self) {
        self.gate.set_locked(false);
    }

    pub fn is_locked(&self) -> bool {
        self.gate.is_locked()
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.gate.set_strict(strict);
    }

    pub fn is_strict(&self) -> bool {
        self.gate.is_strict()
    }

    pub fn set_removal(&mut self, strategy: RemovalStrategy) {
        self.shift_on_remove = strategy == RemovalStrategy::Shift;
    }

    pub fn removal(&self) -> RemovalStrategy {
        if self.shift_on_remove {
            RemovalStrategy::Shift
        } else {
            RemovalStrategy::FilterRepack
        }
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Chain an extra access policy after the flag check
    pub fn add_policy(&mut self, policy: Arc<dyn AccessPolicy>) {
        self.gate.add_policy(policy);
    }

    pub fn audit_stats(&self) -> AuditStats {
        self.gate.audit_stats()
    }

    /// Most recent denials, newest first
    pub fn recent_denials(&self, limit: usize) -> Vec<AuditEvent> {
        self.gate.audit().recent(limit)
    }

    /// Observe one kind of event
    pub fn subscribe<F>(&mut self, kind: EventKind, callback: F) -> SubscriptionId
    where
        F: Fn(&Notification<'_, T>) + Send + Sync + 'static,
    {
        self.hooks.subscribe(Some(kind), callback)
    }

    /// Observe every event
    pub fn subscribe_all<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&Notification<'_, T>) + Send + Sync + 'static,
    {
        self.hooks.subscribe(None, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.hooks.unsubscribe(id)
    }

    /// Take the slots out, ending the store
    pub fn into_slots(self) -> Vec<Slot<T>> {
        self.items
    }

    /// Slots without a gate check, for crate-internal rendering
    pub(crate) fn view_unchecked(&self) -> &[Slot<T>] {
        &self.items
    }

    pub(crate) fn authorize(&self, operation: Operation) -> StoreResult<bool> {
        self.gate.authorize(self.id, operation, self.items.len())
    }

    pub(super) fn notify(&self, kind: EventKind, operation: Operation, payload: Payload<'_, T>) {
        if self.hooks.is_empty() {
            return;
        }
        self.hooks.emit(&Notification {
            store: self.id,
            kind,
            operation,
            length: self.items.len(),
            payload,
        });
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Value at `index`. Fails with `IndexOutOfRange` outside `0..len`.
    ///
    /// `Ok(None)` means the slot is empty, or the read was silently denied.
    pub fn get(&self, index: usize) -> StoreResult<Option<&T>> {
        if !self.authorize(Operation::IndexRead)? {
            return Ok(None);
        }
        match self.items.get(index) {
            Some(slot) => Ok(slot.as_ref()),
            None => Err(StoreError::out_of_range(index, self.items.len())),
        }
    }

    /// Value at `index`, or `None` when out of range, empty or denied. Never fails.
    pub fn try_get(&self, index: usize) -> Option<&T> {
        match self.authorize(Operation::IndexRead) {
            Ok(true) => self.items.get(index).and_then(Option::as_ref),
            _ => None,
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.try_get(0)
    }

    pub fn last(&self) -> Option<&T> {
        self.items.len().checked_sub(1).and_then(|i| self.try_get(i))
    }

    /// Clone of every slot in index order
    pub fn to_vec(&self) -> StoreResult<Vec<Slot<T>>>
    where
        T: Clone,
    {
        if !self.authorize(Operation::Read)? {
            return Ok(Vec::new());
        }
        Ok(self.items.clone())
    }

    /// Clone of every filled slot in index order
    pub fn to_list(&self) -> StoreResult<Vec<T>>
    where
        T: Clone,
    {
        if !self.authorize(Operation::Read)? {
            return Ok(Vec::new());
        }
        Ok(self.items.iter().flatten().cloned().collect())
    }

    // =========================================================================
    // Mutations that need no cloning
    // =========================================================================

    /// Empty every slot in place; the length is unchanged
    pub fn clear(&mut self) -> StoreResult<()> {
        let op = Operation::Clear;
        if !self.authorize(op)? {
            return Ok(());
        }
        self.notify(EventKind::Clearing, op, Payload::Count(self.items.len()));
        for slot in self.items.iter_mut() {
            *slot = None;
        }
        self.notify(EventKind::Cleared, op, Payload::Count(self.items.len()));
        Ok(())
    }

    /// Drop every empty slot. Returns how many were dropped.
    pub fn compact(&mut self) -> StoreResult<usize> {
        let op = Operation::Privileged;
        if !self.authorize(op)? {
            return Ok(0);
        }
        Ok(self.repack(op, |_, slot| slot.is_some()))
    }
}

// =============================================================================
// Structural mutations
// =============================================================================

impl<T: Clone> OrderedStore<T> {
    /// Append one item
    pub fn add(&mut self, item: T) -> StoreResult<()> {
        let op = Operation::Add;
        if !self.authorize(op)? {
            return Ok(());
        }
        self.notify(EventKind::Adding, op, Payload::Item(&item));
        let index = self.items.len();
        self.resize(op, index + 1);
        self.items[index] = Some(item);
        self.notify(
            EventKind::Added,
            op,
            Payload::Slot {
                index,
                value: self.items[index].as_ref(),
            },
        );
        Ok(())
    }

    /// Append items one by one, preserving input order. Each item is a
    /// separate Add check.
    pub fn add_all<I>(&mut self, items: I) -> StoreResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.add(item)?;
        }
        Ok(())
    }

    /// Insert at `index`, moving later slots up by one.
    ///
    /// At or past the end the store grows so the value lands at `index`.
    pub fn insert_at(&mut self, index: usize, value: T) -> StoreResult<()> {
        let op = Operation::Add;
        if !self.authorize(op)? {
            return Ok(());
        }
        self.insert_slot(op, index, value);
        Ok(())
    }

    /// Insert values at the front, in order
    pub fn prepend<I>(&mut self, values: I) -> StoreResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        let op = Operation::Add;
        if !self.authorize(op)? {
            return Ok(());
        }
        let values: Vec<Slot<T>> = values.into_iter().map(Some).collect();
        self.write_batch(op, 0, values);
        Ok(())
    }

    /// Replace the value at `index`.
    ///
    /// Out of range this becomes an insertion (Add class) that grows the store.
    pub fn set(&mut self, index: usize, value: T) -> StoreResult<()> {
        if index >= self.items.len() {
            return self.insert_at(index, value);
        }
        let op = Operation::Replace;
        if !self.authorize(op)? {
            return Ok(());
        }
        self.items[index] = Some(value);
        self.notify(
            EventKind::Updated,
            op,
            Payload::Slot {
                index,
                value: self.items[index].as_ref(),
            },
        );
        Ok(())
    }

    /// Copy the value at `from` to `to`, growing the store if needed.
    ///
    /// An invalid `from` is a no-op. A `to` beyond `isize::MAX` fails with
    /// `IndexOutOfRange`.
    pub fn move_item(&mut self, from: usize, to: usize) -> StoreResult<()> {
        let op = Operation::Move;
        if !self.authorize(op)? {
            return Ok(());
        }
        let destination =
            isize::try_from(to).map_err(|_| StoreError::out_of_range(to, self.items.len()))?;
        self.move_slot(op, from, destination, Transfer::Copy);
        Ok(())
    }

    /// Open a `count`-wide gap of empty slots at `start`.
    ///
    /// There is nothing to shift when `start` is at or past the end, so the
    /// store is left as is.
    pub fn shift_right(&mut self, start: usize, count: usize) -> StoreResult<()> {
        let op = Operation::Shift;
        if !self.authorize(op)? {
            return Ok(());
        }
        if start >= self.items.len() {
            return Ok(());
        }
        self.open_gap(op, start, count);
        Ok(())
    }

    /// Remove the `count` slots starting at `start`, sliding later slots down
    pub fn shift_left(&mut self, start: usize, count: usize) -> StoreResult<()> {
        let op = Operation::Shift;
        if !self.authorize(op)? {
            return Ok(());
        }
        self.close_gap(op, start, count);
        Ok(())
    }

    /// Remove the slot at `index` and return its value
    pub fn remove_at(&mut self, index: usize) -> StoreResult<Option<T>> {
        let op = Operation::Remove;
        if !self.authorize(op)? {
            return Ok(None);
        }
        if index >= self.items.len() {
            return Err(StoreError::out_of_range(index, self.items.len()));
        }

        self.notify(
            EventKind::Removing,
            op,
            Payload::Slot {
                index,
                value: self.items[index].as_ref(),
            },
        );
        let value = self.items[index].take();
        match self.removal() {
            RemovalStrategy::Shift => self.close_gap(op, index, 1),
            RemovalStrategy::FilterRepack => {
                self.repack(op, |i, _| i != index);
            }
        }
        self.notify(
            EventKind::Removed,
            op,
            Payload::Slot {
                index,
                value: value.as_ref(),
            },
        );
        Ok(value)
    }

    /// Clone `count` slots starting at `start`
    pub fn copy_range(&self, start: usize, count: usize) -> StoreResult<Vec<Slot<T>>> {
        if !self.authorize(Operation::Copy)? {
            return Ok(Vec::new());
        }
        let end = start.saturating_add(count);
        if end > self.items.len() {
            return Err(StoreError::out_of_range(end - 1, self.items.len()));
        }
        Ok(self.items[start..end].to_vec())
    }

    /// Insert a batch of slots at `index`, moving later slots up
    pub fn paste_at(&mut self, index: usize, slots: Vec<Slot<T>>) -> StoreResult<()> {
        let op = Operation::Paste;
        if !self.authorize(op)? {
            return Ok(());
        }
        self.write_batch(op, index, slots);
        Ok(())
    }
}

// =============================================================================
// Value searches
// =============================================================================

impl<T: Sync> OrderedStore<T> {
    /// Index of the first filled slot matching `predicate`
    pub fn position<P>(&self, predicate: P) -> StoreResult<Option<usize>>
    where
        P: Fn(&T) -> bool + Sync,
    {
        if !self.authorize(Operation::Read)? {
            return Ok(None);
        }
        Ok(find_first(&self.items, self.parallel_threshold, |slot| {
            slot.is_some_and(&predicate)
        }))
    }

    /// Index of the first empty slot
    pub fn first_empty(&self) -> StoreResult<Option<usize>> {
        if !self.authorize(Operation::Read)? {
            return Ok(None);
        }
        Ok(find_first(&self.items, self.parallel_threshold, |slot| {
            slot.is_none()
        }))
    }
}

impl<T: PartialEq + Sync> OrderedStore<T> {
    /// Index of the first slot equal to `item`
    pub fn index_of(&self, item: &T) -> StoreResult<Option<usize>> {
        self.position(|value| value == item)
    }

    pub fn contains(&self, item: &T) -> StoreResult<bool> {
        Ok(self.index_of(item)?.is_some())
    }
}

impl<T: Clone + PartialEq + Sync> OrderedStore<T> {
    /// Remove `item`. Returns how many slots were removed.
    ///
    /// The shifting strategy removes the first occurrence only; filter-repack
    /// removes every occurrence.
    pub fn remove(&mut self, item: &T) -> StoreResult<usize> {
        let op = Operation::Remove;
        if !self.authorize(op)? {
            return Ok(0);
        }
        self.notify(EventKind::Removing, op, Payload::Item(item));

        let removed = match self.removal() {
            RemovalStrategy::Shift => {
                let found = find_first(&self.items, self.parallel_threshold, |slot| {
                    slot == Some(item)
                });
                match found {
                    Some(index) => {
                        self.close_gap(op, index, 1);
                        1
                    }
                    None => 0,
                }
            }
            RemovalStrategy::FilterRepack => self.repack(op, |_, slot| slot.as_ref() != Some(item)),
        };

        self.notify(EventKind::Removed, op, Payload::Count(removed));
        Ok(removed)
    }
}

impl<T> Default for OrderedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
