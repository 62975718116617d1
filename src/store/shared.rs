/*!
 * Shared Store
 * Serialized access to one store from many threads
 *
 * Each call holds the lock for its whole duration: two mutations never
 * interleave at the primitive level, and readers never observe a
 * half-finished shift or resize.
 *
 * The lock is not re-entrant. Event callbacks run while the mutating call
 * holds the write lock, so a callback that calls a blocking method on a
 * handle to the same store deadlocks. Callbacks must only use `try_read`,
 * which returns `None` while a mutation is in progress.
 */

use super::store::OrderedStore;
use crate::core::errors::StoreResult;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to a store behind a reader-writer lock
#[derive(Debug)]
pub struct SharedStore<T> {
    inner: Arc<RwLock<OrderedStore<T>>>,
}

impl<T> Clone for SharedStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedStore<T> {
    pub fn new(store: OrderedStore<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Run `f` with shared access
    pub fn read<R>(&self, f: impl FnOnce(&OrderedStore<T>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with shared access if no writer holds the lock, without blocking
    pub fn try_read<R>(&self, f: impl FnOnce(&OrderedStore<T>) -> R) -> Option<R> {
        self.inner.try_read().map(|guard| f(&guard))
    }

    /// Run `f` with exclusive access
    pub fn write<R>(&self, f: impl FnOnce(&mut OrderedStore<T>) -> R) -> R {
        f(&mut self.inner.write())
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<T: Clone> SharedStore<T> {
    pub fn add(&self, item: T) -> StoreResult<()> {
        self.inner.write().add(item)
    }

    pub fn insert_at(&self, index: usize, item: T) -> StoreResult<()> {
        self.inner.write().insert_at(index, item)
    }

    pub fn remove_at(&self, index: usize) -> StoreResult<Option<T>> {
        self.inner.write().remove_at(index)
    }

    /// Clone of the value at `index`
    pub fn get_cloned(&self, index: usize) -> StoreResult<Option<T>> {
        Ok(self.inner.read().get(index)?.cloned())
    }

    pub fn to_list(&self) -> StoreResult<Vec<T>> {
        self.inner.read().to_list()
    }
}

impl<T: Clone + PartialEq + Sync> SharedStore<T> {
    pub fn remove(&self, item: &T) -> StoreResult<usize> {
        self.inner.write().remove(item)
    }

    pub fn contains(&self, item: &T) -> StoreResult<bool> {
        self.inner.read().contains(item)
    }
}

impl<T> From<OrderedStore<T>> for SharedStore<T> {
    fn from(store: OrderedStore<T>) -> Self {
        Self::new(store)
    }
}
