/*!
 * Keyed Store
 * Key/value collection composed from the ordered store's public operations
 *
 * Pairs live in insertion order inside an [`OrderedStore`]. Lookups are
 * linear (parallel above the store's search threshold) and the first pair
 * with a matching key wins. Permissions and locking are those of the inner
 * store.
 */

use crate::core::errors::{StoreError, StoreResult};
use crate::permissions::Operation;
use crate::render::{render_pair, PairLike, Render};
use crate::store::{OrderedStore, StoreConfig};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::debug;

/// A key and its value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K: Render, V: Render> PairLike for Pair<K, V> {
    type Key = K;
    type Value = V;

    fn key(&self) -> &K {
        &self.key
    }

    fn value(&self) -> &V {
        &self.value
    }
}

impl<K: Render, V: Render> Render for Pair<K, V> {
    fn render_into(&self, out: &mut String) {
        render_pair(self, out);
    }
}

/// Key/value collection over an ordered store
#[derive(Debug)]
pub struct KeyedStore<K, V> {
    inner: OrderedStore<Pair<K, V>>,
    enforce_unique_keys: bool,
}

impl<K, V> KeyedStore<K, V> {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            inner: OrderedStore::with_config(config),
            enforce_unique_keys: false,
        }
    }

    /// The backing store, for configuration and hooks
    pub fn inner(&self) -> &OrderedStore<Pair<K, V>> {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut OrderedStore<Pair<K, V>> {
        &mut self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn enforces_unique_keys(&self) -> bool {
        self.enforce_unique_keys
    }

    pub fn clear(&mut self) -> StoreResult<()> {
        self.inner.clear()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> StoreResult<impl Iterator<Item = &K> + '_> {
        Ok(self.inner.values()?.map(|pair| &pair.key))
    }

    /// Values in insertion order
    pub fn values(&self) -> StoreResult<impl Iterator<Item = &V> + '_> {
        Ok(self.inner.values()?.map(|pair| &pair.value))
    }

    /// Pairs accepted by `selector`, in order
    pub fn pairs_where<F>(&self, selector: F) -> StoreResult<Vec<&Pair<K, V>>>
    where
        F: Fn(&Pair<K, V>) -> bool,
    {
        Ok(self.inner.values()?.filter(|pair| selector(pair)).collect())
    }
}

impl<K, V> KeyedStore<K, V>
where
    K: PartialEq + Sync,
    V: Sync,
{
    fn index_of_key(&self, key: &K) -> StoreResult<Option<usize>> {
        self.inner.position(|pair| pair.key == *key)
    }

    pub fn contains_key(&self, key: &K) -> StoreResult<bool> {
        Ok(self.index_of_key(key)?.is_some())
    }

    /// Value for `key`; fails with `KeyNotFound` when absent
    pub fn get(&self, key: &K) -> StoreResult<&V>
    where
        K: Debug,
    {
        self.try_get(key)?
            .ok_or_else(|| StoreError::key_not_found(key))
    }

    /// Value for `key`, or `None` when absent
    pub fn try_get(&self, key: &K) -> StoreResult<Option<&V>> {
        match self.index_of_key(key)? {
            Some(index) => Ok(self.inner.get(index)?.map(|pair| &pair.value)),
            None => Ok(None),
        }
    }
}

impl<K, V> KeyedStore<K, V>
where
    K: PartialEq + Sync,
    V: PartialEq + Sync,
{
    pub fn contains_value(&self, value: &V) -> StoreResult<bool> {
        Ok(self.inner.position(|pair| pair.value == *value)?.is_some())
    }
}

impl<K, V> KeyedStore<K, V>
where
    K: Clone + PartialEq + Sync,
    V: Clone + Sync,
{
    /// Add a pair. Returns false when skipped because the key exists and
    /// unique keys are enforced, or the add was silently denied.
    pub fn add(&mut self, key: K, value: V) -> StoreResult<bool> {
        self.add_pair(Pair::new(key, value))
    }

    pub fn add_pair(&mut self, pair: Pair<K, V>) -> StoreResult<bool> {
        if self.enforce_unique_keys && self.contains_key(&pair.key)? {
            return Ok(false);
        }
        let before = self.inner.len();
        self.inner.add(pair)?;
        Ok(self.inner.len() > before)
    }

    /// Add pairs in order
    pub fn add_all<I>(&mut self, pairs: I) -> StoreResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in pairs {
            self.add(key, value)?;
        }
        Ok(())
    }

    /// Overwrite the first pair with `key`, or add a new pair
    pub fn set(&mut self, key: K, value: V) -> StoreResult<()> {
        match self.index_of_key(&key)? {
            Some(index) => self.inner.set(index, Pair::new(key, value)),
            None => self.add(key, value).map(|_| ()),
        }
    }

    /// Remove the first pair with `key` and return its value
    pub fn remove(&mut self, key: &K) -> StoreResult<Option<V>> {
        match self.index_of_key(key)? {
            Some(index) => Ok(self.inner.remove_at(index)?.map(|pair| pair.value)),
            None => Ok(None),
        }
    }

    /// Remove the first pair for each key. Returns how many were removed.
    pub fn remove_all<'a, I>(&mut self, keys: I) -> StoreResult<usize>
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let mut removed = 0;
        for key in keys {
            if self.remove(key)?.is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Toggle unique keys. Turning it on repacks the pairs, keeping the first
    /// occurrence of each key in order.
    pub fn set_enforce_unique_keys(&mut self, enforce: bool) -> StoreResult<()> {
        if enforce && !self.enforce_unique_keys {
            if !self.inner.authorize(Operation::Remove)? {
                return Ok(());
            }
            let mut seen: Vec<K> = Vec::new();
            let dropped = self.inner.repack(Operation::Remove, |_, slot| match slot {
                Some(pair) if seen.contains(&pair.key) => false,
                Some(pair) => {
                    seen.push(pair.key.clone());
                    true
                }
                None => true,
            });
            debug!(store = %self.inner.id(), dropped, "enforcing unique keys");
        }
        self.enforce_unique_keys = enforce;
        Ok(())
    }
}

impl<K, V> Default for KeyedStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Render, V: Render> Render for KeyedStore<K, V> {
    fn render_into(&self, out: &mut String) {
        out.push('{');
        let pairs = self.inner.view_unchecked().iter().flatten();
        for (i, pair) in pairs.enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            pair.render_into(out);
        }
        out.push('}');
    }
}

impl<K: Render, V: Render> KeyedStore<K, V> {
    /// Gated text rendering (Convert class)
    pub fn render_text(&self) -> StoreResult<String> {
        if !self.inner.authorize(Operation::Convert)? {
            return Ok(String::new());
        }
        Ok(Render::render(self))
    }
}
