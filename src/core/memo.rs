//! Shared memoization cache.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Append-only cache of computed values keyed by `K`.
///
/// Values are handed out as `Arc<V>`, so every lookup of the same key yields
/// the same allocation. Entries are never evicted; [`clear`](Self::clear) is
/// the only way to release them. Cloning a `Memo` shares the underlying map.
pub struct Memo<K, V> {
    entries: Arc<RwLock<HashMap<K, Arc<V>>>>,
}

impl<K: Eq + Hash, V> Memo<K, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Return the cached value for `key`, computing it with `compute` on a
    /// miss. If two callers race on the same key, the first insert wins and
    /// both receive it.
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> Arc<V>
    where
        F: FnOnce(&K) -> V,
    {
        if let Some(value) = self.entries.read().get(&key) {
            return Arc::clone(value);
        }

        let value = Arc::new(compute(&key));
        let mut entries = self.entries.write();
        Arc::clone(entries.entry(key).or_insert(value))
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl<K: Eq + Hash, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for Memo<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}
