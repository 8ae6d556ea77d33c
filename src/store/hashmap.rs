//! HashMap-backed store.
//!
//! - Keys map to owned values in an `FxHashMap<K, V>`; no sharing, the
//!   store is the single owner.
//! - Capacity counts entries, not bytes, and is fixed at construction.
//!   The store only reports it; making room before insert is the policy's
//!   job.
//!
//! ## Example Usage
//!
//! ```
//! use freqcache::store::hashmap::HashMapStore;
//! use freqcache::store::traits::{StoreCore, StoreMut};
//!
//! let mut store: HashMapStore<u64, String> = HashMapStore::new(2);
//! store.insert(1, "a".to_string());
//! assert!(store.contains(&1));
//! assert_eq!(store.capacity(), 2);
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::store::traits::{StoreCore, StoreMut};

/// Single-threaded hash-map store with a fixed entry-count capacity.
#[derive(Debug)]
pub struct HashMapStore<K, V> {
    map: FxHashMap<K, V>,
    capacity: usize,
}

impl<K, V> HashMapStore<K, V>
where
    K: Eq + Hash,
{
    /// Create a store with a fixed capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            capacity,
        }
    }

    /// Fetch a mutable reference to a value by key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.map.get_mut(key)
    }

    /// Iterate over the stored keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }
}

impl<K, V> StoreCore<K, V> for HashMapStore<K, V>
where
    K: Eq + Hash,
{
    fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> StoreMut<K, V> for HashMapStore<K, V>
where
    K: Eq + Hash,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut store: HashMapStore<&str, i32> = HashMapStore::new(4);
        assert_eq!(store.insert("a", 1), None);
        assert_eq!(store.insert("a", 2), Some(1));
        assert_eq!(store.get(&"a"), Some(&2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn capacity_is_reported_not_enforced() {
        // Making room before insert is the policy's job.
        let mut store: HashMapStore<u32, u32> = HashMapStore::new(1);
        store.insert(1, 1);
        assert!(store.is_full());
        store.insert(2, 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.capacity(), 1);
    }

    #[test]
    fn remove_and_clear() {
        let mut store: HashMapStore<&str, i32> = HashMapStore::new(4);
        store.insert("a", 1);
        store.insert("b", 2);
        assert_eq!(store.remove(&"a"), Some(1));
        assert_eq!(store.remove(&"a"), None);
        store.clear();
        assert!(store.is_empty());
    }
}
