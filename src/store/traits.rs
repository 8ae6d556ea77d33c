//! Storage capability traits.
//!
//! Stores own the values and the capacity constant; the policy layer owns
//! eviction order and frequency metadata. The policy reads the capacity
//! through [`StoreCore::capacity`] but never mutates it, which keeps the
//! eviction logic independent of how values are stored.

/// Read-side store operations common to all backends.
pub trait StoreCore<K, V> {
    /// Fetch a value by key.
    fn get(&self, key: &K) -> Option<&V>;

    /// Check if a key exists.
    fn contains(&self, key: &K) -> bool;

    /// Current number of entries.
    fn len(&self) -> usize;

    /// Check if the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of live entries the store accepts.
    fn capacity(&self) -> usize;

    /// Check if the store is at its configured capacity.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

/// Mutable store operations.
///
/// `insert` replaces and returns the previous value for an existing key.
/// Capacity is the caller's problem: the policy must make room (evict)
/// before inserting a new key into a full store.
pub trait StoreMut<K, V>: StoreCore<K, V> {
    /// Insert or update a value. Returns the previous value if present.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Remove a value by key.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Remove all entries.
    fn clear(&mut self);
}
