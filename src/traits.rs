//! # Cache Trait Hierarchy
//!
//! Capability traits for the cache surface. The cache is composed from a
//! store and a frequency tracker rather than inheriting from a base cache;
//! collaborators program against these traits and never see the internals.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  put(&mut, K, V)                        │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           MutableCache<K, V>            │
//!   │                                         │
//!   │  remove(&K) → Option<V>                 │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LfuCacheTrait<K, V>            │
//!   │                                         │
//!   │  pop_lfu() → Option<(K, V)>             │
//!   │  peek_lfu() → Option<(&K, &V)>          │
//!   │  frequency(&K) → Option<u64>            │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! ## Contract Notes
//!
//! - `put` has no return value and never fails. Putting an existing key
//!   overwrites its value *and* counts as an access (frequency + 1). A new
//!   key inserted at capacity evicts the LFU candidate first.
//! - `get` counts as an access. Use [`contains`](CoreCache::contains) to
//!   probe without disturbing eviction order.

/// Core cache operations shared by every cache surface in this crate.
///
/// # Example
///
/// ```
/// use freqcache::policy::lfu::LfuCache;
/// use freqcache::traits::CoreCache;
///
/// fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.put(*key, value.clone());
///     }
/// }
///
/// let mut cache = LfuCache::new(100);
/// warm(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts or overwrites a key-value pair.
    ///
    /// An existing key keeps its slot: the value is replaced and the key is
    /// promoted (the put counts as an access). A new key inserted when the
    /// cache is full evicts the least-frequently-used entry first, emitting
    /// the eviction notification.
    ///
    /// # Example
    ///
    /// ```
    /// use freqcache::policy::lfu::LfuCache;
    /// use freqcache::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.put(1, "first");
    /// cache.put(1, "second"); // overwrite, frequency 1 → 2
    /// assert_eq!(cache.get(&1), Some(&"second"));
    /// ```
    fn put(&mut self, key: K, value: V);

    /// Gets a reference to a value by key, promoting the key's frequency.
    ///
    /// # Example
    ///
    /// ```
    /// use freqcache::policy::lfu::LfuCache;
    /// use freqcache::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.put(1, "value");
    ///
    /// assert_eq!(cache.get(&1), Some(&"value"));
    /// assert_eq!(cache.get(&99), None);
    /// ```
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    ///
    /// Unlike [`get`](Self::get), this does not affect eviction order.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries in the cache.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries the cache may hold.
    fn capacity(&self) -> usize;

    /// Removes all entries from the cache.
    ///
    /// Does not emit eviction notifications; clearing is not eviction.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use freqcache::policy::lfu::LfuCache;
/// use freqcache::traits::{CoreCache, MutableCache};
///
/// let mut cache = LfuCache::new(10);
/// cache.put(1, "one");
///
/// assert_eq!(cache.remove(&1), Some("one"));
/// assert_eq!(cache.remove(&1), None); // already removed
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a specific key-value pair, returning the value if present.
    fn remove(&mut self, key: &K) -> Option<V>;
}

/// LFU-specific operations that respect frequency order.
///
/// Entries are ordered by access frequency; among entries tied at the
/// lowest frequency, the one least recently promoted into that frequency
/// bucket is the eviction candidate.
///
/// # Example
///
/// ```
/// use freqcache::policy::lfu::LfuCache;
/// use freqcache::traits::{CoreCache, LfuCacheTrait};
///
/// let mut cache = LfuCache::new(10);
/// cache.put(1, "first");
/// cache.put(2, "second");
/// cache.get(&2); // freq 2
///
/// // Key 1 is the LFU candidate (freq 1 vs 2)
/// assert_eq!(cache.peek_lfu().map(|(k, _)| *k), Some(1));
/// let (key, _) = cache.pop_lfu().unwrap();
/// assert_eq!(key, 1);
/// ```
pub trait LfuCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least frequently used entry.
    ///
    /// Ties at the lowest frequency break toward the entry least recently
    /// promoted into that frequency bucket. Returns `None` when empty.
    fn pop_lfu(&mut self) -> Option<(K, V)>;

    /// Peeks at the LFU eviction candidate without removing it.
    ///
    /// Does not promote the entry. Returns `None` when empty.
    fn peek_lfu(&self) -> Option<(&K, &V)>;

    /// Gets the access frequency recorded for a key.
    ///
    /// Returns `None` if the key is not present.
    ///
    /// # Example
    ///
    /// ```
    /// use freqcache::policy::lfu::LfuCache;
    /// use freqcache::traits::{CoreCache, LfuCacheTrait};
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.put(1, "value");
    /// assert_eq!(cache.frequency(&1), Some(1));
    ///
    /// cache.get(&1);
    /// assert_eq!(cache.frequency(&1), Some(2));
    /// ```
    fn frequency(&self, key: &K) -> Option<u64>;
}
