//! # LFU cache with deterministic LRU tie-breaking
//!
//! Bounded key-value cache that evicts the least frequently accessed entry
//! when capacity is exceeded. Among entries tied at the lowest frequency,
//! the one least recently promoted into that frequency bucket is evicted
//! first, so eviction order is fully deterministic.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────┐
//!   │                     LfuCache<K, V>                       │
//!   │                                                          │
//!   │   ┌──────────────────────┐  ┌──────────────────────────┐ │
//!   │   │ HashMapStore<K, V>   │  │ FreqBuckets<K>           │ │
//!   │   │ values + capacity    │  │ freq index + buckets     │ │
//!   │   │ (authoritative data) │  │ + min_freq scalar        │ │
//!   │   └──────────────────────┘  └──────────────────────────┘ │
//!   │                                                          │
//!   │   on_evict: optional listener, called with each          │
//!   │   evicted (key, value)                                   │
//!   └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operation flow
//!
//! ```text
//!   put(key, value)
//!        │
//!        ▼
//!   key exists? ──YES──► overwrite value, promote (freq + 1)
//!        │NO
//!        ▼
//!   at capacity? ──YES──► pop_min() → remove from store
//!        │                → tracing event + listener for the victim
//!        ▼
//!   insert value, track key at freq=1, min_freq = 1
//!
//!   get(key): promote (freq + 1), return &value — or None, no side effect
//! ```
//!
//! Both a `put` on an existing key and a `get` count as one access. That is
//! the contract difference from an update-preserves-frequency cache: here
//! overwriting a value is evidence the entry is alive.
//!
//! ## Complexity
//!
//! | Operation            | Time        |
//! |----------------------|-------------|
//! | `put` (no eviction)  | O(1)        |
//! | `put` (eviction)     | O(1) amort. |
//! | `get`                | O(1)        |
//! | `remove` / `pop_lfu` | O(1) amort. |
//! | `clear`              | O(n)        |
//!
//! ## Thread safety
//!
//! `LfuCache` is **not** thread-safe: a promotion or eviction observed
//! mid-update would break the one-bucket-per-key invariant, so the three
//! internal structures must change as a unit. Use
//! [`SyncLfuCache`](crate::policy::sync_lfu::SyncLfuCache) for shared
//! access; it serializes every operation behind one mutex.
//!
//! ## Example
//!
//! ```
//! use freqcache::policy::lfu::LfuCache;
//! use freqcache::traits::{CoreCache, LfuCacheTrait};
//!
//! let mut cache: LfuCache<&str, i32> = LfuCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a"); // "a" at freq 2, "b" stays at 1
//!
//! cache.put("c", 3); // evicts "b"
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.frequency(&"c"), Some(1));
//! ```

use std::fmt;
use std::hash::Hash;

use crate::ds::FreqBuckets;
use crate::store::hashmap::HashMapStore;
use crate::store::traits::{StoreCore, StoreMut};
use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};

/// Callback invoked with each evicted entry.
///
/// Receives the evicted key and the owned value the store gave up. Runs
/// synchronously inside `put`; keep it cheap.
pub type EvictionListener<K, V> = Box<dyn FnMut(&K, V) + Send>;

/// LFU cache with least-recently-promoted tie-breaking.
///
/// See the module documentation for the full contract.
pub struct LfuCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    store: HashMapStore<K, V>,
    freqs: FreqBuckets<K>,
    on_evict: Option<EvictionListener<K, V>>,
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A zero-capacity cache rejects all insertions.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: HashMapStore::new(capacity),
            freqs: FreqBuckets::with_capacity(capacity),
            on_evict: None,
        }
    }

    /// Installs a listener invoked with each evicted `(key, value)`.
    ///
    /// Only put-triggered evictions notify; [`pop_lfu`](LfuCacheTrait::pop_lfu)
    /// hands the entry back to the caller instead, and
    /// [`clear`](CoreCache::clear)/[`remove`](MutableCache::remove) are
    /// deliberate deletions, not evictions.
    pub fn set_eviction_listener(&mut self, listener: impl FnMut(&K, V) + Send + 'static) {
        self.on_evict = Some(Box::new(listener));
    }

    /// `put` over optional inputs: silently does nothing when either the
    /// key or the value is absent.
    ///
    /// Mirrors callers that hold nullable inputs; no notification and no
    /// state change happen on `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use freqcache::policy::lfu::LfuCache;
    /// use freqcache::traits::CoreCache;
    ///
    /// let mut cache: LfuCache<&str, i32> = LfuCache::new(4);
    /// cache.put_opt(None, Some(1));
    /// cache.put_opt(Some("k"), None);
    /// assert!(cache.is_empty());
    ///
    /// cache.put_opt(Some("k"), Some(1));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) {
        if let (Some(key), Some(value)) = (key, value) {
            self.put(key, value);
        }
    }

    /// `get` over an optional key: `None` in, `None` out, no side effect.
    pub fn get_opt(&mut self, key: Option<&K>) -> Option<&V> {
        self.get(key?)
    }

    /// Non-panicking structural audit used by tests.
    ///
    /// Verifies that the store and the frequency tracker agree on exactly
    /// which keys are live, that the entry count respects capacity, and
    /// that the frequency buckets are internally consistent.
    pub fn check_invariants(&self) -> Result<(), crate::error::InvariantError> {
        use crate::error::InvariantError;

        self.freqs.check_invariants()?;
        if self.store.len() != self.freqs.len() {
            return Err(InvariantError::new(format!(
                "store holds {} entries but {} are tracked",
                self.store.len(),
                self.freqs.len()
            )));
        }
        if self.store.len() > self.store.capacity() {
            return Err(InvariantError::new("store exceeds capacity"));
        }
        for key in self.store.keys() {
            if !self.freqs.contains(key) {
                return Err(InvariantError::new(format!("stored key {key:?} untracked")));
            }
        }
        Ok(())
    }

    /// Selects, removes, and announces the eviction victim.
    ///
    /// A missing candidate means the frequency bookkeeping is out of step
    /// with the store; per the error-handling contract that degrades to
    /// "no eviction" rather than a panic.
    fn evict_one(&mut self) {
        let Some((victim, freq)) = self.freqs.pop_min() else {
            return;
        };
        let Some(value) = self.store.remove(&victim) else {
            return;
        };
        tracing::debug!(
            target: "freqcache::policy::lfu",
            key = ?victim,
            freq,
            "DISCARD: evicting least-frequently-used entry"
        );
        if let Some(listener) = self.on_evict.as_mut() {
            listener(&victim, value);
        }
    }
}

impl<K, V> CoreCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn put(&mut self, key: K, value: V) {
        if let Some(slot) = self.store.get_mut(&key) {
            *slot = value;
            self.freqs.promote(&key);
            return;
        }

        // Zero capacity rejects all new insertions.
        if self.store.capacity() == 0 {
            return;
        }

        if self.store.is_full() {
            self.evict_one();
        }
        self.store.insert(key.clone(), value);
        self.freqs.insert(key);
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        self.freqs.promote(key)?;
        self.store.get(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn capacity(&self) -> usize {
        self.store.capacity()
    }

    fn clear(&mut self) {
        self.store.clear();
        self.freqs.clear();
    }
}

impl<K, V> MutableCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        self.freqs.remove(key)?;
        self.store.remove(key)
    }
}

impl<K, V> LfuCacheTrait<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn pop_lfu(&mut self) -> Option<(K, V)> {
        let (key, _freq) = self.freqs.pop_min()?;
        let value = self.store.remove(&key)?;
        Some((key, value))
    }

    fn peek_lfu(&self) -> Option<(&K, &V)> {
        let (key, _freq) = self.freqs.peek_min()?;
        let value = self.store.get(key)?;
        Some((key, value))
    }

    fn frequency(&self, key: &K) -> Option<u64> {
        self.freqs.frequency(key)
    }
}

impl<K, V> fmt::Debug for LfuCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("len", &self.store.len())
            .field("capacity", &self.store.capacity())
            .field("min_freq", &self.freqs.min_freq())
            .finish_non_exhaustive()
    }
}
