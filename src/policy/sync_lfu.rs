//! Mutex-guarded LFU cache for shared access.
//!
//! The store, the frequency index, and the frequency buckets must change
//! atomically as a unit; a promotion observed half-done (key unlinked from
//! its old bucket but not yet in the new one) would break the
//! one-bucket-per-key invariant. A single `parking_lot::Mutex` around the
//! whole [`LfuCache`] gives exactly that exclusion — no finer-grained
//! locking is sound here.
//!
//! `get` returns an owned clone because a reference into the cache cannot
//! outlive the lock guard.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use freqcache::policy::sync_lfu::SyncLfuCache;
//!
//! let cache: Arc<SyncLfuCache<u64, String>> = Arc::new(SyncLfuCache::new(100));
//!
//! let worker = Arc::clone(&cache);
//! std::thread::spawn(move || {
//!     worker.put(1, "one".to_string());
//! })
//! .join()
//! .unwrap();
//!
//! assert_eq!(cache.get(&1), Some("one".to_string()));
//! ```

use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::policy::lfu::LfuCache;
use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};

/// Thread-safe wrapper serializing all operations through one mutex.
pub struct SyncLfuCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    inner: Mutex<LfuCache<K, V>>,
}

impl<K, V> SyncLfuCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(LfuCache::new(capacity)),
        }
    }

    /// Installs an eviction listener on the wrapped cache.
    ///
    /// The listener runs while the lock is held; keep it cheap and never
    /// call back into this cache from it.
    pub fn set_eviction_listener(&self, listener: impl FnMut(&K, V) + Send + 'static) {
        self.inner.lock().set_eviction_listener(listener);
    }

    /// Inserts or overwrites a key-value pair. See [`CoreCache::put`].
    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value);
    }

    /// Gets a clone of the value, promoting the key's frequency.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }

    /// Checks if a key exists without updating access state.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the maximum number of entries the cache may hold.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Removes a specific key-value pair.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Removes and returns the least frequently used entry.
    pub fn pop_lfu(&self) -> Option<(K, V)> {
        self.inner.lock().pop_lfu()
    }

    /// Gets the access frequency recorded for a key.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.inner.lock().frequency(key)
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl<K, V> fmt::Debug for SyncLfuCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(inner) => f.debug_struct("SyncLfuCache").field("inner", &*inner).finish(),
            None => f.debug_struct("SyncLfuCache").field("inner", &"<locked>").finish(),
        }
    }
}
