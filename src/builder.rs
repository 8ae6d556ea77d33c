//! Cache builder.
//!
//! Bundles the construction-time knobs — capacity and the eviction
//! listener — behind one entry point, so callers that want validation can
//! use `try_build` and callers that know their capacity is sane can use
//! `build`.
//!
//! ## Example
//!
//! ```
//! use freqcache::builder::CacheBuilder;
//! use freqcache::traits::CoreCache;
//!
//! let mut cache = CacheBuilder::new(100)
//!     .eviction_listener(|key: &u64, _value: String| {
//!         eprintln!("discarded {key}");
//!     })
//!     .build();
//!
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::fmt;
use std::hash::Hash;

use crate::error::ConfigError;
use crate::policy::lfu::{EvictionListener, LfuCache};

/// Builder for [`LfuCache`].
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    capacity: usize,
}

impl CacheBuilder {
    /// Starts a builder for a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Attaches an eviction listener and moves on to building.
    ///
    /// The listener is invoked with each put-triggered eviction; see
    /// [`LfuCache::set_eviction_listener`].
    pub fn eviction_listener<K, V, F>(self, listener: F) -> TypedCacheBuilder<K, V>
    where
        K: Eq + Hash + Clone + fmt::Debug,
        F: FnMut(&K, V) + Send + 'static,
    {
        TypedCacheBuilder {
            capacity: self.capacity,
            listener: Some(Box::new(listener)),
        }
    }

    /// Builds the cache.
    ///
    /// Accepts any capacity, including 0 (which rejects all insertions).
    /// Use [`try_build`](Self::try_build) to treat 0 as a configuration
    /// error instead.
    pub fn build<K, V>(self) -> LfuCache<K, V>
    where
        K: Eq + Hash + Clone + fmt::Debug,
    {
        LfuCache::new(self.capacity)
    }

    /// Builds the cache, rejecting a non-positive capacity.
    pub fn try_build<K, V>(self) -> Result<LfuCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone + fmt::Debug,
    {
        if self.capacity == 0 {
            return Err(ConfigError::new("capacity must be > 0"));
        }
        Ok(LfuCache::new(self.capacity))
    }
}

/// Builder stage carrying a typed eviction listener.
pub struct TypedCacheBuilder<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    capacity: usize,
    listener: Option<EvictionListener<K, V>>,
}

impl<K, V> TypedCacheBuilder<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug + 'static,
    V: 'static,
{
    /// Builds the cache with the configured listener.
    pub fn build(self) -> LfuCache<K, V> {
        let mut cache = LfuCache::new(self.capacity);
        if let Some(listener) = self.listener {
            cache.set_eviction_listener(listener);
        }
        cache
    }

    /// Builds the cache, rejecting a non-positive capacity.
    pub fn try_build(self) -> Result<LfuCache<K, V>, ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::new("capacity must be > 0"));
        }
        Ok(self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CoreCache;

    #[test]
    fn build_wires_capacity() {
        let cache: LfuCache<u64, u64> = CacheBuilder::new(7).build();
        assert_eq!(cache.capacity(), 7);
    }

    #[test]
    fn try_build_rejects_zero_capacity() {
        let err = CacheBuilder::new(0).try_build::<u64, u64>().unwrap_err();
        assert!(err.to_string().contains("capacity"));

        let err = CacheBuilder::new(0)
            .eviction_listener(|_k: &u64, _v: u64| {})
            .try_build()
            .unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn listener_survives_the_builder() {
        use std::sync::Arc;

        use parking_lot::Mutex;

        let evicted = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&evicted);

        let mut cache = CacheBuilder::new(1)
            .eviction_listener(move |key: &&str, _value: i32| log.lock().push(*key))
            .build();

        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(*evicted.lock(), vec!["a"]);
    }
}
