//! Convenience re-exports for the common surface.
//!
//! ```
//! use freqcache::prelude::*;
//!
//! let mut cache: LfuCache<&str, i32> = LfuCache::new(8);
//! cache.put("k", 1);
//! assert_eq!(cache.get(&"k"), Some(&1));
//! ```

pub use crate::builder::CacheBuilder;
pub use crate::ds::FreqBuckets;
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::lfu::{EvictionListener, LfuCache};
pub use crate::policy::sync_lfu::SyncLfuCache;
pub use crate::store::hashmap::HashMapStore;
pub use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};
