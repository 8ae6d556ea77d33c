//! Policy-agnostic data structures backing the cache.

pub mod freq_buckets;

pub use freq_buckets::FreqBuckets;
