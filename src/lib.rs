//! freqcache: a bounded LFU cache with deterministic LRU tie-breaking.
//!
//! Eviction picks the key with the lowest access frequency; among keys tied
//! at the lowest frequency, the one least recently promoted into that
//! frequency bucket is evicted first. All operations are O(1) amortized.

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;
pub mod store;
pub mod traits;

pub mod prelude;
