//! Error types for the freqcache library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache configuration parameters are
//!   invalid (e.g. zero capacity in [`CacheBuilder::try_build`]).
//! - [`InvariantError`]: Returned by the non-panicking
//!   [`LfuCache::check_invariants`] audit when internal bookkeeping is
//!   inconsistent.
//!
//! Neither type appears on the hot path: `put` and `get` are total
//! functions and never fail.
//!
//! ## Example Usage
//!
//! ```
//! use freqcache::builder::CacheBuilder;
//! use freqcache::error::ConfigError;
//! use freqcache::policy::lfu::LfuCache;
//!
//! let cache: Result<LfuCache<String, i32>, ConfigError> =
//!     CacheBuilder::new(100).try_build();
//! assert!(cache.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = CacheBuilder::new(0).try_build::<String, i32>();
//! assert!(bad.is_err());
//! ```
//!
//! [`CacheBuilder::try_build`]: crate::builder::CacheBuilder::try_build
//! [`LfuCache::check_invariants`]: crate::policy::lfu::LfuCache::check_invariants

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build).
/// Carries a human-readable description of which parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`LfuCache::check_invariants`](crate::policy::lfu::LfuCache::check_invariants)
/// and [`FreqBuckets::check_invariants`](crate::ds::FreqBuckets::check_invariants).
/// An `Err` here indicates a bookkeeping bug, not a legitimate runtime
/// condition; hot-path code treats the same situations as "no eviction
/// candidate" instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}
