//! Cache policy implementations.

pub mod lfu;
pub mod sync_lfu;

pub use lfu::LfuCache;
pub use sync_lfu::SyncLfuCache;
