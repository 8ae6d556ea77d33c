//! Value storage backends and their capability traits.

pub mod hashmap;
pub mod traits;

pub use hashmap::HashMapStore;
