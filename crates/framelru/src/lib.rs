//! # framelru
//!
//! Fixed-capacity LRU cache with O(1) operations and a page-fault simulator.
//!
//! ## Architecture
//! - **Index map**: AHash-keyed HashMap from key to arena slot (O(1) lookup)
//! - **Recency list**: sentinel-bounded doubly-linked list stored in a slot
//!   arena (O(1) splice, promote, evict)
//! - **Simulator**: replays an ordered page-reference trace against the cache
//!   and counts page faults

#![warn(missing_docs)]

mod cache;
mod error;
mod list;
mod sim;
mod stats;

pub use cache::LruCache;
pub use error::{Error, Result};
pub use sim::FaultSimulator;
pub use stats::CacheStats;
