//! Page-fault simulation over an LRU-managed frame set.

use crate::cache::LruCache;
use crate::error::Result;
use crate::stats::CacheStats;

/// Replays an ordered sequence of page references against a fixed number
/// of frames under LRU replacement and counts page faults.
///
/// Each reference is tried with `get` first; a hit needs no further work
/// because the lookup already promoted the page. A miss is a fault: the
/// page is loaded with `put(page, page)`, evicting the least recently
/// used page when all frames are occupied. The page number doubles as
/// the stored value since fault counting never reads it.
pub struct FaultSimulator {
    cache: LruCache<u64, u64>,
    stats: CacheStats,
}

impl FaultSimulator {
    /// Create a simulator with the given number of page frames.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCapacity`] for zero frames.
    pub fn new(frames: usize) -> Result<Self> {
        Ok(Self {
            cache: LruCache::new(frames)?,
            stats: CacheStats::new(),
        })
    }

    /// Process page references in order and return the number of page
    /// faults this call produced.
    ///
    /// References are consumed one at a time with no lookback, so any
    /// iterator works, including lazy ones. Frame contents and recency
    /// carry over between calls; cumulative counts live in [`stats`].
    ///
    /// [`stats`]: FaultSimulator::stats
    pub fn run<I>(&mut self, references: I) -> u64
    where
        I: IntoIterator<Item = u64>,
    {
        let mut faults = 0;

        for page in references {
            if self.cache.get(&page).is_some() {
                self.stats.record_hit();
                continue;
            }

            faults += 1;
            self.stats.record_miss();
            if self.cache.put(page, page).is_some() {
                self.stats.record_eviction();
            }
            self.stats.record_insert();
        }

        faults
    }

    /// Get the number of page frames.
    pub fn frames(&self) -> usize {
        self.cache.capacity()
    }

    /// Get cumulative hit/fault/eviction statistics.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Empty all frames and zero the statistics.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.stats.reset();
    }
}
