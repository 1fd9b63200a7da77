//! LRU cache combining the recency list with a key index.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

use crate::error::{Error, Result};
use crate::list::RecencyList;

/// LRU cache with fixed capacity.
///
/// `get` and `put` are O(1): a hash map resolves a key to its arena slot,
/// and the recency list splices that slot without scanning. The map and
/// the list are private and always mutually consistent; every key in the
/// map names exactly one live list entry and vice versa.
pub struct LruCache<K, V> {
    map: HashMap<K, usize, RandomState>,
    list: RecencyList<K, V>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache with the given capacity.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] for capacity 0; no cache is
    /// produced.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            list: RecencyList::with_capacity(capacity),
            capacity,
        })
    }

    /// Get a value from the cache, promoting the entry to most recently
    /// used on a hit. A miss returns `None` and changes nothing.
    ///
    /// Promotion is observable: repeated `get`s reshape future eviction
    /// order.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let &idx = self.map.get(key)?;
        debug_assert!(self.list.key(idx) == Some(key));
        self.list.move_to_front(idx);
        self.list.value(idx)
    }

    /// Get a value without touching recency order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map.get(key).and_then(|&idx| self.list.value(idx))
    }

    /// Insert a key-value pair into the cache.
    ///
    /// An existing key has its value replaced and is promoted to most
    /// recently used. A new key at capacity first evicts the least
    /// recently used entry; the evicted pair is returned so callers can
    /// observe it. Returns `None` when nothing was evicted.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            if let Some(slot) = self.list.value_mut(idx) {
                *slot = value;
            }
            self.list.move_to_front(idx);
            return None;
        }

        let evicted = if self.map.len() == self.capacity {
            let pair = self.list.evict_lru();
            if let Some((evicted_key, _)) = &pair {
                self.map.remove(evicted_key);
            }
            pair
        } else {
            None
        };

        let idx = self.list.push_front(key.clone(), value);
        self.map.insert(key, idx);

        debug_assert_eq!(self.map.len(), self.list.len());
        debug_assert!(self.map.len() <= self.capacity);
        evicted
    }

    /// Check whether a key is resident, without promotion.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Get the current number of resident entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Visit resident entries in recency order, most recently used first.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.list.iter()
    }

    /// Drop all entries. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }
}
