//! Recency-ordered doubly-linked list backed by a slot arena.
//!
//! Links are arena indices rather than pointers, so no unsafe code is
//! needed. Slots 0 and 1 are permanent head/tail sentinels: the slot after
//! the head sentinel is the most recently used entry, the slot before the
//! tail sentinel the least recently used. Sentinels carry no data and are
//! never handed out. Evicted slots go onto a free list for reuse, so the
//! arena never grows past capacity + 2 slots.

/// Head sentinel slot (before the MRU entry).
const HEAD: usize = 0;
/// Tail sentinel slot (after the LRU entry).
const TAIL: usize = 1;

/// One arena slot. `data` is `None` for the sentinels and for free slots.
struct Slot<K, V> {
    data: Option<(K, V)>,
    prev: usize,
    next: usize,
}

pub(crate) struct RecencyList<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Vec<usize>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 2);
        slots.push(Slot {
            data: None,
            prev: HEAD,
            next: TAIL,
        });
        slots.push(Slot {
            data: None,
            prev: HEAD,
            next: TAIL,
        });

        Self {
            slots,
            free: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Allocate a slot for `(key, value)` and splice it in at the MRU
    /// position. Returns the slot index, which stays stable until the
    /// entry is evicted.
    pub(crate) fn push_front(&mut self, key: K, value: V) -> usize {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx].data = Some((key, value));
                idx
            }
            None => {
                self.slots.push(Slot {
                    data: Some((key, value)),
                    prev: HEAD,
                    next: TAIL,
                });
                self.slots.len() - 1
            }
        };

        self.link_front(idx);
        self.len += 1;
        idx
    }

    /// Promote `idx` to the MRU position. No-op if it is already there.
    pub(crate) fn move_to_front(&mut self, idx: usize) {
        if self.slots[HEAD].next == idx {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    /// Detach and return the LRU entry (the slot before the tail sentinel).
    /// The slot is recycled through the free list.
    pub(crate) fn evict_lru(&mut self) -> Option<(K, V)> {
        let idx = self.slots[TAIL].prev;
        if idx == HEAD {
            return None;
        }

        self.unlink(idx);
        self.free.push(idx);
        self.len -= 1;
        self.slots[idx].data.take()
    }

    pub(crate) fn key(&self, idx: usize) -> Option<&K> {
        self.slots[idx].data.as_ref().map(|(k, _)| k)
    }

    pub(crate) fn value(&self, idx: usize) -> Option<&V> {
        self.slots[idx].data.as_ref().map(|(_, v)| v)
    }

    pub(crate) fn value_mut(&mut self, idx: usize) -> Option<&mut V> {
        self.slots[idx].data.as_mut().map(|(_, v)| v)
    }

    /// Visit entries in recency order, MRU first. Not used on the hot
    /// path; positional lookups always go through the index map.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        let mut cursor = self.slots[HEAD].next;
        std::iter::from_fn(move || {
            if cursor == TAIL {
                return None;
            }
            let slot = &self.slots[cursor];
            cursor = slot.next;
            slot.data.as_ref().map(|(k, v)| (k, v))
        })
    }

    /// Drop all entries, keeping only the sentinels.
    pub(crate) fn clear(&mut self) {
        self.slots.truncate(2);
        self.slots[HEAD].next = TAIL;
        self.slots[TAIL].prev = HEAD;
        self.free.clear();
        self.len = 0;
    }

    /// Splice `idx` in directly after the head sentinel.
    fn link_front(&mut self, idx: usize) {
        let first = self.slots[HEAD].next;
        self.slots[idx].prev = HEAD;
        self.slots[idx].next = first;
        self.slots[first].prev = idx;
        self.slots[HEAD].next = idx;
    }

    /// Reconnect the neighbours around `idx`. Does not free the slot.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &RecencyList<u32, u32>) -> Vec<u32> {
        list.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_empty_list() {
        let list: RecencyList<u32, u32> = RecencyList::with_capacity(4);

        assert_eq!(list.len(), 0);
        assert_eq!(keys(&list), Vec::<u32>::new());
    }

    #[test]
    fn test_push_front_orders_mru_first() {
        let mut list = RecencyList::with_capacity(4);

        list.push_front(1, 10);
        list.push_front(2, 20);
        list.push_front(3, 30);

        assert_eq!(keys(&list), vec![3, 2, 1]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_move_to_front() {
        let mut list = RecencyList::with_capacity(4);

        let a = list.push_front(1, 10);
        list.push_front(2, 20);
        list.push_front(3, 30);

        list.move_to_front(a);
        assert_eq!(keys(&list), vec![1, 3, 2]);

        // Already at front: order unchanged
        list.move_to_front(a);
        assert_eq!(keys(&list), vec![1, 3, 2]);
    }

    #[test]
    fn test_evict_lru_order() {
        let mut list = RecencyList::with_capacity(4);

        list.push_front(1, 10);
        list.push_front(2, 20);
        list.push_front(3, 30);

        assert_eq!(list.evict_lru(), Some((1, 10)));
        assert_eq!(list.evict_lru(), Some((2, 20)));
        assert_eq!(list.evict_lru(), Some((3, 30)));
        assert_eq!(list.evict_lru(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_evicted_slots_are_reused() {
        let mut list = RecencyList::with_capacity(2);

        let a = list.push_front(1, 10);
        list.push_front(2, 20);

        list.evict_lru();
        let c = list.push_front(3, 30);

        // Slot of the evicted entry is recycled
        assert_eq!(c, a);
        assert_eq!(keys(&list), vec![3, 2]);
    }

    #[test]
    fn test_traversal_matches_len() {
        let mut list = RecencyList::with_capacity(8);
        for k in 0..8u32 {
            list.push_front(k, k);
        }

        assert_eq!(list.iter().count(), list.len());
    }

    #[test]
    fn test_accessors() {
        let mut list = RecencyList::with_capacity(2);
        let idx = list.push_front(7, 70);

        assert_eq!(list.key(idx), Some(&7));
        assert_eq!(list.value(idx), Some(&70));

        if let Some(v) = list.value_mut(idx) {
            *v = 71;
        }
        assert_eq!(list.value(idx), Some(&71));
    }

    #[test]
    fn test_clear() {
        let mut list = RecencyList::with_capacity(4);
        list.push_front(1, 10);
        list.push_front(2, 20);

        list.clear();

        assert_eq!(list.len(), 0);
        assert_eq!(list.evict_lru(), None);

        list.push_front(3, 30);
        assert_eq!(keys(&list), vec![3]);
    }
}
