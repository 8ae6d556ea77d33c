//! Frequency buckets for O(1) LFU tracking with deterministic tie-breaking.
//!
//! Tracks a frequency count per key and groups keys into per-frequency
//! buckets ordered by promotion time, so the eviction candidate (lowest
//! frequency, oldest within that frequency) is always available in O(1).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                        FreqBuckets<K> Layout                       │
//! │                                                                    │
//! │   index: FxHashMap<K, usize>        slots: Vec<Slot<K>>            │
//! │   ┌──────────┬───────┐              ┌─────┬────────────────────┐   │
//! │   │   Key    │ slot  │              │ idx │ key, freq, links   │   │
//! │   ├──────────┼───────┤              ├─────┼────────────────────┤   │
//! │   │ "page_a" │   0   │──────────────► 0   │ freq:2, prev/next  │   │
//! │   │ "page_b" │   1   │──────────────► 1   │ freq:1, prev/next  │   │
//! │   │ "page_c" │   2   │──────────────► 2   │ freq:1, prev/next  │   │
//! │   └──────────┴───────┘              └─────┴────────────────────┘   │
//! │                                                                    │
//! │   buckets: FxHashMap<u64, Bucket>   (freq → doubly-linked list)    │
//! │                                                                    │
//! │   min_freq = 1                                                     │
//! │       │                                                            │
//! │       ▼                                                            │
//! │   freq=1: head ──► [1] ◄──► [2] ◄── tail                           │
//! │           oldest (evict first)      newest (last promoted)         │
//! │   freq=2: head ──► [0] ◄── tail                                    │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation  | Time         | Notes                                   |
//! |------------|--------------|-----------------------------------------|
//! | `insert`   | O(1)         | New key starts at freq=1, min_freq=1    |
//! | `promote`  | O(1)         | +1 frequency, re-linked at bucket tail  |
//! | `remove`   | O(1)         | Untrack a key                           |
//! | `pop_min`  | O(1) amort.  | Evict candidate: lowest freq, oldest    |
//! | `peek_min` | O(1) amort.  | Candidate without removal               |
//!
//! ## Minimum-frequency tracking
//!
//! `min_freq` is an explicit scalar, never recomputed by scanning entries:
//!
//! - a new key unconditionally resets it to 1 (a new key is always the
//!   least-frequently used),
//! - promoting the last key out of the minimum bucket advances it to
//!   `freq + 1` (the promoted key repopulates exactly that bucket),
//! - removal and `pop_min` may leave it pointing at a deleted bucket; the
//!   next candidate lookup advances it upward to the first nonempty bucket
//!   before use. The advance is paid for by the promotions that created the
//!   gap, keeping the amortized cost O(1).
//!
//! ## Example
//!
//! ```
//! use freqcache::ds::FreqBuckets;
//!
//! let mut freq = FreqBuckets::new();
//! freq.insert("page_a");
//! freq.insert("page_b");
//! freq.promote(&"page_a"); // freq=2
//!
//! assert_eq!(freq.frequency(&"page_a"), Some(2));
//! assert_eq!(freq.pop_min(), Some(("page_b", 1)));
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::InvariantError;

#[derive(Debug)]
struct Entry<K> {
    key: K,
    freq: u64,
}

#[derive(Debug)]
struct Slot<K> {
    entry: Option<Entry<K>>,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Default)]
struct Bucket {
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl Bucket {
    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// O(1) LFU metadata tracker with oldest-promoted-first tie-breaking.
///
/// Owns the frequency index (key → count) and the frequency buckets
/// (count → promotion-ordered key list) as one structure, so the two can
/// never disagree. Does not own values; pair it with a store.
///
/// # Example
///
/// ```
/// use freqcache::ds::FreqBuckets;
///
/// let mut freq = FreqBuckets::new();
/// freq.insert("a");
/// freq.insert("b");
/// freq.promote(&"a"); // "a" now at freq=2
///
/// assert_eq!(freq.frequency(&"a"), Some(2));
/// assert_eq!(freq.frequency(&"b"), Some(1));
/// assert_eq!(freq.min_freq(), Some(1));
///
/// // "b" is the only key at the minimum frequency
/// assert_eq!(freq.pop_min(), Some(("b", 1)));
/// ```
#[derive(Debug)]
pub struct FreqBuckets<K> {
    slots: Vec<Slot<K>>,
    free_list: Vec<usize>,
    index: FxHashMap<K, usize>,
    buckets: FxHashMap<u64, Bucket>,
    min_freq: u64,
}

impl<K> Default for FreqBuckets<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FreqBuckets<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            index: FxHashMap::default(),
            buckets: FxHashMap::default(),
            min_freq: 0,
        }
    }

    /// Creates an empty tracker with reserved capacity for entries and index.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            buckets: FxHashMap::default(),
            min_freq: 0,
        }
    }

    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if there are no tracked keys.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns `true` if `key` is tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the current frequency for `key`, if tracked.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        let idx = *self.index.get(key)?;
        self.slots[idx].entry.as_ref().map(|entry| entry.freq)
    }

    /// Returns the tracked minimum frequency, or `None` when there are no
    /// tracked keys.
    ///
    /// May lag behind the true minimum after `remove`/`pop_min` deleted the
    /// bucket it pointed at; the next candidate lookup corrects it. It
    /// never reports a value above the true minimum.
    pub fn min_freq(&self) -> Option<u64> {
        if self.index.is_empty() {
            None
        } else {
            Some(self.min_freq)
        }
    }

    /// Starts tracking `key` at frequency 1.
    ///
    /// The key becomes the newest member of bucket 1 and the minimum
    /// frequency resets to 1: a brand-new key is always the current
    /// least-frequently-used. A key that was already tracked is re-inserted
    /// fresh (its previous count is discarded).
    pub fn insert(&mut self, key: K) {
        if self.index.contains_key(&key) {
            self.remove(&key);
        }
        let idx = self.alloc_slot(Entry {
            key: key.clone(),
            freq: 1,
        });
        self.index.insert(key, idx);
        self.link_tail(1, idx);
        self.min_freq = 1;
    }

    /// Promotes `key` by exactly one frequency step.
    ///
    /// The key is unlinked from its current bucket and re-linked at the
    /// tail of the next one, forfeiting its old tie-break position. If the
    /// old bucket empties and held the minimum frequency, the minimum
    /// advances with the key. Returns the new frequency, or `None` if the
    /// key is not tracked.
    pub fn promote(&mut self, key: &K) -> Option<u64> {
        let idx = *self.index.get(key)?;
        let freq = self.slots[idx].entry.as_ref()?.freq;
        let new_freq = freq.saturating_add(1);

        self.unlink(freq, idx);
        if self
            .buckets
            .get(&freq)
            .is_some_and(|bucket| bucket.is_empty())
        {
            self.buckets.remove(&freq);
            // The promoted key repopulates bucket freq+1, and no lower
            // nonempty bucket can exist by definition of the minimum.
            if self.min_freq == freq {
                self.min_freq = new_freq;
            }
        }

        if let Some(entry) = self.slots[idx].entry.as_mut() {
            entry.freq = new_freq;
        }
        self.link_tail(new_freq, idx);
        Some(new_freq)
    }

    /// Stops tracking `key`, returning its last frequency.
    pub fn remove(&mut self, key: &K) -> Option<u64> {
        let idx = self.index.remove(key)?;
        let freq = self.slots[idx].entry.as_ref()?.freq;
        self.unlink(freq, idx);
        if self
            .buckets
            .get(&freq)
            .is_some_and(|bucket| bucket.is_empty())
        {
            self.buckets.remove(&freq);
        }
        self.free_slot(idx);
        if self.index.is_empty() {
            self.min_freq = 0;
        }
        Some(freq)
    }

    /// Removes and returns the eviction candidate: the oldest key in the
    /// minimum-frequency bucket, together with its frequency.
    ///
    /// Returns `None` when nothing is tracked, or defensively when the
    /// minimum-frequency bucket cannot be found.
    pub fn pop_min(&mut self) -> Option<(K, u64)> {
        self.refresh_min();
        if self.min_freq == 0 {
            return None;
        }
        let freq = self.min_freq;
        let bucket = self.buckets.get(&freq)?;
        let idx = bucket.head?;
        self.unlink(freq, idx);
        if self
            .buckets
            .get(&freq)
            .is_some_and(|bucket| bucket.is_empty())
        {
            self.buckets.remove(&freq);
        }
        let entry = self.free_slot(idx);
        self.index.remove(&entry.key);
        if self.index.is_empty() {
            self.min_freq = 0;
        }
        Some((entry.key, entry.freq))
    }

    /// Returns the eviction candidate without removing it.
    ///
    /// Walks past any bucket gap left by `remove`/`pop_min` without caching
    /// the corrected minimum, since this takes `&self`.
    pub fn peek_min(&self) -> Option<(&K, u64)> {
        if self.index.is_empty() {
            return None;
        }
        let mut freq = self.min_freq;
        while !self.buckets.contains_key(&freq) {
            freq += 1;
        }
        let idx = self.buckets.get(&freq)?.head?;
        let entry = self.slots[idx].entry.as_ref()?;
        Some((&entry.key, entry.freq))
    }

    /// Discards all tracked keys.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.index.clear();
        self.buckets.clear();
        self.min_freq = 0;
    }

    /// Advances `min_freq` past buckets deleted by `remove`/`pop_min`.
    ///
    /// Promotions only ever move a key one bucket up, so the total advance
    /// is bounded by the promotions that emptied the gap.
    fn refresh_min(&mut self) {
        if self.index.is_empty() {
            self.min_freq = 0;
            return;
        }
        while !self.buckets.contains_key(&self.min_freq) {
            self.min_freq += 1;
        }
    }

    fn alloc_slot(&mut self, entry: Entry<K>) -> usize {
        if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Slot {
                entry: Some(entry),
                prev: None,
                next: None,
            };
            idx
        } else {
            self.slots.push(Slot {
                entry: Some(entry),
                prev: None,
                next: None,
            });
            self.slots.len() - 1
        }
    }

    fn free_slot(&mut self, idx: usize) -> Entry<K> {
        let entry = self.slots[idx].entry.take().expect("freq entry missing");
        self.slots[idx].prev = None;
        self.slots[idx].next = None;
        self.free_list.push(idx);
        entry
    }

    /// Links `idx` at the tail (most recently promoted end) of bucket `freq`,
    /// creating the bucket if absent.
    fn link_tail(&mut self, freq: u64, idx: usize) {
        let bucket = self.buckets.entry(freq).or_default();
        let old_tail = bucket.tail;
        self.slots[idx].prev = old_tail;
        self.slots[idx].next = None;
        if let Some(tail_idx) = old_tail {
            self.slots[tail_idx].next = Some(idx);
        } else {
            bucket.head = Some(idx);
        }
        bucket.tail = Some(idx);
        bucket.len += 1;
    }

    fn unlink(&mut self, freq: u64, idx: usize) {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;
        let Some(bucket) = self.buckets.get_mut(&freq) else {
            return;
        };
        if let Some(prev_idx) = prev {
            self.slots[prev_idx].next = next;
        } else {
            bucket.head = next;
        }
        if let Some(next_idx) = next {
            self.slots[next_idx].prev = prev;
        } else {
            bucket.tail = prev;
        }
        self.slots[idx].prev = None;
        self.slots[idx].next = None;
        bucket.len = bucket.len.saturating_sub(1);
    }

    /// Non-panicking structural audit used by tests.
    ///
    /// Checks that every tracked key sits in exactly the bucket matching
    /// its frequency, that bucket lists are well-formed in both directions,
    /// that no bucket is empty, and that no nonempty bucket exists below
    /// `min_freq`.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.is_empty() {
            if self.min_freq != 0 {
                return Err(InvariantError::new("min_freq nonzero while empty"));
            }
            if !self.buckets.is_empty() {
                return Err(InvariantError::new("buckets present while empty"));
            }
            return Ok(());
        }

        let mut linked = 0usize;
        for (&freq, bucket) in &self.buckets {
            if bucket.is_empty() {
                return Err(InvariantError::new(format!("bucket {freq} is empty")));
            }
            if freq < self.min_freq {
                return Err(InvariantError::new(format!(
                    "bucket {freq} below min_freq {}",
                    self.min_freq
                )));
            }
            let mut current = bucket.head;
            let mut last = None;
            let mut count = 0usize;
            while let Some(idx) = current {
                let slot = self
                    .slots
                    .get(idx)
                    .ok_or_else(|| InvariantError::new(format!("slot {idx} out of range")))?;
                let entry = slot
                    .entry
                    .as_ref()
                    .ok_or_else(|| InvariantError::new(format!("slot {idx} vacant")))?;
                if entry.freq != freq {
                    return Err(InvariantError::new(format!(
                        "entry freq {} in bucket {freq}",
                        entry.freq
                    )));
                }
                if self.index.get(&entry.key) != Some(&idx) {
                    return Err(InvariantError::new("index disagrees with bucket entry"));
                }
                if slot.prev != last {
                    return Err(InvariantError::new("broken prev link"));
                }
                last = Some(idx);
                current = slot.next;
                count += 1;
            }
            if bucket.tail != last {
                return Err(InvariantError::new(format!("bucket {freq} tail mismatch")));
            }
            if bucket.len != count {
                return Err(InvariantError::new(format!("bucket {freq} len mismatch")));
            }
            linked += count;
        }
        if linked != self.index.len() {
            return Err(InvariantError::new("index size disagrees with buckets"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod tracking {
        use super::*;

        #[test]
        fn insert_starts_at_frequency_one() {
            let mut freq = FreqBuckets::new();
            freq.insert("a");
            assert_eq!(freq.frequency(&"a"), Some(1));
            assert_eq!(freq.min_freq(), Some(1));
            assert_eq!(freq.len(), 1);
            freq.check_invariants().unwrap();
        }

        #[test]
        fn promote_increments_by_one() {
            let mut freq = FreqBuckets::new();
            freq.insert("a");
            assert_eq!(freq.promote(&"a"), Some(2));
            assert_eq!(freq.promote(&"a"), Some(3));
            assert_eq!(freq.frequency(&"a"), Some(3));
            freq.check_invariants().unwrap();
        }

        #[test]
        fn promote_unknown_key_is_none() {
            let mut freq: FreqBuckets<&str> = FreqBuckets::new();
            assert_eq!(freq.promote(&"ghost"), None);
        }

        #[test]
        fn reinsert_resets_frequency() {
            let mut freq = FreqBuckets::new();
            freq.insert("a");
            freq.promote(&"a");
            freq.promote(&"a");
            freq.insert("a");
            assert_eq!(freq.frequency(&"a"), Some(1));
            assert_eq!(freq.len(), 1);
            freq.check_invariants().unwrap();
        }

        #[test]
        fn remove_untracks() {
            let mut freq = FreqBuckets::new();
            freq.insert("a");
            freq.promote(&"a");
            assert_eq!(freq.remove(&"a"), Some(2));
            assert_eq!(freq.remove(&"a"), None);
            assert!(freq.is_empty());
            assert_eq!(freq.min_freq(), None);
            freq.check_invariants().unwrap();
        }
    }

    mod min_tracking {
        use super::*;

        #[test]
        fn new_key_resets_min_to_one() {
            let mut freq = FreqBuckets::new();
            freq.insert("a");
            freq.promote(&"a"); // only key now at freq=2
            assert_eq!(freq.min_freq(), Some(2));

            freq.insert("b");
            assert_eq!(freq.min_freq(), Some(1));
            freq.check_invariants().unwrap();
        }

        #[test]
        fn promoting_last_min_key_advances_min() {
            let mut freq = FreqBuckets::new();
            freq.insert("a");
            freq.insert("b");
            freq.promote(&"a"); // min bucket still holds "b"
            assert_eq!(freq.min_freq(), Some(1));
            freq.promote(&"b"); // bucket 1 empties, min follows to 2
            assert_eq!(freq.min_freq(), Some(2));
            freq.check_invariants().unwrap();
        }

        #[test]
        fn pop_after_gap_finds_next_bucket() {
            let mut freq = FreqBuckets::new();
            freq.insert("a");
            freq.insert("b");
            freq.promote(&"a");
            freq.promote(&"a"); // a at 3, b at 1

            assert_eq!(freq.pop_min(), Some(("b", 1)));
            // bucket 1 is gone and the min is stale until consulted
            assert_eq!(freq.pop_min(), Some(("a", 3)));
            assert!(freq.is_empty());
            freq.check_invariants().unwrap();
        }

        #[test]
        fn remove_then_peek_finds_next_bucket() {
            let mut freq = FreqBuckets::new();
            freq.insert("cold");
            freq.insert("warm");
            freq.promote(&"warm");
            freq.remove(&"cold");
            assert_eq!(freq.peek_min(), Some((&"warm", 2)));
            freq.check_invariants().unwrap();
        }
    }

    mod candidate_order {
        use super::*;

        #[test]
        fn tie_breaks_oldest_inserted_first() {
            let mut freq = FreqBuckets::new();
            freq.insert("first");
            freq.insert("second");
            freq.insert("third");

            assert_eq!(freq.pop_min(), Some(("first", 1)));
            assert_eq!(freq.pop_min(), Some(("second", 1)));
            assert_eq!(freq.pop_min(), Some(("third", 1)));
            assert_eq!(freq.pop_min(), None);
        }

        #[test]
        fn promotion_forfeits_tie_break_position() {
            let mut freq = FreqBuckets::new();
            freq.insert("a");
            freq.insert("b");
            // Promote both: "a" reaches bucket 2 before "b", so "a" is
            // the older member there.
            freq.promote(&"a");
            freq.promote(&"b");

            assert_eq!(freq.pop_min(), Some(("a", 2)));
            assert_eq!(freq.pop_min(), Some(("b", 2)));
        }

        #[test]
        fn lower_frequency_always_wins() {
            let mut freq = FreqBuckets::new();
            freq.insert("hot");
            freq.promote(&"hot");
            freq.promote(&"hot");
            freq.insert("cold");

            assert_eq!(freq.peek_min(), Some((&"cold", 1)));
            assert_eq!(freq.pop_min(), Some(("cold", 1)));
            assert_eq!(freq.pop_min(), Some(("hot", 3)));
        }

        #[test]
        fn peek_does_not_remove() {
            let mut freq = FreqBuckets::new();
            freq.insert("a");
            assert_eq!(freq.peek_min(), Some((&"a", 1)));
            assert_eq!(freq.peek_min(), Some((&"a", 1)));
            assert_eq!(freq.len(), 1);
        }
    }

    mod slot_reuse {
        use super::*;

        #[test]
        fn slots_are_recycled_across_churn() {
            let mut freq = FreqBuckets::with_capacity(4);
            for round in 0..8u32 {
                for i in 0..4u32 {
                    freq.insert(round * 4 + i);
                }
                while freq.pop_min().is_some() {}
            }
            // Churn never grew the slot vector past one generation.
            assert!(freq.slots.len() <= 4);
            freq.check_invariants().unwrap();
        }

        #[test]
        fn clear_resets_everything() {
            let mut freq = FreqBuckets::new();
            freq.insert("a");
            freq.insert("b");
            freq.promote(&"a");
            freq.clear();
            assert!(freq.is_empty());
            assert_eq!(freq.min_freq(), None);
            assert_eq!(freq.pop_min(), None);
            freq.check_invariants().unwrap();
        }
    }

    mod invariants {
        use super::*;

        #[test]
        fn audit_passes_through_mixed_workload() {
            let mut freq = FreqBuckets::new();
            for i in 0..32u32 {
                freq.insert(i);
                if i % 3 == 0 {
                    freq.promote(&i);
                }
                if i % 5 == 0 {
                    freq.pop_min();
                }
                if i % 7 == 0 {
                    freq.remove(&(i / 2));
                }
                freq.check_invariants().unwrap();
            }
        }
    }
}
