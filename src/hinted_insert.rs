//! Hinted vs. unhinted insertion into an ordered map.
//!
//! `BTreeMap` has no positional-hint API, so [`HintedMap`] supplies one: a hint
//! that names the current last key lets an ascending key go straight onto a
//! sorted tail run in O(1). [`HintedMap::merge_run`] moves the run into the tree
//! with `BTreeMap::append`, which bulk-builds from sorted input. Reads see both
//! parts without merging. A hint that does not match falls back to an ordinary
//! insert.
//!
//! Duplicate keys behave like an ordered map's `insert`: the first value wins and
//! later values for the same key are dropped, in both modes.

use crate::error::DemoError;
use crate::timing;
use rand::Rng;
use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::time::Duration;

/// Position immediately preceding the next insertion point.
///
/// `Hint::begin()` is the position before the first element; a hint returned by
/// [`HintedMap::insert_with_hint`] sits at the key that was just placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint<K> {
    after: Option<K>,
}

impl<K> Hint<K> {
    pub fn begin() -> Self {
        Hint { after: None }
    }

    pub fn after(key: K) -> Self {
        Hint { after: Some(key) }
    }

    pub fn key(&self) -> Option<&K> {
        self.after.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct HintedMap<K, V> {
    tree: BTreeMap<K, V>,
    // Strictly ascending, every key greater than the tree's last key.
    run: Vec<(K, V)>,
}

impl<K: Ord + Clone, V> HintedMap<K, V> {
    pub fn new() -> Self {
        HintedMap {
            tree: BTreeMap::new(),
            run: Vec::new(),
        }
    }

    /// Largest key currently stored.
    pub fn last_key(&self) -> Option<&K> {
        match self.run.last() {
            Some((key, _)) => Some(key),
            None => self.tree.keys().next_back(),
        }
    }

    /// Insert without a hint. Returns `false` (and drops `value`) when the key exists.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let reaches_run = self.run.first().map_or(false, |(first, _)| key >= *first);
        if reaches_run {
            self.merge_run();
        }
        match self.tree.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Insert next to `hint`. Returns the hint to pass with the following key.
    pub fn insert_with_hint(&mut self, hint: Hint<K>, key: K, value: V) -> Hint<K> {
        if hint.key() == self.last_key() {
            match self.last_key().map(|last| key.cmp(last)) {
                Some(Ordering::Equal) => return Hint::after(key),
                Some(Ordering::Less) => {}
                Some(Ordering::Greater) | None => {
                    self.run.push((key.clone(), value));
                    return Hint::after(key);
                }
            }
        }
        self.insert(key.clone(), value);
        Hint::after(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        match self.run.first() {
            Some((first, _)) if key >= first => self
                .run
                .binary_search_by(|(candidate, _)| candidate.cmp(key))
                .ok()
                .map(|idx| &self.run[idx].1),
            _ => self.tree.get(key),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len() + self.run.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.tree
            .iter()
            .chain(self.run.iter().map(|(key, value)| (key, value)))
    }

    pub fn clear(&mut self) {
        self.tree.clear();
        self.run.clear();
    }

    pub fn into_inner(mut self) -> BTreeMap<K, V> {
        self.merge_run();
        self.tree
    }

    /// Move the pending tail run into the tree.
    pub fn merge_run(&mut self) {
        if self.run.is_empty() {
            return;
        }
        let mut tail: BTreeMap<K, V> = self.run.drain(..).collect();
        self.tree.append(&mut tail);
    }
}

impl<K: Ord + Clone, V> Default for HintedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Random non-negative keys in the C `rand()` range, sorted but not deduplicated.
pub fn generate_sorted_keys<R: Rng>(count: usize, rng: &mut R) -> Vec<i32> {
    let mut keys: Vec<i32> = (0..count).map(|_| rng.gen_range(0..=i32::MAX)).collect();
    keys.sort_unstable();
    keys
}

/// Map each key to its position in `keys`, passing the returned hint along.
/// The tail run is merged before returning, so every entry ends up in the tree.
pub fn insert_all_with_hint(keys: &[i32]) -> HintedMap<i32, usize> {
    let mut map = HintedMap::new();
    let mut hint = Hint::begin();
    for (i, &key) in keys.iter().enumerate() {
        hint = map.insert_with_hint(hint, key, i);
    }
    map.merge_run();
    map
}

pub fn insert_all_without_hint(keys: &[i32]) -> HintedMap<i32, usize> {
    let mut map = HintedMap::new();
    for (i, &key) in keys.iter().enumerate() {
        map.insert(key, i);
    }
    map
}

#[derive(Debug, Clone)]
pub struct InsertionReport {
    pub elements: usize,
    pub distinct: usize,
    pub with_hint: Duration,
    pub without_hint: Duration,
}

/// Time both insertion modes over the same keys and check they agree.
pub fn run_benchmark(keys: &[i32]) -> Result<InsertionReport, DemoError> {
    let (hinted, with_hint) = timing::time(|| insert_all_with_hint(keys));
    let (plain, without_hint) = timing::time(|| insert_all_without_hint(keys));

    if !hinted.iter().eq(plain.iter()) {
        return Err(DemoError::content_mismatch("hinted map", "unhinted map"));
    }

    Ok(InsertionReport {
        elements: keys.len(),
        distinct: hinted.len(),
        with_hint,
        without_hint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hinted_ascending_insert() {
        let mut map = HintedMap::new();
        let mut hint = Hint::begin();
        for key in [1, 3, 5, 7] {
            hint = map.insert_with_hint(hint, key, key * 10);
        }
        assert_eq!(hint, Hint::after(7));
        assert_eq!(map.len(), 4);
        assert_eq!(map.get(&5), Some(&50));
        assert_eq!(map.get(&4), None);
        assert_eq!(map.last_key(), Some(&7));
    }

    #[test]
    fn test_duplicate_keeps_first_value() {
        let keys = [2, 4, 4, 4, 9];
        let hinted = insert_all_with_hint(&keys);
        let plain = insert_all_without_hint(&keys);

        assert_eq!(hinted.len(), 3);
        assert_eq!(hinted.get(&4), Some(&1));
        assert!(hinted.iter().eq(plain.iter()));
    }

    #[test]
    fn test_unhinted_insert_reports_existing_key() {
        let mut map = HintedMap::new();
        assert!(map.insert("b", 1));
        assert!(!map.insert("b", 2));
        assert_eq!(map.get(&"b"), Some(&1));
    }

    #[test]
    fn test_wrong_hint_falls_back() {
        let mut map = HintedMap::new();
        let mut hint = Hint::begin();
        for key in [10, 20, 30] {
            hint = map.insert_with_hint(hint, key, ());
        }
        // Stale hint, key in the middle of the tail run.
        map.insert_with_hint(Hint::after(10), 15, ());
        // Begin hint on a non-empty map, key beyond the end.
        map.insert_with_hint(Hint::begin(), 40, ());

        let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![10, 15, 20, 30, 40]);
    }

    #[test]
    fn test_mixed_order_through_tree_and_run() {
        let mut map = HintedMap::new();
        let mut hint = Hint::begin();
        for key in [5, 6, 7] {
            hint = map.insert_with_hint(hint, key, key);
        }
        map.insert(1, 1);
        map.insert_with_hint(hint, 8, 8);

        let inner = map.into_inner();
        assert_eq!(inner.keys().copied().collect::<Vec<_>>(), vec![1, 5, 6, 7, 8]);
    }

    #[test]
    fn test_clear() {
        let mut map = insert_all_with_hint(&[1, 2, 3]);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.last_key(), None);
        map.insert_with_hint(Hint::begin(), 9, 0);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_hinted_insert_all_builds_the_tree() {
        let keys: Vec<i32> = (0..1_000).collect();
        let map = insert_all_with_hint(&keys);
        assert!(map.run.is_empty());
        assert_eq!(map.tree.len(), 1_000);
        assert_eq!(map.tree.get(&999), Some(&999));
    }

    #[test]
    fn test_merge_run_keeps_reads_unchanged() {
        let mut map = HintedMap::new();
        let mut hint = Hint::begin();
        for key in [2, 4, 6] {
            hint = map.insert_with_hint(hint, key, key);
        }
        assert_eq!(map.run.len(), 3);
        let before: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();

        map.merge_run();
        assert!(map.run.is_empty());
        assert_eq!(map.tree.len(), 3);
        let after: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(before, after);

        // Merging again is a no-op; hinted appends resume after the tree's last key.
        map.merge_run();
        map.insert_with_hint(hint, 8, 8);
        assert_eq!(map.last_key(), Some(&8));
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_generated_keys_are_sorted_and_non_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        let keys = generate_sorted_keys(1_000, &mut rng);
        assert_eq!(keys.len(), 1_000);
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        assert!(keys.iter().all(|&k| k >= 0));
    }

    #[test]
    fn test_run_benchmark_agrees() {
        let mut rng = StdRng::seed_from_u64(11);
        let keys = generate_sorted_keys(10_000, &mut rng);
        let report = run_benchmark(&keys).unwrap();
        assert_eq!(report.elements, 10_000);
        assert!(report.distinct <= 10_000);
    }

    proptest! {
        #[test]
        fn prop_hinted_matches_unhinted(mut keys in prop::collection::vec(0i32..50, 0..200)) {
            keys.sort();
            let hinted = insert_all_with_hint(&keys);
            let plain = insert_all_without_hint(&keys);
            prop_assert!(hinted.iter().eq(plain.iter()));
            prop_assert_eq!(hinted.into_inner(), plain.into_inner());
        }

        #[test]
        fn prop_unsorted_keys_still_agree(keys in prop::collection::vec(-20i32..20, 0..100)) {
            let hinted = insert_all_with_hint(&keys);
            let plain = insert_all_without_hint(&keys);
            prop_assert!(hinted.iter().eq(plain.iter()));
        }
    }
}
