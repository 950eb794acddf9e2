//! An ordered map that keeps every value inserted under a key.
//!
//! Entries are ordered by key, then by insertion order within a key.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::iter::FusedIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiMap<K, V> {
    buckets: BTreeMap<K, Vec<V>>,
    len: usize,
}

impl<K: Ord, V> MultiMap<K, V> {
    pub fn new() -> Self {
        MultiMap {
            buckets: BTreeMap::new(),
            len: 0,
        }
    }

    /// Always inserts; an existing key gains another value at the end of its run.
    pub fn insert(&mut self, key: K, value: V) {
        self.buckets.entry(key).or_default().push(value);
        self.len += 1;
    }

    /// All entries whose key equals `key`, in insertion order. Empty if absent.
    pub fn equal_range<'a>(&'a self, key: &K) -> EqualRange<'a, K, V> {
        match self.buckets.get_key_value(key) {
            Some((k, values)) => EqualRange {
                key: Some(k),
                values: values.iter(),
            },
            None => EqualRange {
                key: None,
                values: <&[V]>::default().iter(),
            },
        }
    }

    pub fn count(&self, key: &K) -> usize {
        self.buckets.get(key).map_or(0, Vec::len)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.buckets.contains_key(key)
    }

    /// Remove every value stored under `key`, returning them in insertion order.
    pub fn remove_all(&mut self, key: &K) -> Vec<V> {
        let removed = self.buckets.remove(key).unwrap_or_default();
        self.len -= removed.len();
        removed
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.len,
        }
    }
}

impl<K: Ord, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Extend<(K, V)> for MultiMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MultiMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = MultiMap::new();
        map.extend(iter);
        map
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a MultiMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct EqualRange<'a, K, V> {
    key: Option<&'a K>,
    values: std::slice::Iter<'a, V>,
}

impl<'a, K, V> Iterator for EqualRange<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.key?;
        self.values.next().map(|value| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<K, V> ExactSizeIterator for EqualRange<'_, K, V> {}
impl<K, V> FusedIterator for EqualRange<'_, K, V> {}

pub struct Iter<'a, K, V> {
    buckets: btree_map::Iter<'a, K, Vec<V>>,
    current: Option<(&'a K, std::slice::Iter<'a, V>)>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    self.remaining -= 1;
                    return Some((*key, value));
                }
            }
            let (key, values) = self.buckets.next()?;
            self.current = Some((key, values.iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
