//! Ordered vs hash-based map: insert, lookup and erase timings.
//!
//! Every map sees the same shuffled key permutation so the comparison is fair.

use crate::error::DemoError;
use crate::timing::Stopwatch;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, HashMap};
use std::hint::black_box;
use std::time::Duration;

/// The operations the benchmark drives.
pub trait BenchMap: Default {
    const NAME: &'static str;

    fn insert(&mut self, key: i32, value: i32);
    fn lookup(&self, key: i32) -> Option<i32>;
    fn erase(&mut self, key: i32) -> Option<i32>;
    fn len(&self) -> usize;
    fn sorted_pairs(&self) -> Vec<(i32, i32)>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BenchMap for BTreeMap<i32, i32> {
    const NAME: &'static str = "BTreeMap";

    fn insert(&mut self, key: i32, value: i32) {
        BTreeMap::insert(self, key, value);
    }

    fn lookup(&self, key: i32) -> Option<i32> {
        self.get(&key).copied()
    }

    fn erase(&mut self, key: i32) -> Option<i32> {
        self.remove(&key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn sorted_pairs(&self) -> Vec<(i32, i32)> {
        self.iter().map(|(&k, &v)| (k, v)).collect()
    }
}

macro_rules! hash_bench_map {
    ($ty:ty, $name:expr) => {
        impl BenchMap for $ty {
            const NAME: &'static str = $name;

            fn insert(&mut self, key: i32, value: i32) {
                HashMap::insert(self, key, value);
            }

            fn lookup(&self, key: i32) -> Option<i32> {
                self.get(&key).copied()
            }

            fn erase(&mut self, key: i32) -> Option<i32> {
                self.remove(&key)
            }

            fn len(&self) -> usize {
                HashMap::len(self)
            }

            fn sorted_pairs(&self) -> Vec<(i32, i32)> {
                let mut pairs: Vec<(i32, i32)> = self.iter().map(|(&k, &v)| (k, v)).collect();
                pairs.sort_unstable();
                pairs
            }
        }
    };
}

hash_bench_map!(HashMap<i32, i32>, "HashMap");
hash_bench_map!(FxHashMap<i32, i32>, "FxHashMap");

#[derive(Debug, Clone, PartialEq)]
pub struct MapTimings {
    pub name: &'static str,
    pub insert: Duration,
    pub lookup: Duration,
    pub erase: Duration,
}

#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub elements: usize,
    pub timings: Vec<MapTimings>,
}

/// Keys `0..count`, shuffled. `count` must fit in an `i32`.
pub fn shuffled_keys<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<i32>, DemoError> {
    let end = i32::try_from(count).map_err(|_| {
        DemoError::invalid_argument(
            "elements",
            count.to_string(),
            format!("must be at most {}", i32::MAX),
        )
    })?;
    let mut keys: Vec<i32> = (0..end).collect();
    keys.shuffle(rng);
    Ok(keys)
}

/// Insert `keys[i] -> i`, returning the filled map and the insert time.
pub fn fill<M: BenchMap>(keys: &[i32]) -> (M, Duration) {
    let mut map = M::default();
    let mut watch = Stopwatch::start();
    for (key, value) in keys.iter().zip(0i32..) {
        map.insert(*key, value);
    }
    (map, watch.lap())
}

/// Run insert, lookup and erase over `keys`, back to back.
pub fn time_map<M: BenchMap>(keys: &[i32]) -> MapTimings {
    let (mut map, insert) = fill::<M>(keys);

    let mut watch = Stopwatch::start();
    for &key in keys {
        black_box(map.lookup(key));
    }
    let lookup = watch.lap();

    for &key in keys {
        map.erase(key);
    }
    let erase = watch.lap();

    MapTimings {
        name: M::NAME,
        insert,
        lookup,
        erase,
    }
}

/// Time every map kind on the same keys and check they held the same pairs.
pub fn compare(keys: &[i32]) -> Result<ComparisonReport, DemoError> {
    let btree = time_map::<BTreeMap<i32, i32>>(keys);
    let hash = time_map::<HashMap<i32, i32>>(keys);
    let fx = time_map::<FxHashMap<i32, i32>>(keys);

    let reference = snapshot::<BTreeMap<i32, i32>>(keys);
    if snapshot::<HashMap<i32, i32>>(keys) != reference {
        return Err(DemoError::content_mismatch(
            <BTreeMap<i32, i32> as BenchMap>::NAME,
            <HashMap<i32, i32> as BenchMap>::NAME,
        ));
    }

    if snapshot::<FxHashMap<i32, i32>>(keys) != reference {
        return Err(DemoError::content_mismatch(
            <BTreeMap<i32, i32> as BenchMap>::NAME,
            <FxHashMap<i32, i32> as BenchMap>::NAME,
        ));
    }

    Ok(ComparisonReport {
        elements: keys.len(),
        timings: vec![btree, hash, fx],
    })
}

// Post-insert contents from an untimed fill.
fn snapshot<M: BenchMap>(keys: &[i32]) -> Vec<(i32, i32)> {
    fill::<M>(keys).0.sorted_pairs()
}
