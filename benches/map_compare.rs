// Criterion benchmark: filling BTreeMap, HashMap and FxHashMap from the same keys

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, HashMap};
use std_feature_demos::map_compare::{fill, shuffled_keys, BenchMap};

fn benchmark_fill(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let keys = shuffled_keys(100_000, &mut rng).unwrap();

    let mut group = c.benchmark_group("map_fill");

    group.bench_function("BTreeMap", |b| {
        b.iter(|| BenchMap::len(&fill::<BTreeMap<i32, i32>>(black_box(&keys)).0))
    });

    group.bench_function("HashMap", |b| {
        b.iter(|| BenchMap::len(&fill::<HashMap<i32, i32>>(black_box(&keys)).0))
    });

    group.bench_function("FxHashMap", |b| {
        b.iter(|| BenchMap::len(&fill::<FxHashMap<i32, i32>>(black_box(&keys)).0))
    });

    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let keys = shuffled_keys(100_000, &mut rng).unwrap();
    let (ordered, _) = fill::<BTreeMap<i32, i32>>(&keys);
    let (hashed, _) = fill::<HashMap<i32, i32>>(&keys);

    c.bench_function("lookup_btreemap", |b| {
        b.iter(|| keys.iter().filter_map(|&k| ordered.lookup(k)).count())
    });

    c.bench_function("lookup_hashmap", |b| {
        b.iter(|| keys.iter().filter_map(|&k| hashed.lookup(k)).count())
    });
}

criterion_group!(benches, benchmark_fill, benchmark_lookup);
criterion_main!(benches);
