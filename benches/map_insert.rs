// Criterion benchmark: hinted vs unhinted ordered-map insertion

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std_feature_demos::hinted_insert::{
    generate_sorted_keys, insert_all_with_hint, insert_all_without_hint,
};

fn benchmark_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_insert");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [1_000, 10_000, 100_000] {
        let keys = generate_sorted_keys(size, &mut rng);

        group.bench_with_input(BenchmarkId::new("with_hint", size), &keys, |b, keys| {
            b.iter(|| black_box(insert_all_with_hint(black_box(keys)).len()))
        });

        group.bench_with_input(BenchmarkId::new("without_hint", size), &keys, |b, keys| {
            b.iter(|| black_box(insert_all_without_hint(black_box(keys)).len()))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_insertion);
criterion_main!(benches);
