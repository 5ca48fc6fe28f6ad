//! OrderedMap insert/lookup benchmarks.
//!
//! Measures the linear-scan map across the small cardinalities it
//! targets, with `std::collections::HashMap` as the large-size baseline
//! to make the trade-off visible.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use smallord::collections::OrderedMap;
use std::collections::HashMap;
use std::hint::black_box;

const SIZES: [usize; 4] = [4, 8, 16, 64];

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_map_insert");

    for size in SIZES {
        group.bench_with_input(
            BenchmarkId::new("ordered_map", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    OrderedMap::<usize, usize, 8>::new,
                    |mut map| {
                        for key in 0..size {
                            map.insert(black_box(key), key).unwrap();
                        }
                        black_box(map)
                    },
                    BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("hash_map", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    HashMap::<usize, usize>::new,
                    |mut map| {
                        for key in 0..size {
                            map.insert(black_box(key), key);
                        }
                        black_box(map)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_map_get");

    for size in SIZES {
        let map: OrderedMap<usize, usize, 8> = (0..size).map(|key| (key, key)).collect();
        let last = size - 1;
        group.bench_with_input(
            BenchmarkId::new("linear_scan_last_key", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(map.get(black_box(&last))));
            },
        );
    }

    group.finish();
}

fn benchmark_update_in_place(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_map_update");

    for size in SIZES {
        let base: OrderedMap<usize, usize, 8> = (0..size).map(|key| (key, key)).collect();
        group.bench_with_input(
            BenchmarkId::new("update_existing_key", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base.clone(),
                    |mut map| {
                        map.insert(black_box(size / 2), black_box(0)).unwrap();
                        black_box(map)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_get,
    benchmark_update_in_place
);
criterion_main!(benches);
