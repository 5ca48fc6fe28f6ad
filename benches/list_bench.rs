//! List push and scan benchmarks.
//!
//! Compares inline-resident pushes against pushes that cross the inline
//! capacity and migrate, with `Vec` as the baseline, and measures the
//! linear `contains` scan across small cardinalities.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use smallord::collections::List;
use std::hint::black_box;

const SIZES: [usize; 4] = [4, 8, 64, 1024];

/// Returns the appropriate BatchSize based on input size.
fn batch_size_for(size: usize) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_push(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("list_push");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("list", size), &size, |bencher, &size| {
            bencher.iter_batched(
                List::<usize, 8>::new,
                |mut list| {
                    for value in 0..size {
                        list.push(black_box(value)).unwrap();
                    }
                    black_box(list)
                },
                batch_size_for(size),
            );
        });

        group.bench_with_input(BenchmarkId::new("vec", size), &size, |bencher, &size| {
            bencher.iter_batched(
                Vec::<usize>::new,
                |mut vec| {
                    for value in 0..size {
                        vec.push(black_box(value));
                    }
                    black_box(vec)
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_inline_resident_push(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("list_push_inline_resident");

    // Everything fits the inline capacity: no allocation at all.
    group.bench_function("push_8_of_8", |bencher| {
        bencher.iter_batched(
            List::<usize, 8>::new,
            |mut list| {
                for value in 0..8 {
                    list.push(black_box(value)).unwrap();
                }
                black_box(list)
            },
            BatchSize::SmallInput,
        );
    });

    // One element over: a single migration is included in the cost.
    group.bench_function("push_9_of_8", |bencher| {
        bencher.iter_batched(
            List::<usize, 8>::new,
            |mut list| {
                for value in 0..9 {
                    list.push(black_box(value)).unwrap();
                }
                black_box(list)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn benchmark_extend_from_slice(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("list_extend_from_slice");

    for size in SIZES {
        let elements: Vec<usize> = (0..size).collect();
        group.bench_with_input(
            BenchmarkId::new("extend_from_slice", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    List::<usize, 8>::new,
                    |mut list| {
                        list.extend_from_slice(black_box(&elements)).unwrap();
                        black_box(list)
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("list_contains");

    for size in SIZES {
        let list: List<usize, 8> = (0..size).collect();
        let absent = size + 1;
        group.bench_with_input(
            BenchmarkId::new("linear_scan_miss", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(list.contains(black_box(&absent))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_push,
    benchmark_inline_resident_push,
    benchmark_extend_from_slice,
    benchmark_contains
);
criterion_main!(benches);
