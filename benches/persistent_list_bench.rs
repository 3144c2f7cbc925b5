//! Benchmark for PersistentList traversals.
//!
//! Compares list construction against `VecDeque`, and measures the numeric
//! dispatch, windowing and deduplication paths on lists of growing size.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::VecDeque;
use std::hint::black_box;
use traversa::persistent::PersistentList;

// =============================================================================
// prepend Benchmark
// =============================================================================

fn benchmark_prepend(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("prepend");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("PersistentList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = PersistentList::empty();
                    for index in 0..size {
                        list = list.prepend(black_box(index));
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut deque = VecDeque::new();
                    for index in 0..size {
                        deque.push_front(black_box(index));
                    }
                    black_box(deque)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Numeric Dispatch Benchmark
// =============================================================================

fn benchmark_numeric(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("numeric");

    for size in [100, 1000, 10000] {
        let integers: PersistentList<i64> = (0..size).collect();
        let floats: PersistentList<f64> = (0..size).map(|index| index as f64).collect();

        group.bench_with_input(BenchmarkId::new("sum_i64", size), &size, |bencher, _| {
            bencher.iter(|| black_box(integers.sum()));
        });

        group.bench_with_input(
            BenchmarkId::new("fold_i64", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(integers.fold(0, |total, element| total + element)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("average_f64", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(floats.average()));
            },
        );

        group.bench_with_input(BenchmarkId::new("max_i64", size), &size, |bencher, _| {
            bencher.iter(|| black_box(integers.max()));
        });
    }

    group.finish();
}

// =============================================================================
// Windowing Benchmark
// =============================================================================

fn benchmark_windowing(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("windowing");

    for size in [100, 1000] {
        let list: PersistentList<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("grouped_8", size), &size, |bencher, _| {
            bencher.iter(|| black_box(list.grouped(8)));
        });

        group.bench_with_input(BenchmarkId::new("sliding_8", size), &size, |bencher, _| {
            bencher.iter(|| black_box(list.sliding(8)));
        });
    }

    group.finish();
}

// =============================================================================
// distinct Benchmark
// =============================================================================

fn benchmark_distinct(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("distinct");

    for size in [100, 1000, 10000] {
        let list: PersistentList<i32> = (0..size).map(|index| index % 64).collect();

        group.bench_with_input(
            BenchmarkId::new("PersistentList", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(list.distinct()));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_prepend,
    benchmark_numeric,
    benchmark_windowing,
    benchmark_distinct
);

criterion_main!(benches);
