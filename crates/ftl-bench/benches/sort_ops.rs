//! Criterion micro-benchmarks for the three comparison sorts.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ftl_algorithms::{bubble_sort, merge_sort, quick_sort};
use ftl_bench::random_values;

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for len in [64usize, 1024] {
        let input = random_values(42, len, 1_000_000);
        group.bench_with_input(BenchmarkId::new("bubble", len), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut v| {
                    bubble_sort(&mut v);
                    black_box(v)
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("merge", len), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut v| {
                    merge_sort(&mut v);
                    black_box(v)
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("quick", len), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut v| {
                    quick_sort(&mut v);
                    black_box(v)
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("std_unstable", len), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut v| {
                    v.sort_unstable();
                    black_box(v)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_quick_sort_100k(c: &mut Criterion) {
    let input = random_values(7, 100_000, 1_000_000);
    c.bench_function("quick_sort_100k", |b| {
        b.iter_batched(
            || input.clone(),
            |mut v| {
                quick_sort(&mut v);
                black_box(v)
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_sorts, bench_quick_sort_100k);
criterion_main!(benches);
