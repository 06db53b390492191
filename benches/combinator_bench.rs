//! Benchmark for the `Array` combinators.
//!
//! Measures map, filter, reduce, sort and group over arrays of integers.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use functional::prelude::*;
use std::hint::black_box;

fn integers(size: u32) -> Array {
    Array::range(0, size).reverse()
}

fn increment(value: &Value) -> Result<Value> {
    Ok(Value::from(value.require_integer()? + 1))
}

fn is_even(value: &Value) -> Result<bool> {
    Ok(value.require_integer()? % 2 == 0)
}

// =============================================================================
// Element-wise Benchmarks
// =============================================================================

fn benchmark_map_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter");

    for size in [100, 1_000, 10_000] {
        let values = integers(size);
        group.bench_with_input(BenchmarkId::new("map", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.map(increment)));
        });
        group.bench_with_input(BenchmarkId::new("filter", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.filter(is_even)));
        });
    }

    group.finish();
}

fn benchmark_matrix(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("matrix");

    for size in [10, 50, 100] {
        let values = integers(size);
        group.bench_with_input(BenchmarkId::new("square_map", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(values.square_map(|left, right| {
                    Ok(Value::from(left.require_integer()? * right.require_integer()?))
                }))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Folding Benchmarks
// =============================================================================

fn benchmark_folding(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("folding");

    for size in [100, 1_000, 10_000] {
        let values = integers(size);
        group.bench_with_input(BenchmarkId::new("reduce", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(values.reduce(|left, right| {
                    Ok(Value::from(left.require_integer()? ^ right.require_integer()?))
                }))
            });
        });
        group.bench_with_input(BenchmarkId::new("sort", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.sort()));
        });
        group.bench_with_input(BenchmarkId::new("group_by", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(values.group_by(|value| Ok(Value::from(value.require_integer()? % 16))))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_map_filter, benchmark_matrix, benchmark_folding);
criterion_main!(benches);
