//! SameContents performance benchmarks
//!
//! The multiset comparison promises linear time in the combined sequence
//! lengths; these benches make a super-linear regression visible.
//!
//! Run with: cargo bench --bench same_contents

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use verdict_checkers::{Checker, SameContents, Value};

// ============================================================================
// Helpers
// ============================================================================

fn ascending(len: usize) -> Value {
    Value::array((0..len).map(|i| Value::from(i as f64)).collect())
}

fn descending(len: usize) -> Value {
    Value::array((0..len).rev().map(|i| Value::from(i as f64)).collect())
}

fn shifted(len: usize) -> Value {
    Value::array((1..=len).map(|i| Value::from(i as f64)).collect())
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_equal_contents(c: &mut Criterion) {
    let mut group = c.benchmark_group("same_contents/equal");
    for size in [1_000usize, 10_000, 100_000] {
        let values = [ascending(size), descending(size)];
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| SameContents.check(black_box(&values), &[]).ok());
        });
    }
    group.finish();
}

fn bench_mismatched_contents(c: &mut Criterion) {
    let mut group = c.benchmark_group("same_contents/mismatch");
    for size in [1_000usize, 10_000, 100_000] {
        // One element differs at each end of the value range.
        let values = [ascending(size), shifted(size)];
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| SameContents.check(black_box(&values), &[]).ok());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_equal_contents, bench_mismatched_contents);
criterion_main!(benches);
