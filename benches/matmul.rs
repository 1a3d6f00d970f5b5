use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use seqr::ops::matrix::{multiply, validate_for_multiplication};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Deterministic square matrix with no zero cells, so the same data passes
/// validation and feeds the product kernel.
fn square_matrix(size: usize, salt: usize) -> Vec<Vec<i32>> {
    (0..size)
        .map(|i| {
            (0..size)
                .map(|j| ((i * 17 + j * salt) % 9 + 1) as i32)
                .collect()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Dense product
// ---------------------------------------------------------------------------

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    for size in [8, 32, 64, 128] {
        let left = square_matrix(size, 3);
        let right = square_matrix(size, 13);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(multiply(&left, &right)));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for size in [64, 256] {
        let left = square_matrix(size, 3);
        let right = square_matrix(size, 13);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(validate_for_multiplication(&left, &right)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multiply, bench_validate);
criterion_main!(benches);
