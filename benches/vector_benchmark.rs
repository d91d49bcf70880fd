// ============================================================================
// Vector Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - Element-wise plus and dot product by dimension
// 2. Magnitude - Square root and normalization
// 3. Cross Product - 2D embedding vs native 3D
// 4. Classification - Parallel / orthogonal tests
//
// Notes:
// - Dimensions up to 4 stay in inline (stack) storage
// - Every decimal operation rounds to 7 significant digits
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_vectors::prelude::*;
use std::hint::black_box;

fn make_vector(dimension: usize, seed: i64) -> Vector {
    let coordinates = (0..dimension as i64).map(|i| {
        let milli = (seed * 7919 + i * 104_729) % 200_000 - 100_000;
        milli as f64 / 1000.0
    });
    Vector::new(coordinates).unwrap()
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    for dimension in [2_usize, 3, 4, 16, 64].iter() {
        let a = make_vector(*dimension, 1);
        let b = make_vector(*dimension, 2);

        group.bench_with_input(BenchmarkId::new("plus", dimension), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.plus(b).unwrap()));
        });

        group.bench_with_input(
            BenchmarkId::new("dot_product", dimension),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.dot_product(b).unwrap()));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Magnitude Benchmarks
// ============================================================================

fn benchmark_magnitude(c: &mut Criterion) {
    let mut group = c.benchmark_group("magnitude");

    for dimension in [2_usize, 3, 16].iter() {
        let a = make_vector(*dimension, 3);

        group.bench_with_input(BenchmarkId::new("magnitude", dimension), &a, |bench, a| {
            bench.iter(|| black_box(a.magnitude().unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("normalize", dimension), &a, |bench, a| {
            bench.iter(|| black_box(a.normalize().unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Cross Product Benchmarks
// ============================================================================

fn benchmark_cross_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_product");

    for dimension in [2_usize, 3].iter() {
        let a = make_vector(*dimension, 4);
        let b = make_vector(*dimension, 5);

        group.bench_with_input(
            BenchmarkId::new("cross_product", dimension),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.cross_product(b).unwrap()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("area_of_triangle", dimension),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.area_of_triangle(b).unwrap()));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Classification Benchmarks
// ============================================================================

fn benchmark_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let a = make_vector(3, 6);
    let b = a.times_scalar(-3).unwrap();
    let other = make_vector(3, 7);

    group.bench_function("is_parallel", |bench| {
        bench.iter(|| black_box(a.is_parallel(&b).unwrap()));
    });

    group.bench_function("is_orthogonal", |bench| {
        bench.iter(|| black_box(a.is_orthogonal(&other).unwrap()));
    });

    group.bench_function("angle", |bench| {
        bench.iter(|| black_box(a.angle(&other, AngleUnit::Radians).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_arithmetic,
    benchmark_magnitude,
    benchmark_cross_product,
    benchmark_classification,
);
criterion_main!(benches);
