//! Closest-pair benchmarks
//!
//! Compares divide and conquer against the quadratic oracle, and the
//! median-of-three pivot against the first-element pivot on `(y, x)`-sorted
//! input.
//!
//! Run: cargo bench --bench closest_pair

use closest_pair::closest_pair::{closest_pair_brute_force, ClosestPair};
use closest_pair::generator::{PointGenerator, DEFAULT_BOUND, DEFAULT_SEED};
use closest_pair::select::{quickselect, FirstElement, MedianOfThree};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generator() -> PointGenerator {
    PointGenerator::new(DEFAULT_BOUND, DEFAULT_SEED).expect("default bound is valid")
}

fn bench_divide_and_conquer_vs_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair");
    for n in [64usize, 256, 1024] {
        let points = generator().generate(n);
        group.bench_with_input(BenchmarkId::new("divide_and_conquer", n), &points, |b, pts| {
            let solver = ClosestPair::new(MedianOfThree);
            b.iter(|| black_box(solver.solve(black_box(pts))))
        });
        group.bench_with_input(BenchmarkId::new("brute_force", n), &points, |b, pts| {
            b.iter(|| black_box(closest_pair_brute_force(black_box(pts))))
        });
    }
    group.finish();
}

fn bench_pivot_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("pivot");
    for n in [256usize, 2048] {
        let points = generator().generate_worst_case(n);
        group.bench_with_input(BenchmarkId::new("median_of_three", n), &points, |b, pts| {
            let solver = ClosestPair::new(MedianOfThree);
            b.iter(|| black_box(solver.solve(black_box(pts))))
        });
        group.bench_with_input(BenchmarkId::new("first_element", n), &points, |b, pts| {
            let solver = ClosestPair::new(FirstElement);
            b.iter(|| black_box(solver.solve(black_box(pts))))
        });
    }
    group.finish();
}

/// Median selection on already sorted x-values, where the first-element pivot is quadratic.
fn bench_quickselect_sorted(c: &mut Criterion) {
    let sorted: Vec<f64> = (0..4096).map(|i| i as f64).collect();
    let k = sorted.len() / 2;
    c.bench_function("quickselect_sorted_median_of_three", |b| {
        b.iter(|| {
            let mut xs = sorted.clone();
            let n = xs.len();
            black_box(quickselect(&mut xs, 0, n - 1, k, &MedianOfThree))
        })
    });
    c.bench_function("quickselect_sorted_first_element", |b| {
        b.iter(|| {
            let mut xs = sorted.clone();
            let n = xs.len();
            black_box(quickselect(&mut xs, 0, n - 1, k, &FirstElement))
        })
    });
}

criterion_group!(
    benches,
    bench_divide_and_conquer_vs_brute_force,
    bench_pivot_strategies,
    bench_quickselect_sorted
);
criterion_main!(benches);
