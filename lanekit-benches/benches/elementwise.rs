use std::ops::{Add, Mul};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lanekit::lane::Lane;
use lanekit::vector::{SupportedWidth, Vector, Width};
use lanekit_benches::{create_mask_with_seed, create_vectors_with_seed};
use rand::distributions::{Distribution, Standard};

fn bench_elementwise_inner<T, const N: usize>(c: &mut Criterion)
where
    T: Lane,
    Vector<T, N>: Add<Output = Vector<T, N>> + Mul<Output = Vector<T, N>>,
    Standard: Distribution<T>,
    Width<N>: SupportedWidth,
{
    let mut group = c.benchmark_group(format!(
        "Elementwise: {}x{}",
        std::any::type_name::<T>(),
        N
    ));

    let count = black_box(1024);
    let lhs = create_vectors_with_seed::<T, N>(count, 42);
    let rhs = create_vectors_with_seed::<T, N>(count, 77);
    let mask = create_mask_with_seed::<N>(0.5, 7);

    group.bench_function(BenchmarkId::new("add", count), |b| {
        b.iter(|| {
            lhs.iter().zip(rhs.iter()).for_each(|(&lhs, &rhs)| {
                black_box(lhs + rhs);
            });
        });
    });

    group.bench_function(BenchmarkId::new("mul", count), |b| {
        b.iter(|| {
            lhs.iter().zip(rhs.iter()).for_each(|(&lhs, &rhs)| {
                black_box(lhs * rhs);
            });
        });
    });

    group.bench_function(BenchmarkId::new("lanes_lt", count), |b| {
        b.iter(|| {
            lhs.iter().zip(rhs.iter()).for_each(|(&lhs, &rhs)| {
                black_box(lhs.lanes_lt(rhs));
            });
        });
    });

    group.bench_function(BenchmarkId::new("select", count), |b| {
        b.iter(|| {
            lhs.iter().zip(rhs.iter()).for_each(|(&lhs, &rhs)| {
                black_box(mask.select(lhs, rhs));
            });
        });
    });
}

fn bench_elementwise(c: &mut Criterion) {
    bench_elementwise_inner::<f32, 8>(c);
    bench_elementwise_inner::<f32, 4>(c);
    bench_elementwise_inner::<f64, 4>(c);
    bench_elementwise_inner::<i32, 4>(c);
    bench_elementwise_inner::<u64, 2>(c);
}

criterion_group!(benches, bench_elementwise);
criterion_main!(benches);
