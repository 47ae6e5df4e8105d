use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sch_core::{cartesian_sums, CartesianIndices};

fn axis(points: usize) -> Vec<f64> {
    (0..points).map(|i| i as f64 * 0.01).collect()
}

fn bench_sums(c: &mut Criterion) {
    let arrays = vec![axis(64), axis(64), axis(32)];
    c.bench_function("cartesian_sums_64x64x32", |b| {
        b.iter(|| cartesian_sums(black_box(&arrays)).expect("sums"))
    });
    c.bench_function("cartesian_indices_64x64x32", |b| {
        b.iter(|| CartesianIndices::new(vec![64, 64, 32]).count())
    });
}

criterion_group!(benches, bench_sums);
criterion_main!(benches);
