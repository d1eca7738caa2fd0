//! Criterion benchmarks for the shape model.
//! Measures `area` over batches of sampled shapes.
//! Results land under target/criterion by default.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use figura::rand::{draw_shape, ReplayToken, ShapeCfg};
use figura::Shape;

fn random_shapes(m: usize, seed: u64) -> Vec<Shape> {
    let cfg = ShapeCfg::default();
    (0..m as u64)
        .map(|i| draw_shape(cfg, ReplayToken { seed, index: i }).expect("valid cfg"))
        .collect()
}

fn bench_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape");
    for &m in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("area_batch", m), &m, |b, &m| {
            b.iter_batched(
                || random_shapes(m, 43),
                |shapes| shapes.iter().map(Shape::area).sum::<f64>(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_area);
criterion_main!(benches);
