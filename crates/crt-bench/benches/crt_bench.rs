//! Benchmarks for CRT-RS geometry transforms.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use crt_core::Coord;
use crt_geometry::{
    barrel, correction_map, geometric_correction, magnetic_correction, pincushion, pincushion_nl,
    ChainParams, CorrectionParams,
};

fn grid(n: usize) -> Vec<Coord> {
    (0..n * n)
        .map(|i| {
            let x = (i % n) as f32 / (n - 1) as f32 * 1.8 - 0.9;
            let y = (i / n) as f32 / (n - 1) as f32 * 1.8 - 0.9;
            Coord::new(x, y)
        })
        .collect()
}

/// Benchmark the individual distortion stages.
fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("distortion");
    let coords = grid(100);
    group.throughput(Throughput::Elements(coords.len() as u64));

    group.bench_function("pincushion", |b| {
        b.iter(|| coords.iter().map(|&uv| pincushion(black_box(uv))).collect::<Vec<_>>())
    });

    group.bench_function("pincushion_nl", |b| {
        b.iter(|| coords.iter().map(|&uv| pincushion_nl(black_box(uv))).collect::<Vec<_>>())
    });

    group.bench_function("barrel", |b| {
        b.iter(|| coords.iter().map(|&uv| barrel(black_box(uv))).collect::<Vec<_>>())
    });

    group.bench_function("magnetic_correction", |b| {
        b.iter(|| {
            coords
                .iter()
                .map(|&uv| magnetic_correction(black_box(uv), 0.5, 1.2))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark the correction pipeline fast path against the full path.
fn bench_correction(c: &mut Criterion) {
    let mut group = c.benchmark_group("correction");
    let coords = grid(100);
    group.throughput(Throughput::Elements(coords.len() as u64));

    group.bench_function("fast_path", |b| {
        b.iter(|| {
            coords
                .iter()
                .map(|&uv| geometric_correction(black_box(uv), 0.0, 0.0, 0.0, 0.0))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("all_stages", |b| {
        b.iter(|| {
            coords
                .iter()
                .map(|&uv| geometric_correction(black_box(uv), 0.1, 0.05, 0.1, 0.1))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark ST map generation for the full chain.
fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    let chain = ChainParams {
        theta: 1.2,
        nonlinear: false,
        magnetic_strength: 0.5,
        correction: CorrectionParams::new(0.05, 0.02, 0.03, 0.03),
    };

    for &(w, h) in &[(320u32, 240u32), (640, 480), (1920, 1080)] {
        group.throughput(Throughput::Elements(w as u64 * h as u64));
        group.bench_with_input(
            BenchmarkId::new("chain", format!("{w}x{h}")),
            &(w, h),
            |b, &(w, h)| b.iter(|| correction_map(w, h, |uv| chain.apply(uv))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_distortion, bench_correction, bench_map);
criterion_main!(benches);
