//! Benchmarks for the Myers difference engine
//!
//! Performance-critical paths:
//! - `diff`: middle snake search plus script building, fresh buffers per call
//! - `MyersDiff::diff_slices`: same search with pooled buffers
//! - `diff_text`: tokenization and symbol encoding on top of the search

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use snakediff_kernel::MyersDiff;
use snakediff_kernel::diff::{DiffConfig, diff, diff_text};
use snakediff_kernel::encoding::TextOptions;

/// Deterministic pseudo-random sequence over a small alphabet.
fn generate_sequence(len: usize, seed: u64, alphabet: u32) -> Vec<u32> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 33) as u32 % alphabet
        })
        .collect()
}

/// Copy of `base` with every `stride`-th element replaced.
fn mutate(base: &[u32], stride: usize) -> Vec<u32> {
    base.iter()
        .enumerate()
        .map(|(i, &v)| if i % stride == 0 { v + 1000 } else { v })
        .collect()
}

fn generate_text(lines: usize, seed: u64) -> String {
    generate_sequence(lines, seed, 64)
        .iter()
        .map(|v| format!("line number {v} of the generated file\n"))
        .collect()
}

fn bench_sparse_changes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_changes");

    for len in [100, 1_000, 10_000] {
        let a = generate_sequence(len, 42, 256);
        let b = mutate(&a, 50);
        group.throughput(Throughput::Elements((a.len() + b.len()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| diff(black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

fn bench_unrelated_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("unrelated_inputs");

    for len in [100, 500, 2_000] {
        let a = generate_sequence(len, 1, 4);
        let b = generate_sequence(len, 2, 4);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| diff(black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

fn bench_pooled_buffers(c: &mut Criterion) {
    let mut group = c.benchmark_group("pooled_buffers");
    let a = generate_sequence(5_000, 7, 256);
    let b = mutate(&a, 25);

    let shifted = MyersDiff::new();
    group.bench_function("shift_boundaries", |bench| {
        bench.iter(|| shifted.diff_slices(black_box(&a), black_box(&b)));
    });

    let raw = MyersDiff::with_config(DiffConfig {
        shift_boundaries: false,
    });
    group.bench_function("no_shift", |bench| {
        bench.iter(|| raw.diff_slices(black_box(&a), black_box(&b)));
    });

    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_text");
    let options = TextOptions::default();

    for lines in [100, 1_000] {
        let a = generate_text(lines, 11);
        let b = generate_text(lines, 12);
        group.throughput(Throughput::Bytes((a.len() + b.len()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |bench, _| {
            bench.iter(|| diff_text(black_box(&a), black_box(&b), &options));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sparse_changes,
    bench_unrelated_inputs,
    bench_pooled_buffers,
    bench_text
);
criterion_main!(benches);
