// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: generator throughput
//!
//! Measures raw `next_u64` draws, each typed sampling path, and the 128-bit
//! remap over batches of 1k, 10k, and 100k draws. Throughput "elements" are
//! draws; every typed sample consumes exactly one.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use echo_numerics::{remap, Rng};
use std::hint::black_box;
use std::time::Duration;

const SEED: u64 = 0xDEAD_BEEF;
const BATCHES: [u64; 3] = [1_000, 10_000, 100_000];

fn bench_raw(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_raw");
    group
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    for &n in &BATCHES {
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::new("next_u64", n), &n, |b, &n| {
            let mut rng = Rng::with_seed(SEED);
            b.iter(|| {
                let mut acc = 0_u64;
                for _ in 0..n {
                    acc ^= rng.next_u64();
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn bench_typed(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_typed");
    group
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    let n = 10_000_u64;
    group.throughput(Throughput::Elements(n));

    group.bench_function("next_i32", |b| {
        let mut rng = Rng::with_seed(SEED);
        b.iter(|| {
            let mut acc = 0_i64;
            for _ in 0..n {
                acc = acc.wrapping_add(i64::from(rng.next()));
            }
            black_box(acc)
        });
    });
    group.bench_function("next_i64", |b| {
        let mut rng = Rng::with_seed(SEED);
        b.iter(|| {
            let mut acc = 0_i64;
            for _ in 0..n {
                acc = acc.wrapping_add(rng.next_i64());
            }
            black_box(acc)
        });
    });
    group.bench_function("next_f64", |b| {
        let mut rng = Rng::with_seed(SEED);
        b.iter(|| {
            let mut acc = 0.0_f64;
            for _ in 0..n {
                acc += rng.next_f64();
            }
            black_box(acc)
        });
    });
    group.bench_function("range_i64", |b| {
        let mut rng = Rng::with_seed(SEED);
        b.iter(|| {
            let mut acc = 0_i64;
            for _ in 0..n {
                acc = acc.wrapping_add(rng.range_i64(-1_000, 1_000).unwrap_or_default());
            }
            black_box(acc)
        });
    });
    group.finish();
}

fn bench_remap(c: &mut Criterion) {
    let mut group = c.benchmark_group("remap");
    let n = 10_000_u64;
    group.throughput(Throughput::Elements(n));
    group.bench_function("full_width_to_byte", |b| {
        let mut rng = Rng::with_seed(SEED);
        let inputs: Vec<u64> = (0..n).map(|_| rng.next_u64()).collect();
        b.iter(|| {
            let mut acc = 0_u64;
            for &v in &inputs {
                acc = acc.wrapping_add(remap(v, 0, u64::MAX, 0, 255).unwrap_or_default());
            }
            black_box(acc)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_raw, bench_typed, bench_remap);
criterion_main!(benches);
