// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use glimmer_selection::SelectionStore;
use std::time::Duration;

fn bench_set_vs_hashed(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/set");

    // `set` scans for duplicates and is quadratic; `set_hashed` is linear.
    // Large inputs model "select every row of the table".
    for len in [128usize, 512, 2_048, 8_192] {
        let keys: Vec<u32> = (0..(len as u32)).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("set", len), &keys, |b, keys| {
            b.iter_batched(
                SelectionStore::<u32>::new,
                |mut sel| {
                    sel.set(keys.iter().copied());
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("set_hashed", len), &keys, |b, keys| {
            b.iter_batched(
                SelectionStore::<u32>::new,
                |mut sel| {
                    sel.set_hashed(keys.iter().copied());
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_set_hashed_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/set_large");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(3));

    // Whole-genome tables; `set` would take too long here.
    for len in [32_768usize, 131_072] {
        let keys: Vec<String> = (0..len).map(|i| format!("ENSG{i:011}")).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("set_hashed", len), &keys, |b, keys| {
            b.iter_batched(
                SelectionStore::<String>::new,
                |mut sel| {
                    sel.set_hashed(keys.iter().cloned());
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/toggle");

    // Click-by-click selection: every toggle rewrites and notifies.
    for len in [16usize, 128, 1_024] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("add_then_remove", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut sel = SelectionStore::<u32>::new();
                    sel.set_on_change(|items: &[u32]| {
                        black_box(items.len());
                    });
                    sel
                },
                |mut sel| {
                    for key in 0..(len as u32) {
                        sel.toggle(key);
                    }
                    for key in (0..(len as u32)).rev() {
                        sel.toggle(key);
                    }
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set_vs_hashed, bench_set_hashed_large, bench_toggle);
criterion_main!(benches);
