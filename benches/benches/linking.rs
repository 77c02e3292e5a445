// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glimmer_link::filter::SearchFilter;
use glimmer_link::view::{Detached, TableView};
use glimmer_link::{Entity, SyncBridge};

#[derive(Debug, Default)]
struct NullTable;

impl TableView for NullTable {
    fn toggle_row_highlight(&mut self, _id: &str) {}
    fn clear_row_highlights(&mut self) {}
    fn clear_search(&mut self) {}
    fn search_column(&mut self, _column: usize, filter: &SearchFilter) {
        black_box(filter);
    }
    fn draw(&mut self) {}
}

fn entities(len: usize) -> Vec<Entity> {
    (0..len)
        .map(|i| Entity::new(format!("Gene.{i}"), Some(i)).with_field("logFC", 0.5))
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/for_ids");

    // Identifiers contain regex metacharacters, so every one is escaped.
    for len in [8usize, 128, 1_024] {
        let all = entities(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &all, |b, all| {
            b.iter(|| black_box(SearchFilter::for_ids(all.iter().map(Entity::id))));
        });
    }

    group.finish();
}

fn bench_plot_clicks(c: &mut Criterion) {
    let mut group = c.benchmark_group("bridge/plot_clicks");

    // Each click rebuilds the table filter from the whole selection.
    for len in [8usize, 64, 256] {
        let all = entities(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &all, |b, all| {
            b.iter(|| {
                let mut bridge = SyncBridge::new(Detached, NullTable, Detached);
                pollster::block_on(async {
                    for entity in all {
                        bridge.on_plot_click(Some(entity)).await;
                    }
                });
                black_box(bridge.selection().len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_plot_clicks);
criterion_main!(benches);
