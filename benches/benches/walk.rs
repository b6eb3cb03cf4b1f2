// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use overlook_value::Value;
use overlook_walk::{ExpandedSet, WalkOptions, expand, partition_ranges};

fn wide_array(len: usize) -> Value {
    Value::array((0..len).map(|i| Value::Number(i as f64)))
}

/// A balanced object tree with `fanout` keys per level.
fn deep_object(depth: usize, fanout: usize) -> Value {
    if depth == 0 {
        return Value::Number(0.0);
    }
    Value::object((0..fanout).map(|i| (format!("k{i}"), deep_object(depth - 1, fanout))))
}

/// Expands every node id once so a second pass descends everywhere.
fn expand_all(root: &Value, options: &WalkOptions) -> ExpandedSet {
    let mut expanded = ExpandedSet::new();
    loop {
        let before = expanded.revision();
        for node in expand(root, "root", &expanded, options) {
            if node.is_expandable {
                expanded.insert(node.node_id);
            }
        }
        if expanded.revision() == before {
            return expanded;
        }
    }
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk/expand");

    for len in [1_000usize, 10_000, 100_000] {
        let root = wide_array(len);
        let options = WalkOptions::new().with_max_items_per_level(len);
        let expanded = expand_all(&root, &options);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("wide_array", len), &root, |b, root| {
            b.iter(|| {
                let count = expand(root, "root", &expanded, &options).count();
                black_box(count);
            });
        });
    }

    for (depth, fanout) in [(4usize, 8usize), (6, 4)] {
        let root = deep_object(depth, fanout);
        let options = WalkOptions::new();
        let expanded = expand_all(&root, &options);

        group.bench_function(format!("deep_object(d={depth},f={fanout})"), |b| {
            b.iter(|| {
                let count = expand(&root, "root", &expanded, &options).count();
                black_box(count);
            });
        });
    }

    group.finish();
}

fn bench_collapsed_root(c: &mut Criterion) {
    // The lazy iterator should price a collapsed root independently of the
    // subtree size behind it.
    let mut group = c.benchmark_group("walk/collapsed_root");
    let expanded = ExpandedSet::new();
    let options = WalkOptions::new();

    for len in [1_000usize, 100_000] {
        let root = wide_array(len);
        group.bench_with_input(BenchmarkId::new("wide_array", len), &root, |b, root| {
            b.iter(|| {
                let count = expand(root, "root", &expanded, &options).count();
                black_box(count);
            });
        });
    }

    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk/partition_ranges");

    for len in [1_000usize, 100_000, 10_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| black_box(partition_ranges(len, 100)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_expand, bench_collapsed_root, bench_partition);
criterion_main!(benches);
