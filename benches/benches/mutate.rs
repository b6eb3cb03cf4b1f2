// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use overlook_path::{Path, set_at_path};
use overlook_serial::serialize;
use overlook_value::Value;

/// A chain of single-key objects `{"next": {"next": ... 0}}`.
fn spine(depth: usize) -> Value {
    let mut value = Value::Number(0.0);
    for _ in 0..depth {
        value = Value::object([("next".into(), value)]);
    }
    value
}

fn bench_set_at_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path/set_at_path");

    // Only the spine is rebuilt, so cost should track depth, not total
    // sibling volume.
    for depth in [4usize, 16, 64] {
        let root = spine(depth);
        let path = Path::from_labels((0..depth).map(|_| "next"));

        group.bench_with_input(BenchmarkId::new("spine", depth), &root, |b, root| {
            b.iter(|| {
                let updated = set_at_path(root, &path, Value::Number(1.0));
                black_box(updated.expect("path resolves"));
            });
        });
    }

    let wide = Value::object(
        (0..10_000).map(|i| (format!("k{i}"), Value::Number(f64::from(i)))),
    );
    let path = Path::from_labels(["k5000"]);
    group.bench_function("wide_object_single_key", |b| {
        b.iter(|| {
            let updated = set_at_path(&wide, &path, Value::Null);
            black_box(updated.expect("path resolves"));
        });
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serial/serialize");

    for len in [1_000usize, 10_000] {
        let root = Value::array((0..len).map(|i| {
            Value::object([
                ("index".into(), Value::Number(i as f64)),
                ("name".into(), Value::text(format!("row-{i}"))),
            ])
        }));
        group.bench_with_input(BenchmarkId::new("rows", len), &root, |b, root| {
            b.iter(|| black_box(serialize(root)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set_at_path, bench_serialize);
criterion_main!(benches);
