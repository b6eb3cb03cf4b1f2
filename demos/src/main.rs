// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explore a fake in-memory cache on stdout.
//!
//! Wires a [`CacheAdapter`] implementation to an [`Explorer`] the way a
//! devtools panel would: list the entries, open one, toggle a few nodes,
//! drain an edit intent, apply it through the adapter, and feed the result
//! back.
//!
//! Run:
//! - `cargo run -p overlook_demos`

use std::collections::HashMap;

use overlook_explorer::adapter::{CacheAdapter, CacheEntry, EntryStatus, FetchStatus};
use overlook_explorer::{CopySink, Explorer, ExplorerConfig, Intent};
use overlook_path::set_at_path;
use overlook_serial::serialize_pretty;
use overlook_value::{Value, preview};
use overlook_walk::WalkOptions;

/// A cache that lives entirely in a `HashMap`; good enough to drive the
/// explorer.
#[derive(Default)]
struct MemoryCache {
    entries: Vec<CacheEntry>,
    observers: HashMap<u64, Box<dyn FnMut()>>,
    next_observer: u64,
}

impl MemoryCache {
    fn with_entry(mut self, key: &str, data: Value) -> Self {
        self.entries.push(CacheEntry {
            key: key.into(),
            data: Some(data),
            status: EntryStatus::Success,
            fetch_status: FetchStatus::Idle,
            updated_at: 1_766_188_800_000,
            error: None,
            observer_count: 1,
            is_stale: false,
            is_disabled: false,
        });
        self
    }

    fn notify(&mut self) {
        for observer in self.observers.values_mut() {
            observer();
        }
    }
}

impl CacheAdapter for MemoryCache {
    fn entries(&self) -> Vec<CacheEntry> {
        self.entries.clone()
    }

    fn find(&self, key: &str) -> Option<CacheEntry> {
        self.entries.iter().find(|e| e.key == key).cloned()
    }

    fn subscribe(&mut self, on_change: Box<dyn FnMut()>) -> u64 {
        let id = self.next_observer;
        self.next_observer += 1;
        self.observers.insert(id, on_change);
        id
    }

    fn unsubscribe(&mut self, id: u64) {
        self.observers.remove(&id);
    }

    fn invalidate(&mut self, key: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.is_stale = true;
        }
        self.notify();
    }

    fn reset(&mut self, key: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.data = None;
            entry.status = EntryStatus::Pending;
        }
        self.notify();
    }

    fn remove(&mut self, key: &str) {
        self.entries.retain(|e| e.key != key);
        self.notify();
    }

    fn refetch(&mut self, key: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.fetch_status = FetchStatus::Idle;
            entry.is_stale = false;
        }
        self.notify();
    }

    fn set_data(&mut self, key: &str, value: Value) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.data = Some(value);
        }
        self.notify();
    }
}

struct StdoutSink;

impl CopySink for StdoutSink {
    fn receive(&mut self, text: &str) -> bool {
        println!("copied: {text}");
        true
    }
}

fn print_rows(explorer: &Explorer) {
    for row in explorer.rows() {
        let indent = "  ".repeat(row.depth);
        let marker = if row.is_expandable {
            if row.is_expanded { "v" } else { ">" }
        } else {
            " "
        };
        println!(
            "{indent}{marker} {}: {}  ({})",
            row.label,
            preview(&row.value),
            row.kind.name(),
        );
    }
    println!();
}

fn main() {
    let todos = Value::array([
        Value::object([
            ("id".into(), Value::Number(1.0)),
            ("title".into(), Value::text("buy milk")),
            ("done".into(), Value::Bool(false)),
        ]),
        Value::object([
            ("id".into(), Value::Number(2.0)),
            ("title".into(), Value::text("water plants")),
            ("done".into(), Value::Bool(true)),
        ]),
    ]);
    let profile = Value::object([
        ("name".into(), Value::text("Robin")),
        ("visits".into(), Value::Number(17.0)),
    ]);

    let mut cache = MemoryCache::default()
        .with_entry("[\"todos\"]", todos)
        .with_entry("[\"profile\"]", profile);
    let subscription = cache.subscribe(Box::new(|| println!("(cache changed)")));

    println!("cache entries:");
    for entry in cache.entries() {
        println!(
            "  {} status={:?} observers={}",
            entry.key, entry.status, entry.observer_count
        );
    }
    println!();

    let key = "[\"todos\"]";
    let data = cache
        .find(key)
        .and_then(|e| e.data)
        .expect("seeded entry has data");

    let mut explorer = Explorer::new(
        "todos",
        data,
        ExplorerConfig::new()
            .with_editable(true)
            .with_options(WalkOptions::new().with_max_depth(4).with_chunk_size(50)),
    );
    explorer.settle();
    print_rows(&explorer);

    // Open the first todo; pump in small budgets the way a UI idle loop
    // would.
    explorer.toggle("todos.0");
    while !explorer.pump(8) {}
    print_rows(&explorer);

    // Flip its `done` flag: the explorer emits an intent, the cache applies
    // it, and the new root feeds back.
    explorer.toggle_bool("todos.0.done");
    for intent in explorer.take_intents() {
        if let Intent::Edit { path, value } = intent {
            let updated = set_at_path(explorer.root(), &path, value).expect("path resolves");
            cache.set_data(key, updated.clone());
            explorer.set_root(updated);
        }
    }
    explorer.settle();
    print_rows(&explorer);

    explorer.copy_node("todos.0", &mut StdoutSink);

    println!("entry after edit:");
    println!("{}", serialize_pretty(explorer.root()));

    cache.unsubscribe(subscription);
}
