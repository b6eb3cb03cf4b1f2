// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal scenarios across the walker's policy knobs.

use overlook_value::{AccessError, Value, ValueKind};
use overlook_walk::{ExpandedSet, NodeRole, ValueNode, WalkOptions, expand, lexicographic};

fn collect(root: &Value, expanded: &ExpandedSet, options: &WalkOptions) -> Vec<ValueNode> {
    expand(root, "root", expanded, options).collect()
}

fn expanded_with<const N: usize>(ids: [&str; N]) -> ExpandedSet {
    let mut set = ExpandedSet::new();
    for id in ids {
        set.insert(id);
    }
    set
}

fn sample_root() -> Value {
    Value::object([
        ("a".into(), Value::Number(1.0)),
        (
            "b".into(),
            Value::array([Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]),
        ),
        ("c".into(), Value::object([("d".into(), Value::text("x"))])),
    ])
}

#[test]
fn collapsed_root_is_a_single_container_node() {
    let nodes = collect(&sample_root(), &ExpandedSet::new(), &WalkOptions::new());
    assert_eq!(nodes.len(), 1);
    let root = &nodes[0];
    assert_eq!(root.node_id, "root");
    assert_eq!(root.depth, 0);
    assert!(root.is_expandable);
    assert!(!root.is_expanded);
    assert_eq!(root.child_count, 3);
    assert_eq!(root.role, NodeRole::Container);
}

#[test]
fn expanded_root_lists_children_in_insertion_order() {
    let nodes = collect(
        &sample_root(),
        &expanded_with(["root"]),
        &WalkOptions::new(),
    );
    let labels: Vec<&str> = nodes.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, ["root", "a", "b", "c"]);

    let a = &nodes[1];
    assert_eq!(a.role, NodeRole::Leaf);
    assert!(!a.is_expandable);
    assert_eq!(a.depth, 1);

    // `b` is expandable with three children but stays collapsed.
    let b = &nodes[2];
    assert!(b.is_expandable);
    assert!(!b.is_expanded);
    assert_eq!(b.child_count, 3);
    assert_eq!(b.node_id, "root.b");

    let c = &nodes[3];
    assert!(c.is_expandable);
    assert_eq!(c.child_count, 1);
}

#[test]
fn expansion_descends_exactly_the_opened_nodes() {
    let nodes = collect(
        &sample_root(),
        &expanded_with(["root", "root.c"]),
        &WalkOptions::new(),
    );
    let ids: Vec<&str> = nodes.iter().map(|n| n.node_id.as_str()).collect();
    assert_eq!(ids, ["root", "root.a", "root.b", "root.c", "root.c.d"]);

    let d = nodes.last().unwrap();
    assert_eq!(d.depth, 2);
    assert_eq!(d.kind, ValueKind::Text);
    assert_eq!(d.role, NodeRole::Leaf);
}

#[test]
fn traversal_is_deterministic() {
    let root = sample_root();
    let expanded = expanded_with(["root", "root.b", "root.c"]);
    let options = WalkOptions::new();

    let first: Vec<String> = collect(&root, &expanded, &options)
        .into_iter()
        .map(|n| n.node_id)
        .collect();
    let second: Vec<String> = collect(&root, &expanded, &options)
        .into_iter()
        .map(|n| n.node_id)
        .collect();
    assert_eq!(first, second);
}

#[test]
fn sorted_keys_reorder_object_children() {
    let root = Value::object([
        ("zebra".into(), Value::Number(1.0)),
        ("apple".into(), Value::Number(2.0)),
        ("mango".into(), Value::Number(3.0)),
    ]);
    let options = WalkOptions::new().with_sort_keys(lexicographic);
    let nodes = collect(&root, &expanded_with(["root"]), &options);
    let labels: Vec<&str> = nodes[1..].iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, ["apple", "mango", "zebra"]);
}

#[test]
fn map_entries_use_key_labels() {
    let root = Value::map([
        (Value::text("alpha"), Value::Number(1.0)),
        (Value::Number(7.0), Value::Bool(true)),
    ]);
    let nodes = collect(&root, &expanded_with(["root"]), &WalkOptions::new());
    assert_eq!(nodes[1].label, "alpha");
    assert_eq!(nodes[2].label, "7");
}

#[test]
fn set_entries_are_positional() {
    let root = Value::set([Value::text("x"), Value::text("y")]);
    let nodes = collect(&root, &expanded_with(["root"]), &WalkOptions::new());
    let ids: Vec<&str> = nodes.iter().map(|n| n.node_id.as_str()).collect();
    assert_eq!(ids, ["root", "root.0", "root.1"]);
}

#[test]
fn depth_cap_replaces_expansion_with_a_leaf() {
    // root -> inner -> innermost, cap at 1: `inner` sits at the cap.
    let root = Value::object([(
        "inner".into(),
        Value::object([("innermost".into(), Value::object([]))]),
    )]);
    let expanded = expanded_with(["root", "root.inner"]);
    let options = WalkOptions::new().with_max_depth(1);

    let nodes = collect(&root, &expanded, &options);
    let ids: Vec<&str> = nodes.iter().map(|n| n.node_id.as_str()).collect();
    assert_eq!(ids, ["root", "root.inner"]);

    let inner = &nodes[1];
    assert!(matches!(inner.role, NodeRole::MaxDepthExceeded { .. }));
    assert!(!inner.is_expandable);
    assert!(!inner.is_expanded);
    assert!(nodes.iter().all(|n| n.depth <= 1));
}

#[test]
fn collapsed_container_at_the_cap_stays_a_container() {
    let root = Value::object([("inner".into(), Value::object([]))]);
    let options = WalkOptions::new().with_max_depth(1);
    let nodes = collect(&root, &expanded_with(["root"]), &options);
    assert_eq!(nodes[1].role, NodeRole::Container);
    assert!(nodes[1].is_expandable);
}

#[test]
fn self_referencing_container_emits_a_circular_leaf() {
    let root = Value::object([("name".into(), Value::text("loop"))]);
    if let Value::Object(cell) = &root {
        cell.borrow_mut().push(("me".into(), root.clone()));
    }

    // Expanding the cycle edge must still terminate.
    let nodes = collect(
        &root,
        &expanded_with(["root", "root.me"]),
        &WalkOptions::new(),
    );
    let ids: Vec<&str> = nodes.iter().map(|n| n.node_id.as_str()).collect();
    assert_eq!(ids, ["root", "root.name", "root.me"]);

    let me = nodes.last().unwrap();
    assert_eq!(me.role, NodeRole::Circular);
    assert_eq!(me.kind, ValueKind::Circular);
    assert!(!me.is_expandable);
}

#[test]
fn shared_sibling_is_not_circular() {
    let shared = Value::array([Value::Number(1.0)]);
    let root = Value::object([
        ("left".into(), shared.clone()),
        ("right".into(), shared.clone()),
    ]);

    let nodes = collect(
        &root,
        &expanded_with(["root", "root.left", "root.right"]),
        &WalkOptions::new(),
    );
    let ids: Vec<&str> = nodes.iter().map(|n| n.node_id.as_str()).collect();
    assert_eq!(
        ids,
        ["root", "root.left", "root.left.0", "root.right", "root.right.0"]
    );
    assert!(nodes.iter().all(|n| n.role != NodeRole::Circular));
}

#[test]
fn cycle_through_an_intermediate_level_is_caught() {
    let root = Value::object([]);
    let middle = Value::object([("back".into(), root.clone())]);
    if let Value::Object(cell) = &root {
        cell.borrow_mut().push(("middle".into(), middle));
    }

    let nodes = collect(
        &root,
        &expanded_with(["root", "root.middle", "root.middle.back"]),
        &WalkOptions::new(),
    );
    let back = nodes.last().unwrap();
    assert_eq!(back.node_id, "root.middle.back");
    assert_eq!(back.role, NodeRole::Circular);
}

#[test]
fn failing_deferred_child_becomes_an_error_leaf() {
    let root = Value::object([
        ("ok".into(), Value::Number(1.0)),
        (
            "broken".into(),
            Value::deferred(|| Err(AccessError::new("revoked proxy"))),
        ),
        ("after".into(), Value::Number(2.0)),
    ]);

    let nodes = collect(&root, &expanded_with(["root"]), &WalkOptions::new());
    let labels: Vec<&str> = nodes.iter().map(|n| n.label.as_str()).collect();
    // The failure does not abort the rest of the level.
    assert_eq!(labels, ["root", "ok", "broken", "after"]);

    let broken = &nodes[2];
    assert_eq!(
        broken.role,
        NodeRole::AccessError {
            message: "revoked proxy".into()
        }
    );
    assert_eq!(broken.kind, ValueKind::Error);
    assert!(!broken.is_expandable);
}

#[test]
fn succeeding_deferred_child_is_transparent() {
    let root = Value::object([(
        "lazy".into(),
        Value::deferred(|| Ok(Value::array([Value::Number(1.0)]))),
    )]);
    let nodes = collect(
        &root,
        &expanded_with(["root", "root.lazy"]),
        &WalkOptions::new(),
    );
    let ids: Vec<&str> = nodes.iter().map(|n| n.node_id.as_str()).collect();
    assert_eq!(ids, ["root", "root.lazy", "root.lazy.0"]);
    assert_eq!(nodes[1].kind, ValueKind::Array);
}

#[test]
fn per_level_cap_drops_trailing_entries() {
    let root = Value::array((0..50).map(|i| Value::Number(f64::from(i))));
    let options = WalkOptions::new().with_max_items_per_level(10);
    let nodes = collect(&root, &expanded_with(["root"]), &options);

    assert_eq!(nodes[0].child_count, 10);
    assert_eq!(nodes.len(), 11);
    assert_eq!(nodes.last().unwrap().node_id, "root.9");
}

#[test]
fn oversized_level_is_windowed_into_ranges() {
    let root = Value::array((0..1000).map(|i| Value::Number(f64::from(i))));
    let options = WalkOptions::new()
        .with_chunk_size(100)
        .with_max_items_per_level(1000);

    let nodes = collect(&root, &expanded_with(["root"]), &options);
    let labels: Vec<&str> = nodes[1..].iter().map(|n| n.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "[0 .. 99]",
            "[100 .. 299]",
            "[300 .. 699]",
            "[700 .. 899]",
            "[900 .. 999]"
        ]
    );

    for node in &nodes[1..] {
        assert!(matches!(node.role, NodeRole::Range(_)));
        assert!(node.is_expandable);
        assert_eq!(node.depth, 1);
    }
    // Windows tile the whole level.
    let covered: usize = nodes[1..].iter().map(|n| n.child_count).sum();
    assert_eq!(covered, 1000);
}

#[test]
fn cap_is_applied_before_windowing() {
    let root = Value::array((0..1000).map(|i| Value::Number(f64::from(i))));
    let options = WalkOptions::new()
        .with_chunk_size(100)
        .with_max_items_per_level(300);

    let nodes = collect(&root, &expanded_with(["root"]), &options);
    assert_eq!(nodes[0].child_count, 300);

    // Windows partition the 300 surviving entries, not the raw 1000.
    let labels: Vec<&str> = nodes[1..].iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, ["[0 .. 99]", "[100 .. 199]", "[200 .. 299]"]);
    let covered: usize = nodes[1..].iter().map(|n| n.child_count).sum();
    assert_eq!(covered, 300);
}

/// Finds the node id of the window whose label matches, for feeding back
/// into the expanded set the way a host toggles it.
fn window_id(nodes: &[ValueNode], label: &str) -> String {
    nodes
        .iter()
        .find(|n| n.label == label)
        .map(|n| n.node_id.clone())
        .expect("window not emitted")
}

#[test]
fn expanding_a_fine_window_yields_exactly_its_entries() {
    let root = Value::array((0..1000).map(|i| Value::Number(f64::from(i))));
    let options = WalkOptions::new()
        .with_chunk_size(100)
        .with_max_items_per_level(1000);

    let mut expanded = expanded_with(["root"]);
    let first_pass = collect(&root, &expanded, &options);
    expanded.insert(window_id(&first_pass, "[0 .. 99]"));

    let nodes = collect(&root, &expanded, &options);
    let entries: Vec<&ValueNode> = nodes
        .iter()
        .filter(|n| matches!(n.role, NodeRole::Leaf))
        .collect();
    assert_eq!(entries.len(), 100);
    // Entry ids are container-relative: stable whether or not the level is
    // windowed.
    assert_eq!(entries[0].node_id, "root.0");
    assert_eq!(entries[99].node_id, "root.99");
    assert_eq!(entries[0].depth, 1);
    assert_eq!(entries[0].value, Value::Number(0.0));
}

#[test]
fn expanding_a_coarse_window_subdivides_it() {
    let root = Value::array((0..1000).map(|i| Value::Number(f64::from(i))));
    let options = WalkOptions::new()
        .with_chunk_size(100)
        .with_max_items_per_level(1000);

    // `[300 .. 699]` is 400 wide: opening it yields sub-windows, not 400
    // entries.
    let mut expanded = expanded_with(["root"]);
    let first_pass = collect(&root, &expanded, &options);
    expanded.insert(window_id(&first_pass, "[300 .. 699]"));

    let nodes = collect(&root, &expanded, &options);
    let windows: Vec<&str> = nodes
        .iter()
        .filter(|n| matches!(n.role, NodeRole::Range(_)))
        .map(|n| n.label.as_str())
        .collect();
    assert_eq!(
        windows,
        [
            "[0 .. 99]",
            "[100 .. 299]",
            "[300 .. 699]",
            "[300 .. 399]",
            "[400 .. 599]",
            "[600 .. 699]",
            "[700 .. 899]",
            "[900 .. 999]"
        ]
    );
    assert!(!nodes.iter().any(|n| matches!(n.role, NodeRole::Leaf)));
}

#[test]
fn window_entries_respect_expansion_of_their_own_children() {
    let root = Value::array((0..150).map(|_| Value::array([Value::Number(1.0)])));
    let options = WalkOptions::new()
        .with_chunk_size(100)
        .with_max_items_per_level(1000);

    let mut expanded = expanded_with(["root", "root.5"]);
    let first_pass = collect(&root, &expanded, &options);
    expanded.insert(window_id(&first_pass, "[0 .. 99]"));

    let nodes = collect(&root, &expanded, &options);
    let ids: Vec<&str> = nodes.iter().map(|n| n.node_id.as_str()).collect();
    assert!(ids.contains(&"root.5"));
    assert!(ids.contains(&"root.5.0"));
}

#[test]
fn cycle_inside_a_window_is_caught() {
    let root = Value::array((0..150).map(|i| Value::Number(f64::from(i))));
    if let Value::Array(cell) = &root {
        cell.borrow_mut()[120] = root.clone();
    }
    let options = WalkOptions::new()
        .with_chunk_size(100)
        .with_max_items_per_level(1000);

    let mut expanded = expanded_with(["root"]);
    let first_pass = collect(&root, &expanded, &options);
    expanded.insert(window_id(&first_pass, "[100 .. 149]"));

    let nodes = collect(&root, &expanded, &options);
    let node_120 = nodes
        .iter()
        .find(|n| n.node_id == "root.120")
        .expect("windowed entry missing");
    assert_eq!(node_120.role, NodeRole::Circular);
}

#[test]
fn walker_never_mutates_the_expanded_set() {
    let expanded = expanded_with(["root", "root.b"]);
    let before = expanded.revision();
    let _ = collect(&sample_root(), &expanded, &WalkOptions::new());
    assert_eq!(expanded.revision(), before);
}

#[test]
fn in_flight_walk_ignores_later_toggles() {
    let root = sample_root();
    let mut expanded = expanded_with(["root"]);
    let mut walk = expand(&root, "root", &expanded, &WalkOptions::new());
    let _root_node = walk.next().unwrap();

    // Toggling mid-flight must not skew the running walk; a host that
    // wants the new state starts a fresh one.
    expanded.insert("root.b");
    let rest: Vec<String> = walk.map(|n| n.node_id).collect();
    assert_eq!(rest, ["root.a", "root.b", "root.c"]);
}

#[test]
fn labels_with_dots_keep_distinct_node_ids() {
    let root = Value::object([
        ("a.b".into(), Value::object([("c".into(), Value::Null)])),
        ("a".into(), Value::object([("b".into(), Value::Null)])),
    ]);
    let nodes = collect(&root, &expanded_with(["root"]), &WalkOptions::new());
    assert_ne!(nodes[1].node_id, nodes[2].node_id);
    assert_eq!(nodes[1].node_id, "root.a\\.b");
}
