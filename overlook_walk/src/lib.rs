// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Walk: the windowing tree walker.
//!
//! [`expand`] turns a value graph into a lazy pre-order sequence of
//! [`ValueNode`]s, honoring an [`ExpandedSet`] of opened node ids and a
//! [`WalkOptions`] policy:
//!
//! - **Depth cap**: nodes at the configured `max_depth` that would expand
//!   emit a single max-depth leaf instead of children; no emitted node ever
//!   exceeds the cap. The cap itself is clamped to an absolute ceiling.
//! - **Cycle detection**: a container whose identity appears in its own
//!   ancestor chain emits a circular leaf and is not descended into. The
//!   chain is scoped to the current root-to-node path (pushed on descent,
//!   popped on return), so shared non-cyclic siblings are never mis-flagged.
//! - **Per-level cap**: entries beyond `max_items_per_level` are dropped
//!   from traversal entirely — a hard cap, distinct from windowing.
//! - **Windowing**: a level with more surviving entries than `chunk_size`
//!   is grouped into geometrically growing [`PageRange`] summaries — fine
//!   windows at both ends, coarser toward the middle — that expand lazily
//!   into exactly their sub-window.
//! - **Error capture**: a child whose deferred value fails to force emits
//!   an inline error leaf; the rest of the traversal continues.
//!
//! Traversal is deterministic: identical `(root, expanded set, options)`
//! inputs produce an identical node-id sequence and identical ranges. Each
//! [`Walk`] owns its own ancestor chain, so overlapping walks never share
//! cycle state. The walker never mutates the [`ExpandedSet`] it is given;
//! it snapshots the set at start, so an in-flight walk is unaffected by
//! later toggles.
//!
//! ## Minimal example
//!
//! ```rust
//! use overlook_value::Value;
//! use overlook_walk::{ExpandedSet, WalkOptions, expand};
//!
//! let root = Value::object([
//!     ("a".into(), Value::Number(1.0)),
//!     ("b".into(), Value::array([Value::Number(2.0)])),
//! ]);
//!
//! let mut expanded = ExpandedSet::new();
//! expanded.insert("root");
//!
//! let labels: Vec<String> = expand(&root, "root", &expanded, &WalkOptions::new())
//!     .map(|node| node.label)
//!     .collect();
//! assert_eq!(labels, ["root", "a", "b"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod expanded;
mod node;
mod options;
mod ranges;
mod walk;

pub use expanded::ExpandedSet;
pub use node::{NodeRole, ValueNode};
pub use options::{
    DEFAULT_CHUNK_SIZE, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITEMS_PER_LEVEL, KeyComparator,
    MAX_DEPTH_CEILING, WalkOptions, lexicographic,
};
pub use ranges::{PageRange, partition_ranges};
pub use walk::{Walk, expand};
