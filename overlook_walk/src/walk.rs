// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lazy pre-order traversal.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use smallvec::SmallVec;

use overlook_path::{Path, map_key_label};
use overlook_value::{Value, ValueId, ValueKind, classify, preview};

use crate::expanded::ExpandedSet;
use crate::node::{NodeRole, ValueNode};
use crate::options::{KeyComparator, WalkOptions};
use crate::ranges::{PageRange, partition_ranges};

/// Starts a traversal of `root` under `root_label`.
///
/// The returned [`Walk`] yields [`ValueNode`]s in pre-order: each node is
/// emitted before any of its children. Traversal is lazy — nodes are
/// produced on demand — and restartable: a fresh call re-traverses from
/// scratch. The walker never mutates `expanded`; it takes a snapshot at
/// start, so toggles made while a walk is in flight do not skew its output
/// (a host that wants the new state starts a fresh walk).
///
/// # Example
///
/// ```rust
/// use overlook_value::Value;
/// use overlook_walk::{ExpandedSet, WalkOptions, expand};
///
/// let root = Value::array([Value::Number(1.0), Value::Number(2.0)]);
/// let mut expanded = ExpandedSet::new();
/// expanded.insert("items");
///
/// let ids: Vec<String> = expand(&root, "items", &expanded, &WalkOptions::new())
///     .map(|node| node.node_id)
///     .collect();
/// assert_eq!(ids, ["items", "items.0", "items.1"]);
/// ```
#[must_use]
pub fn expand(
    root: &Value,
    root_label: &str,
    expanded: &ExpandedSet,
    options: &WalkOptions,
) -> Walk {
    Walk {
        stack: alloc::vec![WorkItem::Visit {
            label: root_label.into(),
            value: root.clone(),
            depth: 0,
            path: Path::root(),
        }],
        ancestors: SmallVec::new(),
        expanded: expanded.clone(),
        options: options.clone(),
        root_label: root_label.into(),
    }
}

/// A lazy traversal in progress.
///
/// Each `Walk` owns its ancestor-identity chain, so overlapping walks never
/// share cycle state, and its own expanded-set snapshot, so it has no
/// borrow tying it to the host's state. Dropping a `Walk` mid-flight
/// discards the rest of its output; there is nothing to clean up.
#[derive(Debug)]
pub struct Walk {
    stack: Vec<WorkItem>,
    /// Identities of the containers on the current root-to-node path.
    /// Pushed when descending into a container, popped when its last child
    /// has been processed.
    ancestors: SmallVec<[ValueId; 16]>,
    expanded: ExpandedSet,
    options: WalkOptions,
    root_label: String,
}

#[derive(Debug)]
enum WorkItem {
    /// Visit one value position.
    Visit {
        label: String,
        value: Value,
        depth: usize,
        path: Path,
    },
    /// Visit one index window of a container's entries.
    Window {
        container: Value,
        range: PageRange,
        depth: usize,
        path: Path,
    },
    /// The matching container's children are done; pop its identity.
    PopAncestor,
}

impl Iterator for Walk {
    type Item = ValueNode;

    fn next(&mut self) -> Option<ValueNode> {
        loop {
            match self.stack.pop()? {
                WorkItem::PopAncestor => {
                    self.ancestors.pop();
                }
                WorkItem::Visit {
                    label,
                    value,
                    depth,
                    path,
                } => return Some(self.visit(label, value, depth, path)),
                WorkItem::Window {
                    container,
                    range,
                    depth,
                    path,
                } => return Some(self.visit_window(container, range, depth, path)),
            }
        }
    }
}

impl Walk {
    fn visit(&mut self, label: String, value: Value, depth: usize, path: Path) -> ValueNode {
        let node_id = path.node_id(&self.root_label);

        // A failing child never aborts the traversal; it becomes an
        // inline error leaf.
        let resolved = match value.resolved() {
            Ok(resolved) => resolved,
            Err(err) => {
                return ValueNode {
                    label,
                    value,
                    kind: ValueKind::Error,
                    depth,
                    path,
                    node_id,
                    is_expandable: false,
                    child_count: 0,
                    is_expanded: false,
                    role: NodeRole::AccessError {
                        message: err.message().into(),
                    },
                };
            }
        };

        let kind = classify(&resolved);
        let is_container = kind.is_container();
        let total_children = resolved.child_count().unwrap_or(0);
        let child_count = total_children.min(self.options.max_items_per_level());
        let is_expanded = is_container && self.expanded.contains(&node_id);

        // Depth cap first: a container at the cap that would expand emits
        // a max-depth leaf instead of children.
        if is_container && is_expanded && depth >= self.options.max_depth() {
            return ValueNode {
                label,
                value: resolved.clone(),
                kind,
                depth,
                path,
                node_id,
                is_expandable: false,
                child_count,
                is_expanded: false,
                role: NodeRole::MaxDepthExceeded {
                    preview: preview(&resolved),
                },
            };
        }

        // Cycle check: circular only along the current ancestor chain.
        if is_container {
            if let Some(id) = resolved.identity() {
                if self.ancestors.contains(&id) {
                    return ValueNode {
                        label,
                        value: resolved,
                        kind: ValueKind::Circular,
                        depth,
                        path,
                        node_id,
                        is_expandable: false,
                        child_count: 0,
                        is_expanded: false,
                        role: NodeRole::Circular,
                    };
                }
            }
        }

        if is_container && is_expanded {
            if let Some(id) = resolved.identity() {
                let mut entries = enumerate_entries(&resolved, self.options.sort_keys());
                entries.truncate(self.options.max_items_per_level());
                let count = entries.len();

                self.stack.push(WorkItem::PopAncestor);
                if count > self.options.chunk_size() {
                    for range in partition_ranges(count, self.options.chunk_size())
                        .into_iter()
                        .rev()
                    {
                        self.stack.push(WorkItem::Window {
                            container: resolved.clone(),
                            range,
                            depth: depth + 1,
                            path: path.clone(),
                        });
                    }
                } else {
                    for (child_label, child_value) in entries.into_iter().rev() {
                        let child_path = path.child(child_label.clone());
                        self.stack.push(WorkItem::Visit {
                            label: child_label,
                            value: child_value,
                            depth: depth + 1,
                            path: child_path,
                        });
                    }
                }
                self.ancestors.push(id);

                return ValueNode {
                    label,
                    value: resolved,
                    kind,
                    depth,
                    path,
                    node_id,
                    is_expandable: true,
                    child_count,
                    is_expanded: true,
                    role: NodeRole::Container,
                };
            }
        }

        // Collapsed container or plain leaf.
        ValueNode {
            label,
            value: resolved,
            kind,
            depth,
            path,
            node_id,
            is_expandable: is_container,
            child_count,
            is_expanded: false,
            role: if is_container {
                NodeRole::Container
            } else {
                NodeRole::Leaf
            },
        }
    }

    fn visit_window(
        &mut self,
        container: Value,
        range: PageRange,
        depth: usize,
        path: Path,
    ) -> ValueNode {
        let window_path = path.child(range.segment());
        let node_id = window_path.node_id(&self.root_label);
        let is_expanded = self.expanded.contains(&node_id);

        if is_expanded {
            // The container is still on the ancestor chain while its
            // windows are processed, so window entries get the same cycle
            // protection as directly emitted ones.
            if range.len() > self.options.chunk_size() {
                for sub in partition_ranges(range.len(), self.options.chunk_size())
                    .into_iter()
                    .rev()
                {
                    self.stack.push(WorkItem::Window {
                        container: container.clone(),
                        range: sub.offset(range.from),
                        depth,
                        path: path.clone(),
                    });
                }
            } else {
                let mut entries = enumerate_entries(&container, self.options.sort_keys());
                entries.truncate(self.options.max_items_per_level());
                if range.from < entries.len() {
                    let hi = range.to.min(entries.len() - 1);
                    for (child_label, child_value) in
                        entries.drain(range.from..=hi).rev().collect::<Vec<_>>()
                    {
                        let child_path = path.child(child_label.clone());
                        self.stack.push(WorkItem::Visit {
                            label: child_label,
                            value: child_value,
                            depth,
                            path: child_path,
                        });
                    }
                }
            }
        }

        let kind = classify(&container);
        ValueNode {
            label: range.label(),
            value: container,
            kind,
            depth,
            path: window_path,
            node_id,
            is_expandable: true,
            child_count: range.len(),
            is_expanded,
            role: NodeRole::Range(range),
        }
    }
}

/// Enumerates a container's direct children as `(label, value)` pairs.
///
/// Arrays, sets, and iterables label positionally; objects keep insertion
/// order unless a comparator is supplied; map keys go through
/// [`map_key_label`] so displayed labels resolve back to the same pair.
fn enumerate_entries(value: &Value, sort: Option<KeyComparator>) -> Vec<(String, Value)> {
    match value {
        Value::Array(cell) | Value::Set(cell) | Value::Iterable(cell) => cell
            .borrow()
            .iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item.clone()))
            .collect(),
        Value::Object(cell) => {
            let mut entries: Vec<(String, Value)> = cell.borrow().clone();
            if let Some(cmp) = sort {
                entries.sort_by(|a, b| cmp(&a.0, &b.0));
            }
            entries
        }
        Value::Map(cell) => cell
            .borrow()
            .iter()
            .map(|(key, item)| (map_key_label(key), item.clone()))
            .collect(),
        _ => Vec::new(),
    }
}
