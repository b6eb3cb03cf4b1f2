// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The explorer controller.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use overlook_path::Path;
use overlook_serial::serialize;
use overlook_value::Value;
use overlook_walk::{ExpandedSet, NodeRole, ValueNode, Walk, WalkOptions, expand};

use crate::copy::CopySink;
use crate::intent::Intent;
use crate::status::StatusNote;
use crate::trace::TraversalTrace;

/// Default number of [`Explorer::tick`] calls a status note survives.
pub const DEFAULT_STATUS_TICKS: u32 = 3;

/// Default per-[`Explorer::pump`] node budget used by
/// [`Explorer::settle`].
pub const DEFAULT_PUMP_BUDGET: usize = 1024;

/// Construction-time explorer configuration.
///
/// # Example
///
/// ```rust
/// use overlook_explorer::ExplorerConfig;
/// use overlook_walk::WalkOptions;
///
/// let config = ExplorerConfig::new()
///     .with_editable(true)
///     .with_expanded_label("items")
///     .with_options(WalkOptions::new().with_max_depth(6));
/// ```
#[derive(Clone, Debug)]
pub struct ExplorerConfig {
    pub(crate) editable: bool,
    pub(crate) expand_root: bool,
    pub(crate) default_expanded_labels: Vec<String>,
    pub(crate) options: WalkOptions,
    pub(crate) status_ticks: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerConfig {
    /// Creates the default configuration: read-only, nothing pre-expanded
    /// beyond the root, stock walk options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            editable: false,
            expand_root: true,
            default_expanded_labels: Vec::new(),
            options: WalkOptions::new(),
            status_ticks: DEFAULT_STATUS_TICKS,
        }
    }

    /// Allows edit intents to be emitted.
    #[must_use]
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Starts the root collapsed instead of pre-expanded.
    ///
    /// The first traversal then yields a single root row; pre-expanded
    /// top-level keys stay in the expanded set and take effect once the
    /// root is opened.
    #[must_use]
    pub fn with_root_collapsed(mut self) -> Self {
        self.expand_root = false;
        self
    }

    /// Pre-expands a named top-level key. The root itself is pre-expanded
    /// too unless [`ExplorerConfig::with_root_collapsed`] is set;
    /// everything else starts collapsed.
    #[must_use]
    pub fn with_expanded_label(mut self, label: impl Into<String>) -> Self {
        self.default_expanded_labels.push(label.into());
        self
    }

    /// Sets the traversal policy.
    #[must_use]
    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets how many [`Explorer::tick`] calls a status note survives (at
    /// least 1).
    #[must_use]
    pub fn with_status_ticks(mut self, ticks: u32) -> Self {
        self.status_ticks = ticks.max(1);
        self
    }
}

struct Pending {
    epoch: u64,
    walk: Walk,
    out: Vec<ValueNode>,
}

/// Headless explorer view-model.
///
/// Owns the expanded set, the last completed row sequence, pending edit
/// intents, and the transient status note. Rendering — virtualized list or
/// nested recursion — is the host's concern; both consume [`Explorer::rows`].
///
/// Traversal is cooperative and superseding: any change to the root or the
/// expanded set starts a fresh walk under a new epoch, and the host
/// advances it with [`Explorer::pump`] from its idle callback. A superseded
/// walk's partial output is discarded, never merged; completed output
/// replaces the rows atomically.
///
/// The explorer never mutates the root it was given. User edits become
/// [`Intent`]s the host drains with [`Explorer::take_intents`], applies to
/// its own store with the path mutator, and feeds back with
/// [`Explorer::set_root`].
pub struct Explorer {
    label: String,
    root: Value,
    expanded: ExpandedSet,
    options: WalkOptions,
    editable: bool,
    status_ticks: u32,
    rows: Vec<ValueNode>,
    epoch: u64,
    pending: Option<Pending>,
    intents: Vec<Intent>,
    status: Option<StatusNote>,
    trace: Option<Box<dyn TraversalTrace>>,
}

impl core::fmt::Debug for Explorer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Explorer")
            .field("label", &self.label)
            .field("epoch", &self.epoch)
            .field("rows", &self.rows.len())
            .field("traversing", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

impl Explorer {
    /// Creates an explorer over `root` and starts the first traversal.
    ///
    /// Rows are empty until the first [`Explorer::pump`] (or
    /// [`Explorer::settle`]) completes it.
    #[must_use]
    pub fn new(label: impl Into<String>, root: Value, config: ExplorerConfig) -> Self {
        let label = label.into();
        let mut expanded = ExpandedSet::new();
        if config.expand_root {
            expanded.insert(Path::root().node_id(&label));
        }
        for top_level in &config.default_expanded_labels {
            expanded.insert(Path::root().child(top_level.clone()).node_id(&label));
        }

        let mut explorer = Self {
            label,
            root,
            expanded,
            options: config.options,
            editable: config.editable,
            status_ticks: config.status_ticks,
            rows: Vec::new(),
            epoch: 0,
            pending: None,
            intents: Vec::new(),
            status: None,
            trace: None,
        };
        explorer.restart();
        explorer
    }

    /// Attaches a traversal lifecycle recorder.
    pub fn set_trace(&mut self, trace: Box<dyn TraversalTrace>) {
        self.trace = Some(trace);
    }

    /// The root label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The current root value (shared handle).
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The expanded set.
    #[must_use]
    pub fn expanded(&self) -> &ExpandedSet {
        &self.expanded
    }

    /// Whether edit intents are emitted.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// The epoch of the most recently started traversal.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Returns `true` while a traversal is pending.
    #[must_use]
    pub fn is_traversing(&self) -> bool {
        self.pending.is_some()
    }

    /// The most recently completed traversal's rows.
    #[must_use]
    pub fn rows(&self) -> &[ValueNode] {
        &self.rows
    }

    /// The displayed row with the given node id, if any.
    #[must_use]
    pub fn find_row(&self, node_id: &str) -> Option<&ValueNode> {
        self.rows.iter().find(|row| row.node_id == node_id)
    }

    /// Advances the pending traversal by up to `budget` nodes.
    ///
    /// Returns `true` exactly when a traversal completed during this call,
    /// at which point its output has replaced [`Explorer::rows`]. Call from
    /// the host's idle callback so a large expansion never blocks
    /// interaction work.
    pub fn pump(&mut self, budget: usize) -> bool {
        let Some(mut pending) = self.pending.take() else {
            return false;
        };
        for _ in 0..budget {
            if let Some(node) = pending.walk.next() {
                pending.out.push(node);
            } else {
                self.rows = pending.out;
                if let Some(trace) = self.trace.as_mut() {
                    trace.completed(pending.epoch, self.rows.len());
                }
                return true;
            }
        }
        self.pending = Some(pending);
        false
    }

    /// Pumps until the pending traversal (if any) completes.
    ///
    /// For hosts without an idle loop, and for tests.
    pub fn settle(&mut self) {
        while self.is_traversing() {
            let _ = self.pump(DEFAULT_PUMP_BUDGET);
        }
    }

    /// Flips a node between collapsed and expanded and restarts traversal.
    ///
    /// Returns `true` if the node is now expanded. Rows keep showing the
    /// previous state until the restarted traversal completes.
    pub fn toggle(&mut self, node_id: &str) -> bool {
        let now_expanded = self.expanded.toggle(node_id);
        self.restart();
        now_expanded
    }

    /// Replaces the root value and restarts traversal.
    ///
    /// Called by the host after applying drained intents to its own store.
    pub fn set_root(&mut self, root: Value) {
        self.root = root;
        self.restart();
    }

    /// Requests setting the value at a displayed node.
    ///
    /// Emits [`Intent::Edit`]; returns `false` (emitting nothing) when the
    /// explorer is read-only or the node is not displayed.
    pub fn edit(&mut self, node_id: &str, value: Value) -> bool {
        let Some(path) = self.intent_path(node_id) else {
            return false;
        };
        self.intents.push(Intent::Edit { path, value });
        true
    }

    /// Requests removing the entry at a displayed node.
    pub fn delete(&mut self, node_id: &str) -> bool {
        let Some(path) = self.intent_path(node_id) else {
            return false;
        };
        self.intents.push(Intent::Delete { path });
        true
    }

    /// Requests clearing the container at a displayed node.
    pub fn clear(&mut self, node_id: &str) -> bool {
        let Some(path) = self.intent_path(node_id) else {
            return false;
        };
        self.intents.push(Intent::Clear { path });
        true
    }

    /// Requests flipping a displayed boolean leaf.
    ///
    /// The replacement is computed from the displayed value, so the intent
    /// carries the concrete new state rather than "toggle".
    pub fn toggle_bool(&mut self, node_id: &str) -> bool {
        let Some((path, value)) = self.intent_target(node_id) else {
            return false;
        };
        match value {
            Value::Bool(b) => {
                self.intents.push(Intent::Edit {
                    path,
                    value: Value::Bool(!b),
                });
                true
            }
            _ => {
                self.note("not a boolean leaf");
                false
            }
        }
    }

    /// Requests incrementing a displayed numeric leaf by one.
    pub fn increment(&mut self, node_id: &str) -> bool {
        self.step(node_id, 1)
    }

    /// Requests decrementing a displayed numeric leaf by one.
    pub fn decrement(&mut self, node_id: &str) -> bool {
        self.step(node_id, -1)
    }

    fn step(&mut self, node_id: &str, delta: i8) -> bool {
        let Some((path, value)) = self.intent_target(node_id) else {
            return false;
        };
        match value {
            Value::Number(n) => {
                self.intents.push(Intent::Edit {
                    path,
                    value: Value::Number(n + f64::from(delta)),
                });
                true
            }
            Value::BigInt(n) => {
                self.intents.push(Intent::Edit {
                    path,
                    value: Value::BigInt(n.saturating_add(i128::from(delta))),
                });
                true
            }
            _ => {
                self.note("not a numeric leaf");
                false
            }
        }
    }

    /// Serializes a displayed node's raw value into the sink.
    ///
    /// Works regardless of editability. A rejecting sink yields `false`
    /// and a transient status note.
    pub fn copy_node(&mut self, node_id: &str, sink: &mut dyn CopySink) -> bool {
        let Some(value) = self.find_row(node_id).map(|row| row.value.clone()) else {
            self.note("node is no longer displayed");
            return false;
        };
        let text = serialize(&value);
        if sink.receive(&text) {
            true
        } else {
            self.note("copy rejected");
            false
        }
    }

    /// Drains the pending edit intents, oldest first.
    pub fn take_intents(&mut self) -> Vec<Intent> {
        core::mem::take(&mut self.intents)
    }

    /// The current transient status note, if one is showing.
    #[must_use]
    pub fn status(&self) -> Option<&StatusNote> {
        self.status.as_ref()
    }

    /// Advances the status clock one step; an expired note clears itself.
    pub fn tick(&mut self) {
        if let Some(note) = self.status.as_mut() {
            if note.tick() {
                self.status = None;
            }
        }
    }

    fn restart(&mut self) {
        if let Some(superseded) = self.pending.take() {
            if let Some(trace) = self.trace.as_mut() {
                trace.superseded(superseded.epoch);
            }
        }
        self.epoch += 1;
        let walk = expand(&self.root, &self.label, &self.expanded, &self.options);
        if let Some(trace) = self.trace.as_mut() {
            trace.started(self.epoch);
        }
        self.pending = Some(Pending {
            epoch: self.epoch,
            walk,
            out: Vec::new(),
        });
    }

    /// Path of a displayed, editable, non-window node; notes the reason
    /// and returns `None` otherwise.
    fn intent_path(&mut self, node_id: &str) -> Option<Path> {
        self.intent_target(node_id).map(|(path, _)| path)
    }

    fn intent_target(&mut self, node_id: &str) -> Option<(Path, Value)> {
        if !self.editable {
            return None;
        }
        let found = self.find_row(node_id).map(|row| {
            (
                row.path.clone(),
                row.value.clone(),
                matches!(row.role, NodeRole::Range(_)),
            )
        });
        match found {
            Some((path, value, false)) => Some((path, value)),
            Some((_, _, true)) => {
                self.note("range windows cannot be edited");
                None
            }
            None => {
                self.note("node is no longer displayed");
                None
            }
        }
    }

    fn note(&mut self, message: &str) {
        self.status = Some(StatusNote::new(message, self.status_ticks));
    }
}
