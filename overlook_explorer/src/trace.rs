// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal lifecycle hooks.

/// Observer for traversal lifecycle events.
///
/// The explorer has no global logger; hosts that want visibility attach a
/// recorder via [`Explorer::set_trace`](crate::Explorer::set_trace). All
/// methods default to no-ops, so implementors override only what they
/// record. Epochs increase monotonically; a superseded epoch's partial
/// output was discarded, never merged.
pub trait TraversalTrace {
    /// A fresh traversal started under `epoch`.
    fn started(&mut self, epoch: u64) {
        let _ = epoch;
    }

    /// The in-flight traversal under `epoch` was discarded before
    /// completing.
    fn superseded(&mut self, epoch: u64) {
        let _ = epoch;
    }

    /// The traversal under `epoch` completed, producing `rows` nodes.
    fn completed(&mut self, epoch: u64, rows: usize) {
        let _ = (epoch, rows);
    }
}
