// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edit intents emitted toward the host's authoritative store.

use overlook_path::Path;
use overlook_value::Value;

/// A requested change to the host's store.
///
/// The explorer never mutates the root it was given; user actions become
/// intents that the host drains with
/// [`Explorer::take_intents`](crate::Explorer::take_intents) and applies
/// with the path mutator against its own data, feeding the new root back
/// via [`Explorer::set_root`](crate::Explorer::set_root).
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// Set the value at `path` to `value`.
    Edit {
        /// Location of the affected leaf or subtree.
        path: Path,
        /// The replacement value.
        value: Value,
    },
    /// Remove the entry at `path` entirely.
    Delete {
        /// Location of the entry to remove.
        path: Path,
    },
    /// Replace the container at `path` with an empty one.
    Clear {
        /// Location of the container to clear.
        path: Path,
    },
}
