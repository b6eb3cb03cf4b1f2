// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emitted traversal nodes.

use alloc::string::String;

use overlook_path::Path;
use overlook_value::{Value, ValueKind};

use crate::ranges::PageRange;

/// Why a node terminates (or continues) the traversal at its position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NodeRole {
    /// A plain leaf value.
    Leaf,
    /// A container; children follow when expanded.
    Container,
    /// A window summarizing many sibling entries.
    Range(PageRange),
    /// A container at the depth cap; children were suppressed.
    MaxDepthExceeded {
        /// Truncated preview of the suppressed subtree.
        preview: String,
    },
    /// A container that appears in its own ancestor chain.
    Circular,
    /// A child whose value could not be produced.
    AccessError {
        /// The access failure message.
        message: String,
    },
}

/// One visited position in a traversal.
///
/// Nodes are created fresh on every pass and never persisted; the only
/// stable identity across passes is [`ValueNode::node_id`], derived from
/// the path. The `value` field is a shallow handle to the referenced value,
/// never a copy.
#[derive(Clone, Debug)]
pub struct ValueNode {
    /// Key or index under the parent; the root label for the root.
    pub label: String,
    /// The referenced value (shared handle).
    pub value: Value,
    /// Classifier output, with [`ValueKind::Circular`] substituted for
    /// containers found in their own ancestor chain.
    pub kind: ValueKind,
    /// Distance from the root (root = 0). Range windows share the depth of
    /// the entries they summarize.
    pub depth: usize,
    /// Labels from root to this node. For range windows the final segment
    /// is synthetic (`from..to`) and not resolvable by the path mutator.
    pub path: Path,
    /// Stable identity across traversal passes.
    pub node_id: String,
    /// `true` iff the node is container-like and may be opened.
    pub is_expandable: bool,
    /// Direct child count, capped at the per-level maximum.
    pub child_count: usize,
    /// Whether the expanded set currently contains this node.
    pub is_expanded: bool,
    /// Structural role.
    pub role: NodeRole,
}

impl ValueNode {
    /// Returns `true` for roles that never have children emitted below
    /// them.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.role,
            NodeRole::Leaf
                | NodeRole::MaxDepthExceeded { .. }
                | NodeRole::Circular
                | NodeRole::AccessError { .. }
        )
    }
}
