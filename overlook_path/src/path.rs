// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Path`] type and its stable node-id rendering.

use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

use overlook_value::{Value, preview};

/// An ordered sequence of labels locating a position inside a value graph.
///
/// The empty path addresses the root. Paths are cheap to clone and extend;
/// the label spine is inline up to a typical depth.
///
/// # Example
///
/// ```rust
/// use overlook_path::Path;
///
/// let p = Path::from_labels(["data", "items", "3", "name"]);
/// assert_eq!(p.len(), 4);
/// assert_eq!(p.to_string(), "data.items.3.name");
///
/// let child = p.child("first");
/// assert_eq!(child.len(), 5);
/// assert_eq!(p.len(), 4);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Path {
    labels: SmallVec<[String; 8]>,
}

impl Path {
    /// Creates the empty path, addressing the root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from an iterator of labels.
    #[must_use]
    pub fn from_labels<L: Into<String>>(labels: impl IntoIterator<Item = L>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the labels from root to target.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` for the empty (root) path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns a new path extended by one label.
    #[must_use]
    pub fn child(&self, label: impl Into<String>) -> Self {
        let mut labels = self.labels.clone();
        labels.push(label.into());
        Self { labels }
    }

    /// Appends a label in place.
    pub fn push(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    /// Removes and returns the last label.
    pub fn pop(&mut self) -> Option<String> {
        self.labels.pop()
    }

    /// Renders the stable node id for this path under a root label.
    ///
    /// The id is the escaped root label followed by each escaped path label,
    /// joined with `.`. `.` and `\` inside labels are escaped, so distinct
    /// paths never collide. The root path's id is the root label itself.
    #[must_use]
    pub fn node_id(&self, root_label: &str) -> String {
        let mut out = String::new();
        escape_into(&mut out, root_label);
        for label in &self.labels {
            out.push('.');
            escape_into(&mut out, label);
        }
        out
    }
}

impl fmt::Display for Path {
    /// Human-readable rendering: raw labels joined with `.`.
    ///
    /// Unlike [`Path::node_id`] this is not collision-free; use it for
    /// display only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

fn escape_into(out: &mut String, label: &str) {
    for ch in label.chars() {
        if ch == '.' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
}

/// The label a map key resolves under.
///
/// Text keys use the raw string; every other key kind uses its preview.
/// Walker emission and path resolution both go through this function, so a
/// displayed map entry's label always resolves back to the same pair.
#[must_use]
pub fn map_key_label(key: &Value) -> String {
    match key {
        Value::Text(s) => s.clone(),
        other => preview(other),
    }
}
