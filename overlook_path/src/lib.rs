// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Path: path addressing and non-mutating structural updates.
//!
//! A [`Path`] is an ordered sequence of string labels locating a position
//! inside an [`overlook_value::Value`] graph; the empty path addresses the
//! root itself. Labels resolve per container kind: arrays and sets by
//! numeric index, objects by property key, maps by stringified key.
//!
//! On top of that sit the mutation operations:
//!
//! - [`get_at_path`]: read the value at a path.
//! - [`set_at_path`]: produce a new root with a replacement at a path,
//!   copying only the spine of containers between root and target and
//!   sharing every untouched sibling by reference.
//! - [`delete_at_path`]: remove a key or index entirely (array indices
//!   shift down).
//! - [`clear_at_path`]: replace the container at a path with an empty array.
//!
//! All operations are non-mutating and total over their error domain: a
//! path that no longer resolves (stale after an external data change)
//! returns a [`PathError`] and leaves the original root untouched.
//!
//! ## Minimal example
//!
//! ```rust
//! use overlook_path::{Path, get_at_path, set_at_path};
//! use overlook_value::Value;
//!
//! let root = Value::object([(
//!     "x".into(),
//!     Value::object([("y".into(), Value::Number(1.0))]),
//! )]);
//!
//! let path = Path::from_labels(["x", "y"]);
//! let updated = set_at_path(&root, &path, Value::Number(2.0)).unwrap();
//!
//! assert_eq!(get_at_path(&updated, &path).unwrap(), Value::Number(2.0));
//! // The original still reads 1.
//! assert_eq!(get_at_path(&root, &path).unwrap(), Value::Number(1.0));
//! ```
//!
//! Mutation steps that would rebuild a `Map`, `Set`, or `Iterable`, or that
//! traverse a deferred value, are rejected with
//! [`PathError::UnsupportedContainer`]; those paths are display-only.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod mutate;
mod path;

pub use mutate::{PathError, clear_at_path, delete_at_path, get_at_path, set_at_path};
pub use path::{Path, map_key_label};
