// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Value: dynamic value model and classifier.
//!
//! This crate provides the data model shared by every Overlook crate: a
//! closed [`Value`] enum over scalars and shared containers, a total
//! [`classify`] function producing a [`ValueKind`], pointer-identity handles
//! ([`ValueId`]) for cycle detection, and short single-line [`preview`]
//! strings for collapsed display.
//!
//! The core concepts are:
//!
//! - [`Value`]: scalars plus reference-counted container cells. Containers
//!   clone shallowly (the clone shares the cell), so cyclic graphs are
//!   expressible and cheap to hand around.
//! - [`ValueKind`]: the closed classification every other component switches
//!   on. [`classify`] is pure and total; [`ValueKind::Circular`] is assigned
//!   only by traversal, never by the classifier itself.
//! - [`ValueId`]: identity of a container cell. Identity comparison — not
//!   structural equality — is the only legal cycle test.
//! - [`DeferredValue`]: a lazily computed value whose forcing may fail with
//!   an [`AccessError`]. Consumers treat a failed forcing as an inline
//!   error, never a panic.
//!
//! ## Minimal example
//!
//! ```rust
//! use overlook_value::{Value, ValueKind, classify};
//!
//! let root = Value::object([
//!     ("a".into(), Value::Number(1.0)),
//!     ("b".into(), Value::array([Value::Number(1.0), Value::Number(2.0)])),
//! ]);
//!
//! assert_eq!(classify(&root), ValueKind::Object);
//! assert!(root.identity().is_some());
//! assert_eq!(overlook_value::preview(&root), "{2 entries}");
//! ```
//!
//! Structural equality ([`PartialEq`]) walks container contents and must not
//! be fed cyclic graphs; use [`Value::identity`] for anything that may
//! contain cycles. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod deferred;
mod kind;
mod preview;
mod value;

pub use deferred::{AccessError, DeferredValue};
pub use kind::{ValueKind, classify};
pub use preview::{MAX_PREVIEW_LEN, preview};
pub use value::{ErrorValue, Value, ValueId};
