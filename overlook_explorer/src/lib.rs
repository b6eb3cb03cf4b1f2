// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Explorer: the headless explorer controller.
//!
//! [`Explorer`] orchestrates the classifier, walker, serializer, and path
//! model against a live root value plus the expanded set. It is a pure
//! view-model: no rendering, no gestures, no clipboard — hosts bring those
//! and consume [`Explorer::rows`] with whatever strategy they like.
//!
//! Three contracts shape the API:
//!
//! - **Latest call wins.** Any change to the root or the expanded set
//!   starts a fresh traversal under a new epoch; the host advances it
//!   cooperatively with [`Explorer::pump`]. A superseded traversal's
//!   partial output is discarded, never merged.
//! - **Intents, not mutation.** The explorer never touches the root it was
//!   given. Edits surface as [`Intent`]s drained via
//!   [`Explorer::take_intents`]; the host applies them to its own store
//!   with `overlook_path` and feeds the new root back with
//!   [`Explorer::set_root`].
//! - **Failures degrade.** A rejecting [`CopySink`] or a misdirected edit
//!   yields `false` plus a transient [`StatusNote`] that clears itself
//!   after a few [`Explorer::tick`]s. Nothing reachable through this API
//!   panics.
//!
//! The [`adapter`] module defines the trait boundary to the external cache
//! whose contents an explorer typically displays; no cache is implemented
//! here.
//!
//! ## Example
//!
//! ```rust
//! use overlook_explorer::{Explorer, ExplorerConfig, Intent};
//! use overlook_path::set_at_path;
//! use overlook_value::Value;
//!
//! let root = Value::object([
//!     ("count".into(), Value::Number(1.0)),
//!     ("flag".into(), Value::Bool(false)),
//! ]);
//!
//! let mut explorer = Explorer::new(
//!     "state",
//!     root.clone(),
//!     ExplorerConfig::new().with_editable(true),
//! );
//! explorer.settle();
//! assert_eq!(explorer.rows().len(), 3);
//!
//! // Increment is computed from the displayed leaf.
//! assert!(explorer.increment("state.count"));
//! let intents = explorer.take_intents();
//! let Intent::Edit { path, value } = &intents[0] else {
//!     panic!("expected an edit");
//! };
//!
//! // The host owns the store: apply the intent and feed the result back.
//! let updated = set_at_path(&root, path, value.clone()).unwrap();
//! explorer.set_root(updated);
//! explorer.settle();
//! assert_eq!(
//!     explorer.find_row("state.count").unwrap().value,
//!     Value::Number(2.0),
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapter;
mod copy;
mod explorer;
mod intent;
mod status;
mod trace;

pub use copy::{BufferSink, CopySink};
pub use explorer::{DEFAULT_PUMP_BUDGET, DEFAULT_STATUS_TICKS, Explorer, ExplorerConfig};
pub use intent::Intent;
pub use status::StatusNote;
pub use trace::TraversalTrace;
