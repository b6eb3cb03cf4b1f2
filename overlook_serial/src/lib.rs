// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Serial: cycle-safe serialization with tagged kind fidelity.
//!
//! [`serialize`] converts any [`overlook_value::Value`] — including cyclic
//! graphs — to a JSON string without failing. Kinds JSON cannot carry
//! natively round-trip through a tagged encoding:
//!
//! | kind        | encoding                                   |
//! |-------------|--------------------------------------------|
//! | `Undefined` | `{"$undefined": true}`                     |
//! | `Date`      | `{"$date": <millis>}`                      |
//! | `BigInt`    | `{"$bigint": "<digits>"}`                  |
//! | `Regexp`    | `{"$regexp": "<source>"}`                  |
//! | `Error`     | `{"$error": {"name": …, "message": …}}`    |
//! | `Map`       | `{"$map": [[k, v], …]}`                    |
//! | `Set`       | `{"$set": […]}`                            |
//! | `Iterable`  | `{"$iter": […]}`                           |
//!
//! A genuine single-entry object whose key starts with `$` is wrapped as
//! `{"$literal": {…}}` so tags never collide with user data. Functions and
//! symbols degrade to fixed placeholder strings; a container revisited along
//! its own ancestor chain serializes as the [`CIRCULAR_SENTINEL`] string.
//!
//! [`deserialize`] accepts the serializer's own output and restores tagged
//! kinds (a `$map` comes back as a `Map`, not a plain object). For acyclic
//! values free of functions, symbols, and deferred cells the round trip is
//! the identity up to structural equality.
//!
//! ## Minimal example
//!
//! ```rust
//! use overlook_serial::{deserialize, serialize};
//! use overlook_value::Value;
//!
//! let v = Value::object([
//!     ("when".into(), Value::Date(1_700_000_000_000)),
//!     ("n".into(), Value::BigInt(99)),
//! ]);
//! let text = serialize(&v);
//! assert_eq!(deserialize(&text).unwrap(), v);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod decode;
mod encode;
mod tags;

pub use decode::{SerialError, deserialize};
pub use encode::{CIRCULAR_SENTINEL, serialize, serialize_pretty};
