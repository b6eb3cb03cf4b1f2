// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-mutating path reads and structural updates.
//!
//! Updates copy only the spine of containers between the root and the
//! target; every untouched sibling is shared by reference with the original
//! graph. Failures return a [`PathError`] and never alter the input.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use overlook_value::{AccessError, Value, classify};

use crate::path::{Path, map_key_label};

/// Why a path operation failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathError {
    /// No entry with this label exists at the addressed position.
    NotFound {
        /// The label that failed to resolve.
        label: String,
    },
    /// A numeric index was outside the container's bounds.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The container length at the time of the attempt.
        len: usize,
    },
    /// A label addressed an indexed container but was not a number.
    BadIndex {
        /// The offending label.
        label: String,
    },
    /// The path descended into a value with no children.
    NotAContainer {
        /// The label that attempted the descent.
        label: String,
    },
    /// The step would rebuild a map, set, or iterable, or traverse a
    /// deferred value. Those positions are display-only.
    UnsupportedContainer {
        /// The label at the unsupported step.
        label: String,
    },
    /// The root itself cannot be deleted.
    CannotDeleteRoot,
    /// A deferred value failed to produce its contents.
    Access(AccessError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { label } => write!(f, "no entry {label:?} at this position"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::BadIndex { label } => write!(f, "label {label:?} is not a valid index"),
            Self::NotAContainer { label } => {
                write!(f, "cannot descend through {label:?}: value has no children")
            }
            Self::UnsupportedContainer { label } => {
                write!(f, "mutation through {label:?} is unsupported for this container kind")
            }
            Self::CannotDeleteRoot => f.write_str("the root value cannot be deleted"),
            Self::Access(err) => write!(f, "{err}"),
        }
    }
}

impl core::error::Error for PathError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Access(err) => Some(err),
            _ => None,
        }
    }
}

/// Reads the value at `path`.
///
/// Deferred values along the way are forced; a failing one surfaces as
/// [`PathError::Access`]. The empty path reads the root.
pub fn get_at_path(root: &Value, path: &Path) -> Result<Value, PathError> {
    let mut current = root.resolved().map_err(PathError::Access)?;
    for label in path.labels() {
        let next = step(&current, label)?;
        current = next.resolved().map_err(PathError::Access)?;
    }
    Ok(current)
}

fn step(current: &Value, label: &str) -> Result<Value, PathError> {
    match current {
        Value::Array(cell) | Value::Set(cell) | Value::Iterable(cell) => {
            let items = cell.borrow();
            let index = parse_index(label)?;
            items.get(index).cloned().ok_or(PathError::IndexOutOfRange {
                index,
                len: items.len(),
            })
        }
        Value::Object(cell) => cell
            .borrow()
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| PathError::NotFound {
                label: label.into(),
            }),
        Value::Map(cell) => cell
            .borrow()
            .iter()
            .find(|(key, _)| map_key_label(key) == label)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| PathError::NotFound {
                label: label.into(),
            }),
        _ => Err(PathError::NotAContainer {
            label: label.into(),
        }),
    }
}

/// Produces a new root with `new_value` at `path`.
///
/// The empty path replaces the root itself. An array index equal to the
/// length appends (final step only); an index beyond the length is
/// rejected. A missing object key on the final step inserts a new entry.
pub fn set_at_path(root: &Value, path: &Path, new_value: Value) -> Result<Value, PathError> {
    set_inner(root, path.labels(), new_value)
}

fn set_inner(current: &Value, rest: &[String], new_value: Value) -> Result<Value, PathError> {
    let Some((label, tail)) = rest.split_first() else {
        return Ok(new_value);
    };
    match current {
        Value::Array(cell) => {
            let mut copy: Vec<Value> = cell.borrow().clone();
            let index = parse_index(label)?;
            if index > copy.len() || (index == copy.len() && !tail.is_empty()) {
                return Err(PathError::IndexOutOfRange {
                    index,
                    len: copy.len(),
                });
            }
            if index == copy.len() {
                copy.push(new_value);
            } else {
                let updated = set_inner(&copy[index], tail, new_value)?;
                copy[index] = updated;
            }
            Ok(Value::array(copy))
        }
        Value::Object(cell) => {
            let mut copy: Vec<(String, Value)> = cell.borrow().clone();
            match copy.iter().position(|(key, _)| key == label) {
                Some(pos) => {
                    let updated = set_inner(&copy[pos].1, tail, new_value)?;
                    copy[pos].1 = updated;
                }
                None if tail.is_empty() => copy.push((label.clone(), new_value)),
                None => {
                    return Err(PathError::NotFound {
                        label: label.clone(),
                    });
                }
            }
            Ok(Value::object(copy))
        }
        Value::Map(_) | Value::Set(_) | Value::Iterable(_) | Value::Deferred(_) => {
            Err(PathError::UnsupportedContainer {
                label: label.clone(),
            })
        }
        _ => Err(PathError::NotAContainer {
            label: label.clone(),
        }),
    }
}

/// Produces a new root with the entry at `path` removed.
///
/// Array indices after the removed one shift down. The empty path is
/// rejected with [`PathError::CannotDeleteRoot`].
pub fn delete_at_path(root: &Value, path: &Path) -> Result<Value, PathError> {
    delete_inner(root, path.labels())
}

fn delete_inner(current: &Value, rest: &[String]) -> Result<Value, PathError> {
    let Some((label, tail)) = rest.split_first() else {
        return Err(PathError::CannotDeleteRoot);
    };
    match current {
        Value::Array(cell) => {
            let mut copy: Vec<Value> = cell.borrow().clone();
            let index = parse_index(label)?;
            if index >= copy.len() {
                return Err(PathError::IndexOutOfRange {
                    index,
                    len: copy.len(),
                });
            }
            if tail.is_empty() {
                copy.remove(index);
            } else {
                let updated = delete_inner(&copy[index], tail)?;
                copy[index] = updated;
            }
            Ok(Value::array(copy))
        }
        Value::Object(cell) => {
            let mut copy: Vec<(String, Value)> = cell.borrow().clone();
            let Some(pos) = copy.iter().position(|(key, _)| key == label) else {
                return Err(PathError::NotFound {
                    label: label.clone(),
                });
            };
            if tail.is_empty() {
                copy.remove(pos);
            } else {
                let updated = delete_inner(&copy[pos].1, tail)?;
                copy[pos].1 = updated;
            }
            Ok(Value::object(copy))
        }
        Value::Map(_) | Value::Set(_) | Value::Iterable(_) | Value::Deferred(_) => {
            Err(PathError::UnsupportedContainer {
                label: label.clone(),
            })
        }
        _ => Err(PathError::NotAContainer {
            label: label.clone(),
        }),
    }
}

/// Produces a new root with the container at `path` replaced by an empty
/// array.
///
/// Rejects paths that resolve to a non-container.
pub fn clear_at_path(root: &Value, path: &Path) -> Result<Value, PathError> {
    let existing = get_at_path(root, path)?;
    if !classify(&existing).is_container() {
        return Err(PathError::NotAContainer {
            label: path.labels().last().cloned().unwrap_or_default(),
        });
    }
    set_at_path(root, path, Value::array([]))
}

fn parse_index(label: &str) -> Result<usize, PathError> {
    label.parse::<usize>().map_err(|_| PathError::BadIndex {
        label: label.into(),
    })
}
