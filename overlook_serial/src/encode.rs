// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Total, cycle-safe encoding of values to JSON text.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use serde_json::{Map as JsonMap, Number as JsonNumber, Value as Json, json};

use overlook_value::{Value, ValueId};

use crate::tags::*;

/// The fixed string a container serializes as when it appears in its own
/// ancestor chain.
pub const CIRCULAR_SENTINEL: &str = "[Circular]";

/// Serializes a value to compact JSON text. Never fails.
///
/// Cyclic references become [`CIRCULAR_SENTINEL`]; functions, symbols, and
/// failing deferred values become fixed placeholder strings.
#[must_use]
pub fn serialize(value: &Value) -> String {
    render(value, false)
}

/// Serializes a value to indented JSON text.
///
/// Indentation only; the content is identical to [`serialize`].
#[must_use]
pub fn serialize_pretty(value: &Value) -> String {
    render(value, true)
}

fn render(value: &Value, pretty: bool) -> String {
    let mut ancestors = Vec::new();
    let json = encode(value, &mut ancestors);
    let rendered = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };
    // Serializing a `serde_json::Value` tree cannot produce an IO or
    // structure error; the fallback keeps the contract total anyway.
    rendered.unwrap_or_else(|_| String::from("null"))
}

fn encode(value: &Value, ancestors: &mut Vec<ValueId>) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Undefined => json!({ TAG_UNDEFINED: true }),
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => match JsonNumber::from_f64(*n) {
            Some(num) => Json::Number(num),
            // NaN and infinities have no JSON representation.
            None => json!({ TAG_NUMBER: nonfinite_name(*n) }),
        },
        Value::BigInt(n) => json!({ TAG_BIGINT: format!("{n}") }),
        Value::Text(s) => Json::String(s.clone()),
        Value::Symbol(desc) => Json::String(format!("[Symbol({desc})]")),
        Value::Date(ms) => json!({ TAG_DATE: ms }),
        Value::Regexp(src) => json!({ TAG_REGEXP: src }),
        Value::Error(e) => json!({ TAG_ERROR: { "name": e.name, "message": e.message } }),
        Value::Function(name) => Json::String(format!("[Function: {name}]")),
        Value::Array(_) | Value::Object(_) | Value::Map(_) | Value::Set(_)
        | Value::Iterable(_) => encode_container(value, ancestors),
        Value::Deferred(_) => match value.resolved() {
            Ok(resolved) => encode(&resolved, ancestors),
            Err(err) => Json::String(format!("[Error: {}]", err.message())),
        },
    }
}

fn encode_container(value: &Value, ancestors: &mut Vec<ValueId>) -> Json {
    // Ancestor-chain scoped: only a container revisited along its own
    // root-to-node path is circular. Shared non-cyclic siblings encode
    // fully at each position.
    let id = match value.identity() {
        Some(id) => id,
        None => return Json::Null,
    };
    if ancestors.contains(&id) {
        return Json::String(String::from(CIRCULAR_SENTINEL));
    }
    ancestors.push(id);
    let json = match value {
        Value::Array(cell) => {
            let items = cell.borrow();
            Json::Array(items.iter().map(|item| encode(item, ancestors)).collect())
        }
        Value::Object(cell) => {
            let entries = cell.borrow();
            let mut map = JsonMap::new();
            for (key, item) in entries.iter() {
                map.insert(key.clone(), encode(item, ancestors));
            }
            wrap_literal_if_tagged(Json::Object(map))
        }
        Value::Map(cell) => {
            let pairs = cell.borrow();
            let encoded: Vec<Json> = pairs
                .iter()
                .map(|(k, v)| Json::Array([encode(k, ancestors), encode(v, ancestors)].into()))
                .collect();
            json!({ TAG_MAP: encoded })
        }
        Value::Set(cell) => {
            let items = cell.borrow();
            let encoded: Vec<Json> =
                items.iter().map(|item| encode(item, ancestors)).collect();
            json!({ TAG_SET: encoded })
        }
        Value::Iterable(cell) => {
            let items = cell.borrow();
            let encoded: Vec<Json> =
                items.iter().map(|item| encode(item, ancestors)).collect();
            json!({ TAG_ITER: encoded })
        }
        _ => Json::Null,
    };
    ancestors.pop();
    json
}

/// Wraps a plain object that would be mistaken for a tag on decode.
fn wrap_literal_if_tagged(json: Json) -> Json {
    let is_tag_shaped = match &json {
        Json::Object(map) => map.len() == 1 && map.keys().next().is_some_and(|k| k.starts_with('$')),
        _ => false,
    };
    if is_tag_shaped {
        json!({ TAG_LITERAL: json })
    } else {
        json
    }
}

fn nonfinite_name(n: f64) -> &'static str {
    if n.is_nan() {
        "NaN"
    } else if n > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn scalars_serialize_to_plain_json() {
        assert_eq!(serialize(&Value::Null), "null");
        assert_eq!(serialize(&Value::Bool(true)), "true");
        assert_eq!(serialize(&Value::Number(1.5)), "1.5");
        assert_eq!(serialize(&Value::text("hi")), "\"hi\"");
    }

    #[test]
    fn non_serializable_kinds_degrade_to_placeholders() {
        assert_eq!(serialize(&Value::Function("go".into())), "\"[Function: go]\"");
        assert_eq!(serialize(&Value::Symbol("tag".into())), "\"[Symbol(tag)]\"");

        let failing = Value::deferred(|| {
            Err(overlook_value::AccessError::new("revoked"))
        });
        assert_eq!(serialize(&failing), "\"[Error: revoked]\"");
    }

    #[test]
    fn self_reference_serializes_exactly_one_sentinel() {
        let v = Value::object(vec![]);
        if let Value::Object(cell) = &v {
            cell.borrow_mut().push(("self".into(), v.clone()));
        }
        let text = serialize(&v);
        assert_eq!(text.matches(CIRCULAR_SENTINEL).count(), 1);
        assert_eq!(text, "{\"self\":\"[Circular]\"}");
    }

    #[test]
    fn shared_siblings_are_not_circular() {
        let shared = Value::array([Value::Number(1.0)]);
        let v = Value::object(vec![
            ("left".into(), shared.clone()),
            ("right".into(), shared),
        ]);
        let text = serialize(&v);
        assert!(!text.contains(CIRCULAR_SENTINEL));
        assert_eq!(text, "{\"left\":[1.0],\"right\":[1.0]}");
    }

    #[test]
    fn deep_cycle_terminates() {
        // root -> a -> b -> root
        let root = Value::object(vec![]);
        let b = Value::object(vec![("back".into(), root.clone())]);
        let a = Value::object(vec![("b".into(), b)]);
        if let Value::Object(cell) = &root {
            cell.borrow_mut().push(("a".into(), a));
        }
        let text = serialize(&root);
        assert_eq!(text.matches(CIRCULAR_SENTINEL).count(), 1);
    }

    #[test]
    fn nonfinite_numbers_are_tagged() {
        assert_eq!(serialize(&Value::Number(f64::NAN)), "{\"$number\":\"NaN\"}");
        assert_eq!(
            serialize(&Value::Number(f64::NEG_INFINITY)),
            "{\"$number\":\"-Infinity\"}"
        );
    }

    #[test]
    fn pretty_differs_only_in_whitespace() {
        let v = Value::object(vec![("a".into(), Value::array([Value::Number(1.0)]))]);
        let compact = serialize(&v);
        let pretty = serialize_pretty(&v);
        assert_ne!(compact, pretty);
        let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        assert_eq!(strip(&compact), strip(&pretty));
    }

    #[test]
    fn tag_shaped_user_objects_are_wrapped() {
        let v = Value::object(vec![("$date".into(), Value::Number(5.0))]);
        assert_eq!(serialize(&v), "{\"$literal\":{\"$date\":5.0}}");
    }
}
