// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding the serializer's output back into values.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use serde_json::Value as Json;

use overlook_value::Value;

use crate::tags::*;

/// Why a payload failed to decode.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SerialError {
    /// The input was not valid JSON.
    Parse {
        /// Parser message.
        message: String,
    },
    /// A recognized tag carried a payload of the wrong shape.
    MalformedTag {
        /// The tag key, e.g. `"$date"`.
        tag: String,
    },
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { message } => write!(f, "invalid payload: {message}"),
            Self::MalformedTag { tag } => write!(f, "malformed {tag} payload"),
        }
    }
}

impl core::error::Error for SerialError {}

/// Parses a payload produced by [`serialize`](crate::serialize).
///
/// Tagged encodings restore their original kind; everything else maps to
/// the matching plain kind. Placeholder strings (functions, symbols, the
/// circular sentinel) decode as plain text — their originals are not
/// recoverable.
pub fn deserialize(text: &str) -> Result<Value, SerialError> {
    let json: Json = serde_json::from_str(text).map_err(|err| SerialError::Parse {
        message: err.to_string(),
    })?;
    decode(&json)
}

fn decode(json: &Json) -> Result<Value, SerialError> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => Ok(Value::Number(n.as_f64().unwrap_or(f64::NAN))),
        Json::String(s) => Ok(Value::Text(s.clone())),
        Json::Array(items) => {
            let decoded: Result<Vec<Value>, SerialError> = items.iter().map(decode).collect();
            Ok(Value::array(decoded?))
        }
        Json::Object(map) => {
            if map.len() == 1 {
                let (key, payload) = match map.iter().next() {
                    Some(entry) => entry,
                    None => return decode_plain_object(json),
                };
                if let Some(value) = decode_tag(key, payload)? {
                    return Ok(value);
                }
            }
            decode_plain_object(json)
        }
    }
}

/// Decodes a recognized tag, or returns `None` for plain objects.
fn decode_tag(key: &str, payload: &Json) -> Result<Option<Value>, SerialError> {
    let malformed = || SerialError::MalformedTag {
        tag: key.to_string(),
    };
    let value = match key {
        TAG_UNDEFINED => Value::Undefined,
        TAG_DATE => Value::Date(payload.as_i64().ok_or_else(malformed)?),
        TAG_BIGINT => {
            let digits = payload.as_str().ok_or_else(malformed)?;
            Value::BigInt(digits.parse::<i128>().map_err(|_| malformed())?)
        }
        TAG_REGEXP => Value::Regexp(payload.as_str().ok_or_else(malformed)?.into()),
        TAG_NUMBER => match payload.as_str().ok_or_else(malformed)? {
            "NaN" => Value::Number(f64::NAN),
            "Infinity" => Value::Number(f64::INFINITY),
            "-Infinity" => Value::Number(f64::NEG_INFINITY),
            _ => return Err(malformed()),
        },
        TAG_ERROR => {
            let body = payload.as_object().ok_or_else(malformed)?;
            let name = body.get("name").and_then(Json::as_str).ok_or_else(malformed)?;
            let message = body
                .get("message")
                .and_then(Json::as_str)
                .ok_or_else(malformed)?;
            Value::error(name, message)
        }
        TAG_MAP => {
            let pairs = payload.as_array().ok_or_else(malformed)?;
            let mut decoded = Vec::with_capacity(pairs.len());
            for pair in pairs {
                let slice = pair.as_array().filter(|p| p.len() == 2).ok_or_else(malformed)?;
                decoded.push((decode(&slice[0])?, decode(&slice[1])?));
            }
            Value::map(decoded)
        }
        TAG_SET => {
            let items = payload.as_array().ok_or_else(malformed)?;
            let decoded: Result<Vec<Value>, SerialError> = items.iter().map(decode).collect();
            Value::set(decoded?)
        }
        TAG_ITER => {
            let items = payload.as_array().ok_or_else(malformed)?;
            let decoded: Result<Vec<Value>, SerialError> = items.iter().map(decode).collect();
            Value::iterable(decoded?)
        }
        TAG_LITERAL => decode_plain_object(payload)?,
        _ => return Ok(None),
    };
    Ok(Some(value))
}

fn decode_plain_object(json: &Json) -> Result<Value, SerialError> {
    match json {
        Json::Object(map) => {
            let mut entries = Vec::with_capacity(map.len());
            for (key, item) in map {
                entries.push((key.clone(), decode(item)?));
            }
            Ok(Value::object(entries))
        }
        other => decode(other),
    }
}
