// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Field extraction from raw JSON-RPC response bodies.

use serde_json::{Map, Value};

use crate::error::LotusError;

pub const RESULT_FIELD: &str = "result";
pub const ERROR_FIELD: &str = "error";

/// Returns the top-level `field` of `body`, or `None` if it is absent or `null`.
pub fn get_field(body: &str, field: &str) -> Result<Option<Value>, LotusError> {
    let mut value: Value = serde_json::from_str(body)?;
    let field_value = value
        .as_object_mut()
        .and_then(|object| object.remove(field))
        .filter(|v| !v.is_null());
    Ok(field_value)
}

/// Returns the top-level `field` of `body` as a string.
pub fn get_field_str(body: &str, field: &'static str) -> Result<String, LotusError> {
    match get_field(body, field)?.ok_or(LotusError::MissingField(field))? {
        Value::String(s) => Ok(s),
        _ => Err(LotusError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

/// Returns the top-level `field` of `body` as a JSON object.
pub fn get_field_map(body: &str, field: &'static str) -> Result<Map<String, Value>, LotusError> {
    map_from_value(
        get_field(body, field)?.ok_or(LotusError::MissingField(field))?,
        field,
    )
}

pub(crate) fn map_from_value(
    value: Value,
    field: &'static str,
) -> Result<Map<String, Value>, LotusError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(LotusError::InvalidField {
            field,
            expected: "an object",
        }),
    }
}

/// Reads `field` of `map` as an integer. Floats are accepted only when they have no fractional
/// part, since the node encodes all numbers as JSON numbers.
pub fn map_i64(map: &Map<String, Value>, field: &'static str) -> Result<i64, LotusError> {
    let value = map
        .get(field)
        .filter(|v| !v.is_null())
        .ok_or(LotusError::MissingField(field))?;

    let invalid = LotusError::InvalidField {
        field,
        expected: "an integer",
    };
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
            Ok(f as i64)
        }
        _ => Err(invalid),
    }
}

pub fn map_str(map: &Map<String, Value>, field: &'static str) -> Result<String, LotusError> {
    match map.get(field).filter(|v| !v.is_null()) {
        None => Err(LotusError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(LotusError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}
