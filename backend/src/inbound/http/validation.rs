//! Shared validation helpers for inbound HTTP adapters.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::domain::{Error, ErrorCode};

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Error for a required field the client left out.
///
/// The status differs per endpoint, so callers pick the code.
pub(crate) fn missing_field_error(field: FieldName, code: ErrorCode) -> Error {
    Error::new(code, format!("missing required field: {}", field.as_str()))
        .with_details(json!({ "field": field.as_str(), "code": "missing_field" }))
}

fn invalid_integer_error(field: FieldName, value: &Value, code: ErrorCode) -> Error {
    Error::new(code, format!("{} must be an integer", field.as_str())).with_details(json!({
        "field": field.as_str(),
        "value": value.to_string(),
        "code": "invalid_integer",
    }))
}

/// Read an integer that clients may send as a JSON number or a numeric
/// string. `null` counts as absent.
pub(crate) fn lenient_int(
    value: Option<Value>,
    field: FieldName,
    code: ErrorCode,
) -> Result<Option<i32>, Error> {
    let Some(value) = value else {
        return Ok(None);
    };
    let parsed = match &value {
        Value::Null => return Ok(None),
        Value::Number(number) => number.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<i32>().ok(),
        _ => None,
    };
    parsed
        .map(Some)
        .ok_or_else(|| invalid_integer_error(field, &value, code))
}

/// Decode a JSON object body into a typed payload.
///
/// Only an empty object, or one whose known keys have the wrong shape, is
/// unprocessable. Unknown keys make the body non-empty, so a payload that
/// carries nothing but unknown keys reaches field validation.
pub(crate) fn decode_object<T: DeserializeOwned>(
    body: Map<String, Value>,
    payload: &str,
) -> Result<T, Error> {
    if body.is_empty() {
        return Err(Error::unprocessable(format!("{payload} payload is empty")));
    }
    serde_json::from_value(Value::Object(body)).map_err(|err| {
        Error::unprocessable(format!("{payload} payload is malformed"))
            .with_details(json!({ "reason": err.to_string() }))
    })
}
