//! Reusable field validators
//!
//! Each factory returns a check over the request's `data` object. A check
//! only looks at its own field and leaves type questions it does not own to
//! other checks, so pipelines compose them in the order messages should
//! surface.

use crate::core::entity::RecordId;
use crate::core::error::{ServiceError, ValidationError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

/// A single check over a request payload
pub trait FieldCheck: Fn(&Value) -> Result<(), ServiceError> + Send + Sync + 'static {}

impl<F> FieldCheck for F where F: Fn(&Value) -> Result<(), ServiceError> + Send + Sync + 'static {}

static NULL: Value = Value::Null;

/// Look up a field, treating a missing key (or a non-object payload) as null
pub fn field<'a>(payload: &'a Value, name: &str) -> &'a Value {
    payload.get(name).unwrap_or(&NULL)
}

/// Read a JSON number as an integer.
///
/// Integral floats such as `5.0` count as integers; strings never do.
pub fn as_integer(value: &Value) -> Option<i64> {
    let n = value.as_number()?;
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Some(f as i64),
        _ => None,
    }
}

/// Whether `value` is an integer strictly greater than zero
pub fn is_positive_integer(value: &Value) -> bool {
    as_integer(value).is_some_and(|n| n > 0)
}

/// serde helper for integer fields that must accept `5.0` as well as `5`
pub fn deserialize_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    as_integer(&value).ok_or_else(|| D::Error::custom(format!("expected an integer, got {}", value)))
}

/// Validator: field is a non-empty string
pub fn required_text(field_name: &'static str, message: &'static str) -> impl FieldCheck {
    move |payload: &Value| match field(payload, field_name) {
        Value::String(s) if !s.is_empty() => Ok(()),
        _ => Err(ServiceError::field(field_name, message)),
    }
}

/// Validator: field is present (not null)
pub fn required(field_name: &'static str, message: &'static str) -> impl FieldCheck {
    move |payload: &Value| {
        if field(payload, field_name).is_null() {
            Err(ServiceError::field(field_name, message))
        } else {
            Ok(())
        }
    }
}

/// Validator: field, when present, is an integer
pub fn integer(field_name: &'static str, message: &'static str) -> impl FieldCheck {
    move |payload: &Value| {
        let value = field(payload, field_name);
        if value.is_null() || as_integer(value).is_some() {
            Ok(())
        } else {
            Err(ServiceError::field(field_name, message))
        }
    }
}

/// Validator: numeric field must be strictly positive
pub fn positive(field_name: &'static str, message: &'static str) -> impl FieldCheck {
    move |payload: &Value| match field(payload, field_name).as_f64() {
        Some(n) if n <= 0.0 => Err(ServiceError::field(field_name, message)),
        // Non-numbers are left to the type check
        _ => Ok(()),
    }
}

/// Validator: field is an array with at least one element
pub fn non_empty_array(field_name: &'static str, message: &'static str) -> impl FieldCheck {
    move |payload: &Value| match field(payload, field_name) {
        Value::Array(items) if !items.is_empty() => Ok(()),
        _ => Err(ServiceError::field(field_name, message)),
    }
}

/// Validator: field is a string from the allowed list
pub fn in_list(
    field_name: &'static str,
    allowed: &'static [&'static str],
    message: &'static str,
) -> impl FieldCheck {
    move |payload: &Value| match field(payload, field_name).as_str() {
        Some(s) if allowed.contains(&s) => Ok(()),
        _ => Err(ServiceError::field(field_name, message)),
    }
}

/// Validator: field, when present, is a string from the allowed list
pub fn optional_in_list(
    field_name: &'static str,
    allowed: &'static [&'static str],
    message: &'static str,
) -> impl FieldCheck {
    let check = in_list(field_name, allowed, message);
    move |payload: &Value| {
        if field(payload, field_name).is_null() {
            Ok(())
        } else {
            check(payload)
        }
    }
}

/// The body `id`, when present, must name the same record as the route.
///
/// Both sides are normalized through [`RecordId::from_json`] first, so a body
/// id of `7` matches the route segment `"7"`.
pub fn id_matches_route(
    entity_type: &'static str,
    payload: &Value,
    route_id: &RecordId,
) -> Result<(), ServiceError> {
    match RecordId::from_json(field(payload, "id")) {
        Some(body_id) if &body_id != route_id => Err(ValidationError::IdMismatch {
            entity_type,
            body_id: body_id.to_string(),
            route_id: route_id.to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

/// Decode a payload that a pipeline has already accepted
pub fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ServiceError> {
    serde_json::from_value(payload).map_err(|e| ServiceError::field("data", e.to_string()))
}
