//! Entity trait and record identifiers shared by every resource

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque identifier of a stored record.
///
/// Identifiers are kept as canonical text. Clients may send an identifier as a
/// JSON string or a JSON integer; both forms are normalized by
/// [`RecordId::from_json`] so that `"7"` and `7` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalize a JSON value into an identifier.
    ///
    /// Returns `None` for `null`, the empty string, and any value that is
    /// neither a string nor a number. Integral floats (`7.0`) use their
    /// integer form.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self(i.to_string()))
                } else if let Some(u) = n.as_u64() {
                    Some(Self(u.to_string()))
                } else {
                    match n.as_f64() {
                        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                            Some(Self((f as i64).to_string()))
                        }
                        _ => Some(Self(n.to_string())),
                    }
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RecordId::from_json(&value)
            .ok_or_else(|| D::Error::custom(format!("invalid identifier: {}", value)))
    }
}

/// Base trait for every stored resource.
///
/// Provides the metadata the storage layer, the HTTP layer and error messages
/// need without knowing the concrete record type.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "dishes")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "dish")
    fn resource_name_singular() -> &'static str;

    /// Capitalized name used in client-facing messages (e.g., "Dish")
    fn display_name() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> &RecordId;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_and_integer_ids_normalize_to_same_value() {
        assert_eq!(RecordId::from_json(&json!("7")), RecordId::from_json(&json!(7)));
        assert_eq!(RecordId::from_json(&json!(7.0)), Some(RecordId::new("7")));
    }

    #[test]
    fn test_absent_like_values_are_not_ids() {
        assert_eq!(RecordId::from_json(&json!(null)), None);
        assert_eq!(RecordId::from_json(&json!("")), None);
        assert_eq!(RecordId::from_json(&json!(true)), None);
        assert_eq!(RecordId::from_json(&json!({"id": 1})), None);
    }

    #[test]
    fn test_deserialize_accepts_integer() {
        let id: RecordId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("42"));
    }

    #[test]
    fn test_deserialize_rejects_null() {
        assert!(serde_json::from_value::<RecordId>(json!(null)).is_err());
    }
}
