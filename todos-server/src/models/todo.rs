//! Todo record and its JSON codec
//!
//! `Todo` is both the row shape (`FromRow`) and the response body.
//! `TodoPayload` is the request body for create and update: unknown fields
//! (including `id`) are ignored and missing fields fall back to zero values,
//! so an update always replaces every column.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Storage-assigned todo identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for TodoId {
    type Err = ValidationError;

    /// Parse a path segment as a signed 64-bit base-10 integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Todo record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub detail: String,
    pub point: i64,
    pub done: bool,
}

impl Todo {
    pub fn from_payload(id: TodoId, payload: TodoPayload) -> Self {
        Self {
            id: id.get(),
            title: payload.title,
            detail: payload.detail,
            point: payload.point,
            done: payload.done,
        }
    }
}

/// Create / update request body
///
/// Fields that are absent or `null` take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub detail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub point: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub done: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl TodoPayload {
    /// Decode a request body.
    ///
    /// Accepts any JSON object; the `Content-Type` header is not consulted.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidBody { reason };

        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| invalid(e.to_string()))?;
        if !value.is_object() {
            return Err(invalid("expected a JSON object".to_string()));
        }
        serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
    }
}
