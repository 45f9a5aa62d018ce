use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// One prediction history entry exactly as the backend returns it.
///
/// Only the fields the analytics pipeline reads are named; every value is
/// kept as raw JSON because the backend does not guarantee their types.
/// Anything else the backend sends is carried untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_date: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fertilizer: Option<Value>,
    /// JSON-encoded soil readings (`n`, `p`, `k`, `ph`, `rainfall`,
    /// `humidity`, `temperature`). Frequently malformed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_params_json: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawRecord {
    /// Builds a record from an arbitrary JSON value.
    ///
    /// Never fails: anything that is not a JSON object becomes an empty
    /// record so that it still occupies its slot in the history.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                serde_json::from_value(Value::Object(map)).unwrap_or_else(|e| {
                    warn!("Could not decode history record, keeping it empty: {}", e);
                    Self::default()
                })
            }
            other => {
                warn!("History entry is not an object ({}), keeping it empty", kind_of(&other));
                Self::default()
            }
        }
    }
}

/// Errors raised while decoding a whole history payload.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The payload is not valid JSON at all
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is valid JSON but not an array of records
    #[error("Invalid data format received from server: expected an array, got {0}")]
    NotAnArray(&'static str),
}

/// Decodes a history payload that has already been parsed into JSON.
pub fn history_from_value(value: Value) -> Result<Vec<RawRecord>, DecodeError> {
    match value {
        Value::Array(items) => {
            debug!("Decoding {} history entries", items.len());
            Ok(items.into_iter().map(RawRecord::from_value).collect())
        }
        other => Err(DecodeError::NotAnArray(kind_of(&other))),
    }
}

/// Decodes a raw history payload (response body or saved file).
pub fn history_from_slice(bytes: &[u8]) -> Result<Vec<RawRecord>, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    history_from_value(value)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
