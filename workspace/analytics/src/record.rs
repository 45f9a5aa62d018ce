use serde::Serialize;
use serde_json::{Map, Value};

use crate::coerce::{coerce_optional, is_truthy};

/// Display value used when a record's timestamp cannot be parsed.
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Soil and climate measurements carried by a prediction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilParameter {
    Nitrogen,
    Phosphorus,
    Potassium,
    Ph,
    Rainfall,
    Humidity,
    Temperature,
}

impl SoilParameter {
    pub const ALL: [SoilParameter; 7] = [
        SoilParameter::Nitrogen,
        SoilParameter::Phosphorus,
        SoilParameter::Potassium,
        SoilParameter::Ph,
        SoilParameter::Rainfall,
        SoilParameter::Humidity,
        SoilParameter::Temperature,
    ];

    /// Key used by the backend payload.
    pub fn key(self) -> &'static str {
        match self {
            SoilParameter::Nitrogen => "n",
            SoilParameter::Phosphorus => "p",
            SoilParameter::Potassium => "k",
            SoilParameter::Ph => "ph",
            SoilParameter::Rainfall => "rainfall",
            SoilParameter::Humidity => "humidity",
            SoilParameter::Temperature => "temperature",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SoilParameter::Nitrogen => "Nitrogen",
            SoilParameter::Phosphorus => "Phosphorus",
            SoilParameter::Potassium => "Potassium",
            SoilParameter::Ph => "pH",
            SoilParameter::Rainfall => "Rainfall",
            SoilParameter::Humidity => "Humidity",
            SoilParameter::Temperature => "Temperature",
        }
    }

    /// Short table header.
    pub fn column(self) -> &'static str {
        match self {
            SoilParameter::Nitrogen => "N",
            SoilParameter::Phosphorus => "P",
            SoilParameter::Potassium => "K",
            other => other.label(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Soil readings as received; values stay raw so the table can show what
/// the backend sent, while charts go through [`SoilReadings::value`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SoilReadings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ph: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Value>,
}

impl SoilReadings {
    fn slot(&mut self, param: SoilParameter) -> &mut Option<Value> {
        match param {
            SoilParameter::Nitrogen => &mut self.n,
            SoilParameter::Phosphorus => &mut self.p,
            SoilParameter::Potassium => &mut self.k,
            SoilParameter::Ph => &mut self.ph,
            SoilParameter::Rainfall => &mut self.rainfall,
            SoilParameter::Humidity => &mut self.humidity,
            SoilParameter::Temperature => &mut self.temperature,
        }
    }

    /// Stores a reading; JSON `null` counts as absent.
    pub fn set(&mut self, param: SoilParameter, value: Value) {
        *self.slot(param) = (!value.is_null()).then_some(value);
    }

    pub fn get(&self, param: SoilParameter) -> Option<&Value> {
        match param {
            SoilParameter::Nitrogen => self.n.as_ref(),
            SoilParameter::Phosphorus => self.p.as_ref(),
            SoilParameter::Potassium => self.k.as_ref(),
            SoilParameter::Ph => self.ph.as_ref(),
            SoilParameter::Rainfall => self.rainfall.as_ref(),
            SoilParameter::Humidity => self.humidity.as_ref(),
            SoilParameter::Temperature => self.temperature.as_ref(),
        }
    }

    /// Numeric value for charts, `0.0` when absent or unusable.
    pub fn value(&self, param: SoilParameter) -> f64 {
        coerce_optional(self.get(param))
    }

    /// Whether the reading is present and truthy.
    pub fn is_usable(&self, param: SoilParameter) -> bool {
        self.get(param).is_some_and(is_truthy)
    }

    /// Reading formatted for tabular display, `"N/A"` when falsy.
    pub fn display(&self, param: SoilParameter) -> String {
        match self.get(param) {
            Some(value) if is_truthy(value) => match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
            _ => "N/A".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        SoilParameter::ALL.iter().all(|p| self.get(*p).is_none())
    }
}

/// A history record after normalization: known fields typed, soil readings
/// flattened out of the embedded JSON, the date ready for display, and
/// every unrecognised field preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    /// Display date or [`UNKNOWN_DATE`]
    pub prediction_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fertilizer: Option<String>,
    #[serde(flatten)]
    pub soil: SoilReadings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NormalizedRecord {
    pub fn crop_display(&self) -> &str {
        self.crop.as_deref().unwrap_or("N/A")
    }

    pub fn fertilizer_display(&self) -> &str {
        self.fertilizer.as_deref().unwrap_or("N/A")
    }
}

/// Interprets a raw value as a category label.
///
/// Empty strings and falsy scalars are not labels; numbers are accepted in
/// their JSON spelling.
pub fn label_from(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(_) | Value::Bool(true) if is_truthy(value) => Some(value.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameter_keys_round_trip() {
        for param in SoilParameter::ALL {
            assert_eq!(SoilParameter::from_key(param.key()), Some(param));
        }
        assert_eq!(SoilParameter::from_key("N"), None);

        let columns: Vec<&str> = SoilParameter::ALL.iter().map(|p| p.column()).collect();
        assert_eq!(columns, vec!["N", "P", "K", "pH", "Rainfall", "Humidity", "Temperature"]);
    }

    #[test]
    fn test_readings_value_and_display() {
        let mut soil = SoilReadings::default();
        soil.set(SoilParameter::Nitrogen, json!("90"));
        soil.set(SoilParameter::Ph, json!(0));
        soil.set(SoilParameter::Rainfall, json!(null));
        soil.set(SoilParameter::Humidity, json!(82.5));

        assert_eq!(soil.value(SoilParameter::Nitrogen), 90.0);
        assert_eq!(soil.display(SoilParameter::Nitrogen), "90");
        assert_eq!(soil.display(SoilParameter::Humidity), "82.5");
        assert_eq!(soil.display(SoilParameter::Ph), "N/A");
        assert!(!soil.is_usable(SoilParameter::Ph));
        assert_eq!(soil.get(SoilParameter::Rainfall), None);
        assert_eq!(soil.value(SoilParameter::Temperature), 0.0);
        assert!(!soil.is_empty());
        assert!(SoilReadings::default().is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(label_from(&json!("Rice")), Some("Rice".to_string()));
        assert_eq!(label_from(&json!("")), None);
        assert_eq!(label_from(&json!(null)), None);
        assert_eq!(label_from(&json!(0)), None);
        assert_eq!(label_from(&json!(17)), Some("17".to_string()));
        assert_eq!(label_from(&json!({"name": "Rice"})), None);
    }
}
