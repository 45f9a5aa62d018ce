//! Normalization of raw history records.
//!
//! Every raw record yields exactly one [`NormalizedRecord`], in order. Broken
//! embedded soil JSON and unparsable timestamps are absorbed per record and
//! only reported to the log.

use common::RawRecord;
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use crate::date::DateDisplay;
use crate::record::{label_from, NormalizedRecord, SoilParameter, SoilReadings, UNKNOWN_DATE};

/// Converts raw backend records into the canonical analytics shape.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    dates: DateDisplay,
}

impl Normalizer {
    pub fn new(dates: DateDisplay) -> Self {
        Self { dates }
    }

    /// Normalizes a whole history. Same length and order as the input.
    #[instrument(skip(self, raw), fields(num_records = raw.len()))]
    pub fn normalize(&self, raw: Vec<RawRecord>) -> Vec<NormalizedRecord> {
        let records: Vec<NormalizedRecord> = raw
            .into_iter()
            .enumerate()
            .map(|(index, record)| self.normalize_record(index, record))
            .collect();

        debug!("Normalized {} history records", records.len());
        records
    }

    /// Normalizes one record; `index` is only used for log context.
    pub fn normalize_record(&self, index: usize, raw: RawRecord) -> NormalizedRecord {
        let RawRecord {
            prediction_date,
            crop,
            fertilizer,
            soil_params_json,
            extra,
        } = raw;

        let prediction_date = self
            .dates
            .display(prediction_date.as_ref())
            .unwrap_or_else(|| {
                debug!(index, raw = ?prediction_date, "Unparsable prediction date");
                UNKNOWN_DATE.to_string()
            });

        // Raw fields first, embedded soil parameters on top.
        let mut merged = extra;
        if let Some(value) = crop {
            merged.insert("crop".to_string(), value);
        }
        if let Some(value) = fertilizer {
            merged.insert("fertilizer".to_string(), value);
        }
        let decoded = decode_soil_params(index, soil_params_json.as_ref());
        if let Some(value) = soil_params_json {
            merged.insert("soil_params_json".to_string(), value);
        }
        merged.extend(decoded);

        // The display date always wins over anything the overlay carried.
        merged.remove("prediction_date");

        let crop = merged.remove("crop").as_ref().and_then(label_from);
        let fertilizer = merged.remove("fertilizer").as_ref().and_then(label_from);

        let mut soil = SoilReadings::default();
        for param in SoilParameter::ALL {
            if let Some(value) = merged.remove(param.key()) {
                soil.set(param, value);
            }
        }

        NormalizedRecord {
            prediction_date,
            crop,
            fertilizer,
            soil,
            extra: merged,
        }
    }
}

/// Decodes the embedded soil parameter JSON.
///
/// Absent, `null` and empty values are silently empty. Anything else that
/// does not decode to a JSON object is logged and treated as empty.
pub fn decode_soil_params(index: usize, raw: Option<&Value>) -> Map<String, Value> {
    let text = match raw {
        None | Some(Value::Null) => return Map::new(),
        Some(Value::String(s)) if s.is_empty() => return Map::new(),
        Some(Value::String(s)) => s,
        Some(other) => {
            warn!(index, value = %other, "soil_params_json is not a string, ignoring it");
            return Map::new();
        }
    };

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            warn!(index, value = %other, "soil_params_json is not a JSON object, ignoring it");
            Map::new()
        }
        Err(e) => {
            warn!(index, error = %e, "Invalid JSON in soil_params_json, ignoring it");
            Map::new()
        }
    }
}

/// Normalizes with the default date display.
pub fn normalize(raw: Vec<RawRecord>) -> Vec<NormalizedRecord> {
    Normalizer::default().normalize(raw)
}
