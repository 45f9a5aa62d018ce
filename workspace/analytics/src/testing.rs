//! Fixtures shared by the unit tests of this crate.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use common::RawRecord;
use serde_json::{json, Value};
use std::cell::RefCell;

use crate::error::{FetchError, Result};
use crate::source::{BearerToken, HistorySource};

const CROPS: [&str; 3] = ["Rice", "Wheat", "Maize"];
const FERTILIZERS: [&str; 2] = ["Urea", "DAP"];

pub fn raw(value: Value) -> RawRecord {
    RawRecord::from_value(value)
}

/// `count` well-formed records, newest first. Record `i` has nitrogen `i`
/// and is dated `i` days before the newest one.
pub fn newest_first_history(count: usize) -> Vec<RawRecord> {
    let newest = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    (0..count)
        .map(|i| {
            let date = newest - Duration::days(i as i64);
            let soil = json!({"n": i, "p": 40, "k": 38, "ph": 6.5, "rainfall": 180.0, "humidity": 70, "temperature": 24.5});
            raw(json!({
                "id": i,
                "prediction_date": format!("{}T09:30:00Z", date),
                "crop": CROPS[i % CROPS.len()],
                "fertilizer": FERTILIZERS[i % FERTILIZERS.len()],
                "soil_params_json": soil.to_string(),
            }))
        })
        .collect()
}

/// In-memory [`HistorySource`] that records the token it was called with.
pub struct StubSource {
    response: Result<Vec<RawRecord>>,
    seen: RefCell<Option<String>>,
}

impl StubSource {
    pub fn ok(records: Vec<RawRecord>) -> Self {
        Self {
            response: Ok(records),
            seen: RefCell::new(None),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            response: Err(error),
            seen: RefCell::new(None),
        }
    }

    pub fn seen_token(&self) -> Option<String> {
        self.seen.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HistorySource for StubSource {
    async fn fetch_history(&self, token: &BearerToken) -> Result<Vec<RawRecord>> {
        *self.seen.borrow_mut() = Some(token.as_str().to_string());
        self.response.clone()
    }
}
