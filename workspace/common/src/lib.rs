//! Common transport-layer types shared between the command-line host and the
//! browser frontend.
//! These structs mirror the prediction backend's history payload and the
//! chart-ready projections derived from it.

mod projections;
mod record;

pub use projections::{CategoryCount, RadarPoint, SoilSeriesPoint, SummaryStats};
pub use record::{DecodeError, RawRecord, history_from_slice, history_from_value};

/// Path of the prediction history endpoint, relative to the API base URL.
pub const PREDICTION_HISTORY_ENDPOINT: &str = "/prediction-history/";

/// Shown instead of tables and charts when the user has no predictions yet.
pub const EMPTY_HISTORY_MESSAGE: &str = "No prediction history found. Make some predictions first!";
