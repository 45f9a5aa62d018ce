use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Default display format: US numeric date, e.g. `3/5/2024`.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Turns backend timestamps into display dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateDisplay {
    format: String,
}

impl DateDisplay {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Formats a raw timestamp value, `None` when it is absent or unparsable.
    pub fn display(&self, raw: Option<&Value>) -> Option<String> {
        let text = raw?.as_str()?;
        parse_timestamp(text).map(|date| date.format(&self.format).to_string())
    }
}

impl Default for DateDisplay {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

/// Extracts the calendar date written in a timestamp.
///
/// Accepts RFC 3339, ISO date-times with a `+hhmm` offset, naive ISO date-times (`T` or space separated, optional
/// fractional seconds, optional missing seconds) and plain `YYYY-MM-DD`.
/// The date is taken as written; no timezone conversion happens.
pub fn parse_timestamp(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }

    // Offsets written without a colon, e.g. `+0000`.
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.date_naive());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.date());
        }
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M") {
        return Some(dt.date());
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_timestamp_shapes() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(parse_timestamp("2024-03-05T10:15:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-05T23:59:59.123456+05:30"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-05T10:15:00.5"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-05 10:15:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-05T10:15"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-05"), Some(expected));
    }

    #[test]
    fn test_parse_timestamp_compact_offset() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(parse_timestamp("2024-06-30T09:30:00+0000"), Some(expected));
        assert_eq!(parse_timestamp("2024-06-30T23:30:00.250-0700"), Some(expected));
        assert_eq!(
            DateDisplay::default().display(Some(&json!("2024-06-30T09:30:00+0000"))),
            Some("6/30/2024".to_string())
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-40"), None);
    }

    #[test]
    fn test_display_formats() {
        let display = DateDisplay::default();
        assert_eq!(
            display.display(Some(&json!("2024-03-05T10:15:00Z"))),
            Some("3/5/2024".to_string())
        );
        assert_eq!(display.display(Some(&json!("garbage"))), None);
        assert_eq!(display.display(Some(&json!(1709633700))), None);
        assert_eq!(display.display(None), None);

        let iso = DateDisplay::new("%Y-%m-%d");
        assert_eq!(
            iso.display(Some(&json!("2024-11-20T08:00:00+01:00"))),
            Some("2024-11-20".to_string())
        );
    }
}
