//! Numeric coercion policy for soil readings.
//!
//! Every chart and statistic reads soil values through [`coerce_reading`], so
//! the rule lives in exactly one place: take the longest leading decimal
//! number of the value, and fall back to `0` for anything that is missing,
//! non-numeric or non-finite.

use serde_json::Value;

/// Converts a raw reading to a finite number, `0.0` when that is impossible.
pub fn coerce_reading(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_leading_float(s),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}

/// Same as [`coerce_reading`] for a reading that may be absent.
pub fn coerce_optional(value: Option<&Value>) -> f64 {
    value.map(coerce_reading).unwrap_or(0.0)
}

/// Loose truthiness used by the summary statistics: `null`, `false`, `0`
/// and `""` are falsy, everything else (including the string `"0"`) is
/// truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parses the longest decimal prefix of `input` after leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Returns `None` when no digit is found.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(coerce_reading(&json!(90)), 90.0);
        assert_eq!(coerce_reading(&json!(6.5)), 6.5);
        assert_eq!(coerce_reading(&json!(-3.25)), -3.25);
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(coerce_reading(&json!("6.5")), 6.5);
        assert_eq!(coerce_reading(&json!("  7.0 ")), 7.0);
        assert_eq!(coerce_reading(&json!("12abc")), 12.0);
        assert_eq!(coerce_reading(&json!(".5")), 0.5);
        assert_eq!(coerce_reading(&json!("1e2")), 100.0);
        assert_eq!(coerce_reading(&json!("1e")), 1.0);
        assert_eq!(coerce_reading(&json!("-4.")), -4.0);
    }

    #[test]
    fn test_non_numeric_becomes_zero() {
        assert_eq!(coerce_reading(&json!("abc")), 0.0);
        assert_eq!(coerce_reading(&json!("")), 0.0);
        assert_eq!(coerce_reading(&json!("-")), 0.0);
        assert_eq!(coerce_reading(&json!(".")), 0.0);
        assert_eq!(coerce_reading(&json!(null)), 0.0);
        assert_eq!(coerce_reading(&json!(true)), 0.0);
        assert_eq!(coerce_reading(&json!([1, 2])), 0.0);
        assert_eq!(coerce_reading(&json!({"v": 1})), 0.0);
        assert_eq!(coerce_optional(None), 0.0);
    }

    #[test]
    fn test_non_finite_becomes_zero() {
        assert_eq!(coerce_reading(&json!("Infinity")), 0.0);
        assert_eq!(coerce_reading(&json!("1e400")), 0.0);
        assert_eq!(coerce_reading(&json!("NaN")), 0.0);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!("abc")));
        assert!(is_truthy(&json!(6.5)));
        assert!(is_truthy(&json!([])));
    }
}
