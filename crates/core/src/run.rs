// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report execution: strict equality filtering of fixed result rows.
//!
//! This is deliberately NOT a search. Every comparison is string-based
//! after coercion; there is no numeric range matching, no partial-text
//! matching, and a multiselect value compares as its whole serialized
//! form (comma-joined) against the row field.

use report_portal_domain::{Report, Row};
use serde_json::Value;

/// User-entered parameter values, keyed by parameter name.
pub type ParamValues = serde_json::Map<String, Value>;

/// Runs a report: returns the result rows matching every supplied
/// filter value.
///
/// Semantics, per `(key, value)` pair with a truthy `value`:
/// - a row without a field named `key` passes unconditionally (unknown
///   filter keys are permissive, not exclusionary)
/// - a value starting with an ISO date prefix (`YYYY-MM-DD`) compares
///   by exact string equality
/// - anything else compares by case-insensitive string equality
///
/// Falsy values (absent, null, empty string, empty array, `false`,
/// zero) are skipped entirely, so empty parameters return the full
/// result unchanged.
///
/// A `None` report is a no-op returning an empty sequence; the source
/// rows are copied, never mutated.
#[must_use]
pub fn run_report(report: Option<&Report>, params: &ParamValues) -> Vec<Row> {
    let Some(report) = report else {
        return Vec::new();
    };

    let mut rows: Vec<Row> = report.result.clone();

    for (key, value) in params {
        if !is_truthy(value) {
            continue;
        }

        let filter_text: String = coerce_string(value);
        let exact: bool = has_iso_date_prefix(&filter_text);

        rows.retain(|row| {
            let Some(row_value) = row.get(key) else {
                return true;
            };
            let row_text: String = coerce_string(row_value);
            if exact {
                row_text == filter_text
            } else {
                row_text.to_lowercase() == filter_text.to_lowercase()
            }
        });
    }

    rows
}

/// JavaScript-style truthiness, with the one documented deviation that
/// an empty array is falsy (it carries no filter selection).
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(_) => true,
    }
}

/// JavaScript-style string coercion for comparison.
///
/// Strings pass through, numbers and booleans use their display form,
/// arrays join their coerced elements with commas (matching
/// `String([...])`), and null coerces to the empty string.
fn coerce_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(a) => a
            .iter()
            .map(coerce_string)
            .collect::<Vec<String>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Returns whether `s` starts with an ISO `YYYY-MM-DD` date prefix.
fn has_iso_date_prefix(s: &str) -> bool {
    let bytes: &[u8] = s.as_bytes();
    if bytes.len() < 10 {
        return false;
    }
    bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..10].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_prefix_detection() {
        assert!(has_iso_date_prefix("2024-01-05"));
        assert!(has_iso_date_prefix("2024-01-05T00:00:00"));
        assert!(!has_iso_date_prefix("2024-1-5"));
        assert!(!has_iso_date_prefix("North"));
        assert!(!has_iso_date_prefix(""));
        assert!(!has_iso_date_prefix("2024-01"));
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&Value::from("")));
        assert!(!is_truthy(&Value::from(0)));
        assert!(!is_truthy(&Value::from(false)));
        assert!(!is_truthy(&Value::Array(Vec::new())));
        assert!(is_truthy(&Value::from("North")));
        assert!(is_truthy(&Value::from(1)));
        assert!(is_truthy(&Value::from(vec!["North"])));
    }

    #[test]
    fn test_coercion_matches_javascript_forms() {
        assert_eq!(coerce_string(&Value::from("South")), "South");
        assert_eq!(coerce_string(&Value::from(1200)), "1200");
        assert_eq!(coerce_string(&Value::from(true)), "true");
        assert_eq!(
            coerce_string(&Value::from(vec!["North", "South"])),
            "North,South"
        );
        assert_eq!(coerce_string(&Value::Null), "");
    }
}
