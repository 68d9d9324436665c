// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{report, row};
use crate::{ParamValues, run_report};
use report_portal_domain::{Report, Row};
use serde_json::Value;

fn params(pairs: &[(&str, Value)]) -> ParamValues {
    pairs
        .iter()
        .map(|(key, value)| (String::from(*key), value.clone()))
        .collect()
}

fn regional_report() -> Report {
    let mut r: Report = report(101, "Regional", 1);
    r.result = vec![
        row(&[("region", Value::from("North")), ("amount", Value::from(1200))]),
        row(&[("region", Value::from("south")), ("amount", Value::from(1800))]),
    ];
    r
}

#[test]
fn test_no_report_returns_empty() {
    let filters: ParamValues = params(&[("region", Value::from("North"))]);
    assert!(run_report(None, &filters).is_empty());
}

#[test]
fn test_empty_params_return_full_result() {
    // Scenario C: all-falsy parameter values are a no-op.
    let r: Report = regional_report();

    assert_eq!(run_report(Some(&r), &ParamValues::new()), r.result);

    let falsy: ParamValues = params(&[
        ("region", Value::from("")),
        ("amount", Value::from(0)),
        ("flag", Value::Bool(false)),
        ("choices", Value::Array(Vec::new())),
        ("missing", Value::Null),
    ]);
    assert_eq!(run_report(Some(&r), &falsy), r.result);
}

#[test]
fn test_text_filter_is_case_insensitive() {
    // P6: "SOUTH" matches the row whose region is "south".
    let r: Report = regional_report();
    let filters: ParamValues = params(&[("region", Value::from("SOUTH"))]);

    let rows: Vec<Row> = run_report(Some(&r), &filters);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["region"], "south");
}

#[test]
fn test_date_filter_is_exact() {
    let mut r: Report = report(101, "Orders", 1);
    r.result = vec![
        row(&[("orderDate", Value::from("2024-01-05"))]),
        row(&[("orderDate", Value::from("2024-01-05T00:00:00"))]),
        row(&[("orderDate", Value::from("2024-01-06"))]),
    ];

    let filters: ParamValues = params(&[("orderDate", Value::from("2024-01-05"))]);
    let rows: Vec<Row> = run_report(Some(&r), &filters);

    // Exact string equality: the timestamped variant does not match.
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["orderDate"], "2024-01-05");
}

#[test]
fn test_unknown_filter_key_is_permissive() {
    // P7: rows lacking the key pass unchanged.
    let r: Report = regional_report();
    let filters: ParamValues = params(&[("warehouse", Value::from("WH-1"))]);

    assert_eq!(run_report(Some(&r), &filters), r.result);
}

#[test]
fn test_filters_are_anded_across_keys() {
    let r: Report = regional_report();
    let filters: ParamValues = params(&[
        ("region", Value::from("north")),
        ("amount", Value::from("1200")),
    ]);

    let rows: Vec<Row> = run_report(Some(&r), &filters);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["amount"], 1200);
}

#[test]
fn test_numeric_row_values_compare_as_strings() {
    let r: Report = regional_report();

    // The numeric amount 1200 stringifies to "1200"; there is no
    // partial matching and no numeric range matching.
    let exact: ParamValues = params(&[("amount", Value::from(1200))]);
    assert_eq!(run_report(Some(&r), &exact).len(), 1);

    let partial: ParamValues = params(&[("amount", Value::from("120"))]);
    assert!(run_report(Some(&r), &partial).is_empty());
}

#[test]
fn test_multiselect_compares_whole_serialized_form() {
    let mut r: Report = report(101, "Regions", 1);
    r.result = vec![
        row(&[("region", Value::from("North"))]),
        row(&[("region", Value::from("North,South"))]),
    ];

    // A multiselect of two values joins to "North,South" and matches
    // only a row field with exactly that serialized form, not "any of".
    let filters: ParamValues = params(&[("region", Value::from(vec!["North", "South"]))]);
    let rows: Vec<Row> = run_report(Some(&r), &filters);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["region"], "North,South");
}

#[test]
fn test_source_rows_are_not_mutated() {
    let r: Report = regional_report();
    let before: Vec<Row> = r.result.clone();

    let filters: ParamValues = params(&[("region", Value::from("north"))]);
    let _ = run_report(Some(&r), &filters);

    assert_eq!(r.result, before);
}
