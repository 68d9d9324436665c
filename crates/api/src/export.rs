// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of filtered report output.
//!
//! Export operates on rows that already passed filtering and redaction;
//! it never reaches back into the raw catalog data.

use crate::error::ApiError;
use crate::request_response::ExportReportResponse;
use report_portal_domain::{Report, Row};
use serde_json::Value;

const CSV_CONTENT_TYPE: &str = "text/csv";

/// Serializes result rows into a CSV download payload.
///
/// Columns are the keys of the first row, in key order; rows missing a
/// column produce an empty cell. An empty row set yields a payload with
/// no header line. The suggested file name is derived from the report
/// name.
///
/// # Errors
///
/// Returns `ApiError::ExportFailed` if the CSV writer rejects a record
/// or the payload is not valid UTF-8.
pub fn export_csv(report: &Report, rows: &[Row]) -> Result<ExportReportResponse, ApiError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if let Some(first) = rows.first() {
        let columns: Vec<&String> = first.keys().collect();
        writer
            .write_record(columns.iter().map(|column| column.as_str()))
            .map_err(|e| ApiError::ExportFailed {
                message: e.to_string(),
            })?;

        for row in rows {
            let record: Vec<String> = columns
                .iter()
                .map(|column| row.get(*column).map(cell_text).unwrap_or_default())
                .collect();
            writer
                .write_record(&record)
                .map_err(|e| ApiError::ExportFailed {
                    message: e.to_string(),
                })?;
        }
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|e| ApiError::ExportFailed {
            message: e.to_string(),
        })?;
    let body: String = String::from_utf8(bytes).map_err(|e| ApiError::ExportFailed {
        message: e.to_string(),
    })?;

    Ok(ExportReportResponse {
        file_name: file_name_for(&report.name),
        content_type: String::from(CSV_CONTENT_TYPE),
        body,
    })
}

/// Renders a row value as CSV cell text.
///
/// Strings stay as-is; numbers and booleans use their display form;
/// null becomes an empty cell; arrays join their entries with commas.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(entries) => entries
            .iter()
            .map(cell_text)
            .collect::<Vec<String>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Derives a download file name from a report name.
///
/// Lowercases the name, maps runs of non-alphanumeric characters to a
/// single hyphen, and appends the `.csv` extension.
fn file_name_for(report_name: &str) -> String {
    let mut slug: String = String::with_capacity(report_name.len());
    let mut pending_hyphen: bool = false;

    for c in report_name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        slug.push_str("report");
    }

    format!("{slug}.csv")
}
