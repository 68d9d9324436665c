// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Response DTOs for the API layer.
//!
//! These shapes are the API contract; they deliberately do not expose
//! catalog access constraints. A caller only ever sees what the
//! permission evaluator already let through.

use crate::capabilities::UserCapabilities;
use report_portal::{CategoryTile, CategoryTree};
use report_portal_domain::{ParameterKind, ParameterOption, Report, ReportKind, Row};
use serde::{Deserialize, Serialize};

/// Response for the category listing operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCategoriesResponse {
    /// The categories visible to the requesting user.
    pub categories: Vec<CategoryTile>,
}

/// A report entry in a listing, without parameters or result data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// The report identifier.
    pub id: i64,
    /// The report display name.
    pub name: String,
    /// The report description.
    pub description: String,
    /// The owning category identifier.
    pub category_id: i64,
    /// The owning category display name, resolved against the catalog.
    pub category_name: String,
    /// The sub-category bucket the report sits under.
    pub sub_category: String,
    /// Whether the report renders as a table or a PDF document.
    pub kind: ReportKind,
}

impl ReportSummary {
    pub(crate) fn from_report(report: &Report, category_name: String) -> Self {
        Self {
            id: report.id,
            name: report.name.clone(),
            description: report.description.clone(),
            category_id: report.category_id,
            category_name,
            sub_category: String::from(report.sub_category_bucket()),
            kind: report.kind,
        }
    }
}

/// Response for the report listing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListReportsResponse {
    /// The reports visible to the requesting user, after any search
    /// narrowing.
    pub reports: Vec<ReportSummary>,
}

/// Response for the category tree operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTreeResponse {
    /// The category → sub-category → report navigation tree.
    pub tree: CategoryTree,
}

/// A parameter declaration as presented to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// The parameter identifier.
    pub id: i64,
    /// The filter key the parameter binds to.
    pub name: String,
    /// The human-readable label.
    pub label: String,
    /// The input kind.
    pub kind: ParameterKind,
    /// Whether a value must be supplied before the report runs.
    pub required: bool,
    /// Declared options for select/multiselect parameters.
    pub options: Option<Vec<ParameterOption>>,
}

/// Response for the report detail operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDetailResponse {
    /// The report listing entry.
    pub report: ReportSummary,
    /// The file name for PDF-kind reports, when declared.
    pub rpt_file: Option<String>,
    /// The report's parameter declarations.
    pub parameters: Vec<ParameterInfo>,
    /// The requesting user's advisory capabilities.
    pub capabilities: UserCapabilities,
}

/// Response for the run-report operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReportResponse {
    /// The report identifier.
    pub report_id: i64,
    /// The report display name.
    pub report_name: String,
    /// The filtered (and, where applicable, redacted) result rows.
    pub rows: Vec<Row>,
    /// The number of rows returned.
    pub row_count: usize,
}

/// Response for the export operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReportResponse {
    /// The suggested download file name.
    pub file_name: String,
    /// The payload content type.
    pub content_type: String,
    /// The CSV payload.
    pub body: String,
}
