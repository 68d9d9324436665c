// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operations over a loaded catalog.
//!
//! Handlers compose the catalog engine's pure functions with the
//! boundary concerns: permission checks on direct lookups, parameter
//! validation, capability gating, and cost redaction.

use crate::capabilities::{UserCapabilities, compute_capabilities};
use crate::error::ApiError;
use crate::export::export_csv;
use crate::param_policy::validate_params;
use crate::redaction::redact_cost_fields;
use crate::request_response::{
    CategoryTreeResponse, ExportReportResponse, ListCategoriesResponse, ListReportsResponse,
    ParameterInfo, ReportDetailResponse, ReportSummary, RunReportResponse,
};
use report_portal::{
    Catalog, CategoryTree, ParamValues, build_tree, category_tiles, visible_categories,
    visible_reports,
};
use report_portal_domain::{Report, ReportCategory, Row, UserProfile, check_permission};

/// Lists the categories visible to the user as top-level tiles.
#[must_use]
pub fn list_categories(catalog: &Catalog, user: Option<&UserProfile>) -> ListCategoriesResponse {
    let categories: Vec<&ReportCategory> = visible_categories(catalog, user);
    ListCategoriesResponse {
        categories: category_tiles(&categories),
    }
}

/// Lists the reports visible to the user, optionally narrowed by a
/// search string.
///
/// Category names in the summaries are resolved against the full
/// catalog; a dangling category reference is labeled
/// [`Catalog::UNKNOWN_CATEGORY`].
#[must_use]
pub fn list_reports(
    catalog: &Catalog,
    user: Option<&UserProfile>,
    search: Option<&str>,
) -> ListReportsResponse {
    let reports: Vec<ReportSummary> = visible_reports(catalog, user, search)
        .into_iter()
        .map(|report| {
            ReportSummary::from_report(
                report,
                String::from(catalog.category_name_or_unknown(report.category_id)),
            )
        })
        .collect();

    ListReportsResponse { reports }
}

/// Builds the category → sub-category navigation tree for the user.
#[must_use]
pub fn category_tree(catalog: &Catalog, user: Option<&UserProfile>) -> CategoryTreeResponse {
    let reports: Vec<&Report> = visible_reports(catalog, user, None);
    let categories: Vec<&ReportCategory> = visible_categories(catalog, user);
    let tree: CategoryTree = build_tree(&reports, &categories);

    CategoryTreeResponse { tree }
}

/// Fetches a single report's detail by id.
///
/// # Errors
///
/// Returns `ApiError::ReportNotFound` when no report carries the id and
/// `ApiError::PermissionDenied` when the user fails the report's access
/// gates.
pub fn get_report(
    catalog: &Catalog,
    user: Option<&UserProfile>,
    report_id: i64,
) -> Result<ReportDetailResponse, ApiError> {
    let report: &Report = permitted_report(catalog, user, report_id)?;

    let parameters: Vec<ParameterInfo> = report
        .parameters
        .iter()
        .map(|parameter| ParameterInfo {
            id: parameter.id,
            name: parameter.name.clone(),
            label: parameter.label.clone(),
            kind: parameter.kind,
            required: parameter.required,
            options: parameter.options.clone(),
        })
        .collect();

    Ok(ReportDetailResponse {
        report: ReportSummary::from_report(
            report,
            String::from(catalog.category_name_or_unknown(report.category_id)),
        ),
        rpt_file: report.rpt_file.clone(),
        parameters,
        capabilities: compute_capabilities(user),
    })
}

/// Runs a report: validates the parameter submission, filters the
/// result rows, and redacts cost fields for users without cost
/// visibility.
///
/// # Errors
///
/// Returns `ApiError::ReportNotFound`, `ApiError::PermissionDenied`, or
/// `ApiError::InvalidParameter` when the submission violates the
/// report's parameter declarations.
pub fn run_report(
    catalog: &Catalog,
    user: Option<&UserProfile>,
    report_id: i64,
    params: &ParamValues,
) -> Result<RunReportResponse, ApiError> {
    let report: &Report = permitted_report(catalog, user, report_id)?;
    validate_params(report, params)?;

    let rows: Vec<Row> = filtered_rows(report, params, user);
    tracing::debug!(
        report_id,
        rows = rows.len(),
        "report run produced filtered rows"
    );

    Ok(RunReportResponse {
        report_id: report.id,
        report_name: report.name.clone(),
        row_count: rows.len(),
        rows,
    })
}

/// Exports a report run as a CSV payload.
///
/// The export capability gates the whole operation; the rows exported
/// are exactly the rows a run would return, redaction included.
///
/// # Errors
///
/// Returns `ApiError::ExportDenied` when the user lacks the export
/// capability, plus every error `run_report` can produce, and
/// `ApiError::ExportFailed` when CSV serialization fails.
pub fn export_report(
    catalog: &Catalog,
    user: Option<&UserProfile>,
    report_id: i64,
    params: &ParamValues,
) -> Result<ExportReportResponse, ApiError> {
    let capabilities: UserCapabilities = compute_capabilities(user);
    if !capabilities.can_export.is_allowed() {
        tracing::warn!(report_id, "export denied by capability");
        return Err(ApiError::ExportDenied);
    }

    let report: &Report = permitted_report(catalog, user, report_id)?;
    validate_params(report, params)?;

    let rows: Vec<Row> = filtered_rows(report, params, user);
    export_csv(report, &rows)
}

/// Looks up a report and enforces its access gates.
fn permitted_report<'a>(
    catalog: &'a Catalog,
    user: Option<&UserProfile>,
    report_id: i64,
) -> Result<&'a Report, ApiError> {
    let Some(report) = catalog.report_by_id(report_id) else {
        return Err(ApiError::ReportNotFound { report_id });
    };

    if !check_permission(report, user) {
        tracing::warn!(report_id, "report access denied");
        return Err(ApiError::PermissionDenied { report_id });
    }

    Ok(report)
}

fn filtered_rows(report: &Report, params: &ParamValues, user: Option<&UserProfile>) -> Vec<Row> {
    let rows: Vec<Row> = report_portal::run_report(Some(report), params);

    if compute_capabilities(user).cost_visible.is_allowed() {
        rows
    } else {
        redact_cost_fields(rows)
    }
}
