// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod capabilities;
mod error;
mod export;
mod handlers;
mod param_policy;
mod redaction;
mod request_response;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

pub use capabilities::{Capability, UserCapabilities, compute_capabilities};
pub use error::ApiError;
pub use export::export_csv;
pub use handlers::{
    category_tree, get_report, list_categories, list_reports, run_report, export_report,
};
pub use param_policy::ParamPolicyError;
pub use redaction::redact_cost_fields;
pub use request_response::{
    CategoryTreeResponse, ExportReportResponse, ListCategoriesResponse, ListReportsResponse,
    ParameterInfo, ReportDetailResponse, ReportSummary, RunReportResponse,
};
