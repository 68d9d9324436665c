// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{ParameterKind, Report, ReportCategory};
use std::collections::HashSet;

/// Validates the structural invariants of a catalog snapshot.
///
/// Checks, in order:
/// - category identifiers are unique and names are non-empty
/// - report identifiers are unique and names are non-empty
/// - parameter filter keys are unique within each report
/// - select/multiselect parameters declare at least one option
///
/// Dangling `category_id` references are deliberately NOT an error:
/// they are tolerated at runtime and surface as the "Unknown Category"
/// label. Use [`dangling_category_refs`] to report them.
///
/// # Arguments
///
/// * `categories` - All categories in the catalog
/// * `reports` - All reports in the catalog
///
/// # Errors
///
/// Returns the first `DomainError` encountered.
pub fn validate_catalog(
    categories: &[ReportCategory],
    reports: &[Report],
) -> Result<(), DomainError> {
    let mut category_ids: HashSet<i64> = HashSet::new();
    for category in categories {
        if !category_ids.insert(category.id) {
            return Err(DomainError::DuplicateCategoryId(category.id));
        }
        if category.name.is_empty() {
            return Err(DomainError::EmptyCategoryName {
                category_id: category.id,
            });
        }
    }

    let mut report_ids: HashSet<i64> = HashSet::new();
    for report in reports {
        if !report_ids.insert(report.id) {
            return Err(DomainError::DuplicateReportId(report.id));
        }
        if report.name.is_empty() {
            return Err(DomainError::EmptyReportName {
                report_id: report.id,
            });
        }

        let mut parameter_names: HashSet<&str> = HashSet::new();
        for parameter in &report.parameters {
            if !parameter_names.insert(parameter.name.as_str()) {
                return Err(DomainError::DuplicateParameterName {
                    report_id: report.id,
                    name: parameter.name.clone(),
                });
            }

            let needs_options: bool = matches!(
                parameter.kind,
                ParameterKind::Select | ParameterKind::Multiselect
            );
            let has_options: bool = parameter
                .options
                .as_ref()
                .is_some_and(|options| !options.is_empty());
            if needs_options && !has_options {
                return Err(DomainError::MissingParameterOptions {
                    report_id: report.id,
                    name: parameter.name.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Returns the ids of reports whose `category_id` references no known
/// category.
///
/// These are tolerated (the tree builder falls back to the
/// "Unknown Category" label); callers may use this to log a warning at
/// catalog load time.
#[must_use]
pub fn dangling_category_refs(categories: &[ReportCategory], reports: &[Report]) -> Vec<i64> {
    let known: HashSet<i64> = categories.iter().map(|c| c.id).collect();
    reports
        .iter()
        .filter(|r| !known.contains(&r.category_id))
        .map(|r| r.id)
        .collect()
}
