// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog visibility filtering.
//!
//! Category visibility and report visibility are evaluated
//! independently per item: a report may be visible while its owning
//! category is not (and vice versa). Callers wanting "category must
//! also be visible" must intersect with [`visible_categories`]
//! themselves. Per-item evaluation is pinned by tests as intentional
//! behavior.

use crate::catalog::Catalog;
use report_portal_domain::{Report, ReportCategory, UserProfile, check_permission};

/// Returns all categories visible to the user, in catalog order.
#[must_use]
pub fn visible_categories<'a>(
    catalog: &'a Catalog,
    user: Option<&UserProfile>,
) -> Vec<&'a ReportCategory> {
    catalog
        .categories()
        .iter()
        .filter(|category| check_permission(*category, user))
        .collect()
}

/// Returns all reports visible to the user, in catalog order.
///
/// When `search` is non-empty, a report is kept only if its name or its
/// category's name contains the term as a case-insensitive substring.
/// Reports with dangling category references match on their own name
/// only.
#[must_use]
pub fn visible_reports<'a>(
    catalog: &'a Catalog,
    user: Option<&UserProfile>,
    search: Option<&str>,
) -> Vec<&'a Report> {
    let term: Option<String> = search
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    catalog
        .reports()
        .iter()
        .filter(|report| check_permission(*report, user))
        .filter(|report| {
            term.as_ref().is_none_or(|term| {
                if report.name.to_lowercase().contains(term) {
                    return true;
                }
                catalog
                    .category_by_id(report.category_id)
                    .is_some_and(|category| category.name.to_lowercase().contains(term))
            })
        })
        .collect()
}
