// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use report_portal_domain::{Report, ReportCategory, dangling_category_refs, validate_catalog};
use serde::{Deserialize, Serialize};

/// An immutable catalog snapshot.
///
/// The catalog is static configuration loaded once at startup. It is
/// validated at construction and never mutated afterwards; an external
/// admin-management collaborator owns the mutation path.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<ReportCategory>,
    reports: Vec<Report>,
}

/// The on-disk shape of a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<ReportCategory>,
    #[serde(default)]
    reports: Vec<Report>,
}

impl Catalog {
    /// The display label used when a report references no known category.
    pub const UNKNOWN_CATEGORY: &'static str = "Unknown Category";

    /// Creates a validated catalog snapshot.
    ///
    /// # Arguments
    ///
    /// * `categories` - All report categories
    /// * `reports` - All report definitions
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if identifiers collide or
    /// names are empty. Dangling category references are tolerated.
    pub fn new(categories: Vec<ReportCategory>, reports: Vec<Report>) -> Result<Self, CoreError> {
        validate_catalog(&categories, &reports)?;
        Ok(Self {
            categories,
            reports,
        })
    }

    /// Parses and validates a catalog from its JSON file contents.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CatalogParse` if the JSON is malformed, or
    /// `CoreError::DomainViolation` if validation fails.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        let file: CatalogFile =
            serde_json::from_str(text).map_err(|err| CoreError::CatalogParse(err.to_string()))?;
        Self::new(file.categories, file.reports)
    }

    /// Returns all categories in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[ReportCategory] {
        &self.categories
    }

    /// Returns all reports in declaration order.
    #[must_use]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Looks up a category by id.
    #[must_use]
    pub fn category_by_id(&self, id: i64) -> Option<&ReportCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Looks up a report by id.
    #[must_use]
    pub fn report_by_id(&self, id: i64) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// Returns the category name for display, falling back to the
    /// "Unknown Category" label for dangling references.
    #[must_use]
    pub fn category_name_or_unknown(&self, id: i64) -> &str {
        self.category_by_id(id)
            .map_or(Self::UNKNOWN_CATEGORY, |c| c.name.as_str())
    }

    /// Returns the ids of reports with dangling category references.
    #[must_use]
    pub fn dangling_category_refs(&self) -> Vec<i64> {
        dangling_category_refs(&self.categories, &self.reports)
    }
}
