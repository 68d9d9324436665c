// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::constraint::AccessConstraint;
use serde::{Deserialize, Serialize};

/// A single report result row.
///
/// Rows are schemaless records keyed by field name. They are fixed
/// reference data for the session; filtering copies, never mutates.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Geographic and capability attributes of a user.
///
/// Every geographic level is optional. `None` means "unset", which is
/// distinct from an empty string: an unset level never satisfies a
/// location gate, and an empty string is ignored by the generic
/// location gate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// The user's display name (informational, not unique).
    pub full_name: Option<String>,
    /// The user's country.
    pub country: Option<String>,
    /// The user's region.
    pub region: Option<String>,
    /// The user's state.
    pub state: Option<String>,
    /// The user's city.
    pub city: Option<String>,
    /// The user's cost center.
    pub cost_center: Option<String>,
    /// Whether the user may export report output.
    pub can_export: bool,
    /// Whether the user may copy report output.
    pub can_copy: bool,
    /// Whether cost figures are visible to this user.
    pub is_cost_visible: bool,
    /// Whether the account is inactive. Inactive users keep catalog
    /// visibility but lose all advisory capabilities.
    pub is_inactive: bool,
}

/// An authenticated user as seen by the permission evaluator.
///
/// `user_type` is an opaque role identifier (e.g. "admin", "manager",
/// "sales"). Roles are data-driven, not a closed enum: the catalog may
/// reference any role string in its constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The role identifier for this user.
    pub user_type: String,
    /// Geographic and capability attributes. A missing profile behaves
    /// as if every attribute were unset.
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl UserProfile {
    /// Creates a user with the given role and no profile attributes.
    #[must_use]
    pub const fn new(user_type: String) -> Self {
        Self {
            user_type,
            profile: None,
        }
    }

    /// Creates a user with the given role and profile.
    #[must_use]
    pub const fn with_profile(user_type: String, profile: Profile) -> Self {
        Self {
            user_type,
            profile: Some(profile),
        }
    }

    /// Returns the user's country, if set.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| p.country.as_deref())
    }

    /// Returns the user's region, if set.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| p.region.as_deref())
    }

    /// Returns the user's state, if set.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| p.state.as_deref())
    }

    /// Returns the user's city, if set.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| p.city.as_deref())
    }

    /// Returns the user's cost center, if set.
    #[must_use]
    pub fn cost_center(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| p.cost_center.as_deref())
    }
}

/// A report category.
///
/// Categories group reports for navigation. Access constraints on a
/// category gate the category tile only; report visibility is evaluated
/// independently per report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCategory {
    /// Unique category identifier.
    pub id: i64,
    /// The category display name.
    pub name: String,
    /// Optional access constraints for this category.
    #[serde(flatten, default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<AccessConstraint>,
}

/// How a report renders its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Tabulated rows rendered in place.
    #[default]
    Table,
    /// Externally rendered document (opaque template collaborator).
    Pdf,
}

/// The input kind of a report parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// Free text.
    Text,
    /// ISO `YYYY-MM-DD` date.
    Date,
    /// Single choice from the declared options.
    Select,
    /// Multiple choices from the declared options.
    Multiselect,
}

/// One entry in a select/multiselect option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterOption {
    /// The option value submitted by the form.
    pub id: serde_json::Value,
    /// The option display text.
    pub name: String,
}

/// A single user-entered parameter of a report.
///
/// `name` doubles as the filter key: it is matched against result row
/// field names when the report runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportParameter {
    /// Unique parameter identifier within the report.
    pub id: i64,
    /// The filter key, matched against result row field names.
    pub name: String,
    /// The display label.
    pub label: String,
    /// The input kind.
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    /// Whether a value must be supplied before the report runs.
    #[serde(default)]
    pub required: bool,
    /// Ordered options for select/multiselect parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ParameterOption>>,
}

/// A report definition.
///
/// A report belongs to exactly one category via `category_id`. Dangling
/// references are tolerated and surface as the "Unknown Category" label
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Unique report identifier.
    pub id: i64,
    /// The report display name.
    pub name: String,
    /// A short description.
    pub description: String,
    /// The owning category.
    pub category_id: i64,
    /// Optional sub-category label. Reports without one fall into the
    /// "General Reports" bucket when the navigation tree is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    /// How this report renders.
    #[serde(rename = "type", default)]
    pub kind: ReportKind,
    /// Opaque template path for the external rendering collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpt_file: Option<String>,
    /// Ordered user-entered parameters.
    #[serde(default)]
    pub parameters: Vec<ReportParameter>,
    /// Fixed result rows this report renders when run.
    #[serde(default)]
    pub result: Vec<Row>,
    /// Optional access constraints for this report.
    #[serde(flatten, default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<AccessConstraint>,
}

impl Report {
    /// Returns the sub-category bucket label for tree building.
    ///
    /// Absent or empty sub-categories fall into the literal
    /// "General Reports" bucket.
    #[must_use]
    pub fn sub_category_bucket(&self) -> &str {
        match self.sub_category.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => Self::GENERAL_BUCKET,
        }
    }

    /// The bucket label for reports without an explicit sub-category.
    pub const GENERAL_BUCKET: &'static str = "General Reports";
}
