// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Declared access constraints on a catalog item.
///
/// Each field is an independent restriction list. An absent or empty
/// list means "no restriction at that level": the corresponding gate
/// is skipped, never a blanket deny.
///
/// `allowed_locations` is the legacy generic list: it matches against
/// the user's state OR city OR region. The newer per-level lists match
/// exactly one geographic attribute each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessConstraint {
    /// Roles permitted to see the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_roles: Option<Vec<String>>,
    /// Legacy generic location list, matched against state, city, or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_locations: Option<Vec<String>>,
    /// Countries permitted to see the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_countries: Option<Vec<String>>,
    /// Regions permitted to see the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_regions: Option<Vec<String>>,
    /// States permitted to see the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_states: Option<Vec<String>>,
    /// Cities permitted to see the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_cities: Option<Vec<String>>,
    /// Cost centers permitted to see the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_cost_centers: Option<Vec<String>>,
}

impl AccessConstraint {
    /// Returns true when no restriction list is active.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        [
            &self.allowed_roles,
            &self.allowed_locations,
            &self.allowed_countries,
            &self.allowed_regions,
            &self.allowed_states,
            &self.allowed_cities,
            &self.allowed_cost_centers,
        ]
        .into_iter()
        .all(|list| list.as_ref().is_none_or(Vec::is_empty))
    }
}

/// A catalog item carrying optional access constraints.
///
/// This is the seam between the permission evaluator and the catalog:
/// categories and reports are evaluated identically through it.
pub trait Restricted {
    /// Returns the item's access constraints, if any.
    fn constraint(&self) -> Option<&AccessConstraint>;
}

impl Restricted for crate::types::ReportCategory {
    fn constraint(&self) -> Option<&AccessConstraint> {
        self.constraint.as_ref()
    }
}

impl Restricted for crate::types::Report {
    fn constraint(&self) -> Option<&AccessConstraint> {
        self.constraint.as_ref()
    }
}

impl Restricted for AccessConstraint {
    fn constraint(&self) -> Option<&AccessConstraint> {
        Some(self)
    }
}
