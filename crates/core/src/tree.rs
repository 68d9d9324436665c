// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Category tree derivation for navigation.
//!
//! The tree is **computed**, not stored: building it twice from the
//! same visibility snapshot yields identical groupings and ordering.

use crate::catalog::Catalog;
use report_portal_domain::{Report, ReportCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One category's slice of the navigation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    /// The category identifier.
    pub category_id: i64,
    /// The category display name, or "Unknown Category" when the
    /// reports reference a category that is absent from the visible
    /// category list.
    pub category_name: String,
    /// Visible reports grouped by sub-category bucket, labels in
    /// ascending lexicographic order. Reports without an explicit
    /// sub-category sit under the "General Reports" bucket.
    pub sub_groups: BTreeMap<String, Vec<Report>>,
}

/// The category → sub-category → report navigation tree.
///
/// Categories with zero visible reports are omitted entirely; they do
/// not appear as empty shells. Keys iterate in ascending category id
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTree {
    /// The visible category nodes, keyed by category id.
    pub nodes: BTreeMap<i64, CategoryNode>,
}

/// A category-only navigation entry (top-level tiles).
///
/// Tiles list every visible category regardless of whether it
/// currently has matching reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTile {
    /// The category identifier.
    pub id: i64,
    /// The category display name.
    pub name: String,
}

/// Builds the navigation tree from a visibility snapshot.
///
/// Reports are grouped by `category_id`, then by sub-category bucket.
/// Category names are resolved against `visible_categories`; a report
/// whose category is missing from that list (dangling reference, or a
/// category the user cannot see) is labeled
/// [`Catalog::UNKNOWN_CATEGORY`].
#[must_use]
pub fn build_tree(
    visible_reports: &[&Report],
    visible_categories: &[&ReportCategory],
) -> CategoryTree {
    let mut nodes: BTreeMap<i64, CategoryNode> = BTreeMap::new();

    for report in visible_reports {
        let node: &mut CategoryNode = nodes.entry(report.category_id).or_insert_with(|| {
            let category_name: String = visible_categories
                .iter()
                .find(|c| c.id == report.category_id)
                .map_or_else(
                    || String::from(Catalog::UNKNOWN_CATEGORY),
                    |c| c.name.clone(),
                );
            CategoryNode {
                category_id: report.category_id,
                category_name,
                sub_groups: BTreeMap::new(),
            }
        });

        node.sub_groups
            .entry(String::from(report.sub_category_bucket()))
            .or_default()
            .push((*report).clone());
    }

    CategoryTree { nodes }
}

/// Returns the top-level category tiles for a visibility snapshot.
///
/// This is the simpler category-only listing: every visible category
/// appears, independent of whether it currently has visible reports.
#[must_use]
pub fn category_tiles(visible_categories: &[&ReportCategory]) -> Vec<CategoryTile> {
    visible_categories
        .iter()
        .map(|category| CategoryTile {
            id: category.id,
            name: category.name.clone(),
        })
        .collect()
}
