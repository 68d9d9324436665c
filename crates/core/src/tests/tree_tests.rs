// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{category, report, sample_catalog, user};
use crate::{
    Catalog, CategoryTile, CategoryTree, build_tree, category_tiles, visible_categories,
    visible_reports,
};
use report_portal_domain::{Report, ReportCategory};

#[test]
fn test_reports_group_by_category_and_sub_category() {
    let categories: Vec<ReportCategory> = vec![category(1, "Sales", None)];
    let mut a: Report = report(101, "Daily", 1);
    a.sub_category = Some(String::from("Registers"));
    let b: Report = report(102, "Summary", 1);
    let mut c: Report = report(103, "Backorders", 1);
    c.sub_category = Some(String::from("Backlog"));

    let catalog: Catalog = Catalog::new(categories, vec![a, b, c]).unwrap();
    let cats = visible_categories(&catalog, None);
    let reports = visible_reports(&catalog, None, None);

    let tree: CategoryTree = build_tree(&reports, &cats);
    assert_eq!(tree.nodes.len(), 1);

    let node = &tree.nodes[&1];
    assert_eq!(node.category_name, "Sales");

    // Buckets are deduplicated and lexicographically ordered, with the
    // implicit bucket for the report lacking a sub-category.
    let labels: Vec<&String> = node.sub_groups.keys().collect();
    assert_eq!(labels, vec!["Backlog", "General Reports", "Registers"]);
    assert_eq!(node.sub_groups["General Reports"][0].id, 102);
}

#[test]
fn test_empty_sub_category_falls_into_general_bucket() {
    let categories: Vec<ReportCategory> = vec![category(1, "Sales", None)];
    let mut r: Report = report(101, "Daily", 1);
    r.sub_category = Some(String::new());

    let catalog: Catalog = Catalog::new(categories, vec![r]).unwrap();
    let tree: CategoryTree = build_tree(
        &visible_reports(&catalog, None, None),
        &visible_categories(&catalog, None),
    );

    assert!(tree.nodes[&1].sub_groups.contains_key("General Reports"));
}

#[test]
fn test_category_without_visible_reports_is_omitted() {
    let catalog: Catalog = sample_catalog();
    // The sales role sees categories 1 and 2, but only reports 101
    // (category 1); category 2 has no reports at all in the sample.
    let sales = user("sales");
    let tree: CategoryTree = build_tree(
        &visible_reports(&catalog, Some(&sales), None),
        &visible_categories(&catalog, Some(&sales)),
    );

    let ids: Vec<i64> = tree.nodes.keys().copied().collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_hidden_category_with_visible_report_gets_unknown_label() {
    // Scenario A continued: the report lands in the tree under its
    // category id, but the name resolves to the fallback label because
    // the category is not in the visible set.
    let categories: Vec<ReportCategory> =
        vec![category(1, "Sales", super::helpers::roles(&["admin"]))];
    let mut r: Report = report(101, "Orders", 1);
    r.constraint = super::helpers::roles(&["admin", "sales"]);
    let catalog: Catalog = Catalog::new(categories, vec![r]).unwrap();

    let sales = user("sales");
    let tree: CategoryTree = build_tree(
        &visible_reports(&catalog, Some(&sales), None),
        &visible_categories(&catalog, Some(&sales)),
    );

    assert_eq!(tree.nodes[&1].category_name, Catalog::UNKNOWN_CATEGORY);
}

#[test]
fn test_dangling_category_reference_gets_unknown_label() {
    let catalog: Catalog =
        Catalog::new(vec![category(1, "Sales", None)], vec![report(7, "Lost", 42)]).unwrap();

    let tree: CategoryTree = build_tree(
        &visible_reports(&catalog, None, None),
        &visible_categories(&catalog, None),
    );

    assert_eq!(tree.nodes[&42].category_name, Catalog::UNKNOWN_CATEGORY);
}

#[test]
fn test_tree_build_is_idempotent() {
    let catalog: Catalog = sample_catalog();
    let cats = visible_categories(&catalog, None);
    let reports = visible_reports(&catalog, None, None);

    let first: CategoryTree = build_tree(&reports, &cats);
    let second: CategoryTree = build_tree(&reports, &cats);

    assert_eq!(first, second);
}

#[test]
fn test_category_tiles_list_all_visible_categories() {
    let catalog: Catalog = sample_catalog();
    let sales = user("sales");

    // Tiles include category 2 even though it has no visible reports.
    let tiles: Vec<CategoryTile> = category_tiles(&visible_categories(&catalog, Some(&sales)));
    let ids: Vec<i64> = tiles.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(tiles[0].name, "Customer Sales");
}
