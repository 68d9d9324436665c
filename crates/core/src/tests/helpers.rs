// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Catalog;
use report_portal_domain::{
    AccessConstraint, Profile, Report, ReportCategory, ReportKind, Row, UserProfile,
};
use serde_json::Value;

pub fn category(id: i64, name: &str, constraint: Option<AccessConstraint>) -> ReportCategory {
    ReportCategory {
        id,
        name: String::from(name),
        constraint,
    }
}

pub fn report(id: i64, name: &str, category_id: i64) -> Report {
    Report {
        id,
        name: String::from(name),
        description: String::from("test report"),
        category_id,
        sub_category: None,
        kind: ReportKind::Table,
        rpt_file: None,
        parameters: Vec::new(),
        result: Vec::new(),
        constraint: None,
    }
}

pub fn roles(list: &[&str]) -> Option<AccessConstraint> {
    Some(AccessConstraint {
        allowed_roles: Some(list.iter().map(ToString::to_string).collect()),
        ..AccessConstraint::default()
    })
}

pub fn user(user_type: &str) -> UserProfile {
    UserProfile::new(String::from(user_type))
}

pub fn user_in_state(user_type: &str, state: &str) -> UserProfile {
    UserProfile::with_profile(
        String::from(user_type),
        Profile {
            state: Some(String::from(state)),
            ..Profile::default()
        },
    )
}

pub fn row(fields: &[(&str, Value)]) -> Row {
    fields
        .iter()
        .map(|(key, value)| (String::from(*key), value.clone()))
        .collect()
}

/// A small catalog with role-gated sales categories plus a
/// location-gated category.
pub fn sample_catalog() -> Catalog {
    let categories: Vec<ReportCategory> = vec![
        category(1, "Customer Sales", roles(&["admin", "manager", "sales"])),
        category(2, "Product Sales", roles(&["admin", "manager", "sales"])),
        category(3, "Market Segment Sales", roles(&["admin", "manager", "user"])),
        category(
            4,
            "Therapist Sales",
            Some(AccessConstraint {
                allowed_locations: Some(vec![String::from("New York")]),
                ..AccessConstraint::default()
            }),
        ),
    ];

    let mut daily: Report = report(101, "Daily Sales Register", 1);
    daily.constraint = roles(&["admin", "manager", "sales"]);
    daily.result = vec![
        row(&[
            ("orderNo", Value::from("SO-1001")),
            ("customer", Value::from("ABC Traders")),
            ("amount", Value::from(1200)),
            ("region", Value::from("North")),
        ]),
        row(&[
            ("orderNo", Value::from("SO-1002")),
            ("customer", Value::from("XYZ Corp")),
            ("amount", Value::from(1800)),
            ("region", Value::from("South")),
        ]),
        row(&[
            ("orderNo", Value::from("SO-1003")),
            ("customer", Value::from("Prime Ltd")),
            ("amount", Value::from(950)),
            ("region", Value::from("North")),
        ]),
    ];

    let mut segment: Report = report(102, "Segment Performance", 3);
    segment.constraint = roles(&["admin", "user"]);
    segment.sub_category = Some(String::from("Quarterly"));

    let mut therapist: Report = report(104, "Therapist Revenue", 4);
    therapist.constraint = Some(AccessConstraint {
        allowed_locations: Some(vec![String::from("New York")]),
        ..AccessConstraint::default()
    });

    #[allow(clippy::expect_used)]
    Catalog::new(categories, vec![daily, segment, therapist]).expect("sample catalog is valid")
}
