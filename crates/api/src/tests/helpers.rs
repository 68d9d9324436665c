// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for API tests.

use report_portal::{Catalog, ParamValues};
use report_portal_domain::{
    AccessConstraint, ParameterKind, ParameterOption, Profile, Report, ReportCategory, ReportKind,
    ReportParameter, Row, UserProfile,
};
use serde_json::Value;

pub fn roles(allowed: &[&str]) -> Option<AccessConstraint> {
    Some(AccessConstraint {
        allowed_roles: Some(allowed.iter().map(|role| String::from(*role)).collect()),
        ..AccessConstraint::default()
    })
}

pub fn category(id: i64, name: &str, constraint: Option<AccessConstraint>) -> ReportCategory {
    ReportCategory {
        id,
        name: String::from(name),
        constraint,
    }
}

pub fn report(id: i64, name: &str, category_id: i64, constraint: Option<AccessConstraint>) -> Report {
    Report {
        id,
        name: String::from(name),
        description: String::new(),
        category_id,
        sub_category: None,
        kind: ReportKind::Table,
        rpt_file: None,
        parameters: Vec::new(),
        result: Vec::new(),
        constraint,
    }
}

pub fn row(pairs: &[(&str, Value)]) -> Row {
    pairs
        .iter()
        .map(|(key, value)| (String::from(*key), value.clone()))
        .collect()
}

pub fn params(pairs: &[(&str, Value)]) -> ParamValues {
    pairs
        .iter()
        .map(|(key, value)| (String::from(*key), value.clone()))
        .collect()
}

/// A manager with every output capability.
pub fn manager() -> UserProfile {
    UserProfile {
        user_type: String::from("manager"),
        profile: Some(Profile {
            full_name: Some(String::from("Mae Holland")),
            can_export: true,
            can_copy: true,
            is_cost_visible: true,
            ..Profile::default()
        }),
    }
}

/// A clerk with no output capabilities.
pub fn clerk() -> UserProfile {
    UserProfile {
        user_type: String::from("clerk"),
        profile: Some(Profile::default()),
    }
}

pub fn super_admin() -> UserProfile {
    UserProfile {
        user_type: String::from("super-admin"),
        profile: None,
    }
}

fn region_parameter() -> ReportParameter {
    ReportParameter {
        id: 1,
        name: String::from("region"),
        label: String::from("Region"),
        kind: ParameterKind::Select,
        required: false,
        options: Some(vec![
            ParameterOption {
                id: Value::from("North"),
                name: String::from("North"),
            },
            ParameterOption {
                id: Value::from("South"),
                name: String::from("South"),
            },
        ]),
    }
}

fn from_date_parameter() -> ReportParameter {
    ReportParameter {
        id: 2,
        name: String::from("fromDate"),
        label: String::from("From"),
        kind: ParameterKind::Date,
        required: false,
        options: None,
    }
}

/// Two categories (one role-gated), a plain report with result data, a
/// role-gated report, and a report with a dangling category reference.
pub fn sample_catalog() -> Catalog {
    let categories: Vec<ReportCategory> = vec![
        category(1, "Registers", None),
        category(2, "Analytics", roles(&["manager"])),
    ];

    let mut daily: Report = report(101, "Daily Sales Register", 1, None);
    daily.parameters = vec![region_parameter(), from_date_parameter()];
    daily.result = vec![
        row(&[
            ("region", Value::from("North")),
            ("total", Value::from(1200)),
            ("unitCost", Value::from(3)),
        ]),
        row(&[
            ("region", Value::from("South")),
            ("total", Value::from(900)),
            ("unitCost", Value::from(4)),
        ]),
        row(&[
            ("region", Value::from("North")),
            ("total", Value::from(300)),
            ("unitCost", Value::from(2)),
        ]),
    ];

    let mut margin: Report = report(202, "Margin Analysis", 2, roles(&["manager"]));
    margin.result = vec![row(&[
        ("product", Value::from("Soap")),
        ("cost", Value::from(5)),
    ])];

    let stray: Report = report(303, "Stray Report", 99, None);

    Catalog::new(categories, vec![daily, margin, stray]).unwrap()
}
