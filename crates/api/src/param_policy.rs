// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parameter submission validation.
//!
//! This module checks user-entered parameter values against a report's
//! parameter declarations before the report runs. It validates the
//! submission only; the filtering semantics themselves live in the
//! catalog engine.

use report_portal::ParamValues;
use report_portal_domain::{ParameterKind, Report, ReportParameter};
use serde_json::Value;
use thiserror::Error;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parameter policy errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParamPolicyError {
    /// A required parameter was omitted or left empty.
    #[error("Required parameter '{name}' is missing")]
    MissingRequired {
        /// The parameter filter key.
        name: String,
    },

    /// A date parameter does not hold an ISO `YYYY-MM-DD` value.
    #[error("Parameter '{name}' must be an ISO date (YYYY-MM-DD), got '{value}'")]
    InvalidDate {
        /// The parameter filter key.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A select/multiselect value is not one of the declared options.
    #[error("Parameter '{name}' does not accept '{value}'")]
    UnknownOption {
        /// The parameter filter key.
        name: String,
        /// The rejected value.
        value: String,
    },
}

/// Validates a parameter submission against the report's declarations.
///
/// Rules:
/// - required parameters must be present with a non-empty value
/// - `date` parameters must parse as ISO `YYYY-MM-DD`
/// - `select` values must be one of the declared option ids
/// - `multiselect` values must each be one of the declared option ids
///
/// Empty optional values are skipped, matching the engine's treatment
/// of falsy filters. Keys without a matching parameter declaration are
/// ignored here; the engine treats them permissively.
///
/// # Errors
///
/// Returns the first `ParamPolicyError` encountered, in parameter
/// declaration order.
pub fn validate_params(report: &Report, params: &ParamValues) -> Result<(), ParamPolicyError> {
    for parameter in &report.parameters {
        let value: Option<&Value> = params.get(&parameter.name).filter(|v| !is_empty(v));

        let Some(value) = value else {
            if parameter.required {
                return Err(ParamPolicyError::MissingRequired {
                    name: parameter.name.clone(),
                });
            }
            continue;
        };

        match parameter.kind {
            ParameterKind::Text => {}
            ParameterKind::Date => validate_date(parameter, value)?,
            ParameterKind::Select => validate_option(parameter, value)?,
            ParameterKind::Multiselect => {
                if let Value::Array(entries) = value {
                    for entry in entries {
                        validate_option(parameter, entry)?;
                    }
                } else {
                    validate_option(parameter, value)?;
                }
            }
        }
    }

    Ok(())
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

fn validate_date(parameter: &ReportParameter, value: &Value) -> Result<(), ParamPolicyError> {
    let text: String = value_text(value);
    if Date::parse(&text, ISO_DATE).is_err() {
        return Err(ParamPolicyError::InvalidDate {
            name: parameter.name.clone(),
            value: text,
        });
    }
    Ok(())
}

fn validate_option(parameter: &ReportParameter, value: &Value) -> Result<(), ParamPolicyError> {
    let text: String = value_text(value);
    let accepted: bool = parameter.options.as_ref().is_some_and(|options| {
        options
            .iter()
            .any(|option| value_text(&option.id) == text)
    });

    if accepted {
        Ok(())
    } else {
        Err(ParamPolicyError::UnknownOption {
            name: parameter.name.clone(),
            value: text,
        })
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
