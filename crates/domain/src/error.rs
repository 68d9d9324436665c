// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Two categories share an identifier.
    DuplicateCategoryId(i64),
    /// Two reports share an identifier.
    DuplicateReportId(i64),
    /// A category has an empty name.
    EmptyCategoryName {
        /// The offending category identifier.
        category_id: i64,
    },
    /// A report has an empty name.
    EmptyReportName {
        /// The offending report identifier.
        report_id: i64,
    },
    /// Two parameters of the same report share a filter key.
    DuplicateParameterName {
        /// The owning report identifier.
        report_id: i64,
        /// The duplicated filter key.
        name: String,
    },
    /// A select/multiselect parameter has no options.
    MissingParameterOptions {
        /// The owning report identifier.
        report_id: i64,
        /// The offending filter key.
        name: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateCategoryId(id) => {
                write!(f, "Category id {id} is used more than once")
            }
            Self::DuplicateReportId(id) => {
                write!(f, "Report id {id} is used more than once")
            }
            Self::EmptyCategoryName { category_id } => {
                write!(f, "Category {category_id} has an empty name")
            }
            Self::EmptyReportName { report_id } => {
                write!(f, "Report {report_id} has an empty name")
            }
            Self::DuplicateParameterName { report_id, name } => {
                write!(
                    f,
                    "Report {report_id} declares parameter '{name}' more than once"
                )
            }
            Self::MissingParameterOptions { report_id, name } => {
                write!(
                    f,
                    "Report {report_id} parameter '{name}' is a choice parameter but declares no options"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
