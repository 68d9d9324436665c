// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::param_policy::ParamPolicyError;
use report_portal::CoreError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. The catalog engine itself is total over its input domain;
/// API errors arise from the boundary (unknown ids, denied access,
/// invalid parameter submissions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The requested report does not exist in the catalog.
    ReportNotFound {
        /// The requested report identifier.
        report_id: i64,
    },
    /// The user is not permitted to see the requested report.
    PermissionDenied {
        /// The requested report identifier.
        report_id: i64,
    },
    /// A submitted parameter value violates the report's parameter
    /// declarations.
    InvalidParameter(ParamPolicyError),
    /// The user lacks the export capability.
    ExportDenied,
    /// The export payload could not be produced.
    ExportFailed {
        /// Description of the failure.
        message: String,
    },
    /// A core invariant was violated.
    Core(CoreError),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReportNotFound { report_id } => {
                write!(f, "Report {report_id} not found")
            }
            Self::PermissionDenied { report_id } => {
                write!(f, "Not permitted to access report {report_id}")
            }
            Self::InvalidParameter(err) => write!(f, "Invalid parameter: {err}"),
            Self::ExportDenied => write!(f, "User is not permitted to export report output"),
            Self::ExportFailed { message } => write!(f, "Export failed: {message}"),
            Self::Core(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ParamPolicyError> for ApiError {
    fn from(err: ParamPolicyError) -> Self {
        Self::InvalidParameter(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::Core(err)
    }
}
