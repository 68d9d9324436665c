// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod constraint;
mod error;
mod permission;
mod types;
mod validation;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

pub use constraint::{AccessConstraint, Restricted};
pub use error::DomainError;
pub use permission::{Gate, SUPER_ADMIN_ROLE, check_permission};

// Re-export public types
pub use types::{
    ParameterKind, ParameterOption, Profile, Report, ReportCategory, ReportKind, ReportParameter,
    Row, UserProfile,
};
pub use validation::{dangling_category_refs, validate_catalog};
