// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cost-field redaction for users without cost visibility.

use report_portal_domain::Row;

/// Removes cost-bearing fields from result rows.
///
/// A field is cost-bearing when its key contains "cost"
/// (case-insensitive). Applied after filtering, before the rows leave
/// the API layer, for users whose `cost_visible` capability is denied.
#[must_use]
pub fn redact_cost_fields(rows: Vec<Row>) -> Vec<Row> {
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .filter(|(key, _)| !key.to_lowercase().contains("cost"))
                .collect()
        })
        .collect()
}
