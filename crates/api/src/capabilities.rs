// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities expose what a user is permitted to do with report
//! output without leaking profile internals. They are advisory only and
//! do not replace the permission evaluator: visibility stays with
//! `check_permission`, capabilities gate the surrounding actions
//! (export, copy, cost visibility).

use report_portal_domain::{SUPER_ADMIN_ROLE, UserProfile};
use serde::{Deserialize, Serialize};

/// Whether an action is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true when the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    const fn from_flag(flag: bool) -> Self {
        if flag { Self::Allowed } else { Self::Denied }
    }
}

/// Advisory capabilities for a user session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCapabilities {
    /// Whether report output may be exported.
    pub can_export: Capability,
    /// Whether report output may be copied.
    pub can_copy: Capability,
    /// Whether cost figures are visible.
    pub cost_visible: Capability,
}

impl UserCapabilities {
    const fn all(capability: Capability) -> Self {
        Self {
            can_export: capability,
            can_copy: capability,
            cost_visible: capability,
        }
    }
}

/// Computes the advisory capabilities for a user.
///
/// Rules, in order:
/// - anonymous contexts get no capabilities (visibility is fail-open,
///   actions on output are not)
/// - super-admins get every capability
/// - inactive users get no capabilities regardless of their flags
/// - otherwise capabilities mirror the profile flags; a missing
///   profile means no flags, hence no capabilities
#[must_use]
pub fn compute_capabilities(user: Option<&UserProfile>) -> UserCapabilities {
    let Some(user) = user else {
        return UserCapabilities::all(Capability::Denied);
    };

    if user.user_type == SUPER_ADMIN_ROLE {
        return UserCapabilities::all(Capability::Allowed);
    }

    let Some(profile) = user.profile.as_ref() else {
        return UserCapabilities::all(Capability::Denied);
    };

    if profile.is_inactive {
        return UserCapabilities::all(Capability::Denied);
    }

    UserCapabilities {
        can_export: Capability::from_flag(profile.can_export),
        can_copy: Capability::from_flag(profile.can_copy),
        cost_visible: Capability::from_flag(profile.is_cost_visible),
    }
}
