// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Permission evaluation for catalog items.
//!
//! Visibility is **computed**, not stored. `check_permission` is a pure
//! function of the item's declared constraints and the user's profile.
//!
//! The evaluator is an AND over an ordered, exhaustively enumerable set
//! of gates. A gate is active only when its restriction list is
//! non-empty; an inactive gate always passes (fail-open lists, not
//! deny-by-default).

use crate::constraint::{AccessConstraint, Restricted};
use crate::types::UserProfile;

/// The role identifier that bypasses every gate.
pub const SUPER_ADMIN_ROLE: &str = "super-admin";

/// One independent restriction check within the permission evaluator.
///
/// Gates are evaluated in declaration order. Each gate reads exactly one
/// restriction list; the generic `Location` gate is the legacy list that
/// OR-matches the user's state, city, and region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// The user's role must be in `allowed_roles`.
    Role,
    /// Any of the user's state, city, or region must be in
    /// `allowed_locations`. A value like "London" satisfies this gate
    /// whether it is the user's city or region; the legacy list does
    /// not disambiguate levels, and that permissiveness is intentional.
    Location,
    /// The user's country must be in `allowed_countries`.
    Country,
    /// The user's region must be in `allowed_regions`.
    Region,
    /// The user's state must be in `allowed_states`.
    State,
    /// The user's city must be in `allowed_cities`.
    City,
    /// The user's cost center must be in `allowed_cost_centers`.
    CostCenter,
}

impl Gate {
    /// Every gate, in evaluation order.
    pub const ALL: [Self; 7] = [
        Self::Role,
        Self::Location,
        Self::Country,
        Self::Region,
        Self::State,
        Self::City,
        Self::CostCenter,
    ];

    /// Returns the restriction list this gate reads.
    #[must_use]
    pub const fn restriction(self, constraint: &AccessConstraint) -> &Option<Vec<String>> {
        match self {
            Self::Role => &constraint.allowed_roles,
            Self::Location => &constraint.allowed_locations,
            Self::Country => &constraint.allowed_countries,
            Self::Region => &constraint.allowed_regions,
            Self::State => &constraint.allowed_states,
            Self::City => &constraint.allowed_cities,
            Self::CostCenter => &constraint.allowed_cost_centers,
        }
    }

    /// Returns whether this gate is active for the given constraints.
    ///
    /// A gate with an absent or empty restriction list is inactive and
    /// always passes.
    #[must_use]
    pub fn is_active(self, constraint: &AccessConstraint) -> bool {
        self.restriction(constraint)
            .as_ref()
            .is_some_and(|list| !list.is_empty())
    }

    /// Evaluates this gate for a user against the given constraints.
    ///
    /// Inactive gates pass unconditionally. Active gates require the
    /// matching user attribute to be a member of the restriction list;
    /// an unset attribute never matches.
    #[must_use]
    pub fn passes(self, constraint: &AccessConstraint, user: &UserProfile) -> bool {
        let Some(allowed) = self.restriction(constraint).as_ref().filter(|l| !l.is_empty()) else {
            return true;
        };

        match self {
            Self::Role => allowed.iter().any(|role| role == &user.user_type),
            Self::Location => {
                // Legacy OR semantics: any non-empty value among state,
                // city, and region may satisfy the list.
                [user.state(), user.city(), user.region()]
                    .into_iter()
                    .flatten()
                    .filter(|value| !value.is_empty())
                    .any(|value| allowed.iter().any(|loc| loc == value))
            }
            Self::Country => member(allowed, user.country()),
            Self::Region => member(allowed, user.region()),
            Self::State => member(allowed, user.state()),
            Self::City => member(allowed, user.city()),
            Self::CostCenter => member(allowed, user.cost_center()),
        }
    }
}

fn member(allowed: &[String], value: Option<&str>) -> bool {
    value.is_some_and(|v| allowed.iter().any(|a| a == v))
}

/// Decides whether a catalog item is visible to a user.
///
/// Rules, in order:
///
/// 1. No user (anonymous context) → visible. Fail-open for
///    unauthenticated evaluation is a deliberate policy choice, not an
///    oversight; authentication is enforced upstream.
/// 2. Super-admin role → visible, regardless of geography.
/// 3. Otherwise every active gate must pass (logical AND).
///
/// Items without constraints pass trivially. The function is pure and
/// deterministic; it never fails.
#[must_use]
pub fn check_permission(item: &impl Restricted, user: Option<&UserProfile>) -> bool {
    let Some(user) = user else {
        return true;
    };

    if user.user_type == SUPER_ADMIN_ROLE {
        return true;
    }

    let Some(constraint) = item.constraint() else {
        return true;
    };

    Gate::ALL.iter().all(|gate| gate.passes(constraint, user))
}
