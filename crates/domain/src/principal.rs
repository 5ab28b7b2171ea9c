// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The role-bearing profile attached to an authenticated user.
///
/// `home_aimag_id` is the engineer's assigned region; `None` for an
/// engineer means the profile is misconfigured and the scope resolver
/// fails closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    /// Membership in the regional-engineer group.
    pub is_regional_engineer: bool,
    /// Membership in the workflow-reviewer group.
    pub is_workflow_reviewer: bool,
    /// The aimag a regional engineer is assigned to.
    pub home_aimag_id: Option<i64>,
    /// The district within the home aimag, when one is assigned.
    pub home_sum_id: Option<i64>,
    /// Whether the home aimag is the capital. District scoping only
    /// applies to capital-city engineers.
    pub home_is_capital: bool,
}

/// An authenticated caller as the authorization layer sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The canonical numeric user identifier.
    pub user_id: i64,
    /// The login name, kept for audit rows.
    pub username: String,
    /// Unconditional full access when set.
    pub is_superuser: bool,
    /// Group and region assignments.
    pub profile: Profile,
}

impl Principal {
    /// Creates a principal with no elevated roles.
    #[must_use]
    pub fn new(user_id: i64, username: &str) -> Self {
        Self {
            user_id,
            username: username.to_string(),
            is_superuser: false,
            profile: Profile::default(),
        }
    }

    /// Creates a superuser principal.
    #[must_use]
    pub fn superuser(user_id: i64, username: &str) -> Self {
        Self {
            user_id,
            username: username.to_string(),
            is_superuser: true,
            profile: Profile::default(),
        }
    }

    /// Creates a regional engineer assigned to an aimag.
    #[must_use]
    pub fn regional_engineer(user_id: i64, username: &str, home_aimag_id: Option<i64>) -> Self {
        Self {
            user_id,
            username: username.to_string(),
            is_superuser: false,
            profile: Profile {
                is_regional_engineer: true,
                is_workflow_reviewer: false,
                home_aimag_id,
                home_sum_id: None,
                home_is_capital: false,
            },
        }
    }

    /// Grants the workflow-reviewer role, builder style.
    #[must_use]
    pub fn as_reviewer(mut self) -> Self {
        self.profile.is_workflow_reviewer = true;
        self
    }

    /// Pins a capital-city engineer to one district, builder style.
    #[must_use]
    pub fn in_capital_district(mut self, sum_id: i64) -> Self {
        self.profile.home_is_capital = true;
        self.profile.home_sum_id = Some(sum_id);
        self
    }
}
