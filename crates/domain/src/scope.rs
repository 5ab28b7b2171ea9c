// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::principal::Principal;

/// The visibility window a principal gets over region-rooted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every row, no filter.
    All,
    /// Rows rooted at the given aimag. A sub-region id narrows the
    /// window further to one district; only capital-city engineers
    /// carry one.
    Region {
        aimag_id: i64,
        sum_id: Option<i64>,
    },
    /// No rows. A misconfigured engineer lands here, never in `All`.
    None,
}

impl Scope {
    /// A whole-aimag scope with no district restriction.
    #[must_use]
    pub const fn region(aimag_id: i64) -> Self {
        Self::Region {
            aimag_id,
            sum_id: None,
        }
    }

    /// Whether a row rooted at the given aimag is visible in this scope.
    ///
    /// Authorization decisions run at aimag granularity; the district
    /// restriction narrows what a query returns, not who may act.
    #[must_use]
    pub const fn permits(&self, aimag_id: i64) -> bool {
        match self {
            Self::All => true,
            Self::Region { aimag_id: own, .. } => *own == aimag_id,
            Self::None => false,
        }
    }
}

/// Resolves the visibility scope for a principal.
///
/// Superusers see everything. A regional engineer sees their assigned
/// aimag, or nothing when the assignment is missing. An engineer
/// assigned to the capital with a district on their profile is pinned
/// to that district. Remaining staff are central users and see
/// everything.
#[must_use]
pub const fn resolve_scope(principal: &Principal) -> Scope {
    if principal.is_superuser {
        return Scope::All;
    }
    if principal.profile.is_regional_engineer {
        return match principal.profile.home_aimag_id {
            Some(aimag_id) => Scope::Region {
                aimag_id,
                sum_id: if principal.profile.home_is_capital {
                    principal.profile.home_sum_id
                } else {
                    None
                },
            },
            None => Scope::None,
        };
    }
    Scope::All
}

/// Whether the principal may approve or reject submitted records.
#[must_use]
pub const fn can_review(principal: &Principal) -> bool {
    principal.is_superuser || principal.profile.is_workflow_reviewer
}

/// Whether the principal may delete rows at all.
///
/// Superusers only. Regional engineers never delete, even inside their
/// own aimag, and central staff read without deleting.
#[must_use]
pub const fn can_delete(principal: &Principal) -> bool {
    principal.is_superuser
}
