// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A top-level administrative region (province-equivalent).
///
/// Aimags are the unit of row-level visibility scoping: a regional
/// engineer sees only data whose location belongs to their aimag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aimag {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the aimag has not been persisted yet.
    aimag_id: Option<i64>,
    /// The region name (e.g., "Arkhangai", "Ulaanbaatar").
    name: String,
    /// Short administrative code.
    code: String,
    /// Whether this region is the capital. District-level scoping only
    /// applies inside the capital.
    is_capital: bool,
}

// Two Aimags are equal if they have the same name, regardless of their IDs
impl PartialEq for Aimag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Aimag {}

impl Aimag {
    /// Creates a new `Aimag` without a persisted ID.
    #[must_use]
    pub fn new(name: &str, code: &str, is_capital: bool) -> Self {
        Self {
            aimag_id: None,
            name: name.to_string(),
            code: code.to_string(),
            is_capital,
        }
    }

    /// Creates an `Aimag` with an existing persisted ID.
    #[must_use]
    pub fn with_id(aimag_id: i64, name: &str, code: &str, is_capital: bool) -> Self {
        Self {
            aimag_id: Some(aimag_id),
            name: name.to_string(),
            code: code.to_string(),
            is_capital,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn aimag_id(&self) -> Option<i64> {
        self.aimag_id
    }

    /// Returns the region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the administrative code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns whether this region is the capital.
    #[must_use]
    pub const fn is_capital(&self) -> bool {
        self.is_capital
    }
}

/// A sub-region (county or capital district).
///
/// A sub-region belongs to exactly one aimag. The capital's nine urban
/// districts carry `is_ub_district` and participate in district-level
/// scoping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumDuureg {
    /// The canonical numeric identifier assigned by the database.
    sum_id: Option<i64>,
    /// The owning aimag's identifier.
    aimag_id: i64,
    /// The sub-region name.
    name: String,
    /// Short administrative code.
    code: String,
    /// Whether this is one of the capital's urban districts.
    is_ub_district: bool,
}

impl PartialEq for SumDuureg {
    fn eq(&self, other: &Self) -> bool {
        self.aimag_id == other.aimag_id && self.name == other.name
    }
}

impl Eq for SumDuureg {}

impl SumDuureg {
    /// Creates a new `SumDuureg` without a persisted ID.
    #[must_use]
    pub fn new(aimag_id: i64, name: &str, code: &str, is_ub_district: bool) -> Self {
        Self {
            sum_id: None,
            aimag_id,
            name: name.to_string(),
            code: code.to_string(),
            is_ub_district,
        }
    }

    /// Creates a `SumDuureg` with an existing persisted ID.
    #[must_use]
    pub fn with_id(
        sum_id: i64,
        aimag_id: i64,
        name: &str,
        code: &str,
        is_ub_district: bool,
    ) -> Self {
        Self {
            sum_id: Some(sum_id),
            aimag_id,
            name: name.to_string(),
            code: code.to_string(),
            is_ub_district,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn sum_id(&self) -> Option<i64> {
        self.sum_id
    }

    /// Returns the owning aimag's identifier.
    #[must_use]
    pub const fn aimag_id(&self) -> i64 {
        self.aimag_id
    }

    /// Returns the sub-region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the administrative code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns whether this is a capital urban district.
    #[must_use]
    pub const fn is_ub_district(&self) -> bool {
        self.is_ub_district
    }
}
