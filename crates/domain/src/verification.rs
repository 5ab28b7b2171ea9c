// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

/// How urgent a device's next metrological verification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationBucket {
    /// Verification date is in the past.
    Expired,
    /// Due within 30 days, today included.
    Due30,
    /// Due in 31 through 90 days.
    Due90,
    /// More than 90 days out.
    Ok,
    /// No verification date on file.
    Unknown,
}

impl VerificationBucket {
    /// Converts this bucket to its reporting label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::Due30 => "due_30",
            Self::Due90 => "due_90",
            Self::Ok => "ok",
            Self::Unknown => "unknown",
        }
    }
}

/// Classifies a device's next verification date relative to `today`.
#[must_use]
pub fn classify_verification_due(next_due: Option<Date>, today: Date) -> VerificationBucket {
    let Some(due) = next_due else {
        return VerificationBucket::Unknown;
    };
    let days = (due - today).whole_days();
    if days < 0 {
        VerificationBucket::Expired
    } else if days <= 30 {
        VerificationBucket::Due30
    } else if days <= 90 {
        VerificationBucket::Due90
    } else {
        VerificationBucket::Ok
    }
}

/// Per-bucket device counts for a verification dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerificationBuckets {
    /// Devices whose verification date is in the past.
    pub expired: u64,
    /// Devices due within 30 days.
    pub due_30: u64,
    /// Devices due in 31 through 90 days.
    pub due_90: u64,
    /// Devices with more than 90 days of margin.
    pub ok: u64,
    /// Devices with no verification date on file.
    pub unknown: u64,
}

impl VerificationBuckets {
    /// Adds one device to the bucket it classifies into.
    pub fn record(&mut self, bucket: VerificationBucket) {
        match bucket {
            VerificationBucket::Expired => self.expired += 1,
            VerificationBucket::Due30 => self.due_30 += 1,
            VerificationBucket::Due90 => self.due_90 += 1,
            VerificationBucket::Ok => self.ok += 1,
            VerificationBucket::Unknown => self.unknown += 1,
        }
    }

    /// Total devices counted across all buckets.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.expired + self.due_30 + self.due_90 + self.ok + self.unknown
    }
}
