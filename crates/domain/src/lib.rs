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

mod device;
mod error;
mod location;
mod principal;
mod record;
mod region;
mod scope;
mod validation;
mod verification;

#[cfg(test)]
mod tests;

pub use device::{Device, DeviceKind, DeviceStatus};
pub use error::DomainError;
pub use location::{Location, LocationType};
pub use principal::{Principal, Profile};
pub use record::{
    ControlResult, MaintenanceReason, Performer, RecordDetail, RecordKind, WorkflowRecord,
    WorkflowStatus,
};
pub use region::{Aimag, SumDuureg};
pub use scope::{Scope, can_delete, can_review, resolve_scope};
pub use validation::{validate_coordinates, validate_reject_reason, validate_serial_number};
pub use verification::{VerificationBucket, VerificationBuckets, classify_verification_due};
