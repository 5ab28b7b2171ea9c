// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Represents the lifecycle state of a workflow record.
///
/// Approved and Rejected are terminal under normal flow; a correction
/// path allows re-submission from Rejected back to Submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WorkflowStatus {
    /// Initial state after creation. Editable by the author.
    #[default]
    Draft,
    /// Awaiting review.
    Submitted,
    /// Accepted by a reviewer. Terminal.
    Approved,
    /// Returned by a reviewer with a reason. Re-submittable.
    Rejected,
}

impl WorkflowStatus {
    /// Converts this status to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - Draft → Submitted
    /// - Submitted → Approved
    /// - Submitted → Rejected
    /// - Rejected → Submitted
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft | Self::Rejected, Self::Submitted)
                | (Self::Submitted, Self::Approved | Self::Rejected)
        )
    }

    /// Returns whether this state accepts no further transitions besides
    /// the rejected-record correction path.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl FromStr for WorkflowStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "SUBMITTED" => Ok(Self::Submitted),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidWorkflowStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two record families that share the workflow.
///
/// The kind is resolved statically; optional capabilities are expressed
/// as `const fn`s here instead of runtime field probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Repair and servicing work on a device.
    Maintenance,
    /// Inspection and adjustment (control) of a device.
    Control,
}

impl RecordKind {
    /// Converts this kind to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "MAINTENANCE",
            Self::Control => "CONTROL",
        }
    }

    /// Returns the audit model label for records of this kind.
    #[must_use]
    pub const fn model_label(&self) -> &'static str {
        match self {
            Self::Maintenance => "workflow.MaintenanceRecord",
            Self::Control => "workflow.ControlRecord",
        }
    }

    /// Whether records of this kind carry a reject-reason field.
    ///
    /// Both kinds do today; the capability is explicit so the state
    /// machine never has to guess.
    #[must_use]
    pub const fn supports_reject_reason(&self) -> bool {
        match self {
            Self::Maintenance | Self::Control => true,
        }
    }

    /// Whether records of this kind participate in the two-tier
    /// self/central verification extension.
    #[must_use]
    pub const fn supports_central_review(&self) -> bool {
        match self {
            Self::Maintenance | Self::Control => true,
        }
    }
}

impl FromStr for RecordKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAINTENANCE" => Ok(Self::Maintenance),
            "CONTROL" => Ok(Self::Control),
            _ => Err(DomainError::InvalidRecordKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a maintenance intervention happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MaintenanceReason {
    /// Scheduled servicing.
    #[default]
    Normal,
    /// The device operates with limitations.
    Limited,
    /// The device stopped working.
    NotWorking,
}

impl MaintenanceReason {
    /// Converts this reason to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Limited => "LIMITED",
            Self::NotWorking => "NOT_WORKING",
        }
    }
}

impl FromStr for MaintenanceReason {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORMAL" => Ok(Self::Normal),
            "LIMITED" => Ok(Self::Limited),
            "NOT_WORKING" => Ok(Self::NotWorking),
            _ => Err(DomainError::InvalidMaintenanceReason(s.to_string())),
        }
    }
}

/// The outcome of a control/adjustment check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ControlResult {
    /// Within tolerance.
    #[default]
    Pass,
    /// Usable with limitations.
    Limited,
    /// Out of tolerance.
    Fail,
}

impl ControlResult {
    /// Converts this result to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Limited => "LIMITED",
            Self::Fail => "FAIL",
        }
    }
}

impl FromStr for ControlResult {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Self::Pass),
            "LIMITED" => Ok(Self::Limited),
            "FAIL" => Ok(Self::Fail),
            _ => Err(DomainError::InvalidControlResult(s.to_string())),
        }
    }
}

/// The kind-specific payload of a workflow record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordDetail {
    /// A maintenance record and why it happened.
    Maintenance {
        /// The maintenance reason.
        reason: MaintenanceReason,
    },
    /// A control record and its outcome.
    Control {
        /// The check outcome.
        result: ControlResult,
    },
}

impl RecordDetail {
    /// Returns the record kind this detail belongs to.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Maintenance { .. } => RecordKind::Maintenance,
            Self::Control { .. } => RecordKind::Control,
        }
    }

    /// Returns the persisted string representation of the detail value.
    #[must_use]
    pub const fn value_str(&self) -> &'static str {
        match self {
            Self::Maintenance { reason } => reason.as_str(),
            Self::Control { result } => result.as_str(),
        }
    }

    /// Parses a detail value for the given kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not valid for the kind.
    pub fn parse(kind: RecordKind, value: &str) -> Result<Self, DomainError> {
        match kind {
            RecordKind::Maintenance => Ok(Self::Maintenance {
                reason: value.parse()?,
            }),
            RecordKind::Control => Ok(Self::Control {
                result: value.parse()?,
            }),
        }
    }
}

/// Who carried out the work: exactly one of an engineer or an organization.
///
/// The original schema kept two mutually-exclusive name columns and
/// validated their exclusivity on save; the enum makes the invalid
/// combinations unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Performer {
    /// A named engineer.
    Engineer(String),
    /// A named contracted organization.
    Organization(String),
}

impl Performer {
    /// Persisted discriminant string.
    #[must_use]
    pub const fn type_str(&self) -> &'static str {
        match self {
            Self::Engineer(_) => "ENGINEER",
            Self::Organization(_) => "ORG",
        }
    }

    /// The performer's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Engineer(name) | Self::Organization(name) => name,
        }
    }

    /// Reassembles a performer from its persisted parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the type string is unknown or the name is empty.
    pub fn from_parts(performer_type: &str, name: &str) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidPerformer(
                "performer name must not be empty".to_string(),
            ));
        }
        match performer_type {
            "ENGINEER" => Ok(Self::Engineer(name.to_string())),
            "ORG" => Ok(Self::Organization(name.to_string())),
            _ => Err(DomainError::InvalidPerformer(format!(
                "unknown performer type: {performer_type}"
            ))),
        }
    }
}

/// A maintenance-service or control-adjustment record moving through the
/// approval workflow.
///
/// The device link is immutable after creation and records are never
/// physically deleted; a record only ever becomes invisible by scoping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    /// The canonical numeric identifier assigned by the database.
    pub record_id: Option<i64>,
    /// The owning device. Required, immutable after creation.
    pub device_id: i64,
    /// The event date.
    pub date: Date,
    /// The kind-specific payload (maintenance reason or control result).
    pub detail: RecordDetail,
    /// Who carried out the work.
    pub performer: Performer,
    /// Free-form notes.
    pub note: String,
    /// The current workflow state.
    pub status: WorkflowStatus,
    /// When the record was submitted for review.
    pub submitted_at: Option<OffsetDateTime>,
    /// Who submitted the record.
    pub submitted_by: Option<i64>,
    /// When the record was approved.
    pub approved_at: Option<OffsetDateTime>,
    /// Who approved the record.
    pub approved_by: Option<i64>,
    /// When the record was rejected.
    pub rejected_at: Option<OffsetDateTime>,
    /// Who rejected the record.
    pub rejected_by: Option<i64>,
    /// Why the record was rejected.
    pub reject_reason: Option<String>,
    /// Set when a reviewer in the record's own region verified it.
    pub self_verified: bool,
    /// Set when central authority verified it.
    pub central_verified: bool,
    /// Whether approval requires central authority.
    pub central_review_required: bool,
    /// When the record row was created.
    pub created_at: Option<OffsetDateTime>,
}

impl WorkflowRecord {
    /// Creates a new record in Draft.
    #[must_use]
    pub fn new(device_id: i64, date: Date, detail: RecordDetail, performer: Performer) -> Self {
        Self {
            record_id: None,
            device_id,
            date,
            detail,
            performer,
            note: String::new(),
            status: WorkflowStatus::Draft,
            submitted_at: None,
            submitted_by: None,
            approved_at: None,
            approved_by: None,
            rejected_at: None,
            rejected_by: None,
            reject_reason: None,
            self_verified: false,
            central_verified: false,
            central_review_required: false,
            created_at: None,
        }
    }

    /// Returns the record kind.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        self.detail.kind()
    }

    /// A short human-readable representation used in audit rows.
    #[must_use]
    pub fn object_repr(&self) -> String {
        format!(
            "device #{} - {} ({})",
            self.device_id,
            self.detail.value_str(),
            self.date
        )
    }

    /// Review latency in hours, when both timestamps are present.
    ///
    /// Records missing either timestamp return `None` and must be
    /// excluded from SLA averaging, never counted as zero.
    #[must_use]
    pub fn sla_hours(&self) -> Option<f64> {
        let submitted = self.submitted_at?;
        let approved = self.approved_at?;
        let seconds = (approved - submitted).whole_seconds();
        #[allow(clippy::cast_precision_loss)]
        Some(seconds as f64 / 3600.0)
    }
}
