// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    RECORD_AIMAG, create_control_record, create_engineer, create_reviewer,
};
use crate::{TransitionResult, WorkflowCommand, apply};
use hydromet_audit::AuditAction;
use hydromet_domain::{Principal, WorkflowRecord, WorkflowStatus};
use time::Duration;
use time::macros::datetime;

#[test]
fn test_reject_then_resubmit_then_approve() {
    let engineer: Principal = create_engineer();
    let reviewer: Principal = create_reviewer();
    let t0 = datetime!(2026-03-14 08:00 UTC);

    let draft: WorkflowRecord = create_control_record();

    let submitted: TransitionResult =
        apply(&draft, &WorkflowCommand::Submit, &engineer, Some(RECORD_AIMAG), t0).unwrap();
    assert_eq!(submitted.new_record.status, WorkflowStatus::Submitted);

    let rejected: TransitionResult = apply(
        &submitted.new_record,
        &WorkflowCommand::Reject {
            reason: String::from("serial number mismatch"),
        },
        &reviewer,
        Some(RECORD_AIMAG),
        t0 + Duration::hours(2),
    )
    .unwrap();
    assert_eq!(rejected.new_record.status, WorkflowStatus::Rejected);

    let resubmitted: TransitionResult = apply(
        &rejected.new_record,
        &WorkflowCommand::Resubmit,
        &engineer,
        Some(RECORD_AIMAG),
        t0 + Duration::hours(5),
    )
    .unwrap();
    assert_eq!(resubmitted.new_record.status, WorkflowStatus::Submitted);
    assert_eq!(
        resubmitted.new_record.submitted_at,
        Some(t0 + Duration::hours(5))
    );
    // The rejection history survives the correction round.
    assert_eq!(
        resubmitted.new_record.reject_reason.as_deref(),
        Some("serial number mismatch")
    );
    assert_eq!(resubmitted.audit_event.action, AuditAction::Submit);
    assert_eq!(
        resubmitted.audit_event.detail.as_deref(),
        Some("resubmitted after rejection")
    );

    let approved: TransitionResult = apply(
        &resubmitted.new_record,
        &WorkflowCommand::Approve,
        &reviewer,
        Some(RECORD_AIMAG),
        t0 + Duration::hours(8),
    )
    .unwrap();
    assert_eq!(approved.new_record.status, WorkflowStatus::Approved);
    assert_eq!(
        approved.new_record.approved_at,
        Some(t0 + Duration::hours(8))
    );
    // An approval wipes the earlier rejection.
    assert_eq!(approved.new_record.rejected_at, None);
    assert_eq!(approved.new_record.rejected_by, None);
    assert_eq!(approved.new_record.reject_reason, None);
}

#[test]
fn test_resubmit_requires_rejected_state() {
    let engineer: Principal = create_engineer();
    let draft: WorkflowRecord = create_control_record();

    let result = apply(
        &draft,
        &WorkflowCommand::Resubmit,
        &engineer,
        Some(RECORD_AIMAG),
        datetime!(2026-03-14 08:00 UTC),
    );

    assert!(result.is_err());
}

#[test]
fn test_sla_measures_final_submission_to_approval() {
    let engineer: Principal = create_engineer();
    let reviewer: Principal = create_reviewer();
    let t0 = datetime!(2026-03-14 08:00 UTC);

    let draft: WorkflowRecord = create_control_record();
    let submitted: TransitionResult =
        apply(&draft, &WorkflowCommand::Submit, &engineer, Some(RECORD_AIMAG), t0).unwrap();
    let approved: TransitionResult = apply(
        &submitted.new_record,
        &WorkflowCommand::Approve,
        &reviewer,
        Some(RECORD_AIMAG),
        t0 + Duration::hours(36),
    )
    .unwrap();

    let hours: f64 = approved.new_record.sla_hours().unwrap();
    assert!((hours - 36.0).abs() < f64::EPSILON);
}
