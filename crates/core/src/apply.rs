// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::WorkflowCommand;
use crate::error::CoreError;
use crate::state::TransitionResult;
use hydromet_audit::{Actor, AuditAction, AuditEvent, FieldChange};
use hydromet_domain::{
    Principal, Scope, WorkflowRecord, WorkflowStatus, can_review, resolve_scope,
    validate_reject_reason,
};
use time::OffsetDateTime;

/// Applies a workflow command to a record, producing the updated record
/// and exactly one audit event.
///
/// The function is pure: it never touches storage and never mutates its
/// input. Callers persist the result in a single transaction guarded by
/// the record's expected current state.
///
/// # Arguments
///
/// * `record` - The record in its current state (immutable)
/// * `command` - The transition to perform
/// * `principal` - The authenticated caller
/// * `record_aimag_id` - The aimag the record's device is rooted at, or
///   `None` when the device has no location; only all-region callers
///   may act on unplaced records
/// * `now` - The transition timestamp
///
/// # Returns
///
/// * `Ok(TransitionResult)` with the new record and audit event
/// * `Err(CoreError)` if the transition is invalid or denied
///
/// # Errors
///
/// Returns an error if:
/// - The record's aimag is outside the caller's scope
/// - The caller lacks the reviewer role for Approve/Reject
/// - The command is not valid from the record's current state
/// - A Reject carries no reason
pub fn apply(
    record: &WorkflowRecord,
    command: &WorkflowCommand,
    principal: &Principal,
    record_aimag_id: Option<i64>,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let scope = resolve_scope(principal);
    let permitted = match record_aimag_id {
        Some(aimag_id) => scope.permits(aimag_id),
        None => matches!(scope, Scope::All),
    };
    if !permitted {
        return Err(CoreError::AuthorizationDenied(String::from(
            "the record is outside the caller's scope",
        )));
    }

    match command {
        WorkflowCommand::Submit => submit(record, principal, now, WorkflowStatus::Draft),
        WorkflowCommand::Resubmit => submit(record, principal, now, WorkflowStatus::Rejected),
        WorkflowCommand::Approve => approve(record, principal, now),
        WorkflowCommand::Reject { reason } => reject(record, principal, now, reason),
    }
}

fn submit(
    record: &WorkflowRecord,
    principal: &Principal,
    now: OffsetDateTime,
    expected_from: WorkflowStatus,
) -> Result<TransitionResult, CoreError> {
    let attempted: &'static str = if expected_from == WorkflowStatus::Rejected {
        "resubmit"
    } else {
        "submit"
    };
    if record.status != expected_from
        || !record.status.can_transition_to(WorkflowStatus::Submitted)
    {
        return Err(CoreError::InvalidTransition {
            from: record.status,
            attempted,
        });
    }

    let mut new_record: WorkflowRecord = record.clone();
    new_record.status = WorkflowStatus::Submitted;
    new_record.submitted_at = Some(now);
    new_record.submitted_by = Some(principal.user_id);

    let mut audit_event: AuditEvent =
        transition_event(record, &new_record, principal, AuditAction::Submit, now);
    if expected_from == WorkflowStatus::Rejected {
        audit_event = audit_event.with_detail("resubmitted after rejection");
    }

    Ok(TransitionResult {
        new_record,
        audit_event,
    })
}

fn approve(
    record: &WorkflowRecord,
    principal: &Principal,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    require_reviewer(principal, "approve")?;
    if !record.status.can_transition_to(WorkflowStatus::Approved) {
        return Err(CoreError::InvalidTransition {
            from: record.status,
            attempted: "approve",
        });
    }
    if record.central_review_required && !principal.is_superuser {
        return Err(CoreError::AuthorizationDenied(String::from(
            "record requires central review",
        )));
    }

    let mut new_record: WorkflowRecord = record.clone();
    new_record.status = WorkflowStatus::Approved;
    new_record.approved_at = Some(now);
    new_record.approved_by = Some(principal.user_id);
    // An approval supersedes any earlier rejection outright.
    new_record.rejected_at = None;
    new_record.rejected_by = None;
    new_record.reject_reason = None;
    new_record.self_verified = true;
    if principal.is_superuser || !principal.profile.is_regional_engineer {
        new_record.central_verified = true;
    }

    let audit_event: AuditEvent =
        transition_event(record, &new_record, principal, AuditAction::Approve, now);

    Ok(TransitionResult {
        new_record,
        audit_event,
    })
}

fn reject(
    record: &WorkflowRecord,
    principal: &Principal,
    now: OffsetDateTime,
    reason: &str,
) -> Result<TransitionResult, CoreError> {
    require_reviewer(principal, "reject")?;
    if !record.status.can_transition_to(WorkflowStatus::Rejected) {
        return Err(CoreError::InvalidTransition {
            from: record.status,
            attempted: "reject",
        });
    }
    validate_reject_reason(Some(reason))?;

    let mut new_record: WorkflowRecord = record.clone();
    new_record.status = WorkflowStatus::Rejected;
    new_record.rejected_at = Some(now);
    new_record.rejected_by = Some(principal.user_id);
    new_record.reject_reason = Some(reason.trim().to_string());
    new_record.approved_at = None;
    new_record.approved_by = None;

    let audit_event: AuditEvent =
        transition_event(record, &new_record, principal, AuditAction::Reject, now)
            .with_detail(reason.trim());

    Ok(TransitionResult {
        new_record,
        audit_event,
    })
}

fn require_reviewer(principal: &Principal, attempted: &str) -> Result<(), CoreError> {
    if can_review(principal) {
        Ok(())
    } else {
        Err(CoreError::AuthorizationDenied(format!(
            "the {attempted} command requires the reviewer role"
        )))
    }
}

fn transition_event(
    before: &WorkflowRecord,
    after: &WorkflowRecord,
    principal: &Principal,
    action: AuditAction,
    now: OffsetDateTime,
) -> AuditEvent {
    let object_pk: String = after
        .record_id
        .map_or_else(|| String::from("new"), |id| id.to_string());
    AuditEvent::new(
        Actor::from_principal(principal),
        action,
        after.kind().model_label(),
        &object_pk,
        &after.object_repr(),
        now,
    )
    .with_changes(vec![FieldChange::new(
        "workflow_status",
        before.status.as_str(),
        after.status.as_str(),
    )])
}
