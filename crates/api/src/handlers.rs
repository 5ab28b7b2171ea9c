// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, OffsetDateTime};
use tracing::{debug, info};

use hydromet_audit::{Actor, AuditAction, AuditEvent};
use hydromet_domain::{
    Principal, RecordKind, Scope, VerificationBuckets, WorkflowRecord, classify_verification_due,
    resolve_scope,
};
use hydromet_persistence::{AuditQuery, PendingCounts, Persistence};
use hydromet_workflow::{WorkflowCommand, apply};

use crate::error::ApiError;

/// Result alias used by every operation in this crate.
pub type ApiResult<T> = Result<T, ApiError>;

/// Creates a new draft record for a device inside the caller's scope.
///
/// Creation itself is not audited; the first audit row for a record is
/// its SUBMIT event.
///
/// # Errors
///
/// Returns `AuthorizationDenied` when the device's aimag is outside the
/// caller's scope, `ResolutionError` when the device has no resolvable
/// aimag and the caller is regionally restricted, or a persistence
/// error translated into the `ApiError` taxonomy.
pub fn create_record(
    persistence: &mut Persistence,
    new_record: &WorkflowRecord,
    principal: &Principal,
) -> ApiResult<WorkflowRecord> {
    let device_aimag = persistence.lookup_device_aimag(new_record.device_id)?;

    match (resolve_scope(principal), device_aimag) {
        (Scope::All, _) => {}
        (Scope::Region { .. }, None) => {
            return Err(ApiError::ResolutionError(format!(
                "device {} has no aimag; a regionally scoped caller cannot claim it",
                new_record.device_id
            )));
        }
        (scope @ Scope::Region { .. }, Some(aimag_id)) => {
            if !scope.permits(aimag_id) {
                return Err(ApiError::AuthorizationDenied(format!(
                    "device {} belongs to aimag {aimag_id}, outside the caller's scope",
                    new_record.device_id
                )));
            }
        }
        (Scope::None, _) => {
            return Err(ApiError::AuthorizationDenied(format!(
                "user '{}' has no region assignment",
                principal.username
            )));
        }
    }

    let mut record = new_record.clone();
    if record.created_at.is_none() {
        record.created_at = Some(OffsetDateTime::now_utc());
    }
    let record_id = persistence.insert_record(&record)?;
    info!(record_id, device_id = record.device_id, "record created");
    Ok(persistence.get_record(record_id)?)
}

/// Sends a draft record for review.
///
/// # Errors
///
/// Returns `InvalidTransition` when the record is not in Draft,
/// `AuthorizationDenied` when the record is outside the caller's scope,
/// or `ResourceNotFound` when the record does not exist.
pub fn submit(
    persistence: &mut Persistence,
    record_id: i64,
    principal: &Principal,
    ip: Option<&str>,
) -> ApiResult<WorkflowRecord> {
    run_transition(persistence, record_id, &WorkflowCommand::Submit, principal, ip)
}

/// Accepts a submitted record.
///
/// # Errors
///
/// Returns `InvalidTransition` when the record is not Submitted or a
/// concurrent writer already moved it, `AuthorizationDenied` when the
/// caller may not review it.
pub fn approve(
    persistence: &mut Persistence,
    record_id: i64,
    principal: &Principal,
    ip: Option<&str>,
) -> ApiResult<WorkflowRecord> {
    run_transition(persistence, record_id, &WorkflowCommand::Approve, principal, ip)
}

/// Returns a submitted record to its author with a mandatory reason.
///
/// # Errors
///
/// Returns `Validation` when the reason is blank, plus the same errors
/// as [`approve`].
pub fn reject(
    persistence: &mut Persistence,
    record_id: i64,
    principal: &Principal,
    reason: &str,
    ip: Option<&str>,
) -> ApiResult<WorkflowRecord> {
    let command = WorkflowCommand::Reject {
        reason: reason.to_string(),
    };
    run_transition(persistence, record_id, &command, principal, ip)
}

/// Re-sends a rejected record for review after corrections.
///
/// # Errors
///
/// Returns `InvalidTransition` when the record is not Rejected, plus
/// the same errors as [`submit`].
pub fn resubmit(
    persistence: &mut Persistence,
    record_id: i64,
    principal: &Principal,
    ip: Option<&str>,
) -> ApiResult<WorkflowRecord> {
    run_transition(persistence, record_id, &WorkflowCommand::Resubmit, principal, ip)
}

/// Loads a record, applies one workflow command, and persists the
/// updated record together with its audit event in one transaction.
fn run_transition(
    persistence: &mut Persistence,
    record_id: i64,
    command: &WorkflowCommand,
    principal: &Principal,
    ip: Option<&str>,
) -> ApiResult<WorkflowRecord> {
    let record = persistence.get_record(record_id)?;
    let record_aimag = persistence.lookup_record_aimag(record_id)?;
    if record_aimag.is_none() && !matches!(resolve_scope(principal), Scope::All) {
        return Err(ApiError::ResolutionError(format!(
            "record {record_id} has no resolvable aimag; a regionally scoped caller cannot act on it"
        )));
    }

    let mut result = apply(
        &record,
        command,
        principal,
        record_aimag,
        OffsetDateTime::now_utc(),
    )?;
    if let Some(ip) = ip {
        result.audit_event = result.audit_event.with_ip(ip);
    }

    persistence.apply_transition(record.status, &result)?;
    info!(
        record_id,
        command = command.name(),
        actor = %principal.username,
        "workflow transition applied"
    );
    Ok(result.new_record)
}

/// Lists the workflow records visible to the caller, optionally
/// narrowed to one record kind.
///
/// A regional engineer without a region assignment sees an empty list;
/// reads never error on unresolvable scope.
///
/// # Errors
///
/// Returns an error if the underlying query fails.
pub fn scoped_records(
    persistence: &mut Persistence,
    principal: &Principal,
    kind: Option<RecordKind>,
) -> ApiResult<Vec<WorkflowRecord>> {
    Ok(persistence.records_in_scope(resolve_scope(principal), None, kind)?)
}

/// Counts records awaiting review in the caller's scope, split by kind.
///
/// # Errors
///
/// Returns an error if the underlying query fails.
pub fn pending_counts(
    persistence: &mut Persistence,
    principal: &Principal,
) -> ApiResult<PendingCounts> {
    Ok(persistence.pending_counts(resolve_scope(principal))?)
}

/// Rebuilds the daily aggregate rows for one day.
///
/// Passing `Some(aimag_id)` rebuilds only that aimag's bucket; `None`
/// rebuilds every bucket plus the overall row. Returns the number of
/// rows written.
///
/// # Errors
///
/// Returns an error if the materialization fails.
pub fn materialize_day(
    persistence: &mut Persistence,
    day: Date,
    only_aimag: Option<i64>,
) -> ApiResult<usize> {
    Ok(persistence.materialize_day(day, only_aimag, OffsetDateTime::now_utc())?)
}

/// Rebuilds the daily aggregates for every day in an inclusive range.
///
/// The bounds are normalized, so a reversed range is accepted. Returns
/// the total number of rows written across all days.
///
/// # Errors
///
/// Returns an error if any day's materialization fails; earlier days
/// stay written.
pub fn materialize_range(
    persistence: &mut Persistence,
    from: Date,
    to: Date,
) -> ApiResult<usize> {
    let (start, end) = if from <= to { (from, to) } else { (to, from) };

    let mut total = 0;
    let mut day = start;
    loop {
        total += materialize_day(persistence, day, None)?;
        if day == end {
            break;
        }
        day = day.next_day().ok_or_else(|| {
            ApiError::Internal(format!("calendar overflow advancing past {day}"))
        })?;
    }
    debug!(%start, %end, total, "materialized date range");
    Ok(total)
}

/// Classifies every device visible to the caller by verification
/// urgency, bucketed against today's date.
///
/// # Errors
///
/// Returns an error if the underlying query fails.
pub fn verification_buckets(
    persistence: &mut Persistence,
    principal: &Principal,
) -> ApiResult<VerificationBuckets> {
    let today = OffsetDateTime::now_utc().date();
    let mut buckets = VerificationBuckets::default();
    for next_due in persistence.verification_dates(resolve_scope(principal))? {
        buckets.record(classify_verification_due(next_due, today));
    }
    Ok(buckets)
}

/// Lists audit events matching a filter, newest first.
///
/// # Errors
///
/// Returns an error if the underlying query fails.
pub fn audit_timeline(
    persistence: &mut Persistence,
    filter: &AuditQuery,
) -> ApiResult<Vec<AuditEvent>> {
    Ok(persistence.audit_events(filter)?)
}

/// Records an authentication or credential event in the audit log.
///
/// `actor` is `None` for failed logins where no user was resolved.
///
/// # Errors
///
/// Returns `Validation` when `action` is not a security action.
pub fn record_security_event(
    persistence: &mut Persistence,
    actor: Option<&Principal>,
    action: AuditAction,
    ip: Option<&str>,
) -> ApiResult<i64> {
    if !action.is_security() {
        return Err(ApiError::Validation(format!(
            "{} is a workflow action, not a security action",
            action.as_str()
        )));
    }

    let actor = actor.map_or(Actor::System, Actor::from_principal);
    let object_pk = actor
        .user_id()
        .map_or_else(|| "-".to_string(), |id| id.to_string());
    let object_repr = actor.display_name().to_string();

    let mut event = AuditEvent::new(
        actor,
        action,
        "auth.User",
        &object_pk,
        &object_repr,
        OffsetDateTime::now_utc(),
    );
    if let Some(ip) = ip {
        event = event.with_ip(ip);
    }

    let event_id = persistence.persist_audit_event(&event)?;
    info!(event_id, action = action.as_str(), "security event recorded");
    Ok(event_id)
}
