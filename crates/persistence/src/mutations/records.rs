// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workflow record inserts and guarded transitions.
//!
//! A transition persists atomically: the record update and its audit
//! event commit together or not at all. The update is guarded by the
//! expected current state so concurrent reviewers cannot double-apply
//! a transition; the loser's update matches zero rows and the whole
//! transaction rolls back.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use hydromet_domain::{WorkflowRecord, WorkflowStatus};
use hydromet_workflow::TransitionResult;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::{TransitionColumns, encode_date, encode_timestamp};
use crate::diesel_schema::{audit_events, workflow_records};
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new workflow record and returns its assigned ID.
///
/// The record is stored in whatever state it carries; new records
/// normally arrive in Draft.
///
/// # Errors
///
/// Returns an error if the insert fails or the device does not exist.
pub fn insert_record(conn: &mut _, record: &WorkflowRecord) -> Result<i64, PersistenceError> {
    debug!("Inserting workflow record for device {}", record.device_id);

    let event_date: String = encode_date(record.date)?;
    let created_at: String = record
        .created_at
        .map(encode_timestamp)
        .transpose()?
        .ok_or_else(|| {
            PersistenceError::DataIntegrity("record has no creation timestamp".to_string())
        })?;

    diesel::insert_into(workflow_records::table)
        .values((
            workflow_records::device_id.eq(record.device_id),
            workflow_records::record_kind.eq(record.kind().as_str()),
            workflow_records::event_date.eq(&event_date),
            workflow_records::detail_value.eq(record.detail.value_str()),
            workflow_records::performer_type.eq(record.performer.type_str()),
            workflow_records::performer_name.eq(record.performer.name()),
            workflow_records::note.eq(&record.note),
            workflow_records::workflow_status.eq(record.status.as_str()),
            workflow_records::self_verified.eq(i32::from(record.self_verified)),
            workflow_records::central_verified.eq(i32::from(record.central_verified)),
            workflow_records::central_review_required
                .eq(i32::from(record.central_review_required)),
            workflow_records::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Applies a transition result atomically and returns the audit event ID.
///
/// The record row is updated only while it is still in `expected_from`;
/// a concurrent transition that got there first makes the guarded update
/// match zero rows, and the transaction aborts with `StaleRecord`.
///
/// # Errors
///
/// Returns an error if:
/// - The record is no longer in the expected state
/// - The record or audit event cannot be written
pub fn apply_transition(
    conn: &mut _,
    expected_from: WorkflowStatus,
    result: &TransitionResult,
) -> Result<i64, PersistenceError> {
    let record: &WorkflowRecord = &result.new_record;
    let record_id: i64 = record.record_id.ok_or_else(|| {
        PersistenceError::DataIntegrity("cannot transition an unpersisted record".to_string())
    })?;

    info!(
        "Applying transition {} -> {} for record {}",
        expected_from.as_str(),
        record.status.as_str(),
        record_id
    );

    let columns: TransitionColumns = TransitionColumns::from_record(record)?;
    let changes_json: String = serde_json::to_string(&result.audit_event.changes)?;
    let occurred_at: String = encode_timestamp(result.audit_event.occurred_at)?;

    conn.transaction(|conn| {
        let updated: usize = diesel::update(workflow_records::table)
            .filter(workflow_records::record_id.eq(record_id))
            .filter(workflow_records::workflow_status.eq(expected_from.as_str()))
            .set((
                workflow_records::workflow_status.eq(&columns.workflow_status),
                workflow_records::submitted_at.eq(columns.submitted_at.as_deref()),
                workflow_records::submitted_by.eq(columns.submitted_by),
                workflow_records::approved_at.eq(columns.approved_at.as_deref()),
                workflow_records::approved_by.eq(columns.approved_by),
                workflow_records::rejected_at.eq(columns.rejected_at.as_deref()),
                workflow_records::rejected_by.eq(columns.rejected_by),
                workflow_records::reject_reason.eq(columns.reject_reason.as_deref()),
                workflow_records::self_verified.eq(columns.self_verified),
                workflow_records::central_verified.eq(columns.central_verified),
            ))
            .execute(conn)?;

        if updated == 0 {
            return Err(PersistenceError::StaleRecord {
                record_id,
                expected: expected_from,
            });
        }

        let event = &result.audit_event;
        diesel::insert_into(audit_events::table)
            .values((
                audit_events::actor_user_id.eq(event.actor.user_id()),
                audit_events::actor_username.eq(event.actor.display_name()),
                audit_events::action.eq(event.action.as_str()),
                audit_events::model.eq(&event.model),
                audit_events::object_pk.eq(&event.object_pk),
                audit_events::object_repr.eq(&event.object_repr),
                audit_events::changes_json.eq(&changes_json),
                audit_events::detail.eq(event.detail.as_deref()),
                audit_events::ip_address.eq(event.ip_address.as_deref()),
                audit_events::occurred_at.eq(&occurred_at),
            ))
            .execute(conn)?;

        conn.get_last_insert_rowid()
    })
}
}
