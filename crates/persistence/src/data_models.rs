// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and text encodings shared by queries and mutations.
//!
//! Timestamps are stored as RFC 3339 text and dates as ISO 8601 text so
//! that both backends use identical column types and ordering semantics.

use diesel::prelude::*;
use hydromet_audit::{Actor, AuditEvent, FieldChange};
use hydromet_domain::{Performer, RecordDetail, RecordKind, WorkflowRecord};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::PersistenceError;

const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Encodes a timestamp as RFC 3339 text.
pub fn encode_timestamp(ts: OffsetDateTime) -> Result<String, PersistenceError> {
    Ok(ts.format(&Rfc3339)?)
}

/// Decodes an RFC 3339 timestamp from text.
pub fn decode_timestamp(text: &str) -> Result<OffsetDateTime, PersistenceError> {
    Ok(OffsetDateTime::parse(text, &Rfc3339)?)
}

/// Encodes a date as ISO 8601 text.
pub fn encode_date(date: Date) -> Result<String, PersistenceError> {
    Ok(date.format(&DATE_FORMAT)?)
}

/// Decodes an ISO 8601 date from text.
pub fn decode_date(text: &str) -> Result<Date, PersistenceError> {
    Ok(Date::parse(text, &DATE_FORMAT)?)
}

fn encode_opt_timestamp(ts: Option<OffsetDateTime>) -> Result<Option<String>, PersistenceError> {
    ts.map(encode_timestamp).transpose()
}

fn decode_opt_timestamp(text: Option<&str>) -> Result<Option<OffsetDateTime>, PersistenceError> {
    text.map(decode_timestamp).transpose()
}

/// A `workflow_records` row as read from the database.
#[derive(Debug, Queryable)]
pub struct WorkflowRecordRow {
    pub record_id: i64,
    pub device_id: i64,
    pub record_kind: String,
    pub event_date: String,
    pub detail_value: String,
    pub performer_type: String,
    pub performer_name: String,
    pub note: String,
    pub workflow_status: String,
    pub submitted_at: Option<String>,
    pub submitted_by: Option<i64>,
    pub approved_at: Option<String>,
    pub approved_by: Option<i64>,
    pub rejected_at: Option<String>,
    pub rejected_by: Option<i64>,
    pub reject_reason: Option<String>,
    pub self_verified: i32,
    pub central_verified: i32,
    pub central_review_required: i32,
    pub created_at: String,
}

impl WorkflowRecordRow {
    /// Hydrates the domain record from its stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if any stored value fails domain parsing.
    pub fn into_record(self) -> Result<WorkflowRecord, PersistenceError> {
        let kind: RecordKind = self.record_kind.parse()?;
        Ok(WorkflowRecord {
            record_id: Some(self.record_id),
            device_id: self.device_id,
            date: decode_date(&self.event_date)?,
            detail: RecordDetail::parse(kind, &self.detail_value)?,
            performer: Performer::from_parts(&self.performer_type, &self.performer_name)?,
            note: self.note,
            status: self.workflow_status.parse()?,
            submitted_at: decode_opt_timestamp(self.submitted_at.as_deref())?,
            submitted_by: self.submitted_by,
            approved_at: decode_opt_timestamp(self.approved_at.as_deref())?,
            approved_by: self.approved_by,
            rejected_at: decode_opt_timestamp(self.rejected_at.as_deref())?,
            rejected_by: self.rejected_by,
            reject_reason: self.reject_reason,
            self_verified: self.self_verified != 0,
            central_verified: self.central_verified != 0,
            central_review_required: self.central_review_required != 0,
            created_at: Some(decode_timestamp(&self.created_at)?),
        })
    }
}

/// The encoded transition columns shared by the guarded update paths.
pub struct TransitionColumns {
    pub workflow_status: String,
    pub submitted_at: Option<String>,
    pub submitted_by: Option<i64>,
    pub approved_at: Option<String>,
    pub approved_by: Option<i64>,
    pub rejected_at: Option<String>,
    pub rejected_by: Option<i64>,
    pub reject_reason: Option<String>,
    pub self_verified: i32,
    pub central_verified: i32,
}

impl TransitionColumns {
    /// Encodes the post-transition column values from a domain record.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp cannot be formatted.
    pub fn from_record(record: &WorkflowRecord) -> Result<Self, PersistenceError> {
        Ok(Self {
            workflow_status: record.status.as_str().to_string(),
            submitted_at: encode_opt_timestamp(record.submitted_at)?,
            submitted_by: record.submitted_by,
            approved_at: encode_opt_timestamp(record.approved_at)?,
            approved_by: record.approved_by,
            rejected_at: encode_opt_timestamp(record.rejected_at)?,
            rejected_by: record.rejected_by,
            reject_reason: record.reject_reason.clone(),
            self_verified: i32::from(record.self_verified),
            central_verified: i32::from(record.central_verified),
        })
    }
}

/// A `devices` row as read from the database.
#[derive(Debug, Queryable)]
pub struct DeviceRow {
    pub device_id: i64,
    pub serial_number: String,
    pub kind: String,
    pub status: String,
    pub installation_date: Option<String>,
    pub lifespan_years: i32,
    pub next_verification_date: Option<String>,
    pub location_id: Option<i64>,
}

impl DeviceRow {
    /// Hydrates the domain device from its stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if any stored value fails domain parsing.
    pub fn into_device(self) -> Result<hydromet_domain::Device, PersistenceError> {
        let lifespan_years: u32 = u32::try_from(self.lifespan_years)
            .map_err(|e| PersistenceError::DataIntegrity(e.to_string()))?;
        Ok(hydromet_domain::Device {
            device_id: Some(self.device_id),
            serial_number: self.serial_number,
            kind: self.kind.parse()?,
            status: self.status.parse()?,
            installation_date: self.installation_date.as_deref().map(decode_date).transpose()?,
            lifespan_years,
            next_verification_date: self
                .next_verification_date
                .as_deref()
                .map(decode_date)
                .transpose()?,
            location_id: self.location_id,
        })
    }
}

/// An `audit_events` row as read from the database.
#[derive(Debug, Queryable)]
pub struct AuditEventRow {
    pub event_id: i64,
    pub actor_user_id: Option<i64>,
    pub actor_username: String,
    pub action: String,
    pub model: String,
    pub object_pk: String,
    pub object_repr: String,
    pub changes_json: String,
    pub detail: Option<String>,
    pub ip_address: Option<String>,
    pub occurred_at: String,
}

impl AuditEventRow {
    /// Hydrates the audit event from its stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if the changes payload or any stored value fails
    /// parsing.
    pub fn into_event(self) -> Result<AuditEvent, PersistenceError> {
        let actor: Actor = self.actor_user_id.map_or(Actor::System, |user_id| {
            Actor::User {
                user_id,
                username: self.actor_username.clone(),
            }
        });
        let changes: Vec<FieldChange> = serde_json::from_str(&self.changes_json)?;
        Ok(AuditEvent {
            event_id: Some(self.event_id),
            actor,
            action: self.action.parse()?,
            model: self.model,
            object_pk: self.object_pk,
            object_repr: self.object_repr,
            changes,
            detail: self.detail,
            ip_address: self.ip_address,
            occurred_at: decode_timestamp(&self.occurred_at)?,
        })
    }
}

/// Per-kind pending review counts, one bucket per record family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingCounts {
    /// Maintenance records awaiting review.
    pub maintenance: i64,
    /// Control records awaiting review.
    pub control: i64,
}

impl PendingCounts {
    /// Total records awaiting review.
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.maintenance + self.control
    }
}

/// Filters for audit timeline reads. Empty filters match everything;
/// results always come back newest first.
#[derive(Debug, Clone, Default)]
pub struct AuditQuery {
    /// Restrict to one audited model label.
    pub model: Option<String>,
    /// Restrict to one object's history (requires `model` to be useful).
    pub object_pk: Option<String>,
    /// Restrict to events performed by one user.
    pub actor_user_id: Option<i64>,
    /// Only events at or after this instant.
    pub since: Option<OffsetDateTime>,
    /// Only events strictly before this instant.
    pub until: Option<OffsetDateTime>,
    /// Cap the number of rows returned.
    pub limit: Option<i64>,
}

impl AuditQuery {
    /// A query for one object's full history.
    #[must_use]
    pub fn for_object(model: &str, object_pk: &str) -> Self {
        Self {
            model: Some(model.to_string()),
            object_pk: Some(object_pk.to_string()),
            ..Self::default()
        }
    }
}

/// A `workflow_daily_agg` row as read from the database.
///
/// `kind` and `location_type` are key columns reserved for finer
/// breakdowns; the materializer currently writes them empty.
#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct DailyAggRow {
    pub agg_id: i64,
    pub day: String,
    pub aimag_id: Option<i64>,
    pub kind: String,
    pub location_type: String,
    pub ms_submitted: i32,
    pub ms_approved: i32,
    pub ms_rejected: i32,
    pub ca_submitted: i32,
    pub ca_approved: i32,
    pub ca_rejected: i32,
    pub sla_avg_hours: f64,
    pub computed_at: String,
}
