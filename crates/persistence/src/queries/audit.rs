// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit timeline reads.
//!
//! All listings come back newest first, ties broken by event ID so the
//! order is total even when two events share a timestamp.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use hydromet_audit::AuditEvent;

use crate::data_models::{AuditEventRow, AuditQuery, encode_timestamp};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

/// Actions that belong to the security timeline.
const SECURITY_ACTIONS: [&str; 4] = [
    "LOGIN_SUCCESS",
    "LOGIN_FAILED",
    "FORCED_PW_CHANGE",
    "PASSWORD_CHANGED",
];

backend_fn! {
/// Retrieves an audit event by ID.
///
/// # Errors
///
/// Returns `EventNotFound` if no row exists, or a hydration error if the
/// stored payload cannot be parsed.
pub fn get_audit_event(conn: &mut _, event_id: i64) -> Result<AuditEvent, PersistenceError> {
    let row: Option<AuditEventRow> = audit_events::table
        .filter(audit_events::event_id.eq(event_id))
        .select(audit_events::all_columns)
        .first::<AuditEventRow>(conn)
        .optional()?;

    row.map_or(
        Err(PersistenceError::EventNotFound(event_id)),
        AuditEventRow::into_event,
    )
}
}

backend_fn! {
/// Lists audit events matching a filter, newest first.
///
/// Timestamps are stored as RFC 3339 text in UTC, so the textual range
/// comparison is chronological.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be parsed.
pub fn audit_events_matching(
    conn: &mut _,
    filter: &AuditQuery,
) -> Result<Vec<AuditEvent>, PersistenceError> {
    let mut query = audit_events::table
        .select(audit_events::all_columns)
        .order((audit_events::occurred_at.desc(), audit_events::event_id.desc()))
        .into_boxed();

    if let Some(model) = &filter.model {
        query = query.filter(audit_events::model.eq(model));
    }
    if let Some(object_pk) = &filter.object_pk {
        query = query.filter(audit_events::object_pk.eq(object_pk));
    }
    if let Some(actor_user_id) = filter.actor_user_id {
        query = query.filter(audit_events::actor_user_id.eq(actor_user_id));
    }
    if let Some(since) = filter.since {
        query = query.filter(audit_events::occurred_at.ge(encode_timestamp(since)?));
    }
    if let Some(until) = filter.until {
        query = query.filter(audit_events::occurred_at.lt(encode_timestamp(until)?));
    }
    if let Some(limit) = filter.limit {
        query = query.limit(limit);
    }

    let rows: Vec<AuditEventRow> = query.load::<AuditEventRow>(conn)?;
    rows.into_iter().map(AuditEventRow::into_event).collect()
}
}

backend_fn! {
/// Lists all audit events for one object, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be parsed.
pub fn audit_timeline(
    conn: &mut _,
    model: &str,
    object_pk: &str,
) -> Result<Vec<AuditEvent>, PersistenceError> {
    let rows: Vec<AuditEventRow> = audit_events::table
        .filter(audit_events::model.eq(model))
        .filter(audit_events::object_pk.eq(object_pk))
        .order((audit_events::occurred_at.desc(), audit_events::event_id.desc()))
        .select(audit_events::all_columns)
        .load::<AuditEventRow>(conn)?;

    rows.into_iter().map(AuditEventRow::into_event).collect()
}
}

backend_fn! {
/// Lists security events (logins, credential changes), newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be parsed.
pub fn security_events(conn: &mut _, limit: i64) -> Result<Vec<AuditEvent>, PersistenceError> {
    let rows: Vec<AuditEventRow> = audit_events::table
        .filter(audit_events::action.eq_any(SECURITY_ACTIONS))
        .order((audit_events::occurred_at.desc(), audit_events::event_id.desc()))
        .limit(limit)
        .select(audit_events::all_columns)
        .load::<AuditEventRow>(conn)?;

    rows.into_iter().map(AuditEventRow::into_event).collect()
}
}
