// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Append-only audit event persistence.
//!
//! Events are inserted and never updated or deleted. Workflow transition
//! events are written by `records::apply_transition` inside the same
//! transaction as the guarded record update; this module also serves
//! standalone events (creation, lifecycle, security).

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use hydromet_audit::AuditEvent;
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::data_models::encode_timestamp;
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

backend_fn! {
/// Persists an audit event and returns its assigned event ID.
///
/// # Errors
///
/// Returns an error if persistence or serialization fails.
pub fn persist_audit_event(conn: &mut _, event: &AuditEvent) -> Result<i64, PersistenceError> {
    debug!("Persisting audit event: {} {}", event.action, event.object_pk);

    let changes_json: String = serde_json::to_string(&event.changes)?;
    let occurred_at: String = encode_timestamp(event.occurred_at)?;

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
}
}
