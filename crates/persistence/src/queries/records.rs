// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workflow record reads and scoped listings.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use hydromet_domain::{RecordKind, Scope, WorkflowRecord, WorkflowStatus};

use crate::data_models::{PendingCounts, WorkflowRecordRow};
use crate::diesel_schema::{devices, locations, workflow_records};
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a workflow record by ID.
///
/// # Errors
///
/// Returns `RecordNotFound` if no row exists, or a hydration error if a
/// stored value fails domain parsing.
pub fn get_record(conn: &mut _, record_id: i64) -> Result<WorkflowRecord, PersistenceError> {
    let row: Option<WorkflowRecordRow> = workflow_records::table
        .filter(workflow_records::record_id.eq(record_id))
        .select(workflow_records::all_columns)
        .first::<WorkflowRecordRow>(conn)
        .optional()?;

    row.map_or(
        Err(PersistenceError::RecordNotFound(record_id)),
        WorkflowRecordRow::into_record,
    )
}
}

backend_fn! {
/// Resolves the aimag a record is rooted at, via its device's location.
///
/// Records whose device has no location resolve to `None`; callers
/// decide whether an unplaced record is actionable for their scope.
///
/// # Errors
///
/// Returns `RecordNotFound` if the record does not exist.
pub fn lookup_record_aimag(
    conn: &mut _,
    record_id: i64,
) -> Result<Option<i64>, PersistenceError> {
    let aimag: Option<Option<i64>> = workflow_records::table
        .inner_join(devices::table.left_join(locations::table))
        .filter(workflow_records::record_id.eq(record_id))
        .select(locations::aimag_id.nullable())
        .first(conn)
        .optional()?;

    aimag.map_or(Err(PersistenceError::RecordNotFound(record_id)), Ok)
}
}

backend_fn! {
/// Lists workflow records visible in a scope, optionally filtered by
/// state and record kind, ordered by record ID.
///
/// `Scope::None` returns an empty list without querying.
///
/// # Errors
///
/// Returns an error if the query fails or a row fails domain parsing.
pub fn records_in_scope(
    conn: &mut _,
    scope: Scope,
    status: Option<WorkflowStatus>,
    kind: Option<RecordKind>,
) -> Result<Vec<WorkflowRecord>, PersistenceError> {
    let rows: Vec<WorkflowRecordRow> = match scope {
        Scope::None => Vec::new(),
        Scope::All => {
            let mut query = workflow_records::table
                .select(workflow_records::all_columns)
                .order(workflow_records::record_id.asc())
                .into_boxed();
            if let Some(status) = status {
                query = query.filter(workflow_records::workflow_status.eq(status.as_str()));
            }
            if let Some(kind) = kind {
                query = query.filter(workflow_records::record_kind.eq(kind.as_str()));
            }
            query.load::<WorkflowRecordRow>(conn)?
        }
        Scope::Region { aimag_id, sum_id } => {
            let mut query = workflow_records::table
                .inner_join(devices::table.inner_join(locations::table))
                .filter(locations::aimag_id.eq(aimag_id))
                .select(workflow_records::all_columns)
                .order(workflow_records::record_id.asc())
                .into_boxed();
            if let Some(sum_id) = sum_id {
                query = query.filter(locations::sum_id.eq(sum_id));
            }
            if let Some(status) = status {
                query = query.filter(workflow_records::workflow_status.eq(status.as_str()));
            }
            if let Some(kind) = kind {
                query = query.filter(workflow_records::record_kind.eq(kind.as_str()));
            }
            query.load::<WorkflowRecordRow>(conn)?
        }
    };

    rows.into_iter()
        .map(WorkflowRecordRow::into_record)
        .collect()
}
}

backend_fn! {
/// Counts submitted records awaiting review in a scope, per kind.
///
/// # Errors
///
/// Returns an error if a count query fails.
pub fn pending_counts(conn: &mut _, scope: Scope) -> Result<PendingCounts, PersistenceError> {
    let count_kind = |conn: &mut _, kind: RecordKind| -> Result<i64, PersistenceError> {
        match scope {
            Scope::None => Ok(0),
            Scope::All => Ok(workflow_records::table
                .filter(
                    workflow_records::workflow_status.eq(WorkflowStatus::Submitted.as_str()),
                )
                .filter(workflow_records::record_kind.eq(kind.as_str()))
                .count()
                .get_result(conn)?),
            Scope::Region { aimag_id, sum_id } => {
                let mut query = workflow_records::table
                    .inner_join(devices::table.inner_join(locations::table))
                    .filter(locations::aimag_id.eq(aimag_id))
                    .filter(
                        workflow_records::workflow_status.eq(WorkflowStatus::Submitted.as_str()),
                    )
                    .filter(workflow_records::record_kind.eq(kind.as_str()))
                    .count()
                    .into_boxed();
                if let Some(sum_id) = sum_id {
                    query = query.filter(locations::sum_id.eq(sum_id));
                }
                Ok(query.get_result(conn)?)
            }
        }
    };

    Ok(PendingCounts {
        maintenance: count_kind(conn, RecordKind::Maintenance)?,
        control: count_kind(conn, RecordKind::Control)?,
    })
}
}
