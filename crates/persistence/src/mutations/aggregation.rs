// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Daily aggregate materialization.
//!
//! `materialize_day` recomputes the aggregate rows for one calendar day
//! from the workflow records and upserts them: one row per aimag that
//! has records that day, plus one overall row with a null aimag.
//! Re-running for the same day overwrites the previous figures. The
//! `kind` and `location_type` key columns are reserved for finer
//! breakdowns and are written empty.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use hydromet_domain::{RecordKind, WorkflowStatus};
use std::collections::BTreeMap;
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::data_models::{decode_timestamp, encode_date, encode_timestamp};
use crate::diesel_schema::{devices, locations, workflow_daily_agg, workflow_records};
use crate::error::PersistenceError;

/// One record's contribution, as read from the day's join.
type DayRow = (String, String, Option<String>, Option<String>, Option<i64>);

/// Running per-bucket tallies while scanning a day's records.
///
/// Drafts are not counted; the aggregate tracks review traffic only.
#[derive(Debug, Default)]
struct DayTally {
    ms_submitted: i32,
    ms_approved: i32,
    ms_rejected: i32,
    ca_submitted: i32,
    ca_approved: i32,
    ca_rejected: i32,
    ms_sla_hours: Vec<f64>,
    ca_sla_hours: Vec<f64>,
}

impl DayTally {
    fn add(&mut self, row: &DayRow) -> Result<(), PersistenceError> {
        let kind: RecordKind = row.0.parse()?;
        let status: WorkflowStatus = row.1.parse()?;

        let slot: Option<&mut i32> = match (kind, status) {
            (RecordKind::Maintenance, WorkflowStatus::Submitted) => Some(&mut self.ms_submitted),
            (RecordKind::Maintenance, WorkflowStatus::Approved) => Some(&mut self.ms_approved),
            (RecordKind::Maintenance, WorkflowStatus::Rejected) => Some(&mut self.ms_rejected),
            (RecordKind::Control, WorkflowStatus::Submitted) => Some(&mut self.ca_submitted),
            (RecordKind::Control, WorkflowStatus::Approved) => Some(&mut self.ca_approved),
            (RecordKind::Control, WorkflowStatus::Rejected) => Some(&mut self.ca_rejected),
            (_, WorkflowStatus::Draft) => None,
        };
        if let Some(slot) = slot {
            *slot += 1;
        }

        // SLA is measured on approved records only. Pairs missing
        // either timestamp are excluded from the average, never
        // counted as zero.
        if status == WorkflowStatus::Approved {
            if let (Some(submitted), Some(approved)) = (row.2.as_deref(), row.3.as_deref()) {
                let submitted: OffsetDateTime = decode_timestamp(submitted)?;
                let approved: OffsetDateTime = decode_timestamp(approved)?;
                #[allow(clippy::cast_precision_loss)]
                let hours: f64 = (approved - submitted).whole_seconds() as f64 / 3600.0;
                match kind {
                    RecordKind::Maintenance => self.ms_sla_hours.push(hours),
                    RecordKind::Control => self.ca_sla_hours.push(hours),
                }
            }
        }
        Ok(())
    }

    /// The average of the per-kind SLA averages, in hours, rounded to
    /// two decimals. Kinds with no measurable records are skipped; if
    /// neither kind has any, the figure is 0.0.
    fn sla_avg_hours(&self) -> f64 {
        let kind_averages: Vec<f64> = [&self.ms_sla_hours, &self.ca_sla_hours]
            .iter()
            .filter(|hours| !hours.is_empty())
            .map(|hours| {
                #[allow(clippy::cast_precision_loss)]
                let count = hours.len() as f64;
                hours.iter().sum::<f64>() / count
            })
            .collect();
        if kind_averages.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let avg: f64 = kind_averages.iter().sum::<f64>() / kind_averages.len() as f64;
        (avg * 100.0).round() / 100.0
    }
}

backend_fn! {
/// Recomputes and upserts the daily aggregates for one calendar day.
///
/// With `only_aimag` set, only that region's row is rebuilt; otherwise
/// one row per aimag with records that day plus the overall row.
/// Returns the number of aggregate rows written.
///
/// # Errors
///
/// Returns an error if the day's records cannot be read or the upserts
/// fail.
pub fn materialize_day(
    conn: &mut _,
    day: Date,
    only_aimag: Option<i64>,
    now: OffsetDateTime,
) -> Result<usize, PersistenceError> {
    let day_text: String = encode_date(day)?;
    let computed_at: String = encode_timestamp(now)?;

    info!("Materializing daily aggregates for {}", day_text);

    let rows: Vec<DayRow> = workflow_records::table
        .inner_join(devices::table.left_join(locations::table))
        .filter(workflow_records::event_date.eq(&day_text))
        .select((
            workflow_records::record_kind,
            workflow_records::workflow_status,
            workflow_records::submitted_at,
            workflow_records::approved_at,
            locations::aimag_id.nullable(),
        ))
        .load(conn)?;

    let mut buckets: BTreeMap<Option<i64>, DayTally> = BTreeMap::new();
    buckets.insert(None, DayTally::default());
    for row in &rows {
        buckets.entry(None).or_default().add(row)?;
        if let Some(aimag_id) = row.4 {
            buckets.entry(Some(aimag_id)).or_default().add(row)?;
        }
    }

    if let Some(aimag_id) = only_aimag {
        buckets.entry(Some(aimag_id)).or_default();
        buckets.retain(|key, _| *key == Some(aimag_id));
    }

    conn.transaction(|conn| {
        for (aimag_id, tally) in &buckets {
            let existing: Option<i64> = {
                let mut query = workflow_daily_agg::table
                    .filter(workflow_daily_agg::day.eq(&day_text))
                    .filter(workflow_daily_agg::kind.eq(""))
                    .filter(workflow_daily_agg::location_type.eq(""))
                    .select(workflow_daily_agg::agg_id)
                    .into_boxed();
                query = match aimag_id {
                    Some(id) => query.filter(workflow_daily_agg::aimag_id.eq(*id)),
                    None => query.filter(workflow_daily_agg::aimag_id.is_null()),
                };
                query.first(conn).optional()?
            };

            if let Some(agg_id) = existing {
                diesel::update(workflow_daily_agg::table)
                    .filter(workflow_daily_agg::agg_id.eq(agg_id))
                    .set((
                        workflow_daily_agg::ms_submitted.eq(tally.ms_submitted),
                        workflow_daily_agg::ms_approved.eq(tally.ms_approved),
                        workflow_daily_agg::ms_rejected.eq(tally.ms_rejected),
                        workflow_daily_agg::ca_submitted.eq(tally.ca_submitted),
                        workflow_daily_agg::ca_approved.eq(tally.ca_approved),
                        workflow_daily_agg::ca_rejected.eq(tally.ca_rejected),
                        workflow_daily_agg::sla_avg_hours.eq(tally.sla_avg_hours()),
                        workflow_daily_agg::computed_at.eq(&computed_at),
                    ))
                    .execute(conn)?;
            } else {
                diesel::insert_into(workflow_daily_agg::table)
                    .values((
                        workflow_daily_agg::day.eq(&day_text),
                        workflow_daily_agg::aimag_id.eq(*aimag_id),
                        workflow_daily_agg::kind.eq(""),
                        workflow_daily_agg::location_type.eq(""),
                        workflow_daily_agg::ms_submitted.eq(tally.ms_submitted),
                        workflow_daily_agg::ms_approved.eq(tally.ms_approved),
                        workflow_daily_agg::ms_rejected.eq(tally.ms_rejected),
                        workflow_daily_agg::ca_submitted.eq(tally.ca_submitted),
                        workflow_daily_agg::ca_approved.eq(tally.ca_approved),
                        workflow_daily_agg::ca_rejected.eq(tally.ca_rejected),
                        workflow_daily_agg::sla_avg_hours.eq(tally.sla_avg_hours()),
                        workflow_daily_agg::computed_at.eq(&computed_at),
                    ))
                    .execute(conn)?;
            }
        }
        Ok(buckets.len())
    })
}
}
