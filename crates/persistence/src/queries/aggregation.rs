// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Daily aggregate reads.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use time::Date;

use crate::data_models::{DailyAggRow, encode_date};
use crate::diesel_schema::workflow_daily_agg;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves the aggregate row for one day and one aimag bucket.
///
/// Passing `None` for the aimag reads the overall row.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_daily_agg(
    conn: &mut _,
    day: Date,
    aimag_id: Option<i64>,
) -> Result<Option<DailyAggRow>, PersistenceError> {
    let day_text: String = encode_date(day)?;

    let mut query = workflow_daily_agg::table
        .filter(workflow_daily_agg::day.eq(&day_text))
        .select(workflow_daily_agg::all_columns)
        .into_boxed();
    query = match aimag_id {
        Some(id) => query.filter(workflow_daily_agg::aimag_id.eq(id)),
        None => query.filter(workflow_daily_agg::aimag_id.is_null()),
    };

    Ok(query.first::<DailyAggRow>(conn).optional()?)
}
}

backend_fn! {
/// Lists every aggregate row for one day, overall row first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_daily_agg(conn: &mut _, day: Date) -> Result<Vec<DailyAggRow>, PersistenceError> {
    let day_text: String = encode_date(day)?;

    Ok(workflow_daily_agg::table
        .filter(workflow_daily_agg::day.eq(&day_text))
        .order(workflow_daily_agg::aimag_id.asc())
        .select(workflow_daily_agg::all_columns)
        .load::<DailyAggRow>(conn)?)
}
}
