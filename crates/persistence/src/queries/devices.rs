// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Device reads and verification due dates.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use hydromet_domain::{Device, Scope};
use time::Date;

use crate::data_models::{DeviceRow, decode_date};
use crate::diesel_schema::{devices, locations};
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a device by ID.
///
/// # Errors
///
/// Returns `DeviceNotFound` if no row exists, or a hydration error if a
/// stored value fails domain parsing.
pub fn get_device(conn: &mut _, device_id: i64) -> Result<Device, PersistenceError> {
    let row: Option<DeviceRow> = devices::table
        .filter(devices::device_id.eq(device_id))
        .select(devices::all_columns)
        .first::<DeviceRow>(conn)
        .optional()?;

    row.map_or(
        Err(PersistenceError::DeviceNotFound(device_id)),
        DeviceRow::into_device,
    )
}
}

backend_fn! {
/// Resolves the aimag a device is rooted at, via its location.
///
/// Devices without a location resolve to `None`.
///
/// # Errors
///
/// Returns `DeviceNotFound` if the device does not exist.
pub fn lookup_device_aimag(
    conn: &mut _,
    device_id: i64,
) -> Result<Option<i64>, PersistenceError> {
    let aimag: Option<Option<i64>> = devices::table
        .left_join(locations::table)
        .filter(devices::device_id.eq(device_id))
        .select(locations::aimag_id.nullable())
        .first(conn)
        .optional()?;

    aimag.map_or(Err(PersistenceError::DeviceNotFound(device_id)), Ok)
}
}

backend_fn! {
/// Lists the next-verification dates of devices visible in a scope.
///
/// Devices without a date are included as `None` so callers can count
/// them into the unknown bucket. `Scope::None` returns an empty list.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be parsed.
pub fn verification_dates(
    conn: &mut _,
    scope: Scope,
) -> Result<Vec<Option<Date>>, PersistenceError> {
    let dates: Vec<Option<String>> = match scope {
        Scope::None => Vec::new(),
        Scope::All => devices::table
            .select(devices::next_verification_date)
            .load(conn)?,
        Scope::Region { aimag_id, sum_id } => {
            let mut query = devices::table
                .inner_join(locations::table)
                .filter(locations::aimag_id.eq(aimag_id))
                .select(devices::next_verification_date)
                .into_boxed();
            if let Some(sum_id) = sum_id {
                query = query.filter(locations::sum_id.eq(sum_id));
            }
            query.load(conn)?
        }
    };

    dates
        .into_iter()
        .map(|date| date.as_deref().map(decode_date).transpose())
        .collect()
}
}
