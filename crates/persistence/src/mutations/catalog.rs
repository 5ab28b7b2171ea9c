// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog mutations: aimags, sums/duuregs, locations, and devices.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use hydromet_domain::{Aimag, Device, DeviceStatus, Location, SumDuureg};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::encode_date;
use crate::diesel_schema::{aimags, devices, locations, sum_duuregs};
use crate::error::PersistenceError;

backend_fn! {
/// Inserts an aimag and returns its assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails (e.g., duplicate name or code).
pub fn insert_aimag(conn: &mut _, aimag: &Aimag) -> Result<i64, PersistenceError> {
    debug!("Inserting aimag: {}", aimag.name());

    diesel::insert_into(aimags::table)
        .values((
            aimags::name.eq(aimag.name()),
            aimags::code.eq(aimag.code()),
            aimags::is_capital.eq(i32::from(aimag.is_capital())),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a sum/duureg and returns its assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails or the aimag does not exist.
pub fn insert_sum_duureg(conn: &mut _, sum: &SumDuureg) -> Result<i64, PersistenceError> {
    debug!("Inserting sum/duureg: {}", sum.name());

    diesel::insert_into(sum_duuregs::table)
        .values((
            sum_duuregs::aimag_id.eq(sum.aimag_id()),
            sum_duuregs::name.eq(sum.name()),
            sum_duuregs::code.eq(sum.code()),
            sum_duuregs::is_ub_district.eq(i32::from(sum.is_ub_district())),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a location and returns its assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails or a referenced row does not exist.
pub fn insert_location(conn: &mut _, location: &Location) -> Result<i64, PersistenceError> {
    debug!("Inserting location: {}", location.name);

    diesel::insert_into(locations::table)
        .values((
            locations::name.eq(&location.name),
            locations::location_type.eq(location.location_type.as_str()),
            locations::aimag_id.eq(location.aimag_id),
            locations::sum_id.eq(location.sum_id),
            locations::latitude.eq(location.latitude),
            locations::longitude.eq(location.longitude),
            locations::parent_location_id.eq(location.parent_location_id),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a device and returns its assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails (e.g., duplicate serial number).
pub fn insert_device(conn: &mut _, device: &Device) -> Result<i64, PersistenceError> {
    info!("Inserting device with serial: {}", device.serial_number);

    let installation_date: Option<String> =
        device.installation_date.map(encode_date).transpose()?;
    let next_verification_date: Option<String> =
        device.next_verification_date.map(encode_date).transpose()?;
    let lifespan: i32 = i32::try_from(device.lifespan_years)
        .map_err(|e| PersistenceError::DataIntegrity(e.to_string()))?;

    diesel::insert_into(devices::table)
        .values((
            devices::serial_number.eq(&device.serial_number),
            devices::kind.eq(device.kind.as_str()),
            devices::status.eq(device.status.as_str()),
            devices::installation_date.eq(installation_date),
            devices::lifespan_years.eq(lifespan),
            devices::next_verification_date.eq(next_verification_date),
            devices::location_id.eq(device.location_id),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Updates a device's lifecycle status.
///
/// # Errors
///
/// Returns an error if the device does not exist or the update fails.
pub fn update_device_status(
    conn: &mut _,
    device_id: i64,
    status: DeviceStatus,
) -> Result<(), PersistenceError> {
    info!("Updating device {} status to {}", device_id, status.as_str());

    let updated: usize = diesel::update(devices::table)
        .filter(devices::device_id.eq(device_id))
        .set(devices::status.eq(status.as_str()))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::DeviceNotFound(device_id));
    }
    Ok(())
}
}
