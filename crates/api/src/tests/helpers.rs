// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use time::Date;
use time::macros::date;

use hydromet_domain::{
    Aimag, ControlResult, Device, DeviceKind, DeviceStatus, Location, LocationType,
    MaintenanceReason, Performer, Principal, RecordDetail, WorkflowRecord,
};
use hydromet_persistence::Persistence;

/// IDs of a minimal persisted catalog: one aimag, one location, one device.
pub struct TestRegion {
    pub aimag_id: i64,
    pub location_id: i64,
    pub device_id: i64,
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory persistence should initialize")
}

pub fn create_test_region(persistence: &mut Persistence) -> TestRegion {
    create_region(persistence, "Khovd", "KHO", "Khovd weather station")
}

/// Persists a second, independent region for cross-scope tests.
pub fn create_second_region(persistence: &mut Persistence) -> TestRegion {
    create_region(persistence, "Dornod", "DOR", "Choibalsan hydro post")
}

fn create_region(
    persistence: &mut Persistence,
    aimag_name: &str,
    aimag_code: &str,
    location_name: &str,
) -> TestRegion {
    let aimag_id = persistence
        .insert_aimag(&Aimag::new(aimag_name, aimag_code, false))
        .expect("aimag insert should succeed");
    let location = Location::new(
        location_name,
        LocationType::Weather,
        aimag_id,
        None,
        Some(48.0),
        Some(91.64),
    )
    .expect("valid test location");
    let location_id = persistence
        .insert_location(&location)
        .expect("location insert should succeed");
    let device_id = insert_device(persistence, &format!("{aimag_code}-0001"), location_id, None);

    TestRegion {
        aimag_id,
        location_id,
        device_id,
    }
}

/// Inserts an active weather device at a location, optionally with a
/// scheduled next-verification date.
pub fn insert_device(
    persistence: &mut Persistence,
    serial: &str,
    location_id: i64,
    next_verification: Option<Date>,
) -> i64 {
    let mut device = Device::new(
        serial,
        DeviceKind::Weather,
        DeviceStatus::Active,
        Some(location_id),
    )
    .expect("valid test device");
    device.next_verification_date = next_verification;
    persistence
        .insert_device(&device)
        .expect("device insert should succeed")
}

/// Inserts a device that is not installed at any location, so it
/// resolves to no aimag at all.
pub fn insert_unlocated_device(persistence: &mut Persistence, serial: &str) -> i64 {
    let device = Device::new(serial, DeviceKind::Etalon, DeviceStatus::Spare, None)
        .expect("valid test device");
    persistence
        .insert_device(&device)
        .expect("device insert should succeed")
}

pub fn create_maintenance_record(device_id: i64) -> WorkflowRecord {
    WorkflowRecord::new(
        device_id,
        date!(2026 - 03 - 10),
        RecordDetail::Maintenance {
            reason: MaintenanceReason::Normal,
        },
        Performer::Engineer(String::from("B. Batbold")),
    )
}

pub fn create_control_record(device_id: i64) -> WorkflowRecord {
    WorkflowRecord::new(
        device_id,
        date!(2026 - 03 - 10),
        RecordDetail::Control {
            result: ControlResult::Pass,
        },
        Performer::Organization(String::from("Geo-Met LLC")),
    )
}

pub fn create_engineer(aimag_id: i64) -> Principal {
    Principal::regional_engineer(2, "bat", Some(aimag_id))
}

pub fn create_reviewer(aimag_id: i64) -> Principal {
    Principal::regional_engineer(3, "saraa", Some(aimag_id)).as_reviewer()
}

pub fn create_superuser() -> Principal {
    Principal::superuser(1, "admin")
}
