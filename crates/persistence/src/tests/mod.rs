// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod initialization_tests;

use crate::Persistence;
use hydromet_domain::{
    Aimag, ControlResult, Device, DeviceKind, DeviceStatus, Location, LocationType,
    MaintenanceReason, Performer, Principal, RecordDetail, SumDuureg, WorkflowRecord,
    WorkflowStatus,
};
use hydromet_workflow::{WorkflowCommand, apply};
use time::OffsetDateTime;
use time::macros::{date, datetime};

/// Fixed test clock used wherever a transition timestamp is needed.
pub const NOW: OffsetDateTime = datetime!(2026-03-14 08:00 UTC);

/// IDs of a minimal persisted catalog: one aimag, one location, one device.
pub struct TestCatalog {
    pub aimag_id: i64,
    pub location_id: i64,
    pub device_id: i64,
}

pub fn create_test_catalog(persistence: &mut Persistence) -> TestCatalog {
    let aimag_id = persistence
        .insert_aimag(&Aimag::new("Arkhangai", "ARH", false))
        .expect("aimag insert should succeed");
    let sum_id = persistence
        .insert_sum_duureg(&SumDuureg::new(aimag_id, "Erdenebulgan", "ERB", false))
        .expect("sum insert should succeed");
    let location = Location::new(
        "Tsetserleg weather station",
        LocationType::Weather,
        aimag_id,
        Some(sum_id),
        Some(47.45),
        Some(101.47),
    )
    .expect("valid test location");
    let location_id = persistence
        .insert_location(&location)
        .expect("location insert should succeed");
    let device = Device::new(
        "TH-1024",
        DeviceKind::Weather,
        DeviceStatus::Active,
        Some(location_id),
    )
    .expect("valid test device");
    let device_id = persistence
        .insert_device(&device)
        .expect("device insert should succeed");

    TestCatalog {
        aimag_id,
        location_id,
        device_id,
    }
}

/// Persists a second, independent region for cross-scope tests.
pub fn create_second_region(persistence: &mut Persistence) -> TestCatalog {
    let aimag_id = persistence
        .insert_aimag(&Aimag::new("Bayankhongor", "BKH", false))
        .expect("aimag insert should succeed");
    let location = Location::new(
        "Bayankhongor hydro post",
        LocationType::Hydro,
        aimag_id,
        None,
        Some(46.19),
        Some(100.72),
    )
    .expect("valid test location");
    let location_id = persistence
        .insert_location(&location)
        .expect("location insert should succeed");
    let device = Device::new(
        "HY-2048",
        DeviceKind::Hydro,
        DeviceStatus::Active,
        Some(location_id),
    )
    .expect("valid test device");
    let device_id = persistence
        .insert_device(&device)
        .expect("device insert should succeed");

    TestCatalog {
        aimag_id,
        location_id,
        device_id,
    }
}

pub fn create_maintenance_record(device_id: i64) -> WorkflowRecord {
    let mut record = WorkflowRecord::new(
        device_id,
        date!(2026 - 03 - 10),
        RecordDetail::Maintenance {
            reason: MaintenanceReason::Normal,
        },
        Performer::Engineer(String::from("B. Batbold")),
    );
    record.created_at = Some(NOW);
    record
}

pub fn create_control_record(device_id: i64) -> WorkflowRecord {
    let mut record = WorkflowRecord::new(
        device_id,
        date!(2026 - 03 - 10),
        RecordDetail::Control {
            result: ControlResult::Pass,
        },
        Performer::Organization(String::from("Geo-Met LLC")),
    );
    record.created_at = Some(NOW);
    record
}

pub fn create_engineer(aimag_id: i64) -> Principal {
    Principal::regional_engineer(2, "bat", Some(aimag_id))
}

pub fn create_reviewer(aimag_id: i64) -> Principal {
    Principal::regional_engineer(3, "saraa", Some(aimag_id)).as_reviewer()
}

/// Inserts a draft record and stamps the assigned ID back onto it.
pub fn insert_draft(persistence: &mut Persistence, record: &mut WorkflowRecord) -> i64 {
    let record_id = persistence
        .insert_record(record)
        .expect("record insert should succeed");
    record.record_id = Some(record_id);
    record_id
}

/// Evaluates a workflow command and persists the resulting transition.
///
/// Returns the post-transition record so callers can chain commands.
pub fn advance(
    persistence: &mut Persistence,
    record: &WorkflowRecord,
    command: &WorkflowCommand,
    principal: &Principal,
    aimag_id: i64,
    now: OffsetDateTime,
) -> WorkflowRecord {
    let expected_from: WorkflowStatus = record.status;
    let result =
        apply(record, command, principal, Some(aimag_id), now).expect("transition should apply");
    persistence
        .apply_transition(expected_from, &result)
        .expect("transition should persist");
    result.new_record
}
