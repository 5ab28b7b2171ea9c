// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Initialization (in-memory `SQLite`, migrations, foreign key
//! enforcement) is also exercised implicitly by every persistence test
//! that calls `Persistence::new_in_memory()`. The tests here pin down
//! the explicit guarantees: instance isolation, schema presence, and
//! referential integrity.

use crate::{Persistence, PersistenceError};
use hydromet_domain::{Device, DeviceKind, DeviceStatus, Scope};

use super::create_test_catalog;

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_enabled() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    let catalog = create_test_catalog(&mut db1);
    assert!(catalog.device_id > 0);

    // db2 should not see db1's device
    let result = db2.get_device(catalog.device_id);
    assert_eq!(
        result,
        Err(PersistenceError::DeviceNotFound(catalog.device_id))
    );
}

#[test]
fn test_migrations_applied_on_initialization() {
    // If migrations didn't run, the schema wouldn't exist and this would fail
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.records_in_scope(Scope::All, None, None);

    assert!(
        result.is_ok(),
        "Migrations must have applied for workflow_records table to exist"
    );
}

#[test]
fn test_foreign_keys_reject_orphan_device() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    // No locations exist yet, so this insert must violate the FK
    let device = Device::new("ORPHAN-1", DeviceKind::Weather, DeviceStatus::Active, Some(99))
        .unwrap();
    let result = persistence.insert_device(&device);

    assert!(
        result.is_err(),
        "Insert referencing a missing location must be rejected"
    );
}

#[test]
fn test_device_round_trip() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let catalog = create_test_catalog(&mut persistence);

    let device = persistence.get_device(catalog.device_id).unwrap();

    assert_eq!(device.serial_number, "TH-1024");
    assert_eq!(device.kind, DeviceKind::Weather);
    assert_eq!(device.status, DeviceStatus::Active);
    assert_eq!(device.location_id, Some(catalog.location_id));
    assert_eq!(device.lifespan_years, Device::DEFAULT_LIFESPAN_YEARS);
}

#[test]
fn test_update_device_status() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let catalog = create_test_catalog(&mut persistence);

    persistence
        .update_device_status(catalog.device_id, DeviceStatus::Broken)
        .unwrap();

    let device = persistence.get_device(catalog.device_id).unwrap();
    assert_eq!(device.status, DeviceStatus::Broken);
}

#[test]
fn test_update_device_status_missing_device() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.update_device_status(404, DeviceStatus::Retired);

    assert_eq!(result, Err(PersistenceError::DeviceNotFound(404)));
}
