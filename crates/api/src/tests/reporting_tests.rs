// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the scoped read, aggregation, and verification operations.

use time::macros::date;
use time::{Duration, OffsetDateTime};

use hydromet_domain::{Principal, RecordKind};

use crate::tests::helpers::{
    create_control_record, create_engineer, create_maintenance_record, create_reviewer,
    create_second_region, create_test_persistence, create_test_region, insert_device,
};
use crate::{
    approve, create_record, materialize_day, materialize_range, pending_counts, scoped_records,
    submit, verification_buckets,
};

#[test]
fn test_scoped_records_filtered_by_kind() {
    let mut persistence = create_test_persistence();
    let region = create_test_region(&mut persistence);
    let engineer = create_engineer(region.aimag_id);

    create_record(
        &mut persistence,
        &create_maintenance_record(region.device_id),
        &engineer,
    )
    .expect("create maintenance");
    create_record(
        &mut persistence,
        &create_control_record(region.device_id),
        &engineer,
    )
    .expect("create control");

    let all = scoped_records(&mut persistence, &engineer, None).expect("list");
    assert_eq!(all.len(), 2);

    let maintenance =
        scoped_records(&mut persistence, &engineer, Some(RecordKind::Maintenance)).expect("list");
    assert_eq!(maintenance.len(), 1);
    assert_eq!(maintenance[0].kind(), RecordKind::Maintenance);
}

#[test]
fn test_unassigned_engineer_sees_nothing() {
    let mut persistence = create_test_persistence();
    let region = create_test_region(&mut persistence);
    let engineer = create_engineer(region.aimag_id);
    let unassigned = Principal::regional_engineer(7, "naraa", None);

    create_record(
        &mut persistence,
        &create_maintenance_record(region.device_id),
        &engineer,
    )
    .expect("create");

    let visible = scoped_records(&mut persistence, &unassigned, None).expect("list");
    assert!(visible.is_empty());

    let counts = pending_counts(&mut persistence, &unassigned).expect("counts");
    assert_eq!(counts.total(), 0);
}

#[test]
fn test_pending_counts_split_by_kind_and_scope() {
    let mut persistence = create_test_persistence();
    let region = create_test_region(&mut persistence);
    let other = create_second_region(&mut persistence);
    let engineer = create_engineer(region.aimag_id);

    let ms = create_record(
        &mut persistence,
        &create_maintenance_record(region.device_id),
        &engineer,
    )
    .expect("create maintenance");
    let ca = create_record(
        &mut persistence,
        &create_control_record(region.device_id),
        &engineer,
    )
    .expect("create control");
    submit(&mut persistence, ms.record_id.unwrap(), &engineer, None).expect("submit ms");
    submit(&mut persistence, ca.record_id.unwrap(), &engineer, None).expect("submit ca");

    let counts = pending_counts(&mut persistence, &engineer).expect("counts");
    assert_eq!(counts.maintenance, 1);
    assert_eq!(counts.control, 1);
    assert_eq!(counts.total(), 2);

    let outsider = create_engineer(other.aimag_id);
    let foreign = pending_counts(&mut persistence, &outsider).expect("counts");
    assert_eq!(foreign.total(), 0);
}

#[test]
fn test_materialize_day_counts_the_record_date_bucket() {
    let mut persistence = create_test_persistence();
    let region = create_test_region(&mut persistence);
    let engineer = create_engineer(region.aimag_id);
    let reviewer = create_reviewer(region.aimag_id);

    let record = create_record(
        &mut persistence,
        &create_maintenance_record(region.device_id),
        &engineer,
    )
    .expect("create");
    let record_id = record.record_id.unwrap();
    submit(&mut persistence, record_id, &engineer, None).expect("submit");
    approve(&mut persistence, record_id, &reviewer, None).expect("approve");

    let day = date!(2026 - 03 - 10);
    let written = materialize_day(&mut persistence, day, None).expect("materialize");
    assert_eq!(written, 2); // the aimag bucket plus the overall row

    let bucket = persistence
        .get_daily_agg(day, Some(region.aimag_id))
        .expect("agg read")
        .expect("aimag bucket exists");
    assert_eq!(bucket.ms_approved, 1);
    assert_eq!(bucket.ms_submitted, 0);
}

#[test]
fn test_materialize_single_aimag_only() {
    let mut persistence = create_test_persistence();
    let region = create_test_region(&mut persistence);

    let day = date!(2026 - 03 - 10);
    let written =
        materialize_day(&mut persistence, day, Some(region.aimag_id)).expect("materialize");
    assert_eq!(written, 1);

    let overall = persistence.get_daily_agg(day, None).expect("agg read");
    assert!(overall.is_none());
}

#[test]
fn test_materialize_range_accepts_reversed_bounds() {
    let mut persistence = create_test_persistence();

    let from = date!(2026 - 03 - 10);
    let to = date!(2026 - 03 - 12);
    let forward = materialize_range(&mut persistence, from, to).expect("forward range");
    let backward = materialize_range(&mut persistence, to, from).expect("reversed range");

    // Three empty days produce one overall row each, both directions.
    assert_eq!(forward, 3);
    assert_eq!(backward, forward);
    for day in [from, date!(2026 - 03 - 11), to] {
        assert!(
            persistence
                .get_daily_agg(day, None)
                .expect("agg read")
                .is_some()
        );
    }
}

#[test]
fn test_verification_buckets_classify_against_today() {
    let mut persistence = create_test_persistence();
    let region = create_test_region(&mut persistence);
    let engineer = create_engineer(region.aimag_id);
    let today = OffsetDateTime::now_utc().date();

    // The fixture device has no scheduled date and lands in `unknown`.
    insert_device(
        &mut persistence,
        "KHO-0002",
        region.location_id,
        Some(today - Duration::days(5)),
    );
    insert_device(
        &mut persistence,
        "KHO-0003",
        region.location_id,
        Some(today + Duration::days(10)),
    );
    insert_device(
        &mut persistence,
        "KHO-0004",
        region.location_id,
        Some(today + Duration::days(60)),
    );
    insert_device(
        &mut persistence,
        "KHO-0005",
        region.location_id,
        Some(today + Duration::days(200)),
    );

    let buckets = verification_buckets(&mut persistence, &engineer).expect("buckets");
    assert_eq!(buckets.expired, 1);
    assert_eq!(buckets.due_30, 1);
    assert_eq!(buckets.due_90, 1);
    assert_eq!(buckets.ok, 1);
    assert_eq!(buckets.unknown, 1);
    assert_eq!(buckets.total(), 5);
}

#[test]
fn test_verification_buckets_respect_scope() {
    let mut persistence = create_test_persistence();
    let region = create_test_region(&mut persistence);
    let other = create_second_region(&mut persistence);
    let today = OffsetDateTime::now_utc().date();

    insert_device(
        &mut persistence,
        "DOR-0002",
        other.location_id,
        Some(today - Duration::days(1)),
    );

    let engineer = create_engineer(region.aimag_id);
    let buckets = verification_buckets(&mut persistence, &engineer).expect("buckets");
    assert_eq!(buckets.expired, 0);
    assert_eq!(buckets.total(), 1); // only the fixture device, unscheduled
}
