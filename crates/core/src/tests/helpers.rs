// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hydromet_domain::{
    ControlResult, MaintenanceReason, Performer, Principal, RecordDetail, WorkflowRecord,
    WorkflowStatus,
};
use time::OffsetDateTime;
use time::macros::{date, datetime};

pub const RECORD_AIMAG: i64 = 5;

pub const NOW: OffsetDateTime = datetime!(2026-03-14 08:00 UTC);

pub fn create_maintenance_record() -> WorkflowRecord {
    let mut record: WorkflowRecord = WorkflowRecord::new(
        9,
        date!(2026 - 03 - 12),
        RecordDetail::Maintenance {
            reason: MaintenanceReason::Normal,
        },
        Performer::Engineer(String::from("B. Erdene")),
    );
    record.record_id = Some(17);
    record
}

pub fn create_control_record() -> WorkflowRecord {
    let mut record: WorkflowRecord = WorkflowRecord::new(
        9,
        date!(2026 - 03 - 12),
        RecordDetail::Control {
            result: ControlResult::Pass,
        },
        Performer::Organization(String::from("Geo-Met LLC")),
    );
    record.record_id = Some(23);
    record
}

pub fn create_submitted_record() -> WorkflowRecord {
    let mut record: WorkflowRecord = create_maintenance_record();
    record.status = WorkflowStatus::Submitted;
    record.submitted_at = Some(NOW);
    record.submitted_by = Some(2);
    record
}

pub fn create_engineer() -> Principal {
    Principal::regional_engineer(2, "bat", Some(RECORD_AIMAG))
}

pub fn create_reviewer() -> Principal {
    Principal::regional_engineer(3, "saraa", Some(RECORD_AIMAG)).as_reviewer()
}

pub fn create_superuser() -> Principal {
    Principal::superuser(1, "root")
}
