// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the audit timeline and security event operations.

use hydromet_audit::{Actor, AuditAction};
use hydromet_persistence::AuditQuery;

use crate::tests::helpers::{
    create_engineer, create_maintenance_record, create_reviewer, create_test_persistence,
    create_test_region,
};
use crate::{ApiError, audit_timeline, create_record, record_security_event, submit};

#[test]
fn test_failed_login_without_user_is_recorded_as_system() {
    let mut persistence = create_test_persistence();

    let event_id = record_security_event(
        &mut persistence,
        None,
        AuditAction::LoginFailed,
        Some("203.0.113.9"),
    )
    .expect("security event");

    let event = persistence.get_audit_event(event_id).expect("event");
    assert_eq!(event.actor, Actor::System);
    assert_eq!(event.action, AuditAction::LoginFailed);
    assert_eq!(event.model, "auth.User");
    assert_eq!(event.object_pk, "-");
    assert_eq!(event.ip_address.as_deref(), Some("203.0.113.9"));
}

#[test]
fn test_login_success_carries_the_principal() {
    let mut persistence = create_test_persistence();
    let region = create_test_region(&mut persistence);
    let engineer = create_engineer(region.aimag_id);

    let event_id = record_security_event(
        &mut persistence,
        Some(&engineer),
        AuditAction::LoginSuccess,
        Some("198.51.100.4"),
    )
    .expect("security event");

    let event = persistence.get_audit_event(event_id).expect("event");
    assert_eq!(event.actor.user_id(), Some(engineer.user_id));
    assert_eq!(event.object_pk, engineer.user_id.to_string());
    assert_eq!(event.object_repr, "bat");
}

#[test]
fn test_workflow_actions_are_not_security_events() {
    let mut persistence = create_test_persistence();

    let err = record_security_event(&mut persistence, None, AuditAction::Submit, None)
        .expect_err("SUBMIT belongs to record timelines");
    assert!(matches!(err, ApiError::Validation(_)));

    let timeline =
        audit_timeline(&mut persistence, &AuditQuery::default()).expect("timeline");
    assert!(timeline.is_empty());
}

#[test]
fn test_timeline_filter_by_actor() {
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
    submit(&mut persistence, record.record_id.unwrap(), &engineer, None).expect("submit");
    record_security_event(&mut persistence, Some(&reviewer), AuditAction::LoginSuccess, None)
        .expect("security event");

    let filter = AuditQuery {
        actor_user_id: Some(engineer.user_id),
        ..AuditQuery::default()
    };
    let events = audit_timeline(&mut persistence, &filter).expect("timeline");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, AuditAction::Submit);
}

#[test]
fn test_timeline_limit_returns_newest_first() {
    let mut persistence = create_test_persistence();
    let region = create_test_region(&mut persistence);
    let reviewer = create_reviewer(region.aimag_id);

    for _ in 0..3 {
        record_security_event(
            &mut persistence,
            Some(&reviewer),
            AuditAction::LoginSuccess,
            None,
        )
        .expect("security event");
    }

    let filter = AuditQuery {
        limit: Some(2),
        ..AuditQuery::default()
    };
    let events = audit_timeline(&mut persistence, &filter).expect("timeline");
    assert_eq!(events.len(), 2);
    // Identical timestamps fall back to event id ordering.
    let first = events[0].event_id.unwrap();
    let second = events[1].event_id.unwrap();
    assert!(first > second);
}
