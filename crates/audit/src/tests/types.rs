// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Actor, AuditAction, AuditEvent, FieldChange};
use hydromet_domain::Principal;
use time::macros::datetime;

#[test]
fn test_actor_from_principal() {
    let principal: Principal = Principal::regional_engineer(42, "bat", Some(5));
    let actor: Actor = Actor::from_principal(&principal);

    assert_eq!(actor.user_id(), Some(42));
    assert_eq!(actor.display_name(), "bat");
}

#[test]
fn test_system_actor_has_no_user() {
    let actor: Actor = Actor::System;
    assert_eq!(actor.user_id(), None);
    assert_eq!(actor.display_name(), "system");
}

#[test]
fn test_audit_action_round_trip() {
    for action in [
        AuditAction::Create,
        AuditAction::Update,
        AuditAction::Delete,
        AuditAction::Submit,
        AuditAction::Approve,
        AuditAction::Reject,
        AuditAction::Lifecycle,
        AuditAction::Notify,
        AuditAction::LoginSuccess,
        AuditAction::LoginFailed,
        AuditAction::ForcedPasswordChange,
        AuditAction::PasswordChanged,
    ] {
        let parsed: AuditAction = action.as_str().parse().unwrap();
        assert_eq!(parsed, action);
    }
    assert!("LOGOUT".parse::<AuditAction>().is_err());
}

#[test]
fn test_security_actions_are_flagged() {
    assert!(AuditAction::LoginSuccess.is_security());
    assert!(AuditAction::LoginFailed.is_security());
    assert!(AuditAction::ForcedPasswordChange.is_security());
    assert!(AuditAction::PasswordChanged.is_security());

    assert!(!AuditAction::Submit.is_security());
    assert!(!AuditAction::Approve.is_security());
    assert!(!AuditAction::Create.is_security());
}

#[test]
fn test_audit_event_creation() {
    let actor: Actor = Actor::User {
        user_id: 42,
        username: String::from("bat"),
    };
    let event: AuditEvent = AuditEvent::new(
        actor.clone(),
        AuditAction::Submit,
        "workflow.MaintenanceRecord",
        "17",
        "device #9 - LIMITED (2026-03-14)",
        datetime!(2026-03-14 08:00 UTC),
    );

    assert!(event.event_id.is_none());
    assert_eq!(event.actor, actor);
    assert_eq!(event.action, AuditAction::Submit);
    assert_eq!(event.model, "workflow.MaintenanceRecord");
    assert_eq!(event.object_pk, "17");
    assert!(event.changes.is_empty());
    assert!(event.detail.is_none());
    assert!(event.ip_address.is_none());
}

#[test]
fn test_audit_event_builders() {
    let event: AuditEvent = AuditEvent::new(
        Actor::System,
        AuditAction::Update,
        "workflow.ControlRecord",
        "3",
        "device #2 - PASS (2026-01-02)",
        datetime!(2026-01-02 10:30 UTC),
    )
    .with_changes(vec![FieldChange::new("note", "", "re-checked on site")])
    .with_detail("nightly reconciliation")
    .with_ip("192.168.4.20");

    assert_eq!(event.changes.len(), 1);
    assert_eq!(event.changes[0].field, "note");
    assert_eq!(event.changes[0].new, "re-checked on site");
    assert_eq!(event.detail.as_deref(), Some("nightly reconciliation"));
    assert_eq!(event.ip_address.as_deref(), Some("192.168.4.20"));
}

#[test]
fn test_field_change_equality() {
    let a: FieldChange = FieldChange::new("status", "DRAFT", "SUBMITTED");
    let b: FieldChange = FieldChange::new("status", "DRAFT", "SUBMITTED");
    let c: FieldChange = FieldChange::new("status", "SUBMITTED", "APPROVED");

    assert_eq!(a, b);
    assert_ne!(a, c);
}
