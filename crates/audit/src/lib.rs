// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

use hydromet_domain::{DomainError, Principal};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// The entity performing an audited action.
///
/// A `System` actor covers scheduled jobs and migrations that run
/// without an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    /// An authenticated user, by id and login name.
    User {
        /// The canonical numeric user identifier.
        user_id: i64,
        /// The login name at the time of the action.
        username: String,
    },
    /// An unauthenticated or internal trigger.
    System,
}

impl Actor {
    /// Builds an actor from an authenticated principal.
    #[must_use]
    pub fn from_principal(principal: &Principal) -> Self {
        Self::User {
            user_id: principal.user_id,
            username: principal.username.clone(),
        }
    }

    /// The user id behind this actor, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<i64> {
        match self {
            Self::User { user_id, .. } => Some(*user_id),
            Self::System => None,
        }
    }

    /// The login name shown in timeline views.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::User { username, .. } => username,
            Self::System => "system",
        }
    }
}

/// What kind of state change an audit event records.
///
/// Workflow actions cover record lifecycle; security actions cover
/// authentication outcomes and credential changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditAction {
    /// A row was created.
    Create,
    /// A row's fields were edited.
    Update,
    /// A row was removed.
    Delete,
    /// A record moved to Submitted.
    Submit,
    /// A record moved to Approved.
    Approve,
    /// A record moved to Rejected.
    Reject,
    /// A device lifecycle change (status, location move).
    Lifecycle,
    /// A notification was dispatched.
    Notify,
    /// A successful authentication.
    LoginSuccess,
    /// A failed authentication attempt.
    LoginFailed,
    /// A password change was forced by an administrator.
    ForcedPasswordChange,
    /// A user changed their own password.
    PasswordChanged,
}

impl AuditAction {
    /// Converts this action to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Submit => "SUBMIT",
            Self::Approve => "APPROVE",
            Self::Reject => "REJECT",
            Self::Lifecycle => "LIFECYCLE",
            Self::Notify => "NOTIFY",
            Self::LoginSuccess => "LOGIN_SUCCESS",
            Self::LoginFailed => "LOGIN_FAILED",
            Self::ForcedPasswordChange => "FORCED_PW_CHANGE",
            Self::PasswordChanged => "PASSWORD_CHANGED",
        }
    }

    /// Whether this action belongs to the security timeline rather than
    /// a record's workflow history.
    #[must_use]
    pub const fn is_security(&self) -> bool {
        matches!(
            self,
            Self::LoginSuccess | Self::LoginFailed | Self::ForcedPasswordChange
                | Self::PasswordChanged
        )
    }
}

impl FromStr for AuditAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            "SUBMIT" => Ok(Self::Submit),
            "APPROVE" => Ok(Self::Approve),
            "REJECT" => Ok(Self::Reject),
            "LIFECYCLE" => Ok(Self::Lifecycle),
            "NOTIFY" => Ok(Self::Notify),
            "LOGIN_SUCCESS" => Ok(Self::LoginSuccess),
            "LOGIN_FAILED" => Ok(Self::LoginFailed),
            "FORCED_PW_CHANGE" => Ok(Self::ForcedPasswordChange),
            "PASSWORD_CHANGED" => Ok(Self::PasswordChanged),
            _ => Err(DomainError::InvalidAuditAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One edited field, old value and new value as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    /// The field name as the model declares it.
    pub field: String,
    /// The value before the edit.
    pub old: String,
    /// The value after the edit.
    pub new: String,
}

impl FieldChange {
    /// Creates a new `FieldChange`.
    #[must_use]
    pub fn new(field: &str, old: &str, new: &str) -> Self {
        Self {
            field: field.to_string(),
            old: old.to_string(),
            new: new.to_string(),
        }
    }
}

/// An immutable, append-only audit event.
///
/// Every successful workflow transition must produce exactly one event.
/// Events are never updated or deleted once written; a failed transition
/// writes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The canonical numeric identifier assigned by the database.
    pub event_id: Option<i64>,
    /// Who performed the action.
    pub actor: Actor,
    /// What happened.
    pub action: AuditAction,
    /// The audited model label, e.g. `workflow.MaintenanceRecord`.
    pub model: String,
    /// The primary key of the affected row, as text.
    pub object_pk: String,
    /// A short human-readable description of the affected object.
    pub object_repr: String,
    /// Per-field old/new values for updates; empty for pure transitions.
    pub changes: Vec<FieldChange>,
    /// Free-form context, e.g. a reject reason.
    pub detail: Option<String>,
    /// The client address the action came from, when known.
    pub ip_address: Option<String>,
    /// When the event was recorded.
    pub occurred_at: OffsetDateTime,
}

impl AuditEvent {
    /// Creates a new event, not yet persisted.
    #[must_use]
    pub fn new(
        actor: Actor,
        action: AuditAction,
        model: &str,
        object_pk: &str,
        object_repr: &str,
        occurred_at: OffsetDateTime,
    ) -> Self {
        Self {
            event_id: None,
            actor,
            action,
            model: model.to_string(),
            object_pk: object_pk.to_string(),
            object_repr: object_repr.to_string(),
            changes: Vec::new(),
            detail: None,
            ip_address: None,
            occurred_at,
        }
    }

    /// Attaches per-field changes, builder style.
    #[must_use]
    pub fn with_changes(mut self, changes: Vec<FieldChange>) -> Self {
        self.changes = changes;
        self
    }

    /// Attaches free-form detail, builder style.
    #[must_use]
    pub fn with_detail(mut self, detail: &str) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    /// Attaches the originating client address, builder style.
    #[must_use]
    pub fn with_ip(mut self, ip_address: &str) -> Self {
        self.ip_address = Some(ip_address.to_string());
        self
    }
}

#[cfg(test)]
mod tests;
