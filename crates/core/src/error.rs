// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hydromet_domain::{DomainError, WorkflowStatus};

/// Errors that can occur during a workflow transition.
///
/// `DomainError` carries `f64` coordinate payloads, so this enum is
/// `PartialEq` only.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The command is not valid from the record's current state.
    InvalidTransition {
        /// The record's current state.
        from: WorkflowStatus,
        /// The command that was attempted.
        attempted: &'static str,
    },
    /// The caller lacks the role or scope for the command.
    AuthorizationDenied(String),
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { from, attempted } => {
                write!(f, "Cannot {attempted} a record in state {from}")
            }
            Self::AuthorizationDenied(msg) => write!(f, "Authorization denied: {msg}"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
