// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hydromet_domain::DomainError;
use hydromet_persistence::PersistenceError;
use hydromet_workflow::CoreError;

/// Errors surfaced by the operation boundary.
///
/// Every variant carries a human-readable message; callers branch on
/// the variant, never on the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The record is not in a state the command accepts.
    InvalidTransition(String),
    /// The caller may not act on the record.
    AuthorizationDenied(String),
    /// The input failed domain validation.
    Validation(String),
    /// The caller's scope could not be determined against the target.
    ResolutionError(String),
    /// The requested row does not exist.
    ResourceNotFound(String),
    /// An unexpected backend failure.
    Internal(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition(msg) => write!(f, "Invalid transition: {msg}"),
            Self::AuthorizationDenied(msg) => write!(f, "Authorization denied: {msg}"),
            Self::Validation(msg) => write!(f, "Validation failed: {msg}"),
            Self::ResolutionError(msg) => write!(f, "Scope resolution failed: {msg}"),
            Self::ResourceNotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidTransition { .. } => Self::InvalidTransition(err.to_string()),
            CoreError::AuthorizationDenied(msg) => Self::AuthorizationDenied(msg),
            CoreError::DomainViolation(inner) => Self::Validation(inner.to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::RecordNotFound(_)
            | PersistenceError::DeviceNotFound(_)
            | PersistenceError::EventNotFound(_) => Self::ResourceNotFound(err.to_string()),
            // A stale compare-and-swap means another writer moved the
            // record first; to the caller that is an invalid transition.
            PersistenceError::StaleRecord { .. } => Self::InvalidTransition(err.to_string()),
            _ => Self::Internal(err.to_string()),
        }
    }
}
