// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hydromet_audit::AuditEvent;
use hydromet_domain::WorkflowRecord;

/// The outcome of a successful transition: the updated record and the
/// single audit event that must be persisted with it.
///
/// The input record is never mutated; callers persist both parts in one
/// transaction or neither.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The record after the transition.
    pub new_record: WorkflowRecord,
    /// The audit event describing the transition.
    pub audit_event: AuditEvent,
}
