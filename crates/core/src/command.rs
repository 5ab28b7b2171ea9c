// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A command represents caller intent as data only.
///
/// Commands are the only way to move a record through the workflow;
/// field edits go through the ordinary update path instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowCommand {
    /// Send a draft record for review.
    Submit,
    /// Accept a submitted record.
    Approve,
    /// Return a submitted record with a mandatory reason.
    Reject {
        /// Why the record was returned.
        reason: String,
    },
    /// Re-send a rejected record for review after corrections.
    Resubmit,
}

impl WorkflowCommand {
    /// A short name for log and audit lines.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Approve => "Approve",
            Self::Reject { .. } => "Reject",
            Self::Resubmit => "Resubmit",
        }
    }
}
