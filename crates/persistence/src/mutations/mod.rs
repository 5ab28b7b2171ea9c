// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence
//! layer. Mutations use Diesel DSL and are backend-agnostic, with minimal
//! use of backend-specific helpers (e.g., `last_insert_rowid()`).
//!
//! ## Module Organization
//!
//! - `catalog` — Aimag, sum/duureg, location, and device rows
//! - `records` — Workflow record inserts and guarded transitions
//! - `audit` — Append-only audit event persistence
//! - `aggregation` — Daily aggregate materialization

pub mod aggregation;
pub mod audit;
pub mod catalog;
pub mod records;

pub use aggregation::{materialize_day_mysql, materialize_day_sqlite};
pub use audit::{persist_audit_event_mysql, persist_audit_event_sqlite};
pub use catalog::{
    insert_aimag_mysql, insert_aimag_sqlite, insert_device_mysql, insert_device_sqlite,
    insert_location_mysql, insert_location_sqlite, insert_sum_duureg_mysql,
    insert_sum_duureg_sqlite, update_device_status_mysql, update_device_status_sqlite,
};
pub use records::{
    apply_transition_mysql, apply_transition_sqlite, insert_record_mysql, insert_record_sqlite,
};
