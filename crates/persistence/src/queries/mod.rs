// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic query modules.
//!
//! All queries use Diesel DSL and work identically on both backends.
//! Scope-filtered queries fail closed: `Scope::None` returns empty
//! results without touching the database.
//!
//! ## Module Organization
//!
//! - `records` — Workflow record reads and scoped listings
//! - `audit` — Audit timeline reads
//! - `aggregation` — Daily aggregate reads
//! - `devices` — Device reads and verification due dates

pub mod aggregation;
pub mod audit;
pub mod devices;
pub mod records;

pub use aggregation::{
    get_daily_agg_mysql, get_daily_agg_sqlite, list_daily_agg_mysql, list_daily_agg_sqlite,
};
pub use audit::{
    audit_events_matching_mysql, audit_events_matching_sqlite, audit_timeline_mysql,
    audit_timeline_sqlite, get_audit_event_mysql, get_audit_event_sqlite, security_events_mysql,
    security_events_sqlite,
};
pub use devices::{
    get_device_mysql, get_device_sqlite, lookup_device_aimag_mysql, lookup_device_aimag_sqlite,
    verification_dates_mysql, verification_dates_sqlite,
};
pub use records::{
    get_record_mysql, get_record_sqlite, lookup_record_aimag_mysql, lookup_record_aimag_sqlite,
    pending_counts_mysql, pending_counts_sqlite, records_in_scope_mysql, records_in_scope_sqlite,
};
