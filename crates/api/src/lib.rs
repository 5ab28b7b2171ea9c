// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation boundary for the Hydromet Inventory System.
//!
//! Every operation is a free function taking `&mut Persistence` as its
//! first argument: the caller owns the connection and there is no
//! global state. Operations resolve the caller's scope, run the pure
//! workflow core, and persist the outcome, translating lower-layer
//! errors into the [`ApiError`] taxonomy.

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{
    ApiResult, approve, audit_timeline, create_record, materialize_day, materialize_range,
    pending_counts, record_security_event, reject, resubmit, scoped_records, submit,
    verification_buckets,
};

#[cfg(test)]
mod tests;
