// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-specific bootstrap for the inventory database.
//!
//! Workflow records, the audit log, and the daily aggregates all go
//! through the same Diesel DSL in `queries/` and `mutations/`; nothing
//! in those modules may know which backend is underneath. What cannot
//! be written backend-agnostically lives here instead: establishing the
//! connection, running the embedded migrations, and the small pieces of
//! raw SQL each engine needs (PRAGMA statements, row-id retrieval).
//!
//! `SQLite` is the everyday backend for development and the standard
//! test suite. MariaDB is the deployment target for aimag offices that
//! share a database server; it is exercised only by the opt-in
//! validation tests behind `cargo xtask test-mariadb`.

pub mod mysql;
pub mod sqlite;

use diesel::{Connection, MysqlConnection, SqliteConnection};

use crate::error::PersistenceError;

/// Operations the generated `_sqlite`/`_mysql` functions need but that
/// Diesel's DSL cannot express for both engines at once.
pub trait PersistenceBackend: Connection {
    /// Returns the row ID assigned by the most recent insert.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError>;

    /// Checks that the connection enforces foreign keys.
    ///
    /// The audit log references users and records by ID; a connection
    /// that silently skips referential checks must be rejected before
    /// any workflow data is written through it.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        sqlite::get_last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(self)
    }
}

impl PersistenceBackend for MysqlConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        mysql::get_last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_foreign_key_enforcement(self)
    }
}
