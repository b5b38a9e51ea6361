// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for ClassPulse feedback records.
//!
//! This crate provides database persistence for feedback records. It is
//! built on Diesel with the `SQLite` backend.
//!
//! ## Backend
//!
//! `SQLite` is the only backend:
//! - in-memory databases for development defaults and tests
//! - file-based databases (WAL mode) for deployments
//!
//! In-memory databases receive unique names from an atomic counter, so
//! every [`Persistence::new_in_memory`] call gets an isolated instance and
//! tests cannot collide.
//!
//! ## Testing Philosophy
//!
//! - Standard tests (`cargo test`) run against in-memory `SQLite`
//! - No external database infrastructure is ever required

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

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

use classpulse_domain::{FeedbackRecord, NewFeedback};

mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for feedback records.
///
/// Owns a single `SQLite` connection; callers serialize access (the
/// server wraps this in a mutex).
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Persists one feedback record.
    ///
    /// When `submitted_at` is `None` the record is stamped with the
    /// current UTC time.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn insert_feedback(
        &mut self,
        new_feedback: &NewFeedback,
        submitted_at: Option<OffsetDateTime>,
    ) -> Result<i64, PersistenceError> {
        mutations::feedback::insert_feedback(&mut self.conn, new_feedback, submitted_at)
    }

    /// Loads feedback records for aggregation, optionally filtered by
    /// teacher.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is invalid.
    pub fn load_feedback(
        &mut self,
        teacher_id: Option<&str>,
    ) -> Result<Vec<FeedbackRecord>, PersistenceError> {
        queries::feedback::load_feedback(&mut self.conn, teacher_id)
    }

    /// Loads one page of a teacher's feedback, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is invalid.
    pub fn list_feedback_page(
        &mut self,
        teacher_id: &str,
        page: u32,
        size: u32,
    ) -> Result<Vec<FeedbackRecord>, PersistenceError> {
        queries::feedback::list_feedback_page(&mut self.conn, teacher_id, page, size)
    }
}
