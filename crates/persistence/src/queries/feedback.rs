// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Feedback record queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use classpulse_domain::{FeedbackRecord, Rating};

use crate::diesel_schema::feedback;
use crate::error::PersistenceError;

/// Diesel Queryable struct for feedback rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = feedback)]
struct FeedbackRow {
    feedback_id: i64,
    teacher_id: String,
    teacher_name: String,
    student_id: Option<String>,
    rating: f64,
    comment: Option<String>,
    submitted_at: String,
}

impl FeedbackRow {
    /// Converts a stored row back into the domain record.
    ///
    /// The rating range and timestamp format were both enforced on the
    /// write path, so a conversion failure means the database was
    /// modified out of band.
    fn into_record(self) -> Result<FeedbackRecord, PersistenceError> {
        let rating: Rating =
            Rating::new(self.rating).map_err(|e| PersistenceError::InvalidStoredRecord {
                feedback_id: self.feedback_id,
                reason: e.to_string(),
            })?;
        let submitted_at: OffsetDateTime = OffsetDateTime::parse(&self.submitted_at, &Rfc3339)
            .map_err(|e| PersistenceError::InvalidStoredRecord {
                feedback_id: self.feedback_id,
                reason: e.to_string(),
            })?;

        Ok(FeedbackRecord {
            id: self.feedback_id,
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
            student_id: self.student_id,
            rating,
            comment: self.comment,
            submitted_at,
        })
    }
}

/// Loads feedback records for aggregation, optionally filtered by teacher.
///
/// No ordering is applied; the aggregation pipeline does not depend on it.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `teacher_id` - Restrict to one teacher's records when given
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn load_feedback(
    conn: &mut SqliteConnection,
    teacher_id: Option<&str>,
) -> Result<Vec<FeedbackRecord>, PersistenceError> {
    debug!(teacher_id = ?teacher_id, "Loading feedback records");

    let mut query = feedback::table
        .select(FeedbackRow::as_select())
        .into_boxed();
    if let Some(id) = teacher_id {
        query = query.filter(feedback::teacher_id.eq(id.to_string()));
    }

    let rows: Vec<FeedbackRow> = query.load(conn)?;

    rows.into_iter().map(FeedbackRow::into_record).collect()
}

/// Loads one page of a teacher's feedback, newest first.
///
/// Ordering is by submission time descending with the record id as a
/// deterministic tie-break. A page beyond the available data yields an
/// empty vector, not an error.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `teacher_id` - The teacher whose records to list
/// * `page` - 1-based page number
/// * `size` - Page size
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn list_feedback_page(
    conn: &mut SqliteConnection,
    teacher_id: &str,
    page: u32,
    size: u32,
) -> Result<Vec<FeedbackRecord>, PersistenceError> {
    debug!(teacher_id = %teacher_id, page, size, "Listing feedback page");

    let offset: i64 = i64::from(page.saturating_sub(1)) * i64::from(size);

    let rows: Vec<FeedbackRow> = feedback::table
        .filter(feedback::teacher_id.eq(teacher_id))
        .order((
            feedback::submitted_at.desc(),
            feedback::feedback_id.desc(),
        ))
        .offset(offset)
        .limit(i64::from(size))
        .select(FeedbackRow::as_select())
        .load(conn)?;

    rows.into_iter().map(FeedbackRow::into_record).collect()
}
