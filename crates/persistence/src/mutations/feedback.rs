// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Feedback record mutations.
//!
//! Records are write-once: there is no update or delete mutation, and the
//! schema re-checks the rating range the `Rating` type already enforced.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use classpulse_domain::NewFeedback;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::feedback;
use crate::error::PersistenceError;

/// Inserts one feedback record.
///
/// When `submitted_at` is `None` the record is stamped with the current
/// UTC time. Timestamps are truncated to whole seconds and stored as
/// RFC 3339 text: fixed-precision text sorts lexicographically in
/// chronological order (a variable-width subsecond fraction would not),
/// and same-second ties are broken by record id on the read path.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `new_feedback` - The validated submission to persist
/// * `submitted_at` - An explicit submission time, or `None` for "now"
///
/// # Returns
///
/// The store-assigned id of the new record.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_feedback(
    conn: &mut SqliteConnection,
    new_feedback: &NewFeedback,
    submitted_at: Option<OffsetDateTime>,
) -> Result<i64, PersistenceError> {
    let stamp: OffsetDateTime = submitted_at.unwrap_or_else(OffsetDateTime::now_utc);
    let stamp: OffsetDateTime = stamp.replace_nanosecond(0).unwrap_or(stamp);
    let stamp_text: String = stamp
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

    debug!(
        teacher_id = %new_feedback.teacher_id,
        rating = new_feedback.rating.value(),
        "Inserting feedback record"
    );

    diesel::insert_into(feedback::table)
        .values((
            feedback::teacher_id.eq(&new_feedback.teacher_id),
            feedback::teacher_name.eq(&new_feedback.teacher_name),
            feedback::student_id.eq(new_feedback.student_id.as_deref()),
            feedback::rating.eq(new_feedback.rating.value()),
            feedback::comment.eq(new_feedback.comment.as_deref()),
            feedback::submitted_at.eq(&stamp_text),
        ))
        .execute(conn)?;

    let feedback_id: i64 = get_last_insert_rowid(conn)?;

    debug!(feedback_id, "Feedback record inserted");

    Ok(feedback_id)
}
