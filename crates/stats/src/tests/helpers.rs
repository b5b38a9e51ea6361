// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use classpulse_domain::{FeedbackRecord, Rating};
use time::OffsetDateTime;
use time::macros::datetime;

/// Builds a record with a fixed submission time.
pub fn record(id: i64, teacher_id: &str, teacher_name: &str, rating: f64) -> FeedbackRecord {
    record_at(
        id,
        teacher_id,
        teacher_name,
        rating,
        datetime!(2025-03-10 12:00 UTC),
    )
}

/// Builds a record submitted at a specific instant.
pub fn record_at(
    id: i64,
    teacher_id: &str,
    teacher_name: &str,
    rating: f64,
    submitted_at: OffsetDateTime,
) -> FeedbackRecord {
    FeedbackRecord {
        id,
        teacher_id: teacher_id.to_string(),
        teacher_name: teacher_name.to_string(),
        student_id: None,
        rating: Rating::new(rating).unwrap(),
        comment: None,
        submitted_at,
    }
}

/// Asserts two floats are equal to well within 2-decimal rounding.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
