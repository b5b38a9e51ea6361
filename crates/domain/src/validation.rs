// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::NewFeedback;

/// Validates that a feedback submission's basic field constraints are met.
///
/// The rating range is enforced by the `Rating` type at construction, so
/// this function only checks the textual required fields.
///
/// # Arguments
///
/// * `feedback` - The submission to validate
///
/// # Returns
///
/// * `Ok(())` if the submission's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The teacher id is empty
/// - The teacher name is empty
pub fn validate_feedback_fields(feedback: &NewFeedback) -> Result<(), DomainError> {
    // Rule: teacher_id must not be empty
    if feedback.teacher_id.trim().is_empty() {
        return Err(DomainError::InvalidTeacherId(String::from(
            "Teacher id cannot be empty",
        )));
    }

    // Rule: teacher_name must not be empty
    if feedback.teacher_name.trim().is_empty() {
        return Err(DomainError::InvalidTeacherName(String::from(
            "Teacher name cannot be empty",
        )));
    }

    // Rating validation is done at construction time via Rating::new()

    Ok(())
}
