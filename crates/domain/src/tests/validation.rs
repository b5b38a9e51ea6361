// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, NewFeedback, Rating};

fn create_test_feedback(teacher_id: &str, teacher_name: &str) -> Result<NewFeedback, DomainError> {
    NewFeedback::new(
        teacher_id.to_string(),
        teacher_name.to_string(),
        Some(String::from("student-1")),
        Rating::new(4.0).unwrap(),
        Some(String::from("Very clear lectures")),
    )
}

#[test]
fn test_valid_feedback_accepted() {
    let result: Result<NewFeedback, DomainError> = create_test_feedback("t-001", "Ada Lovelace");
    assert!(result.is_ok());
    let feedback: NewFeedback = result.unwrap();
    assert_eq!(feedback.teacher_id, "t-001");
    assert_eq!(feedback.teacher_name, "Ada Lovelace");
}

#[test]
fn test_empty_teacher_id_rejected() {
    let result: Result<NewFeedback, DomainError> = create_test_feedback("", "Ada Lovelace");
    assert!(matches!(result, Err(DomainError::InvalidTeacherId(_))));
}

#[test]
fn test_whitespace_teacher_id_rejected() {
    let result: Result<NewFeedback, DomainError> = create_test_feedback("   ", "Ada Lovelace");
    assert!(matches!(result, Err(DomainError::InvalidTeacherId(_))));
}

#[test]
fn test_empty_teacher_name_rejected() {
    let result: Result<NewFeedback, DomainError> = create_test_feedback("t-001", "");
    assert!(matches!(result, Err(DomainError::InvalidTeacherName(_))));
}

#[test]
fn test_optional_fields_may_be_absent() {
    let result: Result<NewFeedback, DomainError> = NewFeedback::new(
        String::from("t-001"),
        String::from("Ada Lovelace"),
        None,
        Rating::new(2.0).unwrap(),
        None,
    );
    assert!(result.is_ok());
    let feedback: NewFeedback = result.unwrap();
    assert!(feedback.student_id.is_none());
    assert!(feedback.comment.is_none());
}
