// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use classpulse_domain::{NewFeedback, Rating};

pub fn create_test_feedback(teacher_id: &str, teacher_name: &str, rating: f64) -> NewFeedback {
    NewFeedback::new(
        teacher_id.to_string(),
        teacher_name.to_string(),
        Some(String::from("student-1")),
        Rating::new(rating).unwrap(),
        Some(String::from("Test comment")),
    )
    .unwrap()
}
