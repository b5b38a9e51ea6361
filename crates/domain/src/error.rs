// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Teacher identifier is empty or invalid.
    InvalidTeacherId(String),
    /// Teacher name is empty or invalid.
    InvalidTeacherName(String),
    /// Rating is outside the accepted range.
    RatingOutOfRange {
        /// The rejected rating value.
        value: f64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTeacherId(msg) => write!(f, "Invalid teacher id: {msg}"),
            Self::InvalidTeacherName(msg) => write!(f, "Invalid teacher name: {msg}"),
            Self::RatingOutOfRange { value } => {
                write!(f, "Rating must be between 1 and 5, got {value}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
