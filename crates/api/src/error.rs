// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use classpulse_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the API
/// contract: invalid input is the client's fault and surfaces as 400;
/// everything else is internal and surfaces as a generic 500.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTeacherId(msg) => ApiError::InvalidInput {
            field: String::from("teacher_id"),
            message: msg,
        },
        DomainError::InvalidTeacherName(msg) => ApiError::InvalidInput {
            field: String::from("teacher_name"),
            message: msg,
        },
        DomainError::RatingOutOfRange { value } => ApiError::InvalidInput {
            field: String::from("rating"),
            message: format!("Rating must be between 1 and 5, got {value}"),
        },
    }
}
