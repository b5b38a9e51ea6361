// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Handler helpers: submission parsing and query-parameter resolution.
//!
//! Submissions arrive as raw JSON documents and are validated explicitly
//! here rather than trusted to store-side schema validation, so a missing
//! field, a wrong type, and an out-of-range rating each produce a precise
//! 400 instead of a framework rejection.

use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use classpulse_domain::{FeedbackRecord, NewFeedback, Rating};
use classpulse_stats::{SortField, SortOrder, TeacherStats};

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{FeedbackItem, TeacherStatsRow};

/// Default number of stats rows returned when no `limit` is given.
pub const DEFAULT_STATS_LIMIT: usize = 100;

/// Default page size of the raw feedback listing.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size the listing will serve; larger requests are clamped,
/// not rejected.
pub const MAX_PAGE_SIZE: u32 = 200;

/// A resolved, validated stats request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRequest {
    /// Restrict the aggregation to one teacher when given.
    pub teacher_id: Option<String>,
    /// Maximum number of rows to return.
    pub limit: usize,
    /// The field to order rows by.
    pub sort_field: SortField,
    /// The direction to order rows in.
    pub sort_order: SortOrder,
}

/// A resolved, validated listing page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Effective page size (after clamping).
    pub size: u32,
}

/// Reads a required string field from a submission document.
fn required_string(body: &Value, field: &str) -> Result<String, ApiError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{field} is required"),
        }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{field} must be a string"),
        }),
    }
}

/// Reads an optional string field from a submission document.
fn optional_string(body: &Value, field: &str) -> Result<Option<String>, ApiError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{field} must be a string"),
        }),
    }
}

/// Parses and validates a feedback submission document.
///
/// # Arguments
///
/// * `body` - The submitted JSON document
///
/// # Errors
///
/// Returns an error if:
/// - The body is not a JSON object
/// - `teacher_id` or `teacher_name` is missing, not a string, or empty
/// - `rating` is missing, not a number, or outside `[1, 5]`
/// - `student_id` or `comment` is present but not a string
pub fn parse_submission(body: &Value) -> Result<NewFeedback, ApiError> {
    if !body.is_object() {
        return Err(ApiError::InvalidInput {
            field: String::from("body"),
            message: String::from("Request body must be a JSON object"),
        });
    }

    let teacher_id: String = required_string(body, "teacher_id")?;
    let teacher_name: String = required_string(body, "teacher_name")?;
    let student_id: Option<String> = optional_string(body, "student_id")?;
    let comment: Option<String> = optional_string(body, "comment")?;

    let rating: Rating = match body.get("rating") {
        None | Some(Value::Null) => {
            return Err(ApiError::InvalidInput {
                field: String::from("rating"),
                message: String::from("rating is required"),
            });
        }
        Some(Value::Number(n)) => {
            let value: f64 = n.as_f64().ok_or_else(|| ApiError::InvalidInput {
                field: String::from("rating"),
                message: String::from("rating must be a number"),
            })?;
            Rating::new(value).map_err(translate_domain_error)?
        }
        Some(_) => {
            return Err(ApiError::InvalidInput {
                field: String::from("rating"),
                message: String::from("rating must be a number"),
            });
        }
    };

    NewFeedback::new(teacher_id, teacher_name, student_id, rating, comment)
        .map_err(translate_domain_error)
}

/// Resolves the stats endpoint's query parameters.
///
/// An unknown `sortBy` value falls back to the documented stable ordering
/// (`avg_rating` descending) instead of sorting by an undefined key.
///
/// # Errors
///
/// Returns an error if `limit` is 0 or `order` is neither -1 nor 1.
#[allow(clippy::cast_possible_truncation)]
pub fn resolve_stats_request(
    teacher_id: Option<String>,
    limit: Option<u32>,
    sort_by: Option<&str>,
    order: Option<i32>,
) -> Result<StatsRequest, ApiError> {
    let limit: usize = match limit {
        None => DEFAULT_STATS_LIMIT,
        Some(0) => {
            return Err(ApiError::InvalidInput {
                field: String::from("limit"),
                message: String::from("limit must be at least 1"),
            });
        }
        Some(n) => n as usize,
    };

    let sort_field: SortField = match sort_by {
        None => SortField::default(),
        Some(name) => name.parse().unwrap_or_else(|_| {
            debug!(sort_by = %name, "Unknown sort field, falling back to avg_rating");
            SortField::default()
        }),
    };

    let sort_order: SortOrder = match order {
        None | Some(-1) => SortOrder::Descending,
        Some(1) => SortOrder::Ascending,
        Some(other) => {
            return Err(ApiError::InvalidInput {
                field: String::from("order"),
                message: format!("order must be -1 (descending) or 1 (ascending), got {other}"),
            });
        }
    };

    Ok(StatsRequest {
        teacher_id,
        limit,
        sort_field,
        sort_order,
    })
}

/// Resolves the listing endpoint's pagination parameters.
///
/// Sizes above [`MAX_PAGE_SIZE`] are clamped, not rejected. A page beyond
/// the available data is legal and yields an empty result downstream.
///
/// # Errors
///
/// Returns an error if `page` or `size` is 0.
pub fn resolve_page_request(page: Option<u32>, size: Option<u32>) -> Result<PageRequest, ApiError> {
    let page: u32 = match page {
        None => 1,
        Some(0) => {
            return Err(ApiError::InvalidInput {
                field: String::from("page"),
                message: String::from("page must be at least 1"),
            });
        }
        Some(n) => n,
    };

    let size: u32 = match size {
        None => DEFAULT_PAGE_SIZE,
        Some(0) => {
            return Err(ApiError::InvalidInput {
                field: String::from("size"),
                message: String::from("size must be at least 1"),
            });
        }
        Some(n) => n.min(MAX_PAGE_SIZE),
    };

    Ok(PageRequest { page, size })
}

/// Converts a stats row and its forecast into the wire DTO.
#[must_use]
pub fn stats_row(stats: TeacherStats, predicted_rating: Option<f64>) -> TeacherStatsRow {
    TeacherStatsRow {
        teacher_id: stats.teacher_id,
        teacher_name: stats.teacher_name,
        avg_rating: stats.avg_rating,
        total_feedback: stats.total_feedback,
        positive_count: stats.positive_count,
        positive_percent: stats.positive_percent,
        neutral_count: stats.neutral_count,
        neutral_percent: stats.neutral_percent,
        negative_count: stats.negative_count,
        negative_percent: stats.negative_percent,
        min_rating: stats.min_rating,
        max_rating: stats.max_rating,
        predicted_rating,
    }
}

/// Converts a persisted record into the listing DTO.
///
/// # Errors
///
/// Returns an internal error if the timestamp cannot be formatted.
pub fn feedback_item(record: &FeedbackRecord) -> Result<FeedbackItem, ApiError> {
    let submitted_at: String =
        record
            .submitted_at
            .format(&Rfc3339)
            .map_err(|e| ApiError::Internal {
                message: format!("Failed to format timestamp: {e}"),
            })?;

    Ok(FeedbackItem {
        id: record.id,
        teacher_id: record.teacher_id.clone(),
        teacher_name: record.teacher_name.clone(),
        student_id: record.student_id.clone(),
        rating: record.rating.value(),
        comment: record.comment.clone(),
        submitted_at,
    })
}
