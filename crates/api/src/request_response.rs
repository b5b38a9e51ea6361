// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs.
//!
//! These types define the JSON wire contract and are distinct from domain
//! and stats types; the handler helpers convert between the two.

use serde::{Deserialize, Serialize};

/// Response for a successful feedback submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFeedbackResponse {
    /// Success indicator.
    pub success: bool,
    /// The store-assigned id of the new record.
    pub id: i64,
}

/// One per-teacher row of the stats response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherStatsRow {
    /// The teacher's identifier.
    pub teacher_id: String,
    /// The teacher's display name.
    pub teacher_name: String,
    /// Mean rating, rounded to 2 decimals.
    pub avg_rating: f64,
    /// Number of feedback records.
    pub total_feedback: u64,
    /// Records with rating >= 4.
    pub positive_count: u64,
    /// Positive share in percent, rounded to 2 decimals.
    pub positive_percent: f64,
    /// Records with rating == 3.
    pub neutral_count: u64,
    /// Neutral share in percent, rounded to 2 decimals.
    pub neutral_percent: f64,
    /// Records with rating <= 2.
    pub negative_count: u64,
    /// Negative share in percent, rounded to 2 decimals.
    pub negative_percent: f64,
    /// Lowest rating.
    pub min_rating: f64,
    /// Highest rating.
    pub max_rating: f64,
    /// The forecast collaborator's prediction; `null` when no forecast
    /// is available.
    pub predicted_rating: Option<f64>,
}

/// Response for the teacher statistics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherStatsResponse {
    /// Number of rows returned.
    pub count: usize,
    /// The per-teacher rows, sorted and truncated as requested.
    pub results: Vec<TeacherStatsRow>,
}

/// One feedback record in the raw listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// The store-assigned record identifier.
    pub id: i64,
    /// The rated teacher's identifier.
    pub teacher_id: String,
    /// The rated teacher's display name.
    pub teacher_name: String,
    /// The submitting student's identifier, if disclosed.
    pub student_id: Option<String>,
    /// The rating.
    pub rating: f64,
    /// Free-form comment, if any.
    pub comment: Option<String>,
    /// Submission time, RFC 3339.
    pub submitted_at: String,
}

/// Response for the raw feedback listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackPageResponse {
    /// The 1-based page number served.
    pub page: u32,
    /// The effective page size (after clamping).
    pub size: u32,
    /// The records on this page, newest first.
    pub items: Vec<FeedbackItem>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Liveness response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always true once the server is accepting requests.
    pub ok: bool,
}
