// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for ClassPulse.
//!
//! This crate owns the HTTP-facing contract: request/response DTOs, the
//! explicit validation of incoming submissions and query parameters, and
//! the translation of lower-layer errors into the API error taxonomy.
//! Nothing here performs I/O; the server crate wires these functions to
//! the router and the persistence layer.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use handlers::{
    DEFAULT_PAGE_SIZE, DEFAULT_STATS_LIMIT, MAX_PAGE_SIZE, PageRequest, StatsRequest,
    feedback_item, parse_submission, resolve_page_request, resolve_stats_request, stats_row,
};
pub use request_response::{
    ErrorResponse, FeedbackItem, FeedbackPageResponse, HealthResponse, SubmitFeedbackResponse,
    TeacherStatsResponse, TeacherStatsRow,
};
