// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, DEFAULT_PAGE_SIZE, DEFAULT_STATS_LIMIT, MAX_PAGE_SIZE, PageRequest, StatsRequest,
    resolve_page_request, resolve_stats_request,
};
use classpulse_stats::{SortField, SortOrder};

#[test]
fn test_stats_defaults() {
    let request: StatsRequest = resolve_stats_request(None, None, None, None).unwrap();
    assert_eq!(request.teacher_id, None);
    assert_eq!(request.limit, DEFAULT_STATS_LIMIT);
    assert_eq!(request.sort_field, SortField::AvgRating);
    assert_eq!(request.sort_order, SortOrder::Descending);
}

#[test]
fn test_stats_explicit_parameters() {
    let request: StatsRequest = resolve_stats_request(
        Some(String::from("t-001")),
        Some(5),
        Some("total_feedback"),
        Some(1),
    )
    .unwrap();

    assert_eq!(request.teacher_id.as_deref(), Some("t-001"));
    assert_eq!(request.limit, 5);
    assert_eq!(request.sort_field, SortField::TotalFeedback);
    assert_eq!(request.sort_order, SortOrder::Ascending);
}

#[test]
fn test_stats_unknown_sort_field_falls_back() {
    let request: StatsRequest =
        resolve_stats_request(None, None, Some("no_such_field"), None).unwrap();
    assert_eq!(request.sort_field, SortField::AvgRating);
    assert_eq!(request.sort_order, SortOrder::Descending);
}

#[test]
fn test_stats_zero_limit_rejected() {
    let err: ApiError = resolve_stats_request(None, Some(0), None, None).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "limit"));
}

#[test]
fn test_stats_order_must_be_plus_or_minus_one() {
    assert!(resolve_stats_request(None, None, None, Some(-1)).is_ok());
    assert!(resolve_stats_request(None, None, None, Some(1)).is_ok());

    let err: ApiError = resolve_stats_request(None, None, None, Some(7)).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "order"));

    let err: ApiError = resolve_stats_request(None, None, None, Some(0)).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "order"));
}

#[test]
fn test_page_defaults() {
    let request: PageRequest = resolve_page_request(None, None).unwrap();
    assert_eq!(request.page, 1);
    assert_eq!(request.size, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_page_size_clamped_to_maximum() {
    let request: PageRequest = resolve_page_request(Some(1), Some(1000)).unwrap();
    assert_eq!(request.size, MAX_PAGE_SIZE);
}

#[test]
fn test_page_size_at_maximum_not_clamped() {
    let request: PageRequest = resolve_page_request(Some(1), Some(200)).unwrap();
    assert_eq!(request.size, 200);
}

#[test]
fn test_zero_page_rejected() {
    let err: ApiError = resolve_page_request(Some(0), None).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "page"));
}

#[test]
fn test_zero_size_rejected() {
    let err: ApiError = resolve_page_request(None, Some(0)).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "size"));
}

#[test]
fn test_large_page_number_is_legal() {
    let request: PageRequest = resolve_page_request(Some(999), Some(10)).unwrap();
    assert_eq!(request.page, 999);
}
