// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{SortField, SortOrder, TeacherStats, UnknownSortField, sort_and_limit};

fn stats_row(teacher_id: &str, avg_rating: f64, total_feedback: u64) -> TeacherStats {
    TeacherStats {
        teacher_id: teacher_id.to_string(),
        teacher_name: format!("Teacher {teacher_id}"),
        avg_rating,
        total_feedback,
        positive_count: 0,
        positive_percent: 0.0,
        neutral_count: 0,
        neutral_percent: 0.0,
        negative_count: 0,
        negative_percent: 0.0,
        min_rating: avg_rating,
        max_rating: avg_rating,
    }
}

#[test]
fn test_sort_field_parses_known_names() {
    assert_eq!("avg_rating".parse::<SortField>(), Ok(SortField::AvgRating));
    assert_eq!(
        "total_feedback".parse::<SortField>(),
        Ok(SortField::TotalFeedback)
    );
    assert_eq!("teacher_id".parse::<SortField>(), Ok(SortField::TeacherId));
    assert_eq!("max_rating".parse::<SortField>(), Ok(SortField::MaxRating));
}

#[test]
fn test_sort_field_rejects_unknown_name() {
    let result: Result<SortField, UnknownSortField> = "no_such_field".parse();
    assert_eq!(result, Err(UnknownSortField(String::from("no_such_field"))));
}

#[test]
fn test_sort_field_default_is_avg_rating() {
    assert_eq!(SortField::default(), SortField::AvgRating);
    assert_eq!(SortOrder::default(), SortOrder::Descending);
}

#[test]
fn test_descending_sort_by_avg_rating() {
    let mut rows: Vec<TeacherStats> = vec![
        stats_row("t-001", 2.5, 10),
        stats_row("t-002", 4.8, 3),
        stats_row("t-003", 3.1, 7),
    ];

    sort_and_limit(&mut rows, SortField::AvgRating, SortOrder::Descending, 100);

    let ids: Vec<&str> = rows.iter().map(|r| r.teacher_id.as_str()).collect();
    assert_eq!(ids, vec!["t-002", "t-003", "t-001"]);
}

#[test]
fn test_ascending_sort_by_total_feedback() {
    let mut rows: Vec<TeacherStats> = vec![
        stats_row("t-001", 2.5, 10),
        stats_row("t-002", 4.8, 3),
        stats_row("t-003", 3.1, 7),
    ];

    sort_and_limit(
        &mut rows,
        SortField::TotalFeedback,
        SortOrder::Ascending,
        100,
    );

    let ids: Vec<&str> = rows.iter().map(|r| r.teacher_id.as_str()).collect();
    assert_eq!(ids, vec!["t-002", "t-003", "t-001"]);
}

#[test]
fn test_limit_truncates_result() {
    let mut rows: Vec<TeacherStats> = vec![
        stats_row("t-001", 2.5, 10),
        stats_row("t-002", 4.8, 3),
        stats_row("t-003", 3.1, 7),
    ];

    sort_and_limit(&mut rows, SortField::AvgRating, SortOrder::Descending, 2);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].teacher_id, "t-002");
    assert_eq!(rows[1].teacher_id, "t-003");
}

#[test]
fn test_ties_break_by_teacher_id_ascending() {
    let mut rows: Vec<TeacherStats> = vec![
        stats_row("t-003", 4.0, 5),
        stats_row("t-001", 4.0, 5),
        stats_row("t-002", 4.0, 5),
    ];

    sort_and_limit(&mut rows, SortField::AvgRating, SortOrder::Descending, 100);
    let ids: Vec<&str> = rows.iter().map(|r| r.teacher_id.as_str()).collect();
    assert_eq!(ids, vec!["t-001", "t-002", "t-003"]);

    // Same tie-break direction even when the primary sort is ascending.
    sort_and_limit(&mut rows, SortField::AvgRating, SortOrder::Ascending, 100);
    let ids: Vec<&str> = rows.iter().map(|r| r.teacher_id.as_str()).collect();
    assert_eq!(ids, vec!["t-001", "t-002", "t-003"]);
}

#[test]
fn test_sort_is_deterministic_across_runs() {
    let build = || {
        vec![
            stats_row("t-002", 4.0, 5),
            stats_row("t-001", 4.0, 9),
            stats_row("t-003", 2.0, 1),
        ]
    };

    let mut first: Vec<TeacherStats> = build();
    let mut second: Vec<TeacherStats> = build();
    sort_and_limit(&mut first, SortField::AvgRating, SortOrder::Descending, 100);
    sort_and_limit(&mut second, SortField::AvgRating, SortOrder::Descending, 100);

    assert_eq!(first, second);
}
