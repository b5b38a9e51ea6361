// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{assert_close, record};
use crate::{TeacherStats, aggregate};
use classpulse_domain::FeedbackRecord;

#[test]
fn test_single_teacher_distribution() {
    // Six ratings spanning every bucket.
    let records: Vec<FeedbackRecord> = [5.0, 5.0, 4.0, 3.0, 2.0, 1.0]
        .iter()
        .enumerate()
        .map(|(i, r)| record(i64::try_from(i).unwrap(), "t-001", "Ada Lovelace", *r))
        .collect();

    let rows: Vec<TeacherStats> = aggregate(&records);
    assert_eq!(rows.len(), 1);

    let row: &TeacherStats = &rows[0];
    assert_eq!(row.teacher_id, "t-001");
    assert_eq!(row.teacher_name, "Ada Lovelace");
    assert_close(row.avg_rating, 3.33);
    assert_eq!(row.total_feedback, 6);
    assert_eq!(row.positive_count, 3);
    assert_eq!(row.neutral_count, 1);
    assert_eq!(row.negative_count, 2);
    assert_close(row.positive_percent, 50.0);
    assert_close(row.neutral_percent, 16.67);
    assert_close(row.negative_percent, 33.33);
    assert_close(row.min_rating, 1.0);
    assert_close(row.max_rating, 5.0);
}

#[test]
fn test_no_records_produces_no_rows() {
    let rows: Vec<TeacherStats> = aggregate(&[]);
    assert!(rows.is_empty());
}

#[test]
fn test_groups_by_teacher_id_and_name() {
    let records: Vec<FeedbackRecord> = vec![
        record(1, "t-001", "Ada Lovelace", 5.0),
        record(2, "t-002", "Alan Turing", 3.0),
        record(3, "t-001", "Ada Lovelace", 4.0),
    ];

    let mut rows: Vec<TeacherStats> = aggregate(&records);
    rows.sort_by(|a, b| a.teacher_id.cmp(&b.teacher_id));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].total_feedback, 2);
    assert_close(rows[0].avg_rating, 4.5);
    assert_eq!(rows[1].total_feedback, 1);
}

#[test]
fn test_same_id_different_name_forms_separate_groups() {
    // The grouping key is the (id, name) pair, matching the store pipeline
    // this was derived from.
    let records: Vec<FeedbackRecord> = vec![
        record(1, "t-001", "Ada Lovelace", 5.0),
        record(2, "t-001", "A. Lovelace", 1.0),
    ];

    let rows: Vec<TeacherStats> = aggregate(&records);
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_mid_scale_rating_counts_toward_total_but_no_bucket() {
    let records: Vec<FeedbackRecord> = vec![
        record(1, "t-001", "Ada Lovelace", 3.5),
        record(2, "t-001", "Ada Lovelace", 4.0),
    ];

    let rows: Vec<TeacherStats> = aggregate(&records);
    assert_eq!(rows[0].total_feedback, 2);
    assert_eq!(rows[0].positive_count, 1);
    assert_eq!(rows[0].neutral_count, 0);
    assert_eq!(rows[0].negative_count, 0);
    assert_close(rows[0].positive_percent, 50.0);
}

#[test]
fn test_single_record_group() {
    let rows: Vec<TeacherStats> = aggregate(&[record(1, "t-001", "Ada Lovelace", 2.0)]);
    assert_eq!(rows.len(), 1);
    assert_close(rows[0].avg_rating, 2.0);
    assert_close(rows[0].min_rating, 2.0);
    assert_close(rows[0].max_rating, 2.0);
    assert_eq!(rows[0].negative_count, 1);
    assert_close(rows[0].negative_percent, 100.0);
}

#[test]
fn test_average_is_rounded_to_two_decimals() {
    // 1 + 2 + 2 = 5, mean 1.6666... -> 1.67
    let records: Vec<FeedbackRecord> = vec![
        record(1, "t-001", "Ada Lovelace", 1.0),
        record(2, "t-001", "Ada Lovelace", 2.0),
        record(3, "t-001", "Ada Lovelace", 2.0),
    ];

    let rows: Vec<TeacherStats> = aggregate(&records);
    assert_close(rows[0].avg_rating, 1.67);
}
