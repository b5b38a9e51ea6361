// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregate::TeacherStats;
use std::cmp::Ordering;
use std::str::FromStr;

/// The stats-row field a result set can be ordered by.
///
/// Field names follow the wire names of the stats row. Unknown names do not
/// parse; callers fall back to the default (`avg_rating` descending) rather
/// than sorting by an undefined key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Order by teacher identifier.
    TeacherId,
    /// Order by teacher display name.
    TeacherName,
    /// Order by mean rating (the default).
    #[default]
    AvgRating,
    /// Order by group size.
    TotalFeedback,
    /// Order by positive bucket count.
    PositiveCount,
    /// Order by positive bucket percentage.
    PositivePercent,
    /// Order by neutral bucket count.
    NeutralCount,
    /// Order by neutral bucket percentage.
    NeutralPercent,
    /// Order by negative bucket count.
    NegativeCount,
    /// Order by negative bucket percentage.
    NegativePercent,
    /// Order by lowest rating.
    MinRating,
    /// Order by highest rating.
    MaxRating,
}

/// Error returned when a sort field name does not match any stats-row field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortField(pub String);

impl std::fmt::Display for UnknownSortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown sort field: '{}'", self.0)
    }
}

impl std::error::Error for UnknownSortField {}

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teacher_id" => Ok(Self::TeacherId),
            "teacher_name" => Ok(Self::TeacherName),
            "avg_rating" => Ok(Self::AvgRating),
            "total_feedback" => Ok(Self::TotalFeedback),
            "positive_count" => Ok(Self::PositiveCount),
            "positive_percent" => Ok(Self::PositivePercent),
            "neutral_count" => Ok(Self::NeutralCount),
            "neutral_percent" => Ok(Self::NeutralPercent),
            "negative_count" => Ok(Self::NegativeCount),
            "negative_percent" => Ok(Self::NegativePercent),
            "min_rating" => Ok(Self::MinRating),
            "max_rating" => Ok(Self::MaxRating),
            _ => Err(UnknownSortField(s.to_string())),
        }
    }
}

/// Sort direction for stats rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first (the default).
    #[default]
    Descending,
}

/// Compares two rows on a single field, ascending.
fn compare_field(a: &TeacherStats, b: &TeacherStats, field: SortField) -> Ordering {
    match field {
        SortField::TeacherId => a.teacher_id.cmp(&b.teacher_id),
        SortField::TeacherName => a.teacher_name.cmp(&b.teacher_name),
        SortField::AvgRating => compare_f64(a.avg_rating, b.avg_rating),
        SortField::TotalFeedback => a.total_feedback.cmp(&b.total_feedback),
        SortField::PositiveCount => a.positive_count.cmp(&b.positive_count),
        SortField::PositivePercent => compare_f64(a.positive_percent, b.positive_percent),
        SortField::NeutralCount => a.neutral_count.cmp(&b.neutral_count),
        SortField::NeutralPercent => compare_f64(a.neutral_percent, b.neutral_percent),
        SortField::NegativeCount => a.negative_count.cmp(&b.negative_count),
        SortField::NegativePercent => compare_f64(a.negative_percent, b.negative_percent),
        SortField::MinRating => compare_f64(a.min_rating, b.min_rating),
        SortField::MaxRating => compare_f64(a.max_rating, b.max_rating),
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Sorts stats rows by the requested field and direction, then truncates to
/// `limit`.
///
/// Ties break by `teacher_id` ascending regardless of direction, so that
/// repeated identical requests return identical row order.
pub fn sort_and_limit(
    rows: &mut Vec<TeacherStats>,
    field: SortField,
    order: SortOrder,
    limit: usize,
) {
    rows.sort_by(|a, b| {
        let primary: Ordering = match order {
            SortOrder::Ascending => compare_field(a, b, field),
            SortOrder::Descending => compare_field(b, a, field),
        };
        primary.then_with(|| a.teacher_id.cmp(&b.teacher_id))
    });
    rows.truncate(limit);
}
