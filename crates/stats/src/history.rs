// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use classpulse_domain::FeedbackRecord;
use std::collections::BTreeMap;

/// One month of a teacher's rating history.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAverage {
    /// Calendar month in `YYYY-MM` form.
    pub month: String,
    /// Mean rating across that month's records (unrounded).
    pub avg_rating: f64,
}

/// Formats a record's submission month as a `YYYY-MM` key.
///
/// Zero-padded, so lexicographic order equals chronological order.
fn month_key(record: &FeedbackRecord) -> String {
    format!(
        "{:04}-{:02}",
        record.submitted_at.year(),
        u8::from(record.submitted_at.month())
    )
}

/// Computes a teacher's monthly rating history, ordered chronologically
/// ascending.
///
/// History matches on `teacher_id` alone: records carrying a different
/// `teacher_name` spelling for the same id still contribute to the same
/// history.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn monthly_averages(records: &[FeedbackRecord], teacher_id: &str) -> Vec<MonthlyAverage> {
    let mut months: BTreeMap<String, (f64, u64)> = BTreeMap::new();

    for record in records {
        if record.teacher_id != teacher_id {
            continue;
        }
        let entry: &mut (f64, u64) = months.entry(month_key(record)).or_insert((0.0, 0));
        entry.0 += record.rating.value();
        entry.1 += 1;
    }

    months
        .into_iter()
        .map(|(month, (sum, count))| MonthlyAverage {
            month,
            avg_rating: sum / count as f64,
        })
        .collect()
}
