// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// One month of rating history sent to the forecast service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRating {
    /// Calendar month in `YYYY-MM` form.
    pub month: String,
    /// Mean rating across that month's records.
    pub avg_rating: f64,
}

/// The request body of the forecast endpoint.
///
/// The `data` sequence must be ordered chronologically ascending; the
/// service regresses over sequence positions, not parsed dates.
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    /// The monthly history, oldest first.
    pub data: &'a [MonthlyRating],
}

/// The response body of the forecast endpoint.
///
/// Any shape lacking `predicted_rating` (including the service's own
/// `{"error": ...}` answers) deserializes to "no prediction".
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    /// The predicted next rating, when the service produced one.
    pub predicted_rating: Option<f64>,
}
