// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors from the forecast collaborator.
///
/// Every variant is recoverable from the caller's point of view: a failed
/// forecast degrades one stats row to "no prediction", never the request.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build forecast HTTP client: {0}")]
    ClientBuild(String),

    /// The request could not be sent or timed out.
    #[error("Forecast request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("Forecast service returned status {0}")]
    BadStatus(u16),

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode forecast response: {0}")]
    Decode(String),
}
