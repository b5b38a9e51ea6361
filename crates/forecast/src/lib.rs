// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client for the rating forecast service.
//!
//! The forecast service is an external collaborator: it accepts a
//! time-ordered sequence of monthly average ratings and returns a single
//! predicted value, or nothing when it cannot forecast. This crate owns the
//! wire types and the HTTP client; the decision to *swallow* forecast
//! failures per stats row belongs to the caller.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod client;
mod error;
mod types;


pub use client::{ForecastClient, Forecaster};
pub use error::ForecastError;
pub use types::MonthlyRating;

/// Minimum number of distinct months of history the forecast service
/// needs to produce a prediction. Below this, callers skip the call
/// entirely.
pub const MIN_HISTORY_MONTHS: usize = 2;
