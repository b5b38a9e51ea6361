// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::error::ForecastError;
use crate::types::{MonthlyRating, PredictRequest, PredictResponse};

/// A source of rating forecasts.
///
/// The production implementation is [`ForecastClient`]; tests substitute
/// stubs to exercise failure isolation without a live service.
#[async_trait]
pub trait Forecaster: Send + Sync {
    /// Requests a prediction for the given monthly history.
    ///
    /// # Arguments
    ///
    /// * `history` - Monthly averages, ordered chronologically ascending
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` when the service produced a prediction
    /// * `Ok(None)` when the service answered but declined to predict
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, answers with a
    /// non-success status, or returns an undecodable body.
    async fn predict(&self, history: &[MonthlyRating]) -> Result<Option<f64>, ForecastError>;
}

/// HTTP client for the forecast service.
pub struct ForecastClient {
    /// The underlying HTTP client, configured with a per-call timeout.
    client: reqwest::Client,
    /// The full prediction endpoint URL.
    endpoint: String,
}

impl ForecastClient {
    /// Creates a new forecast client.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The full prediction endpoint URL
    /// * `timeout` - Per-call timeout; bounds how long one slow forecast
    ///   can hold up a stats row
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ForecastError> {
        let client: reqwest::Client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ForecastError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Forecaster for ForecastClient {
    async fn predict(&self, history: &[MonthlyRating]) -> Result<Option<f64>, ForecastError> {
        debug!(
            months = history.len(),
            endpoint = %self.endpoint,
            "Requesting rating forecast"
        );

        let response: reqwest::Response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { data: history })
            .send()
            .await
            .map_err(|e| ForecastError::Request(e.to_string()))?;

        let status: reqwest::StatusCode = response.status();
        if !status.is_success() {
            return Err(ForecastError::BadStatus(status.as_u16()));
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| ForecastError::Decode(e.to_string()))?;

        Ok(body.predicted_rating)
    }
}
