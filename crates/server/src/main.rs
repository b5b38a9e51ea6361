// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use classpulse_api::{
    ApiError, ErrorResponse, FeedbackItem, FeedbackPageResponse, HealthResponse, PageRequest,
    StatsRequest, SubmitFeedbackResponse, TeacherStatsResponse, TeacherStatsRow, feedback_item,
    parse_submission, resolve_page_request, resolve_stats_request, stats_row,
};
use classpulse_domain::{FeedbackRecord, NewFeedback};
use classpulse_forecast::{ForecastClient, Forecaster, MIN_HISTORY_MONTHS, MonthlyRating};
use classpulse_persistence::{Persistence, PersistenceError};
use classpulse_stats::{TeacherStats, aggregate, monthly_averages, sort_and_limit};

/// Port used when neither the CLI nor the environment names one.
const DEFAULT_PORT: u16 = 4000;

/// Forecast endpoint used when neither the CLI nor the environment names one.
const DEFAULT_FORECAST_URL: &str = "http://127.0.0.1:8001/predict";

/// Per-call timeout on the forecast collaborator. Bounds how long one slow
/// dependency can stall a stats response.
const FORECAST_TIMEOUT: Duration = Duration::from_secs(5);

/// ClassPulse Server - HTTP server for student feedback and teacher statistics
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. Falls back to the
    /// `CLASSPULSE_DATABASE` environment variable, then to an in-memory
    /// database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to. Falls back to `CLASSPULSE_PORT`,
    /// then to 4000.
    #[arg(short, long)]
    port: Option<u16>,

    /// Forecast service endpoint. Falls back to `CLASSPULSE_FORECAST_URL`,
    /// then to a local development default.
    #[arg(long)]
    forecast_url: Option<String>,
}

/// Resolves the database path: CLI flag, then environment, then in-memory.
fn resolve_database(cli: Option<String>, env: Option<String>) -> Option<String> {
    cli.or(env)
}

/// Resolves the listen port: CLI flag, then environment, then the default.
fn resolve_port(cli: Option<u16>, env: Option<String>) -> u16 {
    if let Some(port) = cli {
        return port;
    }
    if let Some(raw) = env {
        match raw.parse() {
            Ok(port) => return port,
            Err(_) => {
                warn!(value = %raw, "CLASSPULSE_PORT is not a valid port, using default");
            }
        }
    }
    DEFAULT_PORT
}

/// Resolves the forecast endpoint: CLI flag, then environment, then the default.
fn resolve_forecast_url(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .unwrap_or_else(|| DEFAULT_FORECAST_URL.to_string())
}

/// Application state shared across handlers.
///
/// The persistence layer is wrapped in a Mutex to allow safe concurrent
/// access; the forecaster is behind a trait object so tests can substitute
/// stubs.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for feedback records.
    persistence: Arc<Mutex<Persistence>>,
    /// The forecast collaborator client.
    forecaster: Arc<dyn Forecaster>,
}

/// Query parameters for the teacher statistics endpoint.
#[derive(Debug, Deserialize)]
struct StatsQuery {
    /// Restrict the aggregation to one teacher.
    teacher_id: Option<String>,
    /// Maximum number of rows to return (default 100).
    limit: Option<u32>,
    /// The stats-row field to sort by (default `avg_rating`).
    #[serde(rename = "sortBy")]
    sort_by: Option<String>,
    /// Sort direction: -1 descending (default), 1 ascending.
    order: Option<i32>,
}

/// Query parameters for the raw feedback listing endpoint.
#[derive(Debug, Deserialize)]
struct PageQuery {
    /// 1-based page number (default 1).
    page: Option<u32>,
    /// Page size (default 50, values above 200 clamped).
    size: Option<u32>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::from("internal server error"),
                }
            }
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: String::from("internal server error"),
        }
    }
}

/// Handler for GET `/` endpoint.
///
/// Liveness check.
async fn handle_root() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Handler for POST `/submit-feedback` endpoint.
///
/// Validates and persists one feedback submission.
async fn handle_submit_feedback(
    AxumState(app_state): AxumState<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<SubmitFeedbackResponse>), HttpError> {
    let new_feedback: NewFeedback = parse_submission(&body)?;

    info!(
        teacher_id = %new_feedback.teacher_id,
        rating = new_feedback.rating.value(),
        "Handling submit_feedback request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let id: i64 = persistence.insert_feedback(&new_feedback, None)?;
    drop(persistence);

    info!(feedback_id = id, "Feedback stored");

    Ok((
        StatusCode::CREATED,
        Json(SubmitFeedbackResponse { success: true, id }),
    ))
}

/// Computes one teacher's forecast, swallowing collaborator failures.
///
/// Returns `None` without calling the collaborator when the teacher has
/// fewer than two distinct months of history.
async fn fetch_forecast(
    forecaster: &dyn Forecaster,
    records: &[FeedbackRecord],
    teacher_id: &str,
) -> Option<f64> {
    let history: Vec<MonthlyRating> = monthly_averages(records, teacher_id)
        .into_iter()
        .map(|m| MonthlyRating {
            month: m.month,
            avg_rating: m.avg_rating,
        })
        .collect();

    if history.len() < MIN_HISTORY_MONTHS {
        return None;
    }

    match forecaster.predict(&history).await {
        Ok(predicted) => predicted,
        Err(err) => {
            warn!(
                teacher_id = %teacher_id,
                error = %err,
                "Forecast call failed, continuing without prediction"
            );
            None
        }
    }
}

/// Handler for GET `/teacher-stats` endpoint.
///
/// Aggregates feedback per teacher, sorts and truncates the rows, then
/// enriches each surviving row with a forecast. A forecast failure on one
/// row never fails the response or another row.
async fn handle_teacher_stats(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<TeacherStatsResponse>, HttpError> {
    let request: StatsRequest = resolve_stats_request(
        query.teacher_id,
        query.limit,
        query.sort_by.as_deref(),
        query.order,
    )?;

    info!(
        teacher_id = ?request.teacher_id,
        limit = request.limit,
        "Handling teacher_stats request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let records: Vec<FeedbackRecord> = persistence.load_feedback(request.teacher_id.as_deref())?;
    drop(persistence);

    let mut rows: Vec<TeacherStats> = aggregate(&records);
    sort_and_limit(&mut rows, request.sort_field, request.sort_order, request.limit);

    // Enrichment runs after sort+limit so collaborator calls are bounded
    // by the result set, not the full group count.
    let mut results: Vec<TeacherStatsRow> = Vec::with_capacity(rows.len());
    for row in rows {
        let predicted: Option<f64> =
            fetch_forecast(app_state.forecaster.as_ref(), &records, &row.teacher_id).await;
        results.push(stats_row(row, predicted));
    }

    Ok(Json(TeacherStatsResponse {
        count: results.len(),
        results,
    }))
}

/// Handler for GET `/feedback/{teacher_id}` endpoint.
///
/// Lists one teacher's raw feedback, newest first, paginated.
async fn handle_list_feedback(
    AxumState(app_state): AxumState<AppState>,
    Path(teacher_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<FeedbackPageResponse>, HttpError> {
    let request: PageRequest = resolve_page_request(query.page, query.size)?;

    info!(
        teacher_id = %teacher_id,
        page = request.page,
        size = request.size,
        "Handling list_feedback request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let records: Vec<FeedbackRecord> =
        persistence.list_feedback_page(&teacher_id, request.page, request.size)?;
    drop(persistence);

    let items: Vec<FeedbackItem> = records
        .iter()
        .map(feedback_item)
        .collect::<Result<Vec<FeedbackItem>, ApiError>>()?;

    Ok(Json(FeedbackPageResponse {
        page: request.page,
        size: request.size,
        items,
    }))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/submit-feedback", post(handle_submit_feedback))
        .route("/teacher-stats", get(handle_teacher_stats))
        .route("/feedback/{teacher_id}", get(handle_list_feedback))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing ClassPulse server");

    // Resolve configuration: CLI flag, then environment, then default
    let database: Option<String> =
        resolve_database(args.database, std::env::var("CLASSPULSE_DATABASE").ok());
    let port: u16 = resolve_port(args.port, std::env::var("CLASSPULSE_PORT").ok());
    let forecast_url: String =
        resolve_forecast_url(args.forecast_url, std::env::var("CLASSPULSE_FORECAST_URL").ok());

    // Initialize persistence; failure here is fatal, the process must not
    // accept requests in a half-initialized state
    let persistence: Persistence = if let Some(db_path) = &database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    info!(forecast_url = %forecast_url, "Using forecast service");
    let forecaster: ForecastClient = ForecastClient::new(&forecast_url, FORECAST_TIMEOUT)?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        forecaster: Arc::new(forecaster),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{port}").parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
