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
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use clap::Parser;
use report_portal::{Catalog, ParamValues};
use report_portal_api::{
    ApiError, CategoryTreeResponse, ExportReportResponse, ListCategoriesResponse,
    ListReportsResponse, ReportDetailResponse, RunReportResponse, category_tree, export_report,
    get_report, list_categories, list_reports, run_report,
};
use report_portal_domain::UserProfile;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Report Portal Server - HTTP server for the reporting portal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the catalog JSON file.
    #[arg(short, long)]
    catalog: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The catalog is an immutable snapshot loaded once at startup, so
/// handlers share it without locking.
#[derive(Clone)]
struct AppState {
    /// The validated catalog snapshot.
    catalog: Arc<Catalog>,
}

/// API request carrying only the requesting user context.
///
/// The user context travels in the body; an absent user is an anonymous
/// request. Authentication happens upstream of this server.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UserContextRequest {
    /// The requesting user, if authenticated.
    #[serde(default)]
    user: Option<UserProfile>,
}

/// API request for listing reports.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ListReportsApiRequest {
    /// The requesting user, if authenticated.
    #[serde(default)]
    user: Option<UserProfile>,
    /// Optional search string narrowing the listing.
    #[serde(default)]
    search: Option<String>,
}

/// API request for running or exporting a report.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RunReportApiRequest {
    /// The requesting user, if authenticated.
    #[serde(default)]
    user: Option<UserProfile>,
    /// The parameter submission, keyed by parameter name.
    #[serde(default)]
    params: ParamValues,
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
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
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::ReportNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::PermissionDenied { .. } | ApiError::ExportDenied => StatusCode::FORBIDDEN,
            ApiError::InvalidParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ExportFailed { .. } | ApiError::Core(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/categories`.
async fn handle_list_categories(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UserContextRequest>,
) -> Json<ListCategoriesResponse> {
    Json(list_categories(&app_state.catalog, req.user.as_ref()))
}

/// Handler for POST `/reports`.
async fn handle_list_reports(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ListReportsApiRequest>,
) -> Json<ListReportsResponse> {
    Json(list_reports(
        &app_state.catalog,
        req.user.as_ref(),
        req.search.as_deref(),
    ))
}

/// Handler for POST `/tree`.
async fn handle_category_tree(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UserContextRequest>,
) -> Json<CategoryTreeResponse> {
    Json(category_tree(&app_state.catalog, req.user.as_ref()))
}

/// Handler for POST `/reports/{report_id}`.
async fn handle_get_report(
    AxumState(app_state): AxumState<AppState>,
    Path(report_id): Path<i64>,
    Json(req): Json<UserContextRequest>,
) -> Result<Json<ReportDetailResponse>, HttpError> {
    let response: ReportDetailResponse =
        get_report(&app_state.catalog, req.user.as_ref(), report_id)?;
    Ok(Json(response))
}

/// Handler for POST `/reports/{report_id}/run`.
async fn handle_run_report(
    AxumState(app_state): AxumState<AppState>,
    Path(report_id): Path<i64>,
    Json(req): Json<RunReportApiRequest>,
) -> Result<Json<RunReportResponse>, HttpError> {
    let response: RunReportResponse = run_report(
        &app_state.catalog,
        req.user.as_ref(),
        report_id,
        &req.params,
    )?;
    Ok(Json(response))
}

/// Handler for POST `/reports/{report_id}/export`.
async fn handle_export_report(
    AxumState(app_state): AxumState<AppState>,
    Path(report_id): Path<i64>,
    Json(req): Json<RunReportApiRequest>,
) -> Result<Json<ExportReportResponse>, HttpError> {
    let response: ExportReportResponse = export_report(
        &app_state.catalog,
        req.user.as_ref(),
        report_id,
        &req.params,
    )?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/categories", post(handle_list_categories))
        .route("/reports", post(handle_list_reports))
        .route("/tree", post(handle_category_tree))
        .route("/reports/{report_id}", post(handle_get_report))
        .route("/reports/{report_id}/run", post(handle_run_report))
        .route("/reports/{report_id}/export", post(handle_export_report))
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

    info!("Initializing Report Portal Server");

    // Load and validate the catalog snapshot
    let text: String = std::fs::read_to_string(&args.catalog)?;
    let catalog: Catalog = Catalog::from_json(&text)?;
    info!(
        categories = catalog.categories().len(),
        reports = catalog.reports().len(),
        "Catalog loaded from {}",
        args.catalog
    );

    let dangling: Vec<i64> = catalog.dangling_category_refs();
    if !dangling.is_empty() {
        warn!(?dangling, "Reports reference categories that do not exist");
    }

    let app_state: AppState = AppState {
        catalog: Arc::new(catalog),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
