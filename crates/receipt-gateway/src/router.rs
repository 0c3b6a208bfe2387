//! HTTP routes and handlers.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | POST | `/receipts/process` | `{"id": "..."}` |
//! | GET | `/receipts/:id/points` | `{"points": n}` |
//! | GET | `/health` | service status |
//! | GET | `/metrics` | request counters |

use crate::domain::config::GatewayConfig;
use crate::domain::error::{ApiError, ApiResult};
use crate::middleware::{create_cors_layer, GatewayMetrics, TimeoutLayer, TracingLayer};
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use receipt_core::{ReceiptId, ReceiptProcessorApi, ReceiptSubmission};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn ReceiptProcessorApi>,
    pub metrics: Arc<GatewayMetrics>,
}

impl AppState {
    pub fn new(api: Arc<dyn ReceiptProcessorApi>, metrics: Arc<GatewayMetrics>) -> Self {
        Self { api, metrics }
    }
}

/// Body of a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Body of a successful points lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Build the HTTP router with its middleware stack.
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(create_cors_layer(&config.cors))
        .layer(TracingLayer::new())
        .layer(TimeoutLayer::new(&config.timeouts, Arc::clone(&state.metrics)));

    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .layer(DefaultBodyLimit::max(config.limits.max_request_size))
        .layer(middleware)
        .with_state(state)
}

/// Validate and store a receipt.
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptSubmission>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let result = payload
        .map_err(ApiError::from)
        .and_then(|Json(submission)| state.api.process(submission).map_err(ApiError::from));

    state.metrics.record_submission(result.is_ok());
    let id = result?;

    Ok(Json(ProcessResponse { id }))
}

/// Score a stored receipt.
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let result = state.api.points(&ReceiptId::from(id));

    state.metrics.record_points_lookup(result.is_ok());
    let points = result?;

    Ok(Json(PointsResponse { points }))
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "receipt-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "receipts": state.api.receipt_count(),
    }))
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.to_json())
}
