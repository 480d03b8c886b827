// 🌐 Receipt Server - REST API with Axum
// POST /receipts/process, GET /receipts/:id/points

use crate::receipt::process_receipt;
use crate::store::ReceiptStore;
use crate::validation::RawReceipt;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
}

impl AppState {
    pub fn new<S: ReceiptStore + 'static>(store: S) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Serialize)]
struct IdResponse {
    id: Uuid,
}

#[derive(Serialize)]
struct PointsResponse {
    points: u64,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(MessageResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

fn not_found(id: &str) -> Response {
    message(
        StatusCode::NOT_FOUND,
        format!("No receipt found with id {}", id),
    )
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse { status: "OK" })
}

/// POST /receipts/process - Validate, score, and store a receipt
async fn process(
    State(state): State<AppState>,
    payload: Result<Json<RawReceipt>, JsonRejection>,
) -> Response {
    let Json(raw) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            log::warn!("Rejected receipt body: {}", rejection.body_text());
            return message(StatusCode::BAD_REQUEST, "Invalid request");
        }
    };

    match process_receipt(&raw) {
        Ok(receipt) => {
            let points = receipt.points;
            let id = state.store.append(receipt);
            log::info!("Stored receipt {} ({} points)", id, points);

            (StatusCode::OK, Json(IdResponse { id })).into_response()
        }
        Err(e) => {
            log::warn!("Rejected receipt from {:?}: {} ({})", raw.retailer, e, e.field());
            message(StatusCode::BAD_REQUEST, e.to_string())
        }
    }
}

/// GET /receipts/:id/points - Points awarded to a stored receipt
async fn get_points(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    // A malformed id cannot name a stored receipt, so it is reported as not found
    let Ok(uuid) = Uuid::parse_str(&id) else {
        log::debug!("Malformed receipt id {:?}", id);
        return not_found(&id);
    };

    match state.store.find_by_id(&uuid) {
        Some(receipt) => {
            (StatusCode::OK, Json(PointsResponse { points: receipt.points })).into_response()
        }
        None => {
            log::debug!("Unknown receipt id {}", uuid);
            not_found(&id)
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================
