//! HTTP request handlers for the Gateway service.
//!
//! Implements the single parameterized provenance route and a health
//! check using axum. The provenance handler waits out the configured
//! simulated fetch delay before answering, imitating a slow chain read.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router as AxumRouter,
};
use leaftrace_domain::{ProductId, ProvenanceRecord};
use leaftrace_ledger::{LookupError, MockLedger, ProvenanceSource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The mock ledger every lookup resolves against
    pub ledger: Arc<MockLedger>,
    /// Simulated fetch delay applied per lookup
    pub fetch_delay: Duration,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Configured simulated fetch delay in milliseconds
    pub fetch_delay_ms: u64,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Record lookup failed
    LookupError(LookupError),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::LookupError(e) => (StatusCode::NOT_FOUND, e.to_string()),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        AppError::LookupError(e)
    }
}

/// GET /provenance/:id - Resolve a provenance record
///
/// The identifier is opaque; normalization happens at scan intake, and
/// whatever reaches this route is looked up as-is.
async fn lookup_provenance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProvenanceRecord>, AppError> {
    let request_id = uuid::Uuid::now_v7();
    let product = ProductId::new(id);

    info!(%request_id, code = product.as_str(), "provenance lookup");

    // Simulated chain-read latency
    tokio::time::sleep(state.fetch_delay).await;

    let record = state.ledger.lookup(&product)?;

    info!(%request_id, batch = %record.batch_number, "record resolved");

    Ok(Json(record))
}

/// GET /health - Liveness check
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        fetch_delay_ms: state.fetch_delay.as_millis() as u64,
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/provenance/:id", get(lookup_provenance))
        .route("/health", get(health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot

    fn create_test_state() -> AppState {
        AppState {
            ledger: Arc::new(MockLedger::new()),
            fetch_delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_lookup_provenance_ok() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/provenance/BT123456")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_lookup_resolves_through_the_ledger() {
        let state = create_test_state();
        let record = state
            .ledger
            .lookup(&ProductId::new("BT123456"))
            .expect("mock never fails");

        assert_eq!(record.batch_number, "BATCH-BT123456");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/batches/BT123456")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
