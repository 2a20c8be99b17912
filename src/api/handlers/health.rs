//! Handler for the health endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::api::dto::health::{HealthChecks, HealthResponse, Probe, ServiceHealth};
use crate::state::AppState;

/// Reports whether the store answers queries.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: `"status": "healthy"`
/// - **503 Service Unavailable**: `"status": "degraded"`, storage probe failed
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let storage = match state.store.ping().await {
        Ok(()) => Probe::ok("connected"),
        Err(e) => {
            warn!(error = %e, "storage probe failed");
            Probe::failed("storage unavailable")
        }
    };

    let response = HealthResponse::from_checks(HealthChecks { storage });
    let status = match response.status {
        ServiceHealth::Healthy => StatusCode::OK,
        ServiceHealth::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(response)).into_response()
}
