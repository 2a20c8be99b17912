//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /url`      - Save a URL
//! - `GET  /health`   - Health check
//! - `GET  /{alias}`  - Alias redirect
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Request ID** - `x-request-id` assigned and echoed on the response
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - A panicking handler yields 500
//! - **Timeout** - 408 after the configured request timeout
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use std::time::Duration;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the router with all routes and middleware except path normalization.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CatchPanicLayer::new())
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}

/// Constructs the application service: [`router`] behind trailing-slash trimming,
/// so `POST /url/` reaches the same handler as `POST /url`.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
