//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /url`      - Save a URL, optionally under a custom alias
/// - `GET  /health`   - Storage health check
/// - `GET  /{alias}`  - 302 redirect to the stored URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
}
