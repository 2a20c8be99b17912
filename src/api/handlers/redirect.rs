//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias was never saved.
/// Returns 500 Internal Server Error on storage failures.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state
        .redirect_service
        .resolve(&alias)
        .await
        .inspect_err(|e| {
            if let AppError::NotFound { .. } = e {
                info!(alias = %alias, "url not found");
            }
        })?;

    info!(url = %url, "got url");

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
}
