//! Handler for the save endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};
use validator::Validate;

use crate::api::dto::envelope::Envelope;
use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::{AppError, StorageError};
use crate::state::AppState;

/// Saves a URL and returns its alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "shop" }
/// ```
///
/// `alias` is optional; when absent or empty a random alias is generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "shop" }
/// ```
///
/// # Errors
///
/// - 400 `empty request` / `failed to decode request` for unreadable bodies
/// - 400 `field url is ...` for validation failures
/// - 200 `url already exists` when the chosen alias is taken
/// - 500 `url already exists` when no free alias could be generated
/// - 500 `failed to add url` on storage failures
pub async fn save_handler(State(state): State<AppState>, body: Bytes) -> Response {
    match save(&state, &body).await {
        Ok(alias) => Json(SaveResponse::ok(alias)).into_response(),
        Err(AppError::Storage(StorageError::Database(e))) => {
            error!(error = %e, "failed to add url");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::error("failed to add url")),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

async fn save(state: &AppState, body: &[u8]) -> Result<String, AppError> {
    let request = decode(body)?;
    debug!(request = ?request, "request body decoded");

    request.validate()?;

    state
        .save_service
        .save(&request.url, request.custom_alias())
        .await
}

fn decode(body: &[u8]) -> Result<SaveRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        error!("request body is empty");
        return Err(AppError::validation("empty request"));
    }

    serde_json::from_slice(body).map_err(|e| {
        error!(error = %e, "failed to decode request body");
        AppError::validation("failed to decode request")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_body() {
        let err = decode(b"").unwrap_err();
        assert_eq!(err.to_string(), "empty request");

        let err = decode(b"  \n").unwrap_err();
        assert_eq!(err.to_string(), "empty request");
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = decode(b"{url:").unwrap_err();
        assert_eq!(err.to_string(), "failed to decode request");
    }

    #[test]
    fn test_decode_wrong_type() {
        let err = decode(br#"{"url": 42}"#).unwrap_err();
        assert_eq!(err.to_string(), "failed to decode request");
    }

    #[test]
    fn test_decode_valid_body() {
        let request = decode(br#"{"url":"https://example.com","alias":"shop"}"#).unwrap();
        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.custom_alias(), Some("shop"));
    }
}
