//! Error taxonomy shared by the store, the services and the HTTP layer.
//!
//! Every fallible core operation returns [`AppError`]. The HTTP layer turns it into the
//! `{"status":"Error","error":...}` envelope via [`IntoResponse`]; storage failures are
//! logged at that boundary and never leak internal detail to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::api::dto::envelope::Envelope;

/// Public text for alias collisions, kept identical to the legacy wire contract.
pub const ALIAS_EXISTS_MESSAGE: &str = "url already exists";

/// Failures of the backing store or of alias allocation.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("no free alias found after {attempts} attempts")]
    AliasSpaceExhausted { attempts: u32 },
}

/// Application error returned by stores and services.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input. Never retried.
    #[error("{message}")]
    Validation { message: String },

    /// The alias is already taken.
    #[error("alias '{alias}' already exists")]
    AliasExists { alias: String },

    /// No record has the alias.
    #[error("alias '{alias}' not found")]
    NotFound { alias: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn alias_exists(alias: impl Into<String>) -> Self {
        Self::AliasExists {
            alias: alias.into(),
        }
    }

    pub fn not_found(alias: impl Into<String>) -> Self {
        Self::NotFound {
            alias: alias.into(),
        }
    }

    /// Status code and client-facing message for this error.
    ///
    /// Storage failures collapse to a generic message; alias-space exhaustion keeps the
    /// collision text so clients see the same wording as for a custom-alias clash.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::AliasExists { .. } => (StatusCode::OK, ALIAS_EXISTS_MESSAGE.to_string()),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not found".to_string()),
            AppError::Storage(StorageError::AliasSpaceExhausted { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ALIAS_EXISTS_MESSAGE.to_string(),
            ),
            AppError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        }
    }

    /// Returns true for failures that must be logged as system errors.
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::Storage(_))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Storage(StorageError::Database(e))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::validation(describe_validation_errors(&errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(error = %self, "request failed");
        }

        let (status, message) = self.status_and_message();
        (status, Json(Envelope::error(message))).into_response()
    }
}

/// Renders validator errors as `field <name> is ...` sentences joined by `", "`.
///
/// Fields are sorted by name so the message is stable.
pub(crate) fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let mut messages = Vec::new();
    for (field, kind) in fields {
        let ValidationErrorsKind::Field(field_errors) = kind else {
            messages.push(format!("field {field} is not valid"));
            continue;
        };

        // One sentence per field: a missing value hides the format complaints.
        let message = if field_errors.iter().any(|e| e.code == "required") {
            format!("field {field} is a required field")
        } else if field_errors.iter().any(|e| e.code == "url") {
            format!("field {field} is not a valid URL")
        } else {
            format!("field {field} is not valid")
        };
        messages.push(message);
    }

    messages.join(", ")
}
