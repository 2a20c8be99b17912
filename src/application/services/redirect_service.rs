//! Alias resolution service.

use std::sync::Arc;

use tracing::{Instrument, Span, debug, info_span};

use crate::domain::repositories::UrlStore;
use crate::error::AppError;

/// Resolves aliases to their stored URLs. Read-only.
pub struct RedirectService {
    store: Arc<dyn UrlStore>,
    span: Span,
}

impl RedirectService {
    /// Creates a redirect service logging under `span`.
    pub fn new(store: Arc<dyn UrlStore>, span: Span) -> Self {
        Self { store, span }
    }

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the alias is empty.
    /// Returns [`AppError::NotFound`] if the alias was never saved.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            return Err(AppError::validation("invalid request"));
        }

        let span = info_span!(parent: &self.span, "resolve", alias = %alias);

        async {
            let url = self.store.get_url(alias).await?;
            debug!(url = %url, "alias resolved");
            Ok(url)
        }
        .instrument(span)
        .await
    }
}
