//! Storage capability for alias-to-URL mappings.

use crate::error::AppError;
use async_trait::async_trait;

/// Persistent mapping from alias to URL.
///
/// Implementations must enforce alias uniqueness inside the storage engine
/// (a constraint violation, not a read-then-insert check), so that concurrent
/// saves of the same alias resolve with exactly one winner.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlStore`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Inserts a new record and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasExists`] if the alias is already stored; the
    /// existing record is left untouched.
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn save(&self, alias: &str, url: &str) -> Result<i64, AppError>;

    /// Looks up the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this alias.
    /// Returns [`AppError::Storage`] on database errors.
    async fn get_url(&self, alias: &str) -> Result<String, AppError>;

    /// Checks that the backing store answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
