//! SQLite implementation of the URL store.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlStore;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_alias;

/// SQLite-backed URL store.
///
/// Alias uniqueness comes from the `UNIQUE` constraint on `url.alias`; inserts
/// never check for an existing row first.
#[derive(Clone)]
pub struct SqliteUrlStore {
    pool: SqlitePool,
}

impl SqliteUrlStore {
    /// Creates a new store over a connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetches the full record for `alias`, if any.
    ///
    /// Not part of [`UrlStore`]: the request path only needs the URL. This exposes
    /// the record id so callers can verify that a rejected save left the existing
    /// record untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT id, alias, url FROM url WHERE alias = ?",
        )
        .bind(alias)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(id, alias, url)| UrlRecord::new(id, alias, url)))
    }

    /// Closes the underlying pool, waiting for checked-out connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UrlStore for SqliteUrlStore {
    async fn save(&self, alias: &str, url: &str) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
            .bind(alias)
            .bind(url)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if is_unique_violation_on_alias(&e) => Err(AppError::alias_exists(alias)),
            Err(e) => Err(e.into()),
        }
    }

    async fn get_url(&self, alias: &str) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(alias))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
