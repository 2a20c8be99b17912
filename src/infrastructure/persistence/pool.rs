//! SQLite connection pool setup and schema migrations.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::StorageError;

/// Path value that selects a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Pool sizing for [`connect`].
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Opens the database at `path` and applies the embedded migrations.
///
/// `":memory:"` opens an in-memory database held by a single connection that is
/// never recycled; every other value is a file path whose parent directory is
/// created if missing.
///
/// # Errors
///
/// Returns [`StorageError::Database`] if the database cannot be opened and
/// [`StorageError::Migration`] if the schema cannot be applied.
pub async fn connect(path: &str, settings: PoolSettings) -> Result<SqlitePool, StorageError> {
    let pool = if path == IN_MEMORY {
        let options = SqliteConnectOptions::new().in_memory(true);

        SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(settings.acquire_timeout)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(path = %parent.display(), error = %e, "failed to create storage directory");
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect_with(options)
            .await?
    };

    sqlx::migrate!("./migrations").run(&pool).await?;

    info!(path = %path, "storage opened");
    Ok(pool)
}
