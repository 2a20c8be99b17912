//! SQLite persistence.
//!
//! - [`pool`] - Pool construction and embedded migrations
//! - [`SqliteUrlStore`] - [`crate::domain::repositories::UrlStore`] over SQLite

pub mod pool;
pub mod sqlite_url_store;

pub use pool::{IN_MEMORY, PoolSettings, connect};
pub use sqlite_url_store::SqliteUrlStore;
