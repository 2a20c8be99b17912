//! # Alias Shortener
//!
//! A small URL shortening service built with Axum and SQLite: it saves URLs under
//! short, unique aliases and redirects aliases back to their URLs.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record and the storage trait
//! - **Application Layer** ([`application`]) - Save and redirect services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Guarantees
//!
//! - Alias uniqueness is enforced by the store's `UNIQUE` constraint, so concurrent
//!   saves of the same alias have exactly one winner
//! - Generated aliases are retried on collision up to a configured bound
//! - Records are append-only
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! cargo run
//!
//! curl -X POST localhost:8080/url -d '{"url":"https://example.com"}'
//! # {"status":"OK","alias":"a1B2c3"}
//! curl -i localhost:8080/a1B2c3
//! # HTTP/1.1 302 Found
//! # location: https://example.com
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AliasPolicy, RedirectService, SaveService};
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::UrlStore;
    pub use crate::error::{AppError, StorageError};
    pub use crate::state::AppState;
}
