//! Application layer services implementing business logic.
//!
//! Services consume the storage trait and provide a small API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::save_service::SaveService`] - URL validation, alias resolution and insert
//! - [`services::redirect_service::RedirectService`] - Alias lookup

pub mod services;
