//! Business logic services for the application layer.

pub mod redirect_service;
pub mod save_service;

pub use redirect_service::RedirectService;
pub use save_service::{AliasPolicy, SaveService};
