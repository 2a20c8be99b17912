//! HTTP middleware for request processing.
//!
//! Provides request-ID tagging and access logging.

pub mod request_id;
pub mod tracing;
