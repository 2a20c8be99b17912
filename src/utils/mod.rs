//! Utility functions for alias generation, URL validation, and database errors.
//!
//! - [`alias_generator`] - Random alias generation and custom alias validation
//! - [`url_validator`] - Target URL checks
//! - [`db_error`] - SQLx error classification

pub mod alias_generator;
pub mod db_error;
pub mod url_validator;
