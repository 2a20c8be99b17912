//! DTOs for the save endpoint.

use crate::api::dto::envelope::Envelope;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom alias validation.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]*$").unwrap());

/// Request to save a URL, optionally under a chosen alias.
///
/// A missing `url` deserializes as empty so it is reported as a required field
/// rather than as a decoding failure.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"), url)]
    pub url: String,

    #[serde(default)]
    #[validate(length(max = 64), regex(path = "*ALIAS_REGEX"))]
    pub alias: Option<String>,
}

impl SaveRequest {
    /// The requested alias, treating an empty string as absent.
    pub fn custom_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|alias| !alias.is_empty())
    }
}

/// Successful save: `{"status":"OK","alias":"..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            envelope: Envelope::ok(),
            alias,
        }
    }
}
