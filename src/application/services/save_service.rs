//! URL save service: validation, alias resolution and insert.

use std::sync::Arc;

use tracing::{Instrument, Span, debug, info, info_span, warn};

use crate::domain::repositories::UrlStore;
use crate::error::{AppError, StorageError};
use crate::utils::alias_generator::{
    AliasGenerator, DEFAULT_ALIAS_LENGTH, MAX_ALIAS_LENGTH, is_reserved_alias,
    validate_custom_alias,
};
use crate::utils::url_validator::validate_url;

/// Default bound on store attempts for generated aliases.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Shape of generated aliases and the collision retry bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasPolicy {
    /// Length of generated aliases (1..=[`MAX_ALIAS_LENGTH`]).
    pub length: usize,
    /// Store attempts before giving up with [`StorageError::AliasSpaceExhausted`].
    pub max_attempts: u32,
}

impl AliasPolicy {
    /// Creates a policy, rejecting values that could never produce an alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `length` is outside 1..=64 or
    /// `max_attempts` is zero.
    pub fn new(length: usize, max_attempts: u32) -> Result<Self, AppError> {
        if length == 0 || length > MAX_ALIAS_LENGTH {
            return Err(AppError::validation(format!(
                "alias length must be between 1 and {MAX_ALIAS_LENGTH}, got {length}"
            )));
        }

        if max_attempts == 0 {
            return Err(AppError::validation("alias max attempts must be at least 1"));
        }

        Ok(Self {
            length,
            max_attempts,
        })
    }
}

impl Default for AliasPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_ALIAS_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Service for saving URLs under unique aliases.
///
/// Either persists exactly one record and returns its alias, or persists nothing.
pub struct SaveService {
    store: Arc<dyn UrlStore>,
    generator: Arc<dyn AliasGenerator>,
    policy: AliasPolicy,
    span: Span,
}

impl SaveService {
    /// Creates a save service logging under `span`.
    pub fn new(
        store: Arc<dyn UrlStore>,
        generator: Arc<dyn AliasGenerator>,
        policy: AliasPolicy,
        span: Span,
    ) -> Self {
        Self {
            store,
            generator,
            policy,
            span,
        }
    }

    /// Saves `url` and returns the alias it is reachable under.
    ///
    /// # Alias Resolution
    ///
    /// - With `custom_alias`, that alias is validated and inserted once; a collision
    ///   is reported as-is because the caller chose the name.
    /// - Otherwise random aliases of the configured length are tried until one
    ///   inserts, up to `max_attempts` candidates. A reserved candidate counts as
    ///   a collision and is never stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or the custom alias is invalid.
    /// Returns [`AppError::AliasExists`] if the custom alias is taken.
    /// Returns [`AppError::Storage`] on database errors or when every generated
    /// candidate collided.
    pub async fn save(&self, url: &str, custom_alias: Option<&str>) -> Result<String, AppError> {
        validate_url(url).map_err(|e| AppError::validation(e.to_string()))?;

        let span = info_span!(parent: &self.span, "save", url = %url);

        async {
            let alias = match custom_alias {
                Some(alias) => self.save_custom(url, alias).await?,
                None => self.save_generated(url).await?,
            };

            info!(alias = %alias, "url added");
            Ok(alias)
        }
        .instrument(span)
        .await
    }

    async fn save_custom(&self, url: &str, alias: &str) -> Result<String, AppError> {
        validate_custom_alias(alias)?;

        let id = self.store.save(alias, url).await.inspect_err(|e| {
            if let AppError::AliasExists { .. } = e {
                info!(alias = %alias, "custom alias already taken");
            }
        })?;

        debug!(id, "record inserted");
        Ok(alias.to_string())
    }

    async fn save_generated(&self, url: &str) -> Result<String, AppError> {
        for attempt in 1..=self.policy.max_attempts {
            let candidate = self.generator.generate(self.policy.length);

            if is_reserved_alias(&candidate) {
                debug!(alias = %candidate, attempt, "generated alias is reserved");
                continue;
            }

            match self.store.save(&candidate, url).await {
                Ok(id) => {
                    debug!(id, attempt, "record inserted");
                    return Ok(candidate);
                }
                Err(AppError::AliasExists { .. }) => {
                    debug!(alias = %candidate, attempt, "generated alias collided");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            attempts = self.policy.max_attempts,
            "gave up generating a free alias"
        );

        Err(StorageError::AliasSpaceExhausted {
            attempts: self.policy.max_attempts,
        }
        .into())
    }
}
