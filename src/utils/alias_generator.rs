//! Alias generation and validation utilities.
//!
//! Generated aliases are drawn uniformly from a fixed alphanumeric alphabet using
//! the thread-local RNG, so concurrent requests share no generator state. Uniqueness
//! is not guaranteed here; the store rejects collisions and the save service retries.

use crate::error::AppError;
use rand::Rng;

/// Default alphabet: ASCII upper- and lowercase letters plus digits.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of generated aliases.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Longest alias accepted, generated or custom.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would shadow service routes.
const RESERVED_ALIASES: &[&str] = &["health", "url"];

/// Source of candidate aliases.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Returns a random alias of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Uniform random generator over a fixed alphabet.
#[derive(Debug, Clone)]
pub struct RandomAliasGenerator {
    alphabet: Vec<char>,
}

impl RandomAliasGenerator {
    /// Creates a generator over `alphabet`.
    ///
    /// Duplicate characters are kept as given and therefore weigh more.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the alphabet is empty or holds anything
    /// but ASCII letters and digits, since generated aliases must pass the same
    /// checks as custom ones.
    pub fn with_alphabet(alphabet: &str) -> Result<Self, AppError> {
        if alphabet.is_empty() {
            return Err(AppError::validation("alias alphabet must not be empty"));
        }

        if !is_alphanumeric_alias(alphabet) {
            return Err(AppError::validation(
                "alias alphabet must contain only ASCII letters and digits",
            ));
        }

        Ok(Self {
            alphabet: alphabet.chars().collect(),
        })
    }
}

impl Default for RandomAliasGenerator {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        let mut rng = rand::rng();

        (0..length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }
}

/// Returns true if `alias` would be shadowed by a fixed route.
pub fn is_reserved_alias(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}

/// Returns true if every character of `alias` is ASCII alphanumeric.
pub fn is_alphanumeric_alias(alias: &str) -> bool {
    !alias.is_empty() && alias.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validates a caller-chosen alias.
///
/// # Rules
///
/// - Non-empty, at most [`MAX_ALIAS_LENGTH`] characters
/// - ASCII letters and digits only
/// - Not a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() {
        return Err(AppError::validation("field alias is a required field"));
    }

    if alias.len() > MAX_ALIAS_LENGTH || !is_alphanumeric_alias(alias) {
        return Err(AppError::validation("field alias is not valid"));
    }

    if is_reserved_alias(alias) {
        return Err(AppError::validation("field alias is reserved"));
    }

    Ok(())
}
