//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export APP_ENV="prod"
//! export STORAGE_PATH="./storage/storage.db"
//! export LISTEN="0.0.0.0:8080"
//! ```
//!
//! ## Required Variables
//!
//! - `STORAGE_PATH` - SQLite database file, or `:memory:`
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `local`); selects logging defaults
//! - `LISTEN` - Bind address (default: `localhost:8080`)
//! - `HTTP_TIMEOUT_SECONDS` - Per-request timeout (default: 4)
//! - `SHUTDOWN_TIMEOUT_SECONDS` - Grace period for in-flight requests (default: 10)
//! - `RUST_LOG` - Log filter (default: `debug`, or `info` in `prod`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text` in `local`, `json` otherwise)
//! - `ALIAS_LENGTH` - Generated alias length (default: 6)
//! - `ALIAS_MAX_ATTEMPTS` - Collision retries for generated aliases (default: 10)
//! - `ALIAS_ALPHABET` - Characters generated aliases are drawn from (default: `A-Za-z0-9`)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `DB_ACQUIRE_TIMEOUT` - Pool acquire timeout in seconds (default: 5)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::AliasPolicy;
use crate::infrastructure::persistence::PoolSettings;
use crate::utils::alias_generator::{
    DEFAULT_ALPHABET, MAX_ALIAS_LENGTH, RandomAliasGenerator, is_alphanumeric_alias,
};

/// Deployment environment; picks logging defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Local,
    Dev,
    Prod,
}

impl AppEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Local => "local",
            AppEnv::Dev => "dev",
            AppEnv::Prod => "prod",
        }
    }

    /// Log format used when `LOG_FORMAT` is unset.
    pub fn default_log_format(&self) -> &'static str {
        match self {
            AppEnv::Local => "text",
            AppEnv::Dev | AppEnv::Prod => "json",
        }
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            AppEnv::Local | AppEnv::Dev => "debug",
            AppEnv::Prod => "info",
        }
    }
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(AppEnv::Local),
            "dev" => Ok(AppEnv::Dev),
            "prod" => Ok(AppEnv::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub storage_path: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Per-request timeout in seconds (`HTTP_TIMEOUT_SECONDS`, default: 4).
    pub http_timeout_seconds: u64,
    /// Time in-flight requests get to finish after a shutdown signal
    /// (`SHUTDOWN_TIMEOUT_SECONDS`, default: 10).
    pub shutdown_timeout_seconds: u64,
    pub alias_length: usize,
    pub alias_max_attempts: u32,
    /// ASCII letters and digits only (`ALIAS_ALPHABET`, default: all 62).
    pub alias_alphabet: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_ACQUIRE_TIMEOUT`, default: 5).
    pub db_acquire_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STORAGE_PATH` is missing or `APP_ENV` is unknown.
    pub fn from_env() -> Result<Self> {
        let app_env = env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .parse::<AppEnv>()?;

        let storage_path = env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "localhost:8080".to_string());
        let log_level =
            env::var("RUST_LOG").unwrap_or_else(|_| app_env.default_log_level().to_string());
        let log_format =
            env::var("LOG_FORMAT").unwrap_or_else(|_| app_env.default_log_format().to_string());
        let alias_alphabet =
            env::var("ALIAS_ALPHABET").unwrap_or_else(|_| DEFAULT_ALPHABET.to_string());

        Ok(Self {
            env: app_env,
            storage_path,
            listen_addr,
            log_level,
            log_format,
            http_timeout_seconds: parse_or("HTTP_TIMEOUT_SECONDS", 4),
            shutdown_timeout_seconds: parse_or("SHUTDOWN_TIMEOUT_SECONDS", 10),
            alias_length: parse_or("ALIAS_LENGTH", 6),
            alias_max_attempts: parse_or("ALIAS_MAX_ATTEMPTS", 10),
            alias_alphabet,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 5),
            db_acquire_timeout: parse_or("DB_ACQUIRE_TIMEOUT", 5),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending variable.
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.http_timeout_seconds == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.alias_length == 0 || self.alias_length > MAX_ALIAS_LENGTH {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 1 and {}, got {}",
                MAX_ALIAS_LENGTH,
                self.alias_length
            );
        }

        if self.alias_max_attempts == 0 {
            anyhow::bail!("ALIAS_MAX_ATTEMPTS must be at least 1");
        }

        if !is_alphanumeric_alias(&self.alias_alphabet) {
            anyhow::bail!(
                "ALIAS_ALPHABET must be non-empty ASCII letters and digits, got '{}'",
                self.alias_alphabet
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_acquire_timeout == 0 {
            anyhow::bail!("DB_ACQUIRE_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Alias shape and retry bound for the save service.
    ///
    /// # Errors
    ///
    /// Returns an error if the alias settings are out of range.
    pub fn alias_policy(&self) -> Result<AliasPolicy> {
        AliasPolicy::new(self.alias_length, self.alias_max_attempts)
            .context("invalid alias configuration")
    }

    /// Random alias generator over the configured alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is empty or not alphanumeric.
    pub fn alias_generator(&self) -> Result<RandomAliasGenerator> {
        RandomAliasGenerator::with_alphabet(&self.alias_alphabet)
            .context("invalid ALIAS_ALPHABET")
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_acquire_timeout),
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env.as_str());
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Aliases: length {}, max attempts {}, alphabet of {} characters",
            self.alias_length,
            self.alias_max_attempts,
            self.alias_alphabet.len()
        );
    }
}

/// Reads `name` and parses it, falling back to `default` when unset or unparsable.
fn parse_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
