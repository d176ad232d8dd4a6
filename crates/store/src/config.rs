//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPSYNC_API_BASE` - Base URL of the catalog backend, including any
//!   path prefix (e.g. `http://localhost:8080/api`)
//!
//! ## Optional
//! - `SHOPSYNC_TIMEOUT_SECS` - Per-request timeout in seconds (default: 10)
//! - `SHOPSYNC_CREDENTIALS_FILE` - Path for persisted credentials; omit for
//!   an in-memory session that ends with the process

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the catalog backend, without a trailing slash.
    pub api_base_url: String,
    /// Fixed per-request timeout applied by the transport.
    pub request_timeout: Duration,
    /// Where to persist the bearer token and last-known email.
    pub credentials_path: Option<PathBuf>,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup. Split out so
    /// tests can feed values without touching the process environment.
    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = lookup("SHOPSYNC_API_BASE")
            .ok_or_else(|| ConfigError::MissingEnvVar("SHOPSYNC_API_BASE".into()))?;
        url::Url::parse(&api_base_url).map_err(|err| {
            ConfigError::InvalidEnvVar("SHOPSYNC_API_BASE".into(), err.to_string())
        })?;
        let api_base_url = api_base_url.trim_end_matches('/').to_owned();

        let request_timeout = match lookup("SHOPSYNC_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar("SHOPSYNC_TIMEOUT_SECS".into(), raw)
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let credentials_path = lookup("SHOPSYNC_CREDENTIALS_FILE").map(PathBuf::from);

        Ok(Self {
            api_base_url,
            request_timeout,
            credentials_path,
        })
    }
}
