//! Library configuration: service endpoint and storage locations.
//!
//! The presentation layer builds one `Config` at startup and uses it to
//! construct the flow collaborators. `HABITAUTH_BASE_URL` overrides the
//! default endpoint, which is how integration environments point the client
//! at a staging service.

use std::path::PathBuf;

use thiserror::Error;

/// Application name used for data directory and keychain entries
const APP_NAME: &str = "habitauth";

/// Default base URL of the habit tracker service
const DEFAULT_BASE_URL: &str = "https://api.habittracker.app";

/// Environment variable overriding the service base URL
const BASE_URL_ENV: &str = "HABITAUTH_BASE_URL";

/// Token record file name inside the data directory
const TOKEN_FILE: &str = "token.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a data directory for this platform")]
    NoDataDir,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the auth service, without a trailing slash.
    pub base_url: String,
    /// Path of the persisted encrypted token record.
    pub token_path: PathBuf,
    /// Keychain service name under which the encryption key is stored.
    pub keyring_service: String,
}

impl Config {
    /// Build a config with explicit endpoint and storage locations.
    pub fn new(base_url: impl Into<String>, token_path: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            token_path: token_path.into(),
            keyring_service: APP_NAME.to_string(),
        }
    }

    /// Build the default config, honoring `HABITAUTH_BASE_URL` if set.
    pub fn load() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
        Ok(Self::new(base_url, data_dir.join(APP_NAME).join(TOKEN_FILE)))
    }
}
